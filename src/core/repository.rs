use crate::core::library::LibraryResult;

pub trait Repository<Entity>: Sync + Send {
    // create an entity, failing if its key is taken
    fn create(&mut self, entity: Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> Option<&Entity>;

    // get an entity for an in-place state transition
    fn get_mut(&mut self, id: &str) -> Option<&mut Entity>;

    // delete an entity
    fn delete(&mut self, id: &str) -> LibraryResult<Entity>;

    // number of stored entities
    fn count(&self) -> usize;
}
