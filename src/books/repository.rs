pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

// BookRepository is the index set over the catalog records. Every secondary lookup resolves to
// the single record owned by the primary store.
pub trait BookRepository: Repository<BookEntity> {
    fn find_by_title(&self, title: &str) -> Option<&BookEntity>;

    // records of a genre in the order they were added
    fn find_by_genre(&self, genre: &str) -> Vec<&BookEntity>;

    fn find_by_release_year(&self, year: i32) -> Vec<&BookEntity>;

    fn find_all_sorted_by_title(&self) -> Vec<&BookEntity>;

    // known genres in ascending order
    fn genres(&self) -> Vec<String>;
}
