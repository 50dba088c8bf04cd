use crate::circulation::domain::model::CirculationRequest;

/// LIFO of applied circulation requests. Only requests that changed a record are pushed, so the
/// top entry is always the latest successful action.
#[derive(Debug, Default)]
pub struct UndoLog {
    applied: Vec<CirculationRequest>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, request: CirculationRequest) {
        self.applied.push(request);
    }

    pub fn pop_last(&mut self) -> Option<CirculationRequest> {
        self.applied.pop()
    }

    pub fn len(&self) -> usize {
        self.applied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}
