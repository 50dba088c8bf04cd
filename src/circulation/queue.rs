use std::collections::VecDeque;
use crate::circulation::domain::model::CirculationRequest;

/// FIFO of circulation requests waiting to be applied.
#[derive(Debug, Default)]
pub struct ActionQueue {
    pending: VecDeque<CirculationRequest>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, request: CirculationRequest) {
        self.pending.push_back(request);
    }

    pub fn dequeue(&mut self) -> Option<CirculationRequest> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CirculationRequest> {
        self.pending.iter()
    }
}
