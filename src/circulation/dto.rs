use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::circulation::domain::model::CirculationRequest;
use crate::core::library::{LibraryError, LibraryResult};

// ProcessedAction reports what happened to one dequeued request. A failed outcome never stops the
// rest of the queue from being processed.
#[derive(Debug, PartialEq, Clone)]
pub struct ProcessedAction {
    pub request: CirculationRequest,
    pub outcome: LibraryResult<BookDto>,
}

impl ProcessedAction {
    pub fn new(request: CirculationRequest, outcome: LibraryResult<BookDto>) -> Self {
        Self {
            request,
            outcome,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.outcome.is_ok()
    }
}

// UndoneAction is the logged request that was compensated and the record state afterwards
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct UndoneAction {
    pub request: CirculationRequest,
    pub book: BookDto,
}

impl UndoneAction {
    pub fn new(request: CirculationRequest, book: BookDto) -> Self {
        Self {
            request,
            book,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum ActionStatus {
    Applied,
    Rejected,
    NotFound,
}

// ActionReport is the serializable view of a ProcessedAction
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ActionReport {
    pub request: CirculationRequest,
    pub status: ActionStatus,
    pub book: Option<BookDto>,
    pub reason: Option<String>,
}

impl From<&ProcessedAction> for ActionReport {
    fn from(other: &ProcessedAction) -> Self {
        match &other.outcome {
            Ok(book) => ActionReport {
                request: other.request.clone(),
                status: ActionStatus::Applied,
                book: Some(book.clone()),
                reason: None,
            },
            Err(err) => ActionReport {
                request: other.request.clone(),
                status: if matches!(err, LibraryError::NotFound { .. }) {
                    ActionStatus::NotFound
                } else {
                    ActionStatus::Rejected
                },
                book: None,
                reason: Some(err.to_string()),
            },
        }
    }
}
