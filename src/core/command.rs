use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Rejected {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Other {
        message: String,
        reason_code: Option<String>,
    },
}

impl std::error::Error for CommandError {}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::DuplicateKey { message } => {
                write!(f, "duplicate key: {}", message)
            }
            CommandError::NotFound { message } => {
                write!(f, "not found: {}", message)
            }
            CommandError::Rejected { message, reason_code, .. } => {
                write!(f, "rejected: {} {:?}", message, reason_code)
            }
            CommandError::Serialization { message } => {
                write!(f, "serialization: {}", message)
            }
            CommandError::Validation { message, reason_code } => {
                write!(f, "validation: {} {:?}", message, reason_code)
            }
            CommandError::Other { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        let retryable = other.retryable();
        match other {
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::NoStockAvailable { message } => {
                CommandError::Rejected { message, reason_code: Some("NoStockAvailable".to_string()), retryable }
            }
            LibraryError::AlreadyReturned { message } => {
                CommandError::Rejected { message, reason_code: Some("AlreadyReturned".to_string()), retryable }
            }
            LibraryError::NothingToUndo { message } => {
                CommandError::Rejected { message, reason_code: Some("NothingToUndo".to_string()), retryable }
            }
            LibraryError::UndoFailed { message, reason_code } => {
                CommandError::Rejected { message, reason_code, retryable }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Other { message, reason_code }
            }
        }
    }
}
