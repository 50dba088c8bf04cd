use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // A borrow was attempted while every copy is lent out. Copies may come back later, so the
    // caller can queue the same request again.
    NoStockAvailable {
        message: String,
    },
    AlreadyReturned {
        message: String,
    },
    NothingToUndo {
        message: String,
    },
    // The compensating transition was refused, which means the record changed out-of-band since
    // the logged action was applied.
    UndoFailed {
        message: String,
        reason_code: Option<String>,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn no_stock(message: &str) -> LibraryError {
        LibraryError::NoStockAvailable { message: message.to_string() }
    }

    pub fn already_returned(message: &str) -> LibraryError {
        LibraryError::AlreadyReturned { message: message.to_string() }
    }

    pub fn nothing_to_undo(message: &str) -> LibraryError {
        LibraryError::NothingToUndo { message: message.to_string() }
    }

    pub fn undo_failed(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::UndoFailed { message: message.to_string(), reason_code }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::DuplicateKey { .. } => { false }
            LibraryError::NotFound { .. } => { false }
            LibraryError::NoStockAvailable { .. } => { true }
            LibraryError::AlreadyReturned { .. } => { false }
            LibraryError::NothingToUndo { .. } => { false }
            LibraryError::UndoFailed { .. } => { false }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl std::error::Error for LibraryError {}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NoStockAvailable { message } => {
                write!(f, "{}", message)
            }
            LibraryError::AlreadyReturned { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NothingToUndo { message } => {
                write!(f, "{}", message)
            }
            LibraryError::UndoFailed { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// ActionKind tells whether a queued circulation action lends a copy out or takes one back
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum ActionKind {
    Borrow,
    Return,
}

impl ActionKind {
    pub fn inverse(&self) -> ActionKind {
        match self {
            ActionKind::Borrow => ActionKind::Return,
            ActionKind::Return => ActionKind::Borrow,
        }
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ActionKind::Borrow => write!(f, "Borrow"),
            ActionKind::Return => write!(f, "Return"),
        }
    }
}

// LookupMode selects the index used to resolve a caller supplied key
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum LookupMode {
    ByTitle,
    ByIsbn,
}

impl Display for LookupMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LookupMode::ByTitle => write!(f, "ByTitle"),
            LookupMode::ByIsbn => write!(f, "ByIsbn"),
        }
    }
}
