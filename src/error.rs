// src/error.rs
use crate::state::StateError;
use std::fmt;

#[derive(Debug)]
pub enum LedgerError {
    /// A world-state read failed inside an operation.
    ReadState(StateError),
    /// A world-state write failed inside an operation.
    PutState(StateError),
    /// No record is stored under the requested id.
    NotFound(String),
    /// Create was invoked on an id that already holds a record.
    AlreadyExists(String),
    /// A collaborator failure surfaced verbatim (delete, range open,
    /// iteration).
    Storage(StateError),
    /// A stored record failed to decode. Not locally recoverable.
    Codec(serde_json::Error),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadState(cause) => write!(f, "failed to read from world state: {}", cause),
            Self::PutState(cause) => write!(f, "failed to put to world state: {}", cause),
            Self::NotFound(id) => write!(f, "the asset {} does not exist", id),
            Self::AlreadyExists(id) => write!(f, "the asset {} already exists", id),
            Self::Storage(cause) => write!(f, "{}", cause),
            Self::Codec(err) => write!(f, "failed to decode asset record: {}", err),
        }
    }
}

impl std::error::Error for LedgerError {}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Codec(err)
    }
}
