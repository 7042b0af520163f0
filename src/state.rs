// src/state.rs
use async_trait::async_trait;
use std::fmt;

/// Failure reported by a [`WorldState`] implementation.
///
/// Adapters stringify their native errors at the boundary; the core never
/// inspects the message, it only carries or wraps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateError {
    message: String,
}

impl StateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StateError {}

/// One entry yielded by a range query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Vec<u8>,
}

/// Ordered cursor over a slice of the world state.
///
/// `close` must be invoked once iteration ends, on every exit path; a closed
/// iterator yields nothing further.
#[async_trait]
pub trait StateIterator: Send {
    fn has_next(&self) -> bool;

    async fn next(&mut self) -> Result<KeyValue, StateError>;

    async fn close(&mut self) -> Result<(), StateError>;
}

/// The key-value store underlying all record persistence.
///
/// Not owned by this crate; the hosting environment supplies an
/// implementation per transaction context. Values are opaque byte strings.
/// `get_state` distinguishes an absent key (`None`) from a present key with
/// an empty value (`Some` of zero length).
#[async_trait]
pub trait WorldState: Send + Sync {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError>;

    async fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StateError>;

    async fn delete_state(&self, key: &str) -> Result<(), StateError>;

    /// Iteration over `[start, end)` in key order. An empty bound leaves that
    /// side of the range unbounded.
    async fn get_state_by_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateIterator>, StateError>;
}
