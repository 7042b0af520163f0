// src/adapters/memory.rs
use crate::state::{KeyValue, StateError, StateIterator, WorldState};
use async_trait::async_trait;
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

/// In-memory world state backed by an ordered map.
///
/// The `BTreeMap` keeps keys sorted, so range queries yield entries in key
/// order. Range queries materialize the matching entries into a
/// [`SnapshotIterator`] before iteration, so the cursor outlives the lock.
#[derive(Clone, Default)]
pub struct MemoryWorldState {
    store: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryWorldState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorldState for MemoryWorldState {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        Ok(self.store.lock().unwrap().get(key).cloned())
    }

    async fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StateError> {
        self.store
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete_state(&self, key: &str) -> Result<(), StateError> {
        self.store.lock().unwrap().remove(key);
        Ok(())
    }

    async fn get_state_by_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateIterator>, StateError> {
        let store = self.store.lock().unwrap();
        let entries = store
            .iter()
            .filter(|(key, _)| {
                (start.is_empty() || key.as_str() >= start)
                    && (end.is_empty() || key.as_str() < end)
            })
            .map(|(key, value)| KeyValue {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();

        Ok(Box::new(SnapshotIterator::new(entries)))
    }
}

/// Ordered cursor over a materialized snapshot of range-query results.
///
/// Shared by the in-memory and postgres adapters: both fetch their matching
/// rows up front and hand them to this iterator. `close` marks the cursor
/// spent; a closed iterator yields nothing further.
pub struct SnapshotIterator {
    entries: VecDeque<KeyValue>,
    closed: bool,
}

impl SnapshotIterator {
    pub fn new(entries: Vec<KeyValue>) -> Self {
        Self {
            entries: entries.into(),
            closed: false,
        }
    }
}

#[async_trait]
impl StateIterator for SnapshotIterator {
    fn has_next(&self) -> bool {
        !self.closed && !self.entries.is_empty()
    }

    async fn next(&mut self) -> Result<KeyValue, StateError> {
        self.entries
            .pop_front()
            .ok_or_else(|| StateError::new("iterator exhausted"))
    }

    async fn close(&mut self) -> Result<(), StateError> {
        self.closed = true;
        Ok(())
    }
}
