// src/context.rs
use crate::state::WorldState;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Transaction-scoped handle passed into every ledger operation.
///
/// Carries the world-state capability plus the identity of the logical
/// invocation it belongs to. Construct one per logical invocation; clones
/// share the same underlying store and identity.
#[derive(Clone)]
pub struct TransactionContext {
    tx_id: Uuid,
    timestamp: DateTime<Utc>,
    state: Arc<dyn WorldState>,
}

impl TransactionContext {
    pub fn new(state: Arc<dyn WorldState>) -> Self {
        Self {
            tx_id: Uuid::now_v7(),
            timestamp: Utc::now(),
            state,
        }
    }

    pub fn tx_id(&self) -> Uuid {
        self.tx_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn state(&self) -> &dyn WorldState {
        self.state.as_ref()
    }
}
