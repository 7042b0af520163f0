// src/lib.rs
pub mod adapters;
pub mod asset;
pub mod context;
pub mod contract;
pub mod error;
pub mod state;

pub use asset::Asset;
pub use context::TransactionContext;
pub use contract::AssetLedger;
pub use error::LedgerError;
pub use state::{KeyValue, StateError, StateIterator, WorldState};
