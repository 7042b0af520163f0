// src/asset.rs
use serde::{Deserialize, Serialize};

/// A ledger record, keyed by its caller-assigned `id`.
///
/// The serialized field names are the persisted world-state layout and must
/// stay stable across releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Size")]
    pub size: i64,
    #[serde(rename = "Owner")]
    pub owner: String,
    #[serde(rename = "AppraisedValue")]
    pub appraised_value: i64,
}

impl Asset {
    pub fn new(
        id: impl Into<String>,
        color: impl Into<String>,
        size: i64,
        owner: impl Into<String>,
        appraised_value: i64,
    ) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            size,
            owner: owner.into(),
            appraised_value,
        }
    }
}
