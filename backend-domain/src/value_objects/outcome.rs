// Outcome wrappers
// Distinguish "nothing there" from "could not look" for non-critical store calls

use serde::{Deserialize, Serialize};

/// Result of a write whose failure must never abort the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum BestEffort<T> {
    Done(T),
    /// No credentials for this write; nothing was attempted.
    Unavailable,
    /// The write was attempted and failed. Carries the cause for logging only.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Store,
    Demo,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub source: DataSource,
}

impl<T> Listing<T> {
    pub fn new(items: Vec<T>, source: DataSource) -> Self {
        Self { items, source }
    }
}

