//! Engine error types
//!
//! Per-node and per-variable failures never surface here; they are logged
//! and counted in the [`LinkReport`](crate::LinkReport). Only failures that
//! prevent a run from starting are errors.

use thiserror::Error;
use varbind_core::HostError;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The chosen collection no longer exists
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// Listing the collection failed
    #[error(transparent)]
    Host(#[from] HostError),

    #[error("Unknown link strategy: {0} (expected \"value\" or \"inferred\")")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
