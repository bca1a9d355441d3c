//! Core error types

use thiserror::Error;

use crate::ids::NodeId;
use crate::property::BindableProperty;

/// Errors reported by a host implementation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HostError {
    /// Importing a library variable failed (network, permissions, ...)
    #[error("Variable import failed for key {key}: {reason}")]
    Import { key: String, reason: String },

    /// Library collection is no longer available
    #[error("Library collection not found: {0}")]
    LibraryNotFound(String),

    /// Node does not exist in the document
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Node does not expose the property
    #[error("Property {property} cannot be bound on node {node}")]
    Unbindable {
        node: NodeId,
        property: BindableProperty,
    },

    /// Generic host failure
    #[error("Host error: {0}")]
    Other(String),
}

/// Result type for host operations
pub type HostResult<T> = std::result::Result<T, HostError>;

/// Errors parsing a persisted collection token
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Collection token is empty")]
    Empty,

    #[error("Collection token has no id")]
    MissingId,

    #[error("Malformed collection token: {0}")]
    Malformed(#[from] serde_json::Error),
}
