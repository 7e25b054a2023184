//! Error types for partition parsing and lookups
//!
//! The edit operations themselves never fail: an unknown target is a
//! silent no-op. These errors cover the edges around the tree, such as
//! parsing user input and looking nodes up by ID.

use super::types::PartitionId;

/// Errors that can occur around partition operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    /// The text is not a valid split direction.
    #[error("invalid split direction: {0} (expected vertical or horizontal)")]
    InvalidDirection(String),

    /// The text is not a valid partition ID.
    #[error("invalid partition id: {0}")]
    InvalidId(String),

    /// The text is not a valid `#rrggbb` color.
    #[error("invalid color: {0} (expected #rrggbb)")]
    InvalidColor(String),

    /// The text is not a valid size percentage.
    #[error("invalid size: {0}")]
    InvalidSize(String),

    /// The specified node was not found in the tree.
    #[error("partition not found: {0}")]
    NodeNotFound(PartitionId),

    /// Two nodes in the same tree share an ID.
    #[error("duplicate partition id in tree: {0}")]
    DuplicateId(PartitionId),
}
