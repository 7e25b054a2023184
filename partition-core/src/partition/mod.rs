//! Partition layout module
//!
//! This module provides a recursively splittable rectangular layout: a
//! binary space-partition tree whose leaves are the visible regions.
//!
//! # Architecture
//!
//! - **Immutable snapshots**: every edit produces a new root and shares
//!   untouched subtrees with the previous one
//! - **Strict binary shape**: a node has no children or exactly two
//! - **Silent misses**: editing an unknown ID leaves the tree as it was
//! - **Never empty**: removing the last node yields a fresh leaf
//!
//! # Module Structure
//!
//! - `types` - Core type definitions (`PartitionId`, `Color`, `SplitDirection`)
//! - `tree` - Tree structure (`Partition`, `PartitionKind`, `SplitNode`)
//! - `edit` - The split, remove and resize algorithms
//! - `store` - Current-root holder and dispatcher (`PartitionStore`)
//! - `color` - Color sources (`ColorPool`, `RandomColors`)
//! - `geometry` - Leaf and gutter rectangles for renderers
//! - `gutter` - Pointer drag to resize conversion with snapping
//! - `error` - Error types (`PartitionError`)
//!
//! # Example
//!
//! ```
//! use partition_core::partition::{PartitionStore, SplitDirection};
//!
//! let mut store = PartitionStore::new();
//!
//! // Initially there is a single leaf
//! assert!(store.current_root().is_leaf());
//!
//! // Split it side by side
//! let root_id = store.current_root().id;
//! store.split(root_id, SplitDirection::Vertical);
//! assert_eq!(store.current_root().leaf_count(), 2);
//!
//! // Removing the root always leaves one fresh leaf behind
//! store.remove(root_id);
//! assert_eq!(store.current_root().leaf_count(), 1);
//! ```

mod color;
pub mod edit;
mod error;
pub mod geometry;
pub mod gutter;
mod store;
mod tree;
mod types;

pub use color::{ColorPool, ColorSource, DEFAULT_PALETTE, RandomColors};
pub use error::PartitionError;
pub use geometry::{
    GutterRegion, LayoutOptions, LeafRegion, PartitionLayout, Point, Rect, compute_layout,
    node_rect,
};
pub use gutter::{GutterDrag, SnapPolicy, pointer_to_percent};
pub use store::{PartitionAction, PartitionStore, SubscriptionId};
pub use tree::{DEFAULT_SIZE, Partition, PartitionKind, SplitNode};
pub use types::{Color, PartitionId, SplitDirection};
