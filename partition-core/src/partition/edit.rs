//! Structural edits on partition trees
//!
//! The three edits take the current root and return a new root. They never
//! touch existing nodes: the path from the edited node up to the root is
//! rebuilt and every other subtree is shared with the input tree, so
//! `Arc::ptr_eq` holds for anything the edit did not reach.
//!
//! An unknown target ID is not an error. The input root comes back as is.
//!
//! Rebuilding the path recurses once per level, so stack use grows with the
//! depth of the edited node. Each nested split adds a level; trees tens of
//! thousands of levels deep need a larger thread stack.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use partition_core::partition::{edit, ColorPool, Partition, SplitDirection};
//!
//! let mut colors = ColorPool::new();
//! let root = Arc::new(Partition::leaf(partition_core::partition::DEFAULT_PALETTE[0]));
//!
//! let root = edit::split(&root, root.id, SplitDirection::Vertical, &mut colors);
//! assert_eq!(root.leaf_count(), 2);
//!
//! let first = root.as_split().unwrap().first.id;
//! let root = edit::resize(&root, first, 30.0);
//! assert_eq!(root.find(first).unwrap().size, Some(30.0));
//! ```

use std::sync::Arc;

use super::color::ColorSource;
use super::tree::{Partition, PartitionKind, SplitNode};
use super::types::{PartitionId, SplitDirection};

/// Replaces the node `target` with an internal node split in `direction`.
///
/// The replacement keeps the target's ID, color and size. Its first child
/// is a copy of the target under a fresh ID with no children; its second
/// child is a new leaf colored by `colors`. Splitting an internal node
/// discards its previous subtree.
///
/// Returns the same root when `target` is not in the tree.
#[must_use]
pub fn split(
    root: &Arc<Partition>,
    target: PartitionId,
    direction: SplitDirection,
    colors: &mut dyn ColorSource,
) -> Arc<Partition> {
    split_in(root, target, direction, colors).unwrap_or_else(|| Arc::clone(root))
}

fn split_in(
    node: &Arc<Partition>,
    target: PartitionId,
    direction: SplitDirection,
    colors: &mut dyn ColorSource,
) -> Option<Arc<Partition>> {
    if node.id == target {
        let demoted = Partition {
            id: PartitionId::new(),
            color: node.color,
            size: node.size,
            kind: PartitionKind::Leaf,
        };
        let fresh = Partition::leaf(colors.next_color());
        return Some(Arc::new(Partition {
            id: node.id,
            color: node.color,
            size: node.size,
            kind: PartitionKind::Split(SplitNode::new(
                direction,
                Arc::new(demoted),
                Arc::new(fresh),
            )),
        }));
    }
    let split = node.as_split()?;
    rebuild(node, split, |child| split_in(child, target, direction, colors))
}

/// Removes the node `target` by promoting its sibling into the parent's place.
///
/// The sibling keeps its ID, color, children and size; the parent and the
/// target are both dropped.
///
/// Returns `None` when the target is the root itself, since nothing would be
/// left. Returns the same root when `target` is not in the tree.
#[must_use]
pub fn remove(root: &Arc<Partition>, target: PartitionId) -> Option<Arc<Partition>> {
    if root.id == target {
        return None;
    }
    Some(remove_in(root, target).unwrap_or_else(|| Arc::clone(root)))
}

fn remove_in(node: &Arc<Partition>, target: PartitionId) -> Option<Arc<Partition>> {
    let split = node.as_split()?;
    if let Some(sibling) = split.sibling_of(target) {
        return Some(Arc::clone(sibling));
    }
    rebuild(node, split, |child| remove_in(child, target))
}

/// Sets the size of the node `target`, which must be one child of a pair.
///
/// The value is stored exactly as given; it is not clamped and the
/// sibling's size is left alone.
///
/// Returns the same root when `target` is not in the tree or is the root.
#[must_use]
pub fn resize(root: &Arc<Partition>, target: PartitionId, size: f64) -> Arc<Partition> {
    resize_in(root, target, size).unwrap_or_else(|| Arc::clone(root))
}

fn resize_in(node: &Arc<Partition>, target: PartitionId, size: f64) -> Option<Arc<Partition>> {
    let split = node.as_split()?;
    if split.first.id == target {
        let first = Arc::new(split.first.with_size(size));
        return Some(Arc::new(node.with_children(first, Arc::clone(&split.second))));
    }
    if split.second.id == target {
        let second = Arc::new(split.second.with_size(size));
        return Some(Arc::new(node.with_children(Arc::clone(&split.first), second)));
    }
    rebuild(node, split, |child| resize_in(child, target, size))
}

/// Applies `edit` to both children and rebuilds `node` if either changed.
///
/// `edit` returns `None` for an unchanged subtree, which is then shared.
fn rebuild<F>(node: &Partition, split: &SplitNode, mut edit: F) -> Option<Arc<Partition>>
where
    F: FnMut(&Arc<Partition>) -> Option<Arc<Partition>>,
{
    let first = edit(&split.first);
    let second = edit(&split.second);
    if first.is_none() && second.is_none() {
        return None;
    }
    Some(Arc::new(node.with_children(
        first.unwrap_or_else(|| Arc::clone(&split.first)),
        second.unwrap_or_else(|| Arc::clone(&split.second)),
    )))
}
