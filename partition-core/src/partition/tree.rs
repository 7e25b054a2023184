//! Partition tree structure
//!
//! This module provides the binary tree used to represent a recursively
//! split layout. Each node is either a leaf (a rendered, splittable region)
//! or a split node holding exactly two children.
//!
//! # Tree Structure
//!
//! ```text
//! Split(vertical)            id=R
//! ├── Leaf                   id=A size=30
//! └── Split(horizontal)      id=B
//!     ├── Leaf               id=C
//!     └── Leaf               id=D
//! ```
//!
//! Children are held behind `Arc`, so the edit operations in
//! [`super::edit`] can rebuild the path to a changed node and share every
//! other subtree with the previous tree.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

use super::error::PartitionError;
use super::types::{Color, PartitionId, SplitDirection};

/// Size share the renderer assumes for a child without an explicit size.
pub const DEFAULT_SIZE: f64 = 50.0;

/// A node in the partition tree.
///
/// `size` is this node's share (in percent) of its parent's split axis.
/// `None` means "never resized" and is kept distinct from `Some(50.0)`;
/// only the renderer substitutes [`DEFAULT_SIZE`].
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Unique identifier for this node.
    pub id: PartitionId,
    /// Display color.
    pub color: Color,
    /// Share of the parent's split axis in percent, if one was ever set.
    pub size: Option<f64>,
    /// Leaf or split.
    pub kind: PartitionKind,
}

/// Whether a node is a leaf or holds two children.
#[derive(Debug, Clone, PartialEq)]
pub enum PartitionKind {
    /// A leaf region without children.
    Leaf,
    /// An internal node with exactly two children.
    Split(SplitNode),
}

/// The two children of an internal node and the direction they are laid out in.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitNode {
    /// Split direction, fixed when the node was split.
    pub direction: SplitDirection,
    /// First child (left for vertical, top for horizontal).
    pub first: Arc<Partition>,
    /// Second child (right for vertical, bottom for horizontal).
    pub second: Arc<Partition>,
}

impl SplitNode {
    /// Creates a split node from two children.
    #[must_use]
    pub fn new(direction: SplitDirection, first: Arc<Partition>, second: Arc<Partition>) -> Self {
        Self {
            direction,
            first,
            second,
        }
    }

    /// Returns the child that is not `id`, if `id` is one of the two children.
    #[must_use]
    pub fn sibling_of(&self, id: PartitionId) -> Option<&Arc<Partition>> {
        if self.first.id == id {
            Some(&self.second)
        } else if self.second.id == id {
            Some(&self.first)
        } else {
            None
        }
    }
}

impl Partition {
    /// Creates a new leaf with a fresh ID and no size.
    #[must_use]
    pub fn leaf(color: Color) -> Self {
        Self::leaf_with_id(PartitionId::new(), color)
    }

    /// Creates a new leaf with the given ID.
    #[must_use]
    pub fn leaf_with_id(id: PartitionId, color: Color) -> Self {
        Self {
            id,
            color,
            size: None,
            kind: PartitionKind::Leaf,
        }
    }

    /// Creates a new internal node with a fresh ID.
    #[must_use]
    pub fn split_node(
        color: Color,
        direction: SplitDirection,
        first: Arc<Self>,
        second: Arc<Self>,
    ) -> Self {
        Self {
            id: PartitionId::new(),
            color,
            size: None,
            kind: PartitionKind::Split(SplitNode::new(direction, first, second)),
        }
    }

    /// Returns a copy of this node carrying the given size.
    #[must_use]
    pub fn with_size(&self, size: f64) -> Self {
        Self {
            size: Some(size),
            ..self.clone()
        }
    }

    /// Returns a copy of this node with its children replaced.
    ///
    /// Only meaningful for internal nodes; a leaf is returned unchanged.
    #[must_use]
    pub(crate) fn with_children(&self, first: Arc<Self>, second: Arc<Self>) -> Self {
        match &self.kind {
            PartitionKind::Leaf => self.clone(),
            PartitionKind::Split(split) => Self {
                kind: PartitionKind::Split(SplitNode::new(split.direction, first, second)),
                ..self.clone()
            },
        }
    }

    /// Returns true if this is a leaf node.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self.kind, PartitionKind::Leaf)
    }

    /// Returns true if this is an internal node.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        matches!(self.kind, PartitionKind::Split(_))
    }

    /// Returns the split node if this is an internal node.
    #[must_use]
    pub const fn as_split(&self) -> Option<&SplitNode> {
        match &self.kind {
            PartitionKind::Leaf => None,
            PartitionKind::Split(split) => Some(split),
        }
    }

    /// Returns the split direction of an internal node.
    #[must_use]
    pub fn direction(&self) -> Option<SplitDirection> {
        self.as_split().map(|split| split.direction)
    }

    /// Returns the children: empty for a leaf, two entries otherwise.
    #[must_use]
    pub fn children(&self) -> Vec<&Arc<Self>> {
        match &self.kind {
            PartitionKind::Leaf => Vec::new(),
            PartitionKind::Split(split) => vec![&split.first, &split.second],
        }
    }

    /// Returns the size the renderer uses for this node.
    #[must_use]
    pub fn effective_size(&self, default_size: f64) -> f64 {
        self.size.unwrap_or(default_size)
    }

    // ========================================================================
    // Tree Traversal Methods
    // ========================================================================

    /// Finds any node (leaf or internal) by its ID.
    #[must_use]
    pub fn find(&self, id: PartitionId) -> Option<&Self> {
        let mut found = None;
        self.walk(&mut |node, _| {
            if node.id == id {
                found = Some(node);
                return false;
            }
            true
        });
        found
    }

    /// Finds the internal node whose direct child has the given ID.
    #[must_use]
    pub fn find_parent(&self, id: PartitionId) -> Option<&Self> {
        let mut found = None;
        self.walk(&mut |node, _| {
            let is_parent = node
                .as_split()
                .is_some_and(|split| split.first.id == id || split.second.id == id);
            if is_parent {
                found = Some(node);
            }
            !is_parent
        });
        found
    }

    /// Returns the sibling of the node with the given ID.
    #[must_use]
    pub fn sibling(&self, id: PartitionId) -> Option<&Arc<Self>> {
        self.find_parent(id)
            .and_then(Self::as_split)
            .and_then(|split| split.sibling_of(id))
    }

    /// Returns true if the tree contains a node with the given ID.
    #[must_use]
    pub fn contains(&self, id: PartitionId) -> bool {
        self.find(id).is_some()
    }

    /// Returns the IDs of all nodes in pre-order (depth-first, first child first).
    #[must_use]
    pub fn ids(&self) -> Vec<PartitionId> {
        let mut ids = Vec::new();
        self.visit(&mut |node, _| ids.push(node.id));
        ids
    }

    /// Returns the IDs of all leaves, left-to-right / top-to-bottom.
    #[must_use]
    pub fn leaf_ids(&self) -> Vec<PartitionId> {
        let mut ids = Vec::new();
        self.visit(&mut |node, _| {
            if node.is_leaf() {
                ids.push(node.id);
            }
        });
        ids
    }

    /// Calls `f` for every node in pre-order together with its depth.
    ///
    /// The walk keeps its own stack, so arbitrarily deep trees are fine.
    pub fn visit<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Self, usize),
    {
        self.walk(&mut |node, depth| {
            f(node, depth);
            true
        });
    }

    /// Pre-order walk that stops as soon as `f` returns false.
    fn walk<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Self, usize) -> bool,
    {
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            if !f(node, depth) {
                return;
            }
            if let Some(split) = node.as_split() {
                stack.push((&*split.second, depth + 1));
                stack.push((&*split.first, depth + 1));
            }
        }
    }

    /// Returns the depth of the tree. A single leaf has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        self.visit(&mut |_, depth| deepest = deepest.max(depth));
        deepest
    }

    /// Returns the number of leaves.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |node, _| count += usize::from(node.is_leaf()));
        count
    }

    /// Returns the number of nodes, leaves and internal nodes alike.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |_, _| count += 1);
        count
    }

    /// Returns the first leaf in the tree (leftmost/topmost).
    #[must_use]
    pub fn first_leaf(&self) -> &Self {
        let mut node = self;
        while let Some(split) = node.as_split() {
            node = &*split.first;
        }
        node
    }

    /// Checks the tree-wide invariants that the type system cannot express.
    ///
    /// The 0-or-2 children rule is structural; this verifies ID uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `PartitionError::DuplicateId` for the first ID seen twice.
    pub fn check_invariants(&self) -> Result<(), PartitionError> {
        let mut seen = HashSet::new();
        let mut duplicate = None;
        self.visit(&mut |node, _| {
            if !seen.insert(node.id) && duplicate.is_none() {
                duplicate = Some(node.id);
            }
        });
        match duplicate {
            Some(id) => Err(PartitionError::DuplicateId(id)),
            None => Ok(()),
        }
    }
}

impl Serialize for Partition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let fields = 3 + usize::from(self.size.is_some()) + usize::from(self.is_split());
        let mut state = serializer.serialize_struct("Partition", fields)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("color", &self.color)?;
        if let Some(size) = self.size {
            state.serialize_field("size", &size)?;
        }
        if let Some(direction) = self.direction() {
            state.serialize_field("splitDirection", &direction)?;
        }
        state.serialize_field("children", &self.children())?;
        state.end()
    }
}
