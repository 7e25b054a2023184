//! Partition store: the single source of truth for the current tree
//!
//! `PartitionStore` holds the current root and applies edits by replacing
//! it with the root returned from [`super::edit`]. Every edit runs to
//! completion and commits before the call returns; readers always see the
//! latest committed root through [`PartitionStore::current_root`].
//!
//! # Example
//!
//! ```
//! use partition_core::partition::{PartitionStore, SplitDirection};
//!
//! let mut store = PartitionStore::new();
//! let root_id = store.current_root().id;
//!
//! store.split(root_id, SplitDirection::Vertical);
//! let root = store.current_root();
//! let split = root.as_split().unwrap();
//!
//! store.resize(split.first.id, 30.0);
//! store.remove(split.second.id);
//!
//! // The resized first child is the new root
//! let root = store.current_root();
//! assert_eq!(root.id, split.first.id);
//! assert_eq!(root.size, Some(30.0));
//! ```

use std::fmt;
use std::sync::Arc;

use super::color::{ColorPool, ColorSource};
use super::edit;
use super::tree::Partition;
use super::types::{PartitionId, SplitDirection};

/// An edit expressed as a value, so it can be queued, parsed or produced
/// by an input controller before being dispatched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartitionAction {
    /// Split a node in the given direction.
    Split {
        /// Node to split
        target: PartitionId,
        /// Direction of the new gutter
        direction: SplitDirection,
    },
    /// Remove a node, promoting its sibling.
    Remove {
        /// Node to remove
        target: PartitionId,
    },
    /// Set the size share of one child of a pair.
    Resize {
        /// Node to resize
        target: PartitionId,
        /// New size in percent
        size: f64,
    },
}

impl PartitionAction {
    /// Returns the node this action targets.
    #[must_use]
    pub const fn target(&self) -> PartitionId {
        match self {
            Self::Split { target, .. } | Self::Remove { target } | Self::Resize { target, .. } => {
                *target
            }
        }
    }

    /// Returns a short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Split { .. } => "split",
            Self::Remove { .. } => "remove",
            Self::Resize { .. } => "resize",
        }
    }
}

/// Handle returned by [`PartitionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&Arc<Partition>)>;

/// Holds the current partition tree and dispatches edits against it.
pub struct PartitionStore {
    /// Latest committed root.
    root: Arc<Partition>,
    /// Colors for newly created leaves.
    colors: Box<dyn ColorSource>,
    /// Number of committed changes.
    revision: u64,
    /// Callbacks notified after each committed change.
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl PartitionStore {
    /// Creates a store with a single root leaf, colored from the default palette.
    #[must_use]
    pub fn new() -> Self {
        Self::with_colors(ColorPool::new())
    }

    /// Creates a store with a single root leaf, colored from `colors`.
    #[must_use]
    pub fn with_colors(colors: impl ColorSource + 'static) -> Self {
        let mut colors: Box<dyn ColorSource> = Box::new(colors);
        let root = Arc::new(Partition::leaf(colors.next_color()));
        Self::from_parts(root, colors)
    }

    /// Creates a store around an existing tree.
    #[must_use]
    pub fn with_root(root: Arc<Partition>, colors: impl ColorSource + 'static) -> Self {
        Self::from_parts(root, Box::new(colors))
    }

    fn from_parts(root: Arc<Partition>, colors: Box<dyn ColorSource>) -> Self {
        Self {
            root,
            colors,
            revision: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Returns a snapshot of the current root.
    ///
    /// The snapshot is immutable; later edits produce new roots and leave
    /// it untouched.
    #[must_use]
    pub fn current_root(&self) -> Arc<Partition> {
        Arc::clone(&self.root)
    }

    /// Returns the current root by reference.
    #[must_use]
    pub fn root(&self) -> &Partition {
        &self.root
    }

    /// Returns the number of committed changes so far.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Splits the node `id` in `direction`.
    pub fn split(&mut self, id: PartitionId, direction: SplitDirection) {
        let root = edit::split(&self.root, id, direction, self.colors.as_mut());
        self.commit(root, "split");
    }

    /// Removes the node `id`, promoting its sibling.
    ///
    /// Removing the root leaves a single fresh leaf.
    pub fn remove(&mut self, id: PartitionId) {
        let root = match edit::remove(&self.root, id) {
            Some(root) => root,
            None => Arc::new(Partition::leaf(self.colors.next_color())),
        };
        self.commit(root, "remove");
    }

    /// Sets the size share of the node `id`.
    pub fn resize(&mut self, id: PartitionId, size: f64) {
        let root = edit::resize(&self.root, id, size);
        self.commit(root, "resize");
    }

    /// Applies an action. Returns true if a new root was committed.
    pub fn dispatch(&mut self, action: PartitionAction) -> bool {
        let before = self.revision;
        match action {
            PartitionAction::Split { target, direction } => self.split(target, direction),
            PartitionAction::Remove { target } => self.remove(target),
            PartitionAction::Resize { target, size } => self.resize(target, size),
        }
        self.revision != before
    }

    /// Replaces the whole tree with a single fresh leaf.
    pub fn reset(&mut self) {
        let root = Arc::new(Partition::leaf(self.colors.next_color()));
        self.commit(root, "reset");
    }

    /// Registers a listener called with every newly committed root.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&Arc<Partition>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn commit(&mut self, root: Arc<Partition>, operation: &'static str) {
        if Arc::ptr_eq(&root, &self.root) {
            return;
        }
        self.root = root;
        self.revision += 1;
        tracing::debug!(
            operation,
            revision = self.revision,
            leaves = self.root.leaf_count(),
            depth = self.root.depth(),
            "Committed partition tree"
        );
        for (_, listener) in &self.listeners {
            listener(&self.root);
        }
    }
}

impl Default for PartitionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PartitionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartitionStore")
            .field("root", &self.root)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
