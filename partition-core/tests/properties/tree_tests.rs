//! Property-based tests for partition tree edits
//!
//! Random sequences of split, remove and resize are applied through the
//! store and through the bare edit functions. After every step the tree
//! must keep unique IDs, the leaf/node count relation of a full binary
//! tree, and share every subtree the edit did not reach.

use std::sync::Arc;

use proptest::prelude::*;
use partition_core::partition::{
    edit, Color, ColorPool, ColorSource, Partition, PartitionAction, PartitionId, PartitionStore,
    SplitDirection,
};

// ============================================================================
// Test Strategies
// ============================================================================

/// Strategy for generating split directions
fn split_direction_strategy() -> impl Strategy<Value = SplitDirection> {
    prop_oneof![
        Just(SplitDirection::Horizontal),
        Just(SplitDirection::Vertical),
    ]
}

/// Sizes well outside 0..=100 on purpose: resize does not clamp.
fn size_strategy() -> impl Strategy<Value = f64> {
    -50.0f64..150.0
}

/// An edit addressed by position in the pre-order ID list of the current tree
#[derive(Debug, Clone)]
enum TreeOperation {
    Split {
        node_index: usize,
        direction: SplitDirection,
    },
    Remove {
        node_index: usize,
    },
    Resize {
        node_index: usize,
        size: f64,
    },
    /// An edit for an ID that is not in the tree
    Miss(u8),
}

fn tree_operation_strategy() -> impl Strategy<Value = TreeOperation> {
    prop_oneof![
        4 => (0usize..64, split_direction_strategy())
            .prop_map(|(node_index, direction)| TreeOperation::Split { node_index, direction }),
        2 => (0usize..64).prop_map(|node_index| TreeOperation::Remove { node_index }),
        3 => (0usize..64, size_strategy())
            .prop_map(|(node_index, size)| TreeOperation::Resize { node_index, size }),
        1 => (0u8..3).prop_map(TreeOperation::Miss),
    ]
}

fn tree_operations_strategy(max_ops: usize) -> impl Strategy<Value = Vec<TreeOperation>> {
    proptest::collection::vec(tree_operation_strategy(), 0..=max_ops)
}

/// Resolves an operation against the current tree into a store action
fn to_action(root: &Partition, op: &TreeOperation) -> PartitionAction {
    let ids = root.ids();
    let pick = |index: usize| ids[index % ids.len()];
    match *op {
        TreeOperation::Split {
            node_index,
            direction,
        } => PartitionAction::Split {
            target: pick(node_index),
            direction,
        },
        TreeOperation::Remove { node_index } => PartitionAction::Remove {
            target: pick(node_index),
        },
        TreeOperation::Resize { node_index, size } => PartitionAction::Resize {
            target: pick(node_index),
            size,
        },
        TreeOperation::Miss(kind) => {
            let target = PartitionId::new();
            match kind {
                0 => PartitionAction::Split {
                    target,
                    direction: SplitDirection::Vertical,
                },
                1 => PartitionAction::Remove { target },
                _ => PartitionAction::Resize { target, size: 10.0 },
            }
        }
    }
}

/// Builds a tree by applying `ops` to a fresh store
fn build_tree(ops: &[TreeOperation]) -> Arc<Partition> {
    let mut store = PartitionStore::new();
    for op in ops {
        let action = to_action(store.root(), op);
        store.dispatch(action);
    }
    store.current_root()
}

/// Asserts that every node of `before` whose subtree does not hold
/// `target` is the very same allocation in `after`, if it survived.
fn assert_untouched_shared(before: &Partition, after: &Partition, target: PartitionId) {
    before.visit(&mut |node, _| {
        if node.contains(target) {
            return;
        }
        if let Some(found) = after.find(node.id) {
            assert!(
                std::ptr::eq(found, node),
                "subtree {} was copied instead of shared",
                node.id
            );
        }
    });
}

/// Color source that counts how many colors were drawn
struct CountingColors {
    drawn: usize,
}

impl ColorSource for CountingColors {
    fn next_color(&mut self) -> Color {
        self.drawn += 1;
        Color::rgb(0, 0, 0)
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any edit sequence keeps IDs unique and the shape a full binary tree
    #[test]
    fn edits_preserve_tree_invariants(ops in tree_operations_strategy(40)) {
        let mut store = PartitionStore::new();
        for op in &ops {
            let action = to_action(store.root(), op);
            store.dispatch(action);

            let root = store.root();
            prop_assert!(root.check_invariants().is_ok());
            prop_assert_eq!(root.node_count(), 2 * root.leaf_count() - 1);
            let mut counts_ok = true;
            root.visit(&mut |node, _| {
                let n = node.children().len();
                counts_ok &= n == 0 || n == 2;
            });
            prop_assert!(counts_ok);
        }
    }

    /// The revision advances exactly when the root changes
    #[test]
    fn revision_tracks_committed_changes(ops in tree_operations_strategy(30)) {
        let mut store = PartitionStore::new();
        for op in &ops {
            let before = store.current_root();
            let revision = store.revision();
            let action = to_action(&before, op);
            let committed = store.dispatch(action);

            prop_assert_eq!(committed, !Arc::ptr_eq(&before, &store.current_root()));
            prop_assert_eq!(store.revision(), revision + u64::from(committed));
        }
    }

    /// Edits addressed to unknown IDs never change the tree
    #[test]
    fn unknown_ids_are_silent_no_ops(
        ops in tree_operations_strategy(20),
        kind in 0u8..3,
    ) {
        let root = build_tree(&ops);
        let mut store = PartitionStore::with_root(Arc::clone(&root), ColorPool::new());
        let action = to_action(&root, &TreeOperation::Miss(kind));

        prop_assert!(!store.dispatch(action));
        prop_assert!(Arc::ptr_eq(&root, &store.current_root()));
        prop_assert_eq!(store.revision(), 0);
    }

    /// Splitting a leaf replaces it by a pair of a demoted copy and a new leaf
    #[test]
    fn split_leaf_shape(
        ops in tree_operations_strategy(20),
        leaf_index in 0usize..64,
        direction in split_direction_strategy(),
    ) {
        let root = build_tree(&ops);
        let leaves = root.leaf_ids();
        let target = leaves[leaf_index % leaves.len()];
        let before = root.find(target).cloned().unwrap();

        let mut colors = ColorPool::new();
        let after = edit::split(&root, target, direction, &mut colors);

        prop_assert_eq!(after.leaf_count(), root.leaf_count() + 1);
        let node = after.find(target).unwrap();
        prop_assert_eq!(node.color, before.color);
        prop_assert_eq!(node.size, before.size);
        let split = node.as_split().unwrap();
        prop_assert_eq!(split.direction, direction);
        prop_assert!(split.first.is_leaf());
        prop_assert!(split.second.is_leaf());
        prop_assert_eq!(split.first.color, before.color);
        prop_assert!(!root.contains(split.first.id));
        prop_assert!(!root.contains(split.second.id));
        assert_untouched_shared(&root, &after, target);
    }

    /// Removing a non-root node puts the sibling, unchanged, in the parent's place
    #[test]
    fn remove_promotes_sibling(
        ops in tree_operations_strategy(30),
        node_index in 0usize..64,
    ) {
        let root = build_tree(&ops);
        prop_assume!(root.is_split());
        let ids: Vec<_> = root.ids().into_iter().filter(|id| *id != root.id).collect();
        let target = ids[node_index % ids.len()];
        let parent_id = root.find_parent(target).unwrap().id;
        let sibling = Arc::clone(root.sibling(target).unwrap());

        let after = edit::remove(&root, target).unwrap();

        prop_assert!(!after.contains(target));
        prop_assert!(!after.contains(parent_id));
        let promoted = after.find(sibling.id).unwrap();
        prop_assert!(std::ptr::eq(promoted, &*sibling));
        prop_assert_eq!(after.leaf_count(), root.leaf_count() - root.find(target).unwrap().leaf_count());
        assert_untouched_shared(&root, &after, target);
    }

    /// Removing the root through the store leaves exactly one fresh leaf
    #[test]
    fn remove_root_leaves_fresh_leaf(ops in tree_operations_strategy(20)) {
        let root = build_tree(&ops);
        let mut store = PartitionStore::with_root(Arc::clone(&root), ColorPool::new());
        store.remove(root.id);

        let after = store.root();
        prop_assert!(after.is_leaf());
        prop_assert!(!root.contains(after.id));
        prop_assert_eq!(after.size, None);
    }

    /// Resizing stores the exact value and leaves the sibling alone
    #[test]
    fn resize_is_exact(
        ops in tree_operations_strategy(30),
        node_index in 0usize..64,
        size in size_strategy(),
    ) {
        let root = build_tree(&ops);
        prop_assume!(root.is_split());
        let ids: Vec<_> = root.ids().into_iter().filter(|id| *id != root.id).collect();
        let target = ids[node_index % ids.len()];
        let sibling = Arc::clone(root.sibling(target).unwrap());

        let after = edit::resize(&root, target, size);

        prop_assert_eq!(after.find(target).unwrap().size, Some(size));
        prop_assert!(std::ptr::eq(after.find(sibling.id).unwrap(), &*sibling));
        prop_assert_eq!(after.ids(), root.ids());
        assert_untouched_shared(&root, &after, target);
    }

    /// Resizing the root is a no-op
    #[test]
    fn resize_root_is_no_op(ops in tree_operations_strategy(20), size in size_strategy()) {
        let root = build_tree(&ops);
        let after = edit::resize(&root, root.id, size);
        prop_assert!(Arc::ptr_eq(&root, &after));
    }

    /// A split that misses draws nothing from the color source
    #[test]
    fn split_miss_draws_no_color(ops in tree_operations_strategy(20)) {
        let root = build_tree(&ops);
        let mut colors = CountingColors { drawn: 0 };
        let after = edit::split(&root, PartitionId::new(), SplitDirection::Horizontal, &mut colors);
        prop_assert!(Arc::ptr_eq(&root, &after));
        prop_assert_eq!(colors.drawn, 0);
    }

    /// Snapshots taken before an edit never change
    #[test]
    fn snapshots_are_immutable(ops in tree_operations_strategy(30)) {
        let mut store = PartitionStore::new();
        let mut snapshots = Vec::new();
        for op in &ops {
            let snapshot = store.current_root();
            snapshots.push(((*snapshot).clone(), snapshot));
            let action = to_action(store.root(), op);
            store.dispatch(action);
        }
        for (copy, snapshot) in &snapshots {
            prop_assert_eq!(copy, &**snapshot);
        }
    }
}
