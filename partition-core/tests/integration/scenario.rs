//! The split, resize, remove walkthrough on a single root

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use partition_core::partition::{PartitionAction, PartitionStore, SplitDirection};

#[test]
fn split_resize_remove_walkthrough() {
    let mut store = PartitionStore::new();
    let r0 = store.current_root();
    assert!(r0.is_leaf());

    store.split(r0.id, SplitDirection::Vertical);
    let root = store.current_root();
    assert_eq!(root.id, r0.id);
    assert_eq!(root.color, r0.color);
    let pair = root.as_split().unwrap();
    assert_eq!(pair.direction, SplitDirection::Vertical);
    let (a, b) = (pair.first.id, pair.second.id);
    assert_ne!(a, r0.id);
    assert_eq!(pair.first.color, r0.color);

    store.resize(a, 30.0);
    let root = store.current_root();
    let pair = root.as_split().unwrap();
    assert_eq!(pair.first.size, Some(30.0));
    assert_eq!(pair.second.size, None);

    store.remove(b);
    let root = store.current_root();
    assert_eq!(root.id, a);
    assert!(root.is_leaf());
    assert_eq!(root.size, Some(30.0));
    assert_eq!(store.revision(), 3);

    // The first snapshot was never touched
    assert!(r0.is_leaf());
    assert_eq!(r0.size, None);
}

#[test]
fn listeners_see_every_committed_root() {
    let mut store = PartitionStore::new();
    let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let subscription = store.subscribe(move |root| sink.borrow_mut().push(root.leaf_count()));

    let root_id = store.root().id;
    store.split(root_id, SplitDirection::Horizontal);
    let first = store.root().as_split().unwrap().first.id;
    store.split(first, SplitDirection::Vertical);

    // Misses do not publish
    store.remove(partition_core::partition::PartitionId::new());
    store.resize(root_id, 10.0);

    store.remove(first);
    assert_eq!(*seen.borrow(), vec![2, 3, 1]);

    assert!(store.unsubscribe(subscription));
    store.reset();
    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn dispatch_reports_commits() {
    let mut store = PartitionStore::new();
    let root_id = store.root().id;

    assert!(store.dispatch(PartitionAction::Split {
        target: root_id,
        direction: SplitDirection::Vertical,
    }));
    let before = store.current_root();
    assert!(!store.dispatch(PartitionAction::Resize {
        target: root_id,
        size: 40.0,
    }));
    assert!(Arc::ptr_eq(&before, &store.current_root()));

    assert!(store.dispatch(PartitionAction::Remove { target: root_id }));
    assert!(store.root().is_leaf());
    assert_ne!(store.root().id, root_id);
}

#[test]
fn splitting_internal_node_discards_subtree() {
    let mut store = PartitionStore::new();
    let root_id = store.root().id;
    store.split(root_id, SplitDirection::Vertical);
    let first = store.root().as_split().unwrap().first.id;
    store.split(first, SplitDirection::Horizontal);
    assert_eq!(store.root().leaf_count(), 3);

    store.split(root_id, SplitDirection::Horizontal);
    let root = store.current_root();
    assert_eq!(root.id, root_id);
    assert_eq!(root.direction(), Some(SplitDirection::Horizontal));
    assert_eq!(root.leaf_count(), 2);
    assert!(!root.contains(first));
}
