//! Pointer drags from hit testing through to committed resizes

use partition_core::partition::{
    GutterDrag, LayoutOptions, PartitionStore, Point, Rect, SnapPolicy, SplitDirection,
    compute_layout,
};

fn bounds() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 40.0)
}

#[test]
fn drag_vertical_gutter_with_snapping() {
    let mut store = PartitionStore::new();
    let root_id = store.root().id;
    store.split(root_id, SplitDirection::Vertical);
    let first = store.root().as_split().unwrap().first.id;

    let options = LayoutOptions::default();
    let layout = compute_layout(store.root(), bounds(), &options);
    // Default size 50 puts the one-cell gutter at x = 50
    let gutter = *layout.gutter_at(Point::new(50.5, 10.0)).unwrap();
    assert_eq!(gutter.parent, root_id);

    let drag = GutterDrag::begin(store.root(), gutter.parent, gutter.parent_rect).unwrap();
    let policy = SnapPolicy::default();

    // 48% snaps to 50
    let action = drag.update(Point::new(48.0, 10.0), &policy).unwrap();
    store.dispatch(action);
    assert_eq!(store.root().find(first).unwrap().size, Some(50.0));

    // 33% is out of reach of every snap point
    let action = drag.update(Point::new(33.0, 10.0), &policy).unwrap();
    store.dispatch(action);
    assert_eq!(store.root().find(first).unwrap().size, Some(33.0));

    let layout = compute_layout(store.root(), bounds(), &options);
    assert_eq!(layout.leaf_rect(first).unwrap().width, 33.0);
}

#[test]
fn drag_past_edges_is_not_clamped() {
    let mut store = PartitionStore::new();
    let root_id = store.root().id;
    store.split(root_id, SplitDirection::Horizontal);
    let first = store.root().as_split().unwrap().first.id;

    let drag = GutterDrag::begin(store.root(), root_id, bounds()).unwrap();
    let action = drag
        .update(Point::new(0.0, -8.0), &SnapPolicy::disabled())
        .unwrap();
    store.dispatch(action);
    assert_eq!(store.root().find(first).unwrap().size, Some(-20.0));

    // Geometry still fits everything inside the bounds
    let layout = compute_layout(store.root(), bounds(), &LayoutOptions::default());
    assert_eq!(layout.leaf_rect(first).unwrap().height, 0.0);
}

#[test]
fn nested_gutter_drag_targets_inner_pair() {
    let mut store = PartitionStore::new();
    let root_id = store.root().id;
    store.split(root_id, SplitDirection::Vertical);
    let second = store.root().as_split().unwrap().second.id;
    store.split(second, SplitDirection::Horizontal);

    let options = LayoutOptions::default();
    let layout = compute_layout(store.root(), bounds(), &options);
    let inner = layout
        .gutters
        .iter()
        .find(|g| g.parent == second)
        .copied()
        .unwrap();
    assert_eq!(inner.direction, SplitDirection::Horizontal);

    let drag = GutterDrag::begin(store.root(), inner.parent, inner.parent_rect).unwrap();
    let inner_first = store.root().find(second).unwrap().as_split().unwrap().first.id;
    assert_eq!(drag.target(), inner_first);

    let action = drag
        .update(Point::new(75.0, 30.0), &SnapPolicy::default())
        .unwrap();
    store.dispatch(action);
    assert_eq!(store.root().find(inner_first).unwrap().size, Some(75.0));
    // The outer pair is untouched
    assert_eq!(store.root().as_split().unwrap().first.size, None);
}
