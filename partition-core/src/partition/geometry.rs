//! Layout geometry for rendering a partition tree
//!
//! Converts a tree into rectangles: one per leaf and one per gutter. The
//! first child of a pair takes its size share of the parent's extent along
//! the split axis (the renderer default applies when no size is set), the
//! gutter follows, and the second child takes whatever is left.
//!
//! The model never clamps sizes. Geometry does, so that out-of-range sizes
//! still produce rectangles inside the bounds.

use serde::Serialize;

use super::tree::{DEFAULT_SIZE, Partition};
use super::types::{PartitionId, SplitDirection};

/// A point in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns the area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if the point lies inside (left/top edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Returns the extent along the axis a split in `direction` divides.
    #[must_use]
    pub const fn extent(&self, direction: SplitDirection) -> f64 {
        match direction {
            SplitDirection::Vertical => self.width,
            SplitDirection::Horizontal => self.height,
        }
    }

    /// Splits the rectangle into (first, gutter, second) along `direction`.
    ///
    /// `percent` is the first part's share of the whole extent. It is
    /// clamped so that all three parts fit.
    #[must_use]
    pub fn divide(&self, direction: SplitDirection, percent: f64, gutter: f64) -> (Self, Self, Self) {
        let extent = self.extent(direction);
        let gutter = gutter.clamp(0.0, extent.max(0.0));
        let available = (extent - gutter).max(0.0);
        let requested = if percent.is_finite() {
            extent * percent / 100.0
        } else {
            extent * DEFAULT_SIZE / 100.0
        };
        let first = requested.clamp(0.0, available);
        let second = available - first;
        match direction {
            SplitDirection::Vertical => (
                Self::new(self.x, self.y, first, self.height),
                Self::new(self.x + first, self.y, gutter, self.height),
                Self::new(self.x + first + gutter, self.y, second, self.height),
            ),
            SplitDirection::Horizontal => (
                Self::new(self.x, self.y, self.width, first),
                Self::new(self.x, self.y + first, self.width, gutter),
                Self::new(self.x, self.y + first + gutter, self.width, second),
            ),
        }
    }
}

/// Options for [`compute_layout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Size assumed for a first child without an explicit size.
    pub default_size: f64,
    /// Thickness of the gutter between two children.
    pub gutter: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_SIZE,
            gutter: 1.0,
        }
    }
}

/// Where a leaf is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeafRegion {
    /// The leaf
    pub id: PartitionId,
    /// Its rectangle
    pub rect: Rect,
    /// Depth of the leaf in the tree
    pub depth: usize,
}

/// Where the draggable gutter of an internal node is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GutterRegion {
    /// The internal node the gutter belongs to
    pub parent: PartitionId,
    /// Direction of the parent's split
    pub direction: SplitDirection,
    /// The gutter rectangle
    pub rect: Rect,
    /// The parent's full rectangle, which drag percentages are relative to
    pub parent_rect: Rect,
}

/// The computed geometry of a whole tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PartitionLayout {
    /// Leaf rectangles in leaf order
    pub leaves: Vec<LeafRegion>,
    /// Gutter rectangles in pre-order of their parents
    pub gutters: Vec<GutterRegion>,
}

impl PartitionLayout {
    /// Returns the leaf under a point.
    #[must_use]
    pub fn leaf_at(&self, point: Point) -> Option<&LeafRegion> {
        self.leaves.iter().find(|leaf| leaf.rect.contains(point))
    }

    /// Returns the gutter under a point.
    ///
    /// Nested gutters never overlap, so at most one matches.
    #[must_use]
    pub fn gutter_at(&self, point: Point) -> Option<&GutterRegion> {
        self.gutters.iter().find(|gutter| gutter.rect.contains(point))
    }

    /// Returns the rectangle of a leaf.
    #[must_use]
    pub fn leaf_rect(&self, id: PartitionId) -> Option<Rect> {
        self.leaves.iter().find(|leaf| leaf.id == id).map(|leaf| leaf.rect)
    }
}

/// Computes leaf and gutter rectangles for the tree inside `bounds`.
#[must_use]
pub fn compute_layout(root: &Partition, bounds: Rect, options: &LayoutOptions) -> PartitionLayout {
    let mut layout = PartitionLayout::default();
    layout_node(root, bounds, 0, options, &mut layout);
    layout
}

fn layout_node(
    node: &Partition,
    rect: Rect,
    depth: usize,
    options: &LayoutOptions,
    layout: &mut PartitionLayout,
) {
    let Some(split) = node.as_split() else {
        layout.leaves.push(LeafRegion {
            id: node.id,
            rect,
            depth,
        });
        return;
    };
    let percent = split.first.effective_size(options.default_size);
    let (first, gutter, second) = rect.divide(split.direction, percent, options.gutter);
    layout.gutters.push(GutterRegion {
        parent: node.id,
        direction: split.direction,
        rect: gutter,
        parent_rect: rect,
    });
    layout_node(&split.first, first, depth + 1, options, layout);
    layout_node(&split.second, second, depth + 1, options, layout);
}

/// Returns the rectangle any node (leaf or internal) occupies.
#[must_use]
pub fn node_rect(root: &Partition, bounds: Rect, options: &LayoutOptions, id: PartitionId) -> Option<Rect> {
    if root.id == id {
        return Some(bounds);
    }
    let split = root.as_split()?;
    let percent = split.first.effective_size(options.default_size);
    let (first, _, second) = bounds.divide(split.direction, percent, options.gutter);
    node_rect(&split.first, first, options, id).or_else(|| node_rect(&split.second, second, options, id))
}
