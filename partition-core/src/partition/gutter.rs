//! Gutter drag controller
//!
//! Turns pointer movement over a gutter into resize actions. While a drag
//! is active every pointer position is converted into a percentage along
//! the parent's split axis, snapped to the nearest snap point when close
//! enough, and emitted as a resize of the parent's first child.

use super::geometry::{Point, Rect};
use super::store::PartitionAction;
use super::tree::Partition;
use super::types::{PartitionId, SplitDirection};

/// Default snap points in percent.
pub const DEFAULT_SNAP_POINTS: [f64; 3] = [25.0, 50.0, 75.0];

/// Default snap distance in percent.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 5.0;

/// Snap points and the distance within which a size jumps to them.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapPolicy {
    /// Sizes that attract the divider
    pub points: Vec<f64>,
    /// Maximum distance (exclusive) at which a size snaps
    pub threshold: f64,
}

impl Default for SnapPolicy {
    fn default() -> Self {
        Self {
            points: DEFAULT_SNAP_POINTS.to_vec(),
            threshold: DEFAULT_SNAP_THRESHOLD,
        }
    }
}

impl SnapPolicy {
    /// Creates a policy from explicit points and threshold.
    #[must_use]
    pub fn new(points: Vec<f64>, threshold: f64) -> Self {
        Self { points, threshold }
    }

    /// A policy that never snaps.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Vec::new(), 0.0)
    }

    /// Returns the snapped size.
    ///
    /// The nearest point wins; on a tie the earlier point is kept. The size
    /// snaps only when strictly closer than the threshold.
    #[must_use]
    pub fn apply(&self, size: f64) -> f64 {
        let nearest = self.points.iter().copied().reduce(|best, candidate| {
            if (candidate - size).abs() < (best - size).abs() {
                candidate
            } else {
                best
            }
        });
        match nearest {
            Some(point) if (point - size).abs() < self.threshold => point,
            _ => size,
        }
    }
}

/// Converts a pointer position into a percentage of `rect` along the axis
/// a split in `direction` divides.
///
/// Returns `None` for a rectangle with no extent along that axis.
#[must_use]
pub fn pointer_to_percent(direction: SplitDirection, rect: Rect, point: Point) -> Option<f64> {
    let (offset, extent) = match direction {
        SplitDirection::Vertical => (point.x - rect.x, rect.width),
        SplitDirection::Horizontal => (point.y - rect.y, rect.height),
    };
    if extent > 0.0 && extent.is_finite() {
        Some(offset / extent * 100.0)
    } else {
        None
    }
}

/// An active drag on the gutter of one internal node.
#[derive(Debug, Clone, PartialEq)]
pub struct GutterDrag {
    /// The internal node whose gutter is held
    parent: PartitionId,
    /// The child that receives the size
    first_child: PartitionId,
    /// Direction of the parent's split
    direction: SplitDirection,
    /// The parent's rectangle at the start of the drag
    rect: Rect,
}

impl GutterDrag {
    /// Starts a drag on the gutter of `parent`, laid out in `rect`.
    ///
    /// Returns `None` if `parent` is not an internal node of `root`.
    #[must_use]
    pub fn begin(root: &Partition, parent: PartitionId, rect: Rect) -> Option<Self> {
        let node = root.find(parent)?;
        let split = node.as_split()?;
        Some(Self {
            parent,
            first_child: split.first.id,
            direction: split.direction,
            rect,
        })
    }

    /// Returns the internal node being resized.
    #[must_use]
    pub const fn parent(&self) -> PartitionId {
        self.parent
    }

    /// Returns the child whose size the drag sets.
    #[must_use]
    pub const fn target(&self) -> PartitionId {
        self.first_child
    }

    /// Returns the direction of the parent's split.
    #[must_use]
    pub const fn direction(&self) -> SplitDirection {
        self.direction
    }

    /// Converts a pointer movement into a resize action.
    ///
    /// Returns `None` when the parent's rectangle has no extent.
    #[must_use]
    pub fn update(&self, point: Point, policy: &SnapPolicy) -> Option<PartitionAction> {
        let raw = pointer_to_percent(self.direction, self.rect, point)?;
        Some(PartitionAction::Resize {
            target: self.first_child,
            size: policy.apply(raw),
        })
    }
}
