//! Motion paths: the per-tick position update algorithms.
//!
//! Every shape owns exactly one [`MotionPath`]. A path only sees the
//! fields it is handed — position, extent and the usable area — so paths
//! are testable without a shape around them.

mod boundary;
mod falling;
mod wobble;

pub use boundary::{BoundaryPath, Direction};
pub use falling::FallingPath;
pub use wobble::WobblePath;

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Selects which motion algorithm a shape uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PathKind {
    /// Bounce around the four edges of the usable area.
    #[default]
    Boundary,
    /// Sine-drift downwards, wrapping back to the top.
    Falling,
    /// Cosine-drift downwards, wrapping back to the top.
    Wobble,
}

impl PathKind {
    /// Get display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            PathKind::Boundary => "Boundary",
            PathKind::Falling => "Falling",
            PathKind::Wobble => "Wobble",
        }
    }

    /// Get all available path kinds.
    pub fn all() -> &'static [PathKind] {
        &[PathKind::Boundary, PathKind::Falling, PathKind::Wobble]
    }
}

/// One active motion algorithm with its accumulated state.
#[derive(Debug, Clone)]
pub enum MotionPath {
    Boundary(BoundaryPath),
    Falling(FallingPath),
    Wobble(WobblePath),
}

impl MotionPath {
    /// Build a fresh path of the requested kind with randomized
    /// parameters.
    pub fn new(kind: PathKind) -> Self {
        match kind {
            PathKind::Boundary => MotionPath::Boundary(BoundaryPath::new(10, 10)),
            PathKind::Falling => MotionPath::Falling(FallingPath::new()),
            PathKind::Wobble => MotionPath::Wobble(WobblePath::new()),
        }
    }

    pub fn kind(&self) -> PathKind {
        match self {
            MotionPath::Boundary(_) => PathKind::Boundary,
            MotionPath::Falling(_) => PathKind::Falling,
            MotionPath::Wobble(_) => PathKind::Wobble,
        }
    }

    /// Advance the position by one tick.
    ///
    /// Never fails; positions are clamped or wrapped rather than
    /// rejected, even when `bounds` has shrunk below `extent`.
    pub fn advance(&mut self, position: &mut Point, extent: Size, bounds: Size) {
        match self {
            MotionPath::Boundary(path) => path.advance(position, extent, bounds),
            MotionPath::Falling(path) => path.advance(position, bounds),
            MotionPath::Wobble(path) => path.advance(position, bounds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matches_kind() {
        for &kind in PathKind::all() {
            assert_eq!(MotionPath::new(kind).kind(), kind);
        }
    }

    #[test]
    fn test_dispatch_moves_position() {
        let mut path = MotionPath::Boundary(BoundaryPath::with_deltas(2.0, 3.0));
        let mut position = Point::new(50.0, 50.0);
        path.advance(&mut position, Size::new(10.0, 10.0), Size::new(500.0, 500.0));
        assert_eq!(position, Point::new(50.0, 53.0));
    }

    #[test]
    fn test_boundary_stays_in_slack_bounds() {
        let bounds = Size::new(300.0, 200.0);
        let extent = Size::new(40.0, 30.0);
        let mut path = MotionPath::Boundary(BoundaryPath::with_deltas(7.0, 9.0));
        let mut position = Point::new(100.0, 60.0);

        for _ in 0..5_000 {
            path.advance(&mut position, extent, bounds);
            assert!(position.x >= -1.0 && position.x <= bounds.width - extent.width);
            assert!(position.y >= -1.0 && position.y <= bounds.height - extent.height);
        }
    }
}
