//! Boundary path: bounce around the edges of the usable area.

use kurbo::{Point, Size};
use rand::Rng;

/// The four cardinal travel directions, cycling clockwise from `Down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Down,
    Right,
    Up,
    Left,
}

impl Direction {
    /// The next direction in the clockwise cycle.
    pub fn next(self) -> Self {
        match self {
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
        }
    }
}

/// Moves a shape along the edges of the usable area, turning clockwise
/// at each edge contact. Starts travelling downwards.
///
/// The per-tick step on each axis is fixed at construction. On hitting
/// an edge the position is clamped one unit inside the usable limit
/// (zero on the low edges) and the direction advances; the cycle never
/// terminates.
#[derive(Debug, Clone)]
pub struct BoundaryPath {
    delta_x: f64,
    delta_y: f64,
    direction: Direction,
}

impl BoundaryPath {
    /// Create a path with random integer steps in `[1, max_x]` and
    /// `[1, max_y]`.
    pub fn new(max_x: u32, max_y: u32) -> Self {
        let mut rng = rand::thread_rng();
        Self::with_deltas(
            rng.gen_range(1..=max_x.max(1)) as f64,
            rng.gen_range(1..=max_y.max(1)) as f64,
        )
    }

    /// Create a path with explicit steps.
    pub fn with_deltas(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            direction: Direction::Down,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn deltas(&self) -> (f64, f64) {
        (self.delta_x, self.delta_y)
    }

    /// Advance one tick.
    ///
    /// If `bounds` has shrunk below `extent` the usable limit goes
    /// negative and the position clamps to that negative inset instead
    /// of failing.
    pub fn advance(&mut self, position: &mut Point, extent: Size, bounds: Size) {
        let limit_x = bounds.width - extent.width;
        let limit_y = bounds.height - extent.height;

        match self.direction {
            Direction::Down => {
                position.y += self.delta_y;
                if position.y > limit_y {
                    position.y = limit_y - 1.0;
                    self.direction = self.direction.next();
                }
            }
            Direction::Right => {
                position.x += self.delta_x;
                if position.x > limit_x {
                    position.x = limit_x - 1.0;
                    self.direction = self.direction.next();
                }
            }
            Direction::Up => {
                position.y -= self.delta_y;
                if position.y < 0.0 {
                    position.y = 0.0;
                    self.direction = self.direction.next();
                }
            }
            Direction::Left => {
                position.x -= self.delta_x;
                if position.x < 0.0 {
                    position.x = 0.0;
                    self.direction = self.direction.next();
                }
            }
        }
    }
}
