//! Wobble path: cosine-drift downwards, wrapping back to the top.

use kurbo::{Point, Size};
use rand::Rng;

/// Per-tick vertical drop.
const DROP: f64 = 5.0;
/// Phase accumulated per tick; larger than the falling path's, so the
/// sideways motion is visibly jerkier.
const PHASE_STEP: f64 = 0.9;
/// Upper bound (exclusive) for the random horizontal amplitude.
const MAX_AMPLITUDE: f64 = 10.0;

/// Like the falling path but with a cosine drift, a tighter amplitude
/// and a faster phase.
#[derive(Debug, Clone)]
pub struct WobblePath {
    amplitude: f64,
    phase: f64,
}

impl WobblePath {
    /// Create a path with a random amplitude in `[0, 10)`.
    pub fn new() -> Self {
        Self::with_amplitude(rand::thread_rng().gen_range(0.0..MAX_AMPLITUDE))
    }

    /// Create a path with an explicit amplitude.
    pub fn with_amplitude(amplitude: f64) -> Self {
        Self {
            amplitude,
            phase: 0.0,
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Advance one tick; wrap order matches the falling path.
    pub fn advance(&mut self, position: &mut Point, bounds: Size) {
        self.phase += PHASE_STEP;
        position.x += (self.amplitude * self.phase.cos()).round();
        position.y += DROP;
        if position.y > bounds.height {
            position.y = 0.0;
        }
    }
}

impl Default for WobblePath {
    fn default() -> Self {
        Self::new()
    }
}
