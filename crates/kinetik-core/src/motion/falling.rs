//! Falling path: sine-drift downwards, wrapping back to the top.

use kurbo::{Point, Size};
use rand::Rng;

/// Per-tick vertical drop.
const DROP: f64 = 5.0;
/// Phase accumulated per tick.
const PHASE_STEP: f64 = 0.5;
/// Upper bound (exclusive) for the random horizontal amplitude.
const MAX_AMPLITUDE: f64 = 20.0;

/// Drops a shape by a fixed amount per tick while drifting it sideways
/// on a sine wave; once it passes the bottom of the usable area it
/// restarts from the top.
#[derive(Debug, Clone)]
pub struct FallingPath {
    amplitude: f64,
    phase: f64,
}

impl FallingPath {
    /// Create a path with a random amplitude in `[0, 20)`.
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

    /// Advance one tick: accumulate phase, drift, drop, wrap.
    ///
    /// The wrap resets y to the top in the same tick that crossed the
    /// bottom, so the tick after a wrap lands at `DROP`.
    pub fn advance(&mut self, position: &mut Point, bounds: Size) {
        self.phase += PHASE_STEP;
        position.x += (self.amplitude * self.phase.sin()).round();
        position.y += DROP;
        if position.y > bounds.height {
            position.y = 0.0;
        }
    }
}

impl Default for FallingPath {
    fn default() -> Self {
        Self::new()
    }
}
