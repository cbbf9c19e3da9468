//! Input events forwarded by the windowing layer.
//!
//! The core never talks to a window directly; the host translates its
//! mouse and resize notifications into [`SceneEvent`]s.

use crate::scene::Scene;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// An event the windowing layer delivers to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SceneEvent {
    /// A click at a point in surface coordinates.
    Clicked { position: Point },
    /// The drawing surface was resized to a new usable area.
    Resized { bounds: Size },
}

impl Scene {
    /// Route an input event to the matching scene entry point.
    pub fn handle_event(&mut self, event: SceneEvent) {
        match event {
            SceneEvent::Clicked { position } => self.on_click(position),
            SceneEvent::Resized { bounds } => self.reset_margins(bounds),
        }
    }
}
