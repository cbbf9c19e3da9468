//! Kinetik Render Library
//!
//! The drawing seam between the motion engine and whatever backend puts
//! pixels on screen. The engine only ever talks to a [`DrawSurface`];
//! the bundled [`RecordingSurface`] implementation captures draw calls
//! for tests and headless runs.

mod recording;
mod renderer;
mod surface;

pub use recording::{DrawCommand, RecordingSurface};
pub use renderer::{render_scene, render_shape};
pub use surface::{DrawSurface, SurfaceError, SurfaceResult, TextStyle};
