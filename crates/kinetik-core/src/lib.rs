//! Kinetik Core Library
//!
//! The shape/path motion engine: shapes with kind-specific geometry,
//! the motion path algorithms that move them every tick, the scene that
//! owns them, and the driver that runs the tick loop.

pub mod config;
pub mod driver;
pub mod input;
pub mod motion;
pub mod scene;
pub mod shapes;

pub use config::{ConfigError, SceneConfig};
pub use driver::AnimationDriver;
pub use input::SceneEvent;
pub use motion::{BoundaryPath, Direction, FallingPath, MotionPath, PathKind, WobblePath};
pub use scene::{Scene, SceneDefaults, ShapeEdit};
pub use shapes::{MovingShape, Rgba, ShapeId, ShapeKind, ShapeStyle};
