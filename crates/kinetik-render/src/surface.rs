//! Drawing surface abstraction.

use kinetik_core::shapes::{Rgba, ShapeStyle};
use kurbo::{Point, Size};
use thiserror::Error;

/// Surface errors.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("draw failed: {0}")]
    Draw(String),
    #[error("surface unavailable: {0}")]
    Unavailable(String),
}

/// Result type for surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Style attributes for text drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Rgba,
}

/// The contract a rendering backend fulfils.
///
/// The engine lowers every shape to these three calls; pixels, fonts
/// and window buffers stay on the backend's side of the seam. Polygon
/// style carries fill, border color and border stroke width.
pub trait DrawSurface {
    /// Draw a closed polygon through the given points.
    fn draw_polygon(&mut self, points: &[Point], style: &ShapeStyle) -> SurfaceResult<()>;

    /// Draw text at a position, fitted to the given extent.
    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        extent: Size,
        style: &TextStyle,
    ) -> SurfaceResult<()>;

    /// Draw a small selection handle marker centered on a point.
    fn draw_marker(&mut self, position: Point) -> SurfaceResult<()>;
}
