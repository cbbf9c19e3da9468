//! Recording surface: captures draw calls instead of rasterizing them.

use crate::surface::{DrawSurface, SurfaceResult, TextStyle};
use kinetik_core::shapes::ShapeStyle;
use kurbo::{Point, Size};

/// One captured draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Polygon {
        points: Vec<Point>,
        style: ShapeStyle,
    },
    Text {
        text: String,
        position: Point,
        extent: Size,
        style: TextStyle,
    },
    Marker {
        position: Point,
    },
}

/// A `DrawSurface` that records commands in call order.
///
/// Backs the renderer tests and headless runs; a real backend would
/// replay an equivalent command stream against its own canvas.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands captured so far, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop all captured commands (start of a new frame).
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_polygon(&mut self, points: &[Point], style: &ShapeStyle) -> SurfaceResult<()> {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            style: *style,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        extent: Size,
        style: &TextStyle,
    ) -> SurfaceResult<()> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            extent,
            style: *style,
        });
        Ok(())
    }

    fn draw_marker(&mut self, position: Point) -> SurfaceResult<()> {
        self.commands.push(DrawCommand::Marker { position });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetik_core::shapes::Rgba;

    #[test]
    fn test_records_in_call_order() {
        let mut surface = RecordingSurface::new();
        surface
            .draw_marker(Point::new(1.0, 2.0))
            .expect("draw marker");
        surface
            .draw_text(
                "hi",
                Point::ZERO,
                Size::new(50.0, 20.0),
                &TextStyle {
                    color: Rgba::black(),
                },
            )
            .expect("draw text");

        assert_eq!(surface.len(), 2);
        assert!(matches!(surface.commands()[0], DrawCommand::Marker { .. }));
        assert!(matches!(surface.commands()[1], DrawCommand::Text { .. }));
    }

    #[test]
    fn test_clear_resets_the_frame() {
        let mut surface = RecordingSurface::new();
        surface.draw_marker(Point::ZERO).expect("draw marker");
        assert!(!surface.is_empty());

        surface.clear();
        assert!(surface.is_empty());
    }
}
