//! Lowering of shapes and scenes to draw-surface calls.

use crate::surface::{DrawSurface, SurfaceResult, TextStyle};
use kinetik_core::scene::Scene;
use kinetik_core::shapes::{MovingShape, ShapeKind};

/// Draw one shape: its geometry first, then the four corner selection
/// handles if it is selected.
pub fn render_shape(shape: &MovingShape, surface: &mut dyn DrawSurface) -> SurfaceResult<()> {
    let style = &shape.style;
    match shape.kind() {
        ShapeKind::Rectangle | ShapeKind::Square => {
            surface.draw_polygon(&shape.corner_points(), style)?;
        }
        ShapeKind::Triangle => {
            surface.draw_polygon(&shape.triangle_vertices(), style)?;
        }
        ShapeKind::LabeledBox | ShapeKind::OutlinedLabeledBox => {
            surface.draw_polygon(&shape.corner_points(), style)?;
            // Labels render in the border color, matching the box edge.
            surface.draw_text(
                &shape.label,
                shape.position,
                shape.extent(),
                &TextStyle {
                    color: style.border,
                },
            )?;
        }
    }

    if shape.is_selected() {
        for corner in shape.corner_points() {
            surface.draw_marker(corner)?;
        }
    }
    Ok(())
}

/// Draw every shape in scene order.
///
/// Callers tick the whole scene before rendering it, so a frame never
/// mixes moved and unmoved shapes.
pub fn render_scene(scene: &Scene, surface: &mut dyn DrawSurface) -> SurfaceResult<()> {
    for shape in scene.shapes() {
        render_shape(shape, surface)?;
    }
    Ok(())
}
