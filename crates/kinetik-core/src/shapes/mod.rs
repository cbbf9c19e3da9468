//! Shape definitions for the animation area.

mod geometry;

pub use geometry::point_in_triangle;

use crate::motion::{MotionPath, PathKind};
use kurbo::{Point, Rect, Size};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub const fn green() -> Self {
        Self::new(0, 255, 0, 255)
    }

    pub const fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    pub const fn blue() -> Self {
        Self::new(0, 0, 255, 255)
    }

    pub const fn yellow() -> Self {
        Self::new(255, 255, 0, 255)
    }

    pub const fn magenta() -> Self {
        Self::new(255, 0, 255, 255)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// The fixed set of shape geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Axis-aligned rectangle.
    #[default]
    Rectangle,
    /// Rectangle constrained to equal sides.
    Square,
    /// Right-angle triangle spanning the width/height extent.
    Triangle,
    /// Rectangle with a text label inside.
    LabeledBox,
    /// Labeled rectangle drawn with a thick outline.
    OutlinedLabeledBox,
}

impl ShapeKind {
    /// Get display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::LabeledBox => "Labeled Box",
            ShapeKind::OutlinedLabeledBox => "Outlined Labeled Box",
        }
    }

    /// Get all available shape kinds.
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Rectangle,
            ShapeKind::Square,
            ShapeKind::Triangle,
            ShapeKind::LabeledBox,
            ShapeKind::OutlinedLabeledBox,
        ]
    }

    /// Whether this kind renders a text label.
    pub fn has_label(&self) -> bool {
        matches!(self, ShapeKind::LabeledBox | ShapeKind::OutlinedLabeledBox)
    }
}

/// Style properties for shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Fill color.
    pub fill: Rgba,
    /// Border color.
    pub border: Rgba,
    /// Border stroke width (drawn for the outlined kind).
    pub border_thickness: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: Rgba::green(),
            border: Rgba::black(),
            border_thickness: 1.0,
        }
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// A shape moving inside the animation area.
///
/// Combines a geometry kind, a mutable top-left position, style, a
/// selection flag and an owned motion path. Advancing the path once per
/// tick is the only thing that moves the shape.
#[derive(Debug, Clone)]
pub struct MovingShape {
    id: ShapeId,
    kind: ShapeKind,
    /// Top-left corner position.
    pub position: Point,
    width: f64,
    height: f64,
    /// Usable area the motion path must respect.
    bounds: Size,
    /// Style properties.
    pub style: ShapeStyle,
    /// Label text (rendered by the labeled kinds).
    pub label: String,
    selected: bool,
    path: MotionPath,
}

impl MovingShape {
    /// Default usable area before the windowing layer reports a real size.
    pub const DEFAULT_BOUNDS: Size = Size::new(500.0, 500.0);

    /// Create a new shape with default style, bounds and motion.
    ///
    /// A `Square` collapses the requested extent to
    /// `min(width, height)` on both axes.
    pub fn new(kind: ShapeKind, position: Point, width: f64, height: f64) -> Self {
        let (width, height) = match kind {
            ShapeKind::Square => {
                let side = width.min(height);
                (side, side)
            }
            _ => (width, height),
        };

        Self {
            id: Uuid::new_v4(),
            kind,
            position,
            width,
            height,
            bounds: Self::DEFAULT_BOUNDS,
            style: ShapeStyle::default(),
            label: String::new(),
            selected: false,
            path: MotionPath::new(PathKind::default()),
        }
    }

    /// Set the usable area.
    pub fn with_bounds(mut self, bounds: Size) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the style.
    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the label text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Construct with a freshly built path of the given kind.
    pub fn with_path(mut self, kind: PathKind) -> Self {
        self.path = MotionPath::new(kind);
        self
    }

    /// Construct with an explicit path state (deterministic deltas etc.).
    pub fn with_motion(mut self, path: MotionPath) -> Self {
        self.path = path;
        self
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The width/height extent as a size.
    pub fn extent(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn path(&self) -> &MotionPath {
        &self.path
    }

    /// Set the width.
    ///
    /// A `Square` re-applies `min` against the current height so both
    /// sides stay equal.
    pub fn set_width(&mut self, width: f64) {
        match self.kind {
            ShapeKind::Square => {
                let side = width.min(self.height);
                self.width = side;
                self.height = side;
            }
            _ => self.width = width,
        }
    }

    /// Set the height; same `min` rule for `Square` as [`set_width`].
    ///
    /// [`set_width`]: MovingShape::set_width
    pub fn set_height(&mut self, height: f64) {
        match self.kind {
            ShapeKind::Square => {
                let side = height.min(self.width);
                self.width = side;
                self.height = side;
            }
            _ => self.height = height,
        }
    }

    /// Replace the motion path with a fresh one of the requested kind.
    ///
    /// Any accumulated phase or direction state is discarded.
    pub fn set_path_kind(&mut self, kind: PathKind) {
        self.path = MotionPath::new(kind);
    }

    /// Update the usable area without moving the shape.
    pub fn set_margin(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn toggle_selected(&mut self) {
        self.selected = !self.selected;
    }

    /// Get the shape's axis-aligned bounding rectangle.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Vertices of the triangle kind: right angle at the bottom-left
    /// corner, apex at the top-left position.
    pub fn triangle_vertices(&self) -> [Point; 3] {
        [
            self.position,
            Point::new(self.position.x, self.position.y + self.height),
            Point::new(self.position.x + self.width, self.position.y + self.height),
        ]
    }

    /// The four corners of the extent, clockwise from top-left.
    ///
    /// Doubles as the polygon outline for the box kinds and as the
    /// selection handle anchors for every kind.
    pub fn corner_points(&self) -> [Point; 4] {
        let rect = self.as_rect();
        [
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
        ]
    }

    /// Whether the point lies within the shape's geometry.
    pub fn contains(&self, point: Point) -> bool {
        match self.kind {
            ShapeKind::Rectangle
            | ShapeKind::Square
            | ShapeKind::LabeledBox
            | ShapeKind::OutlinedLabeledBox => self.as_rect().contains(point),
            ShapeKind::Triangle => {
                let [a, b, c] = self.triangle_vertices();
                point_in_triangle(point, a, b, c)
            }
        }
    }

    /// Advance the motion path by one tick.
    pub fn tick(&mut self) {
        let extent = self.extent();
        self.path.advance(&mut self.position, extent, self.bounds);
    }
}

impl fmt::Display for MovingShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{:.0},{:.0}]",
            self.kind.display_name(),
            self.position.x,
            self.position.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::BoundaryPath;

    #[test]
    fn test_shape_creation() {
        let shape = MovingShape::new(ShapeKind::Rectangle, Point::new(10.0, 20.0), 50.0, 20.0);
        assert_eq!(shape.kind(), ShapeKind::Rectangle);
        assert!((shape.position.x - 10.0).abs() < f64::EPSILON);
        assert!((shape.position.y - 20.0).abs() < f64::EPSILON);
        assert!((shape.width() - 50.0).abs() < f64::EPSILON);
        assert!((shape.height() - 20.0).abs() < f64::EPSILON);
        assert!(!shape.is_selected());
    }

    #[test]
    fn test_square_collapses_extent_at_creation() {
        let shape = MovingShape::new(ShapeKind::Square, Point::ZERO, 50.0, 20.0);
        assert!((shape.width() - 20.0).abs() < f64::EPSILON);
        assert!((shape.height() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_square_stays_square_through_resizes() {
        let mut shape = MovingShape::new(ShapeKind::Square, Point::ZERO, 30.0, 30.0);
        for (set_w, value) in [(true, 80.0), (false, 12.0), (true, 5.0), (false, 200.0)] {
            if set_w {
                shape.set_width(value);
            } else {
                shape.set_height(value);
            }
            assert!(
                (shape.width() - shape.height()).abs() < f64::EPSILON,
                "square lost its invariant after resize to {value}"
            );
        }
    }

    #[test]
    fn test_rectangle_resizes_independently() {
        let mut shape = MovingShape::new(ShapeKind::Rectangle, Point::ZERO, 50.0, 20.0);
        shape.set_width(70.0);
        assert!((shape.width() - 70.0).abs() < f64::EPSILON);
        assert!((shape.height() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rectangle_contains() {
        let shape = MovingShape::new(ShapeKind::Rectangle, Point::new(10.0, 10.0), 100.0, 50.0);
        assert!(shape.contains(Point::new(50.0, 30.0)));
        assert!(!shape.contains(Point::new(150.0, 30.0)));
        assert!(!shape.contains(Point::new(50.0, 80.0)));
    }

    #[test]
    fn test_triangle_contains() {
        let shape = MovingShape::new(ShapeKind::Triangle, Point::ZERO, 100.0, 100.0);
        // Near the bottom-left right angle.
        assert!(shape.contains(Point::new(10.0, 90.0)));
        // Inside the bounding box but above the hypotenuse.
        assert!(!shape.contains(Point::new(90.0, 10.0)));
    }

    #[test]
    fn test_selection_toggle() {
        let mut shape = MovingShape::new(ShapeKind::Rectangle, Point::ZERO, 10.0, 10.0);
        shape.toggle_selected();
        assert!(shape.is_selected());
        shape.toggle_selected();
        assert!(!shape.is_selected());
    }

    #[test]
    fn test_set_path_kind_resets_state() {
        let mut shape = MovingShape::new(ShapeKind::Rectangle, Point::ZERO, 10.0, 10.0)
            .with_motion(MotionPath::Boundary(BoundaryPath::with_deltas(3.0, 4.0)));
        for _ in 0..10 {
            shape.tick();
        }
        shape.set_path_kind(crate::motion::PathKind::Boundary);
        match shape.path() {
            MotionPath::Boundary(path) => {
                assert_eq!(path.direction(), crate::motion::Direction::Down);
            }
            other => panic!("expected boundary path, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_set_margin_keeps_position() {
        let mut shape = MovingShape::new(ShapeKind::Rectangle, Point::new(40.0, 40.0), 10.0, 10.0);
        shape.set_margin(Size::new(300.0, 200.0));
        assert!((shape.position.x - 40.0).abs() < f64::EPSILON);
        assert!((shape.position.y - 40.0).abs() < f64::EPSILON);
        assert_eq!(shape.bounds(), Size::new(300.0, 200.0));
    }

    #[test]
    fn test_display_format() {
        let shape = MovingShape::new(ShapeKind::Square, Point::new(12.0, 7.0), 20.0, 20.0);
        assert_eq!(shape.to_string(), "[Square,12,7]");
    }

    #[test]
    fn test_color_conversion_round_trip() {
        let color = Rgba::new(12, 200, 17, 255);
        let peniko: Color = color.into();
        assert_eq!(Rgba::from(peniko), color);
    }
}
