//! Scene: the ordered shape collection and its creation defaults.

use crate::motion::PathKind;
use crate::shapes::{MovingShape, Rgba, ShapeId, ShapeKind, ShapeStyle};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// The scene-wide defaults applied to newly created shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDefaults {
    pub shape_kind: ShapeKind,
    pub path_kind: PathKind,
    pub width: f64,
    pub height: f64,
    pub fill: Rgba,
    pub border: Rgba,
    pub label: String,
    pub border_thickness: f64,
    /// Latest usable area reported by the windowing layer.
    pub bounds: Size,
}

impl Default for SceneDefaults {
    fn default() -> Self {
        Self {
            shape_kind: ShapeKind::default(),
            path_kind: PathKind::default(),
            width: 50.0,
            height: 20.0,
            fill: Rgba::green(),
            border: Rgba::black(),
            label: "Hello".to_string(),
            border_thickness: 1.0,
            bounds: MovingShape::DEFAULT_BOUNDS,
        }
    }
}

impl SceneDefaults {
    fn style(&self) -> ShapeStyle {
        ShapeStyle {
            fill: self.fill,
            border: self.border,
            border_thickness: self.border_thickness,
        }
    }
}

/// A single field mutation applied to every selected shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeEdit {
    Width(f64),
    Height(f64),
    Path(PathKind),
    FillColor(Rgba),
    BorderColor(Rgba),
    BorderThickness(f64),
    Label(String),
}

/// The ordered collection of shapes plus current creation defaults.
///
/// Shape order is creation order; it is also the iteration, hit-test
/// and tick order. Shapes are only ever removed all at once via
/// [`clear`](Scene::clear).
#[derive(Debug, Default)]
pub struct Scene {
    shapes: Vec<MovingShape>,
    defaults: SceneDefaults,
}

impl Scene {
    /// Create an empty scene with stock defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scene with the given defaults.
    pub fn with_defaults(defaults: SceneDefaults) -> Self {
        Self {
            shapes: Vec::new(),
            defaults,
        }
    }

    pub fn defaults(&self) -> &SceneDefaults {
        &self.defaults
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterate shapes in creation order.
    pub fn shapes(&self) -> impl Iterator<Item = &MovingShape> {
        self.shapes.iter()
    }

    /// Get a shape by ID.
    pub fn get(&self, id: ShapeId) -> Option<&MovingShape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut MovingShape> {
        self.shapes.iter_mut().find(|shape| shape.id() == id)
    }

    /// Number of currently selected shapes.
    pub fn selected_count(&self) -> usize {
        self.shapes.iter().filter(|shape| shape.is_selected()).count()
    }

    /// Append a preconstructed shape.
    pub fn add_shape(&mut self, shape: MovingShape) -> ShapeId {
        let id = shape.id();
        self.shapes.push(shape);
        id
    }

    /// Create a shape at `position` from the current defaults and
    /// append it.
    pub fn create_shape(&mut self, position: Point) -> ShapeId {
        let defaults = &self.defaults;
        let shape = MovingShape::new(
            defaults.shape_kind,
            position,
            defaults.width,
            defaults.height,
        )
        .with_bounds(defaults.bounds)
        .with_style(defaults.style())
        .with_label(defaults.label.clone())
        .with_path(defaults.path_kind);

        log::debug!("created {shape}");
        self.add_shape(shape)
    }

    /// Find the first shape (in creation order) containing the point.
    pub fn hit_test(&self, point: Point) -> Option<ShapeId> {
        self.shapes
            .iter()
            .find(|shape| shape.contains(point))
            .map(|shape| shape.id())
    }

    /// Handle a click: toggle selection on every shape containing the
    /// point, or create a new shape there if none does.
    ///
    /// The scan deliberately does not stop at the first hit — a click
    /// inside two overlapping shapes toggles both.
    pub fn on_click(&mut self, point: Point) {
        let mut found = false;
        for shape in &mut self.shapes {
            if shape.contains(point) {
                found = true;
                shape.toggle_selected();
                log::debug!("toggled {shape}");
            }
        }
        if !found {
            self.create_shape(point);
        }
    }

    /// Apply a field mutation to every selected shape.
    pub fn apply_to_selected(&mut self, edit: ShapeEdit) {
        for shape in self.shapes.iter_mut().filter(|shape| shape.is_selected()) {
            match &edit {
                ShapeEdit::Width(width) => shape.set_width(*width),
                ShapeEdit::Height(height) => shape.set_height(*height),
                ShapeEdit::Path(kind) => shape.set_path_kind(*kind),
                ShapeEdit::FillColor(color) => shape.style.fill = *color,
                ShapeEdit::BorderColor(color) => shape.style.border = *color,
                ShapeEdit::BorderThickness(thickness) => {
                    shape.style.border_thickness = *thickness
                }
                ShapeEdit::Label(label) => shape.label = label.clone(),
            }
        }
    }

    /// Set the default shape kind for new shapes.
    pub fn set_current_shape_kind(&mut self, kind: ShapeKind) {
        self.defaults.shape_kind = kind;
    }

    /// Set the default path kind and re-path all selected shapes.
    pub fn set_current_path_kind(&mut self, kind: PathKind) {
        self.defaults.path_kind = kind;
        self.apply_to_selected(ShapeEdit::Path(kind));
    }

    /// Set the default width and resize all selected shapes.
    pub fn set_current_width(&mut self, width: f64) {
        self.defaults.width = width;
        self.apply_to_selected(ShapeEdit::Width(width));
    }

    /// Set the default height and resize all selected shapes.
    pub fn set_current_height(&mut self, height: f64) {
        self.defaults.height = height;
        self.apply_to_selected(ShapeEdit::Height(height));
    }

    /// Set the default fill color and restyle all selected shapes.
    pub fn set_current_fill_color(&mut self, color: Rgba) {
        self.defaults.fill = color;
        self.apply_to_selected(ShapeEdit::FillColor(color));
    }

    /// Set the default border color and restyle all selected shapes.
    pub fn set_current_border_color(&mut self, color: Rgba) {
        self.defaults.border = color;
        self.apply_to_selected(ShapeEdit::BorderColor(color));
    }

    /// Set the default border thickness and restyle all selected shapes.
    pub fn set_current_border_thickness(&mut self, thickness: f64) {
        self.defaults.border_thickness = thickness;
        self.apply_to_selected(ShapeEdit::BorderThickness(thickness));
    }

    /// Set the default label and relabel all selected shapes.
    pub fn set_current_label(&mut self, label: impl Into<String>) {
        let label = label.into();
        self.defaults.label = label.clone();
        self.apply_to_selected(ShapeEdit::Label(label));
    }

    /// Remove all shapes; selection state goes with them.
    pub fn clear(&mut self) {
        log::debug!("clearing {} shapes", self.shapes.len());
        self.shapes.clear();
    }

    /// Propagate a new usable area to every shape and to the defaults
    /// used for the next creation.
    pub fn reset_margins(&mut self, bounds: Size) {
        self.defaults.bounds = bounds;
        for shape in &mut self.shapes {
            shape.set_margin(bounds);
        }
    }

    /// Advance every shape's path by one tick, in creation order.
    pub fn tick_all(&mut self) {
        for shape in &mut self.shapes {
            shape.tick();
        }
    }
}
