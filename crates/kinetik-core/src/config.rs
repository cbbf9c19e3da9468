//! JSON configuration for scene defaults and the animation delay.

use crate::motion::PathKind;
use crate::scene::SceneDefaults;
use crate::shapes::{Rgba, ShapeKind};
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Startup configuration for a scene and its driver.
///
/// Fields use `#[serde(default)]` so a partial config file keeps
/// working as new settings are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Tick delay in milliseconds.
    pub delay_ms: u64,
    pub shape_kind: ShapeKind,
    pub path_kind: PathKind,
    pub width: f64,
    pub height: f64,
    pub fill: Rgba,
    pub border: Rgba,
    pub label: String,
    pub border_thickness: f64,
    pub bounds_width: f64,
    pub bounds_height: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let defaults = SceneDefaults::default();
        Self {
            delay_ms: 30,
            shape_kind: defaults.shape_kind,
            path_kind: defaults.path_kind,
            width: defaults.width,
            height: defaults.height,
            fill: defaults.fill,
            border: defaults.border,
            label: defaults.label,
            border_thickness: defaults.border_thickness,
            bounds_width: defaults.bounds.width,
            bounds_height: defaults.bounds.height,
        }
    }
}

impl SceneConfig {
    /// Parse a config from JSON and sanitize its values.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Serialize the config to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and sanitize a config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write the config to a file as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// The configured tick delay.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// The scene defaults this config describes.
    pub fn defaults(&self) -> SceneDefaults {
        SceneDefaults {
            shape_kind: self.shape_kind,
            path_kind: self.path_kind,
            width: self.width,
            height: self.height,
            fill: self.fill,
            border: self.border,
            label: self.label.clone(),
            border_thickness: self.border_thickness,
            bounds: Size::new(self.bounds_width, self.bounds_height),
        }
    }

    /// Replace out-of-range values with the stock defaults.
    ///
    /// The engine itself assumes pre-validated inputs; a config file is
    /// a trust boundary, so it gets checked here.
    fn sanitized(mut self) -> Self {
        let stock = Self::default();
        if self.delay_ms == 0 {
            log::warn!("config delay_ms must be positive, using {}", stock.delay_ms);
            self.delay_ms = stock.delay_ms;
        }
        if self.width <= 0.0 || !self.width.is_finite() {
            log::warn!("config width {} out of range, using {}", self.width, stock.width);
            self.width = stock.width;
        }
        if self.height <= 0.0 || !self.height.is_finite() {
            log::warn!(
                "config height {} out of range, using {}",
                self.height,
                stock.height
            );
            self.height = stock.height;
        }
        if self.border_thickness <= 0.0 || !self.border_thickness.is_finite() {
            self.border_thickness = stock.border_thickness;
        }
        if self.bounds_width < 0.0 || !self.bounds_width.is_finite() {
            self.bounds_width = stock.bounds_width;
        }
        if self.bounds_height < 0.0 || !self.bounds_height.is_finite() {
            self.bounds_height = stock.bounds_height;
        }
        self
    }
}
