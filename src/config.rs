use crate::color::{ColorKind, ColorOption};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_CONFIG: &str = include_str!("../assets/default_config.json");

/// Startup configuration: palettes, surface geometry and mount ids.
///
/// Every field has a default, so a partial JSON document only overrides
/// the keys it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub background_palette: Vec<ColorOption>,
    pub brush_palette: Vec<ColorOption>,
    pub brush_width: f32,
    pub surface_height: u32,
    /// Subtracted from the container width when sizing the surface
    pub surface_padding: u32,
    pub resize_debounce_ms: u64,
    pub controls_panel_width: f32,
    pub controls_mount_id: String,
    pub canvas_mount_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            background_palette: vec![
                ColorOption::new("Pastel blue", "#a7d2cb"),
                ColorOption::new("Pastel pink", "#f2d7d5"),
                ColorOption::new("Pastel green", "#d1e8d2"),
            ],
            brush_palette: vec![
                ColorOption::new("Pastel navy", "#6c8b9f"),
                ColorOption::new("Pastel red", "#c97d7d"),
                ColorOption::new("Pastel purple", "#9a7aa0"),
            ],
            brush_width: 3.0,
            surface_height: 500,
            surface_padding: 30,
            resize_debounce_ms: 100,
            controls_panel_width: 260.0,
            controls_mount_id: "controlsContainer".to_owned(),
            canvas_mount_id: "canvasContainer".to_owned(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration bundled with the binary
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_CONFIG)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Both palettes need a first entry to seed the initial selection
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.background_palette.is_empty() {
            return Err(ConfigError::EmptyPalette(ColorKind::Background));
        }
        if self.brush_palette.is_empty() {
            return Err(ConfigError::EmptyPalette(ColorKind::Brush));
        }
        Ok(())
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn surface_settings(&self) -> SurfaceSettings {
        SurfaceSettings {
            background_color: self.background_palette.first().map(|c| c.value.clone()),
            brush_color: self.brush_palette.first().map(|c| c.value.clone()),
            brush_width: self.brush_width,
            height: self.surface_height,
            padding: self.surface_padding,
        }
    }
}

/// The subset of the configuration the drawing surface cares about
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSettings {
    pub background_color: Option<String>,
    pub brush_color: Option<String>,
    pub brush_width: f32,
    pub height: u32,
    pub padding: u32,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        AppConfig::default().surface_settings()
    }
}
