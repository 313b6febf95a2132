use crate::color::ColorKind;
use thiserror::Error;

/// Errors raised while loading the application configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("The {0} palette must contain at least one color")]
    EmptyPalette(ColorKind),
}

/// Errors raised when attaching the drawing surface
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("Drawing context unavailable for a {width}x{height} surface")]
    ContextUnavailable { width: u32, height: u32 },
}

/// Errors that abort application startup
#[derive(Debug, Error)]
pub enum InitError {
    #[error("Required mount point `{0}` was not found")]
    MissingMount(String),

    #[error("No rendering context is available")]
    ContextUnavailable,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
