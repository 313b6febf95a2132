#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod mount;
pub mod panels;
pub mod raster;
pub mod surface;
pub mod util;
pub mod widgets;

pub use app::DrawingApp;
pub use color::{ColorKind, ColorOption};
pub use config::AppConfig;
pub use error::{ConfigError, InitError, SurfaceError};
pub use input::{InputHandler, PointerInput};
pub use mount::{Mount, MountLookup, WindowMounts};
pub use surface::{DrawingState, DrawingSurface};
