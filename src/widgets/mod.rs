pub mod color_picker;
pub mod swatch;

pub use color_picker::{ColorPicker, SwatchState};
pub use swatch::Swatch;
