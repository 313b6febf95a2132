pub mod canvas_panel;
pub mod controls_panel;

pub use canvas_panel::CanvasPanel;
pub use controls_panel::{ControlsPanel, Previews};
