use crate::color::{ColorChangeHandler, ColorKind, ColorOption};
use crate::widgets::color_picker::{ColorPicker, SelectionHandler};
use crate::widgets::swatch;
use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;

/// Colors mirrored by the two preview swatches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Previews {
    pub background: String,
    pub brush: String,
}

struct SharedState {
    current_background: String,
    current_brush: String,
    previews: Previews,
    on_change: ColorChangeHandler,
}

impl SharedState {
    fn apply(&mut self, kind: ColorKind, color: &str) {
        match kind {
            ColorKind::Background => self.current_background = color.to_owned(),
            ColorKind::Brush => self.current_brush = color.to_owned(),
        }
        self.refresh_previews();
        log::debug!("Forwarding {} color change: {}", kind, color);
        (self.on_change)(kind, color);
    }

    fn refresh_previews(&mut self) {
        self.previews = Previews {
            background: self.current_background.clone(),
            brush: self.current_brush.clone(),
        };
    }
}

/// Background and brush pickers plus a preview of both current colors
pub struct ControlsPanel {
    background_picker: ColorPicker,
    brush_picker: ColorPicker,
    state: Rc<RefCell<SharedState>>,
}

impl ControlsPanel {
    pub fn new(
        background_colors: Vec<ColorOption>,
        brush_colors: Vec<ColorOption>,
        initial_background: &str,
        initial_brush: &str,
        on_change: ColorChangeHandler,
    ) -> Self {
        let state = Rc::new(RefCell::new(SharedState {
            current_background: initial_background.to_owned(),
            current_brush: initial_brush.to_owned(),
            previews: Previews {
                background: initial_background.to_owned(),
                brush: initial_brush.to_owned(),
            },
            on_change,
        }));

        let background_picker = ColorPicker::new(
            "Background color",
            background_colors,
            initial_background,
            Self::forward(&state, ColorKind::Background),
        );
        let brush_picker = ColorPicker::new(
            "Brush color",
            brush_colors,
            initial_brush,
            Self::forward(&state, ColorKind::Brush),
        );

        Self {
            background_picker,
            brush_picker,
            state,
        }
    }

    fn forward(state: &Rc<RefCell<SharedState>>, kind: ColorKind) -> SelectionHandler {
        let state = Rc::clone(state);
        Box::new(move |color| state.borrow_mut().apply(kind, color))
    }

    pub fn set_background_color(&mut self, color: &str) {
        self.state.borrow_mut().current_background = color.to_owned();
        self.background_picker.select_color(color);
        self.state.borrow_mut().refresh_previews();
    }

    pub fn set_brush_color(&mut self, color: &str) {
        self.state.borrow_mut().current_brush = color.to_owned();
        self.brush_picker.select_color(color);
        self.state.borrow_mut().refresh_previews();
    }

    pub fn update_colors(
        &mut self,
        background_colors: Vec<ColorOption>,
        brush_colors: Vec<ColorOption>,
    ) {
        self.background_picker.update_colors(background_colors);
        self.brush_picker.update_colors(brush_colors);
    }

    pub fn current_color(&self, kind: ColorKind) -> String {
        let state = self.state.borrow();
        match kind {
            ColorKind::Background => state.current_background.clone(),
            ColorKind::Brush => state.current_brush.clone(),
        }
    }

    pub fn previews(&self) -> Previews {
        self.state.borrow().previews.clone()
    }

    pub fn picker(&self, kind: ColorKind) -> &ColorPicker {
        match kind {
            ColorKind::Background => &self.background_picker,
            ColorKind::Brush => &self.brush_picker,
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        self.background_picker.ui(ui);
        ui.separator();
        self.brush_picker.ui(ui);
        ui.separator();

        let previews = self.previews();
        ui.horizontal(|ui| {
            ui.label("Background:");
            swatch::preview(ui, &previews.background).on_hover_text(previews.background.as_str());
            ui.add_space(12.0);
            ui.label("Brush:");
            swatch::preview(ui, &previews.brush).on_hover_text(previews.brush.as_str());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> (ControlsPanel, Rc<RefCell<Vec<(ColorKind, String)>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let panel = ControlsPanel::new(
            vec![ColorOption::new("Blue", "#a7d2cb"), ColorOption::new("Pink", "#f2d7d5")],
            vec![ColorOption::new("Red", "#c97d7d")],
            "#a7d2cb",
            "#c97d7d",
            Box::new(move |kind, color| sink.borrow_mut().push((kind, color.to_owned()))),
        );
        (panel, calls)
    }

    #[test]
    fn test_setters_forward_and_refresh_previews() {
        let (mut panel, calls) = panel();
        panel.set_background_color("#f2d7d5");
        panel.set_brush_color("#000000");

        assert_eq!(
            *calls.borrow(),
            vec![
                (ColorKind::Background, "#f2d7d5".to_owned()),
                (ColorKind::Brush, "#000000".to_owned()),
            ]
        );
        assert_eq!(
            panel.previews(),
            Previews {
                background: "#f2d7d5".to_owned(),
                brush: "#000000".to_owned(),
            }
        );
        assert_eq!(panel.current_color(ColorKind::Brush), "#000000");
        assert!(panel.picker(ColorKind::Brush).active_swatch().is_none());
    }

    #[test]
    fn test_update_colors_reaches_both_pickers() {
        let (mut panel, calls) = panel();
        panel.update_colors(
            vec![ColorOption::new("Green", "#d1e8d2")],
            vec![ColorOption::new("Red", "#c97d7d"), ColorOption::new("Navy", "#6c8b9f")],
        );
        assert_eq!(panel.picker(ColorKind::Background).swatches().len(), 1);
        assert!(panel.picker(ColorKind::Background).active_swatch().is_none());
        assert_eq!(panel.picker(ColorKind::Brush).active_swatch().unwrap().option.name, "Red");
        assert!(calls.borrow().is_empty());
    }
}
