use crate::color::ColorOption;
use crate::id_generator::generate_id;
use crate::widgets::swatch::Swatch;
use eframe::egui;

/// Callback invoked with the newly selected value
pub type SelectionHandler = Box<dyn FnMut(&str)>;

/// Rendered state of one palette entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchState {
    pub option: ColorOption,
    pub active: bool,
}

/// A titled list of swatches with a single selected value.
///
/// The selected value is not validated against the palette; a value that no
/// swatch carries simply leaves every swatch inactive.
pub struct ColorPicker {
    id: String,
    title: String,
    colors: Vec<ColorOption>,
    selected: String,
    swatches: Vec<SwatchState>,
    on_change: SelectionHandler,
}

impl std::fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorPicker")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("selected", &self.selected)
            .field("swatches", &self.swatches)
            .finish_non_exhaustive()
    }
}

impl ColorPicker {
    pub fn new(
        title: impl Into<String>,
        colors: Vec<ColorOption>,
        initial: impl Into<String>,
        on_change: SelectionHandler,
    ) -> Self {
        let mut picker = Self {
            id: generate_id(),
            title: title.into(),
            colors,
            selected: initial.into(),
            swatches: Vec::new(),
            on_change,
        };
        picker.render();
        picker
    }

    /// Rebuilds the swatch list from the palette
    fn render(&mut self) {
        self.swatches = self
            .colors
            .iter()
            .map(|option| SwatchState {
                active: option.value == self.selected,
                option: option.clone(),
            })
            .collect();
    }

    /// Selects `value`, marks the matching swatch active and notifies the handler
    pub fn select_color(&mut self, value: &str) {
        self.selected = value.to_owned();
        for swatch in &mut self.swatches {
            swatch.active = swatch.option.value == value;
        }
        (self.on_change)(value);
    }

    /// Replaces the palette; the current selection is kept as-is
    pub fn update_colors(&mut self, colors: Vec<ColorOption>) {
        self.colors = colors;
        self.render();
    }

    pub fn selected_color(&self) -> &str {
        &self.selected
    }

    pub fn swatches(&self) -> &[SwatchState] {
        &self.swatches
    }

    pub fn active_swatch(&self) -> Option<&SwatchState> {
        self.swatches.iter().find(|s| s.active)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;
        ui.push_id(&self.id, |ui| {
            ui.heading(self.title.as_str());
            ui.add_space(4.0);
            for swatch in &self.swatches {
                let response =
                    Swatch::new(&swatch.option.name, &swatch.option.value, swatch.active).show(ui);
                if response.clicked() {
                    clicked = Some(swatch.option.value.clone());
                }
            }
        });

        if let Some(value) = clicked {
            log::info!("Color selected from {}: {}", self.title, value);
            self.select_color(&value);
        }
    }
}
