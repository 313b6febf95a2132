use crate::color::parse_color;
use eframe::egui;

/// A single clickable palette entry
pub struct Swatch<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub active: bool,
}

impl<'a> Swatch<'a> {
    pub fn new(name: &'a str, value: &'a str, active: bool) -> Self {
        Self {
            name,
            value,
            active,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(ui.available_width().min(220.0), 32.0);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            // Values the surface would ignore still get a swatch, drawn as a neutral gray
            let fill = parse_color(self.value).unwrap_or(egui::Color32::from_gray(128));
            ui.painter().rect_filled(rect, 6.0, fill);

            let text_color = if luma(fill) > 0.5 {
                egui::Color32::from_gray(30)
            } else {
                egui::Color32::WHITE
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.name,
                egui::FontId::proportional(14.0),
                text_color,
            );

            if self.active {
                ui.painter().rect_stroke(
                    rect,
                    6.0,
                    egui::Stroke::new(3.0, egui::Color32::from_gray(40)),
                );
            } else if response.hovered() {
                ui.painter().rect_stroke(
                    rect,
                    6.0,
                    egui::Stroke::new(1.0, egui::Color32::from_gray(90)),
                );
            }
        }

        response.on_hover_text(self.value)
    }
}

/// A small square showing the current color, used by the controls previews
pub fn preview(ui: &mut egui::Ui, value: &str) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(28.0, 28.0), egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        let fill = parse_color(value).unwrap_or(egui::Color32::TRANSPARENT);
        ui.painter().rect_filled(rect, 4.0, fill);
        ui.painter()
            .rect_stroke(rect, 4.0, egui::Stroke::new(1.0, egui::Color32::from_gray(60)));
    }
    response
}

fn luma(color: egui::Color32) -> f32 {
    (0.299 * color.r() as f32 + 0.587 * color.g() as f32 + 0.114 * color.b() as f32) / 255.0
}
