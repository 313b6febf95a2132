use crate::input::InputHandler;
use crate::surface::DrawingSurface;
use crate::util::Debounced;
use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Hosts the drawing surface: header, texture, pointer routing and resizing
pub struct CanvasPanel {
    surface: Rc<RefCell<DrawingSurface>>,
    input: InputHandler,
    resize: Debounced<f32>,
    /// Last measured container width; `None` until the first frame lays out
    container_width: Option<f32>,
    texture: Option<egui::TextureHandle>,
    uploaded_version: Option<u64>,
}

impl CanvasPanel {
    pub fn new(surface: Rc<RefCell<DrawingSurface>>, debounce: Duration) -> Self {
        Self {
            surface,
            input: InputHandler::new(),
            resize: Debounced::new(debounce),
            container_width: None,
            texture: None,
            uploaded_version: None,
        }
    }

    pub fn surface(&self) -> &Rc<RefCell<DrawingSurface>> {
        &self.surface
    }

    /// Records the container's current width, scheduling a resize when it changed.
    ///
    /// The first measurement only fits the surface to the laid-out container.
    /// It happens before any input is routed, so nothing drawn is lost.
    pub fn container_resized(&mut self, now: f64, width: f32) {
        match self.container_width {
            None => {
                self.container_width = Some(width);
                let mut surface = self.surface.borrow_mut();
                if surface.width_for_container(width) != surface.width() {
                    surface.resize(width);
                }
            }
            Some(previous) if (width - previous).abs() < 0.5 => {}
            Some(_) => {
                self.container_width = Some(width);
                self.resize.trigger(now, width);
            }
        }
    }

    /// Applies a pending resize whose debounce window has elapsed
    pub fn poll_resize(&mut self, now: f64) -> bool {
        match self.resize.poll(now) {
            Some(width) => {
                self.surface.borrow_mut().resize(width);
                true
            }
            None => false,
        }
    }

    pub fn is_resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    /// Routes this frame's events to the surface whose screen rect is `rect`
    pub fn handle_events(&mut self, events: &[egui::Event], rect: egui::Rect) {
        let inputs = self.input.process(events, rect);
        if inputs.is_empty() {
            return;
        }
        let mut surface = self.surface.borrow_mut();
        for input in inputs {
            surface.handle(input);
        }
    }

    fn sync_texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        let surface = self.surface.borrow();
        let version = surface.version();
        match &mut self.texture {
            Some(texture) if self.uploaded_version == Some(version) => texture.id(),
            Some(texture) => {
                texture.set(surface.to_color_image(), egui::TextureOptions::NEAREST);
                self.uploaded_version = Some(version);
                texture.id()
            }
            None => {
                let texture = ctx.load_texture(
                    "drawing_surface",
                    surface.to_color_image(),
                    egui::TextureOptions::NEAREST,
                );
                let id = texture.id();
                self.texture = Some(texture);
                self.uploaded_version = Some(version);
                id
            }
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Drawing canvas");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Clear canvas").clicked() {
                    log::info!("Clearing drawing surface");
                    self.surface.borrow_mut().clear();
                }
            });
        });
        ui.add_space(8.0);

        let now = ui.input(|i| i.time);
        self.container_resized(now, ui.available_width());
        self.poll_resize(now);
        if let Some(remaining) = self.resize.remaining(now) {
            ui.ctx().request_repaint_after(remaining);
        }

        let size = {
            let surface = self.surface.borrow();
            egui::vec2(surface.width() as f32, surface.height() as f32)
        };
        let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

        let events = ui.input(|i| i.events.clone());
        self.handle_events(&events, rect);

        let texture_id = self.sync_texture(ui.ctx());
        ui.painter().image(
            texture_id,
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }
}
