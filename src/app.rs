use crate::color::{ColorKind, ColorOption};
use crate::config::AppConfig;
use crate::error::InitError;
use crate::mount::{Mount, MountLookup};
use crate::panels::{CanvasPanel, ControlsPanel};
use crate::surface::DrawingSurface;
use std::cell::RefCell;
use std::rc::Rc;

/// Owns the controls and the drawing surface and routes color changes
/// from the former to the latter.
pub struct DrawingApp {
    controls: ControlsPanel,
    canvas: CanvasPanel,
    surface: Rc<RefCell<DrawingSurface>>,
    controls_width: f32,
}

impl DrawingApp {
    /// Called once before the first frame.
    ///
    /// Fails when the renderer has no GL context, in addition to every
    /// failure of [`DrawingApp::build`].
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        mounts: &dyn MountLookup,
        config: AppConfig,
    ) -> Result<Self, InitError> {
        if cc.gl.is_none() {
            return Err(InitError::ContextUnavailable);
        }
        Self::build(mounts, config)
    }

    /// Resolves both mount points, attaches the surface and wires the controls.
    ///
    /// Nothing is kept when any step fails.
    pub fn build(mounts: &dyn MountLookup, config: AppConfig) -> Result<Self, InitError> {
        config.validate()?;
        let controls_mount = resolve(mounts, &config.controls_mount_id)?;
        let canvas_mount = resolve(mounts, &config.canvas_mount_id)?;
        log::info!(
            "Mounting controls in `{}` ({}pt) and canvas in `{}` ({}pt)",
            controls_mount.id,
            controls_mount.width,
            canvas_mount.id,
            canvas_mount.width
        );

        let surface = DrawingSurface::attach(canvas_mount.width, &config.surface_settings())?;
        let surface = Rc::new(RefCell::new(surface));

        let initial_background = first_value(&config.background_palette);
        let initial_brush = first_value(&config.brush_palette);

        let routed = Rc::clone(&surface);
        let mut controls = ControlsPanel::new(
            config.background_palette.clone(),
            config.brush_palette.clone(),
            &initial_background,
            &initial_brush,
            Box::new(move |kind, color| {
                let mut surface = routed.borrow_mut();
                match kind {
                    ColorKind::Background => surface.set_background_color(color),
                    ColorKind::Brush => surface.set_brush_color(color),
                }
            }),
        );
        controls.set_background_color(&initial_background);
        controls.set_brush_color(&initial_brush);

        let canvas = CanvasPanel::new(Rc::clone(&surface), config.resize_debounce());
        let controls_width = config
            .controls_panel_width
            .min(controls_mount.width.max(1.0));

        Ok(Self {
            controls,
            canvas,
            surface,
            controls_width,
        })
    }

    pub fn controls(&self) -> &ControlsPanel {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut ControlsPanel {
        &mut self.controls
    }

    pub fn canvas(&self) -> &CanvasPanel {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut CanvasPanel {
        &mut self.canvas
    }

    pub fn surface(&self) -> &Rc<RefCell<DrawingSurface>> {
        &self.surface
    }

    /// Lays out one frame: controls on the left, canvas in the remaining space
    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("controls_panel")
            .resizable(false)
            .exact_width(self.controls_width)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.controls.ui(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas.ui(ui);
        });
    }
}

fn resolve(mounts: &dyn MountLookup, id: &str) -> Result<Mount, InitError> {
    mounts
        .find(id)
        .ok_or_else(|| InitError::MissingMount(id.to_owned()))
}

fn first_value(palette: &[ColorOption]) -> String {
    palette.first().map(|c| c.value.clone()).unwrap_or_default()
}

impl eframe::App for DrawingApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
