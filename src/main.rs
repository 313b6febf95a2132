#![warn(clippy::all, rust_2018_idioms)]
// hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use pastel_canvas::{AppConfig, DrawingApp};

const WINDOW_SIZE: [f32; 2] = [1100.0, 720.0];

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = match AppConfig::load_default() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Failed to load configuration: {}", err);
            return Ok(());
        }
    };

    let mounts = pastel_canvas::WindowMounts {
        window_width: WINDOW_SIZE[0],
        controls_width: config.controls_panel_width,
        controls_id: config.controls_mount_id.clone(),
        canvas_id: config.canvas_mount_id.clone(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size([480.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Pastel Canvas",
        native_options,
        Box::new(move |cc| match DrawingApp::new(cc, &mounts, config) {
            Ok(app) => Ok(Box::new(app)),
            Err(err) => {
                log::error!("Failed to initialize the drawing app: {}", err);
                Err(err.into())
            }
        }),
    )
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use pastel_canvas::MountLookup as _;
    use pastel_canvas::mount::DocumentMounts;
    use wasm_bindgen::JsCast as _;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let Some(mounts) = DocumentMounts::new() else {
            log::error!("No browser document is available");
            return;
        };
        let config = match AppConfig::load_default() {
            Ok(config) => config,
            Err(err) => {
                log::error!("Failed to load configuration: {}", err);
                return;
            }
        };

        // Both containers must exist before anything is attached to the page
        if mounts.find(&config.controls_mount_id).is_none() {
            log::error!("Required mount point `{}` was not found", config.controls_mount_id);
            return;
        }
        let Some(container) = mounts.element(&config.canvas_mount_id) else {
            log::error!("Required mount point `{}` was not found", config.canvas_mount_id);
            return;
        };

        let canvas = match mounts
            .document()
            .create_element("canvas")
            .ok()
            .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("Failed to create the drawing canvas element");
                return;
            }
        };
        canvas.set_id("drawingCanvas");
        let style = format!("width: 100%; height: {}px;", WINDOW_SIZE[1]);
        if canvas.set_attribute("style", &style).is_err()
            || container.append_child(&canvas).is_err()
        {
            log::error!("Failed to attach the drawing canvas");
            return;
        }

        let start_result = eframe::WebRunner::new()
            .start(
                canvas.clone(),
                web_options,
                Box::new(move |cc| match DrawingApp::new(cc, &mounts, config) {
                    Ok(app) => Ok(Box::new(app)),
                    Err(err) => {
                        log::error!("Failed to initialize the drawing app: {}", err);
                        Err(err.into())
                    }
                }),
            )
            .await;

        if let Err(err) = start_result {
            log::error!("Failed to start eframe: {:?}", err);
            // Leave no half-initialized canvas behind
            canvas.remove();
        }
    });
}
