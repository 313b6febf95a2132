use crate::color::parse_color;
use crate::config::SurfaceSettings;
use crate::error::SurfaceError;
use crate::input::PointerInput;
use crate::raster::{self, to_rgba};
use egui::{Color32, ColorImage, Pos2};
use image::RgbaImage;

const FALLBACK_BACKGROUND: Color32 = Color32::WHITE;
const FALLBACK_BRUSH: Color32 = Color32::BLACK;

/// Pointer state of the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    Idle,
    /// Holds the last sampled point; the next move draws from here
    Drawing { last: Pos2 },
}

/// The pixel buffer strokes are painted onto.
///
/// Only this type writes to the buffer. Resizing refills the whole surface with
/// the background color, so strokes do not survive a resize.
#[derive(Debug)]
pub struct DrawingSurface {
    buffer: RgbaImage,
    state: DrawingState,
    background: String,
    background_fill: Color32,
    brush: String,
    brush_fill: Color32,
    brush_width: f32,
    height: u32,
    padding: u32,
    /// Bumped on every pixel change so views know when to re-upload
    version: u64,
}

impl DrawingSurface {
    /// Creates a surface sized for a container `container_width` wide
    pub fn attach(container_width: f32, settings: &SurfaceSettings) -> Result<Self, SurfaceError> {
        let width = Self::width_for(container_width, settings.padding);
        if width == 0 || settings.height == 0 {
            return Err(SurfaceError::ContextUnavailable {
                width,
                height: settings.height,
            });
        }

        let background = settings.background_color.clone().unwrap_or_default();
        let brush = settings.brush_color.clone().unwrap_or_default();
        let mut surface = Self {
            buffer: RgbaImage::new(width, settings.height),
            state: DrawingState::Idle,
            background_fill: parse_color(&background).unwrap_or(FALLBACK_BACKGROUND),
            background,
            brush_fill: parse_color(&brush).unwrap_or(FALLBACK_BRUSH),
            brush,
            brush_width: settings.brush_width,
            height: settings.height,
            padding: settings.padding,
            version: 0,
        };
        surface.clear();
        log::debug!("Drawing surface attached at {}x{}", width, settings.height);
        Ok(surface)
    }

    fn width_for(container_width: f32, padding: u32) -> u32 {
        (container_width.floor() - padding as f32).max(0.0) as u32
    }

    /// Width the surface takes inside a container `container_width` wide
    pub fn width_for_container(&self, container_width: f32) -> u32 {
        Self::width_for(container_width, self.padding).max(1)
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn state(&self) -> DrawingState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    pub fn background_color(&self) -> &str {
        &self.background
    }

    pub fn brush_color(&self) -> &str {
        &self.brush
    }

    pub fn brush_width(&self) -> f32 {
        self.brush_width
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.buffer.get_pixel_checked(x, y).map(|p| {
            let [r, g, b, a] = p.0;
            Color32::from_rgba_unmultiplied(r, g, b, a)
        })
    }

    /// True when every pixel equals `color`
    pub fn is_filled_with(&self, color: Color32) -> bool {
        let rgba = to_rgba(color);
        self.buffer.pixels().all(|p| *p == rgba)
    }

    pub fn set_brush_color(&mut self, color: &str) {
        match parse_color(color) {
            Some(fill) => {
                self.brush = color.to_owned();
                self.brush_fill = fill;
            }
            None => log::warn!("Ignoring unrecognized brush color `{}`", color),
        }
    }

    /// Repaints the background while keeping every stroke.
    ///
    /// Snapshots the buffer, fills it with the new color, then restores every
    /// pixel that did not hold the previous background.
    pub fn set_background_color(&mut self, color: &str) {
        let Some(fill) = parse_color(color) else {
            log::warn!("Ignoring unrecognized background color `{}`", color);
            return;
        };

        let snapshot = self.buffer.clone();
        let previous = to_rgba(self.background_fill);
        raster::fill(&mut self.buffer, fill);
        for (x, y, pixel) in snapshot.enumerate_pixels() {
            if *pixel != previous {
                self.buffer.put_pixel(x, y, *pixel);
            }
        }

        self.background = color.to_owned();
        self.background_fill = fill;
        self.touch();
    }

    /// Fills the surface with the background color, discarding all strokes
    pub fn clear(&mut self) {
        raster::fill(&mut self.buffer, self.background_fill);
        self.touch();
    }

    /// Re-derives the dimensions from the container width and clears.
    ///
    /// Strokes are lost on resize.
    pub fn resize(&mut self, container_width: f32) {
        let width = self.width_for_container(container_width);
        log::debug!("Resizing drawing surface to {}x{}", width, self.height);
        self.buffer = RgbaImage::new(width, self.height);
        self.state = DrawingState::Idle;
        self.clear();
    }

    pub fn handle(&mut self, input: PointerInput) {
        match input {
            PointerInput::Down(pos) => self.pointer_down(pos),
            PointerInput::Move(pos) => {
                self.pointer_move(pos);
            }
            PointerInput::Up | PointerInput::Leave => self.pointer_up(),
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        self.state = DrawingState::Drawing { last: pos };
    }

    /// Draws a segment from the last point when drawing; returns whether it did
    pub fn pointer_move(&mut self, pos: Pos2) -> bool {
        let DrawingState::Drawing { last } = self.state else {
            return false;
        };
        raster::draw_segment(&mut self.buffer, last, pos, self.brush_width, self.brush_fill);
        self.state = DrawingState::Drawing { last: pos };
        self.touch();
        true
    }

    pub fn pointer_up(&mut self) {
        self.state = DrawingState::Idle;
    }

    pub fn to_color_image(&self) -> ColorImage {
        let size = [self.buffer.width() as usize, self.buffer.height() as usize];
        ColorImage::from_rgba_unmultiplied(size, self.buffer.as_raw())
    }

    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}
