use crate::geometry::distance_to_segment;
use egui::{Color32, Pos2, pos2};
use image::{Rgba, RgbaImage};

pub fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

/// Fills the whole buffer with `color`
pub fn fill(buffer: &mut RgbaImage, color: Color32) {
    let rgba = to_rgba(color);
    for pixel in buffer.pixels_mut() {
        *pixel = rgba;
    }
}

/// Paints a line from `a` to `b` with round caps.
///
/// A pixel is covered when its center lies within `width / 2` of the segment.
/// Returns whether any pixel was written.
pub fn draw_segment(buffer: &mut RgbaImage, a: Pos2, b: Pos2, width: f32, color: Color32) -> bool {
    let radius = (width / 2.0).max(0.5);
    let (w, h) = buffer.dimensions();
    if w == 0 || h == 0 {
        return false;
    }

    let min_x = (a.x.min(b.x) - radius).floor().max(0.0);
    let min_y = (a.y.min(b.y) - radius).floor().max(0.0);
    let max_x = (a.x.max(b.x) + radius).ceil().min(w as f32 - 1.0);
    let max_y = (a.y.max(b.y) + radius).ceil().min(h as f32 - 1.0);
    if min_x > max_x || min_y > max_y {
        return false;
    }

    let rgba = to_rgba(color);
    let mut painted = false;
    for y in min_y as u32..=max_y as u32 {
        for x in min_x as u32..=max_x as u32 {
            let center = pos2(x as f32 + 0.5, y as f32 + 0.5);
            if distance_to_segment(center, a, b) <= radius {
                buffer.put_pixel(x, y, rgba);
                painted = true;
            }
        }
    }
    painted
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color32 = Color32::WHITE;
    const INK: Color32 = Color32::BLACK;

    fn canvas() -> RgbaImage {
        let mut buffer = RgbaImage::new(20, 20);
        fill(&mut buffer, BG);
        buffer
    }

    #[test]
    fn test_horizontal_segment() {
        let mut buffer = canvas();
        assert!(draw_segment(&mut buffer, pos2(2.5, 10.5), pos2(15.5, 10.5), 3.0, INK));
        for x in 2..=15 {
            assert_eq!(buffer.get_pixel(x, 10), &to_rgba(INK));
        }
        // Outside the stroke width
        assert_eq!(buffer.get_pixel(8, 13), &to_rgba(BG));
        assert_eq!(buffer.get_pixel(8, 7), &to_rgba(BG));
    }

    #[test]
    fn test_round_cap_extends_past_endpoint() {
        let mut buffer = canvas();
        draw_segment(&mut buffer, pos2(10.5, 10.5), pos2(15.5, 10.5), 6.0, INK);
        assert_eq!(buffer.get_pixel(7, 10), &to_rgba(INK));
        assert_eq!(buffer.get_pixel(8, 8), &to_rgba(INK));
        // Corner a square cap would cover
        assert_eq!(buffer.get_pixel(7, 7), &to_rgba(BG));
    }

    #[test]
    fn test_zero_length_segment_paints_dot() {
        let mut buffer = canvas();
        assert!(draw_segment(&mut buffer, pos2(7.5, 7.5), pos2(7.5, 7.5), 3.0, INK));
        assert_eq!(buffer.get_pixel(7, 7), &to_rgba(INK));
    }

    #[test]
    fn test_segment_is_clipped() {
        let mut buffer = canvas();
        assert!(draw_segment(&mut buffer, pos2(-10.0, 0.5), pos2(5.0, 0.5), 3.0, INK));
        assert_eq!(buffer.get_pixel(0, 0), &to_rgba(INK));
        assert!(!draw_segment(&mut buffer, pos2(-30.0, -30.0), pos2(-20.0, -25.0), 3.0, INK));
    }
}
