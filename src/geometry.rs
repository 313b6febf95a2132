use egui::{Pos2, Rect};

/// Translates a pointer position into coordinates local to `surface_rect`
pub fn cursor_position(surface_rect: Rect, pointer: Pos2) -> Pos2 {
    (pointer - surface_rect.min).to_pos2()
}

/// Shortest distance from `p` to the segment `a`-`b`
pub fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
