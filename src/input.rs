use crate::geometry::cursor_position;
use egui::{Event, PointerButton, Pos2, Rect, TouchId, TouchPhase};

/// Pointer input in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Down(Pos2),
    Move(Pos2),
    Up,
    /// The pointer left the surface
    Leave,
}

/// Converts raw egui events into [`PointerInput`] for one surface.
///
/// Touches are folded into the same stream: only the first active touch is
/// followed, and mouse-style events are ignored while it lasts since egui
/// synthesizes those from touches as well.
#[derive(Debug, Default)]
pub struct InputHandler {
    pointer_inside: bool,
    active_touch: Option<TouchId>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_touch_active(&self) -> bool {
        self.active_touch.is_some()
    }

    /// Process this frame's events against the surface's screen rect
    pub fn process(&mut self, events: &[Event], surface_rect: Rect) -> Vec<PointerInput> {
        let mut inputs = Vec::new();
        for event in events {
            match event {
                Event::Touch { id, phase, pos, .. } => {
                    if let Some(input) = self.process_touch(*id, *phase, *pos, surface_rect) {
                        inputs.push(input);
                    }
                }
                _ if self.active_touch.is_some() => {}
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    if !*pressed {
                        inputs.push(PointerInput::Up);
                    } else if surface_rect.contains(*pos) {
                        self.pointer_inside = true;
                        inputs.push(PointerInput::Down(cursor_position(surface_rect, *pos)));
                    }
                }
                Event::PointerMoved(pos) => {
                    if surface_rect.contains(*pos) {
                        self.pointer_inside = true;
                        inputs.push(PointerInput::Move(cursor_position(surface_rect, *pos)));
                    } else if self.pointer_inside {
                        self.pointer_inside = false;
                        inputs.push(PointerInput::Leave);
                    }
                }
                Event::PointerGone => {
                    if self.pointer_inside {
                        self.pointer_inside = false;
                        inputs.push(PointerInput::Leave);
                    }
                }
                _ => {}
            }
        }
        inputs
    }

    fn process_touch(
        &mut self,
        id: TouchId,
        phase: TouchPhase,
        pos: Pos2,
        surface_rect: Rect,
    ) -> Option<PointerInput> {
        match phase {
            TouchPhase::Start => {
                if self.active_touch.is_some() || !surface_rect.contains(pos) {
                    return None;
                }
                self.active_touch = Some(id);
                Some(PointerInput::Down(cursor_position(surface_rect, pos)))
            }
            TouchPhase::Move if self.active_touch == Some(id) => {
                Some(PointerInput::Move(cursor_position(surface_rect, pos)))
            }
            TouchPhase::End | TouchPhase::Cancel if self.active_touch == Some(id) => {
                self.active_touch = None;
                Some(PointerInput::Up)
            }
            _ => None,
        }
    }
}
