use egui::{Color32, pos2};
use pastel_canvas::color::parse_color;
use pastel_canvas::config::SurfaceSettings;
use pastel_canvas::{DrawingState, DrawingSurface, PointerInput};

const BACKGROUND: &str = "#a7d2cb";
const BRUSH: &str = "#c97d7d";

fn create_test_surface() -> DrawingSurface {
    let settings = SurfaceSettings {
        background_color: Some(BACKGROUND.to_owned()),
        brush_color: Some(BRUSH.to_owned()),
        brush_width: 3.0,
        height: 100,
        padding: 30,
    };
    DrawingSurface::attach(230.0, &settings).unwrap()
}

fn color(value: &str) -> Option<Color32> {
    parse_color(value)
}

#[test]
fn test_down_then_move_draws_straight_segment() {
    let mut surface = create_test_surface();
    surface.handle(PointerInput::Down(pos2(20.5, 40.5)));
    surface.handle(PointerInput::Move(pos2(80.5, 40.5)));

    for x in 20..=80 {
        assert_eq!(surface.pixel(x, 40), color(BRUSH), "pixel {x} on the segment");
    }
    // Off the segment
    assert_eq!(surface.pixel(50, 45), color(BACKGROUND));
    assert_eq!(surface.pixel(90, 40), color(BACKGROUND));
}

#[test]
fn test_diagonal_segment_follows_delta() {
    let mut surface = create_test_surface();
    surface.pointer_down(pos2(10.5, 10.5));
    assert!(surface.pointer_move(pos2(40.5, 40.5)));

    for step in 0..=30 {
        assert_eq!(surface.pixel(10 + step, 10 + step), color(BRUSH));
    }
    assert_eq!(surface.pixel(40, 10), color(BACKGROUND));
}

#[test]
fn test_move_while_idle_draws_nothing() {
    let mut surface = create_test_surface();
    surface.handle(PointerInput::Move(pos2(20.0, 20.0)));
    surface.handle(PointerInput::Move(pos2(60.0, 60.0)));
    assert_eq!(surface.state(), DrawingState::Idle);
    assert!(surface.is_filled_with(color(BACKGROUND).unwrap()));
}

#[test]
fn test_up_and_leave_terminate_drawing() {
    for stop in [PointerInput::Up, PointerInput::Leave] {
        let mut surface = create_test_surface();
        surface.handle(PointerInput::Down(pos2(10.5, 10.5)));
        surface.handle(PointerInput::Move(pos2(20.5, 10.5)));
        surface.handle(stop);
        let version = surface.version();

        surface.handle(PointerInput::Move(pos2(150.5, 80.5)));
        assert_eq!(surface.version(), version);
        assert_eq!(surface.pixel(150, 80), color(BACKGROUND));
    }
}

#[test]
fn test_background_change_preserves_strokes() {
    let mut surface = create_test_surface();
    surface.pointer_down(pos2(20.5, 50.5));
    surface.pointer_move(pos2(120.5, 50.5));
    surface.pointer_up();

    surface.set_background_color("#f2d7d5");

    assert_eq!(surface.background_color(), "#f2d7d5");
    for x in 20..=120 {
        assert_eq!(surface.pixel(x, 50), color(BRUSH));
    }
    assert_eq!(surface.pixel(5, 5), color("#f2d7d5"));
    assert_eq!(surface.pixel(190, 99), color("#f2d7d5"));
}

#[test]
fn test_strokes_take_the_current_brush_color() {
    let mut surface = create_test_surface();
    surface.set_brush_color("#6c8b9f");
    surface.pointer_down(pos2(30.5, 30.5));
    surface.pointer_move(pos2(30.5, 30.5));
    assert_eq!(surface.pixel(30, 30), color("#6c8b9f"));
    assert_eq!(surface.brush_color(), "#6c8b9f");
    assert_eq!(surface.brush_width(), 3.0);
}

#[test]
fn test_clear_discards_strokes() {
    let mut surface = create_test_surface();
    surface.pointer_down(pos2(30.5, 30.5));
    surface.pointer_move(pos2(90.5, 60.5));
    surface.clear();
    assert!(surface.is_filled_with(color(BACKGROUND).unwrap()));
}

#[test]
fn test_resize_recomputes_dimensions_and_clears() {
    let mut surface = create_test_surface();
    surface.pointer_down(pos2(30.5, 30.5));
    surface.pointer_move(pos2(90.5, 60.5));

    surface.resize(530.0);

    assert_eq!((surface.width(), surface.height()), (500, 100));
    assert_eq!(surface.state(), DrawingState::Idle);
    assert!(surface.is_filled_with(color(BACKGROUND).unwrap()));
}
