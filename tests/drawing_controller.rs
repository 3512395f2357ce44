use egui::{Color32, Pos2};
use sketchbook::{CanvasConfig, DrawingController, ToolMode};

fn controller() -> DrawingController {
    DrawingController::new(CanvasConfig {
        width: 80,
        height: 60,
        ..CanvasConfig::default()
    })
}

fn drag_shape(controller: &mut DrawingController, mode: ToolMode, from: (f32, f32), to: (f32, f32)) {
    controller.set_mode(mode);
    controller.on_pointer_down(Pos2::new(from.0, from.1));
    controller.on_pointer_drag(Pos2::new((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0));
    controller.on_pointer_up(Pos2::new(to.0, to.1));
}

#[test]
fn test_first_draw_creates_both_rasters() {
    let mut controller = controller();
    assert!(controller.canvas().is_none());
    assert!(controller.export_raster().is_none());

    drag_shape(&mut controller, ToolMode::Line, (0.0, 0.0), (10.0, 0.0));

    let canvas = controller.canvas().unwrap();
    assert_eq!((canvas.width(), canvas.height()), (80, 60));
    assert_eq!(canvas.get_pixel(0, 0), Some(Color32::BLACK));
    assert_eq!(canvas.get_pixel(10, 0), Some(Color32::BLACK));
}

#[test]
fn test_rasters_stay_identical_across_commits() {
    let mut controller = controller();

    drag_shape(&mut controller, ToolMode::Rectangle, (10.0, 10.0), (50.0, 30.0));
    assert_eq!(controller.canvas(), controller.export_raster());

    controller.set_color(Color32::RED);
    drag_shape(&mut controller, ToolMode::Oval, (70.0, 5.0), (20.0, 55.0));
    assert_eq!(controller.canvas(), controller.export_raster());

    controller.set_color(Color32::BLUE);
    controller.set_mode(ToolMode::FreeLine);
    controller.on_pointer_down(Pos2::new(1.0, 1.0));
    for step in 1..20 {
        controller.on_pointer_drag(Pos2::new(1.0 + step as f32 * 3.0, 1.0 + step as f32 * 2.5));
        assert_eq!(controller.canvas(), controller.export_raster());
    }

    drag_shape(&mut controller, ToolMode::Eraser, (0.0, 30.0), (79.0, 30.0));
    assert_eq!(controller.canvas(), controller.export_raster());
}

#[test]
fn test_rectangle_commit_example() {
    let mut controller = controller();
    drag_shape(&mut controller, ToolMode::Rectangle, (10.0, 10.0), (50.0, 30.0));

    let canvas = controller.canvas().unwrap();
    for (x, y) in [(10, 10), (50, 10), (50, 30), (10, 30), (30, 10), (10, 20)] {
        assert_eq!(canvas.get_pixel(x, y), Some(Color32::BLACK), "({x}, {y})");
    }
    assert_eq!(canvas.get_pixel(9, 10), Some(Color32::WHITE));
    assert_eq!(canvas.get_pixel(51, 30), Some(Color32::WHITE));
    assert_eq!(canvas.get_pixel(30, 20), Some(Color32::WHITE));
}

#[test]
fn test_leftward_oval_commit_example() {
    let mut controller = controller();
    drag_shape(&mut controller, ToolMode::Oval, (50.0, 10.0), (10.0, 30.0));

    let canvas = controller.canvas().unwrap();
    assert_eq!(canvas.get_pixel(10, 20), Some(Color32::BLACK));
    assert_eq!(canvas.get_pixel(50, 20), Some(Color32::BLACK));
    assert_eq!(canvas.get_pixel(30, 10), Some(Color32::BLACK));
    assert_eq!(canvas.get_pixel(30, 30), Some(Color32::BLACK));
    assert_eq!(canvas.get_pixel(9, 20), Some(Color32::WHITE));
    assert_eq!(canvas.get_pixel(51, 20), Some(Color32::WHITE));
}

#[test]
fn test_changes_between_down_and_up_apply_at_commit_time() {
    let mut controller = controller();
    controller.set_mode(ToolMode::Line);
    controller.on_pointer_down(Pos2::new(10.0, 10.0));

    controller.set_mode(ToolMode::Rectangle);
    controller.set_color(Color32::RED);
    let anchor = controller.anchor().unwrap();
    assert_eq!(anchor.start, Pos2::new(10.0, 10.0));
    assert_eq!(anchor.end, Pos2::new(10.0, 10.0));

    controller.on_pointer_up(Pos2::new(50.0, 30.0));

    let canvas = controller.canvas().unwrap();
    // drawn as a red rectangle, not a black diagonal line
    assert_eq!(canvas.get_pixel(50, 10), Some(Color32::RED));
    assert_eq!(canvas.get_pixel(30, 20), Some(Color32::WHITE));
}

#[test]
fn test_mode_and_color_changes_do_not_touch_rasters() {
    let mut controller = controller();
    drag_shape(&mut controller, ToolMode::Line, (0.0, 0.0), (20.0, 20.0));
    let before = controller.canvas().cloned();
    let revision = controller.revision();

    controller.set_mode(ToolMode::Oval);
    controller.set_color(Color32::GREEN);

    assert_eq!(controller.canvas().cloned(), before);
    assert_eq!(controller.revision(), revision);
}

#[test]
fn test_reset_discards_previous_strokes() {
    let mut controller = controller();
    drag_shape(&mut controller, ToolMode::Line, (0.0, 0.0), (20.0, 20.0));
    controller.reset();
    assert!(controller.canvas().is_none());
    assert!(controller.export_raster().is_none());

    drag_shape(&mut controller, ToolMode::Line, (40.0, 40.0), (45.0, 40.0));
    let canvas = controller.canvas().unwrap();
    assert_eq!(canvas.get_pixel(10, 10), Some(Color32::WHITE));
    assert_eq!(canvas.get_pixel(42, 40), Some(Color32::BLACK));
}

#[test]
fn test_out_of_range_coordinates_are_accepted() {
    let mut controller = controller();
    drag_shape(&mut controller, ToolMode::Rectangle, (-30.0, -30.0), (500.0, 500.0));
    drag_shape(&mut controller, ToolMode::Oval, (200.0, 10.0), (-100.0, 400.0));
    assert_eq!(controller.canvas(), controller.export_raster());
}

#[test]
fn test_free_line_follows_each_drag_segment() {
    let mut controller = controller();
    controller.set_mode(ToolMode::FreeLine);
    controller.set_color(Color32::RED);

    controller.on_pointer_down(Pos2::new(1.0, 1.0));
    controller.on_pointer_drag(Pos2::new(5.0, 1.0));
    controller.on_pointer_drag(Pos2::new(5.0, 9.0));

    for raster in [controller.canvas().unwrap(), controller.export_raster().unwrap()] {
        assert_eq!(raster.get_pixel(3, 1), Some(Color32::RED));
        assert_eq!(raster.get_pixel(5, 5), Some(Color32::RED));
        // no segment closes the path back to the start
        assert_eq!(raster.get_pixel(1, 9), Some(Color32::WHITE));
    }
}

#[test]
fn test_extreme_coordinates_in_every_mode() {
    let mut controller = controller();

    drag_shape(&mut controller, ToolMode::Rectangle, (-2.0e9, 10.0), (2.0e9, 20.0));
    drag_shape(&mut controller, ToolMode::Line, (0.0, 40.0), (2.0e8, 40.0));
    drag_shape(&mut controller, ToolMode::Oval, (f32::MIN, f32::MIN), (f32::MAX, f32::MAX));
    drag_shape(&mut controller, ToolMode::Oval, (f32::MAX, 5.0), (f32::MIN, f32::MAX));
    assert_eq!(controller.canvas(), controller.export_raster());

    controller.set_mode(ToolMode::FreeLine);
    controller.on_pointer_down(Pos2::new(f32::MIN, 30.0));
    controller.on_pointer_drag(Pos2::new(f32::MAX, 30.0));
    controller.on_pointer_drag(Pos2::new(f32::INFINITY, f32::NEG_INFINITY));
    controller.on_pointer_up(Pos2::new(f32::NAN, f32::NAN));

    let canvas = controller.canvas().unwrap();
    assert_eq!(canvas.get_pixel(40, 10), Some(Color32::BLACK));
    assert_eq!(canvas.get_pixel(40, 20), Some(Color32::BLACK));
    assert_eq!(canvas.get_pixel(79, 40), Some(Color32::BLACK));
    assert_eq!(canvas.get_pixel(40, 30), Some(Color32::BLACK));
    assert_eq!(controller.canvas(), controller.export_raster());

    controller.set_mode(ToolMode::Eraser);
    controller.on_pointer_down(Pos2::new(f32::MAX, 30.0));
    controller.on_pointer_drag(Pos2::new(f32::MIN, 30.0));
    controller.on_pointer_up(Pos2::new(f32::MIN, 30.0));

    let canvas = controller.canvas().unwrap();
    assert_eq!(canvas.get_pixel(40, 30), Some(Color32::WHITE));
    assert_eq!(canvas.get_pixel(40, 10), Some(Color32::BLACK));
    assert_eq!(controller.canvas(), controller.export_raster());
}
