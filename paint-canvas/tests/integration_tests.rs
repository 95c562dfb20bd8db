//! Integration tests for paint-canvas.

use paint_canvas::{
    ContainerRect, PaintCanvas, PaintError, PixelBuffer, Point, PointerInput, Tool,
};
use rstest::rstest;

fn seeded(width: u32, height: u32) -> PaintCanvas {
    PaintCanvas::builder(width, height)
        .with_noise_seed(1234)
        .build()
        .unwrap()
}

fn draw_line(canvas: &mut PaintCanvas, from: (f32, f32), to: (f32, f32)) {
    canvas.gesture_start(Point::new(from.0, from.1)).unwrap();
    canvas.gesture_move(Some(Point::new(to.0, to.1))).unwrap();
    canvas.gesture_end().unwrap();
}

fn snapshot(canvas: &PaintCanvas) -> PixelBuffer {
    canvas.surface().capture()
}

/// Press, drag, release, then undo and redo.
#[test]
fn test_single_gesture_undo_redo() {
    let mut canvas = seeded(400, 300);
    let pre = snapshot(&canvas);

    draw_line(&mut canvas, (50.0, 50.0), (100.0, 100.0));
    let post = snapshot(&canvas);
    assert_ne!(pre, post);
    assert!(canvas.can_undo());
    assert!(!canvas.can_redo());

    assert!(canvas.undo());
    assert_eq!(snapshot(&canvas), pre);
    assert!(!canvas.can_undo());
    assert!(canvas.can_redo());

    assert!(canvas.redo());
    assert_eq!(snapshot(&canvas), post);
}

/// Undo restores the state after the previous gesture, for every depth.
#[rstest]
#[case(1)]
#[case(3)]
#[case(10)]
fn test_undo_is_inverse_of_last_gesture(#[case] gestures: usize) {
    let mut canvas = seeded(200, 200);
    let mut states = vec![snapshot(&canvas)];
    for i in 0..gestures {
        let y = 10.0 + i as f32 * 15.0;
        draw_line(&mut canvas, (10.0, y), (190.0, y));
        states.push(snapshot(&canvas));
    }

    assert!(canvas.undo());
    assert_eq!(snapshot(&canvas), states[gestures - 1]);
    assert!(canvas.redo());
    assert_eq!(snapshot(&canvas), states[gestures]);
}

#[test]
fn test_fresh_canvas_undo_redo_noop() {
    let mut canvas = seeded(100, 100);
    let before = snapshot(&canvas);
    assert!(!canvas.undo());
    assert!(!canvas.redo());
    assert_eq!(snapshot(&canvas), before);
}

#[test]
fn test_new_gesture_after_undo_drops_redo() {
    let mut canvas = seeded(100, 100);
    draw_line(&mut canvas, (10.0, 10.0), (90.0, 10.0));
    canvas.undo();
    assert!(canvas.can_redo());

    draw_line(&mut canvas, (10.0, 50.0), (90.0, 50.0));
    assert!(!canvas.can_redo());
    assert!(!canvas.redo());
}

#[test]
fn test_history_drops_oldest_past_capacity() {
    let mut canvas = seeded(120, 120);
    let mut states = vec![snapshot(&canvas)];
    for i in 0..51 {
        let x = 5.0 + (i % 10) as f32 * 11.0;
        let y = 5.0 + (i / 10) as f32 * 20.0;
        draw_line(&mut canvas, (x, y), (x + 4.0, y + 4.0));
        states.push(snapshot(&canvas));
    }

    let mut undone = 0;
    while canvas.undo() {
        undone += 1;
    }
    assert_eq!(undone, 50);
    assert_eq!(snapshot(&canvas), states[1]);
    assert_ne!(snapshot(&canvas), states[0]);
}

#[test]
fn test_clear_is_undoable() {
    let mut canvas = seeded(100, 100);
    draw_line(&mut canvas, (10.0, 50.0), (90.0, 50.0));
    let with_stroke = snapshot(&canvas);

    canvas.clear().unwrap();
    assert_ne!(snapshot(&canvas), with_stroke);
    let [r, g, b, _] = canvas.surface().pixel(50, 50).unwrap();
    // Back to (grainy) background
    assert!(r > 230 && g > 225 && b > 215);

    assert!(canvas.undo());
    assert_eq!(snapshot(&canvas), with_stroke);
}

/// A mark at (x, y) lands near (x * W'/W, y * H'/H) after resizing.
#[rstest]
#[case((100, 100), (200, 200), (30.0, 70.0))]
#[case((400, 300), (200, 150), (300.0, 60.0))]
#[case((120, 80), (360, 80), (20.0, 40.0))]
fn test_resize_preserves_content(
    #[case] from: (u32, u32),
    #[case] to: (u32, u32),
    #[case] mark: (f32, f32),
) {
    let mut canvas = seeded(from.0, from.1);
    canvas.set_brush_color("#0000ff").unwrap();
    canvas.set_brush_size(12.0);
    canvas.gesture_start(Point::new(mark.0, mark.1)).unwrap();
    canvas.gesture_end().unwrap();

    canvas.resize(to.0, to.1).unwrap();
    assert_eq!((canvas.width(), canvas.height()), to);

    let x = (mark.0 * to.0 as f32 / from.0 as f32) as u32;
    let y = (mark.1 * to.1 as f32 / from.1 as f32) as u32;
    let [r, _, b, _] = canvas.surface().pixel(x, y).unwrap();
    assert!(b > 150 && r < 100, "pixel at ({x}, {y}) lost the mark");
}

#[test]
fn test_undo_after_resize_rescales_snapshot() {
    let mut canvas = seeded(100, 100);
    draw_line(&mut canvas, (10.0, 50.0), (90.0, 50.0));
    canvas.resize(200, 200).unwrap();

    assert!(canvas.undo());
    assert_eq!((canvas.width(), canvas.height()), (200, 200));
    assert!(canvas.redo());
    let [r, g, b, _] = canvas.surface().pixel(100, 100).unwrap();
    // The pen stroke in the default swatch is back
    assert!(r < 80 && g < 100 && b < 140);
}

#[test]
fn test_touch_and_mouse_pointer_mapping() {
    let mut canvas = seeded(400, 300);
    // Displayed at half the backing resolution, offset in the page
    let rect = ContainerRect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 150.0,
    };
    canvas
        .pointer_down(&PointerInput::touch(125.0, 75.0), &rect)
        .unwrap();
    canvas
        .pointer_move(&PointerInput::mouse(150.0, 75.0), &rect)
        .unwrap();
    canvas.pointer_up().unwrap();

    // Surface-space stroke from (50, 50) to (100, 50)
    let [r, g, b, _] = canvas.surface().pixel(75, 50).unwrap();
    assert_eq!([r, g, b], [30, 58, 95]);
    assert!(canvas.can_undo());
}

#[test]
fn test_eraser_restores_background_color() {
    let mut canvas = seeded(100, 100);
    draw_line(&mut canvas, (10.0, 50.0), (90.0, 50.0));
    canvas.set_tool(Tool::Eraser);
    canvas.set_brush_color("#ff0000").unwrap();
    draw_line(&mut canvas, (10.0, 50.0), (90.0, 50.0));

    assert_eq!(canvas.surface().pixel(50, 50).unwrap(), [245, 240, 230, 255]);
}

#[test]
fn test_export_image_decodes() {
    let mut canvas = seeded(64, 48);
    draw_line(&mut canvas, (0.0, 0.0), (63.0, 47.0));
    let png = canvas.export_image().unwrap();

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (64, 48));
    assert_eq!(decoded.get_pixel(0, 47).0[3], 255);
}

#[test]
fn test_unknown_tool_name() {
    assert!(matches!(
        "crayon".parse::<Tool>(),
        Err(PaintError::UnknownTool(name)) if name == "crayon"
    ));
}
