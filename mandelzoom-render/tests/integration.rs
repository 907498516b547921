use mandelzoom_core::{EvalParams, Mandelbrot, MouseButton, Viewport, ZoomHistory};
use mandelzoom_render::{render, PaletteTable};

const FRAME_WIDTH: u32 = 80;
const FRAME_HEIGHT: u32 = 60;

/// Drive the whole stack the way the host does: click, rewind, and render
/// the current history entry after each event.
#[test]
fn click_render_cycle() {
    let params = EvalParams::new(200).unwrap();
    let fractal = Mandelbrot::new(params);
    let palette = PaletteTable::new(params.max_iterations).unwrap();
    let mut history = ZoomHistory::new(Viewport::initial());

    let first = render(
        &fractal,
        &history.current(),
        &palette,
        FRAME_WIDTH,
        FRAME_HEIGHT,
    )
    .unwrap();

    // Zoom onto the set boundary and re-render.
    assert!(history.handle_click(MouseButton::Primary, 30, 30, FRAME_WIDTH, FRAME_HEIGHT));
    let zoomed = render(
        &fractal,
        &history.current(),
        &palette,
        FRAME_WIDTH,
        FRAME_HEIGHT,
    )
    .unwrap();
    assert_ne!(first.pixels, zoomed.pixels);

    // Zoom back out: the frame must reproduce the original exactly.
    assert!(history.handle_click(MouseButton::Secondary, 0, 0, FRAME_WIDTH, FRAME_HEIGHT));
    let restored = render(
        &fractal,
        &history.current(),
        &palette,
        FRAME_WIDTH,
        FRAME_HEIGHT,
    )
    .unwrap();
    assert_eq!(first.pixels, restored.pixels);
}

/// One palette instance serves every pass of a session; it only depends on
/// the iteration budget.
#[test]
fn palette_is_reusable_across_passes() {
    let params = EvalParams::new(100).unwrap();
    let fractal = Mandelbrot::new(params);
    let palette = PaletteTable::new(params.max_iterations).unwrap();
    let vp = Viewport::initial();

    let a = render(&fractal, &vp, &palette, 32, 24).unwrap();
    let b = render(&fractal, &vp, &palette, 32, 24).unwrap();
    assert_eq!(a.pixels, b.pixels);
}
