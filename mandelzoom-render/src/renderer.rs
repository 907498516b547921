use std::time::Instant;

use tracing::{debug, info};

use mandelzoom_core::{Mandelbrot, Viewport};

use crate::error::RenderError;
use crate::palette::PaletteTable;
use crate::raster::Raster;

/// Render one full frame of the viewport into a fresh raster.
///
/// The pass is synchronous and single-threaded: it walks the raster
/// row-major, maps each pixel through the viewport, runs the escape-time
/// evaluator, and looks up the display color. Pixels are independent, so
/// there is no ordering requirement between them — but none is exploited
/// either.
///
/// The palette must have been built for the same iteration budget as the
/// evaluator, otherwise escaped counts and the interior sentinel disagree.
pub fn render(
    fractal: &Mandelbrot,
    viewport: &Viewport,
    palette: &PaletteTable,
    frame_width: u32,
    frame_height: u32,
) -> crate::Result<Raster> {
    if frame_width == 0 || frame_height == 0 {
        return Err(RenderError::InvalidDimensions {
            width: frame_width,
            height: frame_height,
        });
    }
    debug_assert_eq!(palette.max_iterations(), fractal.params().max_iterations);

    let start = Instant::now();
    debug!(
        frame_width,
        frame_height,
        left = viewport.left,
        top = viewport.top,
        "starting render pass"
    );

    let mut raster = Raster::new(frame_width, frame_height);
    for row in 0..frame_height {
        for column in 0..frame_width {
            let c = viewport.pixel_to_point(column, row, frame_width, frame_height);
            let count = fractal.iterate(c);
            raster.put_pixel(column, row, palette.color_for(count));
        }
    }

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        frame_width, frame_height, "render pass complete"
    );
    Ok(raster)
}
