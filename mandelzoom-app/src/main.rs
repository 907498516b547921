use eframe::egui;
use tracing::{info, warn};

use mandelzoom_core::{EvalParams, Mandelbrot, MouseButton, Viewport, ZoomHistory};
use mandelzoom_render::{render, PaletteTable};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Raster width in device pixels, fixed for the whole run.
const FRAME_WIDTH: u32 = 2000;
/// Raster height in device pixels, fixed for the whole run.
const FRAME_HEIGHT: u32 = 1500;

/// Startup window size; the raster is larger and reachable by scrolling.
const WINDOW_WIDTH: f32 = 1100.0;
const WINDOW_HEIGHT: f32 = 825.0;

// ---------------------------------------------------------------------------
// Application
// ---------------------------------------------------------------------------

struct MandelZoomApp {
    fractal: Mandelbrot,
    /// Built once: a pure function of the iteration budget.
    palette: PaletteTable,
    history: ZoomHistory,
    texture: Option<egui::TextureHandle>,
    needs_render: bool,
}

impl MandelZoomApp {
    fn new() -> Self {
        let params = EvalParams::default();
        let palette =
            PaletteTable::new(params.max_iterations).expect("default iteration budget is >= 1");
        Self {
            fractal: Mandelbrot::new(params),
            palette,
            history: ZoomHistory::new(Viewport::initial()),
            texture: None,
            needs_render: true,
        }
    }

    /// Recompute the raster for the current history entry and upload it.
    ///
    /// This blocks the UI thread on purpose: input is serialized against
    /// rendering, so a pass always completes before the next click is seen.
    fn repaint_raster(&mut self, ctx: &egui::Context) {
        let viewport = self.history.current();
        info!(
            depth = self.history.cursor(),
            center = %viewport.center(),
            "rendering viewport"
        );
        match render(
            &self.fractal,
            &viewport,
            &self.palette,
            FRAME_WIDTH,
            FRAME_HEIGHT,
        ) {
            Ok(raster) => {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [raster.width as usize, raster.height as usize],
                    &raster.pixels,
                );
                // NEAREST: the raster is blitted 1:1, never resampled.
                self.texture =
                    Some(ctx.load_texture("fractal", image, egui::TextureOptions::NEAREST));
            }
            Err(e) => warn!("render pass failed: {e}"),
        }
        self.needs_render = false;
    }

    /// Translate a click on the image into the history controller's protocol.
    fn handle_clicks(&mut self, response: &egui::Response) {
        let button = if response.clicked_by(egui::PointerButton::Primary) {
            MouseButton::Primary
        } else if response.clicked_by(egui::PointerButton::Secondary) {
            MouseButton::Secondary
        } else {
            // Middle and extra buttons are outside the protocol.
            return;
        };

        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };
        let px = ((pos.x - response.rect.min.x) as u32).min(FRAME_WIDTH - 1);
        let py = ((pos.y - response.rect.min.y) as u32).min(FRAME_HEIGHT - 1);

        if self
            .history
            .handle_click(button, px, py, FRAME_WIDTH, FRAME_HEIGHT)
        {
            self.needs_render = true;
        }
    }
}

impl eframe::App for MandelZoomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.needs_render {
            self.repaint_raster(ctx);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                egui::ScrollArea::both().show(ui, |ui| {
                    if let Some(tex) = &self.texture {
                        let image = egui::Image::new((
                            tex.id(),
                            egui::vec2(FRAME_WIDTH as f32, FRAME_HEIGHT as f32),
                        ))
                        .sense(egui::Sense::click());
                        let response = ui.add(image);
                        self.handle_clicks(&response);
                    }
                });
            });
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting MandelZoom");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("MandelZoom")
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "MandelZoom",
        options,
        Box::new(|_cc| Ok(Box::new(MandelZoomApp::new()))),
    )
}
