use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::viewport::Viewport;

/// Ratio by which both viewport extents shrink on every zoom-in step.
pub const ZOOM_FACTOR: f64 = 5.0;

/// The two mouse buttons the click protocol understands. The host ignores
/// every other button before reaching the history controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Primary,
    Secondary,
}

/// The ordered sequence of viewports visited in this session.
///
/// Entry 0 is the initial full-plane view and the cursor always points at
/// the active entry (`0 <= cursor < len`). Zooming in inserts the new
/// viewport directly after the cursor; zooming out only moves the cursor
/// back, never discarding entries, so deeper views stay reachable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoomHistory {
    entries: Vec<Viewport>,
    cursor: usize,
}

impl ZoomHistory {
    pub fn new(initial: Viewport) -> Self {
        let mut entries = Vec::with_capacity(64);
        entries.push(initial);
        Self { entries, cursor: 0 }
    }

    /// The viewport the render pass should draw.
    #[inline]
    pub fn current(&self) -> Viewport {
        self.entries[self.cursor]
    }

    /// Zoom depth: 0 at the initial view.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zoom in on the plane point under pixel `(px, py)`.
    ///
    /// The new viewport is centred on the click with both extents divided
    /// by [`ZOOM_FACTOR`], inserted after the cursor, and made current.
    pub fn zoom_in(&mut self, px: u32, py: u32, frame_width: u32, frame_height: u32) {
        let current = self.current();
        let target = current.pixel_to_point(px, py, frame_width, frame_height);
        let next = current.zoomed_at(target, ZOOM_FACTOR);

        self.entries.insert(self.cursor + 1, next);
        self.cursor += 1;
        debug!(
            depth = self.cursor,
            point = %target,
            width = next.width(),
            "zoom in"
        );
    }

    /// Step back to the previous viewport.
    ///
    /// Returns `false` (and changes nothing) when already at the initial
    /// view. Forward entries are kept.
    pub fn zoom_out(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        debug!(depth = self.cursor, "zoom out");
        true
    }

    /// Dispatch a click event from the host.
    ///
    /// Returns `true` when the current viewport changed and the raster
    /// needs to be redrawn.
    pub fn handle_click(
        &mut self,
        button: MouseButton,
        px: u32,
        py: u32,
        frame_width: u32,
        frame_height: u32,
    ) -> bool {
        match button {
            MouseButton::Primary => {
                self.zoom_in(px, py, frame_width, frame_height);
                true
            }
            MouseButton::Secondary => self.zoom_out(),
        }
    }
}
