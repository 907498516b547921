use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::CoreError;

/// The rectangular window onto the complex plane currently mapped to the raster.
///
/// A viewport is immutable once created: every zoom action builds a new one
/// rather than mutating bounds in place. The four bounds are finite and
/// ordered (`left < right`, `bottom < top`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Viewport {
    /// The full-plane starting view: the whole set with margin on both sides.
    pub const INITIAL_LEFT: f64 = -2.5;
    pub const INITIAL_RIGHT: f64 = 1.5;
    pub const INITIAL_TOP: f64 = 1.5;
    pub const INITIAL_BOTTOM: f64 = -1.5;

    /// The view every session starts from, and the floor of zoom-out.
    pub fn initial() -> Self {
        Self {
            left: Self::INITIAL_LEFT,
            right: Self::INITIAL_RIGHT,
            top: Self::INITIAL_TOP,
            bottom: Self::INITIAL_BOTTOM,
        }
    }

    /// Create a viewport with explicit bounds.
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> crate::Result<Self> {
        if ![left, right, top, bottom].iter().all(|b| b.is_finite()) {
            return Err(CoreError::InvalidViewport {
                reason: format!("bounds must be finite, got [{left}, {right}] × [{bottom}, {top}]"),
            });
        }
        if left >= right || bottom >= top {
            return Err(CoreError::InvalidViewport {
                reason: format!(
                    "bounds must satisfy left < right and bottom < top, got [{left}, {right}] × [{bottom}, {top}]"
                ),
            });
        }
        Ok(Self {
            left,
            right,
            top,
            bottom,
        })
    }

    /// Map a pixel column to a real coordinate.
    ///
    /// Caller contract: `column <= frame_width` and `frame_width > 0`; the
    /// host validates click coordinates, so out-of-range inputs are a
    /// programmer error rather than a runtime case.
    #[inline]
    pub fn map_x(&self, column: u32, frame_width: u32) -> f64 {
        debug_assert!(frame_width > 0);
        debug_assert!(column <= frame_width);
        self.left + (column as f64 / frame_width as f64) * (self.right - self.left)
    }

    /// Map a pixel row to an imaginary coordinate.
    ///
    /// Row 0 is the top of the raster, so plane y decreases as the row index
    /// grows. The subtraction direction matters: reversing it flips the
    /// image vertically.
    #[inline]
    pub fn map_y(&self, row: u32, frame_height: u32) -> f64 {
        debug_assert!(frame_height > 0);
        debug_assert!(row <= frame_height);
        self.top - (row as f64 / frame_height as f64) * (self.top - self.bottom)
    }

    /// Map a pixel coordinate to its point on the complex plane.
    #[inline]
    pub fn pixel_to_point(&self, column: u32, row: u32, frame_width: u32, frame_height: u32) -> Complex {
        Complex::new(self.map_x(column, frame_width), self.map_y(row, frame_height))
    }

    /// Horizontal extent in complex-plane units.
    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent in complex-plane units.
    #[inline]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn center(&self) -> Complex {
        Complex::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Build the viewport reached by zooming in on `center`.
    ///
    /// Both extents shrink by `factor` and the result is centred on the
    /// given point. For any finite `factor > 1` the bound ordering is
    /// preserved, so this cannot produce an invalid viewport.
    pub fn zoomed_at(&self, center: Complex, factor: f64) -> Self {
        debug_assert!(factor.is_finite() && factor > 0.0);
        let half_width = self.width() / factor / 2.0;
        let half_height = self.height() / factor / 2.0;
        Self {
            left: center.re - half_width,
            right: center.re + half_width,
            top: center.im + half_height,
            bottom: center.im - half_height,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn map_x_edges() {
        let vp = Viewport::initial();
        assert!((vp.map_x(0, 2000) - vp.left).abs() < EPSILON);
        assert!((vp.map_x(2000, 2000) - vp.right).abs() < EPSILON);
    }

    #[test]
    fn map_y_edges() {
        let vp = Viewport::initial();
        assert!((vp.map_y(0, 1500) - vp.top).abs() < EPSILON);
        assert!((vp.map_y(1500, 1500) - vp.bottom).abs() < EPSILON);
    }

    #[test]
    fn map_y_decreases_downward() {
        // Row 0 is the raster top; a larger row index must map lower.
        let vp = Viewport::initial();
        assert!(vp.map_y(100, 1500) > vp.map_y(1400, 1500));
    }

    #[test]
    fn midpoint_maps_to_center() {
        let vp = Viewport::initial();
        let c = vp.pixel_to_point(1000, 750, 2000, 1500);
        let center = vp.center();
        assert!((c.re - center.re).abs() < EPSILON);
        assert!((c.im - center.im).abs() < EPSILON);
    }

    #[test]
    fn extents() {
        let vp = Viewport::initial();
        assert!((vp.width() - 4.0).abs() < EPSILON);
        assert!((vp.height() - 3.0).abs() < EPSILON);
    }

    #[test]
    fn zoomed_at_shrinks_extents() {
        let vp = Viewport::initial();
        let zoomed = vp.zoomed_at(Complex::new(-1.0, 0.0), 5.0);
        assert!((zoomed.width() - 0.8).abs() < EPSILON);
        assert!((zoomed.height() - 0.6).abs() < EPSILON);
        let c = zoomed.center();
        assert!((c.re - (-1.0)).abs() < EPSILON);
        assert!(c.im.abs() < EPSILON);
    }

    #[test]
    fn invalid_ordering() {
        assert!(Viewport::new(1.0, -1.0, 1.0, -1.0).is_err());
        assert!(Viewport::new(-1.0, 1.0, -1.0, 1.0).is_err());
        assert!(Viewport::new(0.0, 0.0, 1.0, -1.0).is_err());
    }

    #[test]
    fn invalid_non_finite() {
        assert!(Viewport::new(f64::NAN, 1.0, 1.0, -1.0).is_err());
        assert!(Viewport::new(-1.0, f64::INFINITY, 1.0, -1.0).is_err());
    }

    #[test]
    fn deserializes_from_plain_bounds() {
        let json = r#"{"left":-2.5,"right":1.5,"top":1.5,"bottom":-1.5}"#;
        let vp: Viewport = serde_json::from_str(json).unwrap();
        assert_eq!(vp, Viewport::initial());
    }
}
