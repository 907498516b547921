use crate::error::RenderError;

/// Hue completes a full trip around the color wheel every this many
/// iteration steps.
const HUE_PERIOD: f64 = 256.0;

/// Brightness is `i / (i + SOFTENING)`: it climbs towards 1 as the count
/// grows, so pixels that escape quickly render darker and banding near
/// the set boundary is smoothed out.
const BRIGHTNESS_SOFTENING: f64 = 8.0;

/// Color of pixels that never escape (interior of the set).
pub const INTERIOR_COLOR: [u8; 4] = [0, 0, 0, 255];

/// A precomputed mapping from iteration count to RGBA color.
///
/// The table is a pure function of `max_iterations`, so one instance can be
/// cached and reused across render passes.
#[derive(Debug, Clone)]
pub struct PaletteTable {
    max_iterations: u32,
    colors: Vec<[u8; 4]>,
}

impl PaletteTable {
    /// Build the table for the given iteration budget.
    ///
    /// Entry `i` carries hue `i / 256` (wrapping), full saturation, and
    /// brightness `i / (i + 8)`.
    pub fn new(max_iterations: u32) -> crate::Result<Self> {
        if max_iterations == 0 {
            return Err(RenderError::EmptyPalette);
        }
        let colors = (0..max_iterations)
            .map(|i| {
                let i = i as f64;
                let hue = (i / HUE_PERIOD).fract();
                let brightness = i / (i + BRIGHTNESS_SOFTENING);
                hsb_to_rgba(hue, 1.0, brightness)
            })
            .collect();
        Ok(Self {
            max_iterations,
            colors,
        })
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Map an iteration count from the evaluator to its display color.
    ///
    /// A count of `max_iterations` is the interior sentinel and renders
    /// black. Escaped counts index the table at `count - 1`; a count of 0
    /// is clamped to the first entry instead of underflowing.
    #[inline]
    pub fn color_for(&self, iterations: u32) -> [u8; 4] {
        if iterations >= self.max_iterations {
            return INTERIOR_COLOR;
        }
        self.colors[iterations.saturating_sub(1) as usize]
    }
}

/// Convert hue/saturation/brightness (each in `[0, 1]`) to opaque RGBA.
fn hsb_to_rgba(hue: f64, saturation: f64, brightness: f64) -> [u8; 4] {
    let h = hue.rem_euclid(1.0) * 6.0;
    let sector = h.floor() as u32 % 6;
    let f = h - h.floor();

    let v = brightness;
    let p = v * (1.0 - saturation);
    let q = v * (1.0 - saturation * f);
    let t = v * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    [
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
        255,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_entry_per_iteration() {
        let p = PaletteTable::new(1000).unwrap();
        assert_eq!(p.colors.len(), 1000);
    }

    #[test]
    fn zero_budget_is_rejected() {
        assert!(matches!(
            PaletteTable::new(0),
            Err(RenderError::EmptyPalette)
        ));
    }

    #[test]
    fn interior_is_black_sentinel() {
        let p = PaletteTable::new(1000).unwrap();
        assert_eq!(p.color_for(1000), INTERIOR_COLOR);
    }

    #[test]
    fn zero_count_clamps_to_first_entry() {
        // A count of 0 must not index position -1; it shares the first
        // entry with count 1.
        let p = PaletteTable::new(1000).unwrap();
        assert_eq!(p.color_for(0), p.color_for(1));
    }

    #[test]
    fn brightness_climbs_with_iteration_count() {
        let p = PaletteTable::new(1000).unwrap();
        let luma = |c: [u8; 4]| c[0] as u32 + c[1] as u32 + c[2] as u32;
        // i/(i+8): 0.0 at entry 0, 0.5 at entry 8, ~0.94 at entry 128.
        assert_eq!(luma(p.colors[0]), 0);
        assert!(luma(p.colors[8]) > luma(p.colors[2]));
        assert!(luma(p.colors[128]) > luma(p.colors[8]));
    }

    #[test]
    fn entry_eight_is_half_bright() {
        let p = PaletteTable::new(1000).unwrap();
        let max_channel = p.colors[8].iter().take(3).copied().max().unwrap();
        // brightness 8 / 16 = 0.5 → strongest channel ≈ 128.
        assert!((127..=129).contains(&max_channel));
    }

    #[test]
    fn hue_wraps_every_period() {
        // Entries one full period apart share the hue sector; their
        // channel ratios agree even though brightness differs.
        let p = PaletteTable::new(1000).unwrap();
        let a = p.colors[300];
        let b = p.colors[300 + 256];
        let dominant = |c: [u8; 4]| (0..3).max_by_key(|&i| c[i]).unwrap();
        assert_eq!(dominant(a), dominant(b));
    }

    #[test]
    fn escaped_counts_are_opaque() {
        let p = PaletteTable::new(256).unwrap();
        for n in [0, 1, 17, 255] {
            assert_eq!(p.color_for(n)[3], 255);
        }
    }
}
