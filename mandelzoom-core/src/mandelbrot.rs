use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::CoreError;

/// Squared escape radius. `|z| > 2` guarantees divergence for `z² + c`,
/// so the loop compares `|z|²` against 4 and never takes a square root.
const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Parameters controlling escape-time evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalParams {
    /// Iteration budget before a point is declared inside the set.
    pub max_iterations: u32,
}

impl EvalParams {
    pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

    pub fn new(max_iterations: u32) -> crate::Result<Self> {
        if max_iterations < 1 {
            return Err(CoreError::InvalidMaxIterations(max_iterations));
        }
        Ok(Self { max_iterations })
    }
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// The Mandelbrot escape-time evaluator: `z_{n+1} = z_n² + c` from `z₀ = 0`,
/// where `c` is the sampled point on the complex plane.
#[derive(Debug, Clone)]
pub struct Mandelbrot {
    params: EvalParams,
}

impl Mandelbrot {
    pub fn new(params: EvalParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EvalParams {
        &self.params
    }

    /// Count the iterations until the orbit of `c` escapes radius 2.
    ///
    /// Returns a count in `[0, max_iterations]`; a result equal to
    /// `max_iterations` means the point never escaped and is treated as
    /// inside the set.
    pub fn iterate(&self, c: Complex) -> u32 {
        let max = self.params.max_iterations;
        let mut x = 0.0_f64;
        let mut y = 0.0_f64;
        let mut count = 0;

        while x * x + y * y < ESCAPE_RADIUS_SQ && count < max {
            // Both components must be computed from the previous (x, y)
            // pair: the new y uses the old x, so x is updated last.
            let x_next = x * x - y * y + c.re;
            y = 2.0 * x * y + c.im;
            x = x_next;
            count += 1;
        }

        count
    }
}

impl Default for Mandelbrot {
    fn default() -> Self {
        Self::new(EvalParams::default())
    }
}
