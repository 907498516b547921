pub mod complex;
pub mod error;
pub mod history;
pub mod mandelbrot;
pub mod viewport;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use error::CoreError;
pub use history::{MouseButton, ZoomHistory, ZOOM_FACTOR};
pub use mandelbrot::{EvalParams, Mandelbrot};
pub use viewport::Viewport;

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
