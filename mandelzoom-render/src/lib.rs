pub mod error;
pub mod palette;
pub mod raster;
pub mod renderer;

pub use error::RenderError;
pub use palette::PaletteTable;
pub use raster::Raster;
pub use renderer::render;

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
