use thiserror::Error;

/// Errors originating from the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid raster dimensions: {width}×{height} (must be > 0)")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("palette needs at least one entry (max iterations was 0)")]
    EmptyPalette,
}
