//! Render error types

use spotlight_paint::PaintError;
use thiserror::Error;

/// Reasons a frame could not be drawn
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A drawing resource could not be created or used
    #[error("Paint failed: {0}")]
    Paint(#[from] PaintError),

    /// The host passed bounds with no area
    #[error("Render bounds are empty: {width}x{height}")]
    EmptyBounds { width: f32, height: f32 },
}
