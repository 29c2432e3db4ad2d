//! Paint error types

use thiserror::Error;

/// Errors raised while building or using drawing resources
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaintError {
    /// A brush could not be allocated from the surface
    #[error("Brush allocation failed: {reason}")]
    BrushAllocation { reason: String },

    /// A color string could not be parsed
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
}

/// Result type for paint operations
pub type Result<T> = std::result::Result<T, PaintError>;
