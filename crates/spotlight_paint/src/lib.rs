//! Spotlight Paint API
//!
//! The drawing vocabulary used by the spotlight marquee.
//!
//! # Features
//!
//! - RGBA colors with HTML color string parsing
//! - Horizontal linear gradients bound to a rectangle
//! - Replace and intersect clipping
//! - Text drawing with solid or gradient brushes
//! - A recording surface ([`PaintContext`]) with scoped brush handles

pub mod color;
pub mod context;
pub mod error;
pub mod gradient;
pub mod primitives;
pub mod text;

pub use color::Color;
pub use context::{Brush, FillStyle, PaintCommand, PaintContext, Surface};
pub use error::{PaintError, Result};
pub use gradient::{Gradient, GradientStop};
pub use primitives::*;
pub use text::{
    EstimatedMeasurer, Font, FontWeight, MonospaceMeasurer, TextMeasurer, TextMetrics, TextSize,
};
