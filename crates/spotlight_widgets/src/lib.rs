//! Spotlight Widget Library
//!
//! The marquee ("spotlight") control: gray label text with a multi-band
//! color gradient that is only visible inside a window sweeping left and right.

pub mod error;
pub mod layout;
pub mod marquee;
pub mod style;

pub use error::RenderError;
pub use layout::{layout, moving_window, Segment, SEGMENT_UNITS};
pub use marquee::{FrameOutcome, SpotlightControl};
pub use style::{GradientSegmentSpec, SpotlightStyle, MARQUEE_STOPS};
