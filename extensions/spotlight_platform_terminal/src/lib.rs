//! Spotlight Terminal Platform
//!
//! Runs the marquee in a terminal. Paint commands recorded by
//! [`spotlight_paint::PaintContext`] are replayed onto a grid of character
//! cells ([`CellCanvas`]) and written out with crossterm.

pub mod error;
pub mod host;
pub mod raster;

pub use error::{PlatformError, Result};
pub use host::{render_frame, HostOptions, TerminalHost};
pub use raster::{Cell, CellCanvas};
