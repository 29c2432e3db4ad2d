//! Marquee style and configuration values
//!
//! Everything the renderer reads during a frame is passed in through
//! [`SpotlightStyle`]; the control keeps no other configuration.

use std::time::Duration;

use smallvec::{smallvec, SmallVec};
use spotlight_paint::{Color, Font, Insets};

/// The five gradient stops of the sweep (0xAARRGGBB)
pub const MARQUEE_STOPS: [u32; 5] = [
    0xFF9C_1031, // crimson
    0xFFBE_0E20, // red
    0xFF9C_12AC, // violet
    0xFF0A_8DC3, // blue
    0xFF1A_EBCC, // teal
];

/// One colored band of the label.
///
/// `width_units` is measured in tenths of the label's width; a full set of
/// bands is expected to add up to ten units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientSegmentSpec {
    pub width_units: f32,
    pub color_from: Color,
    pub color_to: Color,
}

impl GradientSegmentSpec {
    pub const fn new(width_units: f32, color_from: Color, color_to: Color) -> Self {
        Self {
            width_units,
            color_from,
            color_to,
        }
    }
}

/// Marquee configuration
#[derive(Clone, Debug, PartialEq)]
pub struct SpotlightStyle {
    /// Label text
    pub text: String,
    /// Label font
    pub font: Font,
    /// Inner padding between the bounds and the label
    pub padding: Insets,
    /// Color of the static label underneath the sweep
    pub track_color: Color,
    /// Width of the moving window in pixels
    pub window_width: f32,
    /// Pixels the window moves per tick
    pub step: i32,
    /// Time between ticks
    pub tick_interval: Duration,
    /// Gradient bands, left to right
    pub segments: SmallVec<[GradientSegmentSpec; 4]>,
    /// Draw the static demonstration rows above the marquee
    pub preview_rows: bool,
    /// Vertical distance between rows when preview rows are on
    pub row_spacing: f32,
}

impl Default for SpotlightStyle {
    fn default() -> Self {
        let stop = |i: usize| Color::from_argb_hex(MARQUEE_STOPS[i]);
        Self {
            text: "WinFormDevelopers".to_string(),
            font: Font::new("Arial Black", 50.0).bold(),
            padding: Insets::uniform(10.0),
            track_color: Color::GRAY,
            window_width: 100.0,
            step: 10,
            tick_interval: Duration::from_millis(100),
            segments: smallvec![
                GradientSegmentSpec::new(2.0, stop(0), stop(1)),
                GradientSegmentSpec::new(5.0, stop(1), stop(2)),
                GradientSegmentSpec::new(1.0, stop(2), stop(3)),
                GradientSegmentSpec::new(2.0, stop(3), stop(4)),
            ],
            preview_rows: false,
            row_spacing: 100.0,
        }
    }
}

impl SpotlightStyle {
    /// Create the default style with different label text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set the label font
    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Set the padding on all sides
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = Insets::uniform(padding);
        self
    }

    /// Set the track (base text) color
    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    /// Set the moving window width
    pub fn window_width(mut self, width: f32) -> Self {
        self.window_width = width;
        self
    }

    /// Set the per-tick step
    pub fn step(mut self, step: i32) -> Self {
        self.step = step;
        self
    }

    /// Set the tick interval
    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Replace the gradient bands
    pub fn segments(mut self, segments: impl IntoIterator<Item = GradientSegmentSpec>) -> Self {
        self.segments = segments.into_iter().collect();
        self
    }

    /// Toggle the demonstration rows
    pub fn preview_rows(mut self, enabled: bool) -> Self {
        self.preview_rows = enabled;
        self
    }

    /// Sum of all band widths, in tenths of the label width
    pub fn total_units(&self) -> f32 {
        self.segments.iter().map(|s| s.width_units).sum()
    }
}
