//! Segment layout
//!
//! Splits the measured label into absolute band rectangles, left to right,
//! and computes the moving window for the current offset.

use smallvec::SmallVec;
use spotlight_paint::{Point, Rect, TextMetrics};

use crate::style::GradientSegmentSpec;

/// Number of units the label width is divided into
pub const SEGMENT_UNITS: f32 = 10.0;

/// A band spec resolved to pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<'a> {
    pub spec: &'a GradientSegmentSpec,
    pub rect: Rect,
}

/// Height of a band or window row: the line height plus one pixel
fn row_height(metrics: &TextMetrics) -> f32 {
    (metrics.line_height + 1) as f32
}

/// Lay out `specs` starting at `origin`.
///
/// Each band is `width_units * measured_width / 10` wide and starts where the
/// previous one ended. Specs that do not add up to ten units leave the label
/// partly uncovered or run past it; that is not checked.
pub fn layout<'a>(
    metrics: &TextMetrics,
    specs: &'a [GradientSegmentSpec],
    origin: Point,
) -> SmallVec<[Segment<'a>; 4]> {
    let step = metrics.measured_width / SEGMENT_UNITS;
    let height = row_height(metrics);

    let mut x = origin.x;
    specs
        .iter()
        .map(|spec| {
            let width = spec.width_units * step;
            let rect = Rect::new(x, origin.y, width, height);
            x += width;
            Segment { spec, rect }
        })
        .collect()
}

/// The window rectangle for an offset, anchored at the row origin
pub fn moving_window(
    metrics: &TextMetrics,
    origin: Point,
    offset_x: i32,
    window_width: f32,
) -> Rect {
    Rect::new(
        origin.x + offset_x as f32,
        origin.y,
        window_width,
        row_height(metrics),
    )
}
