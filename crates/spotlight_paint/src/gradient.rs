//! Gradient fills

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::color::Color;
use crate::primitives::{Point, Rect};

/// A gradient stop
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32, // 0.0 to 1.0
    pub color: Color,
}

/// Gradient type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Gradient {
    Linear {
        start: Point,
        end: Point,
        stops: SmallVec<[GradientStop; 2]>,
    },
}

impl Gradient {
    /// Create a simple linear gradient between two colors
    pub fn linear_simple(start: Point, end: Point, from: Color, to: Color) -> Self {
        Gradient::Linear {
            start,
            end,
            stops: smallvec![
                GradientStop {
                    offset: 0.0,
                    color: from,
                },
                GradientStop {
                    offset: 1.0,
                    color: to,
                },
            ],
        }
    }

    /// Horizontal gradient spanning `rect` from its left edge to its right edge
    pub fn linear_horizontal(rect: Rect, from: Color, to: Color) -> Self {
        let mid_y = rect.y + rect.height / 2.0;
        Self::linear_simple(
            Point::new(rect.x, mid_y),
            Point::new(rect.right(), mid_y),
            from,
            to,
        )
    }

    /// Sample the gradient at a point.
    ///
    /// The point is projected onto the gradient axis; positions before the
    /// start or past the end take the first or last stop color.
    pub fn color_at(&self, point: Point) -> Color {
        let Gradient::Linear { start, end, stops } = self;

        let (first, last) = match (stops.first(), stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Color::TRANSPARENT,
        };

        let axis_x = end.x - start.x;
        let axis_y = end.y - start.y;
        let length_sq = axis_x * axis_x + axis_y * axis_y;
        if length_sq <= f32::EPSILON {
            return first.color;
        }

        let t = ((point.x - start.x) * axis_x + (point.y - start.y) * axis_y) / length_sq;
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }

        for pair in stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                if span <= f32::EPSILON {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.offset) / span);
            }
        }
        last.color
    }
}
