//! Paint context - the drawing surface API and its recording implementation

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{PaintError, Result};
use crate::gradient::Gradient;
use crate::primitives::{Point, Rect};
use crate::text::{EstimatedMeasurer, Font, TextMeasurer};

/// Fill style for text and shapes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillStyle {
    Color(Color),
    Gradient(Gradient),
}

impl FillStyle {
    /// Resolve the fill color at a point
    pub fn color_at(&self, point: Point) -> Color {
        match self {
            FillStyle::Color(color) => *color,
            FillStyle::Gradient(gradient) => gradient.color_at(point),
        }
    }
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::Color(color)
    }
}

impl From<Gradient> for FillStyle {
    fn from(gradient: Gradient) -> Self {
        FillStyle::Gradient(gradient)
    }
}

#[derive(Debug, Default)]
struct BrushPool {
    live: Cell<usize>,
    allocated: Cell<u64>,
    limit: Option<usize>,
}

/// A drawing resource created by a [`Surface`].
///
/// Brushes are released when dropped; they are not `Clone` so a frame can
/// never hold on to one past the scope that created it.
pub struct Brush {
    style: FillStyle,
    pool: Rc<BrushPool>,
}

impl Brush {
    pub fn style(&self) -> &FillStyle {
        &self.style
    }
}

impl fmt::Debug for Brush {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Brush")
            .field("style", &self.style)
            .finish()
    }
}

impl Drop for Brush {
    fn drop(&mut self) {
        let live = &self.pool.live;
        live.set(live.get().saturating_sub(1));
    }
}

/// A paint command recorded by [`PaintContext`]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PaintCommand {
    SetClip {
        rect: Rect,
    },
    IntersectClip {
        rect: Rect,
    },
    ResetClip,
    DrawText {
        text: String,
        font: Font,
        origin: Point,
        style: FillStyle,
        /// Clip in effect when the text was drawn, `None` when unclipped
        clip: Option<Rect>,
    },
}

/// A drawable target handed to the renderer by its host
pub trait Surface {
    /// Text measurer matching the faces this surface draws with
    fn measurer(&self) -> &dyn TextMeasurer;

    /// Allocate a brush for the given fill
    fn create_brush(&mut self, style: FillStyle) -> Result<Brush>;

    /// Replace the clip with `rect`
    fn set_clip(&mut self, rect: Rect);

    /// Narrow the current clip to its overlap with `rect`
    fn intersect_clip(&mut self, rect: Rect);

    /// Remove any clip
    fn reset_clip(&mut self);

    /// Draw a single line of text with its top-left corner at `origin`
    fn draw_text(&mut self, text: &str, font: &Font, origin: Point, brush: &Brush) -> Result<()>;
}

/// Recording surface: keeps every command instead of rasterizing it.
pub struct PaintContext {
    commands: Vec<PaintCommand>,
    clip: Option<Rect>,
    measurer: Box<dyn TextMeasurer>,
    brushes: Rc<BrushPool>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::with_measurer(EstimatedMeasurer)
    }

    pub fn with_measurer(measurer: impl TextMeasurer + 'static) -> Self {
        Self {
            commands: Vec::new(),
            clip: None,
            measurer: Box::new(measurer),
            brushes: Rc::new(BrushPool::default()),
        }
    }

    /// Cap the number of brushes that may be alive at once.
    ///
    /// Allocations beyond the cap fail with [`PaintError::BrushAllocation`].
    pub fn with_brush_limit(mut self, limit: usize) -> Self {
        self.brushes = Rc::new(BrushPool {
            limit: Some(limit),
            ..BrushPool::default()
        });
        self
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Current clip, `None` when unclipped
    pub fn clip(&self) -> Option<Rect> {
        self.clip
    }

    /// Brushes created by this context that have not been dropped yet
    pub fn live_brushes(&self) -> usize {
        self.brushes.live.get()
    }

    /// Total brushes successfully created by this context
    pub fn brushes_allocated(&self) -> u64 {
        self.brushes.allocated.get()
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for PaintContext {
    fn measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }

    fn create_brush(&mut self, style: FillStyle) -> Result<Brush> {
        let pool = &self.brushes;
        if let Some(limit) = pool.limit {
            if pool.live.get() >= limit {
                tracing::debug!(limit, "brush pool exhausted");
                return Err(PaintError::BrushAllocation {
                    reason: format!("{limit} brushes already alive"),
                });
            }
        }
        pool.live.set(pool.live.get() + 1);
        pool.allocated.set(pool.allocated.get() + 1);
        Ok(Brush {
            style,
            pool: Rc::clone(pool),
        })
    }

    fn set_clip(&mut self, rect: Rect) {
        self.clip = Some(rect);
        self.commands.push(PaintCommand::SetClip { rect });
    }

    fn intersect_clip(&mut self, rect: Rect) {
        self.clip = Some(match self.clip {
            Some(current) => current.intersect(&rect),
            None => rect,
        });
        self.commands.push(PaintCommand::IntersectClip { rect });
    }

    fn reset_clip(&mut self) {
        self.clip = None;
        self.commands.push(PaintCommand::ResetClip);
    }

    fn draw_text(&mut self, text: &str, font: &Font, origin: Point, brush: &Brush) -> Result<()> {
        self.commands.push(PaintCommand::DrawText {
            text: text.to_string(),
            font: font.clone(),
            origin,
            style: brush.style().clone(),
            clip: self.clip,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_replace_then_intersect() {
        let mut ctx = PaintContext::new();
        ctx.set_clip(Rect::new(60.0, 0.0, 100.0, 20.0));
        ctx.intersect_clip(Rect::new(0.0, 0.0, 100.0, 20.0));
        assert_eq!(ctx.clip(), Some(Rect::new(60.0, 0.0, 40.0, 20.0)));

        // A fresh set_clip discards the previous intersection
        ctx.set_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(ctx.clip(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));

        ctx.reset_clip();
        assert_eq!(ctx.clip(), None);
        assert_eq!(ctx.commands().len(), 4);
    }

    #[test]
    fn test_draw_text_records_active_clip() {
        let mut ctx = PaintContext::new();
        let brush = ctx.create_brush(Color::GRAY.into()).unwrap();
        let font = Font::new("Arial Black", 50.0);

        ctx.draw_text("abc", &font, Point::new(10.0, 10.0), &brush)
            .unwrap();
        ctx.set_clip(Rect::new(0.0, 0.0, 5.0, 5.0));
        ctx.draw_text("abc", &font, Point::new(10.0, 10.0), &brush)
            .unwrap();

        let clips: Vec<Option<Rect>> = ctx
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                PaintCommand::DrawText { clip, .. } => Some(*clip),
                _ => None,
            })
            .collect();
        assert_eq!(clips, vec![None, Some(Rect::new(0.0, 0.0, 5.0, 5.0))]);
    }

    #[test]
    fn test_brushes_released_on_drop() {
        let mut ctx = PaintContext::new();
        {
            let _a = ctx.create_brush(Color::BLACK.into()).unwrap();
            let _b = ctx.create_brush(Color::WHITE.into()).unwrap();
            assert_eq!(ctx.live_brushes(), 2);
        }
        assert_eq!(ctx.live_brushes(), 0);
        assert_eq!(ctx.brushes_allocated(), 2);
    }

    #[test]
    fn test_brush_limit() {
        let mut ctx = PaintContext::new().with_brush_limit(1);
        let first = ctx.create_brush(Color::BLACK.into()).unwrap();
        let err = ctx.create_brush(Color::WHITE.into()).unwrap_err();
        assert!(matches!(err, PaintError::BrushAllocation { .. }));

        drop(first);
        assert!(ctx.create_brush(Color::WHITE.into()).is_ok());
    }

    #[test]
    fn test_take_commands_drains() {
        let mut ctx = PaintContext::new();
        ctx.reset_clip();
        assert_eq!(ctx.take_commands(), vec![PaintCommand::ResetClip]);
        assert!(ctx.commands().is_empty());
    }
}
