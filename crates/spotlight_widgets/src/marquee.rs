//! Spotlight marquee control
//!
//! The control provides:
//! - A fixed-interval animation that bounces a window across the label
//! - Clipped gradient rendering onto any [`Surface`]
//! - Optional demonstration rows showing the bands without the window
//!
//! The host owns the clock and the drawing surface. It feeds elapsed time
//! through [`SpotlightControl::advance`] (or calls [`SpotlightControl::tick`]
//! from its own timer), polls [`SpotlightControl::take_redraw_request`], and
//! calls [`SpotlightControl::render`] whenever it paints.

use std::time::Duration;

use spotlight_animation::{AnimationState, IntervalTimer};
use spotlight_paint::{Gradient, Point, Rect, Surface, TextMetrics};

use crate::error::RenderError;
use crate::layout::{layout, moving_window, Segment};
use crate::style::SpotlightStyle;

/// Result of a render call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The full frame was drawn
    Drawn,
    /// The frame was abandoned; the next paint starts from scratch
    Skipped,
}

impl FrameOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, FrameOutcome::Drawn)
    }
}

/// The marquee control
#[derive(Debug)]
pub struct SpotlightControl {
    style: SpotlightStyle,
    state: AnimationState,
    timer: IntervalTimer,
    /// Metrics from the most recent render, read by the tick
    metrics: Option<TextMetrics>,
    redraw_requested: bool,
}

impl SpotlightControl {
    /// Create an idle control. It asks for its first frame right away.
    pub fn new(style: SpotlightStyle) -> Self {
        let timer = IntervalTimer::new(style.tick_interval);
        Self {
            style,
            state: AnimationState::new(),
            timer,
            metrics: None,
            redraw_requested: true,
        }
    }

    pub fn style(&self) -> &SpotlightStyle {
        &self.style
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Metrics measured by the most recent render
    pub fn metrics(&self) -> Option<&TextMetrics> {
        self.metrics.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Time left until the next tick, `None` while stopped
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.timer.time_until_next()
    }

    /// Begin ticking. Does nothing if already running.
    pub fn start(&mut self) {
        self.timer.start();
    }

    /// Stop ticking. Does nothing if already stopped.
    ///
    /// Once this returns, [`advance`](Self::advance) fires no ticks and
    /// requests no redraws until the control is started again.
    pub fn stop(&mut self) {
        self.timer.stop();
    }

    /// Feed elapsed time from the host clock. Returns the number of ticks run.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let due = self.timer.advance(elapsed);
        for _ in 0..due {
            self.tick();
        }
        due
    }

    /// Run one animation step and ask for a redraw.
    ///
    /// Until a frame has been measured there is no bound to bounce against,
    /// so the offset stays put.
    pub fn tick(&mut self) {
        match &self.metrics {
            Some(metrics) => {
                let bound = metrics.measured_width - self.style.window_width;
                self.state.tick(bound, self.style.step);
                tracing::trace!(
                    offset_x = self.state.offset_x(),
                    moving_right = self.state.is_moving_right(),
                    "marquee tick"
                );
            }
            None => tracing::trace!("marquee tick before first measurement"),
        }
        self.redraw_requested = true;
    }

    /// Ask the host for a repaint (resize, expose)
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Consume the pending redraw request, if any
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Paint the current frame into `bounds` on `surface`.
    ///
    /// Never fails: a frame that cannot be completed is abandoned and
    /// reported as [`FrameOutcome::Skipped`].
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, bounds: Rect) -> FrameOutcome {
        match self.try_render(surface, bounds) {
            Ok(()) => {
                self.redraw_requested = false;
                FrameOutcome::Drawn
            }
            Err(err @ RenderError::EmptyBounds { .. }) => {
                tracing::debug!(error = %err, "nothing to draw");
                FrameOutcome::Skipped
            }
            Err(err) => {
                tracing::warn!(error = %err, "skipping marquee frame");
                FrameOutcome::Skipped
            }
        }
    }

    fn try_render<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        bounds: Rect,
    ) -> Result<(), RenderError> {
        if bounds.is_empty() {
            return Err(RenderError::EmptyBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }

        let style = &self.style;
        let metrics: &TextMetrics = self.metrics.insert(TextMetrics::measure(
            surface.measurer(),
            &style.text,
            &style.font,
        ));
        let origin = bounds.inset(style.padding).origin();

        let track = surface.create_brush(style.track_color.into())?;
        surface.reset_clip();
        surface.draw_text(&style.text, &style.font, origin, &track)?;

        let row = if style.preview_rows {
            let clip_demo = Point::new(origin.x, bounds.y + style.row_spacing);
            let segments = layout(metrics, &style.segments, clip_demo);
            for segment in segments.iter().step_by(2) {
                draw_band(surface, style, segment, clip_demo, None)?;
            }

            let full = Point::new(origin.x, bounds.y + 2.0 * style.row_spacing);
            for segment in &layout(metrics, &style.segments, full) {
                draw_band(surface, style, segment, full, None)?;
            }

            let marquee = Point::new(origin.x, bounds.y + 3.0 * style.row_spacing);
            surface.draw_text(&style.text, &style.font, marquee, &track)?;
            marquee
        } else {
            origin
        };

        let window = moving_window(metrics, row, self.state.offset_x(), style.window_width);
        for segment in &layout(metrics, &style.segments, row) {
            draw_band(surface, style, segment, row, Some(window))?;
        }

        Ok(())
    }
}

/// Draw the label with one band's gradient, clipped to the band (and the
/// window, when given). The clip is reset before returning.
fn draw_band<S: Surface + ?Sized>(
    surface: &mut S,
    style: &SpotlightStyle,
    segment: &Segment<'_>,
    text_origin: Point,
    window: Option<Rect>,
) -> Result<(), RenderError> {
    let gradient = Gradient::linear_horizontal(
        segment.rect,
        segment.spec.color_from,
        segment.spec.color_to,
    );
    let brush = surface.create_brush(gradient.into())?;

    match window {
        Some(window) => {
            surface.set_clip(window);
            surface.intersect_clip(segment.rect);
        }
        None => surface.set_clip(segment.rect),
    }
    let drawn = surface.draw_text(&style.text, &style.font, text_origin, &brush);
    surface.reset_clip();

    drawn.map_err(RenderError::from)
}

impl Default for SpotlightControl {
    fn default() -> Self {
        Self::new(SpotlightStyle::default())
    }
}

impl Drop for SpotlightControl {
    fn drop(&mut self) {
        if self.timer.is_running() {
            self.timer.stop();
            tracing::debug!("marquee dropped while running, timer released");
        }
    }
}
