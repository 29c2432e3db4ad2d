//! Terminal event loop
//!
//! The host owns the clock. Each pass it polls for input until the next tick
//! or frame is due, feeds the elapsed time to the control, and repaints when
//! the control asks for it.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use spotlight_animation::FrameScheduler;
use spotlight_paint::{MonospaceMeasurer, PaintContext};
use spotlight_widgets::{FrameOutcome, SpotlightControl};

use crate::error::{PlatformError, Result};
use crate::raster::CellCanvas;

/// Terminal host settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostOptions {
    /// Pixel width of one character cell
    pub cell_width: f32,
    /// Pixel height of one character cell
    pub cell_height: f32,
    /// Upper bound on repaints per second
    pub target_fps: u32,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            cell_width: 10.0,
            cell_height: 20.0,
            target_fps: 30,
        }
    }
}

impl HostOptions {
    /// A measurer whose advance matches the cell pitch
    pub fn measurer(&self) -> MonospaceMeasurer {
        MonospaceMeasurer::new(self.cell_width, self.cell_height)
    }

    /// A blank canvas of the given size in cells
    pub fn canvas(&self, cols: u16, rows: u16) -> CellCanvas {
        CellCanvas::new(cols, rows, self.cell_width, self.cell_height)
    }
}

/// Render one frame of `control` onto `canvas`.
///
/// The canvas is only touched when the frame is drawn; a skipped frame leaves
/// the previous picture in place.
pub fn render_frame(
    control: &mut SpotlightControl,
    canvas: &mut CellCanvas,
    options: &HostOptions,
) -> FrameOutcome {
    let mut ctx = PaintContext::with_measurer(options.measurer());
    let outcome = control.render(&mut ctx, canvas.pixel_bounds());
    if outcome.is_drawn() {
        canvas.clear();
        let written = canvas.replay(ctx.commands());
        tracing::trace!(commands = ctx.commands().len(), cells = written, "frame rasterized");
    }
    outcome
}

/// Whether a key press ends the session
pub(crate) fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// How long to wait for input: until the next frame is due, or the next
/// tick if that comes sooner
fn poll_timeout(scheduler: &FrameScheduler, next_tick: Option<Duration>, now: Instant) -> Duration {
    let frame = scheduler.time_until_next_frame(now);
    next_tick.map_or(frame, |tick| tick.min(frame))
}

/// Raw mode and the alternate screen, restored on drop
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()
            .map_err(|e| PlatformError::InitFailed(format!("raw mode: {e}")))?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide, Clear(ClearType::All))?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Live terminal host for a single control
pub struct TerminalHost {
    options: HostOptions,
    scheduler: FrameScheduler,
    canvas: CellCanvas,
}

impl TerminalHost {
    /// Create a host sized to the current terminal
    pub fn new(options: HostOptions) -> Result<Self> {
        let (cols, rows) = terminal::size()?;
        if cols == 0 || rows == 0 {
            return Err(PlatformError::InitFailed(format!(
                "terminal reports {cols}x{rows} cells"
            )));
        }
        Ok(Self {
            options,
            scheduler: FrameScheduler::new(options.target_fps),
            canvas: options.canvas(cols, rows),
        })
    }

    /// Run until the user quits. The control is started on entry and
    /// stopped on exit, including when the loop fails.
    pub fn run(mut self, control: &mut SpotlightControl) -> Result<()> {
        let guard = TerminalGuard::enter()?;
        tracing::info!(
            cols = self.canvas.cols(),
            rows = self.canvas.rows(),
            "terminal host started"
        );

        control.start();
        control.request_redraw();
        let result = self.event_loop(control);
        control.stop();

        drop(guard);
        tracing::info!("terminal host stopped");
        result
    }

    fn event_loop(&mut self, control: &mut SpotlightControl) -> Result<()> {
        // Measure the first delta from here, not from construction
        self.scheduler.delta();

        loop {
            let timeout = poll_timeout(&self.scheduler, control.time_until_next_tick(), Instant::now());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if is_quit_key(&key) => {
                        tracing::debug!(code = ?key.code, "quit requested");
                        return Ok(());
                    }
                    Event::Resize(cols, rows) => {
                        tracing::debug!(cols, rows, "terminal resized");
                        self.canvas = self.options.canvas(cols, rows);
                        control.request_redraw();
                    }
                    _ => {}
                }
            }

            let elapsed = self.scheduler.delta();
            control.advance(elapsed);

            if control.take_redraw_request() {
                self.paint(control)?;
            }
        }
    }

    fn paint(&mut self, control: &mut SpotlightControl) -> Result<()> {
        if !render_frame(control, &mut self.canvas, &self.options).is_drawn() {
            return Ok(());
        }
        let mut out = io::stdout().lock();
        self.canvas.write_ansi(&mut out)?;
        out.flush()?;
        Ok(())
    }
}
