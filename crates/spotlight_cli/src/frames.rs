//! Headless frame dumps

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use spotlight_paint::TextMetrics;
use spotlight_platform_terminal::{render_frame, HostOptions};
use spotlight_widgets::{SpotlightControl, SpotlightStyle};

/// Output format for `spotlight frames`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FrameFormat {
    /// Plain characters, no color
    #[default]
    Text,
    /// Characters with 24-bit color escapes
    Ansi,
    /// One JSON document with every frame
    Json,
}

/// One rendered frame
#[derive(Debug, Serialize)]
pub struct FrameDump {
    pub index: u32,
    pub offset_x: i32,
    pub moving_right: bool,
    pub lines: Vec<String>,
}

/// Smallest grid that fits the label and every enabled row
pub fn canvas_size(style: &SpotlightStyle, options: &HostOptions) -> (u16, u16) {
    let metrics = TextMetrics::measure(&options.measurer(), &style.text, &style.font);

    let width = style.padding.left + metrics.measured_width + style.padding.right;
    let rows_above = if style.preview_rows {
        3.0 * style.row_spacing
    } else {
        style.padding.top
    };
    let height = rows_above + (metrics.line_height + 1) as f32;

    let cols = (width / options.cell_width).ceil() + 1.0;
    let rows = (height / options.cell_height).ceil() + 1.0;
    (cols.min(f32::from(u16::MAX)) as u16, rows.min(f32::from(u16::MAX)) as u16)
}

/// Render `count` frames one tick apart, starting from rest
pub fn render_frames(
    style: SpotlightStyle,
    options: &HostOptions,
    size: (u16, u16),
    count: u32,
    format: FrameFormat,
) -> Result<Vec<FrameDump>> {
    let interval = style.tick_interval;
    let mut control = SpotlightControl::new(style);
    let mut canvas = options.canvas(size.0, size.1);
    let mut frames = Vec::new();

    control.start();
    for index in 0..count {
        if index > 0 {
            control.advance(interval);
        }
        if !render_frame(&mut control, &mut canvas, options).is_drawn() {
            anyhow::bail!("Frame {index} could not be drawn on a {}x{} grid", size.0, size.1);
        }

        let lines = match format {
            FrameFormat::Ansi => canvas.to_ansi_lines().context("Failed to encode frame")?,
            FrameFormat::Text | FrameFormat::Json => canvas.to_plain_lines(),
        };
        let state = control.state();
        frames.push(FrameDump {
            index,
            offset_x: state.offset_x(),
            moving_right: state.is_moving_right(),
            lines,
        });
    }
    control.stop();

    tracing::debug!(count, cols = size.0, rows = size.1, "frames rendered");
    Ok(frames)
}

/// Write frames in the requested format
pub fn write_frames<W: Write>(out: &mut W, frames: &[FrameDump], format: FrameFormat) -> Result<()> {
    if format == FrameFormat::Json {
        serde_json::to_writer_pretty(&mut *out, frames).context("Failed to write JSON")?;
        writeln!(out)?;
        return Ok(());
    }

    for frame in frames {
        let arrow = if frame.moving_right { '>' } else { '<' };
        writeln!(out, "-- frame {} offset {} {arrow}", frame.index, frame.offset_x)?;
        for line in &frame.lines {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
