//! Spotlight configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use spotlight_paint::{Color, Font};
use spotlight_platform_terminal::HostOptions;
use spotlight_widgets::{GradientSegmentSpec, SpotlightStyle, MARQUEE_STOPS};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE: &str = "spotlight.toml";

/// Top-level configuration (spotlight.toml)
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SpotlightConfig {
    #[serde(default)]
    pub marquee: MarqueeConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
}

/// Label, timing and palette
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct MarqueeConfig {
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Font size in points
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default = "default_true")]
    pub bold: bool,
    #[serde(default = "default_padding")]
    pub padding: f32,
    /// Moving window width in pixels
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    /// Pixels moved per tick
    #[serde(default = "default_step")]
    pub step: i32,
    /// Milliseconds between ticks
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    #[serde(default)]
    pub preview_rows: bool,
    /// HTML color of the static label
    #[serde(default = "default_track_color")]
    pub track_color: String,
    /// HTML colors at the band edges, one more than the number of bands
    #[serde(default = "default_stops")]
    pub stops: Vec<String>,
}

fn default_text() -> String {
    "WinFormDevelopers".to_string()
}

fn default_font_family() -> String {
    "Arial Black".to_string()
}

fn default_font_size() -> f32 {
    50.0
}

fn default_true() -> bool {
    true
}

fn default_padding() -> f32 {
    10.0
}

fn default_window_width() -> f32 {
    100.0
}

fn default_step() -> i32 {
    10
}

fn default_interval_ms() -> u64 {
    100
}

fn default_track_color() -> String {
    "gray".to_string()
}

fn default_stops() -> Vec<String> {
    MARQUEE_STOPS.iter().map(|argb| format!("#{argb:08X}")).collect()
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            text: default_text(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            bold: true,
            padding: default_padding(),
            window_width: default_window_width(),
            step: default_step(),
            interval_ms: default_interval_ms(),
            preview_rows: false,
            track_color: default_track_color(),
            stops: default_stops(),
        }
    }
}

impl MarqueeConfig {
    /// Build the style the control renders with
    pub fn style(&self) -> Result<SpotlightStyle> {
        if self.step <= 0 {
            anyhow::bail!("step must be a positive number of pixels, found {}", self.step);
        }
        if !self.window_width.is_finite() || self.window_width <= 0.0 {
            anyhow::bail!("window_width must be positive, found {}", self.window_width);
        }

        let track_color = Color::parse_html(&self.track_color).context("Invalid track_color")?;

        let stops = self
            .stops
            .iter()
            .map(|stop| Color::parse_html(stop))
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Invalid color in stops")?;

        let base = SpotlightStyle::default();
        if stops.len() != base.segments.len() + 1 {
            anyhow::bail!(
                "stops needs {} colors for {} bands, found {}",
                base.segments.len() + 1,
                base.segments.len(),
                stops.len()
            );
        }
        let segments: Vec<GradientSegmentSpec> = base
            .segments
            .iter()
            .zip(stops.windows(2))
            .map(|(band, pair)| GradientSegmentSpec::new(band.width_units, pair[0], pair[1]))
            .collect();

        let mut font = Font::new(self.font_family.clone(), self.font_size);
        if self.bold {
            font = font.bold();
        }

        Ok(SpotlightStyle::new(self.text.clone())
            .font(font)
            .padding(self.padding)
            .track_color(track_color)
            .window_width(self.window_width)
            .step(self.step)
            .tick_interval(Duration::from_millis(self.interval_ms))
            .segments(segments)
            .preview_rows(self.preview_rows))
    }
}

/// Character cell geometry and repaint rate
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct TerminalConfig {
    #[serde(default = "default_cell_width")]
    pub cell_width: f32,
    #[serde(default = "default_cell_height")]
    pub cell_height: f32,
    #[serde(default = "default_fps")]
    pub fps: u32,
}

fn default_cell_width() -> f32 {
    10.0
}

fn default_cell_height() -> f32 {
    20.0
}

fn default_fps() -> u32 {
    30
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
            fps: default_fps(),
        }
    }
}

impl TerminalConfig {
    pub fn host_options(&self) -> Result<HostOptions> {
        for (name, value) in [("cell_width", self.cell_width), ("cell_height", self.cell_height)] {
            if !value.is_finite() || value <= 0.0 {
                anyhow::bail!("{name} must be positive, found {value}");
            }
        }
        Ok(HostOptions {
            cell_width: self.cell_width,
            cell_height: self.cell_height,
            target_fps: self.fps,
        })
    }
}

impl SpotlightConfig {
    /// Load configuration from a file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: SpotlightConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Load `path` if given, else `spotlight.toml` from the working directory
    /// when it exists, else the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                let local = PathBuf::from(CONFIG_FILE);
                if local.is_file() {
                    tracing::debug!(path = %local.display(), "using local config");
                    Self::load_from_path(&local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
