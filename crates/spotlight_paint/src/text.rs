//! Fonts and text measurement

use serde::{Deserialize, Serialize};

/// Font weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// A font description. Surfaces resolve it to whatever face they have.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    /// Size in points
    pub size: f32,
    #[serde(default)]
    pub weight: FontWeight,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::Regular,
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }
}

/// Measured extent of a single line of text
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
}

/// Something that can measure a run of text in a font
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &Font) -> TextSize;
}

/// Measurement of the label for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct TextMetrics {
    pub text: String,
    pub font: Font,
    pub measured_width: f32,
    /// Measured height truncated to whole pixels
    pub line_height: i32,
}

impl TextMetrics {
    pub fn measure(measurer: &dyn TextMeasurer, text: &str, font: &Font) -> Self {
        let size = measurer.measure(text, font);
        Self {
            text: text.to_string(),
            font: font.clone(),
            measured_width: size.width,
            line_height: size.height as i32,
        }
    }
}

/// Fallback measurement from font size alone, used when no real face is loaded.
///
/// Uses roughly 0.55em per character (0.7em for bold) and a 1.2em line box.
#[derive(Clone, Copy, Debug, Default)]
pub struct EstimatedMeasurer;

impl TextMeasurer for EstimatedMeasurer {
    fn measure(&self, text: &str, font: &Font) -> TextSize {
        let char_count = text.chars().count() as f32;
        let em_per_char = match font.weight {
            FontWeight::Regular => 0.55,
            FontWeight::Bold => 0.7,
        };
        TextSize {
            width: char_count * font.size * em_per_char,
            height: font.size * 1.2,
        }
    }
}

/// Fixed advance per character, independent of the font.
///
/// Character-cell hosts pair this with a cell grid of the same pitch so every
/// glyph lands in exactly one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasurer {
    pub advance: f32,
    pub line_height: f32,
}

impl MonospaceMeasurer {
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, _font: &Font) -> TextSize {
        TextSize {
            width: text.chars().count() as f32 * self.advance,
            height: self.line_height,
        }
    }
}
