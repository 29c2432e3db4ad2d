//! Color types and HTML color parsing

use serde::{Deserialize, Serialize};

use crate::error::{PaintError, Result};

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// HTML `gray` (#808080)
    pub const GRAY: Color = Color::from_argb_hex(0xFF80_8080);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from a packed 0xAARRGGBB value (alpha first)
    pub const fn from_argb_hex(hex: u32) -> Self {
        Self::from_rgba8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            ((hex >> 24) & 0xFF) as u8,
        )
    }

    /// Parse an HTML color string.
    ///
    /// Accepts `#RGB`, `#RRGGBB`, `#AARRGGBB` (alpha first) and a handful of
    /// named colors. Names are matched case-insensitively.
    pub fn parse_html(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let invalid = || PaintError::InvalidColor(input.to_string());

        let Some(hex) = trimmed.strip_prefix('#') else {
            return named_color(trimmed).ok_or_else(invalid);
        };

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            3 => {
                let expand = |nibble: u32| ((nibble & 0xF) * 0x11) as u8;
                Ok(Self::from_rgba8(
                    expand(value >> 8),
                    expand(value >> 4),
                    expand(value),
                    255,
                ))
            }
            6 => Ok(Self::from_argb_hex(0xFF00_0000 | value)),
            8 => Ok(Self::from_argb_hex(value)),
            _ => Err(invalid()),
        }
    }

    /// Linear interpolation between two colors, `t` clamped to 0.0..=1.0
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        ]
    }
}

fn named_color(name: &str) -> Option<Color> {
    let hex = match name.to_ascii_lowercase().as_str() {
        "black" => 0xFF00_0000,
        "white" => 0xFFFF_FFFF,
        "gray" | "grey" => 0xFF80_8080,
        "silver" => 0xFFC0_C0C0,
        "darkgray" | "darkgrey" => 0xFFA9_A9A9,
        "red" => 0xFFFF_0000,
        "green" => 0xFF00_8000,
        "blue" => 0xFF00_00FF,
        "transparent" => 0x00FF_FFFF,
        _ => return None,
    };
    Some(Color::from_argb_hex(hex))
}
