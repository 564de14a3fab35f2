//! Text content item types.
//!
//! `TextRun` is laid out with the built-in font and wrapped to the content
//! width; `BitmapTextRun` is rasterized with the bitmap font and embedded as
//! images.

use crate::error::{Error, Result};
use crate::layout::Color;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of a text line inside the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Flush with the left margin
    Left,
    /// Centered on the page
    #[default]
    Center,
    /// Flush with the right margin
    Right,
}

/// Point size presets for text runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextSize(pub f32);

impl TextSize {
    /// Small text (12pt).
    pub const SMALL: TextSize = TextSize(12.0);
    /// Medium text (18pt).
    pub const MEDIUM: TextSize = TextSize(18.0);
    /// Large text (24pt).
    pub const LARGE: TextSize = TextSize(24.0);

    /// Size in points.
    pub fn points(&self) -> f32 {
        self.0
    }
}

impl Default for TextSize {
    fn default() -> Self {
        Self::MEDIUM
    }
}

/// Scale factor for pixel text (1-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PixelTextSize(u8);

impl PixelTextSize {
    /// Tiny scale (1x).
    pub const TINY: PixelTextSize = PixelTextSize(1);
    /// Small scale (2x).
    pub const SMALL: PixelTextSize = PixelTextSize(2);
    /// Medium scale (3x).
    pub const MEDIUM: PixelTextSize = PixelTextSize(3);
    /// Large scale (4x).
    pub const LARGE: PixelTextSize = PixelTextSize(4);
    /// Extra large scale (5x).
    pub const EXTRA_LARGE: PixelTextSize = PixelTextSize(5);

    /// Smallest supported scale.
    pub const MIN: u8 = 1;
    /// Largest supported scale.
    pub const MAX: u8 = 5;

    /// Create a scale, rejecting values outside 1-5.
    pub fn new(scale: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&scale) {
            Ok(Self(scale))
        } else {
            Err(Error::InvalidScale(scale))
        }
    }

    /// The scale multiplier.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for PixelTextSize {
    fn default() -> Self {
        Self::LARGE
    }
}

impl TryFrom<u8> for PixelTextSize {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PixelTextSize> for u8 {
    fn from(size: PixelTextSize) -> Self {
        size.0
    }
}

/// A paragraph shown with the built-in font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text; explicit `\n` breaks are kept
    pub text: String,
    /// Point size
    #[serde(default = "default_point_size")]
    pub point_size: f32,
    /// Fill color
    #[serde(default)]
    pub color: Color,
    /// Line alignment
    #[serde(default)]
    pub alignment: TextAlign,
}

impl TextRun {
    /// Create a text run with black 18pt centered defaults.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            point_size: TextSize::MEDIUM.points(),
            color: Color::BLACK,
            alignment: TextAlign::Center,
        }
    }

    /// Set the point size.
    pub fn with_size(mut self, size: TextSize) -> Self {
        self.point_size = size.points();
        self
    }

    /// Set the fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: TextAlign) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Text rendered pixel-by-pixel with the bitmap font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BitmapTextRun {
    /// The text; explicit `\n` breaks start a new image
    pub text: String,
    /// Glyph color
    #[serde(default = "Color::black")]
    pub text_color: Color,
    /// Color behind the glyphs
    #[serde(default = "Color::white")]
    pub background_color: Color,
    /// Pixel scale
    #[serde(default)]
    pub scale: PixelTextSize,
}

impl BitmapTextRun {
    /// Create a pixel text run, black on white at large scale.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_color: Color::BLACK,
            background_color: Color::WHITE,
            scale: PixelTextSize::LARGE,
        }
    }

    /// Set the glyph and background colors.
    pub fn with_colors(mut self, text_color: Color, background_color: Color) -> Self {
        self.text_color = text_color;
        self.background_color = background_color;
        self
    }

    /// Set the scale.
    pub fn with_scale(mut self, scale: PixelTextSize) -> Self {
        self.scale = scale;
        self
    }
}

fn default_point_size() -> f32 {
    TextSize::MEDIUM.points()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_text_size_range() {
        assert_eq!(PixelTextSize::new(1).unwrap(), PixelTextSize::TINY);
        assert_eq!(PixelTextSize::new(5).unwrap(), PixelTextSize::EXTRA_LARGE);
        assert!(matches!(PixelTextSize::new(0), Err(Error::InvalidScale(0))));
        assert!(matches!(PixelTextSize::new(6), Err(Error::InvalidScale(6))));
    }

    #[test]
    fn test_text_run_defaults() {
        let run = TextRun::new("Hi");
        assert_eq!(run.point_size, 18.0);
        assert_eq!(run.color, Color::BLACK);
        assert_eq!(run.alignment, TextAlign::Center);
    }

    #[test]
    fn test_text_run_builders() {
        let run = TextRun::new("Hi")
            .with_size(TextSize::LARGE)
            .with_color(Color::BLUE)
            .with_alignment(TextAlign::Left);
        assert_eq!(run.point_size, 24.0);
        assert_eq!(run.color, Color::BLUE);
        assert_eq!(run.alignment, TextAlign::Left);
    }

    #[test]
    fn test_bitmap_text_run_deserialize_defaults() {
        let run: BitmapTextRun = serde_json::from_str(r#"{"text": "RETRO"}"#).unwrap();
        assert_eq!(run.text_color, Color::BLACK);
        assert_eq!(run.background_color, Color::WHITE);
        assert_eq!(run.scale, PixelTextSize::LARGE);
    }

    #[test]
    fn test_bitmap_text_run_rejects_bad_scale() {
        let parsed: std::result::Result<BitmapTextRun, _> =
            serde_json::from_str(r#"{"text": "X", "scale": 9}"#);
        assert!(parsed.is_err());
    }
}
