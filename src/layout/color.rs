//! RGB color with the contrast helpers used by text and pixel rendering.

use serde::{Deserialize, Serialize};

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel (0.0 - 1.0)
    pub r: f32,
    /// Green channel (0.0 - 1.0)
    pub g: f32,
    /// Blue channel (0.0 - 1.0)
    pub b: f32,
}

impl Color {
    /// White (1, 1, 1).
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    /// Black (0, 0, 0).
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    /// Red (1, 0, 0).
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    /// Green (0, 1, 0).
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    /// Blue (0, 0, 1).
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    /// Gray (0.5, 0.5, 0.5).
    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5);
    /// Dark gray (0.3, 0.3, 0.3).
    pub const DARK_GRAY: Color = Color::new(0.3, 0.3, 0.3);
    /// Orange (1, 0.65, 0).
    pub const ORANGE: Color = Color::new(1.0, 0.65, 0.0);
    /// Yellow (1, 1, 0).
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    /// Purple (0.5, 0, 0.5).
    pub const PURPLE: Color = Color::new(0.5, 0.0, 0.5);
    /// Pink (1, 0.75, 0.8).
    pub const PINK: Color = Color::new(1.0, 0.75, 0.8);
    /// Cyan (0, 1, 1).
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
    /// Brown (0.6, 0.4, 0.2).
    pub const BROWN: Color = Color::new(0.6, 0.4, 0.2);

    /// Default tolerance for [`Color::is_similar_to`].
    pub const SIMILARITY_TOLERANCE: f32 = 0.1;

    /// Create a new color.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_scribe::layout::Color;
    ///
    /// let red = Color::new(1.0, 0.0, 0.0);
    /// assert_eq!(red, Color::RED);
    /// ```
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a black color.
    pub fn black() -> Self {
        Self::BLACK
    }

    /// Create a white color.
    pub fn white() -> Self {
        Self::WHITE
    }

    /// Perceived brightness using ITU-R BT.601 weights.
    pub fn luminance(&self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Whether the color reads as light (luminance above 0.5).
    pub fn is_light(&self) -> bool {
        self.luminance() > 0.5
    }

    /// Per-channel comparison with the default tolerance of 0.1.
    pub fn is_similar_to(&self, other: &Color) -> bool {
        self.is_similar_within(other, Self::SIMILARITY_TOLERANCE)
    }

    /// True when every channel differs from `other` by less than `tolerance`.
    pub fn is_similar_within(&self, other: &Color, tolerance: f32) -> bool {
        (self.r - other.r).abs() < tolerance
            && (self.g - other.g).abs() < tolerance
            && (self.b - other.b).abs() < tolerance
    }

    /// Pick a foreground that stays visible on `background`.
    ///
    /// A foreground indistinguishable from the background is replaced with
    /// black on light backgrounds and white on dark ones.
    pub fn contrasting_on(self, background: &Color) -> Color {
        if self.is_similar_to(background) {
            if background.is_light() {
                Color::BLACK
            } else {
                Color::WHITE
            }
        } else {
            self
        }
    }

    /// Channels as 8-bit values, `round(channel * 255)`.
    pub fn to_rgb_bytes(&self) -> [u8; 3] {
        [channel_byte(self.r), channel_byte(self.g), channel_byte(self.b)]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

fn channel_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
