//! Configuration for PDF generation.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Encoder configuration.
///
/// Page geometry is fixed (see [`crate::layout`]); only the descriptive parts
/// of the output are configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Creator application, written as the `%%Creator:` header comment
    pub creator: String,
    /// Base font name of the single built-in Type1 font
    pub font_name: String,
    /// Single-byte font encoding
    pub encoding: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            creator: crate::NAME.to_string(),
            font_name: "Helvetica".to_string(),
            encoding: "WinAnsiEncoding".to_string(),
        }
    }
}

impl EncoderConfig {
    /// Create configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the creator comment.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    /// Set the built-in font name.
    pub fn with_font_name(mut self, font_name: impl Into<String>) -> Self {
        self.font_name = font_name.into();
        self
    }
}
