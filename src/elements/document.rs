//! Ordered document body.

use super::{BitmapTextRun, ContentItem, PixelTextSize, TextAlign, TextRun, TextSize};
use crate::config::EncoderConfig;
use crate::error::Result;
use crate::layout::Color;
use crate::writer::DocumentEncoder;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Most blank lines a single `add_lines` call inserts.
const MAX_BLANK_LINES: usize = 50;

/// A document: page background plus ordered content items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Background color of every page
    #[serde(default = "Color::white")]
    pub background: Color,
    /// Content in layout order
    #[serde(default)]
    pub items: Vec<ContentItem>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl Document {
    /// Create an empty document.
    pub fn new(background: Color) -> Self {
        Self {
            background,
            items: Vec::new(),
        }
    }

    /// Parse a JSON content description.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Append an item.
    pub fn push(&mut self, item: impl Into<ContentItem>) -> &mut Self {
        self.items.push(item.into());
        self
    }

    /// Add text with the defaults: black, 18pt, centered.
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(TextRun::new(text))
    }

    /// Add text with explicit styling.
    pub fn add_styled_text(
        &mut self,
        text: impl Into<String>,
        color: Color,
        size: TextSize,
        alignment: TextAlign,
    ) -> &mut Self {
        self.push(
            TextRun::new(text)
                .with_color(color)
                .with_size(size)
                .with_alignment(alignment),
        )
    }

    /// Add pixel text rendered with the bitmap font.
    pub fn add_pixel_text(
        &mut self,
        text: impl Into<String>,
        text_color: Color,
        background_color: Color,
        size: PixelTextSize,
    ) -> &mut Self {
        self.push(
            BitmapTextRun::new(text)
                .with_colors(text_color, background_color)
                .with_scale(size),
        )
    }

    /// Add one blank line (an empty 18pt left-aligned run).
    pub fn add_line(&mut self) -> &mut Self {
        self.push(TextRun::new("").with_alignment(TextAlign::Left))
    }

    /// Add `count` blank lines, at most 50.
    pub fn add_lines(&mut self, count: usize) -> &mut Self {
        for _ in 0..count.min(MAX_BLANK_LINES) {
            self.add_line();
        }
        self
    }

    /// Content items in order.
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the document has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draw every item, in order, with the encoder.
    pub fn render<W: Write>(&self, encoder: &mut DocumentEncoder<W>) -> Result<()> {
        for item in &self.items {
            item.render(encoder)?;
        }
        Ok(())
    }

    /// Encode the document into `sink` and hand the sink back.
    pub fn write_to<W: Write>(&self, sink: W) -> Result<W> {
        self.write_with_config(sink, EncoderConfig::default())
    }

    /// Encode with a custom configuration.
    pub fn write_with_config<W: Write>(&self, sink: W, config: EncoderConfig) -> Result<W> {
        let mut encoder = DocumentEncoder::with_config(sink, self.background, config);
        self.render(&mut encoder)?;
        encoder.finalize()
    }

    /// Encode the document into memory.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.write_to(Vec::new())
    }

    /// Save the PDF to a file.
    ///
    /// The file is only created once the whole PDF has been assembled.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path.as_ref(), bytes)?;
        log::debug!("Saved PDF to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_lines_clamped() {
        let mut doc = Document::default();
        doc.add_lines(80);
        assert_eq!(doc.len(), 50);
        assert!(doc.items().iter().all(|i| i.text().is_empty()));
    }

    #[test]
    fn test_order_preserved() {
        let mut doc = Document::default();
        doc.add_text("one")
            .add_pixel_text("two", Color::BLACK, Color::WHITE, PixelTextSize::TINY)
            .add_text("three");
        let texts: Vec<&str> = doc.items().iter().map(|i| i.text()).collect();
        assert_eq!(texts, ["one", "two", "three"]);
    }

    #[test]
    fn test_empty_document_to_bytes() {
        let bytes = Document::default().to_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.ends_with(b"%%EOF"));
    }

    #[test]
    fn test_from_json() {
        let doc = Document::from_json(
            r#"{"background": {"r": 1.0, "g": 0.75, "b": 0.8},
                "items": [{"kind": "text", "text": "Hello", "alignment": "left"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.background, Color::PINK);
        assert_eq!(doc.len(), 1);
    }
}
