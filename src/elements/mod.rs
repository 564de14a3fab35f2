//! Content model for PDF generation.
//!
//! A document body is an ordered list of [`ContentItem`]s. Order is
//! significant: items are laid out top to bottom in insertion order and the
//! encoder paginates as it goes.
//!
//! ## Example
//!
//! ```
//! use pdf_scribe::elements::{Document, PixelTextSize};
//! use pdf_scribe::layout::Color;
//!
//! let mut doc = Document::new(Color::WHITE);
//! doc.add_text("Hello, World!")
//!     .add_line()
//!     .add_pixel_text("RETRO", Color::GREEN, Color::BLACK, PixelTextSize::MEDIUM);
//! assert_eq!(doc.len(), 3);
//! ```

mod document;
mod text;

pub use document::Document;
pub use text::{BitmapTextRun, PixelTextSize, TextAlign, TextRun, TextSize};

use crate::error::Result;
use crate::writer::DocumentEncoder;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// A content item in the document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentItem {
    /// Paragraph shown with the built-in font
    Text(TextRun),
    /// Text rasterized with the bitmap font and embedded as images
    BitmapText(BitmapTextRun),
}

impl ContentItem {
    /// The item's text.
    pub fn text(&self) -> &str {
        match self {
            ContentItem::Text(t) => &t.text,
            ContentItem::BitmapText(b) => &b.text,
        }
    }

    /// Draw this item with the encoder.
    pub fn render<W: Write>(&self, encoder: &mut DocumentEncoder<W>) -> Result<()> {
        match self {
            ContentItem::Text(t) => encoder.draw_text(&t.text, t.point_size, t.color, t.alignment),
            ContentItem::BitmapText(b) => {
                encoder.draw_bitmap_text(&b.text, b.text_color, b.background_color, b.scale)
            },
        }
    }
}

impl From<TextRun> for ContentItem {
    fn from(run: TextRun) -> Self {
        ContentItem::Text(run)
    }
}

impl From<BitmapTextRun> for ContentItem {
    fn from(run: BitmapTextRun) -> Self {
        ContentItem::BitmapText(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Color;

    #[test]
    fn test_item_text() {
        let item: ContentItem = TextRun::new("abc").into();
        assert_eq!(item.text(), "abc");
        let item: ContentItem = BitmapTextRun::new("xyz").into();
        assert_eq!(item.text(), "xyz");
    }

    #[test]
    fn test_item_json_tagging() {
        let item: ContentItem = TextRun::new("abc").with_color(Color::RED).into();
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""kind":"text""#));
        let back: ContentItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_item_json_bitmap() {
        let item: ContentItem =
            serde_json::from_str(r#"{"kind": "bitmap_text", "text": "A", "scale": 2}"#).unwrap();
        match item {
            ContentItem::BitmapText(run) => assert_eq!(run.scale, PixelTextSize::SMALL),
            other => panic!("unexpected item {:?}", other),
        }
    }
}
