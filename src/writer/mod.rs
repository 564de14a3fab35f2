//! PDF writing module.
//!
//! ## Architecture
//!
//! ```text
//! ContentItem[]
//!     ↓
//! [DocumentEncoder] (pagination, id allocation, file assembly)
//!     ↓
//! [PageContentBuilder] (per-page operators + referenced images)
//!     ↓
//! [ObjectSerializer] (serializes PDF objects)
//!     ↓
//! PDF bytes
//! ```
//!
//! ## Example
//!
//! ```
//! use pdf_scribe::elements::{PixelTextSize, TextAlign};
//! use pdf_scribe::layout::Color;
//! use pdf_scribe::writer::DocumentEncoder;
//!
//! let mut encoder = DocumentEncoder::new(Vec::new(), Color::WHITE);
//! encoder.draw_text("Title", 24.0, Color::BLUE, TextAlign::Center)?;
//! encoder.draw_bitmap_text("8-BIT", Color::GREEN, Color::BLACK, PixelTextSize::MEDIUM)?;
//! let pdf = encoder.finalize()?;
//! assert!(pdf.ends_with(b"%%EOF"));
//! # Ok::<(), pdf_scribe::Error>(())
//! ```

mod content_stream;
mod image_handler;
mod object_serializer;
mod pdf_writer;

pub use content_stream::{
    encode_latin1, escape_pdf_string, sanitize_for_latin1, ContentStreamOp, PageContentBuilder,
};
pub use image_handler::{ColorSpace, ImageResource};
pub use object_serializer::ObjectSerializer;
pub use pdf_writer::{DocumentEncoder, PDF_VERSION};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Color;

    #[test]
    fn test_module_exports() {
        let _serializer = ObjectSerializer::new();
        let page = PageContentBuilder::new(1, Color::WHITE, "Helvetica");
        assert!(!page.has_images());
    }
}
