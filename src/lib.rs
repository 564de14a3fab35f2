// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::new_without_default)]

//! # PDF Scribe
//!
//! Writes PDF 1.7 files from a small content model: paragraphs set in the
//! built-in Helvetica font and "pixel text" drawn with a fixed bitmap font and
//! embedded as raw RGB images. No external rendering engine is involved; the
//! file structure (objects, content streams, cross-reference table, trailer)
//! is produced directly.
//!
//! ## Features
//!
//! - **Text layout**: greedy word wrapping to the A4 content area with left,
//!   center and right alignment
//! - **Pagination**: new pages start automatically when text or images would
//!   cross the bottom margin
//! - **Bitmap font**: 8x12 glyphs for printable ASCII plus common accented
//!   letters, scaled 1-5x
//! - **Auto-contrast**: text colors too close to their background are
//!   replaced with black or white
//! - **Serde content model**: documents can be described in JSON
//!
//! ## Quick Start
//!
//! ```
//! use pdf_scribe::elements::{Document, PixelTextSize, TextAlign, TextSize};
//! use pdf_scribe::layout::Color;
//!
//! # fn main() -> pdf_scribe::Result<()> {
//! let mut doc = Document::new(Color::WHITE);
//! doc.add_styled_text("Quarterly Report", Color::BLUE, TextSize::LARGE, TextAlign::Center)
//!     .add_line()
//!     .add_text("Revenue grew in every region.")
//!     .add_pixel_text("GAME OVER", Color::GREEN, Color::BLACK, PixelTextSize::MEDIUM);
//!
//! let bytes = doc.to_bytes()?;
//! assert!(bytes.starts_with(b"%PDF-1.7"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Document (ContentItem[])
//!     ↓
//! DocumentEncoder ── text::wrap, rendering::render_bitmap, PixelBuffer
//!     ↓
//! PageContentBuilder (one per page)
//!     ↓
//! ObjectSerializer → PDF bytes
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Content model
pub mod elements;
pub mod layout;

// Layout and rasterization
pub mod rendering;
pub mod text;

// PDF output
pub mod object;
pub mod writer;

// Re-exports
pub use config::EncoderConfig;
pub use elements::{ContentItem, Document};
pub use error::{Error, Result};
pub use layout::Color;
pub use writer::DocumentEncoder;

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "pdf_scribe");
    }
}
