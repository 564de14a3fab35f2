//! Bitmap text rendering.
//!
//! Converts strings into RGB images using a fixed 8x12 glyph table, so that
//! "pixel text" can be embedded in a page as an image XObject.
//!
//! ## Example
//!
//! ```
//! use pdf_scribe::layout::Color;
//! use pdf_scribe::rendering::render_bitmap;
//!
//! let image = render_bitmap("A", Color::BLACK, Color::WHITE, 1);
//! assert_eq!((image.width(), image.height()), (28, 32));
//! ```

mod bitmap_font;
mod glyphs;
mod pixel_buffer;

pub use bitmap_font::{
    calculate_dimensions, glyph, has_glyph, render_bitmap, render_bitmap_default, render_glyph,
    CHAR_HEIGHT, CHAR_WIDTH, DEFAULT_SCALE, GLYPH_MARGIN,
};
pub use glyphs::GLYPHS;
pub use pixel_buffer::PixelBuffer;
