//! Text measurement and line breaking for the built-in font.
//!
//! No per-glyph metrics table is used. Widths are approximated from the
//! average Helvetica glyph width, which is enough to keep lines inside the
//! content area.

mod wrapper;

pub use wrapper::{measure, wrap, AVG_CHAR_WIDTH_RATIO};
