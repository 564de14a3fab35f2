//! Fixed-metric bitmap font rasterizer.
//!
//! Glyph geometry is exact: every glyph occupies `CHAR_WIDTH x CHAR_HEIGHT`
//! cells, scaled by an integer factor, followed by a one-cell gap. The image
//! carries a `GLYPH_MARGIN` pixel border on every side.

use super::glyphs::GLYPHS;
use super::pixel_buffer::PixelBuffer;
use crate::layout::Color;

/// Glyph cell width before scaling.
pub const CHAR_WIDTH: usize = 8;

/// Glyph cell height before scaling.
pub const CHAR_HEIGHT: usize = 12;

/// Border around the rendered text, in pixels.
pub const GLYPH_MARGIN: usize = 10;

/// Scale used when the caller has no preference.
pub const DEFAULT_SCALE: usize = 3;

/// Horizontal advance per glyph before scaling (cell plus gap).
const ADVANCE: usize = CHAR_WIDTH + 1;

/// Look up the glyph for `ch`.
pub fn glyph(ch: char) -> Option<&'static [u8; CHAR_HEIGHT]> {
    GLYPHS.get(&ch)
}

/// Whether the bitmap font can draw `ch`.
pub fn has_glyph(ch: char) -> bool {
    GLYPHS.contains_key(&ch)
}

/// Image size `(width, height)` for `char_count` known glyphs.
///
/// # Examples
///
/// ```
/// use pdf_scribe::rendering::calculate_dimensions;
///
/// assert_eq!(calculate_dimensions(0, 3), (20, 56));
/// assert_eq!(calculate_dimensions(1, 3), (44, 56));
/// ```
pub fn calculate_dimensions(char_count: usize, scale: usize) -> (usize, usize) {
    let height = CHAR_HEIGHT * scale + 2 * GLYPH_MARGIN;
    let width = if char_count == 0 {
        2 * GLYPH_MARGIN
    } else {
        char_count * ADVANCE * scale - scale + 2 * GLYPH_MARGIN
    };
    (width, height)
}

/// Draw one glyph into a row-major `bitmap` of the given `width`.
///
/// Each on cell becomes a `scale x scale` block at
/// `(x + col * scale, y + row * scale)`. Pixels that land outside the bitmap
/// are dropped.
pub fn render_glyph(
    bitmap: &mut [bool],
    width: usize,
    glyph: &[u8; CHAR_HEIGHT],
    x: usize,
    y: usize,
    scale: usize,
) {
    if width == 0 {
        return;
    }
    let height = bitmap.len() / width;

    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..CHAR_WIDTH {
            if bits & (0x80 >> col) == 0 {
                continue;
            }
            for dy in 0..scale {
                let py = y + row * scale + dy;
                if py >= height {
                    break;
                }
                for dx in 0..scale {
                    let px = x + col * scale + dx;
                    if px >= width {
                        break;
                    }
                    bitmap[py * width + px] = true;
                }
            }
        }
    }
}

/// Rasterize `text` at [`DEFAULT_SCALE`].
///
/// ```
/// use pdf_scribe::layout::Color;
/// use pdf_scribe::rendering::render_bitmap_default;
///
/// let image = render_bitmap_default("", Color::BLACK, Color::WHITE);
/// assert_eq!((image.width(), image.height()), (20, 56));
/// ```
pub fn render_bitmap_default(text: &str, fg: Color, bg: Color) -> PixelBuffer {
    render_bitmap(text, fg, bg, DEFAULT_SCALE)
}

/// Rasterize `text` into an RGB pixel buffer.
///
/// Characters without a glyph are skipped and contribute no width. A
/// foreground too close to the background is swapped for black or white.
pub fn render_bitmap(text: &str, fg: Color, bg: Color, scale: usize) -> PixelBuffer {
    let glyphs: Vec<&[u8; CHAR_HEIGHT]> = text
        .chars()
        .filter_map(|ch| {
            let found = glyph(ch);
            if found.is_none() {
                log::warn!("No bitmap glyph for {:?} (U+{:04X}), skipping", ch, ch as u32);
            }
            found
        })
        .collect();

    let (width, height) = calculate_dimensions(glyphs.len(), scale);
    let mut bitmap = vec![false; width * height];

    for (i, g) in glyphs.iter().enumerate() {
        let x = GLYPH_MARGIN + i * ADVANCE * scale;
        render_glyph(&mut bitmap, width, g, x, GLYPH_MARGIN, scale);
    }

    PixelBuffer::from_bitmap(&bitmap, width, height, fg, bg)
}
