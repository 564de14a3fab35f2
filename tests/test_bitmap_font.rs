//! Bitmap font rasterization tests.

use pdf_scribe::layout::Color;
use pdf_scribe::rendering::{
    calculate_dimensions, has_glyph, render_bitmap, render_bitmap_default, GLYPH_MARGIN,
};

#[test]
fn test_dimensions_table() {
    let cases = [
        (0, 1, (20, 32)),
        (1, 1, (28, 32)),
        (3, 2, (72, 44)),
        (10, 3, (287, 56)),
        (4, 5, (195, 80)),
    ];
    for (count, scale, expected) in cases {
        assert_eq!(calculate_dimensions(count, scale), expected, "count {} scale {}", count, scale);
    }
}

#[test]
fn test_rendered_sizes() {
    let cases = [
        ("A", 1, (28, 32)),
        ("A", 2, (36, 44)),
        ("A", 5, (60, 80)),
        ("ABC", 3, (98, 56)),
        ("", 3, (20, 56)),
    ];
    for (text, scale, expected) in cases {
        let image = render_bitmap(text, Color::BLACK, Color::WHITE, scale);
        assert_eq!((image.width(), image.height()), expected, "{:?} at scale {}", text, scale);
        assert_eq!(image.pixels().unwrap().len(), expected.0 * expected.1 * 3);
    }

    let default = render_bitmap_default("", Color::BLACK, Color::WHITE);
    assert_eq!((default.width(), default.height()), (20, 56));
}

#[test]
fn test_letter_i_has_both_colors() {
    let image = render_bitmap("I", Color::WHITE, Color::BLACK, 1);
    assert_eq!((image.width(), image.height()), (28, 32));

    let pixels = image.pixels().unwrap();
    let colors: Vec<&[u8]> = pixels.chunks(3).collect();
    assert!(colors.iter().any(|c| *c == [255u8, 255, 255]));
    assert!(colors.iter().any(|c| *c == [0u8, 0, 0]));
    assert!(colors.iter().all(|c| *c == [255u8, 255, 255] || *c == [0u8, 0, 0]));
}

#[test]
fn test_margin_stays_background() {
    let image = render_bitmap("#", Color::BLACK, Color::WHITE, 2);
    let pixels = image.pixels().unwrap();
    let width = image.width();
    for y in 0..GLYPH_MARGIN {
        for x in 0..width {
            let i = (y * width + x) * 3;
            assert_eq!(&pixels[i..i + 3], &[255u8, 255, 255], "ink at ({}, {})", x, y);
        }
    }
}

#[test]
fn test_international_characters_supported() {
    for ch in "ÀÁÂÄÇÈÉÊËÌÍÎÏÑÒÓÔÖÙÚÛÜàáâäçèéêëìíîïñòóôöùúûü".chars() {
        assert!(has_glyph(ch), "missing glyph for {:?}", ch);
    }
    for ch in (0x20u8..=0x7E).map(char::from) {
        assert!(has_glyph(ch), "missing glyph for {:?}", ch);
    }
}

#[test]
fn test_accented_letter_differs_from_base() {
    let plain = render_bitmap("E", Color::BLACK, Color::WHITE, 1);
    let accented = render_bitmap("É", Color::BLACK, Color::WHITE, 1);
    assert_eq!(plain.width(), accented.width());
    assert_ne!(plain.pixels().unwrap(), accented.pixels().unwrap());
}

#[test]
fn test_low_contrast_foreground_replaced() {
    // dark gray on dark gray would be invisible; ink switches to white
    let image = render_bitmap("H", Color::DARK_GRAY, Color::DARK_GRAY, 1);
    let pixels = image.pixels().unwrap();
    assert!(pixels.chunks(3).any(|c| c == [255u8, 255, 255]));
}
