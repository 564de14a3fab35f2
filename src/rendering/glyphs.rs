//! Glyph table for the built-in bitmap font.
//!
//! Each glyph is an 8x12 cell stored as one byte per row, top row first.
//! Bit 7 is the leftmost column. Letters sit on row 8 with rows 9-10 used
//! for descenders; capital accents occupy rows 0-1.

use phf::phf_map;

/// Bitmap glyphs keyed by character.
pub static GLYPHS: phf::Map<char, [u8; 12]> = phf_map! {
    ' ' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    '!' => [0x00, 0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x10, 0x00, 0x00, 0x00],
    '"' => [0x00, 0x00, 0x28, 0x28, 0x28, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    '#' => [0x00, 0x00, 0x28, 0x28, 0x7C, 0x28, 0x7C, 0x28, 0x28, 0x00, 0x00, 0x00],
    '$' => [0x00, 0x00, 0x10, 0x3C, 0x50, 0x38, 0x14, 0x78, 0x10, 0x00, 0x00, 0x00],
    '%' => [0x00, 0x00, 0x60, 0x64, 0x08, 0x10, 0x20, 0x4C, 0x0C, 0x00, 0x00, 0x00],
    '&' => [0x00, 0x00, 0x30, 0x48, 0x50, 0x20, 0x54, 0x48, 0x34, 0x00, 0x00, 0x00],
    '\'' => [0x00, 0x00, 0x10, 0x10, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    '(' => [0x00, 0x00, 0x08, 0x10, 0x20, 0x20, 0x20, 0x10, 0x08, 0x00, 0x00, 0x00],
    ')' => [0x00, 0x00, 0x20, 0x10, 0x08, 0x08, 0x08, 0x10, 0x20, 0x00, 0x00, 0x00],
    '*' => [0x00, 0x00, 0x00, 0x10, 0x54, 0x38, 0x54, 0x10, 0x00, 0x00, 0x00, 0x00],
    '+' => [0x00, 0x00, 0x00, 0x10, 0x10, 0x7C, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00],
    ',' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x10, 0x20, 0x00, 0x00, 0x00],
    '-' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x00, 0x00, 0x00],
    '/' => [0x00, 0x00, 0x00, 0x04, 0x08, 0x10, 0x20, 0x40, 0x00, 0x00, 0x00, 0x00],
    '0' => [0x00, 0x00, 0x38, 0x44, 0x4C, 0x54, 0x64, 0x44, 0x38, 0x00, 0x00, 0x00],
    '1' => [0x00, 0x00, 0x10, 0x30, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00, 0x00, 0x00],
    '2' => [0x00, 0x00, 0x38, 0x44, 0x04, 0x08, 0x10, 0x20, 0x7C, 0x00, 0x00, 0x00],
    '3' => [0x00, 0x00, 0x7C, 0x08, 0x10, 0x08, 0x04, 0x44, 0x38, 0x00, 0x00, 0x00],
    '4' => [0x00, 0x00, 0x08, 0x18, 0x28, 0x48, 0x7C, 0x08, 0x08, 0x00, 0x00, 0x00],
    '5' => [0x00, 0x00, 0x7C, 0x40, 0x78, 0x04, 0x04, 0x44, 0x38, 0x00, 0x00, 0x00],
    '6' => [0x00, 0x00, 0x18, 0x20, 0x40, 0x78, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    '7' => [0x00, 0x00, 0x7C, 0x04, 0x08, 0x10, 0x20, 0x20, 0x20, 0x00, 0x00, 0x00],
    '8' => [0x00, 0x00, 0x38, 0x44, 0x44, 0x38, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    '9' => [0x00, 0x00, 0x38, 0x44, 0x44, 0x3C, 0x04, 0x08, 0x30, 0x00, 0x00, 0x00],
    ':' => [0x00, 0x00, 0x00, 0x30, 0x30, 0x00, 0x30, 0x30, 0x00, 0x00, 0x00, 0x00],
    ';' => [0x00, 0x00, 0x00, 0x30, 0x30, 0x00, 0x30, 0x10, 0x20, 0x00, 0x00, 0x00],
    '<' => [0x00, 0x00, 0x08, 0x10, 0x20, 0x40, 0x20, 0x10, 0x08, 0x00, 0x00, 0x00],
    '=' => [0x00, 0x00, 0x00, 0x00, 0x7C, 0x00, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00],
    '>' => [0x00, 0x00, 0x20, 0x10, 0x08, 0x04, 0x08, 0x10, 0x20, 0x00, 0x00, 0x00],
    '?' => [0x00, 0x00, 0x38, 0x44, 0x04, 0x08, 0x10, 0x00, 0x10, 0x00, 0x00, 0x00],
    '@' => [0x00, 0x00, 0x38, 0x44, 0x04, 0x34, 0x54, 0x54, 0x38, 0x00, 0x00, 0x00],
    'A' => [0x00, 0x00, 0x38, 0x44, 0x44, 0x7C, 0x44, 0x44, 0x44, 0x00, 0x00, 0x00],
    'B' => [0x00, 0x00, 0x78, 0x44, 0x44, 0x78, 0x44, 0x44, 0x78, 0x00, 0x00, 0x00],
    'C' => [0x00, 0x00, 0x38, 0x44, 0x40, 0x40, 0x40, 0x44, 0x38, 0x00, 0x00, 0x00],
    'D' => [0x00, 0x00, 0x70, 0x48, 0x44, 0x44, 0x44, 0x48, 0x70, 0x00, 0x00, 0x00],
    'E' => [0x00, 0x00, 0x7C, 0x40, 0x40, 0x78, 0x40, 0x40, 0x7C, 0x00, 0x00, 0x00],
    'F' => [0x00, 0x00, 0x7C, 0x40, 0x40, 0x78, 0x40, 0x40, 0x40, 0x00, 0x00, 0x00],
    'G' => [0x00, 0x00, 0x38, 0x44, 0x40, 0x5C, 0x44, 0x44, 0x3C, 0x00, 0x00, 0x00],
    'H' => [0x00, 0x00, 0x44, 0x44, 0x44, 0x7C, 0x44, 0x44, 0x44, 0x00, 0x00, 0x00],
    'I' => [0x00, 0x00, 0x38, 0x10, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00, 0x00, 0x00],
    'J' => [0x00, 0x00, 0x1C, 0x08, 0x08, 0x08, 0x08, 0x48, 0x30, 0x00, 0x00, 0x00],
    'K' => [0x00, 0x00, 0x44, 0x48, 0x50, 0x60, 0x50, 0x48, 0x44, 0x00, 0x00, 0x00],
    'L' => [0x00, 0x00, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7C, 0x00, 0x00, 0x00],
    'M' => [0x00, 0x00, 0x44, 0x6C, 0x54, 0x54, 0x44, 0x44, 0x44, 0x00, 0x00, 0x00],
    'N' => [0x00, 0x00, 0x44, 0x44, 0x64, 0x54, 0x4C, 0x44, 0x44, 0x00, 0x00, 0x00],
    'O' => [0x00, 0x00, 0x38, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    'P' => [0x00, 0x00, 0x78, 0x44, 0x44, 0x78, 0x40, 0x40, 0x40, 0x00, 0x00, 0x00],
    'Q' => [0x00, 0x00, 0x38, 0x44, 0x44, 0x44, 0x54, 0x48, 0x34, 0x00, 0x00, 0x00],
    'R' => [0x00, 0x00, 0x78, 0x44, 0x44, 0x78, 0x50, 0x48, 0x44, 0x00, 0x00, 0x00],
    'S' => [0x00, 0x00, 0x3C, 0x40, 0x40, 0x38, 0x04, 0x04, 0x78, 0x00, 0x00, 0x00],
    'T' => [0x00, 0x00, 0x7C, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00, 0x00],
    'U' => [0x00, 0x00, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    'V' => [0x00, 0x00, 0x44, 0x44, 0x44, 0x44, 0x44, 0x28, 0x10, 0x00, 0x00, 0x00],
    'W' => [0x00, 0x00, 0x44, 0x44, 0x44, 0x54, 0x54, 0x54, 0x28, 0x00, 0x00, 0x00],
    'X' => [0x00, 0x00, 0x44, 0x44, 0x28, 0x10, 0x28, 0x44, 0x44, 0x00, 0x00, 0x00],
    'Y' => [0x00, 0x00, 0x44, 0x44, 0x28, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00, 0x00],
    'Z' => [0x00, 0x00, 0x7C, 0x04, 0x08, 0x10, 0x20, 0x40, 0x7C, 0x00, 0x00, 0x00],
    '[' => [0x00, 0x00, 0x38, 0x20, 0x20, 0x20, 0x20, 0x20, 0x38, 0x00, 0x00, 0x00],
    '\\' => [0x00, 0x00, 0x00, 0x40, 0x20, 0x10, 0x08, 0x04, 0x00, 0x00, 0x00, 0x00],
    ']' => [0x00, 0x00, 0x38, 0x08, 0x08, 0x08, 0x08, 0x08, 0x38, 0x00, 0x00, 0x00],
    '^' => [0x00, 0x00, 0x10, 0x28, 0x44, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    '_' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0x00, 0x00, 0x00],
    '`' => [0x00, 0x00, 0x20, 0x10, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    'a' => [0x00, 0x00, 0x00, 0x00, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00, 0x00, 0x00],
    'b' => [0x00, 0x00, 0x40, 0x40, 0x58, 0x64, 0x44, 0x44, 0x78, 0x00, 0x00, 0x00],
    'c' => [0x00, 0x00, 0x00, 0x00, 0x38, 0x40, 0x40, 0x44, 0x38, 0x00, 0x00, 0x00],
    'd' => [0x00, 0x00, 0x04, 0x04, 0x34, 0x4C, 0x44, 0x44, 0x3C, 0x00, 0x00, 0x00],
    'e' => [0x00, 0x00, 0x00, 0x00, 0x38, 0x44, 0x7C, 0x40, 0x38, 0x00, 0x00, 0x00],
    'f' => [0x00, 0x00, 0x18, 0x24, 0x20, 0x70, 0x20, 0x20, 0x20, 0x00, 0x00, 0x00],
    'g' => [0x00, 0x00, 0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x44, 0x38, 0x00],
    'h' => [0x00, 0x00, 0x40, 0x40, 0x58, 0x64, 0x44, 0x44, 0x44, 0x00, 0x00, 0x00],
    'i' => [0x00, 0x00, 0x10, 0x00, 0x30, 0x10, 0x10, 0x10, 0x38, 0x00, 0x00, 0x00],
    'j' => [0x00, 0x00, 0x08, 0x00, 0x18, 0x08, 0x08, 0x08, 0x08, 0x48, 0x30, 0x00],
    'k' => [0x00, 0x00, 0x40, 0x40, 0x48, 0x50, 0x60, 0x50, 0x48, 0x00, 0x00, 0x00],
    'l' => [0x00, 0x00, 0x30, 0x10, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00, 0x00, 0x00],
    'm' => [0x00, 0x00, 0x00, 0x00, 0x68, 0x54, 0x54, 0x44, 0x44, 0x00, 0x00, 0x00],
    'n' => [0x00, 0x00, 0x00, 0x00, 0x58, 0x64, 0x44, 0x44, 0x44, 0x00, 0x00, 0x00],
    'o' => [0x00, 0x00, 0x00, 0x00, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    'p' => [0x00, 0x00, 0x00, 0x00, 0x78, 0x44, 0x44, 0x78, 0x40, 0x40, 0x40, 0x00],
    'q' => [0x00, 0x00, 0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x04, 0x04, 0x00],
    'r' => [0x00, 0x00, 0x00, 0x00, 0x58, 0x64, 0x40, 0x40, 0x40, 0x00, 0x00, 0x00],
    's' => [0x00, 0x00, 0x00, 0x00, 0x38, 0x40, 0x38, 0x04, 0x78, 0x00, 0x00, 0x00],
    't' => [0x00, 0x00, 0x20, 0x20, 0x70, 0x20, 0x20, 0x24, 0x18, 0x00, 0x00, 0x00],
    'u' => [0x00, 0x00, 0x00, 0x00, 0x44, 0x44, 0x44, 0x4C, 0x34, 0x00, 0x00, 0x00],
    'v' => [0x00, 0x00, 0x00, 0x00, 0x44, 0x44, 0x44, 0x28, 0x10, 0x00, 0x00, 0x00],
    'w' => [0x00, 0x00, 0x00, 0x00, 0x44, 0x44, 0x54, 0x54, 0x28, 0x00, 0x00, 0x00],
    'x' => [0x00, 0x00, 0x00, 0x00, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00, 0x00, 0x00],
    'y' => [0x00, 0x00, 0x00, 0x00, 0x44, 0x44, 0x44, 0x3C, 0x04, 0x44, 0x38, 0x00],
    'z' => [0x00, 0x00, 0x00, 0x00, 0x7C, 0x08, 0x10, 0x20, 0x7C, 0x00, 0x00, 0x00],
    '{' => [0x00, 0x00, 0x08, 0x10, 0x10, 0x20, 0x10, 0x10, 0x08, 0x00, 0x00, 0x00],
    '|' => [0x00, 0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00, 0x00],
    '}' => [0x00, 0x00, 0x20, 0x10, 0x10, 0x08, 0x10, 0x10, 0x20, 0x00, 0x00, 0x00],
    '~' => [0x00, 0x00, 0x00, 0x00, 0x20, 0x54, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00],
    '¡' => [0x00, 0x00, 0x10, 0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00, 0x00],
    '£' => [0x00, 0x00, 0x18, 0x24, 0x20, 0x70, 0x20, 0x24, 0x58, 0x00, 0x00, 0x00],
    '¥' => [0x00, 0x00, 0x44, 0x28, 0x7C, 0x10, 0x7C, 0x10, 0x10, 0x00, 0x00, 0x00],
    '§' => [0x00, 0x00, 0x38, 0x40, 0x38, 0x44, 0x38, 0x04, 0x38, 0x00, 0x00, 0x00],
    '©' => [0x00, 0x00, 0x38, 0x44, 0x54, 0x64, 0x54, 0x44, 0x38, 0x00, 0x00, 0x00],
    '°' => [0x00, 0x00, 0x30, 0x48, 0x48, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    '±' => [0x00, 0x00, 0x10, 0x10, 0x7C, 0x10, 0x10, 0x00, 0x7C, 0x00, 0x00, 0x00],
    '¿' => [0x00, 0x00, 0x10, 0x00, 0x10, 0x20, 0x40, 0x44, 0x38, 0x00, 0x00, 0x00],
    'À' => [0x20, 0x10, 0x38, 0x44, 0x44, 0x7C, 0x44, 0x44, 0x44, 0x00, 0x00, 0x00],
    'Á' => [0x08, 0x10, 0x38, 0x44, 0x44, 0x7C, 0x44, 0x44, 0x44, 0x00, 0x00, 0x00],
    'Â' => [0x10, 0x28, 0x38, 0x44, 0x44, 0x7C, 0x44, 0x44, 0x44, 0x00, 0x00, 0x00],
    'Ã' => [0x28, 0x50, 0x38, 0x44, 0x44, 0x7C, 0x44, 0x44, 0x44, 0x00, 0x00, 0x00],
    'Ä' => [0x28, 0x00, 0x38, 0x44, 0x44, 0x7C, 0x44, 0x44, 0x44, 0x00, 0x00, 0x00],
    'Å' => [0x10, 0x28, 0x38, 0x44, 0x44, 0x7C, 0x44, 0x44, 0x44, 0x00, 0x00, 0x00],
    'Æ' => [0x00, 0x00, 0x3C, 0x50, 0x50, 0x7C, 0x50, 0x50, 0x5C, 0x00, 0x00, 0x00],
    'Ç' => [0x00, 0x00, 0x38, 0x44, 0x40, 0x40, 0x40, 0x44, 0x38, 0x10, 0x20, 0x00],
    'È' => [0x20, 0x10, 0x7C, 0x40, 0x40, 0x78, 0x40, 0x40, 0x7C, 0x00, 0x00, 0x00],
    'É' => [0x08, 0x10, 0x7C, 0x40, 0x40, 0x78, 0x40, 0x40, 0x7C, 0x00, 0x00, 0x00],
    'Ê' => [0x10, 0x28, 0x7C, 0x40, 0x40, 0x78, 0x40, 0x40, 0x7C, 0x00, 0x00, 0x00],
    'Ë' => [0x28, 0x00, 0x7C, 0x40, 0x40, 0x78, 0x40, 0x40, 0x7C, 0x00, 0x00, 0x00],
    'Ì' => [0x20, 0x10, 0x38, 0x10, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00, 0x00, 0x00],
    'Í' => [0x08, 0x10, 0x38, 0x10, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00, 0x00, 0x00],
    'Î' => [0x10, 0x28, 0x38, 0x10, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00, 0x00, 0x00],
    'Ï' => [0x28, 0x00, 0x38, 0x10, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00, 0x00, 0x00],
    'Ñ' => [0x28, 0x50, 0x44, 0x44, 0x64, 0x54, 0x4C, 0x44, 0x44, 0x00, 0x00, 0x00],
    'Ò' => [0x20, 0x10, 0x38, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    'Ó' => [0x08, 0x10, 0x38, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    'Ô' => [0x10, 0x28, 0x38, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    'Õ' => [0x28, 0x50, 0x38, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    'Ö' => [0x28, 0x00, 0x38, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    '×' => [0x00, 0x00, 0x00, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00, 0x00, 0x00, 0x00],
    'Ø' => [0x00, 0x00, 0x3C, 0x4C, 0x54, 0x54, 0x54, 0x64, 0x78, 0x00, 0x00, 0x00],
    'Ù' => [0x20, 0x10, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    'Ú' => [0x08, 0x10, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    'Û' => [0x10, 0x28, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    'Ü' => [0x28, 0x00, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    'Ý' => [0x08, 0x10, 0x44, 0x44, 0x28, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00, 0x00],
    'ß' => [0x00, 0x00, 0x30, 0x48, 0x48, 0x50, 0x48, 0x48, 0x58, 0x00, 0x00, 0x00],
    'à' => [0x00, 0x00, 0x20, 0x10, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00, 0x00, 0x00],
    'á' => [0x00, 0x00, 0x08, 0x10, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00, 0x00, 0x00],
    'â' => [0x00, 0x00, 0x10, 0x28, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00, 0x00, 0x00],
    'ã' => [0x00, 0x00, 0x28, 0x50, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00, 0x00, 0x00],
    'ä' => [0x00, 0x00, 0x28, 0x00, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00, 0x00, 0x00],
    'å' => [0x00, 0x00, 0x10, 0x28, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00, 0x00, 0x00],
    'æ' => [0x00, 0x00, 0x00, 0x00, 0x68, 0x14, 0x3C, 0x50, 0x34, 0x00, 0x00, 0x00],
    'ç' => [0x00, 0x00, 0x00, 0x00, 0x38, 0x40, 0x40, 0x44, 0x38, 0x10, 0x20, 0x00],
    'è' => [0x00, 0x00, 0x20, 0x10, 0x38, 0x44, 0x7C, 0x40, 0x38, 0x00, 0x00, 0x00],
    'é' => [0x00, 0x00, 0x08, 0x10, 0x38, 0x44, 0x7C, 0x40, 0x38, 0x00, 0x00, 0x00],
    'ê' => [0x00, 0x00, 0x10, 0x28, 0x38, 0x44, 0x7C, 0x40, 0x38, 0x00, 0x00, 0x00],
    'ë' => [0x00, 0x00, 0x28, 0x00, 0x38, 0x44, 0x7C, 0x40, 0x38, 0x00, 0x00, 0x00],
    'ì' => [0x00, 0x00, 0x20, 0x10, 0x30, 0x10, 0x10, 0x10, 0x38, 0x00, 0x00, 0x00],
    'í' => [0x00, 0x00, 0x08, 0x10, 0x30, 0x10, 0x10, 0x10, 0x38, 0x00, 0x00, 0x00],
    'î' => [0x00, 0x00, 0x10, 0x28, 0x30, 0x10, 0x10, 0x10, 0x38, 0x00, 0x00, 0x00],
    'ï' => [0x00, 0x00, 0x28, 0x00, 0x30, 0x10, 0x10, 0x10, 0x38, 0x00, 0x00, 0x00],
    'ñ' => [0x00, 0x00, 0x28, 0x50, 0x58, 0x64, 0x44, 0x44, 0x44, 0x00, 0x00, 0x00],
    'ò' => [0x00, 0x00, 0x20, 0x10, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    'ó' => [0x00, 0x00, 0x08, 0x10, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    'ô' => [0x00, 0x00, 0x10, 0x28, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    'õ' => [0x00, 0x00, 0x28, 0x50, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    'ö' => [0x00, 0x00, 0x28, 0x00, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00],
    '÷' => [0x00, 0x00, 0x00, 0x10, 0x00, 0x7C, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00],
    'ø' => [0x00, 0x00, 0x00, 0x00, 0x3C, 0x4C, 0x54, 0x64, 0x78, 0x00, 0x00, 0x00],
    'ù' => [0x00, 0x00, 0x20, 0x10, 0x44, 0x44, 0x44, 0x4C, 0x34, 0x00, 0x00, 0x00],
    'ú' => [0x00, 0x00, 0x08, 0x10, 0x44, 0x44, 0x44, 0x4C, 0x34, 0x00, 0x00, 0x00],
    'û' => [0x00, 0x00, 0x10, 0x28, 0x44, 0x44, 0x44, 0x4C, 0x34, 0x00, 0x00, 0x00],
    'ü' => [0x00, 0x00, 0x28, 0x00, 0x44, 0x44, 0x44, 0x4C, 0x34, 0x00, 0x00, 0x00],
    'ý' => [0x00, 0x00, 0x08, 0x10, 0x44, 0x44, 0x44, 0x3C, 0x04, 0x44, 0x38, 0x00],
    'ÿ' => [0x00, 0x00, 0x28, 0x00, 0x44, 0x44, 0x44, 0x3C, 0x04, 0x44, 0x38, 0x00],
    '€' => [0x00, 0x00, 0x1C, 0x20, 0x78, 0x20, 0x78, 0x20, 0x1C, 0x00, 0x00, 0x00],
};
