//! Page content stream builder.
//!
//! Each page keeps its drawing operators as lines of [`ContentStreamOp`]s.
//! Operators on one line are separated by a space; every line ends with `\n`.
//! Colors are written with six decimals, geometry with two.

use super::image_handler::ImageResource;
use crate::layout::{Color, PAGE_HEIGHT, PAGE_WIDTH};

/// Operations that can be added to a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Save graphics state (q)
    SaveState,
    /// Restore graphics state (Q)
    RestoreState,
    /// Scale a unit square and translate it (`sx 0 0 sy tx ty cm`)
    ScaleTranslate(f32, f32, f32, f32),
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Set font and size (Tf)
    SetFont(String, f32),
    /// Move text position (Td)
    MoveText(f32, f32),
    /// Show text (Tj); escaped when written
    ShowText(String),
    /// Set fill color RGB (rg)
    SetFillColorRGB(f32, f32, f32),
    /// Rectangle anchored at the origin (`0 0 w h re`)
    Rectangle(f32, f32),
    /// Fill (f)
    Fill,
    /// Paint XObject (Do)
    PaintXObject(String),
}

/// Drawing operators for one page plus the images it references.
#[derive(Debug, Clone)]
pub struct PageContentBuilder {
    id: u32,
    background: Color,
    font_name: String,
    lines: Vec<Vec<ContentStreamOp>>,
    image_ids: Vec<u32>,
}

impl PageContentBuilder {
    /// Start a page filled with `background`.
    pub fn new(id: u32, background: Color, font_name: impl Into<String>) -> Self {
        let mut page = Self {
            id,
            background,
            font_name: font_name.into(),
            lines: Vec::new(),
            image_ids: Vec::new(),
        };
        page.lines.push(vec![ContentStreamOp::SetFillColorRGB(
            background.r,
            background.g,
            background.b,
        )]);
        page.lines.push(vec![
            ContentStreamOp::Rectangle(PAGE_WIDTH, PAGE_HEIGHT),
            ContentStreamOp::Fill,
        ]);
        page
    }

    /// Object id of the page.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Show one line of text.
    ///
    /// `x`/`y` are measured from the top-left corner; `y` is the top of the
    /// line. A color indistinguishable from the background is swapped for
    /// black or white.
    pub fn add_text(&mut self, text: &str, x: f32, y: f32, point_size: f32, color: Color) {
        let color = color.contrasting_on(&self.background);
        let pdf_y = PAGE_HEIGHT - y - point_size;

        self.lines.push(vec![
            ContentStreamOp::SaveState,
            ContentStreamOp::BeginText,
            ContentStreamOp::SetFont(self.font_name.clone(), point_size),
            ContentStreamOp::SetFillColorRGB(color.r, color.g, color.b),
            ContentStreamOp::MoveText(x, pdf_y),
            ContentStreamOp::ShowText(text.to_string()),
            ContentStreamOp::EndText,
            ContentStreamOp::RestoreState,
        ]);
    }

    /// Place an image scaled to `width x height` with its top-left at `(x, y)`.
    pub fn add_image(&mut self, image: &ImageResource, x: f32, y: f32, width: f32, height: f32) {
        self.image_ids.push(image.id);
        self.lines.push(vec![
            ContentStreamOp::SaveState,
            ContentStreamOp::ScaleTranslate(width, height, x, PAGE_HEIGHT - y - height),
            ContentStreamOp::PaintXObject(image.resource_name()),
            ContentStreamOp::RestoreState,
        ]);
    }

    /// Ids of images drawn on this page, in drawing order.
    pub fn image_ids(&self) -> &[u32] {
        &self.image_ids
    }

    /// Whether any image is drawn on this page.
    pub fn has_images(&self) -> bool {
        !self.image_ids.is_empty()
    }

    /// Operator text after substituting common non-Latin-1 punctuation.
    pub fn content(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            for (i, op) in line.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(&format_op(op));
            }
            out.push('\n');
        }
        sanitize_for_latin1(&out)
    }

    /// Content stream bytes in the single-byte output encoding.
    pub fn encoded_content(&self) -> Vec<u8> {
        encode_latin1(&self.content())
    }
}

fn format_op(op: &ContentStreamOp) -> String {
    match op {
        ContentStreamOp::SaveState => "q".to_string(),
        ContentStreamOp::RestoreState => "Q".to_string(),
        ContentStreamOp::ScaleTranslate(sx, sy, tx, ty) => {
            format!("{:.2} 0 0 {:.2} {:.2} {:.2} cm", sx, sy, tx, ty)
        },
        ContentStreamOp::BeginText => "BT".to_string(),
        ContentStreamOp::EndText => "ET".to_string(),
        ContentStreamOp::SetFont(name, size) => format!("/{} {:.2} Tf", name, size),
        ContentStreamOp::MoveText(tx, ty) => format!("{:.2} {:.2} Td", tx, ty),
        ContentStreamOp::ShowText(text) => format!("({}) Tj", escape_pdf_string(text)),
        ContentStreamOp::SetFillColorRGB(r, g, b) => format!("{:.6} {:.6} {:.6} rg", r, g, b),
        ContentStreamOp::Rectangle(w, h) => format!("0 0 {:.2} {:.2} re", w, h),
        ContentStreamOp::Fill => "f".to_string(),
        ContentStreamOp::PaintXObject(name) => format!("/{} Do", name),
    }
}

/// Escape text for a literal `( ... )` string.
pub fn escape_pdf_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Replace common punctuation missing from Latin-1 with ASCII equivalents.
///
/// Anything else outside Latin-1 is left as is.
pub fn sanitize_for_latin1(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{20AC}' => out.push_str("EUR"),
            '\u{2014}' | '\u{2013}' => out.push('-'),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{2026}' => out.push_str("..."),
            '\u{0153}' => out.push_str("oe"),
            '\u{0152}' => out.push_str("OE"),
            '\u{2192}' => out.push_str("->"),
            '\u{2190}' => out.push_str("<-"),
            '\u{2191}' => out.push('^'),
            '\u{2193}' => out.push('v'),
            _ => out.push(ch),
        }
    }
    out
}

/// Encode as Latin-1, writing `?` for characters above U+00FF.
pub fn encode_latin1(text: &str) -> Vec<u8> {
    let mut lossy = 0usize;
    let bytes = text
        .chars()
        .map(|ch| match u8::try_from(u32::from(ch)) {
            Ok(b) => b,
            Err(_) => {
                lossy += 1;
                b'?'
            },
        })
        .collect();
    if lossy > 0 {
        log::warn!("{} character(s) not representable in Latin-1 were replaced with '?'", lossy);
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PageContentBuilder {
        PageContentBuilder::new(1, Color::WHITE, "Helvetica")
    }

    #[test]
    fn test_background_fill() {
        let content = page().content();
        assert_eq!(content, "1.000000 1.000000 1.000000 rg\n0 0 595.00 842.00 re f\n");
    }

    #[test]
    fn test_add_text() {
        let mut p = page();
        p.add_text("Hello", 50.0, 50.0, 12.0, Color::RED);
        let content = p.content();
        assert!(content.contains(
            "q BT /Helvetica 12.00 Tf 1.000000 0.000000 0.000000 rg 50.00 780.00 Td (Hello) Tj ET Q\n"
        ));
    }

    #[test]
    fn test_text_auto_contrast() {
        let mut p = PageContentBuilder::new(1, Color::BLACK, "Helvetica");
        p.add_text("X", 50.0, 50.0, 12.0, Color::new(0.05, 0.05, 0.05));
        assert!(p.content().contains("1.000000 1.000000 1.000000 rg 50.00"));
    }

    #[test]
    fn test_add_image() {
        let mut p = page();
        let image = ImageResource::new(7, 44, 56, bytes::Bytes::from(vec![0u8; 44 * 56 * 3]));
        p.add_image(&image, 275.5, 50.0, 44.0, 56.0);
        assert_eq!(p.image_ids(), &[7]);
        assert!(p.has_images());
        assert!(p.content().contains("q 44.00 0 0 56.00 275.50 736.00 cm /Im7 Do Q\n"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_pdf_string(r"a\b(c)"), r"a\\b\(c\)");
        assert_eq!(escape_pdf_string("x\ny\rz\t"), "x\\ny\\rz\\t");
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize_for_latin1("5\u{20AC} \u{2014} \u{2026}"), "5EUR - ...");
        assert_eq!(sanitize_for_latin1("\u{201C}hi\u{201D} \u{2018}x\u{2019}"), "\"hi\" 'x'");
        assert_eq!(sanitize_for_latin1("\u{0153}uvre \u{0152}"), "oeuvre OE");
        assert_eq!(sanitize_for_latin1("\u{2192}\u{2190}\u{2191}\u{2193}"), "-><-^v");
        assert_eq!(sanitize_for_latin1("caf\u{00E9} \u{4E2D}"), "caf\u{00E9} \u{4E2D}");
    }

    #[test]
    fn test_encode_latin1() {
        assert_eq!(encode_latin1("caf\u{00E9}"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(encode_latin1("\u{4E2D}!"), b"?!".to_vec());
    }

    #[test]
    fn test_encoded_length_counts_bytes() {
        let mut p = page();
        p.add_text("\u{00E9}\u{00E9}", 50.0, 50.0, 12.0, Color::BLACK);
        assert_eq!(p.encoded_content().len(), p.content().chars().count());
    }
}
