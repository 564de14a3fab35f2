//! File-structure tests for the document encoder.
//!
//! These parse the produced bytes back with regexes and check that the
//! cross-reference table actually points at the objects it claims to.

use pdf_scribe::elements::{PixelTextSize, TextAlign};
use pdf_scribe::layout::Color;
use pdf_scribe::rendering::PixelBuffer;
use pdf_scribe::writer::DocumentEncoder;
use regex::bytes::Regex;

fn encode(build: impl FnOnce(&mut DocumentEncoder<Vec<u8>>)) -> Vec<u8> {
    let mut encoder = DocumentEncoder::new(Vec::new(), Color::WHITE);
    build(&mut encoder);
    encoder.finalize().unwrap()
}

fn xref_offsets(pdf: &[u8]) -> Vec<usize> {
    let entry = Regex::new(r"(\d{10}) 00000 n \n").unwrap();
    entry
        .captures_iter(pdf)
        .map(|c| std::str::from_utf8(&c[1]).unwrap().parse().unwrap())
        .collect()
}

fn startxref(pdf: &[u8]) -> usize {
    let re = Regex::new(r"startxref\n(\d+)\n%%EOF$").unwrap();
    let caps = re.captures(pdf).expect("startxref trailer");
    std::str::from_utf8(&caps[1]).unwrap().parse().unwrap()
}

#[test]
fn test_xref_offsets_point_at_objects() {
    let pdf = encode(|enc| {
        enc.draw_text("Offsets must line up", 18.0, Color::BLACK, TextAlign::Center)
            .unwrap();
        enc.draw_bitmap_text("XREF", Color::WHITE, Color::BLACK, PixelTextSize::SMALL)
            .unwrap();
        enc.draw_text("after the image", 12.0, Color::RED, TextAlign::Right)
            .unwrap();
    });

    let offsets = xref_offsets(&pdf);
    // page, image, catalog, pages, font, content
    assert_eq!(offsets.len(), 6);
    for (index, offset) in offsets.iter().enumerate() {
        let header = format!("{} 0 obj\n", index + 1);
        assert!(
            pdf[*offset..].starts_with(header.as_bytes()),
            "xref entry {} does not point at its object",
            index + 1
        );
    }
}

#[test]
fn test_startxref_points_at_table() {
    let pdf = encode(|enc| {
        enc.draw_text("x", 12.0, Color::BLACK, TextAlign::Left).unwrap();
    });
    let pos = startxref(&pdf);
    assert!(pdf[pos..].starts_with(b"xref\n0 6\n0000000000 65535 f \n"));
}

#[test]
fn test_every_object_has_xref_entry() {
    let pdf = encode(|enc| {
        for i in 0..60 {
            enc.draw_text(&format!("Paragraph {}", i), 14.0, Color::BLACK, TextAlign::Left)
                .unwrap();
        }
    });
    let objects = Regex::new(r"(?m)^(\d+) 0 obj$").unwrap();
    let count = objects.find_iter(&pdf).count();
    assert_eq!(count, xref_offsets(&pdf).len());

    let size = Regex::new(r"/Size (\d+)").unwrap();
    let caps = size.captures(&pdf).unwrap();
    let size: usize = std::str::from_utf8(&caps[1]).unwrap().parse().unwrap();
    assert_eq!(size, count + 1);
}

#[test]
fn test_pages_split_by_content_height() {
    // 742 / 21 = 35.3 lines of 14pt text per page
    let mut encoder = DocumentEncoder::new(Vec::new(), Color::WHITE);
    for i in 0..71 {
        encoder
            .draw_text(&format!("row {}", i), 14.0, Color::BLACK, TextAlign::Left)
            .unwrap();
    }
    assert_eq!(encoder.page_count(), 3);
    let pdf = encoder.finalize().unwrap();
    let text = String::from_utf8_lossy(&pdf);
    assert_eq!(text.matches("/Type /Page ").count(), 3);
    assert!(text.contains("/Count 3"));
}

#[test]
fn test_image_referenced_from_resources_and_content() {
    let pdf = encode(|enc| {
        let image = PixelBuffer::from_rgb(3, 2, vec![128; 18]);
        enc.draw_image(&image).unwrap();
    });
    let text = String::from_utf8_lossy(&pdf);
    assert!(text.contains("/XObject << /Im2 2 0 R >>"));
    assert!(text.contains("q 3.00 0 0 2.00 296.00 790.00 cm /Im2 Do Q"));
}

#[test]
fn test_image_starts_new_page_when_too_tall() {
    let mut encoder = DocumentEncoder::new(Vec::new(), Color::WHITE);
    for _ in 0..40 {
        encoder.draw_text("filler", 12.0, Color::BLACK, TextAlign::Left).unwrap();
    }
    assert_eq!(encoder.page_count(), 1);
    // cursor is at 770; a 100px image cannot fit above 792
    encoder.draw_image(&PixelBuffer::new(10, 100)).unwrap();
    assert_eq!(encoder.page_count(), 2);
    assert_eq!(encoder.cursor_y(), 150.0);
}

#[test]
fn test_background_painted_on_every_page() {
    let mut encoder = DocumentEncoder::new(Vec::new(), Color::YELLOW);
    for i in 0..50 {
        encoder.draw_text(&format!("{}", i), 12.0, Color::BLACK, TextAlign::Left).unwrap();
    }
    let pdf = encoder.finalize().unwrap();
    let text = String::from_utf8_lossy(&pdf);
    assert_eq!(text.matches("1.000000 1.000000 0.000000 rg\n0 0 595.00 842.00 re f").count(), 2);
}

#[test]
fn test_special_characters_escaped() {
    let pdf = encode(|enc| {
        enc.draw_text(r"(a) \ b", 12.0, Color::BLACK, TextAlign::Left).unwrap();
    });
    let text = String::from_utf8_lossy(&pdf);
    assert!(text.contains(r"(\(a\) \\ b) Tj"));
}

#[test]
fn test_each_page_pairs_images_with_resources() {
    let mut encoder = DocumentEncoder::new(Vec::new(), Color::WHITE);
    // 80pt tall at scale 5: nine per page
    for _ in 0..30 {
        encoder
            .draw_bitmap_text("HELLO", Color::BLACK, Color::WHITE, PixelTextSize::EXTRA_LARGE)
            .unwrap();
    }
    assert_eq!(encoder.page_count(), 4);
    let pdf = encoder.finalize().unwrap();
    let text = String::from_utf8_lossy(&pdf);

    let page = regex::Regex::new(
        r"<< /Type /Page /Parent \d+ 0 R /MediaBox \[[^\]]*\] /Contents (\d+) 0 R /Resources << /Font << /Helvetica \d+ 0 R >>(?: /XObject << ([^>]*) >>)? >> >>",
    )
    .unwrap();
    let resource = regex::Regex::new(r"/Im(\d+) (\d+) 0 R").unwrap();
    let painted = regex::Regex::new(r"/Im(\d+) Do").unwrap();

    let mut pages = 0;
    let mut total = 0;
    for caps in page.captures_iter(&text) {
        pages += 1;
        let xobjects = caps.get(2).map_or("", |m| m.as_str());
        let mut listed: Vec<u32> = resource
            .captures_iter(xobjects)
            .map(|c| {
                assert_eq!(&c[1], &c[2], "resource name must match its object id");
                c[1].parse().unwrap()
            })
            .collect();

        let stream = regex::Regex::new(&format!(
            r"(?s)\n{} 0 obj\n<< /Length \d+ >>\nstream\n(.*?)\nendstream",
            &caps[1]
        ))
        .unwrap();
        let content = stream.captures(&text).expect("content stream for page");
        let mut drawn: Vec<u32> =
            painted.captures_iter(&content[1]).map(|c| c[1].parse().unwrap()).collect();

        assert!(!drawn.is_empty(), "page {} has no images", pages);
        listed.sort_unstable();
        drawn.sort_unstable();
        assert_eq!(listed, drawn, "page {}", pages);
        total += drawn.len();
    }
    assert_eq!(pages, 4);
    assert_eq!(total, 30);
}
