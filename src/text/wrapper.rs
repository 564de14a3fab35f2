//! Greedy line wrapping using average character width.
//!
//! Explicit `\n` breaks are honored first and each segment is wrapped on its
//! own. A segment that is too wide is cut at the last whitespace inside the
//! fitting prefix; a segment with no usable whitespace is cut hard, mid-word.

use crate::layout::LAYOUT_EPSILON;

/// Average Helvetica glyph width as a fraction of the point size.
pub const AVG_CHAR_WIDTH_RATIO: f32 = 0.556;

/// Approximate rendered width of `text` at `point_size`.
///
/// # Examples
///
/// ```
/// use pdf_scribe::text::measure;
///
/// assert!((measure("Hello", 12.0) - 33.36).abs() < 0.001);
/// ```
pub fn measure(text: &str, point_size: f32) -> f32 {
    text.chars().count() as f32 * AVG_CHAR_WIDTH_RATIO * point_size
}

/// Wrap `text` into lines no wider than `max_width`.
///
/// Never returns an empty list: empty input yields one empty line. A single
/// character wider than `max_width` is still emitted, one per line.
pub fn wrap(text: &str, point_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        wrap_segment(segment.trim(), point_size, max_width, &mut lines);
    }
    lines
}

fn wrap_segment(segment: &str, point_size: f32, max_width: f32, lines: &mut Vec<String>) {
    if segment.is_empty() {
        lines.push(String::new());
        return;
    }

    if measure(segment, point_size) <= max_width + LAYOUT_EPSILON {
        lines.push(segment.to_string());
        return;
    }

    let chars: Vec<char> = segment.chars().collect();
    let mut rest: &[char] = &chars;

    while !rest.is_empty() {
        let fit = max_fit(rest.len(), point_size, max_width);

        let mut cut = fit;
        while cut > 0 && !rest[cut - 1].is_whitespace() {
            cut -= 1;
        }
        if cut == 0 {
            cut = fit;
        }

        let line: String = rest[..cut].iter().collect();
        lines.push(line.trim_end().to_string());

        rest = &rest[cut..];
        let skip = rest.iter().take_while(|c| c.is_whitespace()).count();
        rest = &rest[skip..];
    }
}

/// Characters that fit in `max_width`, clamped to `1..=remaining`.
fn max_fit(remaining: usize, point_size: f32, max_width: f32) -> usize {
    let char_width = AVG_CHAR_WIDTH_RATIO * point_size;
    let max_chars = (max_width / char_width).floor();
    // Negative and NaN widths saturate to 0 and are lifted to 1 below.
    (max_chars as usize).clamp(1, remaining)
}
