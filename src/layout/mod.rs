//! Page geometry and color model.
//!
//! All pages are A4 portrait in PDF units (1/72 inch). Layout coordinates
//! handed to the writer use a top-left origin; the page content builder
//! converts them to PDF's bottom-left origin.

mod color;

pub use color::Color;

/// Page width (A4).
pub const PAGE_WIDTH: f32 = 595.0;

/// Page height (A4).
pub const PAGE_HEIGHT: f32 = 842.0;

/// Margin on every side of the page.
pub const MARGIN: f32 = 50.0;

/// Width available for content between the left and right margins.
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// Height available for content between the top and bottom margins.
pub const CONTENT_HEIGHT: f32 = PAGE_HEIGHT - 2.0 * MARGIN;

/// Line height as a multiple of the point size.
pub const LINE_SPACING: f32 = 1.5;

/// Slack applied when comparing a layout position against a bound.
pub const LAYOUT_EPSILON: f32 = 0.01;

/// Lower content bound, measured from the top of the page.
pub const CONTENT_BOTTOM: f32 = PAGE_HEIGHT - MARGIN;
