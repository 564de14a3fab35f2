//! Owned RGB pixel buffer.

use crate::error::{Error, Result};
use crate::layout::Color;

/// An RGB image, 3 bytes per pixel in row-major order.
///
/// The pixel memory can be released early with [`PixelBuffer::release`];
/// reading it afterwards fails with [`Error::ResourceDisposed`].
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    size: usize,
    pixels: Option<Vec<u8>>,
}

impl PixelBuffer {
    /// Create a black image.
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height * 3;
        Self {
            width,
            height,
            size,
            pixels: Some(vec![0; size]),
        }
    }

    /// Wrap existing RGB data.
    ///
    /// The data is truncated or zero-padded to exactly `width * height * 3`
    /// bytes.
    pub fn from_rgb(width: usize, height: usize, mut data: Vec<u8>) -> Self {
        let size = width * height * 3;
        data.resize(size, 0);
        Self {
            width,
            height,
            size,
            pixels: Some(data),
        }
    }

    /// Build an image from a two-color `bitmap` (`true` = foreground).
    ///
    /// If `fg` is indistinguishable from `bg` it is replaced with black on a
    /// light background or white on a dark one. Bitmap entries beyond
    /// `width * height` are ignored; missing entries stay background.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_scribe::layout::Color;
    /// use pdf_scribe::rendering::PixelBuffer;
    ///
    /// let image = PixelBuffer::from_bitmap(&[true, false], 2, 1, Color::RED, Color::BLUE);
    /// assert_eq!(image.pixels().unwrap(), &[255, 0, 0, 0, 0, 255]);
    /// ```
    pub fn from_bitmap(bitmap: &[bool], width: usize, height: usize, fg: Color, bg: Color) -> Self {
        let fg = fg.contrasting_on(&bg);
        let size = width * height * 3;
        let bg_bytes = bg.to_rgb_bytes();
        let fg_bytes = fg.to_rgb_bytes();

        let mut pixels = Vec::with_capacity(size);
        for _ in 0..width * height {
            pixels.extend_from_slice(&bg_bytes);
        }

        for (i, _) in bitmap.iter().enumerate().filter(|(_, &on)| on) {
            let offset = i * 3;
            if offset >= size {
                break;
            }
            pixels[offset..offset + 3].copy_from_slice(&fg_bytes);
        }

        Self {
            width,
            height,
            size,
            pixels: Some(pixels),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Byte length of the pixel data (`width * height * 3`).
    pub fn size(&self) -> usize {
        self.size
    }

    /// The RGB bytes.
    pub fn pixels(&self) -> Result<&[u8]> {
        self.pixels
            .as_deref()
            .ok_or(Error::ResourceDisposed("pixel buffer"))
    }

    /// Free the pixel memory. Releasing twice is a no-op.
    pub fn release(&mut self) {
        self.pixels = None;
    }

    /// Whether [`release`](Self::release) has been called.
    pub fn is_released(&self) -> bool {
        self.pixels.is_none()
    }
}
