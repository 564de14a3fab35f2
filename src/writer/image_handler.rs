//! Image XObjects for PDF generation.
//!
//! Images are embedded as raw, uncompressed 8-bit DeviceRGB samples.

use super::object_serializer::ObjectSerializer;
use crate::object::Object;
use bytes::Bytes;

/// Color space for image data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// RGB color (3 components per pixel)
    DeviceRGB,
}

impl ColorSpace {
    /// Get the PDF name for this color space.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            ColorSpace::DeviceRGB => "DeviceRGB",
        }
    }
}

/// An image placed in the document, with its own copy of the pixel data.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageResource {
    /// Object id of the image XObject
    pub id: u32,
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Row-major RGB samples
    pub data: Bytes,
}

impl ImageResource {
    /// Bits per color component.
    pub const BITS_PER_COMPONENT: u8 = 8;

    /// Create an image resource from RGB data.
    pub fn new(id: u32, width: usize, height: usize, data: Bytes) -> Self {
        Self {
            id,
            width,
            height,
            data,
        }
    }

    /// Resource name used in page dictionaries and content streams.
    pub fn resource_name(&self) -> String {
        format!("Im{}", self.id)
    }

    /// Color space of the samples.
    pub fn color_space(&self) -> ColorSpace {
        ColorSpace::DeviceRGB
    }

    /// Build the image XObject stream.
    pub fn to_xobject(&self) -> Object {
        let dict = ObjectSerializer::entries(vec![
            ("Type", ObjectSerializer::name("XObject")),
            ("Subtype", ObjectSerializer::name("Image")),
            ("Width", ObjectSerializer::integer(self.width as i64)),
            ("Height", ObjectSerializer::integer(self.height as i64)),
            ("ColorSpace", ObjectSerializer::name(self.color_space().pdf_name())),
            ("BitsPerComponent", ObjectSerializer::integer(i64::from(Self::BITS_PER_COMPONENT))),
            ("Length", ObjectSerializer::integer(self.data.len() as i64)),
        ]);
        Object::Stream {
            dict,
            data: self.data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::object_serializer::serialize_to_string;

    #[test]
    fn test_xobject_dictionary() {
        let image = ImageResource::new(5, 2, 1, Bytes::from_static(&[1, 2, 3, 4, 5, 6]));
        let text = serialize_to_string(&image.to_xobject());
        assert!(text.starts_with(
            "<< /Type /XObject /Subtype /Image /Width 2 /Height 1 /ColorSpace /DeviceRGB \
             /BitsPerComponent 8 /Length 6 >>\nstream\n"
        ));
        assert_eq!(image.resource_name(), "Im5");
    }
}
