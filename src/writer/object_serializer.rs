//! PDF object serialization.
//!
//! Serializes PDF objects to their byte representation. Dictionaries are
//! written on one line as `<< /Key value ... >>`; reals use two decimals.

use crate::object::{Dictionary, Object, ObjectRef};
use std::io::Write;

/// Serializer for PDF objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectSerializer;

impl ObjectSerializer {
    /// Create a new object serializer.
    pub fn new() -> Self {
        Self
    }

    /// Write an indirect object definition.
    ///
    /// Format: `{id} 0 obj\n{object}\nendobj\n`; a stream object expands to
    /// `{dict}\nstream\n{data}\nendstream`.
    pub fn write_indirect<W: Write>(&self, w: &mut W, id: u32, obj: &Object) -> std::io::Result<()> {
        writeln!(w, "{} 0 obj", id)?;
        self.write_object(w, obj)?;
        write!(w, "\nendobj\n")
    }

    /// Write an object.
    pub fn write_object<W: Write>(&self, w: &mut W, obj: &Object) -> std::io::Result<()> {
        match obj {
            Object::Integer(i) => write!(w, "{}", i),
            Object::Real(r) => write!(w, "{:.2}", r),
            Object::Name(n) => self.write_name(w, n),
            Object::Array(arr) => self.write_array(w, arr),
            Object::Dictionary(dict) => self.write_dictionary(w, dict),
            Object::Stream { dict, data } => self.write_stream(w, dict, data),
            Object::Reference(r) => write!(w, "{} {} R", r.id, r.gen),
        }
    }

    /// Write a PDF name.
    ///
    /// Names start with `/` and escape special characters with `#xx`.
    fn write_name<W: Write>(&self, w: &mut W, name: &str) -> std::io::Result<()> {
        write!(w, "/")?;
        for byte in name.bytes() {
            match byte {
                b'!'
                | b'"'
                | b'$'
                | b'&'
                | b'\''
                | b'*'..=b'.'
                | b'0'..=b'9'
                | b':'
                | b';'
                | b'='
                | b'?'
                | b'@'
                | b'A'..=b'Z'
                | b'^'..=b'z'
                | b'|'
                | b'~' => {
                    w.write_all(&[byte])?;
                },
                _ => {
                    write!(w, "#{:02X}", byte)?;
                },
            }
        }
        Ok(())
    }

    fn write_array<W: Write>(&self, w: &mut W, arr: &[Object]) -> std::io::Result<()> {
        write!(w, "[")?;
        for (i, obj) in arr.iter().enumerate() {
            if i > 0 {
                write!(w, " ")?;
            }
            self.write_object(w, obj)?;
        }
        write!(w, "]")
    }

    fn write_dictionary<W: Write>(&self, w: &mut W, dict: &Dictionary) -> std::io::Result<()> {
        write!(w, "<<")?;
        for (key, value) in dict {
            write!(w, " ")?;
            self.write_name(w, key)?;
            write!(w, " ")?;
            self.write_object(w, value)?;
        }
        write!(w, " >>")
    }

    /// Write a stream; `/Length` is appended when the dictionary lacks it.
    fn write_stream<W: Write>(&self, w: &mut W, dict: &Dictionary, data: &[u8]) -> std::io::Result<()> {
        if dict.contains_key("Length") {
            self.write_dictionary(w, dict)?;
        } else {
            let mut dict_with_length = dict.clone();
            dict_with_length.insert("Length".to_string(), Object::Integer(data.len() as i64));
            self.write_dictionary(w, &dict_with_length)?;
        }
        write!(w, "\nstream\n")?;
        w.write_all(data)?;
        write!(w, "\nendstream")
    }
}

/// Helper functions for building PDF objects.
impl ObjectSerializer {
    /// Create a Name object.
    pub fn name(s: &str) -> Object {
        Object::Name(s.to_string())
    }

    /// Create an Integer object.
    pub fn integer(i: i64) -> Object {
        Object::Integer(i)
    }

    /// Create an Array object.
    pub fn array(items: Vec<Object>) -> Object {
        Object::Array(items)
    }

    /// Create a Dictionary object; entry order is kept.
    pub fn dict(entries: Vec<(&str, Object)>) -> Object {
        Object::Dictionary(Self::entries(entries))
    }

    /// Build a bare dictionary map, for stream headers.
    pub fn entries(entries: Vec<(&str, Object)>) -> Dictionary {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    /// Create a Reference object.
    pub fn reference(id: u32) -> Object {
        Object::Reference(ObjectRef::new(id, 0))
    }

    /// Rectangle array `[0 0 width height]` anchored at the origin.
    pub fn media_box(width: f64, height: f64) -> Object {
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(width),
            Object::Real(height),
        ])
    }
}

#[cfg(test)]
pub(crate) fn serialize_to_string(obj: &Object) -> String {
    let mut buf = Vec::new();
    ObjectSerializer::new()
        .write_object(&mut buf, obj)
        .expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_integer() {
        assert_eq!(serialize_to_string(&Object::Integer(-123)), "-123");
    }

    #[test]
    fn test_serialize_real_two_decimals() {
        assert_eq!(serialize_to_string(&Object::Real(595.0)), "595.00");
        assert_eq!(serialize_to_string(&Object::Real(2.0 / 3.0)), "0.67");
    }

    #[test]
    fn test_serialize_name() {
        assert_eq!(serialize_to_string(&ObjectSerializer::name("Type")), "/Type");
        assert_eq!(
            serialize_to_string(&ObjectSerializer::name("Name With Space")),
            "/Name#20With#20Space"
        );
        assert_eq!(serialize_to_string(&ObjectSerializer::name("A(B)%")), "/A#28B#29#25");
    }

    #[test]
    fn test_serialize_dictionary_in_order() {
        let dict = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Pages")),
            ("Kids", ObjectSerializer::array(vec![ObjectSerializer::reference(1)])),
            ("Count", ObjectSerializer::integer(1)),
        ]);
        assert_eq!(serialize_to_string(&dict), "<< /Type /Pages /Kids [1 0 R] /Count 1 >>");
    }

    #[test]
    fn test_serialize_media_box() {
        assert_eq!(
            serialize_to_string(&ObjectSerializer::media_box(595.0, 842.0)),
            "[0 0 595.00 842.00]"
        );
    }

    #[test]
    fn test_write_indirect() {
        let s = ObjectSerializer::new();
        let mut buf = Vec::new();
        s.write_indirect(&mut buf, 3, &ObjectSerializer::dict(vec![("Type", ObjectSerializer::name("Catalog"))]))
            .unwrap();
        assert_eq!(buf, b"3 0 obj\n<< /Type /Catalog >>\nendobj\n");
    }

    #[test]
    fn test_write_indirect_stream() {
        let s = ObjectSerializer::new();
        let stream = Object::Stream {
            dict: Dictionary::new(),
            data: bytes::Bytes::from_static(b"q Q"),
        };
        let mut buf = Vec::new();
        s.write_indirect(&mut buf, 4, &stream).unwrap();
        assert_eq!(buf, b"4 0 obj\n<< /Length 3 >>\nstream\nq Q\nendstream\nendobj\n");
    }

    #[test]
    fn test_stream_length_appended_last() {
        let stream = Object::Stream {
            dict: ObjectSerializer::entries(vec![("Width", ObjectSerializer::integer(2))]),
            data: bytes::Bytes::from_static(b"abcdef"),
        };
        let text = serialize_to_string(&stream);
        assert!(text.starts_with("<< /Width 2 /Length 6 >>"));
    }
}
