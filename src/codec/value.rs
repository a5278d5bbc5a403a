//! Self-describing value codec driver.
//!
//! Frame payloads are MessagePack: every value carries its own type
//! marker, so a payload decodes to an [`rmpv::Value`] tree with no schema.
//! This module only drives the codec — decode one value per payload,
//! render a tree, render raw bytes — it does not own the encoding.

use std::io::{self, Write};

use rmpv::Value;

use crate::error::{DumpError, Result};

/// Driver for the MessagePack value codec.
pub struct ValueCodec;

impl ValueCodec {
    /// Decode exactly one self-describing value from `payload`.
    ///
    /// A payload is one frame's worth of bytes and must hold exactly one
    /// value tree. Bytes left over after the value decode as a
    /// [`DumpError::TrailingPayload`] — leftovers are corruption, not
    /// padding.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes do not form a valid value tree, or
    /// if the tree does not account for the whole payload.
    pub fn decode(payload: &[u8]) -> Result<Value> {
        let mut rest = payload;
        let value = rmpv::decode::read_value(&mut rest)?;
        if !rest.is_empty() {
            return Err(DumpError::TrailingPayload {
                remaining: rest.len(),
            });
        }
        Ok(value)
    }

    /// Render a decoded value tree to `sink`.
    #[inline]
    pub fn render<W: Write>(value: &Value, sink: &mut W) -> io::Result<()> {
        write!(sink, "{value}")
    }

    /// Render raw bytes to `sink`.
    ///
    /// Printable ASCII is written as-is, everything else as `\xNN`. Used
    /// for decode-error and trailing-data reports where the bytes have no
    /// decodable structure to show.
    pub fn render_raw<W: Write>(bytes: &[u8], sink: &mut W) -> io::Result<()> {
        for &byte in bytes {
            if byte.is_ascii_graphic() || byte == b' ' {
                sink.write_all(&[byte])?;
            } else {
                write!(sink, "\\x{byte:02x}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: &Value) -> Vec<u8> {
        let mut buf = Vec::new();
        rmpv::encode::write_value(&mut buf, value).unwrap();
        buf
    }

    #[test]
    fn test_decode_scalar() {
        let bytes = encode(&Value::from(42));
        let value = ValueCodec::decode(&bytes).unwrap();
        assert_eq!(value, Value::from(42));
    }

    #[test]
    fn test_decode_nested_tree() {
        let tree = Value::Map(vec![
            (Value::from("id"), Value::from(7)),
            (
                Value::from("tags"),
                Value::Array(vec![Value::from("a"), Value::from("b")]),
            ),
        ]);
        let bytes = encode(&tree);
        assert_eq!(ValueCodec::decode(&bytes).unwrap(), tree);
    }

    #[test]
    fn test_decode_unterminated_container_fails() {
        // fixmap declaring one pair, with nothing behind it
        let result = ValueCodec::decode(&[0x81]);
        assert!(matches!(result, Err(DumpError::Decode(_))));
    }

    #[test]
    fn test_decode_empty_payload_fails() {
        let result = ValueCodec::decode(&[]);
        assert!(matches!(result, Err(DumpError::Decode(_))));
    }

    #[test]
    fn test_decode_truncated_value_fails() {
        let bytes = encode(&Value::from("truncate me"));
        let result = ValueCodec::decode(&bytes[..bytes.len() - 3]);
        assert!(matches!(result, Err(DumpError::Decode(_))));
    }

    #[test]
    fn test_decode_trailing_payload_fails() {
        let mut bytes = encode(&Value::from(1));
        bytes.extend_from_slice(&[0xde, 0xad]);
        let result = ValueCodec::decode(&bytes);
        assert!(matches!(
            result,
            Err(DumpError::TrailingPayload { remaining: 2 })
        ));
    }

    #[test]
    fn test_render_matches_value_display() {
        let tree = Value::Array(vec![Value::from(1), Value::from("two"), Value::Nil]);
        let mut sink = Vec::new();
        ValueCodec::render(&tree, &mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), format!("{tree}"));
    }

    #[test]
    fn test_round_trip_rendering_consistency() {
        // Rendering a decoded tree must equal rendering the tree directly
        let tree = Value::Map(vec![(Value::from("n"), Value::from(-5))]);
        let decoded = ValueCodec::decode(&encode(&tree)).unwrap();

        let mut direct = Vec::new();
        let mut via_decode = Vec::new();
        ValueCodec::render(&tree, &mut direct).unwrap();
        ValueCodec::render(&decoded, &mut via_decode).unwrap();
        assert_eq!(direct, via_decode);
    }

    #[test]
    fn test_render_raw_passes_printable_ascii() {
        let mut sink = Vec::new();
        ValueCodec::render_raw(b"frame 1!", &mut sink).unwrap();
        assert_eq!(sink, b"frame 1!");
    }

    #[test]
    fn test_render_raw_escapes_unprintable_bytes() {
        let mut sink = Vec::new();
        ValueCodec::render_raw(&[0x00, b'A', 0xff, b'\n'], &mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "\\x00A\\xff\\x0a");
    }

    #[test]
    fn test_render_raw_empty() {
        let mut sink = Vec::new();
        ValueCodec::render_raw(b"", &mut sink).unwrap();
        assert!(sink.is_empty());
    }
}
