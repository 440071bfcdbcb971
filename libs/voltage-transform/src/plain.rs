//! Plain byte transform
//!
//! The reference strategy: values keep their little-endian representation and
//! strings are written exactly as encoded, without padding. Word-reorder
//! strategies are defined relative to this layout.

use crate::bytes::{slice_at, RegisterValue};
use crate::codec::ByteCodec;
use crate::error::Result;
use crate::text::TextEncoding;

/// Reference little-endian strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainTransform;

impl PlainTransform {
    pub fn new() -> Self {
        Self
    }

    fn decode_value<T: RegisterValue>(buffer: &[u8], offset: usize) -> Result<T> {
        let mut bytes = T::Bytes::default();
        bytes
            .as_mut()
            .copy_from_slice(slice_at(buffer, offset, T::WIDTH)?);
        Ok(T::from_plain_bytes(bytes))
    }

    fn encode_values<T: RegisterValue>(values: &[T]) -> Vec<u8> {
        values
            .iter()
            .flat_map(|value| value.to_plain_bytes().as_ref().to_vec())
            .collect()
    }
}

impl ByteCodec for PlainTransform {
    fn decode_i16(&self, buffer: &[u8], offset: usize) -> Result<i16> {
        Self::decode_value(buffer, offset)
    }

    fn decode_u16(&self, buffer: &[u8], offset: usize) -> Result<u16> {
        Self::decode_value(buffer, offset)
    }

    fn decode_i32(&self, buffer: &[u8], offset: usize) -> Result<i32> {
        Self::decode_value(buffer, offset)
    }

    fn decode_u32(&self, buffer: &[u8], offset: usize) -> Result<u32> {
        Self::decode_value(buffer, offset)
    }

    fn decode_i64(&self, buffer: &[u8], offset: usize) -> Result<i64> {
        Self::decode_value(buffer, offset)
    }

    fn decode_u64(&self, buffer: &[u8], offset: usize) -> Result<u64> {
        Self::decode_value(buffer, offset)
    }

    fn decode_f32(&self, buffer: &[u8], offset: usize) -> Result<f32> {
        Self::decode_value(buffer, offset)
    }

    fn decode_f64(&self, buffer: &[u8], offset: usize) -> Result<f64> {
        Self::decode_value(buffer, offset)
    }

    fn decode_string(
        &self,
        buffer: &[u8],
        offset: usize,
        length: usize,
        encoding: TextEncoding,
    ) -> Result<String> {
        Ok(encoding.decode(slice_at(buffer, offset, length)?))
    }

    fn encode_i16(&self, values: Option<&[i16]>) -> Option<Vec<u8>> {
        values.map(Self::encode_values)
    }

    fn encode_u16(&self, values: Option<&[u16]>) -> Option<Vec<u8>> {
        values.map(Self::encode_values)
    }

    fn encode_i32(&self, values: Option<&[i32]>) -> Option<Vec<u8>> {
        values.map(Self::encode_values)
    }

    fn encode_u32(&self, values: Option<&[u32]>) -> Option<Vec<u8>> {
        values.map(Self::encode_values)
    }

    fn encode_i64(&self, values: Option<&[i64]>) -> Option<Vec<u8>> {
        values.map(Self::encode_values)
    }

    fn encode_u64(&self, values: Option<&[u64]>) -> Option<Vec<u8>> {
        values.map(Self::encode_values)
    }

    fn encode_f32(&self, values: Option<&[f32]>) -> Option<Vec<u8>> {
        values.map(Self::encode_values)
    }

    fn encode_f64(&self, values: Option<&[f64]>) -> Option<Vec<u8>> {
        values.map(Self::encode_values)
    }

    fn encode_string(&self, value: Option<&str>, encoding: TextEncoding) -> Option<Vec<u8>> {
        value.map(|text| encoding.encode(text))
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_plain_layout_is_little_endian() {
        let codec = PlainTransform::new();
        assert_eq!(
            codec.encode_u32(Some(&[0x12345678])).unwrap(),
            vec![0x78, 0x56, 0x34, 0x12]
        );
        assert_eq!(codec.decode_i16(&[0xFE, 0xFF], 0).unwrap(), -2);
    }

    #[test]
    fn test_plain_string_not_padded() {
        let codec = PlainTransform::new();
        assert_eq!(
            codec.encode_string(Some("abc"), TextEncoding::Ascii).unwrap(),
            b"abc".to_vec()
        );
        assert_eq!(
            codec.decode_string(b"abc", 0, 3, TextEncoding::Ascii).unwrap(),
            "abc"
        );
    }
}
