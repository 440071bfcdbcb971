//! Shared byte codec contract
//!
//! Every byte-order strategy implements [`ByteCodec`], so protocol drivers can
//! hold an `Arc<dyn ByteCodec>` and switch strategies per channel without code
//! changes.
//!
//! Encode entry points take `Option` input: a missing array or string yields a
//! missing buffer, not an error.

use crate::bytes::{pack_bools, slice_at, unpack_bools};
use crate::error::{Result, TransformError};
use crate::text::TextEncoding;

/// Total byte span of `count` elements of `width` bytes at `offset`, bounds-checked
fn checked_span(buffer: &[u8], offset: usize, count: usize, width: usize) -> Result<()> {
    let length = count
        .checked_mul(width)
        .ok_or_else(|| TransformError::out_of_range(offset, usize::MAX, buffer.len()))?;
    slice_at(buffer, offset, length).map(|_| ())
}

macro_rules! provided_array_decode {
    ($($name:ident => $scalar:ident: $ty:ty, $width:literal;)*) => {
        $(
            #[doc = concat!("Decode `count` consecutive `", stringify!($ty), "` values starting at `offset`")]
            fn $name(&self, buffer: &[u8], offset: usize, count: usize) -> Result<Vec<$ty>> {
                checked_span(buffer, offset, count, $width)?;
                (0..count)
                    .map(|i| self.$scalar(buffer, offset + i * $width))
                    .collect()
            }
        )*
    };
}

/// Byte-order strategy: raw register bytes ↔ typed values
pub trait ByteCodec: Send + Sync {
    // ========================================================================
    // Decode (buffer → value)
    // ========================================================================

    fn decode_i16(&self, buffer: &[u8], offset: usize) -> Result<i16>;
    fn decode_u16(&self, buffer: &[u8], offset: usize) -> Result<u16>;
    fn decode_i32(&self, buffer: &[u8], offset: usize) -> Result<i32>;
    fn decode_u32(&self, buffer: &[u8], offset: usize) -> Result<u32>;
    fn decode_i64(&self, buffer: &[u8], offset: usize) -> Result<i64>;
    fn decode_u64(&self, buffer: &[u8], offset: usize) -> Result<u64>;
    fn decode_f32(&self, buffer: &[u8], offset: usize) -> Result<f32>;
    fn decode_f64(&self, buffer: &[u8], offset: usize) -> Result<f64>;

    /// Decode `length` bytes at `offset` as text
    fn decode_string(
        &self,
        buffer: &[u8],
        offset: usize,
        length: usize,
        encoding: TextEncoding,
    ) -> Result<String>;

    /// Byte at `offset` is non-zero
    fn decode_bool(&self, buffer: &[u8], offset: usize) -> Result<bool> {
        Ok(slice_at(buffer, offset, 1)?[0] != 0)
    }

    /// Unpack `count` bits (LSB-first) from the bytes starting at `offset`
    fn decode_bools(&self, buffer: &[u8], offset: usize, count: usize) -> Result<Vec<bool>> {
        let bytes = slice_at(buffer, offset, count.div_ceil(8))?;
        Ok(unpack_bools(bytes, count))
    }

    /// Copy `length` raw bytes at `offset`
    fn decode_bytes(&self, buffer: &[u8], offset: usize, length: usize) -> Result<Vec<u8>> {
        Ok(slice_at(buffer, offset, length)?.to_vec())
    }

    provided_array_decode! {
        decode_i16_array => decode_i16: i16, 2;
        decode_u16_array => decode_u16: u16, 2;
        decode_i32_array => decode_i32: i32, 4;
        decode_u32_array => decode_u32: u32, 4;
        decode_i64_array => decode_i64: i64, 8;
        decode_u64_array => decode_u64: u64, 8;
        decode_f32_array => decode_f32: f32, 4;
        decode_f64_array => decode_f64: f64, 8;
    }

    // ========================================================================
    // Encode (value → buffer)
    // ========================================================================

    /// Pack booleans LSB-first
    fn encode_bools(&self, values: Option<&[bool]>) -> Option<Vec<u8>> {
        values.map(pack_bools)
    }

    fn encode_i16(&self, values: Option<&[i16]>) -> Option<Vec<u8>>;
    fn encode_u16(&self, values: Option<&[u16]>) -> Option<Vec<u8>>;
    fn encode_i32(&self, values: Option<&[i32]>) -> Option<Vec<u8>>;
    fn encode_u32(&self, values: Option<&[u32]>) -> Option<Vec<u8>>;
    fn encode_i64(&self, values: Option<&[i64]>) -> Option<Vec<u8>>;
    fn encode_u64(&self, values: Option<&[u64]>) -> Option<Vec<u8>>;
    fn encode_f32(&self, values: Option<&[f32]>) -> Option<Vec<u8>>;
    fn encode_f64(&self, values: Option<&[f64]>) -> Option<Vec<u8>>;

    fn encode_string(&self, value: Option<&str>, encoding: TextEncoding) -> Option<Vec<u8>>;
}
