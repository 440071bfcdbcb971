//! Word-reorder byte transform
//!
//! Converts between the reference (little-endian) representation and wire
//! layouts where the bytes inside each 16-bit word are swapped and, for 4-/8-byte
//! values, the words themselves may be mirrored.
//!
//! | config | `0x12345678u32` on the wire |
//! |--------|-----------------------------|
//! | `multi_word_reverse = false` | `[0x56, 0x78, 0x12, 0x34]` (CDAB) |
//! | `multi_word_reverse = true` | `[0x12, 0x34, 0x56, 0x78]` (ABCD) |
//!
//! # Concurrency
//!
//! The configuration is captured at construction and never mutated, so a single
//! transform can be shared across threads. Reconfiguring builds a new value.

use tracing::{debug, trace};

use crate::bytes::{
    pad_to_even, reorder, reorder_in_place, reverse_word_order, slice_at, swap_word_bytes,
    RegisterValue,
};
use crate::codec::ByteCodec;
use crate::config::TransformConfig;
use crate::error::Result;
use crate::text::TextEncoding;

/// Word-reorder strategy for word-swapped and middle-endian devices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordReverseTransform {
    config: TransformConfig,
}

impl Default for WordReverseTransform {
    fn default() -> Self {
        Self::new(TransformConfig::default())
    }
}

impl WordReverseTransform {
    pub fn new(config: TransformConfig) -> Self {
        debug!(
            multi_word_reverse = config.multi_word_reverse,
            string_reverse = config.string_reverse,
            byte_order = %config.byte_order(),
            "Word reverse transform configured"
        );
        Self { config }
    }

    pub fn config(&self) -> TransformConfig {
        self.config
    }

    pub fn with_config(self, config: TransformConfig) -> Self {
        Self::new(config)
    }

    pub fn with_multi_word_reverse(self, enabled: bool) -> Self {
        Self::new(TransformConfig {
            multi_word_reverse: enabled,
            ..self.config
        })
    }

    pub fn with_string_reverse(self, enabled: bool) -> Self {
        Self::new(TransformConfig {
            string_reverse: enabled,
            ..self.config
        })
    }

    /// Word-order reversal only applies to values spanning more than one word
    #[inline]
    fn reverse_for(&self, width: usize) -> bool {
        self.config.multi_word_reverse && width > 2
    }

    /// Decode one fixed-width value at `offset`
    pub fn decode_value<T: RegisterValue>(&self, buffer: &[u8], offset: usize) -> Result<T> {
        let mut scratch = T::Bytes::default();
        scratch
            .as_mut()
            .copy_from_slice(slice_at(buffer, offset, T::WIDTH)?);
        reorder_in_place(scratch.as_mut(), self.reverse_for(T::WIDTH))?;
        Ok(T::from_plain_bytes(scratch))
    }

    /// Encode values into a `values.len() × WIDTH` buffer
    ///
    /// Each element is reordered in its own aligned slot. For 2-byte elements
    /// this is the same as one word swap across the whole buffer.
    pub fn encode_values<T: RegisterValue>(&self, values: &[T]) -> Vec<u8> {
        let reverse = self.reverse_for(T::WIDTH);
        let mut buffer = vec![0u8; values.len() * T::WIDTH];

        for (slot, value) in buffer.chunks_exact_mut(T::WIDTH).zip(values) {
            slot.copy_from_slice(value.to_plain_bytes().as_ref());
            swap_word_bytes(slot);
            if reverse {
                reverse_word_order(slot);
            }
        }

        trace!(
            "Encoded {} x {} ({} bytes, reverse={})",
            values.len(),
            T::TYPE_NAME,
            buffer.len(),
            reverse
        );
        buffer
    }
}

impl ByteCodec for WordReverseTransform {
    fn decode_i16(&self, buffer: &[u8], offset: usize) -> Result<i16> {
        self.decode_value(buffer, offset)
    }

    fn decode_u16(&self, buffer: &[u8], offset: usize) -> Result<u16> {
        self.decode_value(buffer, offset)
    }

    fn decode_i32(&self, buffer: &[u8], offset: usize) -> Result<i32> {
        self.decode_value(buffer, offset)
    }

    fn decode_u32(&self, buffer: &[u8], offset: usize) -> Result<u32> {
        self.decode_value(buffer, offset)
    }

    fn decode_i64(&self, buffer: &[u8], offset: usize) -> Result<i64> {
        self.decode_value(buffer, offset)
    }

    fn decode_u64(&self, buffer: &[u8], offset: usize) -> Result<u64> {
        self.decode_value(buffer, offset)
    }

    fn decode_f32(&self, buffer: &[u8], offset: usize) -> Result<f32> {
        self.decode_value(buffer, offset)
    }

    fn decode_f64(&self, buffer: &[u8], offset: usize) -> Result<f64> {
        self.decode_value(buffer, offset)
    }

    fn decode_string(
        &self,
        buffer: &[u8],
        offset: usize,
        length: usize,
        encoding: TextEncoding,
    ) -> Result<String> {
        trace!(
            "Decoding {} string bytes at offset {} (string_reverse={})",
            length,
            offset,
            self.config.string_reverse
        );

        if self.config.string_reverse {
            // strings are word-swapped, never word-reversed
            let swapped = reorder(buffer, offset, length, false)?;
            Ok(encoding.decode(&swapped))
        } else {
            Ok(encoding.decode(slice_at(buffer, offset, length)?))
        }
    }

    fn encode_i16(&self, values: Option<&[i16]>) -> Option<Vec<u8>> {
        values.map(|v| self.encode_values(v))
    }

    fn encode_u16(&self, values: Option<&[u16]>) -> Option<Vec<u8>> {
        values.map(|v| self.encode_values(v))
    }

    fn encode_i32(&self, values: Option<&[i32]>) -> Option<Vec<u8>> {
        values.map(|v| self.encode_values(v))
    }

    fn encode_u32(&self, values: Option<&[u32]>) -> Option<Vec<u8>> {
        values.map(|v| self.encode_values(v))
    }

    fn encode_i64(&self, values: Option<&[i64]>) -> Option<Vec<u8>> {
        values.map(|v| self.encode_values(v))
    }

    fn encode_u64(&self, values: Option<&[u64]>) -> Option<Vec<u8>> {
        values.map(|v| self.encode_values(v))
    }

    fn encode_f32(&self, values: Option<&[f32]>) -> Option<Vec<u8>> {
        values.map(|v| self.encode_values(v))
    }

    fn encode_f64(&self, values: Option<&[f64]>) -> Option<Vec<u8>> {
        values.map(|v| self.encode_values(v))
    }

    fn encode_string(&self, value: Option<&str>, encoding: TextEncoding) -> Option<Vec<u8>> {
        let mut buffer = pad_to_even(encoding.encode(value?));
        if self.config.string_reverse {
            swap_word_bytes(&mut buffer);
        }
        Some(buffer)
    }
}
