//! Word swap and word-order reversal
//!
//! The single primitive behind every word-reorder decode/encode path.
//!
//! Using ABCD notation on the reference bytes of a 32-bit value:
//! - swap only: `[A, B, C, D]` → `[B, A, D, C]`
//! - swap + reverse: `[A, B, C, D]` → `[D, C, B, A]`
//!
//! and for a 64-bit value `[A..H]`:
//! - swap only: `[B, A, D, C, F, E, H, G]`
//! - swap + reverse: `[H, G, F, E, D, C, B, A]`

use crate::error::{Result, TransformError};

/// Bounds-checked view of `length` bytes starting at `offset`
pub fn slice_at(buffer: &[u8], offset: usize, length: usize) -> Result<&[u8]> {
    let end = offset
        .checked_add(length)
        .filter(|&end| end <= buffer.len())
        .ok_or_else(|| TransformError::out_of_range(offset, length, buffer.len()))?;
    Ok(&buffer[offset..end])
}

/// Exchange the two bytes of every 16-bit word
///
/// A trailing odd byte is left untouched; checked callers reject odd
/// lengths before getting here.
#[inline]
pub fn swap_word_bytes(bytes: &mut [u8]) {
    for word in bytes.chunks_exact_mut(2) {
        word.swap(0, 1);
    }
}

/// Mirror the order of the 16-bit words of a 4- or 8-byte value
///
/// Any other length has at most one word group to reorder and is left as is.
#[inline]
pub fn reverse_word_order(bytes: &mut [u8]) {
    match bytes.len() {
        4 => {
            bytes.swap(0, 2);
            bytes.swap(1, 3);
        },
        8 => {
            bytes.swap(0, 6);
            bytes.swap(1, 7);
            bytes.swap(2, 4);
            bytes.swap(3, 5);
        },
        _ => {},
    }
}

/// Word-swap `scratch` in place, then mirror its word order if `reverse`
pub fn reorder_in_place(scratch: &mut [u8], reverse: bool) -> Result<()> {
    if scratch.len() % 2 != 0 {
        return Err(TransformError::invalid_argument(format!(
            "word swap requires an even byte count, got {}",
            scratch.len()
        )));
    }

    swap_word_bytes(scratch);
    if reverse {
        reverse_word_order(scratch);
    }
    Ok(())
}

/// Copy `length` bytes at `offset` into fresh scratch and reorder them
///
/// The input buffer is never aliased or modified.
pub fn reorder(buffer: &[u8], offset: usize, length: usize, reverse: bool) -> Result<Vec<u8>> {
    if length % 2 != 0 {
        return Err(TransformError::invalid_argument(format!(
            "word swap requires an even byte count, got {}",
            length
        )));
    }

    let mut scratch = slice_at(buffer, offset, length)?.to_vec();
    reorder_in_place(&mut scratch, reverse)?;
    Ok(scratch)
}
