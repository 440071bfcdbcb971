//! Bit packing and padding helpers
//!
//! Provides the collaborators the word-reorder codec delegates to:
//! - Boolean arrays packed LSB-first (same layout as Modbus FC15 coils)
//! - Even-length padding for string buffers

/// Extract single bit from u8 value
#[inline]
pub fn extract_bit_u8(value: u8, bit_index: u8) -> bool {
    debug_assert!(bit_index < 8, "Bit index out of range: {}", bit_index);
    (value & (1 << bit_index)) != 0
}

/// Set a single bit in a byte array
#[inline]
pub fn set_bit(bytes: &mut [u8], bit_position: usize) {
    let byte_index = bit_position / 8;
    let bit_index = (bit_position % 8) as u8;

    if byte_index < bytes.len() {
        bytes[byte_index] |= 1 << bit_index;
    }
}

/// Pack booleans into bytes, LSB-first within each byte
///
/// Output length is `ceil(values.len() / 8)`; unused high bits of the last
/// byte are zero.
pub fn pack_bools(values: &[bool]) -> Vec<u8> {
    let mut bytes = vec![0u8; values.len().div_ceil(8)];
    for (position, &value) in values.iter().enumerate() {
        if value {
            set_bit(&mut bytes, position);
        }
    }
    bytes
}

/// Unpack `count` booleans from bytes, LSB-first within each byte
///
/// Bits beyond the end of `bytes` read as `false`.
pub fn unpack_bools(bytes: &[u8], count: usize) -> Vec<bool> {
    (0..count)
        .map(|position| {
            bytes
                .get(position / 8)
                .is_some_and(|&byte| extract_bit_u8(byte, (position % 8) as u8))
        })
        .collect()
}

/// Append one zero byte when the length is odd
pub fn pad_to_even(mut bytes: Vec<u8>) -> Vec<u8> {
    if bytes.len() % 2 != 0 {
        bytes.push(0);
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bit_u8() {
        let value = 0b1010_1100u8;
        assert!(!extract_bit_u8(value, 0));
        assert!(extract_bit_u8(value, 2));
        assert!(extract_bit_u8(value, 7));
    }

    #[test]
    fn test_pack_bools_lsb_first() {
        assert_eq!(pack_bools(&[true, false, true]), vec![0b0000_0101]);
        assert_eq!(
            pack_bools(&[false, false, false, false, false, false, false, false, true]),
            vec![0x00, 0x01]
        );
        assert!(pack_bools(&[]).is_empty());
    }

    #[test]
    fn test_unpack_bools() {
        assert_eq!(
            unpack_bools(&[0b0000_0101], 4),
            vec![true, false, true, false]
        );
        // past the end
        assert_eq!(unpack_bools(&[0xFF], 10)[8..], [false, false]);
    }

    #[test]
    fn test_pack_unpack_consistency() {
        let values = [true, true, false, true, false, false, true, false, true, true];
        assert_eq!(unpack_bools(&pack_bools(&values), values.len()), values);
    }

    #[test]
    fn test_pad_to_even() {
        assert_eq!(pad_to_even(vec![1, 2, 3]), vec![1, 2, 3, 0]);
        assert_eq!(pad_to_even(vec![1, 2]), vec![1, 2]);
        assert!(pad_to_even(Vec::new()).is_empty());
    }
}
