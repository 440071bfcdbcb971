//! Reference (plain) fixed-width numeric representation
//!
//! Every byte-order strategy starts from the same canonical byte layout of a
//! value and rearranges it. The reference layout is little-endian, so with
//! word reordering applied on top:
//! - `multi_word_reverse = true` produces big-endian ABCD on the wire
//! - `multi_word_reverse = false` produces word-swapped CDAB

/// Fixed-width numeric value with a reference byte representation
pub trait RegisterValue: Copy + Send + Sync + 'static {
    /// Width in bytes (2, 4 or 8)
    const WIDTH: usize;

    /// Short type name used in logs and CLI output
    const TYPE_NAME: &'static str;

    /// Stack scratch holding exactly `WIDTH` bytes
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Copy;

    fn to_plain_bytes(self) -> Self::Bytes;

    fn from_plain_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_register_value {
    ($($ty:ty => $width:literal),* $(,)?) => {
        $(
            impl RegisterValue for $ty {
                const WIDTH: usize = $width;
                const TYPE_NAME: &'static str = stringify!($ty);
                type Bytes = [u8; $width];

                #[inline]
                fn to_plain_bytes(self) -> Self::Bytes {
                    self.to_le_bytes()
                }

                #[inline]
                fn from_plain_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_register_value! {
    i16 => 2,
    u16 => 2,
    i32 => 4,
    u32 => 4,
    i64 => 8,
    u64 => 8,
    f32 => 4,
    f64 => 8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(<i16 as RegisterValue>::WIDTH, 2);
        assert_eq!(<u32 as RegisterValue>::WIDTH, 4);
        assert_eq!(<f32 as RegisterValue>::WIDTH, 4);
        assert_eq!(<f64 as RegisterValue>::WIDTH, 8);
        assert_eq!(<u64 as RegisterValue>::TYPE_NAME, "u64");
    }

    #[test]
    fn test_plain_bytes_are_little_endian() {
        assert_eq!(0x1234u16.to_plain_bytes(), [0x34, 0x12]);
        assert_eq!(0x12345678u32.to_plain_bytes(), [0x78, 0x56, 0x34, 0x12]);
        assert_eq!(u32::from_plain_bytes([0x12, 0x34, 0x56, 0x78]), 0x78563412);
    }

    #[test]
    fn test_float_bits_preserved() {
        // 25.0 in IEEE 754: 0x41C80000
        assert_eq!(25.0f32.to_plain_bytes(), [0x00, 0x00, 0xC8, 0x41]);
        let nan = f64::from_bits(0x7FF8_0000_0000_0001);
        assert_eq!(f64::from_plain_bytes(nan.to_plain_bytes()).to_bits(), nan.to_bits());
    }
}
