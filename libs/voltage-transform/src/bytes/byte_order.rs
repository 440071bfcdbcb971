//! Wire layout names
//!
//! Device manuals describe multi-register values with ABCD notation, where
//! `A` is the most significant byte. A word-reorder transform can only produce
//! ABCD and CDAB: every word is byte-swapped from the little-endian reference,
//! so bytes inside a word always end up most-significant first. DCBA and BADC
//! are still parsed so a misconfigured channel gets a clear error.

use std::fmt;
use std::str::FromStr;

use crate::error::TransformError;

/// Layout of a 32-bit value `0x12345678` on the wire
///
/// | variant | bytes |
/// |---------|-------|
/// | `Abcd` | `12 34 56 78` |
/// | `Cdab` | `56 78 12 34` |
/// | `Dcba` | `78 56 34 12` |
/// | `Badc` | `34 12 78 56` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    #[default]
    Abcd,
    Cdab,
    Dcba,
    Badc,
}

impl ByteOrder {
    pub fn notation(&self) -> &'static str {
        match self {
            Self::Abcd => "ABCD",
            Self::Cdab => "CDAB",
            Self::Dcba => "DCBA",
            Self::Badc => "BADC",
        }
    }

    /// Words appear in reverse significance order (CDAB, BADC)
    pub fn words_reversed(&self) -> bool {
        matches!(self, Self::Cdab | Self::Badc)
    }

    /// Most significant byte first inside each word (ABCD, CDAB)
    pub fn word_is_big_endian(&self) -> bool {
        matches!(self, Self::Abcd | Self::Cdab)
    }
}

impl FromStr for ByteOrder {
    type Err = TransformError;

    /// Accepts 4- and 8-letter notation plus `BE`/`LE`, ignoring case and dashes
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "");
        match normalized.as_str() {
            "ABCD" | "ABCDEFGH" | "BE" | "BIG_ENDIAN" => Ok(Self::Abcd),
            "CDAB" | "GHEFCDAB" => Ok(Self::Cdab),
            "DCBA" | "HGFEDCBA" | "LE" | "LITTLE_ENDIAN" => Ok(Self::Dcba),
            "BADC" | "BADCFEHG" => Ok(Self::Badc),
            _ => Err(TransformError::config(format!("unknown byte order '{}'", s))),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}
