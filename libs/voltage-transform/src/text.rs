//! Text encodings for string registers
//!
//! Devices store strings in whatever code page their firmware uses: plain
//! ASCII, UTF-16 in either byte order, or legacy code pages such as GBK.
//! Conversion is always lossy rather than failing, matching how a driver
//! displays whatever a register holds.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

/// Replacement byte/char for values outside the ASCII range
const ASCII_REPLACEMENT: u8 = b'?';

/// Caller-supplied text encoding for string decode/encode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// 7-bit ASCII, non-ASCII replaced by `?`
    #[default]
    Ascii,
    Utf8,
    /// UTF-16 code units, low byte first
    Utf16Le,
    /// UTF-16 code units, high byte first
    Utf16Be,
    /// Any other WHATWG encoding (GBK, Shift_JIS, windows-1252, ...)
    Legacy(&'static Encoding),
}

impl TextEncoding {
    /// Resolve an encoding label ("ascii", "utf-8", "utf-16le", "gbk", ...)
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("ascii") || label.eq_ignore_ascii_case("us-ascii") {
            return Some(Self::Ascii);
        }
        Encoding::for_label(label.as_bytes()).map(Self::from)
    }

    /// Canonical name of the encoding
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ascii => "us-ascii",
            Self::Utf8 => UTF_8.name(),
            Self::Utf16Le => UTF_16LE.name(),
            Self::Utf16Be => UTF_16BE.name(),
            Self::Legacy(encoding) => encoding.name(),
        }
    }

    /// Encode text into a freshly allocated byte buffer
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Self::Ascii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { ASCII_REPLACEMENT })
                .collect(),
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Self::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            Self::Legacy(encoding) => {
                let (bytes, _, _) = encoding.encode(text);
                bytes.into_owned()
            },
        }
    }

    /// Decode bytes into text, replacing malformed sequences
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            Self::Ascii => bytes
                .iter()
                .map(|&b| {
                    if b.is_ascii() {
                        b as char
                    } else {
                        ASCII_REPLACEMENT as char
                    }
                })
                .collect(),
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Utf16Le => decode_with(UTF_16LE, bytes),
            Self::Utf16Be => decode_with(UTF_16BE, bytes),
            Self::Legacy(encoding) => decode_with(*encoding, bytes),
        }
    }
}

fn decode_with(encoding: &'static Encoding, bytes: &[u8]) -> String {
    let (text, _) = encoding.decode_without_bom_handling(bytes);
    text.into_owned()
}

impl From<&'static Encoding> for TextEncoding {
    /// UTF-8 and UTF-16 map to their dedicated variants; encoding_rs only
    /// decodes UTF-16 and would encode it as UTF-8.
    fn from(encoding: &'static Encoding) -> Self {
        if encoding == UTF_8 {
            Self::Utf8
        } else if encoding == UTF_16LE {
            Self::Utf16Le
        } else if encoding == UTF_16BE {
            Self::Utf16Be
        } else {
            Self::Legacy(encoding)
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
