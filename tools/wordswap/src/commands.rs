//! Command implementations for the wordswap CLI
//!
//! Kept free of terminal I/O so the parsing and conversion paths are testable.

use anyhow::{anyhow, bail, Context, Result};
use clap::ValueEnum;
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;
use voltage_transform::bytes::reorder;
use voltage_transform::{ByteCodec, ByteOrder, TextEncoding, TransformConfig};

/// Value type of a register payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueType {
    Bool,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    String,
}

/// Apply command line overrides on top of the loaded configuration
///
/// `--byte-order` replaces the word-order flag; explicit flags win over both.
pub fn resolve_config(
    base: TransformConfig,
    byte_order: Option<&str>,
    multi_word_reverse: Option<bool>,
    string_reverse: Option<bool>,
) -> Result<TransformConfig> {
    let mut config = base;

    if let Some(name) = byte_order {
        let order: ByteOrder = name.parse()?;
        config = TransformConfig::from_byte_order(order, config.string_reverse)?;
    }
    if let Some(enabled) = multi_word_reverse {
        config.multi_word_reverse = enabled;
    }
    if let Some(enabled) = string_reverse {
        config.string_reverse = enabled;
    }

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Parse a hex payload, tolerating `0x` prefixes and space/colon/dash separators
pub fn parse_payload(input: &str) -> Result<Vec<u8>> {
    let cleaned: String = input
        .split(|c: char| c.is_whitespace() || c == ':' || c == '-' || c == ',')
        .map(|part| part.trim_start_matches("0x").trim_start_matches("0X"))
        .collect();
    hex::decode(&cleaned).with_context(|| format!("invalid hex payload '{}'", input))
}

/// Format bytes as space-separated upper-case hex
pub fn format_payload(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn resolve_encoding(label: &str) -> Result<TextEncoding> {
    TextEncoding::from_label(label).ok_or_else(|| anyhow!("unknown text encoding '{}'", label))
}

fn render<T: Display>(values: Vec<T>) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Decode `count` values (bits for `bool`) starting at `offset`
///
/// For strings `length` defaults to the rest of the payload.
pub fn decode(
    codec: &dyn ByteCodec,
    payload: &[u8],
    value_type: ValueType,
    offset: usize,
    count: usize,
    length: Option<usize>,
    encoding: TextEncoding,
) -> Result<Vec<String>> {
    let values = match value_type {
        ValueType::Bool => render(codec.decode_bools(payload, offset, count)?),
        ValueType::I16 => render(codec.decode_i16_array(payload, offset, count)?),
        ValueType::U16 => render(codec.decode_u16_array(payload, offset, count)?),
        ValueType::I32 => render(codec.decode_i32_array(payload, offset, count)?),
        ValueType::U32 => render(codec.decode_u32_array(payload, offset, count)?),
        ValueType::I64 => render(codec.decode_i64_array(payload, offset, count)?),
        ValueType::U64 => render(codec.decode_u64_array(payload, offset, count)?),
        ValueType::F32 => render(codec.decode_f32_array(payload, offset, count)?),
        ValueType::F64 => render(codec.decode_f64_array(payload, offset, count)?),
        ValueType::String => {
            let length = length.unwrap_or_else(|| payload.len().saturating_sub(offset));
            vec![codec.decode_string(payload, offset, length, encoding)?]
        },
    };
    Ok(values)
}

fn parse_values<T>(values: &[String], value_type: ValueType) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    values
        .iter()
        .map(|v| {
            v.trim()
                .parse::<T>()
                .with_context(|| format!("invalid {:?} value '{}'", value_type, v))
        })
        .collect()
}

macro_rules! encode_numbers {
    ($codec:expr, $encode:ident, $ty:ty, $values:expr, $value_type:expr) => {{
        let parsed = parse_values::<$ty>($values, $value_type)?;
        $codec.$encode(Some(parsed.as_slice()))
    }};
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "on" => Ok(true),
        "0" | "false" | "off" => Ok(false),
        other => bail!("invalid Bool value '{}'", other),
    }
}

/// Encode values into a wire payload
///
/// String values are joined with single spaces.
pub fn encode(
    codec: &dyn ByteCodec,
    value_type: ValueType,
    values: &[String],
    encoding: TextEncoding,
) -> Result<Vec<u8>> {
    let payload = match value_type {
        ValueType::Bool => {
            let bits = values
                .iter()
                .map(|v| parse_bool(v))
                .collect::<Result<Vec<_>>>()?;
            codec.encode_bools(Some(bits.as_slice()))
        },
        ValueType::I16 => encode_numbers!(codec, encode_i16, i16, values, value_type),
        ValueType::U16 => encode_numbers!(codec, encode_u16, u16, values, value_type),
        ValueType::I32 => encode_numbers!(codec, encode_i32, i32, values, value_type),
        ValueType::U32 => encode_numbers!(codec, encode_u32, u32, values, value_type),
        ValueType::I64 => encode_numbers!(codec, encode_i64, i64, values, value_type),
        ValueType::U64 => encode_numbers!(codec, encode_u64, u64, values, value_type),
        ValueType::F32 => encode_numbers!(codec, encode_f32, f32, values, value_type),
        ValueType::F64 => encode_numbers!(codec, encode_f64, f64, values, value_type),
        ValueType::String => {
            let text = values.join(" ");
            codec.encode_string(Some(text.as_str()), encoding)
        },
    };

    payload.ok_or_else(|| anyhow!("encoder produced no payload for {:?}", value_type))
}

/// Run the raw word-swap primitive over a whole payload
pub fn swap(payload: &[u8], reverse: bool) -> Result<Vec<u8>> {
    Ok(reorder(payload, 0, payload.len(), reverse)?)
}
