//! Voltage Transform Library
//!
//! Byte-order strategies for devices whose register payloads are word-swapped
//! or middle-endian.
//!
//! # Architecture
//!
//! This library provides:
//! - **Codec Contract**: [`ByteCodec`], shared by every byte-order strategy
//! - **Word Reorder**: [`WordReverseTransform`], intra-word byte swap plus
//!   optional word-order reversal of 4-/8-byte values
//! - **Reference Layout**: [`PlainTransform`], the little-endian baseline
//! - **Bytes Utilities**: word swap primitive, bit packing, even-length padding
//! - **Configuration**: [`TransformConfig`], loadable from file and environment
//!
//! # Example
//!
//! ```rust
//! use voltage_transform::{ByteCodec, TransformConfig, WordReverseTransform};
//!
//! // ABCD device: words reversed back into big-endian order
//! let codec = WordReverseTransform::new(TransformConfig::new(true, false));
//!
//! let payload = codec.encode_f32(Some(&[25.0f32][..])).unwrap();
//! assert_eq!(payload, vec![0x41, 0xC8, 0x00, 0x00]);
//! assert_eq!(codec.decode_f32(&payload, 0).unwrap(), 25.0);
//! ```

pub mod bytes;
pub mod codec;
pub mod config;
pub mod error;
pub mod plain;
pub mod text;
pub mod transform;

// Re-export core types
pub use bytes::{ByteOrder, RegisterValue};
pub use codec::ByteCodec;
pub use config::TransformConfig;
pub use error::{Result, TransformError};
pub use plain::PlainTransform;
pub use text::TextEncoding;
pub use transform::WordReverseTransform;
