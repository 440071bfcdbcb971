//! Binary data processing utilities
//!
//! Building blocks shared by every byte-order strategy:
//! word swapping and word-order reversal, the reference (plain) numeric
//! representation, bit packing and even-length padding.
//!
//! # Design Principles
//!
//! - **Protocol-agnostic**: No Modbus/IEC104-specific logic
//! - **Non-mutating**: Caller buffers are only read, outputs are freshly allocated
//! - **Stack scratch**: Fixed-width values are reordered in `[u8; N]` arrays

pub mod bit_ops;
pub mod byte_order;
pub mod reference;
pub mod word_swap;

pub use bit_ops::*;
pub use byte_order::ByteOrder;
pub use reference::RegisterValue;
pub use word_swap::*;
