//! Reversible bytes-to-text encoding in radix 985,161.
//!
//! Each digit is one character from the contiguous block U+10000..=U+100848,
//! so every digit is a single Unicode scalar value above the Basic
//! Multilingual Plane. The input is treated as one big-endian integer and
//! re-based by long division; leading zero bytes are carried over as leading
//! zero digits so their count survives the round trip.
//!
//! ```
//! let text = base985161::encode(b"\x00\x00\x01");
//! assert_eq!(text.chars().count(), 3);
//! assert_eq!(base985161::decode(&text).unwrap(), b"\x00\x00\x01");
//! ```
//!
//! The empty byte string encodes to a single zero digit, which decodes to
//! one zero byte; decoding empty text yields empty bytes.

mod core;
mod encoders;
pub mod prelude;

pub use crate::core::alphabet::{BASE, CODEPOINT_END, CODEPOINT_START, char_to_value, value_to_char};
pub use crate::core::config::{DEFAULT_MAX_SIZE, Engine, Settings};
pub use encoders::algorithms::{DigitRangeError, InvalidDigitError, disable_color};
pub use encoders::rebase::{Remainders, rebase};

/// Encodes binary data as Base-985161 text.
///
/// # Example
///
/// ```
/// let encoded = base985161::encode(b"Hello");
/// assert_eq!(base985161::decode(&encoded).unwrap(), b"Hello");
/// ```
pub fn encode(data: &[u8]) -> String {
    encoders::math::encode(data)
}

/// Decodes Base-985161 text back to binary data.
///
/// # Errors
///
/// Returns [`InvalidDigitError`] for the first character outside
/// U+10000..=U+100848. Nothing is decoded in that case.
pub fn decode(encoded: &str) -> Result<Vec<u8>, InvalidDigitError> {
    encoders::math::decode(encoded)
}

/// Encodes with an explicitly chosen engine.
pub fn encode_with(data: &[u8], engine: Engine) -> String {
    match engine {
        Engine::LongDivision => encoders::math::encode(data),
        Engine::BigInt => encoders::bigint::encode(data),
    }
}

/// Decodes with an explicitly chosen engine.
pub fn decode_with(encoded: &str, engine: Engine) -> Result<Vec<u8>, InvalidDigitError> {
    match engine {
        Engine::LongDivision => encoders::math::decode(encoded),
        Engine::BigInt => encoders::bigint::decode(encoded),
    }
}
