//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use base985161::prelude::*;
//!
//! let text = encode_with(b"Hello", Engine::BigInt);
//! assert_eq!(decode(&text).unwrap(), b"Hello");
//! ```

pub use crate::{
    // Alphabet
    BASE,
    CODEPOINT_END,
    CODEPOINT_START,

    // Config
    Engine,
    InvalidDigitError,
    Settings,

    // Core encoding/decoding
    decode,
    decode_with,
    encode,
    encode_with,
};
