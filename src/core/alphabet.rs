use crate::encoders::algorithms::errors::{DigitRangeError, InvalidDigitError};

/// Number of distinct digits, and therefore the radix of the encoded text.
pub const BASE: u32 = 985_161;

/// Code point of digit value 0.
///
/// Sits at the start of the Supplementary Multilingual Plane so the whole
/// alphabet is clear of the surrogate block (U+D800..U+DFFF).
pub const CODEPOINT_START: u32 = 0x10000;

/// Code point of the highest digit value (`BASE - 1`), inclusive.
pub const CODEPOINT_END: u32 = CODEPOINT_START + BASE - 1;

/// Maps a digit value in `[0, BASE)` to its character.
pub fn value_to_char(value: u32) -> Result<char, DigitRangeError> {
    if value >= BASE {
        return Err(DigitRangeError::new(value));
    }
    // Every code point in the range is a scalar value, so this only fails
    // if the constants above are wrong.
    char::from_u32(CODEPOINT_START + value).ok_or(DigitRangeError::new(value))
}

/// Maps a character back to its digit value.
///
/// A character outside the alphabet is reported as an [`InvalidDigitError`]
/// at position 0 of a one-character input; the decoder replaces that
/// context with the character's place in the full text.
pub fn char_to_value(c: char) -> Result<u32, InvalidDigitError> {
    let codepoint = c as u32;
    if (CODEPOINT_START..=CODEPOINT_END).contains(&codepoint) {
        Ok(codepoint - CODEPOINT_START)
    } else {
        Err(InvalidDigitError::new(c, 0, c.encode_utf8(&mut [0; 4])))
    }
}

/// Human-readable description of the accepted range, used in error hints.
pub fn valid_range() -> String {
    format!("U+{:04X} to U+{:04X}", CODEPOINT_START, CODEPOINT_END)
}
