use crate::core::alphabet::{self, BASE};

use super::rebase::Remainders;

pub use super::errors::InvalidDigitError;

/// Radix of the plaintext side.
const BYTE_BASE: u32 = 256;

pub fn encode(data: &[u8]) -> String {
    // Empty input is represented by a single zero digit
    if data.is_empty() {
        return digits_to_string(&[0]);
    }

    // Leading zero bytes carry no magnitude, so they are counted here and
    // restored as leading zero digits
    let leading_zeros = data.iter().take_while(|&&b| b == 0).count();

    let digits256: Vec<u32> = data.iter().map(|&b| u32::from(b)).collect();
    let mut digits: Vec<u32> = Remainders::new(digits256, BYTE_BASE, BASE).collect();

    digits.extend(std::iter::repeat_n(0, leading_zeros));
    digits.reverse();

    digits_to_string(&digits)
}

pub fn decode(encoded: &str) -> Result<Vec<u8>, InvalidDigitError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let digits = string_to_digits(encoded)?;
    let leading_zeros = digits.iter().take_while(|&&d| d == 0).count();

    let mut bytes: Vec<u8> = Remainders::new(digits, BASE, BYTE_BASE)
        .map(|r| r as u8)
        .collect();

    bytes.extend(std::iter::repeat_n(0u8, leading_zeros));
    bytes.reverse();

    Ok(bytes)
}

/// Maps MSB-first digit values to text.
pub(crate) fn digits_to_string(digits: &[u32]) -> String {
    digits
        .iter()
        .map(|&d| match alphabet::value_to_char(d) {
            Ok(c) => c,
            Err(e) => unreachable!("encoder produced an invalid digit: {}", e),
        })
        .collect()
}

/// Maps text to MSB-first digit values, rejecting the first character that
/// is not part of the alphabet.
pub(crate) fn string_to_digits(encoded: &str) -> Result<Vec<u32>, InvalidDigitError> {
    encoded
        .chars()
        .enumerate()
        .map(|(position, c)| {
            alphabet::char_to_value(c).map_err(|_| InvalidDigitError::new(c, position, encoded))
        })
        .collect()
}
