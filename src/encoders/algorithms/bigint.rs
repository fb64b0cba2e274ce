use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::core::alphabet::BASE;

use super::math::{digits_to_string, string_to_digits};

pub use super::errors::InvalidDigitError;

/// Same output as [`super::math::encode`], computed on `BigUint` limbs.
pub fn encode(data: &[u8]) -> String {
    if data.is_empty() {
        return digits_to_string(&[0]);
    }

    // Count leading zeros for efficient handling
    let leading_zeros = data.iter().take_while(|&&b| b == 0).count();

    // If all zeros, return early
    if leading_zeros == data.len() {
        return digits_to_string(&vec![0; leading_zeros]);
    }

    let mut num = BigUint::from_bytes_be(&data[leading_zeros..]);

    // Pre-allocate result vector with estimated capacity
    let max_digits = ((data.len() - leading_zeros) * 8) / (BASE as f64).log2() as usize + 1;
    let mut digits = Vec::with_capacity(max_digits + leading_zeros);

    let base_big = BigUint::from(BASE);

    while !num.is_zero() {
        let (quotient, remainder) = num.div_rem(&base_big);
        digits.push(remainder_digit(&remainder));
        num = quotient;
    }

    digits.resize(digits.len() + leading_zeros, 0);
    digits.reverse();

    digits_to_string(&digits)
}

/// Narrows a remainder of a division by `BASE` to a digit value.
fn remainder_digit(remainder: &BigUint) -> u32 {
    match remainder.to_u32() {
        Some(digit) if digit < BASE => digit,
        _ => unreachable!("division by {} left remainder {}", BASE, remainder),
    }
}

/// Same output as [`super::math::decode`], computed on `BigUint` limbs.
pub fn decode(encoded: &str) -> Result<Vec<u8>, InvalidDigitError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let digits = string_to_digits(encoded)?;

    let mut num = BigUint::zero();
    let base_big = BigUint::from(BASE);
    let mut leading_zeros = 0;

    for digit in digits {
        if num.is_zero() && digit == 0 {
            leading_zeros += 1;
        } else {
            num *= &base_big;
            num += digit;
        }
    }

    // Handle all-zero case
    if num.is_zero() {
        return Ok(vec![0u8; leading_zeros]);
    }

    let bytes = num.to_bytes_be();

    // Construct result with pre-allocated capacity
    let mut result = Vec::with_capacity(leading_zeros + bytes.len());
    result.resize(leading_zeros, 0u8);
    result.extend_from_slice(&bytes);

    Ok(result)
}
