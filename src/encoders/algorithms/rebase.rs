//! Digit rebasing by schoolbook long division.
//!
//! A big integer is held as a most-significant-first slice of digits in some
//! radix. [`rebase`] divides it once by the target radix; [`Remainders`]
//! repeats that division until nothing is left, yielding the target-radix
//! digits least-significant first.

use std::iter::FusedIterator;

/// Divides the number given by `digits` (radix `from_base`, MSB-first) by
/// `to_base`.
///
/// Returns the quotient as MSB-first `from_base` digits with no leading zero
/// digits, together with the remainder. A zero quotient is the empty vector,
/// which is what terminates [`Remainders`].
///
/// Both radixes must be at least 2 and every digit must be below
/// `from_base`. The running accumulator stays below `from_base * to_base`,
/// which fits in a `u64` for any pair of `u32` radixes.
pub fn rebase(digits: &[u32], from_base: u32, to_base: u32) -> (Vec<u32>, u32) {
    debug_assert!(from_base >= 2 && to_base >= 2);

    let from = u64::from(from_base);
    let to = u64::from(to_base);

    let mut quotient = Vec::with_capacity(digits.len());
    let mut acc: u64 = 0;

    for &digit in digits {
        debug_assert!(digit < from_base);
        acc = acc * from + u64::from(digit);
        let q_digit = (acc / to) as u32;
        acc %= to;
        // Skip leading zeros as they are produced
        if !quotient.is_empty() || q_digit != 0 {
            quotient.push(q_digit);
        }
    }

    (quotient, acc as u32)
}

/// Iterator over the `to_base` digits of a number, least-significant first.
///
/// Each step performs one [`rebase`] and yields its remainder; iteration ends
/// once the quotient is empty. A number with no nonzero digits (including
/// an empty slice) yields nothing.
#[derive(Debug, Clone)]
pub struct Remainders {
    digits: Vec<u32>,
    from_base: u32,
    to_base: u32,
}

impl Remainders {
    pub fn new(digits: Vec<u32>, from_base: u32, to_base: u32) -> Self {
        // Normalize up front so an all-zero input terminates immediately
        let first_nonzero = digits
            .iter()
            .position(|&d| d != 0)
            .unwrap_or(digits.len());
        let mut digits = digits;
        digits.drain(..first_nonzero);

        Self {
            digits,
            from_base,
            to_base,
        }
    }
}

impl Iterator for Remainders {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.digits.is_empty() {
            return None;
        }
        let (quotient, remainder) = rebase(&self.digits, self.from_base, self.to_base);
        self.digits = quotient;
        Some(remainder)
    }
}

impl FusedIterator for Remainders {}
