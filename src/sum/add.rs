//! Arbitrary precision binary addition on digit strings

use super::numeral::Numeral;
use crate::error::{Error, Result};

/// Adds two numerals, result is always in minimal form.
///
/// Digits are produced from the least significant one, so they are collected in reverse, trimmed
/// from zeros on the most significant end (there is no final carry, or inputs had leading
/// zeros), and flipped at the end.
pub fn add(a: &Numeral, b: &Numeral) -> Result<Numeral> {
    let (a, b) = (a.digits(), b.digits());
    let mut sum = Vec::new();
    sum.try_reserve_exact(std::cmp::max(a.len(), b.len()) + 1)
        .map_err(|_| Error::Alloc {
            what: "addition result",
        })?;

    let bit = |digits: &[u8], idx: usize| -> u8 {
        digits
            .len()
            .checked_sub(idx + 1)
            .map_or(0, |pos| digits[pos] - b'0')
    };

    let mut carry = 0;
    let mut idx = 0;
    while idx < a.len() || idx < b.len() || carry != 0 {
        let s = bit(a, idx) + bit(b, idx) + carry;
        sum.push(b'0' + s % 2);
        carry = s / 2;
        idx += 1;
    }

    while sum.len() > 1 && sum.last() == Some(&b'0') {
        sum.pop();
    }
    sum.reverse();

    let sum = Numeral::from_digits(sum);
    debug_assert!(sum.is_minimal());
    Ok(sum)
}
