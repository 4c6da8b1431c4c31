//! Check-digit arithmetic for registry documents
//!
//! Two families of checksums:
//! - Luhn (modulus 10): doubles alternating digits from the least-significant
//!   end, used by payment card numbers and other numeric identifiers.
//! - Weighted modulus 11: multiplies reversed digits by a cyclic ascending
//!   weight, used by CNPJ check digits. The pre-modulus sum is exposed so a
//!   second check digit can be chained onto the first.
//!
//! All functions are deterministic: the same input always produces the same
//! output. Non-digit characters in the input are ignored.

/// Computes the Luhn (modulus 10) check digit for a numeric string.
///
/// Walking the digits from the least-significant end, every digit at an even
/// 0-based position is doubled and the decimal digits of each result are
/// summed. The check digit is `(sum * 9) % 10`.
pub fn luhn(number: &str) -> u32 {
    let sum: u32 = number
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 0 {
                let doubled = d * 2;
                doubled / 10 + doubled % 10
            } else {
                d
            }
        })
        .sum();
    sum * 9 % 10
}

/// Computes the weighted sum used by the modulus 11 checksum, without the
/// final `% 11`.
///
/// Digits are taken from the least-significant end and multiplied by a
/// cyclic weight that starts at 2, increments by 1 after each digit, and
/// resets to 2 whenever it would exceed `base`.
pub fn weighted_sum(number: &str, base: u32) -> u32 {
    let mut sum = 0;
    let mut factor = 2;
    for d in number.chars().rev().filter_map(|c| c.to_digit(10)) {
        sum += d * factor;
        factor += 1;
        if factor > base {
            factor = 2;
        }
    }
    sum
}

/// Computes the weighted modulus 11 checksum.
///
/// The caller derives a check digit from the result; values 0, 1, and 10
/// typically need a post-validation rule (CNPJ clamps them to 0).
pub fn weighted_mod11(number: &str, base: u32) -> u32 {
    weighted_sum(number, base) % 11
}
