//! CPF and CNPJ validation
//!
//! Validation semantics:
//! - Non-digit characters are stripped before any other rule
//! - STRICT mode requires the stripped digits to match the target length
//!   exactly (11 for CPF, 14 for CNPJ)
//! - LENIENT mode left-zero-pads short input; longer input is rejected
//! - Sequences of identical digits are rejected in both modes
//! - Both check digits must match their computed values
//!
//! Failures are plain `None` / `Document::Invalid` return values, never
//! error types: callers branch on the result.

use serde::{Deserialize, Serialize};

use crate::checksum::weighted_mod11;

/// Digit count of a normalized CPF.
pub const CPF_LEN: usize = 11;

/// Digit count of a normalized CNPJ.
pub const CNPJ_LEN: usize = 14;

/// Length handling applied to the stripped digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Stripped digits must equal the target length exactly.
    Strict,
    /// Short input is left-zero-padded to the target length; input longer
    /// than the target is rejected.
    Lenient,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Lenient
    }
}

/// Outcome of [`document`]: which document kind the input validated as.
///
/// The payload is the normalized digit string: exactly 11 digits for `Cpf`,
/// 14 for `Cnpj`, always passing its checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "digits", rename_all = "lowercase")]
pub enum Document {
    /// Input matched neither document kind.
    Invalid,
    /// Valid CPF with its normalized 11-digit string.
    Cpf(String),
    /// Valid CNPJ with its normalized 14-digit string.
    Cnpj(String),
}

impl Document {
    /// Returns true unless the input was rejected.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Document::Invalid)
    }

    /// Returns the normalized digit string, if any.
    pub fn digits(&self) -> Option<&str> {
        match self {
            Document::Invalid => None,
            Document::Cpf(digits) | Document::Cnpj(digits) => Some(digits),
        }
    }
}

/// Validates a Brazilian CPF.
///
/// Returns the normalized 11-digit string, or `None` if the input is
/// rejected. Validation is idempotent: feeding a returned value back in
/// yields the same value.
pub fn cpf(input: &str, mode: Mode) -> Option<String> {
    let digits = normalize(input, CPF_LEN, mode)?;
    let d: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();

    // Two positional check digits at indexes 9 and 10.
    for t in 9..11 {
        let sum: u32 = (0..t).map(|c| d[c] * (t as u32 + 1 - c as u32)).sum();
        let expected = (10 * sum) % 11 % 10;
        if d[t] != expected {
            return None;
        }
    }

    Some(digits)
}

/// Validates a Brazilian CNPJ.
///
/// Returns the normalized 14-digit string, or `None` if the input is
/// rejected.
pub fn cnpj(input: &str, mode: Mode) -> Option<String> {
    let digits = normalize(input, CNPJ_LEN, mode)?;
    let d: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();

    let first = check_digit(&digits[..12]);
    let second = check_digit(&format!("{}{}", &digits[..12], first));

    if d[12] == first && d[13] == second {
        Some(digits)
    } else {
        None
    }
}

/// Validates a Brazilian document, trying CPF first, then CNPJ.
pub fn document(input: &str, mode: Mode) -> Document {
    if let Some(digits) = cpf(input, mode) {
        Document::Cpf(digits)
    } else if let Some(digits) = cnpj(input, mode) {
        Document::Cnpj(digits)
    } else {
        Document::Invalid
    }
}

/// Strips non-digits, applies the length rule for `mode`, and rejects
/// identical-digit sequences.
fn normalize(input: &str, len: usize, mode: Mode) -> Option<String> {
    let stripped: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

    let digits = match mode {
        Mode::Strict => {
            if stripped.len() != len {
                return None;
            }
            stripped
        }
        Mode::Lenient => {
            if stripped.len() > len {
                return None;
            }
            format!("{:0>width$}", stripped, width = len)
        }
    };

    let bytes = digits.as_bytes();
    if bytes.iter().all(|&b| b == bytes[0]) {
        return None;
    }

    Some(digits)
}

/// Derives a single CNPJ check digit from the preceding digits.
fn check_digit(digits: &str) -> u32 {
    let raw = 11 - weighted_mod11(digits, 9);
    if raw >= 10 {
        0
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_valid() {
        assert_eq!(cpf("52998224725", Mode::Strict), Some("52998224725".into()));
    }

    #[test]
    fn test_cpf_punctuated() {
        assert_eq!(cpf("529.982.247-25", Mode::Strict), Some("52998224725".into()));
    }

    #[test]
    fn test_cpf_identical_digits_rejected() {
        for d in 0..10u8 {
            let input: String = std::iter::repeat(char::from(b'0' + d)).take(11).collect();
            assert_eq!(cpf(&input, Mode::Strict), None);
            assert_eq!(cpf(&input, Mode::Lenient), None);
        }
    }

    #[test]
    fn test_cpf_bad_check_digit() {
        assert_eq!(cpf("52998224726", Mode::Strict), None);
    }

    #[test]
    fn test_cpf_lenient_pads() {
        assert_eq!(cpf("191", Mode::Lenient), Some("00000000191".into()));
    }

    #[test]
    fn test_cpf_strict_rejects_short_input() {
        assert_eq!(cpf("191", Mode::Strict), None);
    }

    #[test]
    fn test_cpf_too_long_rejected_in_both_modes() {
        assert_eq!(cpf("052998224725", Mode::Strict), None);
        assert_eq!(cpf("052998224725", Mode::Lenient), None);
    }

    #[test]
    fn test_cnpj_valid() {
        assert_eq!(cnpj("11222333000181", Mode::Strict), Some("11222333000181".into()));
    }

    #[test]
    fn test_cnpj_punctuated() {
        assert_eq!(cnpj("11.222.333/0001-81", Mode::Strict), Some("11222333000181".into()));
    }

    #[test]
    fn test_cnpj_bad_check_digit() {
        assert_eq!(cnpj("11222333000182", Mode::Strict), None);
    }

    #[test]
    fn test_cnpj_lenient_pads() {
        assert_eq!(cnpj("191", Mode::Lenient), Some("00000000000191".into()));
    }

    #[test]
    fn test_cnpj_identical_digits_rejected() {
        assert_eq!(cnpj("11111111111111", Mode::Strict), None);
        assert_eq!(cnpj("11111111111111", Mode::Lenient), None);
    }

    #[test]
    fn test_document_dispatch() {
        assert_eq!(
            document("52998224725", Mode::Strict),
            Document::Cpf("52998224725".into())
        );
        assert_eq!(
            document("11222333000181", Mode::Strict),
            Document::Cnpj("11222333000181".into())
        );
        assert_eq!(document("not a document", Mode::Strict), Document::Invalid);
    }

    #[test]
    fn test_document_prefers_cpf_on_ambiguous_short_input() {
        // Lenient padding makes "191" a valid CPF and a valid CNPJ; the CPF
        // branch wins because it is tried first.
        assert_eq!(document("191", Mode::Lenient), Document::Cpf("00000000191".into()));
    }

    #[test]
    fn test_document_accessors() {
        let doc = document("52998224725", Mode::Strict);
        assert!(doc.is_valid());
        assert_eq!(doc.digits(), Some("52998224725"));
        assert!(!Document::Invalid.is_valid());
        assert_eq!(Document::Invalid.digits(), None);
    }

    #[test]
    fn test_default_mode_is_lenient() {
        assert_eq!(Mode::default(), Mode::Lenient);
    }

    #[test]
    fn test_empty_input_rejected() {
        // Lenient padding turns "" into all zeros, caught by the
        // identical-digit rule.
        assert_eq!(cpf("", Mode::Lenient), None);
        assert_eq!(cnpj("", Mode::Lenient), None);
        assert_eq!(cpf("", Mode::Strict), None);
    }
}
