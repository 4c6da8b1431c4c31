//! Canonical display formatting for validated documents
//!
//! `cpf` and `cnpj` are pure positional slicers: they perform no validation
//! and expect an already-normalized digit string of the exact length.
//! `document` re-validates its input and falls back to returning it
//! unchanged when invalid.

use crate::validation::{self, Document, Mode};

/// Formats a normalized 11-digit CPF as `NNN.NNN.NNN-NN`.
///
/// The input must be exactly 11 ASCII digits, as returned by
/// [`validation::cpf`].
pub fn cpf(digits: &str) -> String {
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

/// Formats a normalized 14-digit CNPJ as `NN.NNN.NNN/NNNN-NN`.
///
/// The input must be exactly 14 ASCII digits, as returned by
/// [`validation::cnpj`].
pub fn cnpj(digits: &str) -> String {
    format!(
        "{}.{}.{}/{}-{}",
        &digits[0..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..14]
    )
}

/// Validates and formats a Brazilian document.
///
/// When `prepend` is set the result is prefixed with `"CPF: "` or
/// `"CNPJ: "`. Invalid input is returned unchanged.
pub fn document(input: &str, mode: Mode, prepend: bool) -> String {
    match validation::document(input, mode) {
        Document::Cpf(digits) => {
            let formatted = cpf(&digits);
            if prepend {
                format!("CPF: {}", formatted)
            } else {
                formatted
            }
        }
        Document::Cnpj(digits) => {
            let formatted = cnpj(&digits);
            if prepend {
                format!("CNPJ: {}", formatted)
            } else {
                formatted
            }
        }
        Document::Invalid => input.to_string(),
    }
}

/// Joins items with `", "` and a final natural-language connective:
/// `["a", "b", "c"]` with `"or"` becomes `"a, b or c"`.
pub fn natural_join<S: AsRef<str>>(items: &[S], last: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., tail] => {
            let init: Vec<&str> = init.iter().map(|s| s.as_ref()).collect();
            format!("{} {} {}", init.join(", "), last, tail.as_ref())
        }
    }
}
