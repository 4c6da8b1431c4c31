//! Pattern validators for address numbers, CEP, and phone numbers
//!
//! Each validator matches an anchored grammar and, on success, returns the
//! canonical form of the input. Canonical forms are fixed points: feeding a
//! returned value back into the same validator yields it unchanged.
//!
//! Patterns are compiled once per process behind `OnceLock`.

use std::sync::OnceLock;

use regex::Regex;

fn address_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^\d{1,5}([\s-]?[A-Z0-9]+)?$").expect("valid pattern"))
}

fn no_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^s\.?[\s/]?n\.?$").expect("valid pattern"))
}

fn cep_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{2})[\s.]?(\d{3})[\s-]?(\d{3})$").expect("valid pattern"))
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\+\d{2})?\s?(\(?0?\d{2}\)?)?\s?(9)?\s?(\d{4})[\s-]?(\d{4})$")
            .expect("valid pattern")
    })
}

/// Validates an address number.
///
/// Accepts 1-5 digits, optionally followed by a space or hyphen and an
/// alphanumeric suffix (`"123"`, `"123-A"`, `"123 b"`), returned upper-cased.
/// Also accepts the no-number marker in its spelled variants (`"s/n"`,
/// `"S.N."`, `"s n"`), returned as the literal `"s/n"`.
pub fn address_number(input: &str) -> Option<String> {
    if address_re().is_match(input) {
        Some(input.to_uppercase())
    } else if no_number_re().is_match(input) {
        Some("s/n".to_string())
    } else {
        None
    }
}

/// Validates a Brazilian CEP (postal code).
///
/// Accepts exactly 8 digits grouped 2+3+3 with optional separators
/// (`"01.310 100"`, `"01310100"`). Canonical form is `"NNNNN-NNN"`.
pub fn cep(input: &str) -> Option<String> {
    let caps = cep_re().captures(input)?;
    Some(format!("{}{}-{}", &caps[1], &caps[2], &caps[3]))
}

/// Validates a telephone or cell phone number.
///
/// Maximum accepted shape is `"+00 (000) 90000-0000"`: an optional `+NN`
/// country code, an optional area code of 2 digits (optionally parenthesized,
/// optionally with a leading trunk 0), an optional mobile marker 9, then 8
/// digits with an optional separator before the last 4.
///
/// The canonical form keeps the country code and area digits (parentheses
/// stripped) separated by spaces and hyphenates the last 4 digits, e.g.
/// `"+55 11 98765-4321"`.
pub fn phone(input: &str) -> Option<String> {
    let caps = phone_re().captures(input)?;

    let mut out = String::new();
    if let Some(country) = caps.get(1) {
        out.push_str(country.as_str());
        out.push(' ');
    }
    if let Some(area) = caps.get(2) {
        out.extend(area.as_str().chars().filter(|c| !matches!(c, '(' | ')')));
        out.push(' ');
    }
    out.push_str(caps.get(3).map_or("", |m| m.as_str()));
    out.push_str(&caps[4]);
    out.push('-');
    out.push_str(&caps[5]);
    Some(out)
}
