//! brdoc - strict, deterministic validation and formatting for Brazilian
//! registry documents
//!
//! Four subsystems:
//! - `checksum`: pure check-digit arithmetic (Luhn, weighted mod-11)
//! - `validation`: CPF/CNPJ, CEP, phone, and address-number validators
//! - `format`: canonical punctuated rendering of validated documents
//! - `record`: schema-checked immutable key/value records
//!
//! Every function is synchronous, side-effect-free, and O(input length).

pub mod checksum;
pub mod format;
pub mod record;
pub mod validation;
