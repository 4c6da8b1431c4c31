//! Validation subsystem
//!
//! Validators normalize their input and report failure as a plain return
//! value (`None` / `Document::Invalid`), never as an error type. Callers
//! branch on the result.
//!
//! # Design Principles
//!
//! - Strip first: punctuation never affects a digit-based validator
//! - Canonical output: a successful validation returns the normalized form
//! - Idempotent: validating a returned value yields it unchanged
//! - Deterministic and side-effect-free

mod date;
mod document;
mod patterns;

pub use date::{date, date_time};
pub use document::{cnpj, cpf, document, Document, Mode, CNPJ_LEN, CPF_LEN};
pub use patterns::{address_number, cep, phone};
