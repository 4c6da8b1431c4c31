//! Immutable record subsystem
//!
//! Schema-checked, read-only key/value containers.
//!
//! # Design Principles
//!
//! - Atomic construction: a record either fully exists or not at all
//! - Immutable after construction: every mutation attempt is an error
//! - Exact kind membership: no coercion between int and float
//! - Violations are typed, matchable error values

mod errors;
mod record;
mod types;

pub use errors::{RecordError, RecordResult};
pub use record::Record;
pub use types::{json_type_name, FieldTypes, RecordSchema, ValueKind};
