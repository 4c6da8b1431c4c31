//! Schema-checked immutable records
//!
//! A record is built once, atomically, from a data map validated against a
//! [`RecordSchema`]; no method can alter it afterwards. Construction either
//! yields a fully usable record or an error with no partial state.
//!
//! Once built, a record is plain immutable data: safe to share and read
//! across threads with no locking.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::format::natural_join;

use super::errors::{RecordError, RecordResult};
use super::types::{json_type_name, RecordSchema, ValueKind};

static NULL: Value = Value::Null;

/// Immutable key/value container validated against a schema at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    data: Map<String, Value>,
    #[serde(skip)]
    optional: Vec<String>,
}

impl Record {
    /// Builds a record from `data`, validating it against `schema`.
    ///
    /// With an empty schema the data is accepted verbatim. Otherwise every
    /// key must be declared (all undeclared keys are reported together as
    /// [`RecordError::SchemaViolation`]), and every supplied value must
    /// carry an accepted kind. A null value is accepted only for keys the
    /// schema declares optional.
    ///
    /// Keys declared in the schema but absent from `data` do not fail
    /// construction; reading one later yields [`RecordError::UnknownKey`]
    /// unless it is declared optional.
    pub fn new(data: Map<String, Value>, schema: &RecordSchema) -> RecordResult<Self> {
        if !schema.is_empty() {
            let undeclared: Vec<String> = data
                .keys()
                .filter(|key| !schema.declares(key))
                .cloned()
                .collect();
            if !undeclared.is_empty() {
                return Err(RecordError::SchemaViolation { keys: undeclared });
            }

            for (key, value) in &data {
                if value.is_null() && schema.is_optional(key) {
                    continue;
                }
                // Unwrap is safe: undeclared keys were rejected above.
                let types = schema.types_of(key).expect("key declared");
                let accepted = ValueKind::of(value).is_some_and(|kind| types.accepts(kind));
                if !accepted {
                    return Err(RecordError::TypeViolation {
                        key: key.clone(),
                        expected: natural_join(&types.type_names(), "or"),
                        actual: json_type_name(value).to_string(),
                    });
                }
            }
        }

        Ok(Self {
            data,
            optional: schema.optional_keys().map(String::from).collect(),
        })
    }

    /// Returns the stored value for `key`.
    ///
    /// A declared-optional key that was never supplied reads as null. Any
    /// other unstored key is an [`RecordError::UnknownKey`].
    pub fn get(&self, key: &str) -> RecordResult<&Value> {
        match self.data.get(key) {
            Some(value) => Ok(value),
            None if self.optional.iter().any(|k| k == key) => Ok(&NULL),
            None => Err(RecordError::UnknownKey(key.to_string())),
        }
    }

    /// Rejects any mutation: the record is read-only for its entire
    /// lifetime.
    pub fn set(&self, _key: &str, _value: Value) -> RecordResult<()> {
        Err(RecordError::ReadOnly)
    }

    /// Returns the full key/value mapping, with every declared-optional key
    /// that was not supplied filled in as null.
    pub fn dump(&self) -> Map<String, Value> {
        let mut out = self.data.clone();
        for key in &self.optional {
            out.entry(key.clone()).or_insert(Value::Null);
        }
        out
    }
}
