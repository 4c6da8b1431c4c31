//! Schema descriptor types for immutable records
//!
//! A schema maps key names to the closed set of primitive kinds its value
//! may take. There is no coercion between kinds: a JSON integer does not
//! satisfy a float-only descriptor, and vice versa.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Primitive kind tags for record values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// UTF-8 string
    String,
    /// 64-bit integer (signed or unsigned)
    Int,
    /// Boolean
    Bool,
    /// 64-bit floating point
    Float,
    /// JSON array
    Array,
    /// JSON object
    Object,
}

impl ValueKind {
    /// Returns the kind name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::Bool => "bool",
            ValueKind::Float => "float",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }

    /// Probes the kind of a JSON value. `Null` has no kind; its handling
    /// depends on whether the key is declared optional.
    pub fn of(value: &Value) -> Option<ValueKind> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(ValueKind::Bool),
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    Some(ValueKind::Int)
                } else {
                    Some(ValueKind::Float)
                }
            }
            Value::String(_) => Some(ValueKind::String),
            Value::Array(_) => Some(ValueKind::Array),
            Value::Object(_) => Some(ValueKind::Object),
        }
    }
}

/// Returns the kind name of a JSON value for error messages, including
/// `"null"`.
pub fn json_type_name(value: &Value) -> &'static str {
    match ValueKind::of(value) {
        Some(kind) => kind.type_name(),
        None => "null",
    }
}

/// Non-empty set of kinds a key's value may take.
///
/// Kinds are kept in insertion order so error messages list them the way the
/// schema declared them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTypes(Vec<ValueKind>);

impl FieldTypes {
    /// Accepts a single kind.
    pub fn one(kind: ValueKind) -> Self {
        Self(vec![kind])
    }

    /// Accepts any of the given kinds. Duplicates are dropped.
    pub fn any_of(kinds: impl IntoIterator<Item = ValueKind>) -> Self {
        let mut seen = Vec::new();
        for kind in kinds {
            if !seen.contains(&kind) {
                seen.push(kind);
            }
        }
        Self(seen)
    }

    /// Membership test for a probed kind.
    pub fn accepts(&self, kind: ValueKind) -> bool {
        self.0.contains(&kind)
    }

    /// Kind names in declaration order, for error messages.
    pub fn type_names(&self) -> Vec<&'static str> {
        self.0.iter().map(ValueKind::type_name).collect()
    }
}

/// Schema for a [`Record`](crate::record::Record): the per-key accepted
/// kinds plus the set of keys allowed to be absent or null.
///
/// An empty `fields` map means "no schema": construction accepts any data
/// verbatim, while `optional` still participates in reads and dumps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSchema {
    fields: HashMap<String, FieldTypes>,
    optional: BTreeSet<String>,
}

impl RecordSchema {
    /// Creates an empty schema that accepts anything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a key and the kinds its value may take.
    pub fn field(mut self, key: impl Into<String>, types: FieldTypes) -> Self {
        self.fields.insert(key.into(), types);
        self
    }

    /// Declares a key that may be absent, or present with a null value.
    pub fn optional(mut self, key: impl Into<String>) -> Self {
        self.optional.insert(key.into());
        self
    }

    /// True when no key was declared: data is accepted verbatim.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Accepted kinds for a declared key.
    pub fn types_of(&self, key: &str) -> Option<&FieldTypes> {
        self.fields.get(key)
    }

    /// Whether a key was declared at all.
    pub fn declares(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Whether a key is allowed to be absent or null.
    pub fn is_optional(&self, key: &str) -> bool {
        self.optional.contains(key)
    }

    /// The declared-optional keys, in sorted order.
    pub fn optional_keys(&self) -> impl Iterator<Item = &str> {
        self.optional.iter().map(String::as_str)
    }
}
