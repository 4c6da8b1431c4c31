//! Record error taxonomy
//!
//! Construction-time violations (`SchemaViolation`, `TypeViolation`) abort
//! before any record exists; access-time (`UnknownKey`) and mutation-time
//! (`ReadOnly`) violations are returned by the record itself. Each variant
//! is a distinct, matchable condition: callers may want to log schema drift
//! but reject bad user input, for example.

use thiserror::Error;

/// Result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Violations of the record's schema and read-only contracts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Keys supplied at construction that the schema does not declare.
    /// All offending keys are reported at once.
    #[error("undeclared keys: {}", keys.join(", "))]
    SchemaViolation {
        /// Every offending key, in the data map's iteration order
        keys: Vec<String>,
    },

    /// A declared key's value has a kind outside its accepted set.
    #[error("key '{key}' must be {expected}, got {actual}")]
    TypeViolation {
        /// The offending key
        key: String,
        /// Accepted kinds as a natural-language list, e.g. "string or int"
        expected: String,
        /// Kind actually found
        actual: String,
    },

    /// Read of a key that was never stored and is not declared optional.
    #[error("record does not have '{0}'")]
    UnknownKey(String),

    /// Any attempted mutation after construction.
    #[error("record is read-only")]
    ReadOnly,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_violation_lists_all_keys() {
        let err = RecordError::SchemaViolation {
            keys: vec!["a".into(), "b".into()],
        };
        assert_eq!(err.to_string(), "undeclared keys: a, b");
    }

    #[test]
    fn test_type_violation_message() {
        let err = RecordError::TypeViolation {
            key: "age".into(),
            expected: "string or int".into(),
            actual: "bool".into(),
        };
        assert_eq!(err.to_string(), "key 'age' must be string or int, got bool");
    }

    #[test]
    fn test_unknown_key_message() {
        let err = RecordError::UnknownKey("email".into());
        assert_eq!(err.to_string(), "record does not have 'email'");
    }

    #[test]
    fn test_variants_are_distinguishable() {
        let err: RecordError = RecordError::ReadOnly;
        assert!(matches!(err, RecordError::ReadOnly));
        assert!(!matches!(err, RecordError::UnknownKey(_)));
    }
}
