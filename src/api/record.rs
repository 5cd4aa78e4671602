//
//  gitlab-cli
//  api/record.rs
//

//! # Record: Attribute-Style Access over Parsed JSON
//!
//! The GitLab API returns open-ended JSON documents. Rather than declaring a
//! schema per endpoint, a [`Record`] wraps one JSON object as an explicit
//! key/value map with typed accessor helpers. Unknown or extra keys are
//! tolerated; reading an absent key yields a [`RecordError::Missing`], never
//! a panic.
//!
//! Wrapping is pure: converting the same JSON value twice produces records
//! with identical key sets and values.
//!
//! ## Example
//!
//! ```rust
//! use gitlab_cli::api::Record;
//!
//! let json = serde_json::json!({
//!     "id": 1,
//!     "email": "john@example.com",
//!     "identities": [{"provider": "github"}]
//! });
//!
//! let user = Record::try_from(json).unwrap();
//! assert_eq!(user.get_str("email").unwrap(), "john@example.com");
//! assert_eq!(user.get_i64("id").unwrap(), 1);
//! let identities = user.get_records("identities").unwrap();
//! assert_eq!(identities[0].get_str("provider").unwrap(), "github");
//! ```

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised by typed field access on a [`Record`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The requested key is not present in the record.
    #[error("no such field: {0}")]
    Missing(String),

    /// The key is present but its value has a different JSON type.
    #[error("field `{field}` is not a {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },
}

/// A single JSON object exposed through typed accessors.
///
/// Immutable after construction. Equality compares the underlying JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Wraps an already-parsed JSON object map.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Returns the raw value for `key`, or [`RecordError::Missing`].
    pub fn get(&self, key: &str) -> Result<&Value, RecordError> {
        self.fields
            .get(key)
            .ok_or_else(|| RecordError::Missing(key.to_string()))
    }

    /// Returns the value for `key` if present, without a typed error.
    pub fn try_get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Whether the record contains `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Iterates over the record's keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of top-level fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The field for `key` as a string slice.
    pub fn get_str(&self, key: &str) -> Result<&str, RecordError> {
        self.get(key)?.as_str().ok_or(RecordError::WrongType {
            field: key.to_string(),
            expected: "string",
        })
    }

    /// The field for `key` as a signed integer.
    pub fn get_i64(&self, key: &str) -> Result<i64, RecordError> {
        self.get(key)?.as_i64().ok_or(RecordError::WrongType {
            field: key.to_string(),
            expected: "integer",
        })
    }

    /// The field for `key` as an unsigned integer.
    pub fn get_u64(&self, key: &str) -> Result<u64, RecordError> {
        self.get(key)?.as_u64().ok_or(RecordError::WrongType {
            field: key.to_string(),
            expected: "unsigned integer",
        })
    }

    /// The field for `key` as a float.
    pub fn get_f64(&self, key: &str) -> Result<f64, RecordError> {
        self.get(key)?.as_f64().ok_or(RecordError::WrongType {
            field: key.to_string(),
            expected: "number",
        })
    }

    /// The field for `key` as a boolean.
    pub fn get_bool(&self, key: &str) -> Result<bool, RecordError> {
        self.get(key)?.as_bool().ok_or(RecordError::WrongType {
            field: key.to_string(),
            expected: "boolean",
        })
    }

    /// Whether the field for `key` is JSON `null`.
    pub fn is_null(&self, key: &str) -> Result<bool, RecordError> {
        Ok(self.get(key)?.is_null())
    }

    /// The field for `key` as a nested record.
    pub fn get_record(&self, key: &str) -> Result<Record, RecordError> {
        match self.get(key)? {
            Value::Object(map) => Ok(Record::new(map.clone())),
            _ => Err(RecordError::WrongType {
                field: key.to_string(),
                expected: "object",
            }),
        }
    }

    /// The field for `key` as a list of nested records, order preserved.
    pub fn get_records(&self, key: &str) -> Result<Vec<Record>, RecordError> {
        let items = self.get(key)?.as_array().ok_or(RecordError::WrongType {
            field: key.to_string(),
            expected: "array",
        })?;
        items
            .iter()
            .map(|item| match item {
                Value::Object(map) => Ok(Record::new(map.clone())),
                _ => Err(RecordError::WrongType {
                    field: key.to_string(),
                    expected: "array of objects",
                }),
            })
            .collect()
    }

    /// Borrows the underlying field map.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consumes the record, returning the raw JSON object.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl TryFrom<Value> for Record {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, RecordError> {
        match value {
            Value::Object(map) => Ok(Record::new(map)),
            _ => Err(RecordError::WrongType {
                field: "<root>".to_string(),
                expected: "object",
            }),
        }
    }
}

impl serde::Serialize for Record {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Record {
        Record::try_from(json!({
            "id": 1,
            "username": "john_smith",
            "is_admin": false,
            "bio": null,
            "namespace": {"id": 17, "path": "john_smith"},
            "identities": [
                {"provider": "github"},
                {"provider": "twitter"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_scalar_accessors() {
        let user = sample();
        assert_eq!(user.get_i64("id").unwrap(), 1);
        assert_eq!(user.get_str("username").unwrap(), "john_smith");
        assert!(!user.get_bool("is_admin").unwrap());
        assert!(user.is_null("bio").unwrap());
    }

    #[test]
    fn test_nested_records() {
        let user = sample();
        let ns = user.get_record("namespace").unwrap();
        assert_eq!(ns.get_i64("id").unwrap(), 17);

        let identities = user.get_records("identities").unwrap();
        assert_eq!(identities.len(), 2);
        assert_eq!(identities[0].get_str("provider").unwrap(), "github");
        assert_eq!(identities[1].get_str("provider").unwrap(), "twitter");
    }

    #[test]
    fn test_missing_key_is_typed_error() {
        let user = sample();
        assert_eq!(
            user.get("nope"),
            Err(RecordError::Missing("nope".to_string()))
        );
        assert!(user.try_get("nope").is_none());
    }

    #[test]
    fn test_wrong_type_is_typed_error() {
        let user = sample();
        assert_eq!(
            user.get_str("id"),
            Err(RecordError::WrongType {
                field: "id".to_string(),
                expected: "string"
            })
        );
    }

    #[test]
    fn test_wrapping_is_idempotent() {
        let value = json!({"a": 1, "b": {"c": [1, 2, 3]}});
        let first = Record::try_from(value.clone()).unwrap();
        let second = Record::try_from(value).unwrap();
        assert_eq!(
            first.keys().collect::<Vec<_>>(),
            second.keys().collect::<Vec<_>>()
        );
        assert_eq!(first, second);
        // Reading does not mutate.
        let _ = first.get_record("b").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_object_root_rejected() {
        assert!(Record::try_from(json!([1, 2])).is_err());
        assert!(Record::try_from(json!("scalar")).is_err());
    }
}
