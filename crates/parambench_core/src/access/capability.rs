//! Name-based attribute access capability.
//!
//! # Responsibility
//! - Define the keyed get/set interface parameter hosts program against.
//! - Define the access error taxonomy shared by strict and safe paths.
//!
//! # Invariants
//! - `attribute` and `set_attribute` never invent keys: a key outside
//!   `attribute_keys` fails with `UnknownKey` and leaves state untouched.
//! - Errors carry the offending key so hosts can report it verbatim.

use crate::model::value::{Value, ValueKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result alias for attribute access operations.
pub type AccessResult<T> = Result<T, AccessError>;

/// Keyed attribute access errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessError {
    /// The key is well-formed but the target declares no such attribute.
    UnknownKey { key: String },
    /// The key is empty or whitespace-only and can never name an attribute.
    EmptyKey,
    /// The value's kind does not match the attribute declaration.
    TypeMismatch {
        key: String,
        expected: ValueKind,
        actual: ValueKind,
    },
    /// The attribute exists but its declaration forbids writes.
    ReadOnlyKey { key: String },
}

impl AccessError {
    /// Returns whether this is the unrecognized-key failure.
    ///
    /// Only this variant is eligible for suppression by the safe access
    /// layer; every other variant reports a structurally broken call.
    pub fn is_unknown_key(&self) -> bool {
        matches!(self, Self::UnknownKey { .. })
    }
}

impl Display for AccessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownKey { key } => write!(f, "attribute key is not declared: `{key}`"),
            Self::EmptyKey => write!(f, "attribute key must not be empty"),
            Self::TypeMismatch {
                key,
                expected,
                actual,
            } => write!(
                f,
                "attribute `{key}` expects {expected} but received {actual}"
            ),
            Self::ReadOnlyKey { key } => write!(f, "attribute `{key}` is read-only"),
        }
    }
}

impl Error for AccessError {}

/// Keyed attribute access over a declared attribute set.
///
/// Implementors expose a fixed roster of named attributes and resolve reads
/// and writes strictly against it. This is the seam the safe wrapper in
/// [`crate::access::safe`] builds on.
pub trait AttributeAccess {
    /// Returns declared attribute keys in stable order.
    fn attribute_keys(&self) -> Vec<&str>;

    /// Returns whether `key` names a declared attribute.
    fn has_attribute(&self, key: &str) -> bool {
        self.attribute_keys().iter().any(|declared| *declared == key)
    }

    /// Reads the current value of one declared attribute.
    ///
    /// # Errors
    /// - `EmptyKey` when `key` is blank.
    /// - `UnknownKey` when `key` is not declared.
    fn attribute(&self, key: &str) -> AccessResult<Value>;

    /// Writes one declared attribute.
    ///
    /// The write is atomic with respect to validation: on any error the
    /// target is left exactly as it was.
    ///
    /// # Errors
    /// - `EmptyKey` when `key` is blank.
    /// - `UnknownKey` when `key` is not declared.
    /// - `ReadOnlyKey` when the declaration forbids writes.
    /// - `TypeMismatch` when a non-null value has the wrong kind.
    fn set_attribute(&mut self, key: &str, value: Value) -> AccessResult<()>;
}

#[cfg(test)]
mod tests {
    use super::{AccessError, AccessResult, AttributeAccess};
    use crate::model::value::{Value, ValueKind};
    use std::collections::BTreeMap;

    struct FixedTarget {
        values: BTreeMap<String, Value>,
    }

    impl FixedTarget {
        fn new() -> Self {
            let mut values = BTreeMap::new();
            values.insert("name".to_string(), Value::Text("Alice".to_string()));
            values.insert("count".to_string(), Value::from(5.0));
            Self { values }
        }
    }

    impl AttributeAccess for FixedTarget {
        fn attribute_keys(&self) -> Vec<&str> {
            self.values.keys().map(String::as_str).collect()
        }

        fn attribute(&self, key: &str) -> AccessResult<Value> {
            if key.trim().is_empty() {
                return Err(AccessError::EmptyKey);
            }
            match self.values.get(key) {
                Some(value) => Ok(value.clone()),
                None => Err(AccessError::UnknownKey {
                    key: key.to_string(),
                }),
            }
        }

        fn set_attribute(&mut self, key: &str, value: Value) -> AccessResult<()> {
            if key.trim().is_empty() {
                return Err(AccessError::EmptyKey);
            }
            match self.values.get_mut(key) {
                Some(slot) => {
                    *slot = value;
                    Ok(())
                }
                None => Err(AccessError::UnknownKey {
                    key: key.to_string(),
                }),
            }
        }
    }

    #[test]
    fn default_has_attribute_checks_declared_keys() {
        let target = FixedTarget::new();
        assert!(target.has_attribute("name"));
        assert!(target.has_attribute("count"));
        assert!(!target.has_attribute("ghost"));
        assert!(!target.has_attribute(""));
    }

    #[test]
    fn strict_read_and_write_resolve_against_declared_keys() {
        let mut target = FixedTarget::new();
        assert_eq!(
            target.attribute("name").expect("declared key should read"),
            Value::Text("Alice".to_string())
        );

        target
            .set_attribute("count", Value::from(6.0))
            .expect("declared key should write");
        assert_eq!(
            target.attribute("count").expect("count should read back"),
            Value::from(6.0)
        );

        let err = target.attribute("ghost").expect_err("undeclared key must fail");
        assert!(err.is_unknown_key());
    }

    #[test]
    fn only_unknown_key_reports_as_suppressible() {
        let unknown = AccessError::UnknownKey {
            key: "ghost".to_string(),
        };
        assert!(unknown.is_unknown_key());

        let others = [
            AccessError::EmptyKey,
            AccessError::TypeMismatch {
                key: "count".to_string(),
                expected: ValueKind::Number,
                actual: ValueKind::Text,
            },
            AccessError::ReadOnlyKey {
                key: "output_image".to_string(),
            },
        ];
        for err in others {
            assert!(!err.is_unknown_key(), "{err} must not be suppressible");
        }
    }

    #[test]
    fn errors_render_offending_key() {
        let err = AccessError::UnknownKey {
            key: "ghost".to_string(),
        };
        assert!(err.to_string().contains("ghost"));

        let err = AccessError::TypeMismatch {
            key: "count".to_string(),
            expected: ValueKind::Number,
            actual: ValueKind::Text,
        };
        let rendered = err.to_string();
        assert!(rendered.contains("count"));
        assert!(rendered.contains("number"));
        assert!(rendered.contains("text"));
    }
}
