//! Dictionary checks.
//!
//! [`DictCheck`] validates mappings of known shape: required and optional
//! keys with per-key sub-validators, an optional uniform value validator, and
//! a strict mode that rejects undeclared keys. [`MapCheck`] is the separate
//! entry point for mappings of uniform value type, with a typed result.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{ValidationError, ValidationResult};
use crate::path::FieldPath;

use super::traits::{ValueCheck, Validator};

/// A check for mappings with a known set of keys.
///
/// Required keys must be present; optional keys are validated when present.
/// In permissive mode (the default) undeclared keys pass through unchanged;
/// in strict mode any undeclared key fails the check, and all undeclared key
/// names are reported in a single failure. Strict mode with no uniform value
/// validator is the common "exact shape" configuration.
///
/// # Example
///
/// ```rust
/// use tripwire::{Check, FieldPath, Validator};
/// use serde_json::json;
///
/// let check = Check::dict()
///     .required("type", Check::string())
///     .required("key", Check::string())
///     .strict();
///
/// assert!(check.check(&json!({"type": "strike", "key": "1"}), &FieldPath::new("todo")).is_ok());
///
/// let error = check.check(&json!({"type": "strike"}), &FieldPath::new("todo")).unwrap_err();
/// assert_eq!(error.message(), "key key is missing from todo");
/// ```
pub struct DictCheck {
    required: IndexMap<String, Box<dyn ValueCheck>>,
    optional: IndexMap<String, Box<dyn ValueCheck>>,
    values: Option<Box<dyn ValueCheck>>,
    strict: bool,
}

impl DictCheck {
    /// Creates a permissive check with no declared keys.
    pub fn new() -> Self {
        Self {
            required: IndexMap::new(),
            optional: IndexMap::new(),
            values: None,
            strict: false,
        }
    }

    /// Declares a key that must be present, validated by `sub`.
    pub fn required<S>(mut self, key: impl Into<String>, sub: S) -> Self
    where
        S: Validator + 'static,
    {
        self.required.insert(key.into(), Box::new(sub));
        self
    }

    /// Declares a key that may be absent, validated by `sub` when present.
    pub fn optional<S>(mut self, key: impl Into<String>, sub: S) -> Self
    where
        S: Validator + 'static,
    {
        self.optional.insert(key.into(), Box::new(sub));
        self
    }

    /// Additionally validates every value in the mapping with `sub`,
    /// regardless of key membership, under the label
    /// `<path> contains a value that`.
    pub fn values<S>(mut self, sub: S) -> Self
    where
        S: Validator + 'static,
    {
        self.values = Some(Box::new(sub));
        self
    }

    /// Rejects any key not declared required or optional.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }
}

impl Default for DictCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for DictCheck {
    type Output = Map<String, Value>;

    fn check(&self, value: &Value, path: &FieldPath) -> ValidationResult<Map<String, Value>> {
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => return Err(ValidationError::at(path, "{var_name} is not a dict")),
        };

        let mut validated = obj.clone();

        for (key, sub) in &self.required {
            match obj.get(key) {
                Some(field) => {
                    validated.insert(key.clone(), sub.check_value(field, &path.push_key(key))?);
                }
                None => {
                    return Err(ValidationError::at(
                        path,
                        "{key_name} key is missing from {var_name}",
                    )
                    .arg("key_name", key));
                }
            }
        }

        for (key, sub) in &self.optional {
            if let Some(field) = obj.get(key) {
                validated.insert(key.clone(), sub.check_value(field, &path.push_key(key))?);
            }
        }

        if let Some(values) = &self.values {
            let label = path.push_each_value();
            for (key, field) in obj {
                validated.insert(key.clone(), values.check_value(field, &label)?);
            }
        }

        if self.strict {
            let extra: Vec<&str> = obj
                .keys()
                .filter(|k| !self.required.contains_key(*k) && !self.optional.contains_key(*k))
                .map(String::as_str)
                .collect();
            if !extra.is_empty() {
                return Err(ValidationError::at(path, "Unexpected arguments: {keys}")
                    .arg("keys", extra.join(", ")));
            }
        }

        Ok(validated)
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        self.check(value, path).map(Value::Object)
    }
}

/// A check for mappings whose values all share one type.
///
/// This is the split-out counterpart of [`DictCheck::values`] for when the
/// caller wants the typed result rather than a shape check: the output maps
/// every key to the sub-validator's output type, preserving input order.
///
/// # Example
///
/// ```rust
/// use tripwire::{Check, FieldPath, Validator};
/// use serde_json::json;
///
/// let check = Check::map(Check::integer());
/// let scores = check
///     .check(&json!({"alice": 3, "bob": 5}), &FieldPath::new("scores"))
///     .unwrap();
/// assert_eq!(scores["alice"], 3);
/// ```
pub struct MapCheck<V> {
    values: V,
}

impl<V: Validator> MapCheck<V> {
    /// Creates a check validating every value with `values`.
    pub fn new(values: V) -> Self {
        Self { values }
    }
}

impl<V: Validator> Validator for MapCheck<V> {
    type Output = IndexMap<String, V::Output>;

    fn check(
        &self,
        value: &Value,
        path: &FieldPath,
    ) -> ValidationResult<IndexMap<String, V::Output>> {
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => return Err(ValidationError::at(path, "{var_name} is not a dict")),
        };

        let label = path.push_each_value();
        let mut validated = IndexMap::with_capacity(obj.len());
        for (key, field) in obj {
            validated.insert(key.clone(), self.values.check(field, &label)?);
        }
        Ok(validated)
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => return Err(ValidationError::at(path, "{var_name} is not a dict")),
        };

        let label = path.push_each_value();
        let mut validated = Map::new();
        for (key, field) in obj {
            validated.insert(key.clone(), self.values.check_to_value(field, &label)?);
        }
        Ok(Value::Object(validated))
    }
}
