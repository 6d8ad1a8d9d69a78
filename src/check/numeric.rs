//! Integer, float, and boolean checks.
//!
//! The dynamic-type discrimination here is exact: booleans are not integers,
//! numbers stored as floats are not integers, and integers are not floats.

use std::ops::RangeInclusive;

use serde_json::Value;

use crate::error::{ValidationError, ValidationResult};
use crate::path::FieldPath;

use super::traits::Validator;

/// A constraint applied on top of the basic "is an integer" check.
#[derive(Clone)]
enum IntConstraint {
    OneOf(Vec<i64>),
    Range { low: i64, high: i64 },
}

/// A check for integer values.
///
/// Only numbers representable as `i64` and not stored as floats pass; `true`,
/// `1.0`, and `"1"` all fail. Constraints are evaluated in the order they
/// were added.
///
/// # Example
///
/// ```rust
/// use tripwire::{Check, FieldPath, Validator};
/// use serde_json::json;
///
/// let check = Check::integer().range(0..=1000);
///
/// assert_eq!(check.check(&json!(5), &FieldPath::new("idx")).unwrap(), 5);
/// assert!(check.check(&json!(1001), &FieldPath::new("idx")).is_err());
/// assert!(check.check(&json!(true), &FieldPath::new("idx")).is_err());
/// ```
#[derive(Clone)]
pub struct IntCheck {
    constraints: Vec<IntConstraint>,
}

impl IntCheck {
    /// Creates a check with no constraints beyond "is an integer".
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Requires the integer to be one of the given allowed values.
    pub fn one_of(mut self, values: impl IntoIterator<Item = i64>) -> Self {
        self.constraints
            .push(IntConstraint::OneOf(values.into_iter().collect()));
        self
    }

    /// Requires the integer to lie in the given range, both ends inclusive.
    pub fn range(mut self, range: RangeInclusive<i64>) -> Self {
        self.constraints.push(IntConstraint::Range {
            low: *range.start(),
            high: *range.end(),
        });
        self
    }
}

impl Default for IntCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for IntCheck {
    type Output = i64;

    fn check(&self, value: &Value, path: &FieldPath) -> ValidationResult<i64> {
        let n = expect_int(value, path)?;
        for constraint in &self.constraints {
            match constraint {
                IntConstraint::OneOf(allowed) => {
                    if !allowed.contains(&n) {
                        return Err(ValidationError::at(path, "Invalid {var_name}"));
                    }
                }
                IntConstraint::Range { low, high } => {
                    if n < *low {
                        return Err(ValidationError::at(path, "{var_name} is too small"));
                    }
                    if n > *high {
                        return Err(ValidationError::at(path, "{var_name} is too large"));
                    }
                }
            }
        }
        Ok(n)
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        self.check(value, path).map(|n| Value::Number(n.into()))
    }
}

/// A check for floating-point values.
///
/// Only numbers stored as floats pass; integers fail, matching the exact
/// dynamic-type contract of the integer check in reverse.
#[derive(Clone, Copy, Default)]
pub struct FloatCheck;

impl Validator for FloatCheck {
    type Output = f64;

    fn check(&self, value: &Value, path: &FieldPath) -> ValidationResult<f64> {
        match value {
            Value::Number(n) if n.is_f64() => {
                // is_f64 guarantees as_f64 succeeds
                Ok(n.as_f64().unwrap_or_default())
            }
            _ => Err(ValidationError::at(path, "{var_name} is not a float")),
        }
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        self.check(value, path)?;
        Ok(value.clone())
    }
}

/// A check for boolean values.
#[derive(Clone, Copy, Default)]
pub struct BoolCheck;

impl Validator for BoolCheck {
    type Output = bool;

    fn check(&self, value: &Value, path: &FieldPath) -> ValidationResult<bool> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(ValidationError::at(path, "{var_name} is not a boolean")),
        }
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        self.check(value, path).map(Value::Bool)
    }
}

/// Narrows a value to an integer, rejecting booleans, floats, and numbers
/// outside the `i64` range.
pub(crate) fn expect_int(value: &Value, path: &FieldPath) -> ValidationResult<i64> {
    match value {
        Value::Number(n) if !n.is_f64() => n
            .as_i64()
            .ok_or_else(|| ValidationError::at(path, "{var_name} is too large")),
        _ => Err(ValidationError::at(path, "{var_name} is not an integer")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn root() -> FieldPath {
        FieldPath::new("x")
    }

    #[test]
    fn test_int_check_accepts_integers() {
        let check = IntCheck::new();
        assert_eq!(check.check(&json!(5), &root()).unwrap(), 5);
        assert_eq!(check.check(&json!(-5), &root()).unwrap(), -5);
        assert_eq!(check.check(&json!(0), &root()).unwrap(), 0);
        assert_eq!(check.check(&json!(i64::MIN), &root()).unwrap(), i64::MIN);
        assert_eq!(check.check(&json!(i64::MAX), &root()).unwrap(), i64::MAX);
    }

    #[test]
    fn test_int_check_rejects_bools_and_floats() {
        let check = IntCheck::new();

        let error = check.check(&json!(true), &root()).unwrap_err();
        assert_eq!(error.message(), "x is not an integer");

        let error = check.check(&json!(1.0), &root()).unwrap_err();
        assert_eq!(error.message(), "x is not an integer");

        assert!(check.check(&json!("5"), &root()).is_err());
        assert!(check.check(&json!(null), &root()).is_err());
    }

    #[test]
    fn test_int_check_rejects_u64_overflow() {
        let check = IntCheck::new();
        let error = check.check(&json!(u64::MAX), &root()).unwrap_err();
        assert_eq!(error.message(), "x is too large");
    }

    #[test]
    fn test_range_is_inclusive() {
        let check = IntCheck::new().range(1..=10);
        assert!(check.check(&json!(1), &root()).is_ok());
        assert!(check.check(&json!(10), &root()).is_ok());

        let error = check.check(&json!(0), &root()).unwrap_err();
        assert_eq!(error.message(), "x is too small");

        let error = check.check(&json!(11), &root()).unwrap_err();
        assert_eq!(error.message(), "x is too large");
    }

    #[test]
    fn test_one_of_membership() {
        let check = IntCheck::new().one_of([1, -1]);
        assert!(check.check(&json!(1), &root()).is_ok());
        assert!(check.check(&json!(-1), &root()).is_ok());

        let error = check.check(&json!(2), &root()).unwrap_err();
        assert_eq!(error.message(), "Invalid x");
    }

    #[test]
    fn test_float_check() {
        let check = FloatCheck;
        assert_eq!(check.check(&json!(1.5), &root()).unwrap(), 1.5);
        assert_eq!(check.check(&json!(1.0), &root()).unwrap(), 1.0);

        let error = check.check(&json!(1), &root()).unwrap_err();
        assert_eq!(error.message(), "x is not a float");

        assert!(check.check(&json!(true), &root()).is_err());
        assert!(check.check(&json!("1.5"), &root()).is_err());
    }

    #[test]
    fn test_bool_check() {
        let check = BoolCheck;
        assert!(check.check(&json!(true), &root()).unwrap());
        assert!(!check.check(&json!(false), &root()).unwrap());

        let error = check.check(&json!(0), &root()).unwrap_err();
        assert_eq!(error.message(), "x is not a boolean");
    }
}
