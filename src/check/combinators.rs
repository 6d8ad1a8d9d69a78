//! Higher-order checks built from other checks.
//!
//! - [`OptionalCheck`]: null passes, anything else goes to the inner check
//! - [`UnionCheck`]: ordered first-match over any number of alternatives,
//!   with sub-failures discarded in favor of one generic failure
//! - [`OrCheck`]: a symmetric two-way union with a typed [`Either`] result
//!   that surfaces the second alternative's specific failure
//! - [`EqualsCheck`]: pins a value to one expected constant
//! - [`StringOrIntCheck`] / [`StringOrIntListCheck`]: the two ad-hoc variant
//!   checks used by property-style payloads
//!
//! The two union forms deliberately report failure differently; call sites
//! depend on both behaviors, so they are separate types rather than one.

use serde_json::Value;

use crate::error::{ValidationError, ValidationResult};
use crate::path::FieldPath;

use super::list::ListCheck;
use super::numeric::{expect_int, IntCheck};
use super::traits::{ValueCheck, Validator};

/// A check that lets null through and otherwise delegates to `inner`.
pub struct OptionalCheck<S> {
    inner: S,
}

impl<S: Validator> OptionalCheck<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Validator> Validator for OptionalCheck<S> {
    type Output = Option<S::Output>;

    fn check(&self, value: &Value, path: &FieldPath) -> ValidationResult<Option<S::Output>> {
        if value.is_null() {
            Ok(None)
        } else {
            self.inner.check(value, path).map(Some)
        }
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        if value.is_null() {
            Ok(Value::Null)
        } else {
            self.inner.check_to_value(value, path)
        }
    }
}

/// An ordered first-match union over type-erased alternatives.
///
/// Alternatives are tried in listed order and the first success wins.
/// Individual sub-failures are discarded, not aggregated: with few, clearly
/// distinguishable alternatives a combined multi-cause message would only
/// confuse, so total failure reports one generic message.
///
/// # Example
///
/// ```rust
/// use tripwire::{Check, FieldPath, ValueCheck, Validator};
/// use serde_json::json;
///
/// let check = Check::union(vec![
///     Box::new(Check::string()) as Box<dyn ValueCheck>,
///     Box::new(Check::integer()),
/// ]);
///
/// assert!(check.check(&json!(5), &FieldPath::new("x")).is_ok());
/// let error = check.check(&json!(true), &FieldPath::new("x")).unwrap_err();
/// assert_eq!(error.message(), "x is not an allowed type");
/// ```
pub struct UnionCheck {
    alternatives: Vec<Box<dyn ValueCheck>>,
}

impl UnionCheck {
    pub fn new(alternatives: Vec<Box<dyn ValueCheck>>) -> Self {
        Self { alternatives }
    }
}

impl Validator for UnionCheck {
    type Output = Value;

    fn check(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        for alternative in &self.alternatives {
            if let Ok(validated) = alternative.check_value(value, path) {
                return Ok(validated);
            }
        }
        Err(ValidationError::at(path, "{var_name} is not an allowed type"))
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        self.check(value, path)
    }
}

/// The result of a two-way union: which alternative accepted the value.
#[derive(Debug, Clone, PartialEq)]
pub enum Either<A, B> {
    /// The first alternative accepted the value.
    First(A),
    /// The second alternative accepted the value.
    Second(B),
}

/// A symmetric two-way union over alternatives of possibly different output
/// types.
///
/// The first alternative is tried, and its failure is discarded in favor of
/// trying the second; if the second also fails, its failure (not a generic
/// one) propagates. This mirrors call sites that want the more specific of
/// two diagnostics.
pub struct OrCheck<A, B> {
    first: A,
    second: B,
}

impl<A: Validator, B: Validator> OrCheck<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Validator, B: Validator> Validator for OrCheck<A, B> {
    type Output = Either<A::Output, B::Output>;

    fn check(
        &self,
        value: &Value,
        path: &FieldPath,
    ) -> ValidationResult<Either<A::Output, B::Output>> {
        match self.first.check(value, path) {
            Ok(validated) => Ok(Either::First(validated)),
            Err(_) => self.second.check(value, path).map(Either::Second),
        }
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        match self.first.check_to_value(value, path) {
            Ok(validated) => Ok(validated),
            Err(_) => self.second.check_to_value(value, path),
        }
    }
}

/// A check that pins the value to one expected constant.
pub struct EqualsCheck {
    expected: Value,
}

impl EqualsCheck {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Validator for EqualsCheck {
    type Output = Value;

    fn check(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        if *value == self.expected {
            Ok(value.clone())
        } else {
            Err(
                ValidationError::at(path, "{var_name} != {expected_value} ({value} is wrong)")
                    .arg("expected_value", display_value(&self.expected))
                    .arg("value", display_value(value)),
            )
        }
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        self.check(value, path)
    }
}

/// Renders a value for an error message, without quoting strings.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The result of [`StringOrIntCheck`].
#[derive(Debug, Clone, PartialEq)]
pub enum StringOrInt {
    Str(String),
    Int(i64),
}

/// A check accepting text or an integer, unchanged.
#[derive(Clone, Copy, Default)]
pub struct StringOrIntCheck;

impl Validator for StringOrIntCheck {
    type Output = StringOrInt;

    fn check(&self, value: &Value, path: &FieldPath) -> ValidationResult<StringOrInt> {
        if let Some(s) = value.as_str() {
            return Ok(StringOrInt::Str(s.to_string()));
        }
        match expect_int(value, path) {
            Ok(n) => Ok(StringOrInt::Int(n)),
            Err(_) => Err(ValidationError::at(
                path,
                "{var_name} is not a string or integer",
            )),
        }
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        self.check(value, path)?;
        Ok(value.clone())
    }
}

/// The result of [`StringOrIntListCheck`].
#[derive(Debug, Clone, PartialEq)]
pub enum StringOrIntList {
    Str(String),
    Ints(Vec<i64>),
}

/// A check accepting text as-is, or a sequence of integers validated
/// elementwise.
#[derive(Clone, Copy, Default)]
pub struct StringOrIntListCheck;

impl Validator for StringOrIntListCheck {
    type Output = StringOrIntList;

    fn check(&self, value: &Value, path: &FieldPath) -> ValidationResult<StringOrIntList> {
        if let Some(s) = value.as_str() {
            return Ok(StringOrIntList::Str(s.to_string()));
        }
        if !value.is_array() {
            return Err(ValidationError::at(
                path,
                "{var_name} is not a string or an integer list",
            ));
        }
        ListCheck::new(IntCheck::new())
            .check(value, path)
            .map(StringOrIntList::Ints)
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        self.check(value, path)?;
        Ok(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::string::StringCheck;
    use serde_json::json;

    fn root() -> FieldPath {
        FieldPath::new("x")
    }

    #[test]
    fn test_optional_passes_null() {
        let check = OptionalCheck::new(IntCheck::new());
        assert_eq!(check.check(&json!(null), &root()).unwrap(), None);
        assert_eq!(check.check(&json!(5), &root()).unwrap(), Some(5));
        assert!(check.check(&json!("no"), &root()).is_err());
    }

    #[test]
    fn test_union_first_match() {
        let check = UnionCheck::new(vec![
            Box::new(StringCheck::new()),
            Box::new(IntCheck::new()),
        ]);

        assert_eq!(check.check(&json!("a"), &root()).unwrap(), json!("a"));
        assert_eq!(check.check(&json!(5), &root()).unwrap(), json!(5));
    }

    #[test]
    fn test_union_discards_sub_failures() {
        let check = UnionCheck::new(vec![
            Box::new(StringCheck::new()),
            Box::new(IntCheck::new()),
        ]);

        // Booleans are neither strings nor integers.
        let error = check.check(&json!(true), &root()).unwrap_err();
        assert_eq!(error.message(), "x is not an allowed type");
    }

    #[test]
    fn test_or_check_typed_result() {
        let check = OrCheck::new(StringCheck::new(), IntCheck::new());
        assert_eq!(
            check.check(&json!("a"), &root()).unwrap(),
            Either::First("a".to_string())
        );
        assert_eq!(check.check(&json!(5), &root()).unwrap(), Either::Second(5));
    }

    #[test]
    fn test_or_check_propagates_second_failure() {
        let check = OrCheck::new(StringCheck::new(), IntCheck::new().range(0..=10));
        let error = check.check(&json!(11), &root()).unwrap_err();
        assert_eq!(error.message(), "x is too large");
    }

    #[test]
    fn test_equals() {
        let check = EqualsCheck::new("choices");
        assert!(check.check(&json!("choices"), &root()).is_ok());

        let error = check.check(&json!("other"), &root()).unwrap_err();
        assert_eq!(error.message(), "x != choices (other is wrong)");
    }

    #[test]
    fn test_string_or_int() {
        let check = StringOrIntCheck;
        assert_eq!(
            check.check(&json!("a"), &root()).unwrap(),
            StringOrInt::Str("a".to_string())
        );
        assert_eq!(check.check(&json!(5), &root()).unwrap(), StringOrInt::Int(5));

        let error = check.check(&json!(true), &root()).unwrap_err();
        assert_eq!(error.message(), "x is not a string or integer");
    }

    #[test]
    fn test_string_or_int_list() {
        let check = StringOrIntListCheck;
        assert_eq!(
            check.check(&json!("a"), &root()).unwrap(),
            StringOrIntList::Str("a".to_string())
        );
        assert_eq!(
            check.check(&json!([1, 2]), &root()).unwrap(),
            StringOrIntList::Ints(vec![1, 2])
        );

        let error = check.check(&json!(true), &root()).unwrap_err();
        assert_eq!(error.message(), "x is not a string or an integer list");

        // Element failures keep the element label.
        let error = check.check(&json!([1, "a"]), &root()).unwrap_err();
        assert_eq!(error.message(), "x[1] is not an integer");
    }
}
