//! Sequence checks.
//!
//! This module provides [`ListCheck`] for homogeneous sequences and
//! [`TupleCheck`] for fixed-arity positional sequences. Element failures are
//! labeled with the 0-based element index, e.g. `events[2]`.

use serde_json::Value;

use crate::error::{ValidationError, ValidationResult};
use crate::path::FieldPath;

use super::traits::{ValueCheck, Validator};

/// A check for sequences whose elements all satisfy one sub-validator.
///
/// # Example
///
/// ```rust
/// use tripwire::{Check, FieldPath, Validator};
/// use serde_json::json;
///
/// let check = Check::list(Check::integer());
/// let ids = check.check(&json!([1, 2, 3]), &FieldPath::new("ids")).unwrap();
/// assert_eq!(ids, vec![1, 2, 3]);
///
/// let error = check.check(&json!([1, "a", 3]), &FieldPath::new("ids")).unwrap_err();
/// assert_eq!(error.message(), "ids[1] is not an integer");
/// ```
pub struct ListCheck<S> {
    item: S,
    length: Option<usize>,
}

impl<S: Validator> ListCheck<S> {
    /// Creates a check validating every element with `item`.
    pub fn new(item: S) -> Self {
        Self { item, length: None }
    }

    /// Requires the sequence to contain exactly `length` elements.
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    fn expect_items<'v>(
        &self,
        value: &'v Value,
        path: &FieldPath,
    ) -> ValidationResult<&'v Vec<Value>> {
        let items = match value.as_array() {
            Some(items) => items,
            None => return Err(ValidationError::at(path, "{var_name} is not a list")),
        };
        if let Some(length) = self.length {
            if items.len() != length {
                return Err(ValidationError::at(
                    path,
                    "{container} should have exactly {length} items",
                )
                .arg("container", path)
                .arg("length", length));
            }
        }
        Ok(items)
    }
}

impl<S: Validator> Validator for ListCheck<S> {
    type Output = Vec<S::Output>;

    fn check(&self, value: &Value, path: &FieldPath) -> ValidationResult<Vec<S::Output>> {
        let items = self.expect_items(value, path)?;
        let mut validated = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            validated.push(self.item.check(item, &path.push_index(index))?);
        }
        Ok(validated)
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        let items = self.expect_items(value, path)?;
        let mut validated = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            validated.push(self.item.check_to_value(item, &path.push_index(index))?);
        }
        Ok(Value::Array(validated))
    }
}

/// A check for fixed-arity ordered sequences.
///
/// The sequence must contain exactly as many elements as there are
/// sub-validators; position `i` is validated by sub-validator `i` under the
/// label `path[i]`.
pub struct TupleCheck {
    items: Vec<Box<dyn ValueCheck>>,
}

impl TupleCheck {
    /// Creates a check from one sub-validator per position.
    pub fn new(items: Vec<Box<dyn ValueCheck>>) -> Self {
        Self { items }
    }
}

impl Validator for TupleCheck {
    type Output = Vec<Value>;

    fn check(&self, value: &Value, path: &FieldPath) -> ValidationResult<Vec<Value>> {
        let items = match value.as_array() {
            Some(items) => items,
            None => return Err(ValidationError::at(path, "{var_name} is not a tuple")),
        };

        let desired_len = self.items.len();
        if items.len() != desired_len {
            return Err(ValidationError::at(
                path,
                "{var_name} should have exactly {desired_len} items",
            )
            .arg("desired_len", desired_len));
        }

        let mut validated = Vec::with_capacity(desired_len);
        for (index, (item, sub)) in items.iter().zip(&self.items).enumerate() {
            validated.push(sub.check_value(item, &path.push_index(index))?);
        }
        Ok(validated)
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        self.check(value, path).map(Value::Array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::numeric::IntCheck;
    use crate::check::string::StringCheck;
    use serde_json::json;

    fn root() -> FieldPath {
        FieldPath::new("x")
    }

    #[test]
    fn test_list_validates_elements() {
        let check = ListCheck::new(IntCheck::new());
        assert_eq!(check.check(&json!([1, 2, 3]), &root()).unwrap(), vec![1, 2, 3]);
        assert!(check.check(&json!([]), &root()).unwrap().is_empty());
    }

    #[test]
    fn test_list_rejects_non_list() {
        let check = ListCheck::new(IntCheck::new());
        let error = check.check(&json!("nope"), &root()).unwrap_err();
        assert_eq!(error.message(), "x is not a list");
    }

    #[test]
    fn test_list_element_failure_names_index() {
        let check = ListCheck::new(IntCheck::new());
        let error = check.check(&json!([1, "a", 3]), &root()).unwrap_err();
        assert_eq!(error.message(), "x[1] is not an integer");
        assert_eq!(error.path().unwrap().to_string(), "x[1]");
    }

    #[test]
    fn test_list_exact_length() {
        let check = ListCheck::new(IntCheck::new()).length(3);
        assert!(check.check(&json!([1, 2, 3]), &root()).is_ok());

        let error = check.check(&json!([1, 2]), &root()).unwrap_err();
        assert_eq!(error.message(), "x should have exactly 3 items");
    }

    #[test]
    fn test_tuple_positions() {
        let check = TupleCheck::new(vec![
            Box::new(StringCheck::new()),
            Box::new(IntCheck::new()),
        ]);

        let validated = check.check(&json!(["a", 1]), &root()).unwrap();
        assert_eq!(validated, vec![json!("a"), json!(1)]);

        let error = check.check(&json!(["a", "b"]), &root()).unwrap_err();
        assert_eq!(error.message(), "x[1] is not an integer");
    }

    #[test]
    fn test_tuple_arity() {
        let check = TupleCheck::new(vec![
            Box::new(StringCheck::new()),
            Box::new(IntCheck::new()),
        ]);

        let error = check.check(&json!(["a"]), &root()).unwrap_err();
        assert_eq!(error.message(), "x should have exactly 2 items");

        let error = check.check(&json!("a"), &root()).unwrap_err();
        assert_eq!(error.message(), "x is not a tuple");
    }
}
