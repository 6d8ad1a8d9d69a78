//! Traits for validator polymorphism.
//!
//! This module provides the [`Validator`] trait that every check implements,
//! and the type-erased [`ValueCheck`] trait that lets checks with different
//! output types be stored together inside combinators.

use serde_json::Value;

use crate::error::ValidationResult;
use crate::path::FieldPath;

/// A capability that checks and narrows a dynamically typed value.
///
/// A validator takes the value under inspection and the field path naming its
/// logical location, and either returns the value narrowed to `Output` or
/// fails with an error tied to that path. Validators hold no mutable state;
/// a composed validator is a schema that can be applied any number of times,
/// from any thread.
///
/// The `Send + Sync` bounds allow validators to be boxed into trait objects
/// and shared across threads.
///
/// # Example
///
/// ```rust
/// use tripwire::{Check, FieldPath, Validator};
/// use serde_json::json;
///
/// let check = Check::list(Check::integer());
/// let items = check.check(&json!([1, 2, 3]), &FieldPath::new("ids")).unwrap();
/// assert_eq!(items, vec![1, 2, 3]);
/// ```
pub trait Validator: Send + Sync {
    /// The narrowed type produced on success.
    type Output;

    /// Validates a value, returning it narrowed to [`Self::Output`].
    fn check(&self, value: &Value, path: &FieldPath) -> ValidationResult<Self::Output>;

    /// Validates a value and returns the result as a `serde_json::Value`.
    ///
    /// This lets validators with different output types be used uniformly
    /// where results must share one representation, e.g. as dict field
    /// checks or union alternatives.
    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value>;
}

/// A type-erased validator producing `serde_json::Value`.
///
/// Every [`Validator`] is automatically a `ValueCheck`; combinators that hold
/// heterogeneous collections of sub-validators (tuples, dicts, unions) store
/// `Box<dyn ValueCheck>`.
pub trait ValueCheck: Send + Sync {
    /// Validates a value and returns the result as a `serde_json::Value`.
    fn check_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value>;
}

impl<V: Validator> ValueCheck for V {
    fn check_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        self.check_to_value(value, path)
    }
}

impl Validator for Box<dyn ValueCheck> {
    type Output = Value;

    fn check(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        self.as_ref().check_value(value, path)
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        self.as_ref().check_value(value, path)
    }
}
