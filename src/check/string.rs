//! String checks.
//!
//! This module provides [`StringCheck`] for validating text values with
//! blankness, membership, and length constraints, plus the fixed-format
//! string checks: calendar dates, hex color codes, and URL patterns.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;

use crate::error::{ValidationError, ValidationResult};
use crate::path::FieldPath;

use super::traits::Validator;

/// A constraint applied on top of the basic "is text" check.
#[derive(Clone)]
enum StringConstraint {
    Required,
    OneOf(Vec<String>),
    Capped(usize),
    FixedLength(usize),
}

/// A check for text values.
///
/// The bare check only verifies that the value is text. Builder methods add
/// constraints, evaluated in the order they were added; the first violated
/// constraint fails the check.
///
/// # Example
///
/// ```rust
/// use tripwire::{Check, FieldPath, Validator};
/// use serde_json::json;
///
/// let check = Check::string().required().capped(10);
///
/// assert!(check.check(&json!("hello"), &FieldPath::new("x")).is_ok());
/// assert!(check.check(&json!("   "), &FieldPath::new("x")).is_err());
/// assert!(check.check(&json!(42), &FieldPath::new("x")).is_err());
/// ```
#[derive(Clone)]
pub struct StringCheck {
    constraints: Vec<StringConstraint>,
}

impl StringCheck {
    /// Creates a check with no constraints beyond "is text".
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Requires the text to be non-blank after trimming whitespace.
    pub fn required(mut self) -> Self {
        self.constraints.push(StringConstraint::Required);
        self
    }

    /// Requires the text to be one of the given allowed values.
    pub fn one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints.push(StringConstraint::OneOf(
            values.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Caps the text at `max_length` characters (Unicode scalar values).
    pub fn capped(mut self, max_length: usize) -> Self {
        self.constraints.push(StringConstraint::Capped(max_length));
        self
    }

    /// Requires the text to be exactly `length` characters long.
    pub fn fixed_length(mut self, length: usize) -> Self {
        self.constraints
            .push(StringConstraint::FixedLength(length));
        self
    }
}

impl Default for StringCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for StringCheck {
    type Output = String;

    fn check(&self, value: &Value, path: &FieldPath) -> ValidationResult<String> {
        let s = expect_string(value, path)?;
        for constraint in &self.constraints {
            match constraint {
                StringConstraint::Required => {
                    if s.trim().is_empty() {
                        return Err(
                            ValidationError::at(path, "{item} cannot be blank.").arg("item", path)
                        );
                    }
                }
                StringConstraint::OneOf(allowed) => {
                    if !allowed.iter().any(|a| a == &s) {
                        return Err(ValidationError::at(path, "Invalid {var_name}"));
                    }
                }
                StringConstraint::Capped(max_length) => {
                    if s.chars().count() > *max_length {
                        return Err(ValidationError::at(
                            path,
                            "{var_name} is too long (limit: {max_length} characters)",
                        )
                        .arg("max_length", max_length));
                    }
                }
                StringConstraint::FixedLength(target_length) => {
                    let length = s.chars().count();
                    if length != *target_length {
                        return Err(ValidationError::at(
                            path,
                            "{var_name} has incorrect length {length}; should be {target_length}",
                        )
                        .arg("target_length", target_length)
                        .arg("length", length));
                    }
                }
            }
        }
        Ok(s)
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        self.check(value, path).map(Value::String)
    }
}

/// A check for canonical `YYYY-MM-DD` calendar dates.
///
/// The text must parse as a real calendar date and format back to exactly the
/// input, so impossible dates ("2023-02-29") and non-canonical spellings
/// ("2024-2-29") both fail.
#[derive(Clone, Copy, Default)]
pub struct DateCheck;

impl Validator for DateCheck {
    type Output = String;

    fn check(&self, value: &Value, path: &FieldPath) -> ValidationResult<String> {
        let s = expect_string(value, path)?;
        match NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            Ok(date) if date.format("%Y-%m-%d").to_string() == s => Ok(s),
            _ => Err(ValidationError::at(path, "{var_name} is not a date")),
        }
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        self.check(value, path).map(Value::String)
    }
}

/// A check for CSS-style hex color codes: `#` followed by 3 to 6 hex digits.
#[derive(Clone, Copy, Default)]
pub struct HexColorCheck;

fn hex_color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^#[0-9a-fA-F]{3,6}$").expect("hex color pattern compiles")
    })
}

impl Validator for HexColorCheck {
    type Output = String;

    fn check(&self, value: &Value, path: &FieldPath) -> ValidationResult<String> {
        let s = expect_string(value, path)?;
        if hex_color_pattern().is_match(&s) {
            Ok(s)
        } else {
            Err(ValidationError::at(
                path,
                "{var_name} is not a valid hex color code",
            ))
        }
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        self.check(value, path).map(Value::String)
    }
}

/// A check for URLs, delegating syntax to a caller-supplied collaborator.
///
/// The crate does not embed an RFC URL grammar; callers pass whatever syntax
/// checker their environment provides.
pub struct UrlCheck<F> {
    is_url: F,
}

impl<F> UrlCheck<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    pub fn new(is_url: F) -> Self {
        Self { is_url }
    }
}

impl<F> Validator for UrlCheck<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    type Output = String;

    fn check(&self, value: &Value, path: &FieldPath) -> ValidationResult<String> {
        let s = expect_string(value, path)?;
        if (self.is_url)(&s) {
            Ok(s)
        } else {
            Err(ValidationError::at(path, "{var_name} is not a URL"))
        }
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        self.check(value, path).map(Value::String)
    }
}

/// The literal placeholder an external account URL pattern must contain.
const USERNAME_PLACEHOLDER: &str = "%(username)s";

/// A check for external-account URL patterns.
///
/// The text must contain the literal `%(username)s` placeholder exactly once,
/// and must form a valid URL (per the supplied collaborator) once a dummy
/// username is substituted for the placeholder.
pub struct UrlPatternCheck<F> {
    is_url: F,
}

impl<F> UrlPatternCheck<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    pub fn new(is_url: F) -> Self {
        Self { is_url }
    }
}

impl<F> Validator for UrlPatternCheck<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    type Output = String;

    fn check(&self, value: &Value, path: &FieldPath) -> ValidationResult<String> {
        let s = expect_string(value, path)?;

        if s.matches(USERNAME_PLACEHOLDER).count() != 1 {
            return Err(ValidationError::at(path, "Malformed URL pattern."));
        }
        let candidate = s.replace(USERNAME_PLACEHOLDER, "username");

        if (self.is_url)(&candidate) {
            Ok(s)
        } else {
            Err(ValidationError::at(path, "{var_name} is not a URL"))
        }
    }

    fn check_to_value(&self, value: &Value, path: &FieldPath) -> ValidationResult<Value> {
        self.check(value, path).map(Value::String)
    }
}

/// Narrows a value to text, or fails with the standard type-mismatch message.
pub(crate) fn expect_string(value: &Value, path: &FieldPath) -> ValidationResult<String> {
    match value.as_str() {
        Some(s) => Ok(s.to_string()),
        None => Err(ValidationError::at(path, "{var_name} is not a string")),
    }
}
