//! Validation failure type and message rendering.
//!
//! Every failed check produces a [`ValidationError`]: a static message
//! template with named substitution arguments, the field path that produced
//! it, and a kind separating plain validation failures from authorization
//! failures. The core never commits to a final user-facing string; callers
//! that localize can fetch the template and arguments and render them through
//! their own catalog via [`ValidationError::message_with`].

use std::fmt::{self, Display};

use crate::path::FieldPath;

/// Result alias used by every validator in the crate.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Distinguishes plain validation failures from authorization failures.
///
/// Authorization failures occur when a payload is structurally valid but the
/// caller lacks permission for the operation it encodes (e.g. editing a poll
/// question without being its author).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The value does not conform to the expected shape, type, or domain.
    Invalid,
    /// The value is well formed but the caller is not allowed to send it.
    Unauthorized,
}

/// A single validation failure.
///
/// A failure is created at the point of mismatch and propagated unchanged up
/// through all enclosing combinators; the first failure aborts validation.
///
/// # Example
///
/// ```rust
/// use tripwire::{FieldPath, ValidationError};
///
/// let path = FieldPath::new("age");
/// let error = ValidationError::at(&path, "{var_name} is not an integer");
///
/// assert_eq!(error.template(), "{var_name} is not an integer");
/// assert_eq!(error.message(), "age is not an integer");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    kind: ErrorKind,
    template: &'static str,
    args: Vec<(&'static str, String)>,
    path: Option<FieldPath>,
}

impl ValidationError {
    /// Creates a failure at the given path.
    ///
    /// The path is rendered and bound to the `var_name` substitution
    /// argument, which most templates reference.
    pub fn at(path: &FieldPath, template: &'static str) -> Self {
        Self {
            kind: ErrorKind::Invalid,
            template,
            args: vec![("var_name", path.to_string())],
            path: Some(path.clone()),
        }
    }

    /// Creates a failure that is not tied to any particular field.
    pub fn new(template: &'static str) -> Self {
        Self {
            kind: ErrorKind::Invalid,
            template,
            args: Vec::new(),
            path: None,
        }
    }

    /// Creates an authorization failure.
    pub fn unauthorized(template: &'static str) -> Self {
        Self {
            kind: ErrorKind::Unauthorized,
            template,
            args: Vec::new(),
            path: None,
        }
    }

    /// Adds a named substitution argument and returns self for chaining.
    pub fn arg(mut self, name: &'static str, value: impl Display) -> Self {
        self.args.push((name, value.to_string()));
        self
    }

    /// Returns the failure kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns true for authorization failures.
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ErrorKind::Unauthorized
    }

    /// Returns the untranslated message template.
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Returns the named substitution arguments, in insertion order.
    pub fn args(&self) -> &[(&'static str, String)] {
        &self.args
    }

    /// Returns the path of the value that failed, if the failure names one.
    pub fn path(&self) -> Option<&FieldPath> {
        self.path.as_ref()
    }

    /// Renders the default (untranslated) message.
    pub fn message(&self) -> String {
        render(self.template, &self.args)
    }

    /// Renders the message through a caller-supplied translation.
    ///
    /// `translate` maps the template to its localized form; the named
    /// arguments are then substituted into the result. This is the only
    /// localization hook the core offers.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripwire::{FieldPath, ValidationError};
    ///
    /// let error = ValidationError::at(&FieldPath::new("x"), "{var_name} is not a string");
    /// let german = error.message_with(|t| match t {
    ///     "{var_name} is not a string" => "{var_name} ist keine Zeichenkette".to_string(),
    ///     other => other.to_string(),
    /// });
    /// assert_eq!(german, "x ist keine Zeichenkette");
    /// ```
    pub fn message_with(&self, translate: impl FnOnce(&'static str) -> String) -> String {
        render(&translate(self.template), &self.args)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

// ValidationError must stay shareable across threads so composed schemas can
// be used concurrently. These assertions fail to compile if a field change
// breaks that.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

/// Substitutes `{name}` placeholders in a template with named arguments.
///
/// Placeholders with no matching argument are left as-is, as are braces that
/// do not form a placeholder.
pub fn render(template: &str, args: &[(&'static str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match args.iter().find(|(n, _)| *n == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
