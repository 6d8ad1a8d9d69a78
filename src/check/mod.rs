//! The check combinators and the [`Check`] factory that builds them.
//!
//! Each check is a standalone struct implementing [`Validator`]; the
//! factory exists so composed checks read as one declarative expression:
//!
//! ```rust
//! use tripwire::{Check, FieldPath, Validator};
//! use serde_json::json;
//!
//! let event = Check::dict()
//!     .required("id", Check::integer())
//!     .required("tags", Check::list(Check::string()))
//!     .optional("note", Check::string());
//!
//! let value = json!({"id": 7, "tags": ["a", "b"]});
//! assert!(event.check(&value, &FieldPath::new("event")).is_ok());
//! ```

mod combinators;
mod dict;
mod list;
mod numeric;
mod string;
mod traits;

pub use combinators::{
    Either, EqualsCheck, OptionalCheck, OrCheck, StringOrInt, StringOrIntCheck, StringOrIntList,
    StringOrIntListCheck, UnionCheck,
};
pub use dict::{DictCheck, MapCheck};
pub use list::{ListCheck, TupleCheck};
pub use numeric::{BoolCheck, FloatCheck, IntCheck};
pub use string::{DateCheck, HexColorCheck, StringCheck, UrlCheck, UrlPatternCheck};
pub use traits::{ValueCheck, Validator};

use serde_json::Value;

/// Factory for all built-in checks.
///
/// Checks are plain structs and can be constructed directly; the factory
/// keeps composed definitions readable.
pub struct Check;

impl Check {
    /// Any string.
    pub fn string() -> StringCheck {
        StringCheck::new()
    }

    /// A string of at most 50 characters, the conventional cap for names
    /// and other compact identifiers.
    pub fn short_string() -> StringCheck {
        StringCheck::new().capped(50)
    }

    /// A string of at most 500 characters.
    pub fn long_string() -> StringCheck {
        StringCheck::new().capped(500)
    }

    /// A string holding an ISO `YYYY-MM-DD` calendar date.
    pub fn date() -> DateCheck {
        DateCheck
    }

    /// A string holding a `#rgb`-style hex color code.
    pub fn hex_color() -> HexColorCheck {
        HexColorCheck
    }

    /// An integer, excluding booleans and anything with a fractional part.
    pub fn integer() -> IntCheck {
        IntCheck::new()
    }

    /// A floating-point number. Integer-shaped numbers do not qualify.
    pub fn float() -> FloatCheck {
        FloatCheck
    }

    /// A boolean.
    pub fn boolean() -> BoolCheck {
        BoolCheck
    }

    /// Exactly the given value.
    pub fn equals(expected: impl Into<Value>) -> EqualsCheck {
        EqualsCheck::new(expected)
    }

    /// A list whose items all pass `item`.
    pub fn list<S: Validator>(item: S) -> ListCheck<S> {
        ListCheck::new(item)
    }

    /// A fixed-arity list validated positionally.
    pub fn tuple(items: Vec<Box<dyn ValueCheck>>) -> TupleCheck {
        TupleCheck::new(items)
    }

    /// An object validated key by key. Configure with
    /// [`required`](DictCheck::required), [`optional`](DictCheck::optional),
    /// [`values`](DictCheck::values) and [`strict`](DictCheck::strict).
    pub fn dict() -> DictCheck {
        DictCheck::new()
    }

    /// An object whose values all pass `values`, keeping their typed form.
    pub fn map<V: Validator>(values: V) -> MapCheck<V> {
        MapCheck::new(values)
    }

    /// Null, or a value passing `inner`.
    pub fn optional<S: Validator>(inner: S) -> OptionalCheck<S> {
        OptionalCheck::new(inner)
    }

    /// The first of `alternatives` to accept the value, or one generic
    /// failure.
    pub fn union(alternatives: Vec<Box<dyn ValueCheck>>) -> UnionCheck {
        UnionCheck::new(alternatives)
    }

    /// `first`, or failing that `second`, keeping the typed result as an
    /// [`Either`].
    pub fn either<A: Validator, B: Validator>(first: A, second: B) -> OrCheck<A, B> {
        OrCheck::new(first, second)
    }

    /// A string or an integer.
    pub fn string_or_int() -> StringOrIntCheck {
        StringOrIntCheck
    }

    /// A string, or a list of integers.
    pub fn string_or_int_list() -> StringOrIntListCheck {
        StringOrIntListCheck
    }

    /// A string accepted by the caller's URL predicate.
    pub fn url<F>(is_url: F) -> UrlCheck<F>
    where
        F: Fn(&str) -> bool + Send + Sync,
    {
        UrlCheck::new(is_url)
    }

    /// A URL pattern with exactly one `%(username)s` placeholder whose
    /// substituted form is accepted by the caller's URL predicate.
    pub fn external_account_url_pattern<F>(is_url: F) -> UrlPatternCheck<F>
    where
        F: Fn(&str) -> bool + Send + Sync,
    {
        UrlPatternCheck::new(is_url)
    }
}
