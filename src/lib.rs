//! # Tripwire
//!
//! Composable validators for untyped JSON-like values that report errors
//! by field path.
//!
//! ## Overview
//!
//! Callers decode an external payload into a [`serde_json::Value`], compose
//! a check ahead of time, and run it with a top-level field name. On success
//! they get the value narrowed to its expected Rust shape; on failure they
//! get one [`ValidationError`] carrying a message template, its named
//! arguments, and the path of the offending field. Validation stops at the
//! first failure, which propagates unchanged through every enclosing check.
//!
//! ## Core Types
//!
//! - [`FieldPath`]: the location of a value in a nested structure
//!   (e.g., `events[0]["sender"]`)
//! - [`ValidationError`]: a single failure with its template, arguments,
//!   and path
//! - [`Validator`]: the contract every check implements, with a typed
//!   `Output`
//! - [`Check`]: entry point for building checks
//!
//! ## Example
//!
//! ```rust
//! use tripwire::{Check, FieldPath, Validator};
//! use serde_json::json;
//!
//! let profile = Check::dict()
//!     .required("name", Check::string().required())
//!     .required("age", Check::integer().range(0..=150))
//!     .optional("color", Check::hex_color())
//!     .strict();
//!
//! let value = json!({"name": "Iago", "age": 32});
//! assert!(profile.check(&value, &FieldPath::new("profile")).is_ok());
//!
//! let value = json!({"name": "Iago", "age": "32"});
//! let error = profile.check(&value, &FieldPath::new("profile")).unwrap_err();
//! assert_eq!(error.message(), r#"profile["age"] is not an integer"#);
//! ```

pub mod check;
pub mod error;
pub mod path;
pub mod widgets;

pub use check::{
    BoolCheck, Check, DateCheck, DictCheck, Either, EqualsCheck, FloatCheck, HexColorCheck,
    IntCheck, ListCheck, MapCheck, OptionalCheck, OrCheck, StringCheck, StringOrInt,
    StringOrIntCheck, StringOrIntList, StringOrIntListCheck, TupleCheck, UnionCheck, UrlCheck,
    UrlPatternCheck, ValueCheck, Validator,
};
pub use error::{render, ErrorKind, ValidationError, ValidationResult};
pub use path::{FieldPath, PathSegment};
