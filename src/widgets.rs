//! Validators for widget payloads and select-field profile data.
//!
//! These are plain compositions of the reusable checks, kept here because
//! their accepted shapes are part of the message protocol rather than the
//! validation core.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::check::{Check, Validator};
use crate::error::{ValidationError, ValidationResult};
use crate::path::FieldPath;

/// Highest index accepted for poll options and todo tasks. This should
/// match the limit enforced by client widgets; it is somewhat arbitrary.
pub const MAX_IDX: i64 = 1000;

/// Failure of a field-data check, which parses serialized JSON before
/// validating it.
#[derive(Debug, Error)]
pub enum FieldDataError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Invalid(#[from] ValidationError),
}

/// Validates the option map sent while creating or editing the choices of
/// a select field in organization settings.
///
/// Keys are arbitrary non-blank identifiers; each value must be exactly
/// `{text, order}` with both entries non-blank strings.
pub fn validate_select_field_data(
    field_data: &Value,
) -> ValidationResult<&Map<String, Value>> {
    let path = FieldPath::new("field_data");
    let obj = match field_data.as_object() {
        Some(obj) => obj,
        None => return Err(ValidationError::at(&path, "{var_name} is not a dict")),
    };

    let option = Check::dict()
        .required("text", Check::string().required())
        .required("order", Check::string().required())
        .strict();

    for (key, value) in obj {
        if key.trim().is_empty() {
            return Err(
                ValidationError::new("'{item}' cannot be blank.").arg("item", "value"),
            );
        }
        option.check(value, &path)?;
    }

    Ok(obj)
}

/// Validates a value a user selected for a choice field against the
/// field's serialized option map. Not used to validate admin data.
pub fn validate_select_field(
    var_name: &str,
    field_data: &str,
    value: &Value,
) -> Result<String, FieldDataError> {
    let path = FieldPath::new(var_name);
    let s = Check::string().check(value, &path)?;
    let field_data_dict: Map<String, Value> = serde_json::from_str(field_data)?;
    if !field_data_dict.contains_key(&s) {
        return Err(
            ValidationError::new("'{value}' is not a valid choice for '{field_name}'.")
                .arg("value", &s)
                .arg("field_name", var_name)
                .into(),
        );
    }
    Ok(s)
}

/// Validates the `widget_content` payload of a message.
///
/// Only `zform` widgets with `choices` data are recognized; any other
/// discriminant fails with a message naming the unrecognized tag.
pub fn validate_widget_content(widget_content: &Value) -> ValidationResult<()> {
    let content = match widget_content.as_object() {
        Some(obj) => obj,
        None => return Err(ValidationError::new("widget_content is not a dict")),
    };

    if !content.contains_key("widget_type") {
        return Err(ValidationError::new("widget_type is not in widget_content"));
    }
    if !content.contains_key("extra_data") {
        return Err(ValidationError::new("extra_data is not in widget_content"));
    }

    let widget_type = &content["widget_type"];
    let extra_data = &content["extra_data"];

    if !extra_data.is_object() {
        return Err(ValidationError::new("extra_data is not a dict"));
    }

    if widget_type == "zform" {
        let zform_type = match extra_data.get("type") {
            Some(t) => t,
            None => return Err(ValidationError::new("zform is missing type field")),
        };

        if zform_type == "choices" {
            let choice = Check::dict()
                .required("short_name", Check::string())
                .required("long_name", Check::string())
                .required("reply", Check::string());

            // "type" is re-checked so it does not read as an extraneous key.
            let checker = Check::dict()
                .required("type", Check::equals("choices"))
                .required("heading", Check::string())
                .required("choices", Check::list(choice));

            checker.check(extra_data, &FieldPath::new("extra_data"))?;
            return Ok(());
        }

        return Err(ValidationError::new("unknown zform type: {type}")
            .arg("type", display_tag(zform_type)));
    }

    Err(ValidationError::new("unknown widget type: {widget_type}")
        .arg("widget_type", display_tag(widget_type)))
}

/// Validates an inbound poll event against its discriminant `type`.
///
/// Editing the question is restricted to the poll's author; that failure
/// carries the unauthorized kind so callers can map it to a permission
/// response instead of a bad-request one.
pub fn validate_poll_data(poll_data: &Value, is_widget_author: bool) -> ValidationResult<()> {
    let path = FieldPath::new("poll data");
    let typed = Check::dict().required("type", Check::string());
    typed.check(poll_data, &path)?;

    let poll_type = &poll_data["type"];

    if poll_type == "vote" {
        let checker = Check::dict()
            .required("type", Check::string())
            .required("key", Check::string())
            .required("vote", Check::integer().one_of([1, -1]))
            .strict();
        checker.check(poll_data, &path)?;
        return Ok(());
    }

    if poll_type == "question" {
        if !is_widget_author {
            return Err(ValidationError::unauthorized(
                "You can't edit a question unless you are the author.",
            ));
        }
        let checker = Check::dict()
            .required("type", Check::string())
            .required("question", Check::string())
            .strict();
        checker.check(poll_data, &path)?;
        return Ok(());
    }

    if poll_type == "new_option" {
        let checker = Check::dict()
            .required("type", Check::string())
            .required("option", Check::string())
            .required("idx", Check::integer().range(0..=MAX_IDX))
            .strict();
        checker.check(poll_data, &path)?;
        return Ok(());
    }

    Err(ValidationError::new("Unknown type for poll data: {type}")
        .arg("type", display_tag(poll_type)))
}

/// Validates an inbound todo-list event against its discriminant `type`.
pub fn validate_todo_data(todo_data: &Value) -> ValidationResult<()> {
    let path = FieldPath::new("todo data");
    let typed = Check::dict().required("type", Check::string());
    typed.check(todo_data, &path)?;

    let todo_type = &todo_data["type"];

    if todo_type == "new_task" {
        let checker = Check::dict()
            .required("type", Check::string())
            .required("key", Check::integer().range(0..=MAX_IDX))
            .required("task", Check::string())
            .required("desc", Check::string())
            .required("completed", Check::boolean())
            .strict();
        checker.check(todo_data, &path)?;
        return Ok(());
    }

    if todo_type == "strike" {
        let checker = Check::dict()
            .required("type", Check::string())
            .required("key", Check::string())
            .strict();
        checker.check(todo_data, &path)?;
        return Ok(());
    }

    Err(ValidationError::new("Unknown type for todo data: {type}")
        .arg("type", display_tag(todo_type)))
}

/// Renders a tag value for an error message, without quoting strings.
fn display_tag(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_field_data_accepts_options() {
        let data = json!({
            "0": {"text": "Vim", "order": "1"},
            "1": {"text": "Emacs", "order": "2"},
        });
        assert!(validate_select_field_data(&data).is_ok());
    }

    #[test]
    fn test_select_field_data_rejects_blank_key() {
        let data = json!({"  ": {"text": "Vim", "order": "1"}});
        let error = validate_select_field_data(&data).unwrap_err();
        assert_eq!(error.message(), "'value' cannot be blank.");
    }

    #[test]
    fn test_select_field_data_rejects_extra_option_key() {
        let data = json!({"0": {"text": "Vim", "order": "1", "color": "red"}});
        let error = validate_select_field_data(&data).unwrap_err();
        assert_eq!(error.message(), "Unexpected arguments: color");
    }

    #[test]
    fn test_select_field_value() {
        let field_data = r#"{"vim": {"text": "Vim", "order": "1"}}"#;
        assert_eq!(
            validate_select_field("editor", field_data, &json!("vim")).unwrap(),
            "vim"
        );

        let error = validate_select_field("editor", field_data, &json!("ed")).unwrap_err();
        assert_eq!(
            error.to_string(),
            "'ed' is not a valid choice for 'editor'."
        );
    }
}
