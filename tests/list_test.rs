//! Integration tests for list and tuple checks.

use serde_json::{json, Value};
use tripwire::{Check, FieldPath, ValueCheck, Validator};

fn root() -> FieldPath {
    FieldPath::new("x")
}

#[test]
fn test_list_validates_each_element() {
    let check = Check::list(Check::integer());

    assert_eq!(check.check(&json!([1, 2, 3]), &root()).unwrap(), vec![1, 2, 3]);
    assert_eq!(check.check(&json!([]), &root()).unwrap(), Vec::<i64>::new());
}

#[test]
fn test_list_rejects_non_sequences() {
    let check = Check::list(Check::integer());
    for bad in [json!(1), json!("ok"), json!({}), json!(null)] {
        let error = check.check(&bad, &root()).unwrap_err();
        assert_eq!(error.message(), "x is not a list");
    }
}

#[test]
fn test_list_element_failure_names_index() {
    let check = Check::list(Check::string());
    let error = check.check(&json!(["a", "b", 3]), &root()).unwrap_err();
    assert_eq!(error.message(), "x[2] is not a string");
}

#[test]
fn test_list_stops_at_first_bad_element() {
    let check = Check::list(Check::integer());
    let error = check.check(&json!([1, "a", "b"]), &root()).unwrap_err();
    assert_eq!(error.message(), "x[1] is not an integer");
}

#[test]
fn test_list_exact_length() {
    let check = Check::list(Check::integer()).length(2);

    assert!(check.check(&json!([1, 2]), &root()).is_ok());

    let error = check.check(&json!([1, 2, 3]), &root()).unwrap_err();
    assert_eq!(error.message(), "x should have exactly 2 items");

    let error = check.check(&json!([1]), &root()).unwrap_err();
    assert_eq!(error.message(), "x should have exactly 2 items");
}

#[test]
fn test_nested_list_paths_compose() {
    let check = Check::list(Check::list(Check::integer()));
    let error = check
        .check(&json!([[1], [2, "x"]]), &root())
        .unwrap_err();
    assert_eq!(error.message(), "x[1][1] is not an integer");
}

#[test]
fn test_tuple_positional_validation() {
    let check = Check::tuple(vec![
        Box::new(Check::string()) as Box<dyn ValueCheck>,
        Box::new(Check::integer()),
    ]);

    let validated = check.check(&json!(["a", 5]), &root()).unwrap();
    assert_eq!(validated, vec![json!("a"), json!(5)]);
}

#[test]
fn test_tuple_rejects_non_sequences() {
    let check = Check::tuple(vec![Box::new(Check::string()) as Box<dyn ValueCheck>]);
    let error = check.check(&json!("a"), &root()).unwrap_err();
    assert_eq!(error.message(), "x is not a tuple");
}

#[test]
fn test_tuple_arity_mismatch() {
    let check = Check::tuple(vec![
        Box::new(Check::string()) as Box<dyn ValueCheck>,
        Box::new(Check::integer()),
    ]);

    let error = check.check(&json!(["a"]), &root()).unwrap_err();
    assert_eq!(error.message(), "x should have exactly 2 items");

    let error = check.check(&json!(["a", 1, 2]), &root()).unwrap_err();
    assert_eq!(error.message(), "x should have exactly 2 items");
}

#[test]
fn test_tuple_position_failure_names_index() {
    let check = Check::tuple(vec![
        Box::new(Check::string()) as Box<dyn ValueCheck>,
        Box::new(Check::integer()),
    ]);

    let error = check.check(&json!(["a", "b"]), &root()).unwrap_err();
    assert_eq!(error.message(), "x[1] is not an integer");
}

#[test]
fn test_list_to_value_preserves_order() {
    let check = Check::list(Check::string());
    let validated = check
        .check_to_value(&json!(["c", "a", "b"]), &root())
        .unwrap();
    assert_eq!(validated, Value::Array(vec![json!("c"), json!("a"), json!("b")]));
}
