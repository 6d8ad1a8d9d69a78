//! Tests for concurrent use of a shared composed check.

use serde_json::json;
use std::sync::Arc;
use std::thread;
use tripwire::{Check, FieldPath, Validator};

#[test]
fn test_concurrent_validation() {
    let check = Arc::new(
        Check::dict()
            .required("name", Check::string().required())
            .required("age", Check::integer().range(0..=150))
            .strict(),
    );

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let check = Arc::clone(&check);
            thread::spawn(move || {
                let value = json!({
                    "name": format!("User{}", i),
                    "age": 20 + i,
                });
                let result = check.check(&value, &FieldPath::new("user"));
                assert!(result.is_ok());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_failures_are_independent() {
    let check = Arc::new(Check::list(Check::integer()));

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let check = Arc::clone(&check);
            thread::spawn(move || {
                let value = json!([1, 2, format!("bad{}", i)]);
                let error = check
                    .check(&value, &FieldPath::new("ids"))
                    .unwrap_err();
                assert_eq!(error.message(), "ids[2] is not an integer");
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_boxed_checks_are_shareable() {
    use tripwire::ValueCheck;

    let check: Arc<Box<dyn ValueCheck>> = Arc::new(Box::new(Check::string()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let check = Arc::clone(&check);
            thread::spawn(move || {
                let result = check.check_value(&json!("ok"), &FieldPath::new("x"));
                assert!(result.is_ok());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
