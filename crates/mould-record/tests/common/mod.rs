//! Shared helpers for mould-record integration tests.

#![allow(dead_code)]

use mould_core::{Function, Value};
use mould_record::{RecordType, create_record_type};
use serde_json::json;

/// Install a test subscriber filtered by `MOULD_LOG` (e.g. `MOULD_LOG=mould_record=trace`).
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("MOULD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// `{a: {default: 'A'}, b: {type: 'number'}, c: {type: v => v > 5}}`
pub fn sample_type() -> RecordType {
    init_tracing();
    let gt5 = Function::predicate("gt5", |v| v.as_f64().is_some_and(|n| n > 5.0));
    let shape = Value::object([
        ("a", Value::from(json!({"default": "A"}))),
        ("b", Value::from(json!({"type": "number"}))),
        ("c", Value::object([("type", Value::from(gt5))])),
    ]);
    create_record_type(&shape, Some("Sample")).expect("sample shape is valid")
}

/// A shape with a required field, an optional typed field and a defaulted one.
pub fn person_type() -> RecordType {
    init_tracing();
    create_record_type(
        &Value::from(json!({
            "name": {"type": "string", "required": true},
            "age": {"type": "number"},
            "role": {"type": "string", "default": "member"}
        })),
        Some("Person"),
    )
    .expect("person shape is valid")
}
