//! Behavioural properties of records: read-back, copy-on-write updates and
//! the guarantees every constructed record keeps.

mod common;

use common::{person_type, sample_type};
use mould_core::Value;
use mould_record::{Record, RecordError};
use mould_schema::SchemaError;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn ada() -> Record {
    person_type()
        .create_from_json(json!({"name": "Ada", "age": 36}))
        .unwrap()
}

#[test]
fn empty_input_yields_defaults_only() {
    let record = sample_type().create_from_json(json!({})).unwrap();
    assert_eq!(record.to_string(), r#"{"a":"A"}"#);
    assert!(!record.has("b"));
    assert_eq!(record.get("b"), None);
}

#[test]
fn wrong_kind_is_rejected_at_the_field() {
    let err = sample_type().create_from_json(json!({"b": "x"})).unwrap_err();
    assert_eq!(
        err,
        RecordError::Schema(SchemaError::InvalidFieldValue {
            field: "b".into(),
            value: "\"x\"".into(),
        })
    );
}

#[test]
fn predicate_fields_accept_matching_values() {
    let record = sample_type().create_from_json(json!({"c": 6})).unwrap();
    assert_eq!(record.to_string(), r#"{"a":"A","c":6}"#);

    let updated = record.set("b", 3).unwrap();
    assert_eq!(updated.to_string(), r#"{"a":"A","b":3,"c":6}"#);
}

#[test]
fn predicate_fields_reject_failing_values() {
    let err = sample_type().create_from_json(json!({"c": 5})).unwrap_err();
    assert!(matches!(
        err,
        RecordError::Schema(SchemaError::InvalidFieldValue { ref field, .. }) if field == "c"
    ));
}

#[test]
fn provided_values_win_over_defaults() {
    let record = person_type()
        .create_from_json(json!({"name": "Ada", "role": "admin"}))
        .unwrap();
    assert_eq!(record.get("role"), Some(&Value::from("admin")));
    assert!(!record.has("age"));
}

#[test]
fn set_to_current_value_is_idempotent() {
    let record = ada();
    for field in ["name", "age", "role"] {
        let current = record.get(field).unwrap().clone();
        assert_eq!(record.set(field, current).unwrap(), record);
    }
}

#[test]
fn remove_then_set_round_trips() {
    let record = ada();
    let age = record.get("age").unwrap().clone();
    let restored = record.remove("age").unwrap().set("age", age).unwrap();
    assert_eq!(restored, record);
    assert_eq!(restored.to_string(), record.to_string());
}

#[test]
fn remove_restores_defaults() {
    let record = person_type()
        .create_from_json(json!({"name": "Ada", "role": "admin"}))
        .unwrap();
    let reset = record.remove("role").unwrap();
    assert_eq!(reset.get("role"), Some(&Value::from("member")));
}

#[test]
fn remove_required_field_fails() {
    let record = ada();
    let err = record.remove("name").unwrap_err();
    assert!(matches!(
        err,
        RecordError::Schema(SchemaError::MissingField { ref field, .. }) if field == "name"
    ));
    assert_eq!(record.get("name"), Some(&Value::from("Ada")));
}

#[test]
fn missing_required_field_is_reported() {
    let err = person_type().create_from_json(json!({"age": 1})).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"Missing required field 'name' in {"age":1,"role":"member"}"#
    );
}

#[test]
fn required_field_with_default_is_always_satisfied() {
    let record_type = mould_record::create_record_type(
        &Value::from(json!({
            "status": {"type": "string", "required": true, "default": "draft"}
        })),
        None,
    )
    .unwrap();

    let record = record_type.empty().unwrap();
    assert_eq!(record.get("status"), Some(&Value::from("draft")));

    let published = record.set("status", "published").unwrap();
    assert_eq!(
        published.remove("status").unwrap().get("status"),
        Some(&Value::from("draft"))
    );
}

#[rstest]
#[case::set_name("name")]
#[case::set_age("age")]
#[case::set_unknown("nickname")]
fn direct_assignment_always_fails(#[case] field: &str) {
    let record = ada();
    assert_eq!(
        record.assign(field, "anything"),
        Err(RecordError::Schema(SchemaError::ImmutableWrite {
            field: field.into()
        }))
    );
    assert_eq!(record, ada());
}

#[test]
fn accessor_writes_fail_too() {
    let record = ada();
    let accessor = record.accessor("name").unwrap();
    assert!(matches!(
        accessor.set(Value::from("Grace")),
        Err(SchemaError::ImmutableWrite { .. })
    ));
}

#[test]
fn redefinition_fails() {
    assert!(matches!(
        ada().redefine("name"),
        Err(RecordError::Redefinition { ref field }) if field == "name"
    ));
}

#[test]
fn undeclared_fields_are_rejected_by_updates() {
    let record = ada();
    for result in [
        record.set("nickname", "A"),
        record.remove("nickname"),
        record.update([("nickname", Value::from("A"))]),
    ] {
        assert_eq!(
            result.unwrap_err(),
            RecordError::UnknownField {
                field: "nickname".into(),
                record_type: "Person".into(),
            }
        );
    }
    assert_eq!(record, ada());
}

#[test]
fn unknown_constructor_keys_never_appear() {
    let record = person_type()
        .create_from_json(json!({"name": "Ada", "password": "hunter2", "age": 36}))
        .unwrap();
    assert!(!record.has("password"));
    assert_eq!(record.keys().collect::<Vec<_>>(), vec!["name", "age", "role"]);
    assert!(!record.to_map().contains_key("password"));
}

#[test]
fn failed_update_leaves_original_untouched() {
    let record = ada();
    assert!(record.set("age", "old").is_err());
    assert_eq!(record.get("age"), Some(&Value::from(36)));
}

#[test]
fn enumeration_follows_declaration_order() {
    let record = person_type()
        .create_from_json(json!({"role": "admin", "age": 1, "name": "Ada"}))
        .unwrap();
    assert_eq!(record.keys().collect::<Vec<_>>(), vec!["name", "age", "role"]);
}

#[test]
fn required_field_cannot_default_to_undefined() {
    let shape = Value::object([(
        "x",
        Value::object([
            ("required", Value::from(true)),
            ("default", Value::Undefined),
        ]),
    )]);
    assert!(matches!(
        mould_record::create_record_type(&shape, None),
        Err(SchemaError::InvalidSchema(_))
    ));
}

#[test]
fn set_is_idempotent_for_nan() {
    let record = person_type()
        .create(&Value::object([
            ("name", Value::from("Ada")),
            ("age", Value::from(f64::NAN)),
        ]))
        .unwrap();
    let current = record.get("age").unwrap().clone();
    assert_eq!(record.set("age", current).unwrap(), record);
}
