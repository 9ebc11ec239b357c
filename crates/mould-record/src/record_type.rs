//! Record types: a named, frozen schema plus the construction path every
//! record goes through.

use std::sync::Arc;

use mould_core::{Map, Value};
use mould_schema::{RecordSchema, SchemaError};

use crate::error::RecordError;
use crate::factory::FactoryOptions;
use crate::record::Record;

/// A declared record shape.
///
/// Cheap to clone; every clone and every record created from it share the
/// same schema.
#[derive(Debug, Clone)]
pub struct RecordType {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    name: String,
    schema: RecordSchema,
    options: FactoryOptions,
}

impl RecordType {
    pub(crate) fn new(name: String, schema: RecordSchema, options: FactoryOptions) -> Self {
        Self {
            inner: Arc::new(Inner {
                name,
                schema,
                options,
            }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    #[must_use]
    pub fn schema(&self) -> &RecordSchema {
        &self.inner.schema
    }

    #[must_use]
    pub fn options(&self) -> &FactoryOptions {
        &self.inner.options
    }

    /// Construct a record from raw input.
    ///
    /// `undefined` and `null` count as an empty mapping. Unknown keys are
    /// dropped, absent fields with defaults are filled, then the result is
    /// validated and frozen.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::InvalidInput` for non-mapping input, and
    /// `SchemaError::MissingField` or `SchemaError::InvalidFieldValue` when
    /// validation fails. No record is produced on failure.
    pub fn create(&self, input: &Value) -> Result<Record, RecordError> {
        match input {
            Value::Undefined | Value::Null => self.construct(&Map::new()),
            Value::Object(entries) => self.construct(entries),
            other => {
                tracing::debug!(record_type = %self.name(), found = other.type_label(), "non-mapping input rejected");
                Err(SchemaError::InvalidInput {
                    found: other.type_label().to_string(),
                }
                .into())
            }
        }
    }

    /// [`create`](Self::create) from a mapping.
    ///
    /// # Errors
    ///
    /// `SchemaError::MissingField` or `SchemaError::InvalidFieldValue`.
    pub fn create_from_map(&self, input: &Map) -> Result<Record, RecordError> {
        self.construct(input)
    }

    /// [`create`](Self::create) from JSON.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub fn create_from_json(&self, input: serde_json::Value) -> Result<Record, RecordError> {
        self.create(&Value::from(input))
    }

    /// A record built from no input: defaults only.
    ///
    /// # Errors
    ///
    /// `SchemaError::MissingField` if a required field has no default.
    pub fn empty(&self) -> Result<Record, RecordError> {
        self.construct(&Map::new())
    }

    /// The single construction path: filter, apply defaults, validate, freeze.
    pub(crate) fn construct(&self, input: &Map) -> Result<Record, RecordError> {
        let schema = self.schema();
        let prepared = schema.apply_defaults(&schema.filter_to_known_fields(input));

        if let Err(error) = schema.validate_map(&prepared) {
            tracing::debug!(record_type = %self.name(), %error, "record construction rejected");
            return Err(error.into());
        }

        let accessors = schema.accessors_for(&prepared);
        tracing::trace!(record_type = %self.name(), fields = accessors.len(), "record constructed");
        Ok(Record::new(self.clone(), accessors))
    }

    /// True when both handles refer to the same declaration.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::create_record_type;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn people() -> RecordType {
        create_record_type(
            &Value::from(json!({
                "name": {"type": "string", "required": true},
                "age": {"type": "number"},
                "role": {"default": "member"}
            })),
            Some("Person"),
        )
        .unwrap()
    }

    #[rstest]
    #[case(Value::from(1), "number")]
    #[case(Value::from("Ada"), "string")]
    #[case(Value::from(false), "boolean")]
    #[case(Value::from(json!(["Ada", 36])), "array")]
    fn rejects_non_mapping_input(#[case] input: Value, #[case] found: &str) {
        let err = people().create(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Invalid input: expected an object or nothing, got {found}")
        );
        assert_eq!(
            err,
            RecordError::Schema(SchemaError::InvalidInput {
                found: found.into()
            })
        );
    }

    #[test]
    fn nothing_is_an_empty_mapping() {
        let record_type = create_record_type(&Value::from(json!({"a": {"default": 1}})), None)
            .unwrap();
        for input in [Value::Undefined, Value::Null] {
            let record = record_type.create(&input).unwrap();
            assert_eq!(record.get("a"), Some(&Value::from(1)));
        }
    }

    #[test]
    fn empty_fails_without_required_defaults() {
        assert!(matches!(
            people().empty(),
            Err(RecordError::Schema(SchemaError::MissingField { field, .. })) if field == "name"
        ));
    }

    #[test]
    fn json_entry_point_matches_create() {
        let record_type = people();
        let from_json = record_type
            .create_from_json(json!({"name": "Ada", "age": 36}))
            .unwrap();
        let from_value = record_type
            .create(&Value::from(json!({"age": 36, "name": "Ada"})))
            .unwrap();
        assert_eq!(from_json, from_value);
        assert_eq!(from_json.keys().collect::<Vec<_>>(), vec!["name", "age", "role"]);
    }

    #[test]
    fn records_share_their_type() {
        let record_type = people();
        let record = record_type.create_from_json(json!({"name": "Ada"})).unwrap();
        assert!(record.record_type().ptr_eq(&record_type));
        assert!(!record_type.ptr_eq(&people()));
    }
}
