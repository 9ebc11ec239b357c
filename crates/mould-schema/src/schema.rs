//! Record shapes.
//!
//! A `RecordSchema` is the frozen, ordered mapping from field name to
//! [`FieldDescriptor`]. Declaration order is kept: fields are validated in
//! that order, and records enumerate their properties in that order.
//!
//! Building a record runs three steps over the raw input, in this order:
//!
//! ```text
//! filter_to_known_fields → apply_defaults → validate
//! ```
//!
//! so a required field that declares a default can never be missing.

use mould_core::render::{self, DEFAULT_MAX_DEPTH};
use mould_core::{Map, Value};

use crate::accessor::Accessor;
use crate::descriptor::FieldDescriptor;
use crate::error::SchemaError;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    fields: Vec<(String, FieldDescriptor)>,
}

impl RecordSchema {
    /// Build a schema from typed descriptors, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::InvalidSchema` if there are no fields, a name is
    /// declared twice, a default does not satisfy its type, or a required
    /// field defaults to `undefined`.
    pub fn new<K, I>(fields: I) -> Result<Self, SchemaError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FieldDescriptor)>,
    {
        let mut declared: Vec<(String, FieldDescriptor)> = Vec::new();
        for (name, descriptor) in fields {
            let name = name.into();
            if declared.iter().any(|(existing, _)| *existing == name) {
                return Err(SchemaError::InvalidSchema(format!(
                    "field '{name}' is declared more than once"
                )));
            }
            declared.push((name, descriptor));
        }
        Self::from_fields(declared)
    }

    /// Build a schema from a raw shape: an object mapping each field name to
    /// a raw rule (see [`FieldDescriptor::from_definition`]).
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::InvalidSchema` if the shape is not a non-empty
    /// object, a default fails its type, or a required field defaults to
    /// `undefined`. Propagates
    /// `SchemaError::InvalidDescriptor` (annotated with the field name) for
    /// malformed rules.
    pub fn from_definition(shape: &Value) -> Result<Self, SchemaError> {
        let Some(entries) = shape.as_object() else {
            return Err(SchemaError::InvalidSchema(format!(
                "shape must be an object, got {}",
                render::render(shape, DEFAULT_MAX_DEPTH)
            )));
        };

        let fields = entries
            .iter()
            .map(|(name, rule)| {
                FieldDescriptor::from_definition(rule)
                    .map(|descriptor| (name.to_string(), descriptor))
                    .map_err(|e| e.for_field(name))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_fields(fields)
    }

    fn from_fields(fields: Vec<(String, FieldDescriptor)>) -> Result<Self, SchemaError> {
        if fields.is_empty() {
            return Err(SchemaError::InvalidSchema(
                "shape must declare at least one field".into(),
            ));
        }

        for (name, descriptor) in &fields {
            let Some(default) = descriptor.default_value() else {
                continue;
            };
            // Requiredness is checked separately below.
            if !descriptor.type_rule().matches(default) {
                return Err(SchemaError::InvalidSchema(format!(
                    "field '{name}': default value is not valid according to the type"
                )));
            }
            // An undefined default would leave a required field unsatisfied.
            if descriptor.is_required() && default.is_undefined() {
                return Err(SchemaError::InvalidSchema(format!(
                    "field '{name}': a required field cannot default to undefined"
                )));
            }
        }

        tracing::debug!(fields = fields.len(), "record schema built");
        Ok(Self { fields })
    }

    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|(declared, _)| declared == name)
            .map(|(_, descriptor)| descriptor)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        self.fields.iter().map(|(name, d)| (name.as_str(), d))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false for a constructed schema; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Copy of `input` holding only declared fields. Unknown keys are
    /// dropped silently.
    #[must_use]
    pub fn filter_to_known_fields(&self, input: &Map) -> Map {
        input
            .iter()
            .filter(|(key, _)| self.has_field(key))
            .map(|(key, value)| (key, value.clone()))
            .collect()
    }

    /// Copy of `input` where every absent field that declares a default is
    /// set to it. Absent fields without a default stay absent.
    #[must_use]
    pub fn apply_defaults(&self, input: &Map) -> Map {
        let mut output = input.clone();
        for (name, descriptor) in self.iter() {
            if output.contains_key(name) {
                continue;
            }
            if let Some(default) = descriptor.default_value() {
                output.insert(name, default.clone());
            }
        }
        output
    }

    /// Validate raw input against every declared field, in declaration order.
    ///
    /// # Errors
    ///
    /// - `SchemaError::InvalidInput` if `input` is neither nothing
    ///   (`undefined`/`null`) nor an object.
    /// - `SchemaError::MissingField` for the first required field absent
    ///   from `input`.
    /// - `SchemaError::InvalidFieldValue` for the first present field whose
    ///   value fails its descriptor.
    pub fn validate(&self, input: &Value) -> Result<(), SchemaError> {
        match input {
            Value::Undefined | Value::Null => self.validate_map(&Map::new()),
            Value::Object(entries) => self.validate_map(entries),
            other => Err(SchemaError::InvalidInput {
                found: other.type_label().to_string(),
            }),
        }
    }

    /// [`validate`](Self::validate) for input already known to be a mapping.
    ///
    /// # Errors
    ///
    /// `SchemaError::MissingField` or `SchemaError::InvalidFieldValue`, as
    /// for [`validate`](Self::validate).
    pub fn validate_map(&self, input: &Map) -> Result<(), SchemaError> {
        for (name, descriptor) in self.iter() {
            match input.get(name) {
                None if descriptor.is_required() => {
                    tracing::debug!(field = name, "required field missing");
                    return Err(SchemaError::MissingField {
                        field: name.to_string(),
                        input: render::render_entries(input.iter(), DEFAULT_MAX_DEPTH),
                    });
                }
                Some(value) if !descriptor.is_valid(value) => {
                    tracing::debug!(field = name, found = value.type_label(), "field value rejected");
                    return Err(SchemaError::InvalidFieldValue {
                        field: name.to_string(),
                        value: render::render(value, DEFAULT_MAX_DEPTH),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// One read-only accessor per declared field present in `input`, in
    /// declaration order. Absent fields get none.
    #[must_use]
    pub fn accessors_for(&self, input: &Map) -> Vec<Accessor> {
        self.iter()
            .filter_map(|(name, descriptor)| {
                input.get(name).map(|value| {
                    Accessor::new(name.to_string(), value.clone(), descriptor.is_enumerable())
                })
            })
            .collect()
    }
}
