//! Immutable record instances.

use std::fmt;
use std::sync::Arc;

use mould_core::render;
use mould_core::{Map, Value};
use mould_schema::{Accessor, SchemaError};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::RecordError;
use crate::record_type::RecordType;

/// A validated, immutable instance of a [`RecordType`].
///
/// Records never change. [`set`](Self::set), [`remove`](Self::remove) and
/// [`update`](Self::update) return new records built through the same
/// construction path as [`RecordType::create`], so every record that exists
/// satisfies its shape.
#[derive(Clone)]
pub struct Record {
    record_type: RecordType,
    accessors: Vec<Accessor>,
    state: Arc<Map>,
}

impl Record {
    /// Accessors arrive in declaration order; the backing state follows it.
    pub(crate) fn new(record_type: RecordType, accessors: Vec<Accessor>) -> Self {
        let state: Map = accessors
            .iter()
            .map(|accessor| (accessor.name(), accessor.get().clone()))
            .collect();
        Self {
            record_type,
            accessors,
            state: Arc::new(state),
        }
    }

    #[must_use]
    pub const fn record_type(&self) -> &RecordType {
        &self.record_type
    }

    /// The stored value of a present field.
    ///
    /// Shared values come back as the same allocation that was stored, so
    /// `get` on a nested object always yields the same reference.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.accessor(name).map(Accessor::get)
    }

    /// The read-only property for a present field.
    #[must_use]
    pub fn accessor(&self, name: &str) -> Option<&Accessor> {
        self.accessors.iter().find(|accessor| accessor.name() == name)
    }

    /// Whether the field is present, enumerable or not.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.accessor(name).is_some()
    }

    /// Enumerable present fields, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(name, _)| name)
    }

    /// Enumerable present fields and their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.accessors
            .iter()
            .filter(|accessor| accessor.is_enumerable())
            .map(|accessor| (accessor.name(), accessor.get()))
    }

    /// Number of enumerable present fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shallow copy of the backing state, hidden fields included.
    #[must_use]
    pub fn to_map(&self) -> Map {
        (*self.state).clone()
    }

    /// A new record with one field replaced.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::UnknownField` if the shape does not declare
    /// `field`, and `SchemaError::InvalidFieldValue` if `value` fails the
    /// field's rule. `self` is untouched either way.
    pub fn set(&self, field: &str, value: impl Into<Value>) -> Result<Self, RecordError> {
        self.check_declared(field)?;
        let mut next = self.to_map();
        next.insert(field, value.into());
        self.record_type.construct(&next)
    }

    /// A new record without `field`.
    ///
    /// A field with a default comes back with the default.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::UnknownField` if the shape does not declare
    /// `field`, and `SchemaError::MissingField` if the field is required and
    /// has no default.
    pub fn remove(&self, field: &str) -> Result<Self, RecordError> {
        self.check_declared(field)?;
        let mut next = self.to_map();
        next.remove(field);
        self.record_type.construct(&next)
    }

    /// A new record with several fields replaced at once.
    ///
    /// All changes go through one construction, so either every change
    /// applies or none does.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::UnknownField` for the first undeclared field, or
    /// the validation error of the combined result.
    pub fn update<K, I>(&self, changes: I) -> Result<Self, RecordError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut next = self.to_map();
        for (field, value) in changes {
            let field = field.into();
            self.check_declared(&field)?;
            next.insert(field, value);
        }
        self.record_type.construct(&next)
    }

    /// Direct write to a property. Always fails.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ImmutableWrite` for every field name, declared
    /// or not, present or not.
    pub fn assign(&self, field: &str, value: impl Into<Value>) -> Result<(), RecordError> {
        tracing::debug!(record_type = %self.record_type.name(), field, "write to record property rejected");
        match self.accessor(field) {
            Some(accessor) => accessor.set(value.into()).map_err(RecordError::from),
            None => Err(SchemaError::ImmutableWrite {
                field: field.to_string(),
            }
            .into()),
        }
    }

    /// Reconfiguring a property. Always fails.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Redefinition` for every field name.
    pub fn redefine(&self, field: &str) -> Result<(), RecordError> {
        tracing::debug!(record_type = %self.record_type.name(), field, "property redefinition rejected");
        Err(RecordError::Redefinition {
            field: field.to_string(),
        })
    }

    fn check_declared(&self, field: &str) -> Result<(), RecordError> {
        if self.record_type.schema().has_field(field) {
            Ok(())
        } else {
            tracing::debug!(record_type = %self.record_type.name(), field, "undeclared field");
            Err(RecordError::UnknownField {
                field: field.to_string(),
                record_type: self.record_type.name().to_string(),
            })
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.record_type.name() == other.record_type.name() && self.state == other.state
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_depth = self.record_type.options().max_depth;
        f.write_str(&render::render_entries(self.iter(), max_depth))
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {self}", self.record_type.name())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_map(None)?;
        for (name, value) in self.iter().filter(|(_, v)| v.is_json_visible()) {
            out.serialize_entry(name, value)?;
        }
        out.end()
    }
}
