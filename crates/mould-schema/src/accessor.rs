//! Read-only record properties.

use mould_core::Value;

use crate::error::SchemaError;

/// A read-only property generated for one present field.
///
/// `get` hands out the stored value itself; shared values (objects, arrays,
/// functions) keep their identity across reads. `set` exists so every
/// property has a write path, and that path always fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Accessor {
    name: String,
    value: Value,
    enumerable: bool,
}

impl Accessor {
    pub(crate) const fn new(name: String, value: Value, enumerable: bool) -> Self {
        Self {
            name,
            value,
            enumerable,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn get(&self) -> &Value {
        &self.value
    }

    #[must_use]
    pub const fn is_enumerable(&self) -> bool {
        self.enumerable
    }

    /// Always fails.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ImmutableWrite` naming this property, whatever
    /// the argument.
    pub fn set(&self, _value: Value) -> Result<(), SchemaError> {
        Err(SchemaError::ImmutableWrite {
            field: self.name.clone(),
        })
    }
}
