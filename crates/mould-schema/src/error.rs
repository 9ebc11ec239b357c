//! Schema and validation error types.

use thiserror::Error;

/// Errors from shape declaration and input validation.
///
/// Offending values are carried in their rendered form so errors stay
/// `Clone + Eq` and can outlive the input they describe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A per-field rule is malformed.
    #[error("Invalid field descriptor: {0}")]
    InvalidDescriptor(String),

    /// The overall shape is malformed, or a default does not match its type.
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// Constructor input was neither nothing nor a mapping.
    #[error("Invalid input: expected an object or nothing, got {found}")]
    InvalidInput { found: String },

    /// A required field is absent and no default filled it.
    #[error("Missing required field '{field}' in {input}")]
    MissingField { field: String, input: String },

    /// A present value failed its field's type or predicate check.
    #[error("Invalid value for field '{field}': {value}")]
    InvalidFieldValue { field: String, value: String },

    /// A direct write to a record property.
    #[error("Cannot assign to read-only field '{field}'")]
    ImmutableWrite { field: String },
}

impl SchemaError {
    /// Prefix a descriptor error with the field it belongs to.
    pub(crate) fn for_field(self, field: &str) -> Self {
        match self {
            Self::InvalidDescriptor(reason) => {
                Self::InvalidDescriptor(format!("field '{field}': {reason}"))
            }
            other => other,
        }
    }
}
