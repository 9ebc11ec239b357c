//! Record error types.

use mould_schema::SchemaError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Construction failed validation, or a property write was attempted.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// `set`, `remove` or `update` named a field the shape does not declare.
    #[error("Unknown field '{field}' for record type '{record_type}'")]
    UnknownField { field: String, record_type: String },

    /// An attempt to reconfigure a record property.
    #[error("Cannot redefine field '{field}'")]
    Redefinition { field: String },
}
