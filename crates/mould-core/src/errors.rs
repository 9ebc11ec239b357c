//! Cross-cutting error types for Mould.
//!
//! Domain-specific errors (`SchemaError`, `RecordError`, `ConfigError`) live in
//! their respective crates.

use thiserror::Error;

/// Errors that can be raised by the value model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A type tag string did not name any known kind.
    #[error("Unknown type tag: '{0}'")]
    UnknownKind(String),
}
