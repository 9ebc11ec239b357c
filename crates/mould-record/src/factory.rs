//! Record type creation.

use mould_config::{ConfigError, MouldConfig};
use mould_core::Value;
use mould_core::render::DEFAULT_MAX_DEPTH;
use mould_schema::{RecordSchema, SchemaError};

use crate::record_type::RecordType;

/// Settings shared by every record type a factory creates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryOptions {
    /// Name given to record types created without one.
    pub default_type_name: String,
    /// Nesting depth used when rendering records.
    pub max_depth: usize,
}

impl Default for FactoryOptions {
    fn default() -> Self {
        Self {
            default_type_name: "Record".to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl From<&MouldConfig> for FactoryOptions {
    fn from(config: &MouldConfig) -> Self {
        Self {
            default_type_name: config.general.default_type_name.clone(),
            max_depth: config.display.max_depth,
        }
    }
}

/// Creates [`RecordType`]s from shapes.
#[derive(Debug, Clone, Default)]
pub struct RecordFactory {
    options: FactoryOptions,
}

impl RecordFactory {
    #[must_use]
    pub const fn new(options: FactoryOptions) -> Self {
        Self { options }
    }

    /// Build a factory from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the configuration fails
    /// [`MouldConfig::validate`].
    pub fn from_config(config: &MouldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(FactoryOptions::from(config)))
    }

    /// Load configuration from files and `MOULD_*` variables, then build a
    /// factory from it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_config(&MouldConfig::load()?)
    }

    #[must_use]
    pub const fn options(&self) -> &FactoryOptions {
        &self.options
    }

    /// Declare a record type from a raw shape.
    ///
    /// # Errors
    ///
    /// Propagates `SchemaError::InvalidSchema` and
    /// `SchemaError::InvalidDescriptor` from schema construction.
    pub fn create(&self, shape: &Value, name: Option<&str>) -> Result<RecordType, SchemaError> {
        let schema = RecordSchema::from_definition(shape)?;
        Ok(self.create_from_schema(schema, name))
    }

    /// Declare a record type from an already-built schema.
    #[must_use]
    pub fn create_from_schema(&self, schema: RecordSchema, name: Option<&str>) -> RecordType {
        let name = name.unwrap_or(self.options.default_type_name.as_str());
        tracing::debug!(record_type = name, fields = schema.len(), "record type created");
        RecordType::new(name.to_string(), schema, self.options.clone())
    }
}

/// Declare a record type from a raw shape with default options.
///
/// `name` only labels the type; it defaults to `"Record"`.
///
/// # Errors
///
/// Returns `SchemaError::InvalidSchema` if the shape is not a non-empty object,
/// a default fails its type, or a required field defaults to `undefined`.
/// Returns `SchemaError::InvalidDescriptor` for malformed field rules.
pub fn create_record_type(shape: &Value, name: Option<&str>) -> Result<RecordType, SchemaError> {
    RecordFactory::default().create(shape, name)
}
