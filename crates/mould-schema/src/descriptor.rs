//! Per-field validation rules.

use mould_core::{Function, Kind, Value};

use crate::error::SchemaError;

/// Keys accepted in a raw field definition.
const DEFINITION_KEYS: [&str; 4] = ["type", "required", "enumerable", "default"];

/// What a present value must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRule {
    /// Accept anything.
    Any,
    /// The value's runtime kind must equal the tag.
    Kind(Kind),
    /// The predicate applied to the value must return a truthy result.
    Predicate(Function),
}

impl TypeRule {
    /// Parse the `type` entry of a raw definition.
    fn from_definition(value: &Value) -> Result<Self, SchemaError> {
        match value {
            Value::Undefined => Ok(Self::Any),
            Value::String(tag) => tag
                .parse::<Kind>()
                .map(Self::Kind)
                .map_err(|e| SchemaError::InvalidDescriptor(e.to_string())),
            Value::Function(f) => Self::predicate(f.clone()),
            other => Err(SchemaError::InvalidDescriptor(format!(
                "type must be a type tag or a unary predicate, got {}",
                other.type_label()
            ))),
        }
    }

    fn predicate(f: Function) -> Result<Self, SchemaError> {
        if f.arity() == 1 {
            Ok(Self::Predicate(f))
        } else {
            Err(SchemaError::InvalidDescriptor(format!(
                "predicate '{}' must take exactly one argument, takes {}",
                f.name(),
                f.arity()
            )))
        }
    }

    /// Check a present value against the rule.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Any => true,
            Self::Kind(kind) => value.kind() == *kind,
            Self::Predicate(f) => f.call(std::slice::from_ref(value)).is_truthy(),
        }
    }

    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

/// Normalized validation rule for one field.
///
/// Immutable once built. `default` keeps presence separate from value: a
/// descriptor can declare `Value::Undefined` as its default, which is not the
/// same as declaring no default.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    type_rule: TypeRule,
    required: bool,
    enumerable: bool,
    default: Option<Value>,
}

impl Default for FieldDescriptor {
    fn default() -> Self {
        Self::any()
    }
}

impl FieldDescriptor {
    /// Accept anything, optional, enumerable, no default.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            type_rule: TypeRule::Any,
            required: false,
            enumerable: true,
            default: None,
        }
    }

    #[must_use]
    pub const fn builder() -> FieldDescriptorBuilder {
        FieldDescriptorBuilder(Self::any())
    }

    /// Build a descriptor from a raw rule.
    ///
    /// `Undefined` and `Null` mean "accept anything". Otherwise the rule must
    /// be an object using only the keys `type`, `required`, `enumerable` and
    /// `default`. An explicit `undefined` for `type`, `required` or
    /// `enumerable` is treated as not supplied; for `default` it is a real
    /// default.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::InvalidDescriptor` if the rule is not an object,
    /// has an unrecognized key, names an unknown type tag, supplies a
    /// predicate whose arity is not 1, or gives a non-boolean `required` or
    /// `enumerable`.
    pub fn from_definition(definition: &Value) -> Result<Self, SchemaError> {
        let entries = match definition {
            Value::Undefined | Value::Null => return Ok(Self::any()),
            Value::Object(entries) => entries,
            other => {
                return Err(SchemaError::InvalidDescriptor(format!(
                    "expected an object or nothing, got {}",
                    other.type_label()
                )));
            }
        };

        if let Some(unknown) = entries.keys().find(|k| !DEFINITION_KEYS.contains(k)) {
            return Err(SchemaError::InvalidDescriptor(format!(
                "unrecognized key '{unknown}' (expected one of: {})",
                DEFINITION_KEYS.join(", ")
            )));
        }

        let mut descriptor = Self::any();
        if let Some(rule) = entries.get("type") {
            descriptor.type_rule = TypeRule::from_definition(rule)?;
        }
        if let Some(flag) = flag(entries.get("required"), "required")? {
            descriptor.required = flag;
        }
        if let Some(flag) = flag(entries.get("enumerable"), "enumerable")? {
            descriptor.enumerable = flag;
        }
        descriptor.default = entries.get("default").cloned();

        Ok(descriptor)
    }

    #[must_use]
    pub const fn type_rule(&self) -> &TypeRule {
        &self.type_rule
    }

    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub const fn is_enumerable(&self) -> bool {
        self.enumerable
    }

    /// True iff a default was supplied, including an explicit `undefined`.
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }

    #[must_use]
    pub const fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// `undefined` is valid iff the field is optional; any other value must
    /// satisfy the type rule.
    #[must_use]
    pub fn is_valid(&self, value: &Value) -> bool {
        if value.is_undefined() {
            return !self.required;
        }
        self.type_rule.matches(value)
    }
}

fn flag(value: Option<&Value>, key: &str) -> Result<Option<bool>, SchemaError> {
    match value {
        None | Some(Value::Undefined) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(SchemaError::InvalidDescriptor(format!(
            "'{key}' must be a boolean, got {}",
            other.type_label()
        ))),
    }
}

/// Typed construction of a [`FieldDescriptor`].
pub struct FieldDescriptorBuilder(FieldDescriptor);

impl FieldDescriptorBuilder {
    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.0.type_rule = TypeRule::Kind(kind);
        self
    }

    /// Use a unary check as the type rule.
    #[must_use]
    pub fn predicate<F>(mut self, name: &str, check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.0.type_rule = TypeRule::Predicate(Function::predicate(name, check));
        self
    }

    #[must_use]
    pub fn type_rule(mut self, rule: TypeRule) -> Self {
        self.0.type_rule = rule;
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.0.required = required;
        self
    }

    #[must_use]
    pub fn enumerable(mut self, enumerable: bool) -> Self {
        self.0.enumerable = enumerable;
        self
    }

    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.0.default = Some(value.into());
        self
    }

    /// # Errors
    ///
    /// Returns `SchemaError::InvalidDescriptor` if a predicate type rule does
    /// not take exactly one argument.
    pub fn build(self) -> Result<FieldDescriptor, SchemaError> {
        if let TypeRule::Predicate(f) = &self.0.type_rule {
            TypeRule::predicate(f.clone())?;
        }
        Ok(self.0)
    }
}
