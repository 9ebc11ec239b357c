//! Primitive type tags.
//!
//! A `Kind` is the runtime category of a [`Value`](crate::Value). Field
//! descriptors compare a value's kind against a declared tag, so the set of
//! tags is fixed and the string forms are part of the raw definition format.

use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Runtime category of a value.
///
/// `null`, arrays and plain objects all report [`Kind::Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Object,
    String,
    Number,
    Symbol,
    Boolean,
    Function,
    Undefined,
}

impl Kind {
    /// Every recognized tag, in the order they are documented.
    pub const ALL: [Self; 7] = [
        Self::Object,
        Self::String,
        Self::Number,
        Self::Symbol,
        Self::Boolean,
        Self::Function,
        Self::Undefined,
    ];

    /// Return the tag string used in raw field definitions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::String => "string",
            Self::Number => "number",
            Self::Symbol => "symbol",
            Self::Boolean => "boolean",
            Self::Function => "function",
            Self::Undefined => "undefined",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownKind(s.to_string()))
    }
}
