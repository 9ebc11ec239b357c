//! General configuration.

use serde::{Deserialize, Serialize};

/// Label given to record types created without an explicit name.
fn default_type_name() -> String {
    "Record".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Name used when `create_record_type` is called without one.
    #[serde(default = "default_type_name")]
    pub default_type_name: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_type_name: default_type_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_type_name, "Record");
    }
}
