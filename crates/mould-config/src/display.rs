//! Rendering configuration.

use mould_core::render::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};

const fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Nesting depth beyond which nested containers render as `[Object]` or
    /// `[Array]` in record output.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}
