//! # mould-config
//!
//! Layered configuration loading for Mould using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MOULD_*` prefix, `__` as separator)
//! 2. Project-level `.mould/config.toml`
//! 3. User-level `~/.config/mould/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MOULD_GENERAL__DEFAULT_TYPE_NAME` -> `general.default_type_name`
//! and `MOULD_DISPLAY__MAX_DEPTH` -> `display.max_depth`.
//!
//! # Usage
//!
//! ```no_run
//! use mould_config::MouldConfig;
//!
//! let config = MouldConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//! println!("records render {} levels deep", config.display.max_depth);
//! ```

mod display;
mod error;
mod general;

pub use display::DisplayConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "MOULD_";
const ENV_SECTION_SEPARATOR: &str = "__";
const PROJECT_CONFIG_PATH: &str = ".mould/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MouldConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl MouldConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`load_with_dotenv`](Self::load_with_dotenv)
    /// for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the workspace root.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        Self::config_files()
            .into_iter()
            .filter(|path| path.exists())
            .fold(
                Figment::from(Serialized::defaults(Self::default())),
                |figment, path| figment.merge(Toml::file(path)),
            )
            .merge(Env::prefixed(ENV_PREFIX).split(ENV_SECTION_SEPARATOR))
    }

    /// Candidate TOML files, lowest precedence first. Missing files are
    /// skipped by [`figment`](Self::figment).
    #[must_use]
    pub fn config_files() -> Vec<PathBuf> {
        Self::global_config_path()
            .into_iter()
            .chain([PathBuf::from(PROJECT_CONFIG_PATH)])
            .collect()
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mould").join("config.toml"))
    }

    /// Check values figment cannot reject on its own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty default type name or
    /// a zero display depth.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.default_type_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.default_type_name".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.display.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "display.max_depth".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Load `.env` from the workspace root when running under cargo,
    /// otherwise let `dotenvy` search upward from the current directory.
    fn load_dotenv_from_workspace() {
        let workspace_env = std::env::var_os("CARGO_MANIFEST_DIR")
            .and_then(|dir| workspace_env_path(Path::new(&dir)))
            .filter(|path| path.exists());

        let _ = match workspace_env {
            Some(path) => dotenvy::from_path(path),
            None => dotenvy::dotenv().map(|_| ()),
        };
    }
}

/// `.env` at the workspace root, two levels above a member crate.
fn workspace_env_path(manifest_dir: &Path) -> Option<PathBuf> {
    manifest_dir.ancestors().nth(2).map(|root| root.join(".env"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = MouldConfig::default();
        assert_eq!(config.general.default_type_name, "Record");
        assert_eq!(config.display.max_depth, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: MouldConfig = MouldConfig::figment().extract()?;
            assert_eq!(config, MouldConfig::default());
            Ok(())
        });
    }

    #[test]
    fn validate_rejects_blank_type_name() {
        let mut config = MouldConfig::default();
        config.general.default_type_name = "  ".into();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "general.default_type_name"));
    }

    #[test]
    fn config_files_put_the_project_file_last() {
        let files = MouldConfig::config_files();
        assert_eq!(files.last(), Some(&PathBuf::from(".mould/config.toml")));
        if let Some(global) = MouldConfig::global_config_path() {
            assert_eq!(files.first(), Some(&global));
        }
    }

    #[test]
    fn dotenv_resolves_to_workspace_root() {
        assert_eq!(
            workspace_env_path(Path::new("/work/mould/crates/mould-config")),
            Some(PathBuf::from("/work/mould/.env"))
        );
        assert_eq!(workspace_env_path(Path::new("/")), None);
    }

    #[test]
    fn validate_rejects_zero_depth() {
        let mut config = MouldConfig::default();
        config.display.max_depth = 0;
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "Invalid configuration value for 'display.max_depth': must be at least 1"
        );
    }
}
