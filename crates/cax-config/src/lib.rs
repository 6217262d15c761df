//! # cax-config
//!
//! Layered configuration loading for the ClaimAxis client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CLAIMAXIS_*` prefix, `__` as separator)
//! 2. Project-level `.claimaxis/config.toml`
//! 3. User-level `~/.config/claimaxis/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CLAIMAXIS_API__BASE_URL` -> `api.base_url`,
//! `CLAIMAXIS_GENERAL__CHART_DIR` -> `general.chart_dir`, etc. The `__`
//! (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use cax_config::CaxConfig;
//!
//! let config = CaxConfig::load_with_dotenv().expect("config");
//! println!("API base: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod general;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CaxConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CaxConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if figment extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads the nearest `.env` file before building the figment. This is the
    /// typical entry point for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if figment extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".claimaxis/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("CLAIMAXIS_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("claimaxis").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or the current dir
    /// looking for a `.env` file. Silently does nothing if none is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = CaxConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert!(config.general.chart_dir.is_empty());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: CaxConfig = CaxConfig::figment().extract()?;
            assert_eq!(config.api.base_url, "http://localhost:8000");
            assert_eq!(config.api.timeout_secs, 30);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_base_url() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("CLAIMAXIS_API__BASE_URL", "https://claims.example.com");
            let config: CaxConfig = CaxConfig::figment().extract()?;
            assert_eq!(config.api.base_url, "https://claims.example.com");
            Ok(())
        });
    }

    #[test]
    fn project_toml_layers_under_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".claimaxis")?;
            jail.create_file(
                ".claimaxis/config.toml",
                r#"
                    [api]
                    base_url = "http://from-toml:9000"
                    timeout_secs = 5
                "#,
            )?;
            jail.set_env("CLAIMAXIS_API__BASE_URL", "http://from-env:9001");

            let config: CaxConfig = CaxConfig::figment().extract()?;
            assert_eq!(config.api.base_url, "http://from-env:9001");
            assert_eq!(config.api.timeout_secs, 5);
            Ok(())
        });
    }
}
