//! `teambuilder.toml` configuration.
//!
//! Every field has a default, so a missing file or a partial file is fine.
//! Resolution order (highest priority first):
//! 1. CLI flags (`--offline`)
//! 2. Environment variables (`TEAMBUILDER_*`)
//! 3. The config file
//! 4. Compiled defaults

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use team_engine::provider::pokeapi::{PokeApiConfig, DEFAULT_BASE_URL};
use team_engine::settings::Settings;

pub const DEFAULT_CONFIG_FILE: &str = "teambuilder.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid value for {field}: {message}")]
    Invalid { field: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    /// Game version whose encounter tables are listed
    pub game_version: String,
    pub timeout_secs: u64,
    /// Serve records synthesized from the bundled pool instead of the API
    pub offline: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            game_version: "shield".to_string(),
            timeout_secs: 10,
            offline: false,
        }
    }
}

impl ProviderConfig {
    pub fn pokeapi(&self) -> PokeApiConfig {
        PokeApiConfig {
            base_url: self.base_url.clone(),
            version: self.game_version.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON file holding the team and settings
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".teambuilder/state.json"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub store: StoreConfig,
    /// Settings used until the store has its own copy
    pub settings: Settings,
}

impl Config {
    /// Load `path`, or `teambuilder.toml` in the working directory.
    ///
    /// An explicitly named file must exist; the default one may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|err| match err {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("TEAMBUILDER_BASE_URL") {
            self.provider.base_url = url;
        }
        if let Ok(path) = std::env::var("TEAMBUILDER_STORE") {
            self.store.path = PathBuf::from(path);
        }
        if let Ok(flag) = std::env::var("TEAMBUILDER_OFFLINE") {
            self.provider.offline = matches!(flag.as_str(), "1" | "true" | "yes");
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "provider.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.provider.game_version.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "provider.game_version".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !self.provider.offline && !self.provider.base_url.starts_with("http") {
            return Err(ConfigError::Invalid {
                field: "provider.base_url".to_string(),
                message: format!("`{}` is not an http(s) URL", self.provider.base_url),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use team_engine::Tier;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.provider.game_version, "shield");
        assert!(config.settings.show_catch_radar);
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let config = Config::from_toml(
            r#"
            [provider]
            offline = true

            [settings]
            allowed_tiers = ["OU", "RU"]
            "#,
        )
        .unwrap();
        assert!(config.provider.offline);
        assert_eq!(config.provider.timeout_secs, 10);
        assert_eq!(config.settings.allowed_tiers, vec![Tier::OU, Tier::RU]);
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn rejects_bad_values() {
        let config = Config::from_toml("[provider]\ntimeout_secs = 0\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));

        let err = Config::from_toml("[provider]\ntimeout_secs = \"soon\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/teambuilder.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn pokeapi_config_carries_timeout() {
        let mut config = Config::default();
        config.provider.timeout_secs = 3;
        assert_eq!(config.provider.pokeapi().timeout, Duration::from_secs(3));
    }
}
