//! Application configuration storage
//!
//! Settings come from three layers, later ones winning: the JSON config
//! file, environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use app_forge::GenerationSettings;
use forge_inference::constants::{backends, defaults, env};
use forge_inference::BackendConfig;
use serde::{Deserialize, Serialize};
use tokio::fs;

const CONFIG_FILE: &str = "config.json";
const APP_DIR: &str = "app-forge";

fn default_backend() -> String {
    backends::GEMINI.to_string()
}

fn default_model() -> String {
    defaults::GEMINI_MODEL.to_string()
}

fn default_temperature() -> f32 {
    defaults::TEMPERATURE
}

/// Full application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgeConfig {
    /// Registry name of the backend to use
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Model identifier passed to the backend
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Credentials, base URL and timeout
    #[serde(default)]
    pub connection: BackendConfig,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            model: default_model(),
            temperature: default_temperature(),
            connection: BackendConfig::default(),
        }
    }
}

impl ForgeConfig {
    /// Default config location (`<config dir>/app-forge/config.json`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load configuration from disk, falling back to defaults when the file is absent
    pub async fn load(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            log::debug!("No config at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(config_path)
            .await
            .map_err(ConfigError::Io)?;

        serde_json::from_str(&contents).map_err(ConfigError::Parse)
    }

    /// Save configuration to disk
    pub async fn save(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).await.map_err(ConfigError::Io)?;
        }

        let contents = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;

        fs::write(config_path, contents)
            .await
            .map_err(ConfigError::Io)?;

        log::info!("Configuration saved to {:?}", config_path);
        Ok(())
    }

    /// Fill the API key from the environment when the file has none
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if self.connection.api_key().is_some() {
            return;
        }
        self.connection.api_key = [env::API_KEY, env::GEMINI_API_KEY]
            .into_iter()
            .filter_map(&lookup)
            .find(|key| !key.trim().is_empty());
    }

    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            model: self.model.clone(),
            temperature: self.temperature,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(serde_json::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(serde_json::Error),
}
