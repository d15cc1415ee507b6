use agti_advisor::{DEFAULT_TEMPERATURE, GEMINI_2_5_FLASH_ID};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use shared_types::Language;
use std::path::{Path, PathBuf};

/// Environment variables consulted for the Gemini key, in priority order
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    pub api_keys: Option<ApiKeysConfig>,
    pub advisor: Option<AdvisorConfig>,
    pub app: Option<GeneralConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ApiKeysConfig {
    pub gemini_api_key: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AdvisorConfig {
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GeneralConfig {
    pub language: Option<Language>,
}

/// An API key together with where it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedApiKey {
    pub key: String,
    pub source: String,
}

impl AppConfig {
    /// Load from the default location. A missing file is not an error.
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();
        let config = Self::load_from(&config_path)?;
        Ok((config, config_path))
    }

    /// File values first, then `AGTI_<SECTION>__<KEY>` environment overrides
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("AGTI")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        builder.try_deserialize()
    }

    pub fn model(&self) -> String {
        self.advisor
            .as_ref()
            .and_then(|a| a.model.clone())
            .unwrap_or_else(|| GEMINI_2_5_FLASH_ID.to_string())
    }

    pub fn temperature(&self) -> f32 {
        self.advisor
            .as_ref()
            .and_then(|a| a.temperature)
            .unwrap_or(DEFAULT_TEMPERATURE)
    }

    pub fn base_url(&self) -> Option<&str> {
        self.advisor.as_ref().and_then(|a| a.base_url.as_deref())
    }

    pub fn language(&self) -> Option<Language> {
        self.app.as_ref().and_then(|a| a.language)
    }

    pub fn resolve_api_key(&self) -> Option<ResolvedApiKey> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Environment wins over the config file; blank values are skipped
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Option<ResolvedApiKey>
    where
        F: Fn(&str) -> Option<String>,
    {
        for name in API_KEY_ENV_VARS {
            if let Some(key) = lookup(name).filter(|k| !k.trim().is_empty()) {
                return Some(ResolvedApiKey {
                    key,
                    source: format!("env:{name}"),
                });
            }
        }

        self.api_keys
            .as_ref()
            .and_then(|keys| keys.gemini_api_key.clone())
            .filter(|k| !k.trim().is_empty())
            .map(|key| ResolvedApiKey {
                key,
                source: "config".to_string(),
            })
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("agti").join("agti.toml")
    } else {
        PathBuf::from("agti.toml")
    }
}
