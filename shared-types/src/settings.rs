use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Configuration status of an API key
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiKeyConfig {
    pub name: String,
    /// Masked key, never the full secret
    pub key: Option<String>,
    pub is_configured: bool,
    /// Where the key came from: "env:GEMINI_API_KEY", "config", ...
    pub source: Option<String>,
}

/// Resolved settings as shown by the `settings` command
#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub config_file_path: String,
    pub config_file_present: bool,
    pub api_keys: Vec<ApiKeyConfig>,
    pub model: String,
    pub temperature: f32,
    pub language: Language,
}
