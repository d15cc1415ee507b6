use anyhow::Result;
use shared_types::{ApiKeyConfig, Language, SettingsResponse};
use std::path::Path;

use crate::config::AppConfig;

fn mask_api_key(key: &str) -> String {
    let visible: String = key.chars().take(6).collect();
    let hidden = key.chars().count().saturating_sub(6);
    let masked = format!("{}{}", visible, "*".repeat(hidden));
    if masked.chars().count() > 40 {
        format!("{}...", masked.chars().take(37).collect::<String>())
    } else {
        masked
    }
}

pub fn build_settings(config: &AppConfig, config_path: &Path, language: Language) -> SettingsResponse {
    let resolved = config.resolve_api_key();

    SettingsResponse {
        config_file_path: config_path.to_string_lossy().to_string(),
        config_file_present: config_path.exists(),
        api_keys: vec![ApiKeyConfig {
            name: "gemini".to_string(),
            key: resolved.as_ref().map(|r| mask_api_key(&r.key)),
            is_configured: resolved.is_some(),
            source: resolved.map(|r| r.source),
        }],
        model: config.model(),
        temperature: config.temperature(),
        language,
    }
}

pub fn settings(config: &AppConfig, config_path: &Path, language: Language, json: bool) -> Result<String> {
    let response = build_settings(config, config_path, language);

    if json {
        return Ok(serde_json::to_string_pretty(&response)?);
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Config file: {}{}\n",
        response.config_file_path,
        if response.config_file_present { "" } else { " (not found, using defaults)" }
    ));
    for key in &response.api_keys {
        match (&key.key, &key.source) {
            (Some(masked), Some(source)) => {
                output.push_str(&format!("API key ({}): {} [{}]\n", key.name, masked, source))
            }
            _ => output.push_str(&format!(
                "API key ({}): not configured (set GEMINI_API_KEY or API_KEY)\n",
                key.name
            )),
        }
    }
    output.push_str(&format!("Model: {}\n", response.model));
    output.push_str(&format!("Temperature: {}\n", response.temperature));
    output.push_str(&format!("Language: {}\n", response.language));
    Ok(output)
}
