use contracts::shared::storage::DEFAULT_STORAGE_KEY;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub submit: SubmitConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_storage_key")]
    pub key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SubmitConfig {
    #[serde(default = "default_acknowledgement")]
    pub acknowledgement: String,
    #[serde(default = "default_reload")]
    pub reload: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_acknowledgement() -> String {
    "Form Submitted!".to_string()
}

fn default_reload() -> bool {
    true
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_storage_key(),
        }
    }
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            acknowledgement: default_acknowledgement(),
            reload: default_reload(),
        }
    }
}

/// Configuration embedded in the bundle
const EMBEDDED_CONFIG: &str = include_str!("../form.toml");

/// Parse the embedded `form.toml`.
///
/// Falls back to built-in defaults when the file does not parse; there is no
/// other configuration source in the browser.
pub fn load_config() -> AppConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            log::debug!("Loaded embedded config, storage key '{}'", config.storage.key);
            config
        }
        Err(e) => {
            log::warn!("form.toml is invalid, using defaults: {}", e);
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(contents)?;
    if config.storage.key.trim().is_empty() {
        config.storage.key = default_storage_key();
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = parse_config(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.storage.key, "formData");
        assert_eq!(config.submit.acknowledgement, "Form Submitted!");
        assert!(config.submit.reload);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, AppConfig::default());

        let config = parse_config("[submit]\nreload = false\n").unwrap();
        assert!(!config.submit.reload);
        assert_eq!(config.storage.key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_blank_key_is_replaced() {
        let config = parse_config("[storage]\nkey = \"  \"\n").unwrap();
        assert_eq!(config.storage.key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(parse_config("[storage\nkey =").is_err());
    }
}
