use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::AzuError;
use crate::paths;
use crate::ui::Style;

/// OpenAI API endpoint used unless the config file points elsewhere.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";
/// Environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Model used when neither the CLI nor the config file names one.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// Models offered by `azu configure` when the config file lists none.
pub const KNOWN_MODELS: &[&str] = &["gpt-3.5-turbo", "gpt-4o-mini", "gpt-4o"];

/// Settings in the `[azu]` section of config.toml.
///
/// Every field is optional; unset fields fall back to the OpenAI defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AzuConfig {
    /// Base URL of the OpenAI API (or a proxy in front of it).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Default model name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Environment variable containing the API key, `OPENAI_API_KEY` if unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
    /// Models to offer in `azu configure`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<String>,
}

impl AzuConfig {
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn api_key_env(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }

    /// Gets the API key, preferring the environment variable over the config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var(self.api_key_env())
            && !key.trim().is_empty()
        {
            return Some(key.trim().to_string());
        }
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
    }

    /// The configured model list, or [`KNOWN_MODELS`] when there is none.
    pub fn model_choices(&self) -> Vec<String> {
        if self.models.is_empty() {
            KNOWN_MODELS.iter().map(ToString::to_string).collect()
        } else {
            self.models.clone()
        }
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/azu/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub azu: AzuConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model used for completions.
    pub model: String,
    /// The API key, if one was found.
    pub api_key: Option<String>,
}

impl ResolvedConfig {
    /// Fails with [`AzuError::MissingCredential`] when no key was found.
    pub fn check_credential(&self) -> Result<(), AzuError> {
        if self.api_key.is_none() {
            return Err(AzuError::MissingCredential);
        }
        Ok(())
    }
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Model name override.
    pub model: Option<String>,
    /// API key override.
    pub api_key: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take precedence
/// over the OpenAI defaults. A missing API key is not an error here; callers
/// check it with [`ResolvedConfig::check_credential`] so the interactive
/// session can still ask for one.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> ResolvedConfig {
    let azu = &config_file.azu;

    let model = options
        .model
        .as_deref()
        .or(azu.model.as_deref())
        .unwrap_or(DEFAULT_MODEL)
        .to_string();

    if !azu.models.is_empty() && !azu.models.contains(&model) {
        crate::warn!(
            "{} Model '{}' is not in the configured models list\n\
             Configured models: {}\n\
             Proceeding anyway...\n",
            Style::warning("Warning:"),
            model,
            azu.models.join(", ")
        );
    }

    let api_key = options
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .or_else(|| azu.get_api_key());

    ResolvedConfig {
        endpoint: azu.endpoint().to_string(),
        model,
        api_key,
    }
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/azu/config.toml`
    /// or `~/.config/azu/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file; a missing file yields the defaults, a broken one is an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("config.toml"),
        }
    }

    fn proxy_config() -> AzuConfig {
        AzuConfig {
            endpoint: Some("https://proxy.example.com".to_string()),
            model: Some("gpt-4o-mini".to_string()),
            api_key: None,
            api_key_env: Some("AZU_TEST_NONEXISTENT_API_KEY".to_string()),
            models: vec!["gpt-4o-mini".to_string(), "gpt-4o".to_string()],
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            azu: proxy_config(),
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded.azu, proxy_config());
    }

    #[test]
    fn test_save_omits_unset_fields() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            azu: AzuConfig {
                model: Some("gpt-4o".to_string()),
                ..AzuConfig::default()
            },
        };
        manager.save(&config).unwrap();

        let contents = fs::read_to_string(manager.config_path()).unwrap();
        assert!(contents.contains("model = \"gpt-4o\""));
        assert!(!contents.contains("endpoint"));
        assert!(!contents.contains("models"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        let config = manager.load_or_default().unwrap();
        assert_eq!(config.azu, AzuConfig::default());
    }

    #[test]
    fn test_load_or_default_reports_broken_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[azu\nmodel = ").unwrap();

        let err = manager.load_or_default().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: ConfigFile = toml::from_str(
            r#"
            [azu]
            model = "gpt-4o-mini"
            "#,
        )
        .unwrap();

        assert_eq!(config.azu.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(config.azu.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.azu.api_key_env(), DEFAULT_API_KEY_ENV);
    }

    #[test]
    fn test_model_choices_fall_back_to_known_models() {
        assert_eq!(AzuConfig::default().model_choices(), KNOWN_MODELS);
        assert_eq!(proxy_config().model_choices(), vec!["gpt-4o-mini", "gpt-4o"]);
    }

    #[test]
    #[serial]
    fn test_get_api_key_from_env() {
        // SAFETY: tests touching env vars are serialized
        unsafe {
            std::env::set_var("AZU_TEST_API_KEY", "test-key-value");
        }

        let config = AzuConfig {
            api_key: Some("fallback-key".to_string()),
            api_key_env: Some("AZU_TEST_API_KEY".to_string()),
            ..AzuConfig::default()
        };

        // Environment variable takes priority
        assert_eq!(config.get_api_key(), Some("test-key-value".to_string()));

        unsafe {
            std::env::remove_var("AZU_TEST_API_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_get_api_key_fallback() {
        unsafe {
            std::env::remove_var("AZU_TEST_NONEXISTENT_KEY");
        }

        let config = AzuConfig {
            api_key: Some("fallback-key".to_string()),
            api_key_env: Some("AZU_TEST_NONEXISTENT_KEY".to_string()),
            ..AzuConfig::default()
        };

        assert_eq!(config.get_api_key(), Some("fallback-key".to_string()));
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        let config = AzuConfig {
            api_key: Some("   ".to_string()),
            api_key_env: Some("AZU_TEST_NONEXISTENT_KEY".to_string()),
            ..AzuConfig::default()
        };
        assert!(config.get_api_key().is_none());
    }

    // resolve_config tests

    #[test]
    fn test_resolve_config_falls_back_to_file() {
        let config = ConfigFile {
            azu: proxy_config(),
        };
        let resolved = resolve_config(&ResolveOptions::default(), &config);

        assert_eq!(resolved.endpoint, "https://proxy.example.com");
        assert_eq!(resolved.model, "gpt-4o-mini");
        assert!(resolved.api_key.is_none());
    }

    #[test]
    #[serial]
    fn test_resolve_config_empty_file_uses_defaults() {
        unsafe {
            std::env::remove_var(DEFAULT_API_KEY_ENV);
        }

        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default());

        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.model, DEFAULT_MODEL);
        assert!(matches!(
            resolved.check_credential(),
            Err(AzuError::MissingCredential)
        ));
    }

    #[test]
    fn test_resolve_config_cli_api_key() {
        let options = ResolveOptions {
            model: None,
            api_key: Some(" sk-cli ".to_string()),
        };
        let config = ConfigFile {
            azu: proxy_config(),
        };

        let resolved = resolve_config(&options, &config);

        assert_eq!(resolved.api_key.as_deref(), Some("sk-cli"));
        assert!(resolved.check_credential().is_ok());
    }

    #[test]
    fn test_resolve_config_blank_cli_api_key_ignored() {
        let options = ResolveOptions {
            model: None,
            api_key: Some("  ".to_string()),
        };
        let config = ConfigFile {
            azu: proxy_config(),
        };

        let resolved = resolve_config(&options, &config);

        assert!(resolved.api_key.is_none());
        assert!(resolved.check_credential().is_err());
    }
}
