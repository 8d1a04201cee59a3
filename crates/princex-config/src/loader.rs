//! Settings loader.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::ConfigError;
use crate::schema::Settings;

static ENV_VAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var regex"));

/// Settings loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Settings, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load settings from a TOML file, falling back to defaults when the
    /// file does not exist yet.
    pub fn load_or_default(path: &Path) -> Result<Settings, ConfigError> {
        if !path.exists() {
            debug!("Settings file {} not found, using defaults", path.display());
            return Ok(Settings::default());
        }
        Self::load(path)
    }

    /// Load settings from a string.
    pub fn load_str(content: &str) -> Result<Settings, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let settings: Settings = toml::from_str(&expanded)?;
        Ok(settings)
    }

    /// Load settings without `${VAR}` expansion, for rewriting the file in
    /// place. Missing files yield defaults.
    pub fn load_raw_or_default(path: &Path) -> Result<Settings, ConfigError> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Write settings as TOML, creating parent directories.
    pub fn save(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(settings)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// `~/.princex/settings.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::princex_dir()?.join("settings.toml"))
    }

    /// `~/.princex`, home of settings and logs.
    pub fn princex_dir() -> Result<PathBuf, ConfigError> {
        dirs::home_dir()
            .map(|home| home.join(".princex"))
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();

        for cap in ENV_VAR.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.princex`).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use princex_protocols::ProviderId;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_empty_settings() {
        let settings = ConfigLoader::load_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_full_settings() {
        let content = r#"
            enable_ai = false
            api_provider = "anthropic"
            api_key = "sk-ant-test"
            model = "claude-3-opus-20240229"
        "#;
        let settings = ConfigLoader::load_str(content).unwrap();
        assert!(!settings.enable_ai);
        assert_eq!(settings.api_provider, ProviderId::Anthropic);
        assert_eq!(settings.api_key, "sk-ant-test");
        assert_eq!(settings.model, "claude-3-opus-20240229");
    }

    #[test]
    fn test_load_unknown_provider() {
        let result = ConfigLoader::load_str(r#"api_provider = "mistral""#);
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "api_provider = \"gemini\"").unwrap();

        let settings = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(settings.api_provider, ProviderId::Gemini);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/settings.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        let settings = ConfigLoader::load_or_default(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let settings = Settings {
            enable_ai: true,
            api_provider: ProviderId::Gemini,
            api_key: "g-key".to_string(),
            model: "gemini-pro".to_string(),
        };

        ConfigLoader::save(&path, &settings).unwrap();
        let loaded = ConfigLoader::load(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("enable_ai = [unclosed");
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("PRINCEX_TEST_API_KEY", "sk-from-env");
        }
        let settings = ConfigLoader::load_str("api_key = \"${PRINCEX_TEST_API_KEY}\"").unwrap();
        assert_eq!(settings.api_key, "sk-from-env");
        unsafe {
            std::env::remove_var("PRINCEX_TEST_API_KEY");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "api_key = \"${NONEXISTENT_PRINCEX_VAR_12345}\"";
        let result = ConfigLoader::load_str(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = ConfigLoader::expand_path("~/test");
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.ends_with("test"));
    }

    #[test]
    fn test_expand_path_no_tilde() {
        assert_eq!(ConfigLoader::expand_path("/etc/princex"), PathBuf::from("/etc/princex"));
    }

    #[test]
    fn test_load_raw_keeps_env_references() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "api_key = \"${PRINCEX_RAW_LOAD_KEY}\"\n").unwrap();
        // SAFETY: unique test-only env var
        unsafe {
            std::env::set_var("PRINCEX_RAW_LOAD_KEY", "sk-expanded");
        }

        let raw = ConfigLoader::load_raw_or_default(&path).unwrap();
        assert_eq!(raw.api_key, "${PRINCEX_RAW_LOAD_KEY}");

        let expanded = ConfigLoader::load(&path).unwrap();
        assert_eq!(expanded.api_key, "sk-expanded");
    }

    #[test]
    fn test_load_raw_missing_file_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = ConfigLoader::load_raw_or_default(&dir.path().join("none.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
