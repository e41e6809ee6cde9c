use crate::{Error, Result};
use medboard_engine::{ControllerSettings, DebouncePolicy, StalePolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Overrides `base_url` from the config file
pub const BASE_URL_ENV: &str = "MEDBOARD_URL";
/// Overrides the config file location
pub const CONFIG_PATH_ENV: &str = "MEDBOARD_CONFIG";
/// Overrides the data directory (log file location)
pub const DATA_DIR_ENV: &str = "MEDBOARD_PATH";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. MEDBOARD_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.medboard (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(DATA_DIR_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("medboard"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".medboard"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API root, e.g. `http://localhost:8000`
    pub base_url: String,
    pub timeout_secs: u64,
    /// Delay before an identifier keystroke triggers a fetch; 0 fetches immediately
    pub debounce_ms: u64,
    pub stale_policy: StalePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            debounce_ms: 0,
            stale_policy: StalePolicy::Apply,
        }
    }
}

impl Config {
    /// Load from `explicit_path` (or the default location), then apply
    /// the `MEDBOARD_URL` override
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path = match explicit_path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        let mut config = Self::load_from(&path)?;
        if let Ok(url) = std::env::var(BASE_URL_ENV)
            && !url.is_empty()
        {
            config.base_url = url;
        }
        Ok(config)
    }

    /// Read a TOML config file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(expand_tilde(&path));
        }

        dirs::config_dir()
            .map(|dir| dir.join("medboard").join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be positive".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            debounce: DebouncePolicy::after(Duration::from_millis(self.debounce_ms)),
            stale: self.stale_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.controller_settings().debounce.is_immediate());
        assert_eq!(config.controller_settings().stale, StalePolicy::Apply);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            base_url: "https://records.internal".to_string(),
            timeout_secs: 3,
            debounce_ms: 300,
            stale_policy: StalePolicy::Discard,
        };
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.controller_settings().debounce.delay,
            Duration::from_millis(300)
        );

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "stale_policy = \"discard\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.base_url, DEFAULT_BASE_URL);
        assert_eq!(loaded.stale_policy, StalePolicy::Discard);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, Config::default());

        Ok(())
    }

    #[test]
    fn test_invalid_base_url_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "base_url = \"localhost:8000\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_malformed_toml_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "timeout_secs = \"soon\"\n")?;

        assert!(matches!(
            Config::load_from(&config_path),
            Err(Error::Config(_))
        ));

        Ok(())
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/tmp/medboard"), PathBuf::from("/tmp/medboard"));
    }
}
