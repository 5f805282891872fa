use crate::error::{AurError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE_NAME: &str = "config.toml";
const SNAPSHOT_FILE_NAME: &str = "packages-meta.json";
const DEFAULT_AUR_URL: &str = "https://aur.archlinux.org";
const DEFAULT_SNAPSHOT_MAX_AGE_HOURS: u64 = 24;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AurConfig {
    #[serde(default = "default_aur_url")]
    pub aur_url: String,

    #[serde(default)]
    pub metadata: MetadataConfig,

    #[serde(default)]
    pub network: NetworkConfig,

    #[serde(skip)]
    home: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    /// Age in hours after which the on-disk package snapshot is refetched.
    #[serde(default = "default_snapshot_max_age_hours")]
    pub max_age_hours: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AurConfig {
    fn default() -> Self {
        Self {
            aur_url: default_aur_url(),
            metadata: MetadataConfig::default(),
            network: NetworkConfig::default(),
            home: PathBuf::new(),
        }
    }
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            max_age_hours: DEFAULT_SNAPSHOT_MAX_AGE_HOURS,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_aur_url() -> String {
    DEFAULT_AUR_URL.to_string()
}

fn default_snapshot_max_age_hours() -> u64 {
    DEFAULT_SNAPSHOT_MAX_AGE_HOURS
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl AurConfig {
    pub fn load(home: &Path) -> Result<Self> {
        let config_path = home.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            let contents = fs::read_to_string(&config_path)?;
            let config: AurConfig = toml::from_str(&contents).map_err(|e| {
                AurError::ConfigError(format!("Failed to parse config.toml: {e}"))
            })?;
            log::debug!("Loaded config from {config_path:?}");
            config
        } else {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            Self::default()
        };

        config.home = home.to_path_buf();
        Ok(config)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.home.join("cache").join(SNAPSHOT_FILE_NAME)
    }

    pub fn snapshot_max_age(&self) -> Duration {
        Duration::from_secs(self.metadata.max_age_hours * 60 * 60)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.network.timeout_secs)
    }
}

/// Resolve the aurum home directory: `$AURUM_HOME` if set, `~/.aurum` otherwise.
pub fn aurum_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("AURUM_HOME") {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir()
        .map(|home| home.join(".aurum"))
        .ok_or_else(|| AurError::ConfigError("Unable to determine home directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AurConfig::default();
        assert_eq!(config.aur_url, DEFAULT_AUR_URL);
        assert_eq!(
            config.metadata.max_age_hours,
            DEFAULT_SNAPSHOT_MAX_AGE_HOURS
        );
        assert_eq!(config.network.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = AurConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.aur_url, DEFAULT_AUR_URL);
        assert_eq!(
            config.snapshot_path(),
            temp_dir.path().join("cache").join(SNAPSHOT_FILE_NAME)
        );
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_path, r#"aur_url = "https://aur.example.org""#).unwrap();

        let loaded = AurConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.aur_url, "https://aur.example.org");
        assert_eq!(
            loaded.metadata.max_age_hours,
            DEFAULT_SNAPSHOT_MAX_AGE_HOURS
        );
    }

    #[test]
    fn test_config_with_sections() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        fs::write(
            &config_path,
            r#"
aur_url = "https://aur.example.org"

[metadata]
max_age_hours = 6

[network]
timeout_secs = 5
"#,
        )
        .unwrap();

        let loaded = AurConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.metadata.max_age_hours, 6);
        assert_eq!(loaded.snapshot_max_age(), Duration::from_secs(6 * 60 * 60));
        assert_eq!(loaded.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_path, "aur_url = 42").unwrap();

        assert!(AurConfig::load(temp_dir.path()).is_err());
    }

    #[test]
    #[serial]
    fn test_aurum_home_env_override() {
        let temp_dir = TempDir::new().unwrap();
        unsafe {
            std::env::set_var("AURUM_HOME", temp_dir.path());
        }

        assert_eq!(aurum_home().unwrap(), temp_dir.path());

        unsafe {
            std::env::remove_var("AURUM_HOME");
        }
    }
}
