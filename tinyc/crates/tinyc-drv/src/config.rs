//! Configuration for the tinyc driver.
//!
//! Settings live in a `tinyc.toml` file. Every field has a default, so an
//! empty file, or no file at all, gives the stock behaviour: echo every
//! source line and trace every token.

use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tinyc_lex::ScanOptions;

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "tinyc.toml";

/// Driver configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Extension appended to source names that have none.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Listing switches.
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Listing switches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// Echo each source line as it is read.
    #[serde(default = "default_true")]
    pub echo_source: bool,

    /// Print each token as it is produced.
    #[serde(default = "default_true")]
    pub trace_scan: bool,
}

fn default_extension() -> String {
    "tny".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            scan: ScanConfig::default(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            echo_source: true,
            trace_scan: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User configuration directory (`<config dir>/tinyc/tinyc.toml`)
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            DriverError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            DriverError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the listing switches as scanner options.
    pub fn options(&self) -> ScanOptions {
        ScanOptions {
            echo_source: self.scan.echo_source,
            trace_scan: self.scan.trace_scan,
        }
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_user_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("tinyc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_user_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.extension, "tny");
        assert!(config.scan.echo_source);
        assert!(config.scan.trace_scan);
        assert_eq!(config.options(), ScanOptions::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("tinyc.toml");

        let original = Config {
            extension: "tiny".to_string(),
            scan: ScanConfig {
                echo_source: false,
                trace_scan: true,
            },
        };
        original.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("tinyc.toml");
        std::fs::write(&config_path, "[scan]\ntrace_scan = false\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.extension, "tny");
        assert!(config.scan.echo_source);
        assert!(!config.scan.trace_scan);
    }

    #[test]
    fn test_empty_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("tinyc.toml");
        std::fs::write(&config_path, "").unwrap();

        assert_eq!(Config::load_from_path(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("tinyc.toml");
        std::fs::write(&config_path, "scan = [").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, DriverError::Config(_)));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/tinyc.toml"));
        assert!(matches!(result, Err(DriverError::Config(_))));
    }
}
