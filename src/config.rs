//! User configuration.
//!
//! Read from `<config_dir>/calcdeck/config.toml`. Every key is optional:
//!
//! ```toml
//! data_dir = "/home/me/.calcdeck"
//! persist_history = true
//! group_digits = true
//!
//! [logging]
//! level = "warn"
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where history is stored. Defaults to the platform data directory.
    pub data_dir: Option<PathBuf>,
    /// Save history between runs.
    pub persist_history: bool,
    /// Show thousand separators on the display.
    pub group_digits: bool,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level filter, overridden by `RUST_LOG`.
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            persist_history: true,
            group_digits: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calcdeck").join("config.toml"))
    }

    /// Load the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };

        Self::parse(&contents).map_err(|message| Error::Config {
            path: path.display().to_string(),
            message,
        })
    }

    /// Load from the default location, or defaults if there is none.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    fn parse(contents: &str) -> std::result::Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.persist_history);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "group_digits = false\ndata_dir = \"/tmp/calc\"\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert!(!config.group_digits);
        assert!(config.persist_history);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/calc")));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "persist_history = \"maybe\"").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
