//! User settings
//!
//! Read from an optional RON file next to the executable's working directory.
//! Every field has a default, so a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};
use serde::Deserialize;

/// Default settings file name
pub const CONFIG_PATH: &str = "mazerunner.ron";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the save/load dialogs open in
    pub save_dir: PathBuf,
    /// Extension offered by the save dialog
    pub save_extension: String,
    /// Save file used as the starting game instead of the built-in level
    pub start_file: Option<PathBuf>,
    /// How long status messages stay visible
    pub status_seconds: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from("saves"),
            save_extension: "txt".to_string(),
            start_file: None,
            status_seconds: 4.0,
        }
    }
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl Config {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Load settings, falling back to defaults when the file is absent or bad
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No {} found, using default settings", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded settings from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse("(save_extension: \"sav\")").unwrap();
        assert_eq!(config.save_extension, "sav");
        assert_eq!(config.save_dir, PathBuf::from("saves"));
        assert_eq!(config.start_file, None);
    }

    #[test]
    fn test_start_file() {
        let config = Config::parse("(start_file: Some(\"levels/one.txt\"), status_seconds: 2.5)").unwrap();
        assert_eq!(config.start_file, Some(PathBuf::from("levels/one.txt")));
        assert_eq!(config.status_seconds, 2.5);
    }

    #[test]
    fn test_bad_file_falls_back() {
        assert!(matches!(Config::parse("(save_dir: 3)"), Err(ConfigError::ParseError(_))));

        let path = std::env::temp_dir().join(format!("mazerunner-config-{}.ron", std::process::id()));
        fs::write(&path, "not ron at all (").unwrap();
        let config = Config::load_or_default(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(config, Config::default());
    }
}
