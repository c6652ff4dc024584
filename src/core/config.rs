//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! Searched in order:
//! 1. `$GRIDWIT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gridwit/config.toml`
//! 3. `~/.gridwit/config.toml` (canonical write location)
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides
//! earlier): built-in defaults, config file, CLI flags (applied by the
//! CLI layer, not here).
//!
//! # Example
//!
//! ```toml
//! database = "/var/lib/gridwit/archive.db"
//! puzzles_dir = "/srv/crosswords"
//! per_page = 25
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default page size for listings and search.
pub const DEFAULT_PER_PAGE: u64 = 10;

/// Hard upper bound on page size.
pub const MAX_PER_PAGE: u64 = 50;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// User configuration.
///
/// All fields are optional; accessor methods on [`Config`] apply the
/// built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Path to the SQLite database file.
    pub database: Option<PathBuf>,

    /// Directory holding source puzzle documents (year/month tree).
    pub puzzles_dir: Option<PathBuf>,

    /// Default page size for listings and search.
    pub per_page: Option<u64>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(per_page) = self.per_page {
            if per_page == 0 || per_page > MAX_PER_PAGE {
                return Err(ConfigError::InvalidValue(format!(
                    "per_page must be between 1 and {MAX_PER_PAGE}, got {per_page}"
                )));
            }
        }
        Ok(())
    }
}

/// Loaded configuration with defaults applied on access.
#[derive(Debug, Clone, Default)]
pub struct Config {
    file: FileConfig,
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Missing config files are not an error; defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read,
    /// parsed, or validated.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var("GRIDWIT_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("gridwit/config.toml");
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            let path = home.join(".gridwit/config.toml");
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(Config::default())
    }

    /// Load configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: FileConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        Ok(Config {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    /// The database path, defaulting to `~/.gridwit/gridwit.db` (or
    /// `./gridwit.db` when no home directory is available).
    pub fn database(&self) -> PathBuf {
        if let Some(db) = &self.file.database {
            return db.clone();
        }
        match dirs::home_dir() {
            Some(home) => home.join(".gridwit/gridwit.db"),
            None => PathBuf::from("gridwit.db"),
        }
    }

    /// The source puzzles directory, defaulting to `./nyt_crosswords`.
    pub fn puzzles_dir(&self) -> PathBuf {
        self.file
            .puzzles_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("nyt_crosswords"))
    }

    /// The default page size.
    pub fn per_page(&self) -> u64 {
        self.file.per_page.unwrap_or(DEFAULT_PER_PAGE)
    }

    /// The path the configuration was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let config = Config::default();
        assert_eq!(config.per_page(), DEFAULT_PER_PAGE);
        assert_eq!(config.puzzles_dir(), PathBuf::from("nyt_crosswords"));
        assert!(config.path().is_none());
    }

    #[test]
    fn parses_all_fields() {
        let file: FileConfig = toml::from_str(
            "database = \"/tmp/a.db\"\npuzzles_dir = \"/tmp/puzzles\"\nper_page = 25\n",
        )
        .unwrap();
        assert_eq!(file.database, Some(PathBuf::from("/tmp/a.db")));
        assert_eq!(file.puzzles_dir, Some(PathBuf::from("/tmp/puzzles")));
        assert_eq!(file.per_page, Some(25));
        assert!(file.validate().is_ok());
    }

    #[test]
    fn unknown_fields_rejected() {
        let parsed: Result<FileConfig, _> = toml::from_str("databse = \"typo.db\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn zero_per_page_rejected() {
        let file: FileConfig = toml::from_str("per_page = 0\n").unwrap();
        assert!(matches!(
            file.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn oversized_per_page_rejected() {
        let file: FileConfig = toml::from_str("per_page = 51\n").unwrap();
        assert!(file.validate().is_err());
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "per_page = 20\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.per_page(), 20);
        assert_eq!(config.path(), Some(path.as_path()));
    }

    #[test]
    fn load_from_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "per_page = \"ten\"\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }
}
