//! Runtime configuration for catalog callers.
//!
//! Sources are layered, later ones winning:
//! 1. built-in defaults (`magazine.db`, build-mode log level, no log file),
//! 2. an optional TOML file,
//! 3. `MAGDB_*` environment variables, e.g. `MAGDB_DB_PATH=/tmp/x.db`.

use crate::db::{Database, DbResult};
use crate::logging::default_log_level;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Database file used when nothing else is configured.
pub const DEFAULT_DB_FILE: &str = "magazine.db";
const ENV_PREFIX: &str = "MAGDB";

#[derive(Debug)]
pub enum ConfigError {
    /// Config file was given but does not exist.
    MissingFile(PathBuf),
    /// Sources could not be read or deserialized.
    Load(config::ConfigError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFile(path) => write!(f, "config file `{}` does not exist", path.display()),
            Self::Load(err) => write!(f, "failed to load configuration: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingFile(_) => None,
            Self::Load(err) => Some(err),
        }
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(value: config::ConfigError) -> Self {
        Self::Load(value)
    }
}

/// Resolved settings for opening the catalog and wiring logs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoreConfig {
    /// SQLite file holding the catalog.
    pub db_path: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Directory for rotating log files. `None` logs to stderr.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

impl CoreConfig {
    /// Loads defaults, then `file` (when given), then the environment.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("db_path", DEFAULT_DB_FILE)?
            .set_default("log_level", default_log_level())?;

        if let Some(path) = file {
            if !path.exists() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Opens the configured database file, creating and migrating it if needed.
    pub fn open_database(&self) -> DbResult<Database> {
        Database::open(&self.db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig};
    use std::path::PathBuf;

    #[test]
    fn missing_file_is_reported() {
        let err = CoreConfig::load(Some(PathBuf::from("/nonexistent/magdb.toml").as_path()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(_)));
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("magdb.toml");
        std::fs::write(
            &path,
            "db_path = \"/var/lib/magdb/catalog.db\"\nlog_level = \"warn\"\n",
        )
        .unwrap();

        let config = CoreConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/var/lib/magdb/catalog.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, None);
    }
}
