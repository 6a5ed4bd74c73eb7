//! Runtime configuration resolved from the environment.
//!
//! # Invariants
//! - Blank variables count as unset.
//! - An unsupported log level is an error, not a silent fallback.

use crate::logging::{default_log_level, normalize_level, LoggingError};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "LISTKEEPER_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "LISTKEEPER_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "LISTKEEPER_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "listkeeper.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "listkeeper-logs";

/// Settings shared by the FFI layer and the smoke CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite file holding the storage namespace.
    pub db_path: PathBuf,
    pub log_level: &'static str,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
}

impl Default for CoreConfig {
    fn default() -> Self {
        let temp = std::env::temp_dir();
        Self {
            db_path: temp.join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level(),
            log_dir: temp.join(DEFAULT_LOG_DIR_NAME),
        }
    }
}

impl CoreConfig {
    /// Reads overrides from `LISTKEEPER_*` process variables.
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves settings through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LoggingError> {
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = value(DB_PATH_ENV) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = value(LOG_LEVEL_ENV) {
            config.log_level = normalize_level(&level)?;
        }
        if let Some(dir) = value(LOG_DIR_ENV) {
            config.log_dir = PathBuf::from(dir);
        }
        Ok(config)
    }
}
