//! Database configuration and path resolution.
//!
//! The database file is located, in order of precedence, from:
//! 1. an explicit path (the `--db` flag),
//! 2. the `SWC_DATABASE_PATH` environment variable,
//! 3. `<data dir>/swc-data/fantasy_data.db`.

use crate::error::{Result, SwcError};
use std::path::{Path, PathBuf};
use std::time::Duration;


pub const DATABASE_PATH_ENV_VAR: &str = "SWC_DATABASE_PATH";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for a [`crate::storage::Database`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub max_connections: u32,
    pub busy_timeout: Duration,
    /// Open connections with `SQLITE_OPEN_READ_ONLY`.
    pub read_only: bool,
}

impl DatabaseConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            read_only: false,
        }
    }

    /// Build a config from an optional explicit path, falling back to the
    /// environment variable and then the platform data directory.
    pub fn resolve(path: Option<PathBuf>) -> Result<Self> {
        Ok(Self::new(resolve_database_path(path)?))
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reject settings the connection pool cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_connections == 0 {
            return Err(SwcError::Config {
                message: "max_connections must be at least 1".to_string(),
            });
        }
        if self.path.as_os_str().is_empty() {
            return Err(SwcError::Config {
                message: "database path is empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Resolve the database path from an explicit value, the environment, or the default location.
pub fn resolve_database_path(path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(path);
    }

    match std::env::var(DATABASE_PATH_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => Ok(PathBuf::from(value)),
        _ => default_database_path(),
    }
}

/// Path: <data dir>/swc-data/fantasy_data.db
pub fn default_database_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| SwcError::Config {
        message: "Could not determine data directory".to_string(),
    })?;
    Ok(data_dir.join("swc-data").join("fantasy_data.db"))
}
