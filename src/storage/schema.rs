//! Connection pool, scoped sessions and schema bootstrap

use crate::config::DatabaseConfig;
use crate::error::{Result, SwcError};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;
use std::time::Duration;
use tracing::{debug, info};

/// Type alias for the SQLite connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS league (
        league_id INTEGER PRIMARY KEY,
        league_name TEXT NOT NULL,
        scoring_type TEXT NOT NULL,
        last_changed_date TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS team (
        team_id INTEGER PRIMARY KEY,
        team_name TEXT NOT NULL,
        league_id INTEGER NOT NULL REFERENCES league(league_id),
        last_changed_date TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS player (
        player_id INTEGER PRIMARY KEY,
        gsis_id TEXT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        position TEXT NOT NULL,
        team_id INTEGER NOT NULL REFERENCES team(team_id),
        last_changed_date TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS performance (
        performance_id INTEGER PRIMARY KEY,
        week_number TEXT NOT NULL,
        fantasy_points REAL NOT NULL,
        player_id INTEGER NOT NULL REFERENCES player(player_id),
        last_changed_date TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_team_league ON team(league_id);
    CREATE INDEX IF NOT EXISTS idx_player_team ON player(team_id);
    CREATE INDEX IF NOT EXISTS idx_player_name ON player(last_name, first_name);
    CREATE INDEX IF NOT EXISTS idx_performance_player ON performance(player_id);
    CREATE INDEX IF NOT EXISTS idx_performance_changed ON performance(last_changed_date);
";

/// Handle to the fantasy database.
///
/// Cloning is cheap and shares the underlying pool. All reads go through a
/// [`Session`] obtained from [`Database::session`].
#[derive(Clone)]
pub struct Database {
    pool: ConnectionPool,
}

impl Database {
    /// Open an existing database file.
    pub fn open(config: &DatabaseConfig) -> Result<Self> {
        config.validate()?;

        if !config.path.exists() {
            return Err(SwcError::DatabaseNotFound {
                path: config.path.clone(),
            });
        }

        let mut manager = SqliteConnectionManager::file(&config.path);
        if config.read_only {
            manager = manager
                .with_flags(OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX);
        }

        let db = Self::build(manager, config.max_connections, config.busy_timeout)?;
        info!(path = %config.path.display(), read_only = config.read_only, "opened database");
        Ok(db)
    }

    /// Create the database file if needed and make sure the tables exist.
    pub fn create(config: &DatabaseConfig) -> Result<Self> {
        config.validate()?;

        // Ensure the parent directory exists
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let manager = SqliteConnectionManager::file(&config.path);
        let db = Self::build(manager, config.max_connections, config.busy_timeout)?;
        db.initialize_schema()?;
        info!(path = %config.path.display(), "initialized database");
        Ok(db)
    }

    /// Private in-memory database with the schema applied.
    ///
    /// The pool holds a single connection that is never recycled, so every
    /// session sees the same data.
    pub fn in_memory() -> Result<Self> {
        let manager = SqliteConnectionManager::memory().with_init(|conn| {
            conn.execute_batch("PRAGMA foreign_keys = ON;")
        });
        let pool = Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .build(manager)?;

        let db = Self { pool };
        db.initialize_schema()?;
        Ok(db)
    }

    fn build(
        manager: SqliteConnectionManager,
        max_connections: u32,
        busy_timeout: Duration,
    ) -> Result<Self> {
        let manager = manager.with_init(move |conn| {
            conn.busy_timeout(busy_timeout)?;
            conn.execute_batch("PRAGMA foreign_keys = ON;")
        });

        let pool = Pool::builder().max_size(max_connections).build(manager)?;
        Ok(Self { pool })
    }

    /// Acquire a session for one unit of work. The connection goes back to
    /// the pool when the session is dropped.
    pub fn session(&self) -> Result<Session> {
        let conn = self.pool.get()?;
        debug!(
            idle = self.pool.state().idle_connections,
            "acquired database session"
        );
        Ok(Session { conn })
    }

    /// Run `f` inside a fresh session, releasing it afterwards.
    pub fn with_session<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Session) -> Result<T>,
    {
        let session = self.session()?;
        f(&session)
    }

    /// Connections currently open (idle or checked out).
    pub fn open_connections(&self) -> u32 {
        self.pool.state().connections
    }

    /// Connections currently sitting idle in the pool.
    pub fn idle_connections(&self) -> u32 {
        self.pool.state().idle_connections
    }

    /// Create the tables and indexes if they do not exist
    pub fn initialize_schema(&self) -> Result<()> {
        let session = self.session()?;
        session.conn.execute_batch(SCHEMA)?;
        Ok(())
    }
}

/// A scoped handle to one pooled connection.
///
/// Every accessor is a method on `Session`; dropping it releases the connection.
pub struct Session {
    pub(crate) conn: PooledConn,
}

impl Session {
    /// Direct access to the underlying connection, e.g. for loading fixtures.
    pub fn connection(&self) -> &rusqlite::Connection {
        &self.conn
    }
}
