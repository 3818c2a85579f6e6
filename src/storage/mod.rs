//! Storage layer for SportsWorld Central fantasy data
//!
//! This module provides a read-only query layer over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Connection pool, sessions and schema bootstrap
//! - `filters`: Pagination windows and query filters
//! - `queries`: Accessor operations

pub mod filters;
pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types for easy access
pub use filters::{Page, PlayerFilter, TeamFilter, DEFAULT_LIMIT, DEFAULT_SKIP};
pub use models::*;
pub use schema::{ConnectionPool, Database, PooledConn, Session};
