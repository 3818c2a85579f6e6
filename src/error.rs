//! Error types for the SportsWorld Central data layer

use std::path::PathBuf;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, SwcError>;

#[derive(Error, Debug)]
pub enum SwcError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Failed to parse date (expected YYYY-MM-DD): {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("Database file not found: {}", path.display())]
    DatabaseNotFound { path: PathBuf },

    #[error("Configuration error: {message}")]
    Config { message: String },
}
