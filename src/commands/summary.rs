//! `counts` and `init` command implementations

use std::io::Write;

use anyhow::{Context, Result};

use super::output::{write_counts, write_json};
use crate::{config::DatabaseConfig, storage::Database};

/// Print unfiltered row counts for every table
pub fn handle_counts<W: Write>(db: &Database, json: bool, out: &mut W) -> Result<()> {
    let counts = db
        .with_session(|session| session.get_table_counts())
        .context("Failed to count rows")?;

    if json {
        write_json(out, &counts)?;
    } else {
        write_counts(out, &counts)?;
    }
    Ok(())
}

/// Create the database file and tables
pub fn handle_init<W: Write>(config: &DatabaseConfig, out: &mut W) -> Result<Database> {
    let db = Database::create(config).with_context(|| {
        format!(
            "Failed to initialize database at {}",
            config.path().display()
        )
    })?;

    writeln!(out, "✓ Database ready at {}", config.path().display())?;
    Ok(db)
}
