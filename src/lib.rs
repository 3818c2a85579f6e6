//! SportsWorld Central fantasy data library
//!
//! Read-only, paginated access to the players, teams, leagues and weekly
//! performances stored in the SportsWorld Central SQLite database.
//!
//! ## Features
//!
//! - **Scoped Sessions**: Pooled connections handed out per unit of work and released on drop
//! - **Filtered Lookups**: Exact-match name filters, league filters and inclusive changed-date bounds
//! - **Stable Pagination**: `skip`/`limit` windows over primary-key order
//! - **Explicit Relations**: League teams, team players and player performances fetched on demand
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use swc_data::{config::DatabaseConfig, storage::*, PlayerId};
//!
//! # fn example() -> swc_data::Result<()> {
//! let db = Database::open(&DatabaseConfig::resolve(None)?.read_only(true))?;
//! let session = db.session()?;
//!
//! if let Some(player) = session.get_player(PlayerId::new(1001))? {
//!     println!("{}", player.full_name());
//! }
//!
//! let filter = PlayerFilter::default()
//!     .with_first_name("Bryce")
//!     .with_last_name("Young");
//! let players = session.get_players(Page::default(), &filter)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database without passing `--db` every time:
//! ```bash
//! export SWC_DATABASE_PATH=/data/fantasy_data.db
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{LeagueId, PerformanceId, PlayerId, TeamId};
pub use config::{DatabaseConfig, DATABASE_PATH_ENV_VAR};
pub use error::{Result, SwcError};
