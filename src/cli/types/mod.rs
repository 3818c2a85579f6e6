//! Type-safe wrappers for SportsWorld Central identifiers and dates.

pub mod ids;
pub mod time;

pub use ids::{LeagueId, PerformanceId, PlayerId, TeamId};
pub use time::parse_date;
