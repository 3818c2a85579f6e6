//! Data models for the storage layer

use crate::cli::types::{LeagueId, PerformanceId, PlayerId, TeamId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An NFL player, rostered on exactly one fantasy team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub gsis_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub team_id: TeamId,
    pub last_changed_date: NaiveDate,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A fantasy team within a league
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub team_name: String,
    pub league_id: LeagueId,
    pub last_changed_date: NaiveDate,
}

/// A fantasy league
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub league_id: LeagueId,
    pub league_name: String,
    pub scoring_type: String,
    pub last_changed_date: NaiveDate,
}

/// Fantasy points scored by one player in one week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub performance_id: PerformanceId,
    /// Season and week, e.g. `"202301"`.
    pub week_number: String,
    pub fantasy_points: f64,
    pub player_id: PlayerId,
    pub last_changed_date: NaiveDate,
}

/// Row counts for the entity tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCounts {
    pub players: u64,
    pub teams: u64,
    pub leagues: u64,
    pub performances: u64,
}
