//! CLI argument definitions and parsing.

pub mod types;

use crate::storage::{Page, PlayerFilter, TeamFilter, DEFAULT_LIMIT, DEFAULT_SKIP};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{parse_date, LeagueId, PlayerId};

/// Pagination arguments shared between list commands
#[derive(Debug, Args)]
pub struct PageArgs {
    /// Number of records to skip.
    #[clap(long, default_value_t = DEFAULT_SKIP)]
    pub skip: u64,

    /// Maximum number of records to return.
    #[clap(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u64,
}

impl PageArgs {
    pub fn page(&self) -> Page {
        Page::new(self.skip, self.limit)
    }
}

/// Filtering arguments for the `players` subcommand
#[derive(Debug, Args)]
pub struct PlayerFilterArgs {
    /// Exact first name match.
    #[clap(long)]
    pub first_name: Option<String>,

    /// Exact last name match.
    #[clap(long)]
    pub last_name: Option<String>,

    /// Only records changed on or after this date (YYYY-MM-DD).
    #[clap(long, value_parser = parse_date)]
    pub since: Option<NaiveDate>,
}

impl PlayerFilterArgs {
    pub fn filter(&self) -> PlayerFilter {
        PlayerFilter {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            min_last_changed_date: self.since,
        }
    }
}

/// Filtering arguments for the `teams` subcommand
#[derive(Debug, Args)]
pub struct TeamFilterArgs {
    /// Only teams in this league.
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Only records changed on or after this date (YYYY-MM-DD).
    #[clap(long, value_parser = parse_date)]
    pub since: Option<NaiveDate>,
}

impl TeamFilterArgs {
    pub fn filter(&self) -> TeamFilter {
        TeamFilter {
            league_id: self.league_id,
            min_last_changed_date: self.since,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Look up one player by ID
    Player {
        player_id: PlayerId,

        /// Include the player's weekly performances.
        #[clap(long)]
        with_performances: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List players, optionally filtered by exact name and changed date
    Players {
        #[clap(flatten)]
        page: PageArgs,

        #[clap(flatten)]
        filters: PlayerFilterArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Look up one league by ID
    League {
        league_id: LeagueId,

        /// Include the league's teams.
        #[clap(long)]
        with_teams: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List leagues
    Leagues {
        #[clap(flatten)]
        page: PageArgs,

        /// Only records changed on or after this date (YYYY-MM-DD).
        #[clap(long, value_parser = parse_date)]
        since: Option<NaiveDate>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List teams, optionally for one league
    Teams {
        #[clap(flatten)]
        page: PageArgs,

        #[clap(flatten)]
        filters: TeamFilterArgs,

        /// Include each team's players.
        #[clap(long)]
        with_players: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List weekly performances
    Performances {
        #[clap(flatten)]
        page: PageArgs,

        /// Only records changed on or after this date (YYYY-MM-DD).
        #[clap(long, value_parser = parse_date)]
        since: Option<NaiveDate>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "swc-data", about = "SportsWorld Central fantasy data queries")]
pub struct SwcCli {
    /// Database file (or set `SWC_DATABASE_PATH` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log each query to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Query players, teams, leagues or performances
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Show row counts for every table
    Counts {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Create the database file and tables if they do not exist
    Init,
}
