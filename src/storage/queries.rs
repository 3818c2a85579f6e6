//! Read-only accessors over players, teams, leagues and performances

use super::{
    filters::{sql_id, Page, PlayerFilter, SelectBuilder, TeamFilter},
    models::*,
    schema::Session,
};
use crate::cli::types::{LeagueId, PerformanceId, PlayerId, TeamId};
use crate::error::Result;
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

const PLAYER_SELECT: &str = "SELECT player_id, gsis_id, first_name, last_name, position,
                                    team_id, last_changed_date
                             FROM player";

const TEAM_SELECT: &str = "SELECT team_id, team_name, league_id, last_changed_date FROM team";

const LEAGUE_SELECT: &str =
    "SELECT league_id, league_name, scoring_type, last_changed_date FROM league";

const PERFORMANCE_SELECT: &str = "SELECT performance_id, week_number, fantasy_points,
                                         player_id, last_changed_date
                                  FROM performance";

impl Session {
    /// Get a single player by primary key
    pub fn get_player(&self, player_id: PlayerId) -> Result<Option<Player>> {
        let Some(id) = sql_id(player_id.as_u64()) else {
            return Ok(None);
        };
        let mut stmt = self
            .conn
            .prepare_cached(&format!("{} WHERE player_id = ?", PLAYER_SELECT))?;
        let player = stmt
            .query_row(params![id], row_to_player)
            .optional()?;
        Ok(player)
    }

    /// Get a page of players, optionally filtered by exact name and changed date
    pub fn get_players(&self, page: Page, filter: &PlayerFilter) -> Result<Vec<Player>> {
        let query = SelectBuilder::new(PLAYER_SELECT)
            .eq("first_name", filter.first_name.clone())
            .eq("last_name", filter.last_name.clone())
            .min_date("last_changed_date", filter.min_last_changed_date)
            .order_by("player_id")
            .paginate(page);

        let players = self.collect(&query, row_to_player)?;
        debug!(count = players.len(), ?page, ?filter, "get_players");
        Ok(players)
    }

    /// Get a single team by primary key
    pub fn get_team(&self, team_id: TeamId) -> Result<Option<Team>> {
        let Some(id) = sql_id(team_id.as_u64()) else {
            return Ok(None);
        };
        let mut stmt = self
            .conn
            .prepare_cached(&format!("{} WHERE team_id = ?", TEAM_SELECT))?;
        let team = stmt
            .query_row(params![id], row_to_team)
            .optional()?;
        Ok(team)
    }

    /// Get a page of teams, optionally limited to one league and a changed date
    pub fn get_teams(&self, page: Page, filter: &TeamFilter) -> Result<Vec<Team>> {
        let query = SelectBuilder::new(TEAM_SELECT)
            .eq_id("league_id", filter.league_id.map(|id| id.as_u64()))
            .min_date("last_changed_date", filter.min_last_changed_date)
            .order_by("team_id")
            .paginate(page);

        let teams = self.collect(&query, row_to_team)?;
        debug!(count = teams.len(), ?page, ?filter, "get_teams");
        Ok(teams)
    }

    /// All players on a team, ordered by player ID
    pub fn get_team_players(&self, team_id: TeamId) -> Result<Vec<Player>> {
        let query = SelectBuilder::new(PLAYER_SELECT)
            .eq_id("team_id", Some(team_id.as_u64()))
            .order_by("player_id");
        self.collect(&query, row_to_player)
    }

    /// Get a single league by primary key
    pub fn get_league(&self, league_id: LeagueId) -> Result<Option<League>> {
        let Some(id) = sql_id(league_id.as_u64()) else {
            return Ok(None);
        };
        let mut stmt = self
            .conn
            .prepare_cached(&format!("{} WHERE league_id = ?", LEAGUE_SELECT))?;
        let league = stmt
            .query_row(params![id], row_to_league)
            .optional()?;
        Ok(league)
    }

    /// Get a page of leagues, optionally filtered by changed date
    pub fn get_leagues(
        &self,
        page: Page,
        min_last_changed_date: Option<NaiveDate>,
    ) -> Result<Vec<League>> {
        let query = SelectBuilder::new(LEAGUE_SELECT)
            .min_date("last_changed_date", min_last_changed_date)
            .order_by("league_id")
            .paginate(page);

        let leagues = self.collect(&query, row_to_league)?;
        debug!(count = leagues.len(), ?page, "get_leagues");
        Ok(leagues)
    }

    /// All teams in a league, ordered by team ID
    pub fn get_league_teams(&self, league_id: LeagueId) -> Result<Vec<Team>> {
        let query = SelectBuilder::new(TEAM_SELECT)
            .eq_id("league_id", Some(league_id.as_u64()))
            .order_by("team_id");
        self.collect(&query, row_to_team)
    }

    /// Get a page of weekly performances, optionally filtered by changed date
    pub fn get_performances(
        &self,
        page: Page,
        min_last_changed_date: Option<NaiveDate>,
    ) -> Result<Vec<Performance>> {
        let query = SelectBuilder::new(PERFORMANCE_SELECT)
            .min_date("last_changed_date", min_last_changed_date)
            .order_by("performance_id")
            .paginate(page);

        let performances = self.collect(&query, row_to_performance)?;
        debug!(count = performances.len(), ?page, "get_performances");
        Ok(performances)
    }

    /// Every performance recorded for a player, ordered by performance ID
    pub fn get_player_performances(&self, player_id: PlayerId) -> Result<Vec<Performance>> {
        let query = SelectBuilder::new(PERFORMANCE_SELECT)
            .eq_id("player_id", Some(player_id.as_u64()))
            .order_by("performance_id");
        self.collect(&query, row_to_performance)
    }

    pub fn get_player_count(&self) -> Result<u64> {
        self.count("player")
    }

    pub fn get_team_count(&self) -> Result<u64> {
        self.count("team")
    }

    pub fn get_league_count(&self) -> Result<u64> {
        self.count("league")
    }

    pub fn get_performance_count(&self) -> Result<u64> {
        self.count("performance")
    }

    /// All four table counts from one session
    pub fn get_table_counts(&self) -> Result<TableCounts> {
        Ok(TableCounts {
            players: self.get_player_count()?,
            teams: self.get_team_count()?,
            leagues: self.get_league_count()?,
            performances: self.get_performance_count()?,
        })
    }

    fn count(&self, table: &str) -> Result<u64> {
        let count: u64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })?;
        Ok(count)
    }

    fn collect<T, F>(&self, query: &SelectBuilder, map: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        if query.matches_nothing() {
            return Ok(Vec::new());
        }

        let mut stmt = self.conn.prepare(query.sql())?;
        let rows = stmt.query_map(&query.params()[..], map)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }
}

fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
    Ok(Player {
        player_id: PlayerId::new(row.get(0)?),
        gsis_id: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        position: row.get(4)?,
        team_id: TeamId::new(row.get(5)?),
        last_changed_date: row.get(6)?,
    })
}

fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
    Ok(Team {
        team_id: TeamId::new(row.get(0)?),
        team_name: row.get(1)?,
        league_id: LeagueId::new(row.get(2)?),
        last_changed_date: row.get(3)?,
    })
}

fn row_to_league(row: &Row) -> rusqlite::Result<League> {
    Ok(League {
        league_id: LeagueId::new(row.get(0)?),
        league_name: row.get(1)?,
        scoring_type: row.get(2)?,
        last_changed_date: row.get(3)?,
    })
}

fn row_to_performance(row: &Row) -> rusqlite::Result<Performance> {
    Ok(Performance {
        performance_id: PerformanceId::new(row.get(0)?),
        week_number: row.get(1)?,
        fantasy_points: row.get(2)?,
        player_id: PlayerId::new(row.get(3)?),
        last_changed_date: row.get(4)?,
    })
}
