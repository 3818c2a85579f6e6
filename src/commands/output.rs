//! Output models used for printing and JSON serialization.

use crate::storage::{League, Performance, Player, TableCounts, Team};
use serde::Serialize;
use std::io::{self, Write};

/// A player together with their weekly performances.
#[derive(Debug, Serialize)]
pub struct PlayerDetail {
    #[serde(flatten)]
    pub player: Player,
    pub performances: Vec<Performance>,
}

/// A league together with its teams.
#[derive(Debug, Serialize)]
pub struct LeagueDetail {
    #[serde(flatten)]
    pub league: League,
    pub teams: Vec<Team>,
}

/// A team together with its players.
#[derive(Debug, Serialize)]
pub struct TeamDetail {
    #[serde(flatten)]
    pub team: Team,
    pub players: Vec<Player>,
}

/// Write `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> crate::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_player<W: Write>(out: &mut W, player: &Player) -> io::Result<()> {
    writeln!(
        out,
        "{} {} ({}) team {} [changed {}]",
        player.player_id,
        player.full_name(),
        player.position,
        player.team_id,
        player.last_changed_date
    )
}

pub fn write_team<W: Write>(out: &mut W, team: &Team) -> io::Result<()> {
    writeln!(
        out,
        "{} {} league {} [changed {}]",
        team.team_id, team.team_name, team.league_id, team.last_changed_date
    )
}

pub fn write_league<W: Write>(out: &mut W, league: &League) -> io::Result<()> {
    writeln!(
        out,
        "{} {} ({}) [changed {}]",
        league.league_id, league.league_name, league.scoring_type, league.last_changed_date
    )
}

pub fn write_performance<W: Write>(out: &mut W, performance: &Performance) -> io::Result<()> {
    writeln!(
        out,
        "{} week {} player {}: {:.2} pts [changed {}]",
        performance.performance_id,
        performance.week_number,
        performance.player_id,
        performance.fantasy_points,
        performance.last_changed_date
    )
}

pub fn write_counts<W: Write>(out: &mut W, counts: &TableCounts) -> io::Result<()> {
    writeln!(out, "players: {}", counts.players)?;
    writeln!(out, "teams: {}", counts.teams)?;
    writeln!(out, "leagues: {}", counts.leagues)?;
    writeln!(out, "performances: {}", counts.performances)
}
