//! `get` command implementation

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use super::output::{
    write_json, write_league, write_performance, write_player, write_team, LeagueDetail,
    PlayerDetail, TeamDetail,
};
use crate::{cli::GetCmd, storage::Database};

/// Handle the `get` subcommands, writing text or JSON to `out`
pub fn handle_get<W: Write>(db: &Database, cmd: GetCmd, out: &mut W) -> Result<()> {
    let session = db.session().context("Failed to acquire database session")?;

    match cmd {
        GetCmd::Player {
            player_id,
            with_performances,
            json,
        } => {
            let Some(player) = session
                .get_player(player_id)
                .with_context(|| format!("Failed to load player {}", player_id))?
            else {
                writeln!(out, "Player {} not found", player_id)?;
                return Ok(());
            };

            if with_performances {
                let performances = session.get_player_performances(player_id)?;
                let detail = PlayerDetail {
                    player,
                    performances,
                };
                if json {
                    write_json(out, &detail)?;
                } else {
                    write_player(out, &detail.player)?;
                    for performance in &detail.performances {
                        write!(out, "  ")?;
                        write_performance(out, performance)?;
                    }
                }
            } else if json {
                write_json(out, &player)?;
            } else {
                write_player(out, &player)?;
            }
        }

        GetCmd::Players {
            page,
            filters,
            json,
        } => {
            let filter = filters.filter();
            let players = session
                .get_players(page.page(), &filter)
                .context("Failed to load players")?;
            info!(count = players.len(), "players loaded");

            if json {
                write_json(out, &players)?;
            } else {
                for player in &players {
                    write_player(out, player)?;
                }
            }
        }

        GetCmd::League {
            league_id,
            with_teams,
            json,
        } => {
            let Some(league) = session
                .get_league(league_id)
                .with_context(|| format!("Failed to load league {}", league_id))?
            else {
                writeln!(out, "League {} not found", league_id)?;
                return Ok(());
            };

            if with_teams {
                let teams = session.get_league_teams(league_id)?;
                let detail = LeagueDetail { league, teams };
                if json {
                    write_json(out, &detail)?;
                } else {
                    write_league(out, &detail.league)?;
                    for team in &detail.teams {
                        write!(out, "  ")?;
                        write_team(out, team)?;
                    }
                }
            } else if json {
                write_json(out, &league)?;
            } else {
                write_league(out, &league)?;
            }
        }

        GetCmd::Leagues { page, since, json } => {
            let leagues = session
                .get_leagues(page.page(), since)
                .context("Failed to load leagues")?;
            info!(count = leagues.len(), "leagues loaded");

            if json {
                write_json(out, &leagues)?;
            } else {
                for league in &leagues {
                    write_league(out, league)?;
                }
            }
        }

        GetCmd::Teams {
            page,
            filters,
            with_players,
            json,
        } => {
            let filter = filters.filter();
            let teams = session
                .get_teams(page.page(), &filter)
                .context("Failed to load teams")?;
            info!(count = teams.len(), "teams loaded");

            if with_players {
                let mut details = Vec::with_capacity(teams.len());
                for team in teams {
                    let players = session.get_team_players(team.team_id)?;
                    details.push(TeamDetail { team, players });
                }

                if json {
                    write_json(out, &details)?;
                } else {
                    for detail in &details {
                        write_team(out, &detail.team)?;
                        for player in &detail.players {
                            write!(out, "  ")?;
                            write_player(out, player)?;
                        }
                    }
                }
            } else if json {
                write_json(out, &teams)?;
            } else {
                for team in &teams {
                    write_team(out, team)?;
                }
            }
        }

        GetCmd::Performances { page, since, json } => {
            let performances = session
                .get_performances(page.page(), since)
                .context("Failed to load performances")?;
            info!(count = performances.len(), "performances loaded");

            if json {
                write_json(out, &performances)?;
            } else {
                for performance in &performances {
                    write_performance(out, performance)?;
                }
            }
        }
    }

    Ok(())
}
