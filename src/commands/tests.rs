//! Unit tests for command handlers

use super::*;
use crate::cli::{GetCmd, PageArgs, PlayerFilterArgs, TeamFilterArgs};
use crate::config::DatabaseConfig;
use crate::storage::Database;
use crate::{LeagueId, PlayerId};
use rusqlite::params;

fn seeded_db() -> Database {
    let db = Database::in_memory().unwrap();
    let session = db.session().unwrap();
    let conn = session.connection();

    conn.execute(
        "INSERT INTO league VALUES (5001, 'Pigskin Prodigal Fantasy League', 'PPR', '2024-04-01')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO team VALUES (1, 'Butchers Block', 5001, '2024-04-01')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO player VALUES (2009, '00-0039150', 'Bryce', 'Young', 'QB', 1, '2024-04-01')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO performance VALUES (?, '202301', 9.5, 2009, '2024-04-01')",
        params![1],
    )
    .unwrap();

    drop(session);
    db
}

fn run_get(db: &Database, cmd: GetCmd) -> String {
    let mut out = Vec::new();
    handle_get(db, cmd, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn default_page() -> PageArgs {
    PageArgs {
        skip: 0,
        limit: 100,
    }
}

#[test]
fn test_get_player_text() {
    let db = seeded_db();
    let output = run_get(
        &db,
        GetCmd::Player {
            player_id: PlayerId::new(2009),
            with_performances: false,
            json: false,
        },
    );

    assert!(output.contains("2009 Bryce Young (QB) team 1"));
    assert!(output.contains("changed 2024-04-01"));
}

#[test]
fn test_get_player_not_found() {
    let db = seeded_db();
    let output = run_get(
        &db,
        GetCmd::Player {
            player_id: PlayerId::new(1),
            with_performances: false,
            json: true,
        },
    );

    assert_eq!(output.trim(), "Player 1 not found");
}

#[test]
fn test_get_player_with_performances_json() {
    let db = seeded_db();
    let output = run_get(
        &db,
        GetCmd::Player {
            player_id: PlayerId::new(2009),
            with_performances: true,
            json: true,
        },
    );

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["player_id"], 2009);
    assert_eq!(value["gsis_id"], "00-0039150");
    assert_eq!(value["performances"][0]["fantasy_points"], 9.5);
    assert_eq!(value["performances"][0]["last_changed_date"], "2024-04-01");
}

#[test]
fn test_get_players_json_filters() {
    let db = seeded_db();
    let output = run_get(
        &db,
        GetCmd::Players {
            page: default_page(),
            filters: PlayerFilterArgs {
                first_name: Some("Bryce".to_string()),
                last_name: Some("Smith".to_string()),
                since: None,
            },
            json: true,
        },
    );

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 0);
}

#[test]
fn test_get_league_with_teams_text() {
    let db = seeded_db();
    let output = run_get(
        &db,
        GetCmd::League {
            league_id: LeagueId::new(5001),
            with_teams: true,
            json: false,
        },
    );

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("5001 Pigskin Prodigal Fantasy League (PPR)"));
    assert!(lines[1].starts_with("  1 Butchers Block league 5001"));
}

#[test]
fn test_get_teams_with_players_json() {
    let db = seeded_db();
    let output = run_get(
        &db,
        GetCmd::Teams {
            page: default_page(),
            filters: TeamFilterArgs {
                league_id: Some(LeagueId::new(5001)),
                since: None,
            },
            with_players: true,
            json: true,
        },
    );

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value[0]["team_name"], "Butchers Block");
    assert_eq!(value[0]["players"][0]["last_name"], "Young");
}

#[test]
fn test_get_performances_text() {
    let db = seeded_db();
    let output = run_get(
        &db,
        GetCmd::Performances {
            page: default_page(),
            since: None,
            json: false,
        },
    );

    assert_eq!(
        output.trim(),
        "1 week 202301 player 2009: 9.50 pts [changed 2024-04-01]"
    );
}

#[test]
fn test_get_leagues_respects_page() {
    let db = seeded_db();
    let output = run_get(
        &db,
        GetCmd::Leagues {
            page: PageArgs { skip: 1, limit: 10 },
            since: None,
            json: true,
        },
    );

    assert_eq!(output.trim(), "[]");
}

#[test]
fn test_handle_counts_text_and_json() {
    let db = seeded_db();

    let mut out = Vec::new();
    handle_counts(&db, false, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("players: 1"));
    assert!(text.contains("performances: 1"));

    let mut out = Vec::new();
    handle_counts(&db, true, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["leagues"], 1);
    assert_eq!(value["teams"], 1);
}

#[test]
fn test_handle_init_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig::new(dir.path().join("nested").join("swc.db"));

    let mut out = Vec::new();
    let db = handle_init(&config, &mut out).unwrap();

    assert!(config.path().exists());
    assert!(String::from_utf8(out).unwrap().contains("Database ready"));
    assert_eq!(db.with_session(|s| s.get_team_count()).unwrap(), 0);
}
