//! Shared fixture: an on-disk database with the same shape as the
//! SportsWorld Central production data.
//!
//! - 5 leagues (5001..=5005)
//! - 20 teams: 12 in league 5001, 8 in league 5002
//! - 1018 players (1001..=2018); team 1 holds exactly 7 of them
//! - 17306 performances, the last 2711 changed on or after 2024-04-01

#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use rusqlite::params;
use swc_data::{storage::Database, DatabaseConfig};
use tempfile::TempDir;

pub const PLAYER_COUNT: u64 = 1018;
pub const TEAM_COUNT: u64 = 20;
pub const LEAGUE_COUNT: u64 = 5;
pub const PERFORMANCE_COUNT: u64 = 17306;
pub const RECENT_PERFORMANCE_COUNT: u64 = 2711;

const FIRST_PLAYER_ID: u64 = 1001;
const BRYCE_YOUNG_ID: u64 = 2009;
const FIRST_TEAM_ROSTER: u64 = 7;

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
}

fn after(days: u64) -> NaiveDate {
    test_date().checked_add_days(Days::new(days)).unwrap()
}

fn before(days: u64) -> NaiveDate {
    test_date().checked_sub_days(Days::new(days)).unwrap()
}

pub struct Fixture {
    // Keeps the database file alive for the duration of the test
    pub dir: TempDir,
    pub config: DatabaseConfig,
}

impl Fixture {
    /// Open the fixture through a fresh read-only pool
    pub fn open(&self) -> Database {
        Database::open(&self.config.clone().read_only(true)).unwrap()
    }
}

pub fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig::new(dir.path().join("fantasy_data.db"));

    let db = Database::create(&config).unwrap();
    let session = db.session().unwrap();
    let tx = session.connection().unchecked_transaction().unwrap();

    for (i, league_id) in (5001..=5005u64).enumerate() {
        tx.execute(
            "INSERT INTO league (league_id, league_name, scoring_type, last_changed_date)
             VALUES (?, ?, ?, ?)",
            params![
                league_id,
                format!("League {}", league_id),
                if i % 2 == 0 { "PPR" } else { "Half-PPR" },
                after(i as u64)
            ],
        )
        .unwrap();
    }

    for team_id in 1..=TEAM_COUNT {
        let league_id: u64 = if team_id <= 12 { 5001 } else { 5002 };
        tx.execute(
            "INSERT INTO team (team_id, team_name, league_id, last_changed_date)
             VALUES (?, ?, ?, ?)",
            params![team_id, format!("Team {}", team_id), league_id, after(team_id % 3)],
        )
        .unwrap();
    }

    {
        let mut stmt = tx
            .prepare(
                "INSERT INTO player (player_id, gsis_id, first_name, last_name, position,
                                     team_id, last_changed_date)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .unwrap();

        let positions = ["QB", "RB", "WR", "TE", "K"];
        for player_id in FIRST_PLAYER_ID..FIRST_PLAYER_ID + PLAYER_COUNT {
            let offset = player_id - FIRST_PLAYER_ID;
            let team_id = if offset < FIRST_TEAM_ROSTER {
                1
            } else {
                2 + (offset - FIRST_TEAM_ROSTER) % (TEAM_COUNT - 1)
            };
            let (first_name, last_name) = if player_id == BRYCE_YOUNG_ID {
                ("Bryce".to_string(), "Young".to_string())
            } else {
                (format!("First{}", player_id), format!("Last{}", player_id))
            };

            stmt.execute(params![
                player_id,
                format!("00-{:07}", player_id),
                first_name,
                last_name,
                positions[(offset % 5) as usize],
                team_id,
                after(offset % 30)
            ])
            .unwrap();
        }
    }

    {
        let mut stmt = tx
            .prepare(
                "INSERT INTO performance (performance_id, week_number, fantasy_points,
                                          player_id, last_changed_date)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .unwrap();

        let stale = PERFORMANCE_COUNT - RECENT_PERFORMANCE_COUNT;
        for performance_id in 1..=PERFORMANCE_COUNT {
            let changed = if performance_id <= stale {
                before(1 + performance_id % 200)
            } else {
                after(performance_id % 60)
            };
            let week = 1 + (performance_id / PLAYER_COUNT) % 17;

            stmt.execute(params![
                performance_id,
                format!("2023{:02}", week),
                (performance_id % 400) as f64 / 10.0,
                FIRST_PLAYER_ID + performance_id % PLAYER_COUNT,
                changed
            ])
            .unwrap();
        }
    }

    tx.commit().unwrap();
    drop(session);

    Fixture { dir, config }
}
