//! Pagination windows, per-entity filters and the SQL builder that applies them.

use crate::cli::types::LeagueId;
use chrono::NaiveDate;
use rusqlite::ToSql;

pub const DEFAULT_SKIP: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 100;

/// A `skip`/`limit` window over a primary-key ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u64,
    pub limit: u64,
}

impl Page {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }

    /// The window immediately after this one, with the same size.
    pub fn next(&self) -> Self {
        Self {
            skip: self.skip.saturating_add(self.limit),
            limit: self.limit,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Optional constraints for player queries. Name filters are exact matches
/// and combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub min_last_changed_date: Option<NaiveDate>,
}

impl PlayerFilter {
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn changed_since(mut self, date: NaiveDate) -> Self {
        self.min_last_changed_date = Some(date);
        self
    }
}

/// Optional constraints for team queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamFilter {
    pub league_id: Option<LeagueId>,
    pub min_last_changed_date: Option<NaiveDate>,
}

impl TeamFilter {
    pub fn in_league(mut self, league_id: LeagueId) -> Self {
        self.league_id = Some(league_id);
        self
    }

    pub fn changed_since(mut self, date: NaiveDate) -> Self {
        self.min_last_changed_date = Some(date);
        self
    }
}

/// SQLite stores integers as `i64`; larger IDs can never match a row.
pub(crate) fn sql_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

/// Incrementally builds a parameterized `SELECT`.
///
/// Conditions are joined with `AND`; a `None` value adds nothing. A condition
/// that no row can satisfy marks the query as matching nothing.
pub(crate) struct SelectBuilder {
    sql: String,
    params: Vec<Box<dyn ToSql>>,
    has_where: bool,
    matches_nothing: bool,
}

impl SelectBuilder {
    pub(crate) fn new(base: &str) -> Self {
        Self {
            sql: base.to_string(),
            params: Vec::new(),
            has_where: false,
            matches_nothing: false,
        }
    }

    fn push_condition(&mut self, condition: &str) {
        self.sql
            .push_str(if self.has_where { " AND " } else { " WHERE " });
        self.sql.push_str(condition);
        self.has_where = true;
    }

    pub(crate) fn eq<T: ToSql + 'static>(mut self, column: &str, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.push_condition(&format!("{} = ?", column));
            self.params.push(Box::new(v));
        }
        self
    }

    /// Integer key match; IDs outside SQLite's integer range match nothing.
    pub(crate) fn eq_id(mut self, column: &str, id: Option<u64>) -> Self {
        if let Some(id) = id {
            match sql_id(id) {
                Some(v) => {
                    self.push_condition(&format!("{} = ?", column));
                    self.params.push(Box::new(v));
                }
                None => self.matches_nothing = true,
            }
        }
        self
    }

    /// Inclusive lower bound: `column >= date`.
    pub(crate) fn min_date(mut self, column: &str, date: Option<NaiveDate>) -> Self {
        if let Some(d) = date {
            self.push_condition(&format!("{} >= ?", column));
            self.params.push(Box::new(d));
        }
        self
    }

    pub(crate) fn order_by(mut self, column: &str) -> Self {
        self.sql.push_str(" ORDER BY ");
        self.sql.push_str(column);
        self
    }

    /// `LIMIT -1` is unbounded in SQLite; an offset past `i64::MAX` is past every row.
    pub(crate) fn paginate(mut self, page: Page) -> Self {
        let limit = i64::try_from(page.limit).unwrap_or(-1);
        match i64::try_from(page.skip) {
            Ok(skip) => {
                self.sql.push_str(" LIMIT ? OFFSET ?");
                self.params.push(Box::new(limit));
                self.params.push(Box::new(skip));
            }
            Err(_) => self.matches_nothing = true,
        }
        self
    }

    pub(crate) fn matches_nothing(&self) -> bool {
        self.matches_nothing
    }

    pub(crate) fn sql(&self) -> &str {
        &self.sql
    }

    pub(crate) fn params(&self) -> Vec<&dyn ToSql> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }
}
