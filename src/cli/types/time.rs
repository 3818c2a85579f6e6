//! Date parsing for `--since` style arguments.

use crate::error::Result;
use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
}
