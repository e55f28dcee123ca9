pub mod create;
pub mod delete;
pub mod due;
pub mod edit;
pub mod init;
pub mod list;
pub mod priority;
pub mod restore;
pub mod show;
pub mod stats;
pub mod status;
pub mod sync;
pub mod tag;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::{Result, TasqError};

/// Parse a YYYY-MM-DD due date as midnight UTC.
pub(crate) fn parse_due_date(input: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| TasqError::InvalidDate(input.to_string()))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}
