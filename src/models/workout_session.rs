use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::WorkoutEntry;

/// A single dated workout, owning its ordered entries. Immutable after save
/// except for entry/session deletion, which the persistence layer handles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: String,
    pub date: DateTime<Utc>,
    pub entries: Vec<WorkoutEntry>,
    pub note: Option<String>,
}

impl WorkoutSession {
    /// Parses the ISO-8601 date string supplied by the persistence layer.
    /// Accepts a full RFC 3339 timestamp or a bare `YYYY-MM-DD` date, which
    /// is taken as midnight UTC.
    pub fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")?;
        Ok(date.and_time(NaiveTime::MIN).and_utc())
    }
}
