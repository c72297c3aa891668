use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendStatus {
    Improving,
    Maintaining,
    Declining,
    /// Reserved for exercises with no qualifying history.
    New,
}

impl TrendStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendStatus::Improving => "improving",
            TrendStatus::Maintaining => "maintaining",
            TrendStatus::Declining => "declining",
            TrendStatus::New => "new",
        }
    }
}

/// One point of an exercise's e1RM chart: display date label plus the
/// session-best e1RM already converted to the display unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: String,
    pub e1rm: f64,
}

/// Derived per-exercise summary, not persisted. Weight fields are in the
/// display unit requested at calculation time.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseStats {
    pub exercise_id: String,
    pub exercise_name: String,
    pub last_session_date: Option<DateTime<Utc>>,
    pub current_e1rm: f64,
    /// Average of the two sessions preceding the current one.
    pub previous_avg_e1rm: f64,
    pub trend_percent: f64,
    pub status: TrendStatus,
    pub history: Vec<HistoryPoint>,
    /// Average RIR of the most recent session, if any set reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_rir: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_rpe: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_status_as_str() {
        assert_eq!(TrendStatus::Improving.as_str(), "improving");
        assert_eq!(TrendStatus::Maintaining.as_str(), "maintaining");
        assert_eq!(TrendStatus::Declining.as_str(), "declining");
        assert_eq!(TrendStatus::New.as_str(), "new");
    }

    #[test]
    fn test_trend_status_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&TrendStatus::Improving).unwrap(),
            "\"improving\""
        );
        let parsed: TrendStatus = serde_json::from_str("\"new\"").unwrap();
        assert_eq!(parsed, TrendStatus::New);
    }
}
