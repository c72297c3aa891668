//! Per-exercise summary records for the presentation layer.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::models::{Exercise, ExerciseStats, HistoryPoint, WorkoutEntry, WorkoutSession};
use crate::trend::{latest_session_effort, trend_summary};
use crate::units::{format_weight, Unit};

/// Short month names matching the app's es-MX display locale.
const SHORT_MONTHS: &[&str; 12] = &[
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

fn date_label(date: DateTime<Utc>) -> String {
    format!("{} {}", date.day(), SHORT_MONTHS[date.month0() as usize])
}

/// Full summary for one exercise: trend classification, chart history and
/// latest-session effort, with every weight converted to `unit` at integer
/// precision.
pub fn calculate_exercise_stats(
    exercise: &Exercise,
    sessions: &[WorkoutSession],
    unit: Unit,
) -> ExerciseStats {
    let summary = trend_summary(exercise, sessions);
    let effort = latest_session_effort(exercise, sessions);

    tracing::debug!(
        exercise = %exercise.name,
        status = summary.status.as_str(),
        trend_percent = summary.trend_percent,
        "classified exercise trend"
    );

    let history = summary
        .history
        .iter()
        .map(|point| HistoryPoint {
            date: date_label(point.date),
            e1rm: format_weight(point.max_e1rm, unit, 0),
        })
        .collect();

    ExerciseStats {
        exercise_id: exercise.id.clone(),
        exercise_name: exercise.name.clone(),
        last_session_date: summary.last_session_date,
        current_e1rm: format_weight(summary.current_e1rm, unit, 0),
        previous_avg_e1rm: format_weight(summary.previous_avg_e1rm, unit, 0),
        trend_percent: summary.trend_percent,
        status: summary.status,
        history,
        avg_rir: effort.avg_rir,
        avg_rpe: effort.avg_rpe,
    }
}

/// One record per exercise, sorted by last-session date descending.
/// Exercises never logged sort last, treated as epoch 0.
pub fn calculate_all_stats(
    exercises: &[Exercise],
    sessions: &[WorkoutSession],
    unit: Unit,
) -> Vec<ExerciseStats> {
    let mut stats: Vec<ExerciseStats> = exercises
        .iter()
        .map(|exercise| calculate_exercise_stats(exercise, sessions, unit))
        .collect();
    stats.sort_by_key(|s| {
        std::cmp::Reverse(s.last_session_date.unwrap_or(DateTime::<Utc>::UNIX_EPOCH))
    });
    stats
}

/// Sessions newest-first, truncated to `limit`, for the recent-activity
/// feed.
pub fn recent_sessions(sessions: &[WorkoutSession], limit: usize) -> Vec<&WorkoutSession> {
    let mut sorted: Vec<&WorkoutSession> = sessions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

/// Per-entry figures for session cards: total work-set volume and the
/// heaviest work-set weight, both in kg.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntrySummary {
    pub volume: f64,
    pub best_set_weight: f64,
}

pub fn entry_summary(entry: &WorkoutEntry) -> EntrySummary {
    let mut summary = EntrySummary::default();
    for set in entry.sets.iter().filter(|s| s.is_work_set()) {
        summary.volume += set.weight_kg * set.reps as f64;
        summary.best_set_weight = summary.best_set_weight.max(set.weight_kg);
    }
    summary
}
