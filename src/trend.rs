//! Classifies an exercise's trajectory from its session history.
//!
//! The baseline math is deliberately separate from the RIR/RPE effort
//! aggregation: [`trend_summary`] carries the e1RM comparison alone, and
//! the orchestrator layers [`latest_session_effort`] on top.

use chrono::{DateTime, Utc};

use crate::e1rm::{rir_from_rpe, rpe_from_rir, session_max_e1rm};
use crate::models::{Exercise, TrendStatus, WorkoutSession};
use crate::units::round1;

/// Percent change beyond which a trend counts as improving/declining.
pub const TREND_THRESHOLD_PERCENT: f64 = 2.0;

/// Number of prior sessions averaged into the comparison baseline.
pub const BASELINE_WINDOW: usize = 2;

/// One qualifying session reduced to its date and best e1RM (kg).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPoint {
    pub date: DateTime<Utc>,
    pub max_e1rm: f64,
}

/// Baseline trend comparison for one exercise, all weights in kg.
#[derive(Debug, Clone)]
pub struct TrendSummary {
    pub last_session_date: Option<DateTime<Utc>>,
    pub current_e1rm: f64,
    pub previous_avg_e1rm: f64,
    pub trend_percent: f64,
    pub status: TrendStatus,
    /// Qualifying sessions oldest-first, chart order.
    pub history: Vec<SessionPoint>,
}

/// Average RIR/RPE of the most recent session containing an exercise.
#[derive(Debug, Clone, Default)]
pub struct SessionEffort {
    pub avg_rir: Option<f64>,
    pub avg_rpe: Option<f64>,
}

/// Reduces `sessions` to the qualifying points for `exercise`: one
/// `(date, session_max_e1rm)` pair per session containing it, kept only
/// where the max is positive, newest first.
fn qualifying_points(exercise: &Exercise, sessions: &[WorkoutSession]) -> Vec<SessionPoint> {
    let mut points: Vec<SessionPoint> = sessions
        .iter()
        .filter_map(|session| {
            let entry = session
                .entries
                .iter()
                .find(|e| e.exercise_id == exercise.id)?;
            let max_e1rm = session_max_e1rm(&entry.sets);
            (max_e1rm > 0.0).then(|| SessionPoint {
                date: session.date,
                max_e1rm,
            })
        })
        .collect();
    points.sort_by(|a, b| b.date.cmp(&a.date));
    points
}

/// Compares the newest session against the average of the two before it.
/// With a single prior session the baseline is that session alone; with
/// none it is the current value itself, yielding a 0% trend. Zero
/// qualifying sessions produce [`TrendStatus::New`] with empty history.
pub fn trend_summary(exercise: &Exercise, sessions: &[WorkoutSession]) -> TrendSummary {
    let points = qualifying_points(exercise, sessions);

    let Some(current) = points.first().cloned() else {
        return TrendSummary {
            last_session_date: None,
            current_e1rm: 0.0,
            previous_avg_e1rm: 0.0,
            trend_percent: 0.0,
            status: TrendStatus::New,
            history: Vec::new(),
        };
    };

    let baseline_points = &points[1..points.len().min(1 + BASELINE_WINDOW)];
    let baseline = if baseline_points.is_empty() {
        current.max_e1rm
    } else {
        baseline_points.iter().map(|p| p.max_e1rm).sum::<f64>() / baseline_points.len() as f64
    };

    let trend_percent = if baseline > 0.0 {
        round1((current.max_e1rm - baseline) / baseline * 100.0)
    } else {
        0.0
    };

    let status = if trend_percent >= TREND_THRESHOLD_PERCENT {
        TrendStatus::Improving
    } else if trend_percent <= -TREND_THRESHOLD_PERCENT {
        TrendStatus::Declining
    } else {
        TrendStatus::Maintaining
    };

    let mut history = points;
    history.reverse();

    TrendSummary {
        last_session_date: Some(current.date),
        current_e1rm: current.max_e1rm,
        previous_avg_e1rm: baseline,
        trend_percent,
        status,
        history,
    }
}

/// Average RIR and RPE over the work sets of the most recent session that
/// contains `exercise`, regardless of whether that session qualified for
/// the e1RM trend. A set missing one value borrows it from the other via
/// the linear mapping; averages are rounded to one decimal. Both are `None`
/// when the session has no work sets or no session contains the exercise.
pub fn latest_session_effort(exercise: &Exercise, sessions: &[WorkoutSession]) -> SessionEffort {
    let Some(session) = sessions
        .iter()
        .filter(|s| s.entries.iter().any(|e| e.exercise_id == exercise.id))
        .max_by_key(|s| s.date)
    else {
        return SessionEffort::default();
    };

    let Some(entry) = session
        .entries
        .iter()
        .find(|e| e.exercise_id == exercise.id)
    else {
        return SessionEffort::default();
    };

    let mut rir_sum = 0.0;
    let mut rir_count = 0u32;
    let mut rpe_sum = 0.0;
    let mut rpe_count = 0u32;

    for set in entry.sets.iter().filter(|s| s.is_work_set()) {
        if let Some(rir) = set.rir.or_else(|| set.rpe.map(rir_from_rpe)) {
            rir_sum += rir;
            rir_count += 1;
        }
        if let Some(rpe) = set.rpe.or_else(|| set.rir.map(rpe_from_rir)) {
            rpe_sum += rpe;
            rpe_count += 1;
        }
    }

    SessionEffort {
        avg_rir: (rir_count > 0).then(|| round1(rir_sum / rir_count as f64)),
        avg_rpe: (rpe_count > 0).then(|| round1(rpe_sum / rpe_count as f64)),
    }
}
