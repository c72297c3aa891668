//! Time-bucketed aggregation of one exercise's sets across sessions.
//!
//! Buckets live in a `BTreeMap` keyed by a zero-padded bucket key
//! (`YYYY-MM-DD`, `YYYY-Www`, `YYYY-MM`, `YYYY`), so plain string order is
//! chronological order. Rows are emitted in descending key order,
//! most-recent-first. Weight values stay in canonical kilograms; callers
//! render them with [`crate::units::format_weight`].

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::e1rm::calculate_e1rm;
use crate::error::StatsError;
use crate::models::{Exercise, WorkoutSession};
use crate::units::round1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Day,
    Week,
    Month,
    Year,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Day => "day",
            Timeframe::Week => "week",
            Timeframe::Month => "month",
            Timeframe::Year => "year",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Timeframe::Day),
            "week" => Ok(Timeframe::Week),
            "month" => Ok(Timeframe::Month),
            "year" => Ok(Timeframe::Year),
            other => Err(StatsError::UnknownTimeframe(other.to_string())),
        }
    }
}

/// Zero-padded bucket key for a session date. Week keys use the ISO 8601
/// week (Monday start, week of the nearest Thursday), so the key year can
/// differ from the calendar year at year boundaries.
pub fn bucket_key(date: DateTime<Utc>, timeframe: Timeframe) -> String {
    match timeframe {
        Timeframe::Day => date.format("%Y-%m-%d").to_string(),
        Timeframe::Month => date.format("%Y-%m").to_string(),
        Timeframe::Year => date.format("%Y").to_string(),
        Timeframe::Week => {
            let week = date.iso_week();
            format!("{}-W{:02}", week.year(), week.week())
        }
    }
}

/// Human-readable rendering of a bucket key.
pub fn bucket_label(key: &str, timeframe: Timeframe) -> String {
    match timeframe {
        Timeframe::Week => match key.split_once("-W") {
            Some((year, week)) => format!("Semana {week} {year}"),
            None => key.to_string(),
        },
        _ => key.to_string(),
    }
}

/// One aggregated row per bucket, most-recent-first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketRow {
    pub label: String,
    /// Distinct sessions contributing to the bucket.
    pub session_count: usize,
    pub best_e1rm: f64,
    pub avg_e1rm: f64,
    /// Summed `weight * reps` over work sets, in kg.
    pub volume: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_rir: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_rpe: Option<f64>,
    /// Contributing session IDs, sorted, for drill-down.
    pub session_ids: Vec<String>,
}

#[derive(Debug, Default)]
struct BucketAccumulator {
    e1rm_sum: f64,
    e1rm_best: f64,
    set_count: u32,
    volume: f64,
    rir_sum: f64,
    rir_count: u32,
    rpe_sum: f64,
    rpe_count: u32,
    session_ids: BTreeSet<String>,
}

impl BucketAccumulator {
    fn into_row(self, label: String) -> BucketRow {
        let avg_e1rm = if self.set_count > 0 {
            self.e1rm_sum / self.set_count as f64
        } else {
            0.0
        };
        let avg_rir = (self.rir_count > 0).then(|| round1(self.rir_sum / self.rir_count as f64));
        let avg_rpe = (self.rpe_count > 0).then(|| round1(self.rpe_sum / self.rpe_count as f64));
        BucketRow {
            label,
            session_count: self.session_ids.len(),
            best_e1rm: self.e1rm_best,
            avg_e1rm,
            volume: self.volume,
            avg_rir,
            avg_rpe,
            session_ids: self.session_ids.into_iter().collect(),
        }
    }
}

/// Buckets every session containing `exercise` into `timeframe` windows and
/// summarizes each window over work sets. A session whose entry holds only
/// warm-ups still counts toward the bucket's session list, with zeroed
/// metrics.
pub fn build_bucket_rows(
    exercise: &Exercise,
    sessions: &[WorkoutSession],
    timeframe: Timeframe,
) -> Vec<BucketRow> {
    let mut buckets: BTreeMap<String, BucketAccumulator> = BTreeMap::new();

    for session in sessions {
        let Some(entry) = session
            .entries
            .iter()
            .find(|e| e.exercise_id == exercise.id)
        else {
            continue;
        };

        let key = bucket_key(session.date, timeframe);
        let bucket = buckets.entry(key).or_default();

        for set in entry.sets.iter().filter(|s| s.is_work_set()) {
            let e1rm = calculate_e1rm(set.weight_kg, set.reps);
            bucket.e1rm_sum += e1rm;
            bucket.e1rm_best = bucket.e1rm_best.max(e1rm);
            bucket.set_count += 1;
            bucket.volume += set.weight_kg * set.reps as f64;
            if let Some(rir) = set.rir {
                bucket.rir_sum += rir;
                bucket.rir_count += 1;
            }
            if let Some(rpe) = set.rpe {
                bucket.rpe_sum += rpe;
                bucket.rpe_count += 1;
            }
        }

        bucket.session_ids.insert(session.id.clone());
    }

    buckets
        .into_iter()
        .rev()
        .map(|(key, acc)| {
            let label = bucket_label(&key, timeframe);
            acc.into_row(label)
        })
        .collect()
}

/// Aggregates across all buckets of one timeframe. Each bucket weighs
/// equally in the averages regardless of how many sets it holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BucketTotals {
    pub best_e1rm: f64,
    pub avg_e1rm: f64,
    pub volume: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_rir: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_rpe: Option<f64>,
}

pub fn bucket_totals(rows: &[BucketRow]) -> BucketTotals {
    if rows.is_empty() {
        return BucketTotals::default();
    }

    let mut totals = BucketTotals::default();
    let mut rir_sum = 0.0;
    let mut rir_count = 0u32;
    let mut rpe_sum = 0.0;
    let mut rpe_count = 0u32;

    for row in rows {
        totals.best_e1rm = totals.best_e1rm.max(row.best_e1rm);
        totals.avg_e1rm += row.avg_e1rm;
        totals.volume += row.volume;
        if let Some(rir) = row.avg_rir {
            rir_sum += rir;
            rir_count += 1;
        }
        if let Some(rpe) = row.avg_rpe {
            rpe_sum += rpe;
            rpe_count += 1;
        }
    }

    totals.avg_e1rm /= rows.len() as f64;
    totals.avg_rir = (rir_count > 0).then(|| round1(rir_sum / rir_count as f64));
    totals.avg_rpe = (rpe_count > 0).then(|| round1(rpe_sum / rpe_count as f64));
    totals
}
