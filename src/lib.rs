//! Strength-trend analytics for logged workouts.
//!
//! The crate turns raw session/set records fetched by an external store into
//! per-exercise trend classifications, time-bucketed aggregates and
//! estimated-1RM projections. All computation is pure and synchronous: the
//! caller supplies an in-memory snapshot of exercises and sessions, and
//! identical inputs always yield identical outputs.

pub mod aggregate;
pub mod e1rm;
pub mod error;
pub mod models;
pub mod stats;
pub mod trend;
pub mod units;

pub use aggregate::{build_bucket_rows, bucket_totals, BucketRow, BucketTotals, Timeframe};
pub use error::{Result, StatsError};
pub use models::{
    Exercise, ExerciseStats, HistoryPoint, SetEntry, TrendStatus, WorkoutEntry, WorkoutSession,
};
pub use stats::{calculate_all_stats, calculate_exercise_stats};
pub use units::{convert_weight, format_weight, Unit, KG_TO_LB};
