pub mod exercise;
pub mod exercise_stats;
pub mod set_entry;
pub mod workout_entry;
pub mod workout_session;

pub use exercise::Exercise;
pub use exercise_stats::{ExerciseStats, HistoryPoint, TrendStatus};
pub use set_entry::SetEntry;
pub use workout_entry::WorkoutEntry;
pub use workout_session::WorkoutSession;
