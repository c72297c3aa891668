use serde::{Deserialize, Serialize};

use super::SetEntry;

/// One exercise performed within a session, owning its ordered sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub id: String,
    pub exercise_id: String,
    pub sets: Vec<SetEntry>,
    /// e.g. "Incline", "Dumbbell".
    pub variant: Option<String>,
}
