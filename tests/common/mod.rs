#![allow(dead_code)]

use liftstats::{Exercise, SetEntry, WorkoutEntry, WorkoutSession};

pub fn exercise(id: &str, name: &str) -> Exercise {
    Exercise {
        id: id.to_string(),
        user_id: Some("user1".to_string()),
        name: name.to_string(),
        muscle_group: "chest".to_string(),
        is_custom: false,
    }
}

pub fn work_set(weight_kg: f64, reps: u32) -> SetEntry {
    SetEntry {
        id: format!("set-{weight_kg}x{reps}"),
        weight_kg,
        reps,
        rir: None,
        rpe: None,
        is_warmup: false,
    }
}

pub fn warmup_set(weight_kg: f64, reps: u32) -> SetEntry {
    SetEntry {
        is_warmup: true,
        ..work_set(weight_kg, reps)
    }
}

pub fn effort_set(weight_kg: f64, reps: u32, rir: Option<f64>, rpe: Option<f64>) -> SetEntry {
    SetEntry {
        rir,
        rpe,
        ..work_set(weight_kg, reps)
    }
}

/// A session holding a single entry for `exercise_id` on the given ISO date.
pub fn session(id: &str, date: &str, exercise_id: &str, sets: Vec<SetEntry>) -> WorkoutSession {
    WorkoutSession {
        id: id.to_string(),
        date: WorkoutSession::parse_date(date).expect("fixture date"),
        entries: vec![WorkoutEntry {
            id: format!("{id}-entry"),
            exercise_id: exercise_id.to_string(),
            sets,
            variant: None,
        }],
        note: None,
    }
}
