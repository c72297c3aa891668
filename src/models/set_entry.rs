use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetEntry {
    pub id: String,
    /// Stored canonically in kilograms regardless of display unit.
    pub weight_kg: f64,
    pub reps: u32,
    /// Reps in reserve, 0-10.
    pub rir: Option<f64>,
    /// Rate of perceived exertion, 1-10.
    pub rpe: Option<f64>,
    #[serde(default)]
    pub is_warmup: bool,
}

impl SetEntry {
    /// A work set has positive weight and reps and is not a warm-up.
    /// Only work sets count toward e1RM, volume and trend statistics.
    pub fn is_work_set(&self) -> bool {
        !self.is_warmup && self.weight_kg > 0.0 && self.reps > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(weight_kg: f64, reps: u32, is_warmup: bool) -> SetEntry {
        SetEntry {
            id: "s1".to_string(),
            weight_kg,
            reps,
            rir: None,
            rpe: None,
            is_warmup,
        }
    }

    #[test]
    fn test_work_set_requires_positive_weight_and_reps() {
        assert!(set(100.0, 5, false).is_work_set());
        assert!(!set(0.0, 5, false).is_work_set());
        assert!(!set(100.0, 0, false).is_work_set());
        assert!(!set(-20.0, 5, false).is_work_set());
    }

    #[test]
    fn test_warmups_are_not_work_sets() {
        assert!(!set(100.0, 5, true).is_work_set());
    }
}
