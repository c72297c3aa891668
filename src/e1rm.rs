//! Epley-formula strength estimation and RIR/RPE cross-mapping.

use serde::Serialize;

use crate::models::SetEntry;
use crate::units::round1;

/// Epley formula: `weight * (1 + reps / 30)`.
///
/// Holds for `reps >= 1`; a single rep returns the weight unchanged.
/// `reps == 0` is undefined — callers filter degenerate sets upstream
/// (see [`SetEntry::is_work_set`]), this function does not validate.
pub fn calculate_e1rm(weight: f64, reps: u32) -> f64 {
    if reps == 1 {
        return weight;
    }
    weight * (1.0 + reps as f64 / 30.0)
}

/// Inverse Epley: `30 * (e1rm / weight - 1)`, floored and clamped to >= 0.
/// Returns 0 for non-positive weight or e1RM.
pub fn estimate_max_reps_at_weight(weight: f64, e1rm: f64) -> u32 {
    if weight <= 0.0 || e1rm <= 0.0 {
        return 0;
    }
    let reps = 30.0 * (e1rm / weight - 1.0);
    reps.max(0.0).floor() as u32
}

/// RPE = 10 - RIR, clamped to the 1-10 scale. A linear convention, not a
/// physiological truth.
pub fn rpe_from_rir(rir: f64) -> f64 {
    (10.0 - rir).clamp(1.0, 10.0)
}

/// RIR = 10 - RPE, clamped to 0-10.
pub fn rir_from_rpe(rpe: f64) -> f64 {
    (10.0 - rpe).clamp(0.0, 10.0)
}

/// Reps left in the tank for a set, given an e1RM context.
pub fn estimate_rir_from_set(weight: f64, reps: u32, e1rm: f64) -> u32 {
    estimate_max_reps_at_weight(weight, e1rm).saturating_sub(reps)
}

/// Achievable reps at a target RIR, given an e1RM context.
pub fn estimate_reps_from_rir(weight: f64, e1rm: f64, rir: f64) -> u32 {
    let reps = estimate_max_reps_at_weight(weight, e1rm) as f64 - rir;
    reps.max(0.0).floor() as u32
}

/// Best e1RM across the work sets of one entry. 0 if none qualify.
pub fn session_max_e1rm(sets: &[SetEntry]) -> f64 {
    sets.iter()
        .filter(|set| set.is_work_set())
        .map(|set| calculate_e1rm(set.weight_kg, set.reps))
        .fold(0.0, f64::max)
}

/// Result of the quick estimator: e1RM plus the RIR/RPE pair normalized
/// from whichever of the two the lifter reported.
#[derive(Debug, Clone, Serialize)]
pub struct QuickEstimate {
    pub e1rm_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rir: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,
    pub max_reps: u32,
    /// Achievable reps at the normalized RIR; 0 when no RIR/RPE was given.
    pub reps_at_rir: u32,
}

/// One-shot estimate for a hypothetical set: weight in kg, reps, and
/// optionally RIR and/or RPE. Missing RIR/RPE is derived from the other.
pub fn quick_estimate(
    weight_kg: f64,
    reps: u32,
    rir: Option<f64>,
    rpe: Option<f64>,
) -> QuickEstimate {
    let e1rm_kg = if reps > 0 {
        calculate_e1rm(weight_kg, reps)
    } else {
        0.0
    };

    let normalized_rir = rir.or_else(|| rpe.map(rir_from_rpe));
    let normalized_rpe = rpe.or_else(|| rir.map(rpe_from_rir));

    let max_reps = if e1rm_kg > 0.0 && weight_kg > 0.0 {
        estimate_max_reps_at_weight(weight_kg, e1rm_kg)
    } else {
        0
    };
    let reps_at_rir = normalized_rir
        .map(|r| estimate_reps_from_rir(weight_kg, e1rm_kg, r))
        .unwrap_or(0);

    QuickEstimate {
        e1rm_kg,
        rir: normalized_rir.map(round1),
        rpe: normalized_rpe.map(round1),
        max_reps,
        reps_at_rir,
    }
}
