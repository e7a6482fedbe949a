//! Energy expenditure estimates.
//!
//! BMR uses the Mifflin-St Jeor equation. TDEE scales BMR by an activity
//! multiplier built from weekly training-day counts.

use crate::{EnergyEstimate, InputProfile, Sex};

/// Multiplier for a fully sedentary week
pub const BASE_ACTIVITY_MULTIPLIER: f64 = 1.2;

/// Ceiling on the activity multiplier
pub const MAX_ACTIVITY_MULTIPLIER: f64 = 1.85;

const STRENGTH_DAY_FACTOR: f64 = 0.10;
const BJJ_DAY_FACTOR: f64 = 0.07;
const CARDIO_DAY_FACTOR: f64 = 0.05;

/// Basal metabolic rate in kcal/day
///
/// ```text
/// BMR = 10 × weight_kg + 6.25 × height_cm − 5 × age + s
/// ```
/// where s = +5 for men and −161 for women.
pub fn compute_bmr(profile: &InputProfile) -> f64 {
    let sex_constant = match profile.sex() {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };

    10.0 * profile.weight_kg() + 6.25 * profile.height_cm() - 5.0 * f64::from(profile.age())
        + sex_constant
}

/// Activity multiplier for the profile's training week, capped at 1.85
pub fn activity_multiplier(profile: &InputProfile) -> f64 {
    let mult = BASE_ACTIVITY_MULTIPLIER
        + STRENGTH_DAY_FACTOR * f64::from(profile.strength_days())
        + BJJ_DAY_FACTOR * f64::from(profile.bjj_days())
        + CARDIO_DAY_FACTOR * f64::from(profile.cardio_days());

    if mult > MAX_ACTIVITY_MULTIPLIER {
        tracing::debug!(
            "Activity multiplier {:.2} capped at {:.2}",
            mult,
            MAX_ACTIVITY_MULTIPLIER
        );
    }

    mult.min(MAX_ACTIVITY_MULTIPLIER)
}

/// Total daily energy expenditure in kcal/day
pub fn compute_tdee(bmr: f64, profile: &InputProfile) -> f64 {
    activity_multiplier(profile) * bmr
}

/// Compute both BMR and TDEE for a profile
pub fn estimate_energy(profile: &InputProfile) -> EnergyEstimate {
    let bmr = compute_bmr(profile);
    let tdee = compute_tdee(bmr, profile);

    tracing::debug!("BMR {:.1} kcal, TDEE {:.1} kcal", bmr, tdee);

    EnergyEstimate { bmr, tdee }
}
