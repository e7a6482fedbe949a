//! Daily calorie target from TDEE and goal.

use crate::{CalorieGoal, Goal};

/// Round to the nearest whole number, ties to even.
///
/// Every rounding step in the pipeline goes through here. Inputs are
/// non-negative, and `as` saturates anything below zero to 0.
pub(crate) fn round_half_even(value: f64) -> u32 {
    value.round_ties_even() as u32
}

/// Scale TDEE by the goal's calorie multiplier
///
/// - Cut: 82% of TDEE
/// - Recomp: 98% of TDEE
/// - Slow Bulk: 110% of TDEE
pub fn compute_target_calories(tdee: f64, goal: Goal) -> CalorieGoal {
    let target_kcal = round_half_even(tdee * goal.policy().calorie_multiplier);

    tracing::debug!("{} target: {} kcal from TDEE {:.1}", goal, target_kcal, tdee);

    CalorieGoal { target_kcal }
}
