//! Planning pipeline.
//!
//! Runs each stage once, in order:
//! - Energy model (BMR, TDEE)
//! - Calorie target
//! - Macro allocation
//! - Meal split

use crate::calories::compute_target_calories;
use crate::energy::estimate_energy;
use crate::macronutrients::compute_macros;
use crate::meals::split_into_meals;
use crate::{InputProfile, PlanResult};

/// Compute the full plan for a validated profile
///
/// Pure and total: no stage can fail once the profile has been validated.
pub fn create_plan(profile: &InputProfile) -> PlanResult {
    let energy = estimate_energy(profile);
    let calorie_goal = compute_target_calories(energy.tdee, profile.goal());
    let macros = compute_macros(profile.weight_kg(), calorie_goal.target_kcal, profile.goal());
    let meal_plan = split_into_meals(&macros);

    tracing::info!(
        "Created {} plan: {} kcal (P {} g / C {} g / F {} g)",
        profile.goal(),
        calorie_goal.target_kcal,
        macros.protein_g,
        macros.carbs_g,
        macros.fat_g
    );

    PlanResult {
        energy,
        calorie_goal,
        macros,
        meal_plan,
    }
}
