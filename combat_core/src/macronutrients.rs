//! Macro allocation: calorie target to protein, carb and fat grams.
//!
//! Protein and fat are set per kilogram of bodyweight; carbs take whatever
//! calories remain. Each macro is rounded independently, so the grams may
//! miss the calorie target by a few kcal.

use crate::calories::round_half_even;
use crate::{Goal, MacroGrams};

/// Atwater energy factors, kcal per gram
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
pub const CARB_KCAL_PER_G: f64 = 4.0;
pub const FAT_KCAL_PER_G: f64 = 9.0;

/// Split a daily calorie target into macro grams
///
/// Carbs are floored at zero when protein and fat alone exceed the target.
pub fn compute_macros(weight_kg: f64, target_kcal: u32, goal: Goal) -> MacroGrams {
    let policy = goal.policy();

    let protein = policy.protein_g_per_kg * weight_kg;
    let fat = policy.fat_g_per_kg * weight_kg;

    let remaining_kcal =
        f64::from(target_kcal) - PROTEIN_KCAL_PER_G * protein - FAT_KCAL_PER_G * fat;
    if remaining_kcal < 0.0 {
        tracing::debug!(
            "Protein and fat exceed {} kcal by {:.0} kcal, carbs set to zero",
            target_kcal,
            -remaining_kcal
        );
    }
    let carbs = remaining_kcal.max(0.0) / CARB_KCAL_PER_G;

    let macros = MacroGrams {
        protein_g: round_half_even(protein),
        carbs_g: round_half_even(carbs),
        fat_g: round_half_even(fat),
    };

    tracing::debug!(
        "Macros for {}: P {} g, C {} g, F {} g",
        goal,
        macros.protein_g,
        macros.carbs_g,
        macros.fat_g
    );

    macros
}

impl MacroGrams {
    /// Calories implied by the rounded grams
    pub fn total_kcal(&self) -> f64 {
        PROTEIN_KCAL_PER_G * f64::from(self.protein_g)
            + CARB_KCAL_PER_G * f64::from(self.carbs_g)
            + FAT_KCAL_PER_G * f64::from(self.fat_g)
    }
}
