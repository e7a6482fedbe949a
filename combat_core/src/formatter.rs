//! Plain-text rendering of a computed plan.
//!
//! The output is what gets saved as the `.txt` export. The date is passed in
//! rather than read from the clock, so identical inputs give identical text.

use crate::calories::round_half_even;
use crate::training::{fight_week_advisory, training_split, BJJ_NOTE};
use crate::{CalorieGoal, EnergyEstimate, InputProfile, MacroGrams, MealPlan, PlanResult};
use chrono::NaiveDate;

pub const PLAN_TITLE: &str = "Combat Diet & Training Planner";

/// Render the full plan as text
pub fn format_plan(
    date: NaiveDate,
    profile: &InputProfile,
    energy: &EnergyEstimate,
    calorie_goal: &CalorieGoal,
    macros: &MacroGrams,
    meal_plan: &MealPlan,
) -> String {
    let mut lines = vec![
        PLAN_TITLE.to_string(),
        format!("Plan date: {}", date.format("%Y-%m-%d")),
        String::new(),
    ];

    lines.push("Profile".into());
    lines.push(format!("  {}", body_line(profile)));
    lines.push(format!("  {}", training_line(profile)));
    lines.push(String::new());

    lines.push("Daily Targets".into());
    lines.push(format!(
        "  Calories: {} kcal | Protein: {} g | Carbs: {} g | Fat: {} g",
        calorie_goal.target_kcal, macros.protein_g, macros.carbs_g, macros.fat_g
    ));
    lines.push(format!(
        "  BMR: {} kcal | TDEE: {} kcal",
        round_half_even(energy.bmr),
        round_half_even(energy.tdee)
    ));
    lines.push(String::new());

    lines.push(format!("Meal Skeleton ({} meals)", meal_plan.meals.len()));
    for meal in &meal_plan.meals {
        lines.push(format!(
            "  {} – Protein {} g, Carbs {} g, Fat {} g",
            meal.label, meal.protein_g, meal.carbs_g, meal.fat_g
        ));
    }
    lines.push(String::new());

    let split = training_split();
    lines.push(format!("{}-Day Training Split", split.len()));
    for day in split {
        lines.push(format!("  {}", day.summary_line()));
    }
    lines.push(format!("  {}", BJJ_NOTE));

    if let Some(advisory) = fight_week_advisory(profile.weeks_to_event()) {
        lines.push(String::new());
        lines.push(format!("! {}", advisory));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn body_line(profile: &InputProfile) -> String {
    let mut line = format!(
        "Sex: {} | Age: {} | Height: {:.1} cm | Weight: {:.1} kg",
        profile.sex(),
        profile.age(),
        profile.height_cm(),
        profile.weight_kg()
    );
    if let Some(bf) = profile.bodyfat_pct() {
        line.push_str(&format!(" | Body fat: {}%", bf));
    }
    line
}

fn training_line(profile: &InputProfile) -> String {
    let mut line = format!(
        "Goal: {} | BJJ: {} d/wk | Strength: {} d/wk | Cardio: {} d/wk",
        profile.goal(),
        profile.bjj_days(),
        profile.strength_days(),
        profile.cardio_days()
    );
    if let Some(weeks) = profile.weeks_to_event() {
        line.push_str(&format!(" | Weeks to event: {}", weeks));
    }
    line
}

impl PlanResult {
    /// Render this result with the profile it was computed from
    pub fn to_text(&self, profile: &InputProfile, date: NaiveDate) -> String {
        format_plan(
            date,
            profile,
            &self.energy,
            &self.calorie_goal,
            &self.macros,
            &self.meal_plan,
        )
    }
}
