//! Four-meal skeleton.
//!
//! Daily macros are spread over a fixed set of meals using static percentage
//! tables. Each meal/macro cell is rounded on its own, so the meals may sum
//! to a gram or two off the daily totals.

use crate::calories::round_half_even;
use crate::{MacroGrams, MealAllocation, MealPlan};

pub const MEAL_COUNT: usize = 4;

/// Share of daily protein per meal, in percent
pub const PROTEIN_SPLIT_PCT: [u32; MEAL_COUNT] = [30, 30, 25, 15];

/// Share of daily carbs per meal, in percent
pub const CARB_SPLIT_PCT: [u32; MEAL_COUNT] = [20, 35, 30, 15];

/// Share of daily fat per meal, in percent
pub const FAT_SPLIT_PCT: [u32; MEAL_COUNT] = [30, 25, 25, 20];

const fn split_total(table: &[u32; MEAL_COUNT]) -> u32 {
    let mut sum = 0;
    let mut i = 0;
    while i < MEAL_COUNT {
        sum += table[i];
        i += 1;
    }
    sum
}

const _: () = assert!(split_total(&PROTEIN_SPLIT_PCT) == 100);
const _: () = assert!(split_total(&CARB_SPLIT_PCT) == 100);
const _: () = assert!(split_total(&FAT_SPLIT_PCT) == 100);

fn share(total_g: u32, pct: u32) -> u32 {
    round_half_even(f64::from(total_g) * f64::from(pct) / 100.0)
}

/// Distribute daily macros across the four meals
pub fn split_into_meals(macros: &MacroGrams) -> MealPlan {
    let meals = (0..MEAL_COUNT)
        .map(|i| MealAllocation {
            label: format!("Meal {}", i + 1),
            protein_g: share(macros.protein_g, PROTEIN_SPLIT_PCT[i]),
            carbs_g: share(macros.carbs_g, CARB_SPLIT_PCT[i]),
            fat_g: share(macros.fat_g, FAT_SPLIT_PCT[i]),
        })
        .collect();

    MealPlan { meals }
}

impl MealPlan {
    /// Sum of the per-meal grams
    pub fn totals(&self) -> MacroGrams {
        self.meals.iter().fold(
            MacroGrams {
                protein_g: 0,
                carbs_g: 0,
                fat_g: 0,
            },
            |acc, meal| MacroGrams {
                protein_g: acc.protein_g + meal.protein_g,
                carbs_g: acc.carbs_g + meal.carbs_g,
                fat_g: acc.fat_g + meal.fat_g,
            },
        )
    }
}
