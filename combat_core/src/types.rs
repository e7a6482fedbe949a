//! Core domain types for the planner.
//!
//! This module defines the fundamental types passed between pipeline stages:
//! - Sex and goal enums with their text forms
//! - The per-goal policy table
//! - Energy, calorie and macro results
//! - Meal allocations and the training template

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Profile Enums
// ============================================================================

/// Biological sex used by the Mifflin-St Jeor equation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(Error::InvalidSex(other.to_string())),
        }
    }
}

impl TryFrom<String> for Sex {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "Male"),
            Sex::Female => write!(f, "Female"),
        }
    }
}

/// Dietary strategy
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Goal {
    Cut,
    Recomp,
    SlowBulk,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Cut, Goal::Recomp, Goal::SlowBulk];

    /// Look up the constants that drive calories and macros for this goal
    pub fn policy(self) -> &'static GoalPolicy {
        match self {
            Goal::Cut => &GOAL_POLICIES[0],
            Goal::Recomp => &GOAL_POLICIES[1],
            Goal::SlowBulk => &GOAL_POLICIES[2],
        }
    }
}

impl FromStr for Goal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cut" => Ok(Goal::Cut),
            "recomp" => Ok(Goal::Recomp),
            "slow bulk" | "slow_bulk" | "slow-bulk" | "slowbulk" => Ok(Goal::SlowBulk),
            other => Err(Error::InvalidGoal(other.to_string())),
        }
    }
}

// Config files go through the same lenient parsing as command-line flags.
impl TryFrom<String> for Goal {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Cut => write!(f, "Cut"),
            Goal::Recomp => write!(f, "Recomp"),
            Goal::SlowBulk => write!(f, "Slow Bulk"),
        }
    }
}

// ============================================================================
// Goal Policy
// ============================================================================

/// Per-goal constants for the calorie target and macro allocation
#[derive(Clone, Debug, PartialEq)]
pub struct GoalPolicy {
    pub goal: Goal,
    /// Multiplier applied to TDEE
    pub calorie_multiplier: f64,
    pub protein_g_per_kg: f64,
    pub fat_g_per_kg: f64,
}

/// Indexed in `Goal::ALL` order
static GOAL_POLICIES: [GoalPolicy; 3] = [
    GoalPolicy {
        goal: Goal::Cut,
        calorie_multiplier: 0.82,
        protein_g_per_kg: 2.2,
        fat_g_per_kg: 0.6,
    },
    GoalPolicy {
        goal: Goal::Recomp,
        calorie_multiplier: 0.98,
        protein_g_per_kg: 2.0,
        fat_g_per_kg: 0.7,
    },
    GoalPolicy {
        goal: Goal::SlowBulk,
        calorie_multiplier: 1.10,
        protein_g_per_kg: 1.8,
        fat_g_per_kg: 0.7,
    },
];

// ============================================================================
// Pipeline Results
// ============================================================================

/// Resting and total daily energy expenditure, in kcal
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct EnergyEstimate {
    pub bmr: f64,
    pub tdee: f64,
}

/// Daily calorie target
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct CalorieGoal {
    pub target_kcal: u32,
}

/// Daily macronutrient targets in grams
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct MacroGrams {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

/// One meal's share of the daily macros
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct MealAllocation {
    pub label: String,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

/// The fixed four-meal skeleton
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct MealPlan {
    pub meals: Vec<MealAllocation>,
}

/// Structured output of one planning run
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PlanResult {
    pub energy: EnergyEstimate,
    pub calorie_goal: CalorieGoal,
    pub macros: MacroGrams,
    pub meal_plan: MealPlan,
}

// ============================================================================
// Training Template
// ============================================================================

/// A single exercise line in the training template
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    /// Sets x reps, distance or duration, e.g. "4×6–8"
    pub prescription: String,
}

/// One day of the fixed training split
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TrainingDay {
    pub day: u8,
    pub title: String,
    pub exercises: Vec<Exercise>,
}
