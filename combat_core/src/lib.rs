#![forbid(unsafe_code)]

//! Core domain model and calculations for the Combat Diet & Training Planner.
//!
//! This crate provides:
//! - Profile validation
//! - Energy model (BMR, TDEE)
//! - Calorie targets and macro allocation
//! - Meal split and training template
//! - Plan text, JSON and CSV rendering

pub mod types;
pub mod error;
pub mod profile;
pub mod config;
pub mod logging;
pub mod energy;
pub mod calories;
pub mod macronutrients;
pub mod meals;
pub mod training;
pub mod planner;
pub mod formatter;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use profile::{InputProfile, ProfileInput};
pub use config::Config;
pub use energy::{activity_multiplier, compute_bmr, compute_tdee, estimate_energy};
pub use calories::compute_target_calories;
pub use macronutrients::compute_macros;
pub use meals::split_into_meals;
pub use training::{fight_week_advisory, training_split};
pub use planner::create_plan;
pub use formatter::format_plan;
pub use export::{default_export_file_name, meals_to_csv, to_json, write_export, PlanReport};
