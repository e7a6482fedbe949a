//! Export renderings of a plan and the atomic `.txt` writer.

use crate::training::{fight_week_advisory, training_split};
use crate::{Error, InputProfile, MealPlan, PlanResult, Result, TrainingDay};
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Everything shown to the user for one plan, in serializable form
#[derive(Clone, Debug, Serialize)]
pub struct PlanReport<'a> {
    pub generated_on: NaiveDate,
    pub profile: &'a InputProfile,
    pub plan: &'a PlanResult,
    pub training_split: &'static [TrainingDay],
    pub advisory: Option<&'static str>,
}

impl<'a> PlanReport<'a> {
    pub fn new(generated_on: NaiveDate, profile: &'a InputProfile, plan: &'a PlanResult) -> Self {
        Self {
            generated_on,
            profile,
            plan,
            training_split: training_split(),
            advisory: fight_week_advisory(profile.weeks_to_event()),
        }
    }
}

/// Pretty-printed JSON of the full report
pub fn to_json(report: &PlanReport<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Meal skeleton as CSV with a `label,protein_g,carbs_g,fat_g` header
pub fn meals_to_csv(meal_plan: &MealPlan) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for meal in &meal_plan.meals {
        writer.serialize(meal)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::ExportEncoding(format!("CSV output not UTF-8: {}", e)))
}

/// File name for a plan exported on `date`
pub fn default_export_file_name(date: NaiveDate) -> String {
    format!("combat_plan_{}.txt", date.format("%Y-%m-%d"))
}

/// Write export contents to `path`
///
/// Atomically writes by:
/// 1. Writing to a temp file in the target directory
/// 2. Syncing to disk
/// 3. Renaming over the target
pub fn write_export(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::info!("Wrote plan export to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::FIGHT_WEEK_ADVISORY;
    use crate::{create_plan, ProfileInput};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_json_report_fields() {
        let profile = ProfileInput {
            weeks_to_event: Some(3),
            ..Default::default()
        }
        .validate()
        .unwrap();
        let plan = create_plan(&profile);

        let json = to_json(&PlanReport::new(date(), &profile, &plan)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["generated_on"], "2024-03-01");
        assert_eq!(value["profile"]["goal"], "cut");
        assert_eq!(value["plan"]["calorie_goal"]["target_kcal"], 2833);
        assert_eq!(value["plan"]["macros"]["carbs_g"], 408);
        assert_eq!(value["plan"]["meal_plan"]["meals"][1]["label"], "Meal 2");
        assert_eq!(value["training_split"].as_array().unwrap().len(), 4);
        assert_eq!(value["advisory"], FIGHT_WEEK_ADVISORY);
    }

    #[test]
    fn test_json_advisory_null_when_far_out() {
        let profile = ProfileInput::default().validate().unwrap();
        let plan = create_plan(&profile);

        let json = to_json(&PlanReport::new(date(), &profile, &plan)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["advisory"].is_null());
    }

    #[test]
    fn test_meals_csv() {
        let profile = ProfileInput::default().validate().unwrap();
        let plan = create_plan(&profile);

        let csv = meals_to_csv(&plan.meal_plan).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "label,protein_g,carbs_g,fat_g");
        assert_eq!(lines[1], "Meal 1,56,82,15");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(default_export_file_name(date()), "combat_plan_2024-03-01.txt");
    }

    #[test]
    fn test_write_export_creates_and_replaces() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("plans").join("plan.txt");

        write_export(&path, "first\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\n");

        write_export(&path, "second\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second\n");

        // No temp files left behind
        let entries = std::fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
