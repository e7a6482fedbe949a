//! Integration tests for the combat-plan binary.
//!
//! These tests verify end-to-end behavior including:
//! - Plan rendering from flags and config defaults
//! - Input validation at the command line
//! - JSON and CSV output
//! - Plan export files

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a test directory for config and exports
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Config path inside the test dir; absent unless a test writes it
fn config_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("config.toml")
}

/// Helper to get the CLI binary, isolated from the user's config
fn cli(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("combat-plan").expect("Failed to find combat-plan binary");
    cmd.arg("--config").arg(config_path(temp_dir));
    cmd
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Combat diet and training planner"));
}

#[test]
fn test_default_command_prints_reference_plan() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Calories: 2833 kcal | Protein: 186 g | Carbs: 408 g | Fat: 51 g",
        ))
        .stdout(predicate::str::contains("BMR: 1868 kcal | TDEE: 3455 kcal"))
        .stdout(predicate::str::contains("Meal 3 – Protein 46 g, Carbs 122 g, Fat 13 g"))
        .stdout(predicate::str::contains("Day 2 – Lower (hinge+quad)"));
}

#[test]
fn test_recomp_goal_flag() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .arg("plan")
        .arg("--goal")
        .arg("recomp")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Calories: 3386 kcal | Protein: 169 g | Carbs: 544 g | Fat: 59 g",
        ));
}

#[test]
fn test_unknown_goal_rejected() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .arg("plan")
        .arg("--goal")
        .arg("maintain")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid goal"));
}

#[test]
fn test_out_of_range_weight_rejected() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .arg("plan")
        .arg("--weight")
        .arg("200")
        .assert()
        .failure()
        .stderr(predicate::str::contains("weight_kg"));
}

#[test]
fn test_fight_week_advisory() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .arg("plan")
        .arg("--weeks-to-event")
        .arg("5")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fight-week caution"));

    cli(&temp_dir)
        .arg("plan")
        .arg("--weeks-to-event")
        .arg("8")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fight-week caution").not());

    cli(&temp_dir)
        .arg("plan")
        .arg("--no-event")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weeks to event").not());
}

#[test]
fn test_config_profile_supplies_defaults() {
    let temp_dir = setup_test_dir();
    fs::write(
        config_path(&temp_dir),
        "[profile]\nsex = \"female\"\nweight_kg = 60.0\ngoal = \"slow_bulk\"\n",
    )
    .unwrap();

    cli(&temp_dir)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sex: Female"))
        .stdout(predicate::str::contains("Weight: 60.0 kg"))
        .stdout(predicate::str::contains("Goal: Slow Bulk"));

    // Flags win over config
    cli(&temp_dir)
        .arg("plan")
        .arg("--goal")
        .arg("cut")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal: Cut"));
}

#[test]
fn test_json_output() {
    let temp_dir = setup_test_dir();

    let output = cli(&temp_dir)
        .arg("plan")
        .arg("--format")
        .arg("json")
        .arg("--weeks-to-event")
        .arg("2")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be valid JSON");
    assert_eq!(value["plan"]["calorie_goal"]["target_kcal"], 2833);
    assert_eq!(value["plan"]["meal_plan"]["meals"].as_array().unwrap().len(), 4);
    assert!(value["advisory"].is_string());
}

#[test]
fn test_csv_output() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .arg("plan")
        .arg("--format")
        .arg("csv")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("label,protein_g,carbs_g,fat_g\n"))
        .stdout(predicate::str::contains("Meal 4,28,61,10"));
}

#[test]
fn test_export_writes_text_plan() {
    let temp_dir = setup_test_dir();
    let export_path = temp_dir.path().join("out").join("plan.txt");

    let output = cli(&temp_dir)
        .arg("plan")
        .arg("--export")
        .arg(&export_path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let exported = fs::read_to_string(&export_path).expect("Failed to read export");
    assert_eq!(exported.as_bytes(), output.as_slice());
    assert!(exported.starts_with("Combat Diet & Training Planner"));
}

#[test]
fn test_save_uses_configured_export_dir() {
    let temp_dir = setup_test_dir();
    let export_dir = temp_dir.path().join("plans");
    fs::write(
        config_path(&temp_dir),
        format!("[export]\ndir = {:?}\n", export_dir.to_string_lossy()),
    )
    .unwrap();

    cli(&temp_dir)
        .arg("plan")
        .arg("--save")
        .assert()
        .success()
        .stderr(predicate::str::contains("Plan saved"));

    let files: Vec<_> = fs::read_dir(&export_dir)
        .expect("export dir should exist")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("combat_plan_"));
    assert!(files[0].ends_with(".txt"));
}

#[test]
fn test_identical_runs_are_byte_identical() {
    let temp_dir = setup_test_dir();

    let run = || {
        cli(&temp_dir)
            .arg("plan")
            .arg("--goal")
            .arg("slow-bulk")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_split_command() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .arg("split")
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 1 – Upper Push"))
        .stdout(predicate::str::contains("Day 4 – Athletic/Conditioning"))
        .stdout(predicate::str::contains("BJJ on Days 1/3/4"));
}

#[test]
fn test_init_config_then_refuse_overwrite() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .arg("init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let contents = fs::read_to_string(config_path(&temp_dir)).unwrap();
    assert!(contents.contains("[profile]"));
    assert!(contents.contains("weight_kg = 84.5"));

    cli(&temp_dir).arg("init-config").assert().failure();

    cli(&temp_dir).arg("init-config").arg("--force").assert().success();
}

#[test]
fn test_standard_config_location_used_without_flag() {
    let temp_dir = setup_test_dir();
    let config_dir = temp_dir.path().join("combat-planner");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[profile]\nweight_kg = 70.0\ngoal = \"Recomp\"\n",
    )
    .unwrap();

    Command::cargo_bin("combat-plan")
        .expect("Failed to find combat-plan binary")
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weight: 70.0 kg"))
        .stdout(predicate::str::contains("Goal: Recomp"));
}

#[test]
fn test_config_accepts_display_goal_name() {
    let temp_dir = setup_test_dir();
    fs::write(
        config_path(&temp_dir),
        "[profile]\nsex = \"Male\"\ngoal = \"Slow Bulk\"\n",
    )
    .unwrap();

    cli(&temp_dir)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal: Slow Bulk"));
}
