use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

/// Command isolated from the user's own config and catalog.
fn skill_coach(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("skill-coach").unwrap();
    cmd.env("SKILL_COACH_CONFIG", dir.path().join("config.toml"))
        .env_remove("SKILL_COACH_CATALOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_command() {
    let dir = tempdir().unwrap();
    skill_coach(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inspect calisthenics workout catalogs"))
        .stdout(predicate::str::contains("workouts"))
        .stdout(predicate::str::contains("tree"));
}

#[test]
fn test_version_command() {
    let dir = tempdir().unwrap();
    skill_coach(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_completions_command() {
    let dir = tempdir().unwrap();
    skill_coach(&dir)
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("_skill-coach"));
}

#[test]
fn test_list_builtin_workouts() {
    let dir = tempdir().unwrap();
    skill_coach(&dir)
        .args(["workouts", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plank Warmup (Level 1)"))
        .stdout(predicate::str::contains("Wall Handstand (Level 3)"));
}

#[test]
fn test_list_filters_by_category_and_muscle() {
    let dir = tempdir().unwrap();
    skill_coach(&dir)
        .args(["workouts", "list", "--category", "strength"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Standard Pushup"))
        .stdout(predicate::str::contains("Wall Walk").not());

    skill_coach(&dir)
        .args(["workouts", "list", "--muscle", "triceps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pike Pushup"))
        .stdout(predicate::str::contains("Plank Warmup").not());
}

#[test]
fn test_list_rejects_unknown_category() {
    let dir = tempdir().unwrap();
    skill_coach(&dir)
        .args(["workouts", "list", "--category", "cardio"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category: cardio"));
}

#[test]
fn test_show_workout() {
    let dir = tempdir().unwrap();
    skill_coach(&dir)
        .args(["workouts", "show", "wu-plank"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Muscles:  core, shoulders"))
        .stdout(predicate::str::contains("Wall Plank (Level 1) - Skill: Handstand"));

    skill_coach(&dir)
        .args(["workouts", "show", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workout not found: missing"));
}

#[test]
fn test_tree_command() {
    let dir = tempdir().unwrap();
    skill_coach(&dir)
        .args(["tree", "l-sit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("L-Sit progression (6 steps)"))
        .stdout(predicate::str::contains("V-Sit"));

    skill_coach(&dir)
        .args(["tree", "muscle-up"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown skill"));
}

#[test]
fn test_check_builtin_catalog_passes_with_warnings() {
    let dir = tempdir().unwrap();
    skill_coach(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("references unknown workout hs-wall-hold"))
        .stdout(predicate::str::contains("0 error(s)"));
}

#[test]
fn test_check_fails_on_broken_catalog() {
    let dir = tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    fs::write(
        &catalog,
        r#"{"workouts": [{"id": "w1", "name": "Hop", "category": "Cardio", "progression_level": 1}]}"#,
    )
    .unwrap();

    skill_coach(&dir)
        .arg("--catalog")
        .arg(&catalog)
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("workout w1"))
        .stderr(predicate::str::contains("catalog has 1 error(s)"));
}

#[test]
fn test_session_command() {
    let dir = tempdir().unwrap();
    skill_coach(&dir)
        .args([
            "session",
            "--skill",
            "handstand",
            "--duration",
            "30",
            "wu-plank",
            "hs-wall-walk",
            "st-pushup",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("WORKOUT PLAN: BEGINNER (30 minutes)"))
        .stdout(predicate::str::contains("Focus: Handstand"))
        .stdout(predicate::str::contains("== Strength (14 minutes) =="))
        .stdout(predicate::str::contains("Estimated calories").not());
}

#[test]
fn test_session_uses_configured_weight() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[profile]\nweight_kg = 70.0\ndefault_duration = 60\n",
    )
    .unwrap();

    skill_coach(&dir)
        .args(["session", "wu-plank"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(60 minutes)"))
        .stdout(predicate::str::contains("Estimated calories: 296 kcal at 70 kg"));
}

#[test]
fn test_config_init_and_show() {
    let dir = tempdir().unwrap();
    skill_coach(&dir)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(dir.path().join("config.toml").exists());

    skill_coach(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    skill_coach(&dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();

    skill_coach(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_duration = 30"));
}

#[test]
fn test_unreadable_catalog_is_reported() {
    let dir = tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    fs::write(&catalog, "{ not json").unwrap();

    skill_coach(&dir)
        .arg("--catalog")
        .arg(&catalog)
        .args(["workouts", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse catalog"));

    skill_coach(&dir)
        .arg("--catalog")
        .arg(dir.path().join("absent.json"))
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read catalog"));
}
