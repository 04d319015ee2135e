use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const RESULTS: &str = "../../tests/fixtures/assessment/session.results.jsonl";

fn fresh_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn lernstil(state_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lernstil").unwrap();
    cmd.arg("--state-dir")
        .arg(state_dir)
        .env_remove("LERNSTIL_LOG")
        .env_remove("LERNSTIL_PATH_SERVICE_URL")
        .env_remove("LERNSTIL_PATH_SERVICE_TOKEN");
    cmd
}

fn fixture_results() -> Vec<(String, String)> {
    fs::read_to_string(RESULTS)
        .unwrap()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            let activity = value["activityType"].as_str().unwrap().to_string();
            (activity, line.to_string())
        })
        .collect()
}

#[test]
fn full_session_through_the_binary() {
    let dir = fresh_dir("lernstil_cli_full_session");

    lernstil(&dir)
        .args(["init", "--user", "user-42"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""phase": "ready""#));

    for (activity, line) in fixture_results() {
        lernstil(&dir)
            .args(["start", &activity])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""phase": "in_progress""#));
        lernstil(&dir)
            .arg("complete")
            .write_stdin(line)
            .assert()
            .success();
    }

    lernstil(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""phase": "complete""#))
        .stdout(predicate::str::contains(r#""progress": 100"#));

    lernstil(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""primaryLearningType": "visual""#))
        .stdout(predicate::str::contains(r#""confidenceBand": "low""#))
        .stdout(predicate::str::contains("Visual Learner"));

    lernstil(&dir)
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("null"));

    lernstil(&dir)
        .arg("publish")
        .assert()
        .failure()
        .stderr(predicate::str::contains("LERNSTIL_PATH_SERVICE_URL"));

    lernstil(&dir)
        .args(["start", "memory-challenge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("assessment is complete"));

    lernstil(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""phase": "idle""#))
        .stdout(predicate::str::contains(r#""userProfile": null"#));
}

#[test]
fn result_file_is_scored_and_persisted() {
    let dir = fresh_dir("lernstil_cli_result_file");
    fs::create_dir_all(&dir).unwrap();
    let (activity, line) = fixture_results().remove(0);
    let result_path = dir.join("result.json");
    fs::write(&result_path, line).unwrap();

    lernstil(&dir).args(["init", "--user", "user-42"]).assert().success();
    lernstil(&dir).args(["start", &activity]).assert().success();
    lernstil(&dir)
        .arg("complete")
        .arg("--result")
        .arg(&result_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""progress": 25"#))
        .stdout(predicate::str::contains(r#""nextActivity": "problem_solving""#));

    assert!(dir.join("learning-assessment.json").exists());

    lernstil(&dir)
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "problem-solving""#));

    lernstil(&dir)
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 4 activities done"));
}

#[test]
fn rejected_calls_leave_the_session_alone() {
    let dir = fresh_dir("lernstil_cli_rejections");

    lernstil(&dir)
        .args(["start", "memory-challenge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no assessment session"));

    lernstil(&dir).args(["init", "--user", "user-42"]).assert().success();
    lernstil(&dir)
        .args(["start", "audio-visual"])
        .assert()
        .success();
    lernstil(&dir)
        .args(["start", "problem-solving"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "cannot start problem_solving: audio_visual is still in progress",
        ));

    let (_, memory_line) = fixture_results().remove(0);
    lernstil(&dir)
        .arg("complete")
        .write_stdin(memory_line)
        .assert()
        .failure()
        .stderr(predicate::str::contains("complete rejected"));

    lernstil(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""currentActivity": "audio_visual""#))
        .stdout(predicate::str::contains(r#""progress": 0"#));
}

#[test]
fn repeat_guard_is_opt_in() {
    let dir = fresh_dir("lernstil_cli_repeat_guard");
    let (activity, line) = fixture_results().remove(0);

    lernstil(&dir).args(["init", "--user", "user-42"]).assert().success();
    lernstil(&dir).args(["start", &activity]).assert().success();
    lernstil(&dir)
        .arg("complete")
        .write_stdin(line)
        .assert()
        .success();

    lernstil(&dir)
        .args(["--reject-repeats", "start", &activity])
        .assert()
        .failure()
        .stderr(predicate::str::contains("memory_challenge was already completed"));

    lernstil(&dir).args(["start", &activity]).assert().success();
}

#[test]
fn catalog_and_descriptions_need_no_session() {
    let dir = fresh_dir("lernstil_cli_catalog");

    lernstil(&dir)
        .arg("activities")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""activityType": "memory_challenge""#))
        .stdout(predicate::str::contains(r#""activityType": "reading_writing""#));

    lernstil(&dir)
        .args(["describe", "kinesthetic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kinesthetic Learner"));

    lernstil(&dir)
        .args(["describe", "undetermined"])
        .assert()
        .failure();

    lernstil(&dir)
        .args(["describe", "tactile"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown learning type"));

    assert!(!dir.exists());
}

#[test]
fn reset_and_init_recover_from_corrupt_snapshot() {
    let dir = fresh_dir("lernstil_cli_corrupt_snapshot");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("learning-assessment.json"), r#"{"userProfile": {"us"#).unwrap();

    lernstil(&dir)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load assessment snapshot"));

    lernstil(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""phase": "idle""#));

    fs::write(dir.join("learning-assessment.json"), r#"{"userProfile": {"us"#).unwrap();

    lernstil(&dir)
        .args(["init", "--user", "u1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""phase": "ready""#));

    lernstil(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""userId": "u1""#));
}
