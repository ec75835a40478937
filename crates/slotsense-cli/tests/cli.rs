use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use slotsense_core::model::machine::preset_machines;

fn write_fixtures(dir: &std::path::Path, extra_yaml: &str) -> std::path::PathBuf {
    let machine = preset_machines().remove(0);
    let machine_path = dir.join("machine.json");
    fs::write(&machine_path, machine.to_json().unwrap()).unwrap();

    let config_path = dir.join("session.yaml");
    let yaml = format!(
        "machine: {}\n{extra_yaml}",
        machine_path.display()
    );
    fs::write(&config_path, yaml).unwrap();
    config_path
}

#[test]
fn missing_config_fails_with_read_error() {
    Command::cargo_bin("slotsense")
        .unwrap()
        .args(["--config", "no-such-file.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn validate_only_reports_and_exits() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixtures(dir.path(), "total_games: 1000\ncounts:\n  grape: 160\n");

    Command::cargo_bin("slotsense")
        .unwrap()
        .args(["--config"])
        .arg(&config)
        .arg("--validate-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));
}

#[test]
fn invalid_window_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixtures(dir.path(), "total_games: 100\nstart_games: 500\n");

    Command::cargo_bin("slotsense")
        .unwrap()
        .args(["--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("start_games"));
}

#[test]
fn replayed_counts_produce_posterior_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixtures(dir.path(), "total_games: 1000\ncounts:\n  grape: 160\n");

    Command::cargo_bin("slotsense")
        .unwrap()
        .args(["--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("My Juggler V"))
        .stdout(predicate::str::contains("Posterior over settings"))
        .stdout(predicate::str::contains("Setting 6"))
        .stdout(predicate::str::contains("Verdict:"));
}

#[test]
fn count_override_beats_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixtures(dir.path(), "total_games: 1000\ncounts:\n  grape: 160\n");

    Command::cargo_bin("slotsense")
        .unwrap()
        .args(["--config"])
        .arg(&config)
        .args(["--count", "grape=140"])
        .assert()
        .success()
        .stdout(predicate::str::contains("140"));
}

#[test]
fn simulated_session_writes_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixtures(dir.path(), "total_games: 3000\n");
    let report_path = dir.path().join("report.json");

    Command::cargo_bin("slotsense")
        .unwrap()
        .args(["--config"])
        .arg(&config)
        .args(["--simulate-setting", "6", "--seed", "42"])
        .arg("--json")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Simulated 3000 games at setting 6"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["machine"], "My Juggler V");
    assert_eq!(report["results"].as_array().unwrap().len(), 6);
}
