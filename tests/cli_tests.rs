//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn beatcut() -> Command {
    Command::cargo_bin("beatcut").unwrap()
}

fn analysis_fixtures(dir: &Path) -> (PathBuf, PathBuf) {
    let scenes = write_file(dir, "scenes.json", r#"{"cuts": [0.0, 10.0, 20.0, 30.0]}"#);
    let beat = write_file(
        dir,
        "beat.json",
        r#"{"tempo": 120.0, "first_beat": 1.0, "audio_length": 13.0}"#,
    );
    (scenes, beat)
}

#[test]
fn test_schedule_writes_cut_list_file() {
    let dir = TempDir::new().unwrap();
    let (scenes, beat) = analysis_fixtures(dir.path());
    let output = dir.path().join("cutlist.json");

    beatcut()
        .args(["schedule", "--strategy", "pseudochrono", "--fps", "30"])
        .arg("--scenes")
        .arg(&scenes)
        .arg("--beat")
        .arg(&beat)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let document: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(document["strategy"], "pseudochrono");
    assert_eq!(document["frame_rate"], 30.0);
    assert_eq!(document["audio_length"], 13.0);
    assert!((document["total_duration"].as_f64().unwrap() - 13.0).abs() < 1.0 / 30.0);

    let intervals = document["intervals"].as_array().unwrap();
    assert_eq!(intervals.len(), 7);
    assert_eq!(intervals[0]["start"], 0.0);
    assert_eq!(intervals[0]["end"], 1.0);
}

#[test]
fn test_schedule_prints_to_stdout_by_default() {
    let dir = TempDir::new().unwrap();
    let (scenes, beat) = analysis_fixtures(dir.path());

    beatcut()
        .args(["schedule", "--strategy", "delay"])
        .arg("--scenes")
        .arg(&scenes)
        .arg("--beat")
        .arg(&beat)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"intervals\""));
}

#[test]
fn test_schedule_then_verify_round_trip() {
    let dir = TempDir::new().unwrap();
    let (scenes, beat) = analysis_fixtures(dir.path());
    let output = dir.path().join("cutlist.json");

    beatcut()
        .args(["schedule", "--strategy", "random", "--seed", "7", "--fps", "25"])
        .arg("--scenes")
        .arg(&scenes)
        .arg("--beat")
        .arg(&beat)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    beatcut()
        .arg("verify")
        .arg("--cutlist")
        .arg(&output)
        .arg("--scenes")
        .arg(&scenes)
        .arg("--beat")
        .arg(&beat)
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: yes"));
}

#[test]
fn test_round_trip_survives_unaligned_bar_grid() {
    // At 97 bpm and 29.97 fps no bar boundary lands on a frame, so the
    // quantizer floors starts up to one frame before their scene begins;
    // verification must accept that
    let dir = TempDir::new().unwrap();
    let scenes = write_file(
        dir.path(),
        "scenes.json",
        r#"{"cuts": [0.0, 30.0, 60.0, 90.0]}"#,
    );
    let beat = write_file(
        dir.path(),
        "beat.json",
        r#"{"tempo": 97.0, "first_beat": 0.37, "audio_length": 45.0}"#,
    );
    let output = dir.path().join("cutlist.json");

    beatcut()
        .args(["schedule", "--strategy", "pseudochrono", "--fps", "29.97"])
        .arg("--scenes")
        .arg(&scenes)
        .arg("--beat")
        .arg(&beat)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    beatcut()
        .arg("verify")
        .arg("--cutlist")
        .arg(&output)
        .arg("--scenes")
        .arg(&scenes)
        .arg("--beat")
        .arg(&beat)
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: yes"));
}

#[test]
fn test_schedule_with_energy_selects_adaptive() {
    let dir = TempDir::new().unwrap();
    let scenes = write_file(
        dir.path(),
        "scenes.json",
        r#"{"cuts": [0.0, 1.0, 13.0, 25.0]}"#,
    );
    let beat = write_file(
        dir.path(),
        "beat.json",
        r#"{"tempo": 120.0, "first_beat": 1.0, "audio_length": 21.0}"#,
    );
    let energy = write_file(dir.path(), "energy.json", r#"{"levels": [0, 0, 1, 2]}"#);
    let output = dir.path().join("cutlist.json");

    beatcut()
        .arg("schedule")
        .arg("--scenes")
        .arg(&scenes)
        .arg("--beat")
        .arg(&beat)
        .arg("--energy")
        .arg(&energy)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let document: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(document["strategy"], "adaptive");
}

#[test]
fn test_inspect_reports_bar_capacity() {
    let dir = TempDir::new().unwrap();
    let (scenes, beat) = analysis_fixtures(dir.path());

    beatcut()
        .arg("inspect")
        .arg("--scenes")
        .arg(&scenes)
        .arg("--beat")
        .arg(&beat)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bar duration: 2.000s"));

    beatcut()
        .args(["inspect", "--json"])
        .arg("--scenes")
        .arg(&scenes)
        .arg("--beat")
        .arg(&beat)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bars_available\": 10"));
}

#[test]
fn test_schedule_rejects_invalid_tempo() {
    let dir = TempDir::new().unwrap();
    let scenes = write_file(dir.path(), "scenes.json", r#"{"cuts": [0.0, 10.0]}"#);
    let beat = write_file(
        dir.path(),
        "beat.json",
        r#"{"tempo": 0.0, "first_beat": 1.0, "audio_length": 13.0}"#,
    );

    beatcut()
        .arg("schedule")
        .arg("--scenes")
        .arg(&scenes)
        .arg("--beat")
        .arg(&beat)
        .assert()
        .failure();
}

#[test]
fn test_schedule_rejects_unknown_strategy() {
    let dir = TempDir::new().unwrap();
    let (scenes, beat) = analysis_fixtures(dir.path());

    beatcut()
        .args(["schedule", "--strategy", "chronological"])
        .arg("--scenes")
        .arg(&scenes)
        .arg("--beat")
        .arg(&beat)
        .assert()
        .failure();
}

#[test]
fn test_config_file_supplies_defaults() {
    let dir = TempDir::new().unwrap();
    let (scenes, beat) = analysis_fixtures(dir.path());
    let config = write_file(
        dir.path(),
        "beatcut.toml",
        "[schedule]\nstrategy = \"pseudochrono\"\nframe_rate = 24.0\n",
    );
    let output = dir.path().join("cutlist.json");

    beatcut()
        .arg("--config")
        .arg(&config)
        .arg("schedule")
        .arg("--scenes")
        .arg(&scenes)
        .arg("--beat")
        .arg(&beat)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let document: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(document["strategy"], "pseudochrono");
    assert_eq!(document["frame_rate"], 24.0);
}
