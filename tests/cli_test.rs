#![allow(deprecated)] // Command::cargo_bin

mod common;

use assert_cmd::Command;
use common::install_dir;
use predicates::prelude::*;

const SCENARIO: &str = r#"{"soundGroups":[
    {"name":"hello","sounds":["a.ogg"],"texts":["Hi"],"weight":1},
    {"name":"never","sounds":["b.ogg"],"weight":0}
]}"#;

fn cmd() -> Command {
    Command::cargo_bin("custom-noise").unwrap()
}

#[test]
fn trigger_plays_configured_sound_and_caption() {
    let dir = install_dir(Some(SCENARIO), &["a.ogg"]);

    cmd()
        .arg("--dir")
        .arg(dir.path())
        .args(["trigger", "--count", "3", "--seed", "5", "--mute"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.ogg"))
        .stdout(predicate::str::contains("caption: Hi"))
        .stdout(predicate::str::contains("noise: unknowNoise radius=15"))
        .stdout(predicate::str::contains("b.ogg").not());
}

#[test]
fn trigger_without_config_is_inactive() {
    let dir = install_dir(None, &[]);

    cmd()
        .arg("--dir")
        .arg(dir.path())
        .args(["trigger", "--mute"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inactive"));
}

#[test]
fn trigger_rejects_out_of_range_volume() {
    let dir = install_dir(Some(SCENARIO), &["a.ogg"]);

    cmd()
        .arg("--dir")
        .arg(dir.path())
        .args(["trigger", "--mute", "--volume", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("volume must be between"));
}

#[test]
fn check_summarizes_groups() {
    let dir = install_dir(Some(SCENARIO), &["a.ogg"]);

    cmd()
        .arg("--dir")
        .arg(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. hello (weight 1, unknowNoise, radius 15): 1/1 sounds, 1 captions",
        ))
        .stdout(predicate::str::contains("2. never (weight 0, unknowNoise, radius 15): 0/1 sounds"))
        .stdout(predicate::str::contains("2 groups, 1 selectable"));
}

#[test]
fn check_fails_on_malformed_config() {
    let dir = install_dir(Some("{\"soundGroups\": ["), &[]);

    cmd()
        .arg("--dir")
        .arg(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed config JSON"));
}

#[test]
fn check_json_outputs_validated_groups() {
    let dir = install_dir(Some(SCENARIO), &["a.ogg"]);

    let output = cmd()
        .arg("--dir")
        .arg(dir.path())
        .args(["check", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let groups: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(groups[0]["resolvedType"], "unknowNoise");
    assert_eq!(groups[1]["sounds"][0], "");
    assert_eq!(groups[1]["weight"], 0);
}

#[test]
fn check_dump_appends_to_diagnostics_log() {
    let dir = install_dir(Some(SCENARIO), &["a.ogg"]);

    cmd()
        .arg("--dir")
        .arg(dir.path())
        .args(["check", "--dump"])
        .assert()
        .success();

    let log = std::fs::read_to_string(dir.path().join("custom-noise.log")).unwrap();
    assert!(log.contains("validated config (2 groups)"));
    assert!(log.contains("\"name\": \"hello\""));
}

#[test]
fn paths_reports_install_layout() {
    let dir = install_dir(None, &[]);

    cmd()
        .arg("--dir")
        .arg(dir.path())
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sounds dir:"))
        .stdout(predicate::str::contains("config.json"));
}

#[test]
fn simulate_never_draws_zero_weight_group() {
    let dir = install_dir(Some(SCENARIO), &["a.ogg"]);

    let output = cmd()
        .arg("--dir")
        .arg(dir.path())
        .args(["simulate", "--draws", "500", "--seed", "3", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let shares: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shares[0]["count"], 500);
    assert_eq!(shares[1]["count"], 0);
    assert_eq!(shares[1]["expected"], 0.0);
}
