use std::{fs, path::Path, thread, time::Duration};

use assert_cmd::cargo::cargo_bin_cmd;
use chrono::Utc;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::tempdir;

fn timer_cmd(state: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("i3-timer");
    cmd.env_remove("BLOCK_BUTTON").arg("--state-file").arg(state);
    cmd
}

fn read_state(path: &Path) -> Value {
    let content = fs::read_to_string(path).expect("state file exists");
    serde_json::from_str(&content).expect("state file is json")
}

fn running_state(duration_secs: i64, started_secs_ago: i64) -> String {
    let start = Utc::now() - chrono::Duration::seconds(started_secs_ago);
    json!({
        "duration": duration_secs * 1_000_000_000,
        "startTime": start.to_rfc3339(),
        "showElapsed": false,
    })
    .to_string()
}

#[test]
fn first_run_prints_default_and_creates_state() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("timer.json");

    timer_cmd(&state)
        .assert()
        .success()
        .stdout("Timer: 5m0s\n");

    let saved = read_state(&state);
    assert_eq!(saved["duration"], 300_000_000_000i64);
    assert_eq!(saved["startTime"], "0001-01-01T00:00:00Z");
    assert_eq!(saved["showElapsed"], false);
}

#[test]
fn middle_click_starts_the_timer() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("timer.json");

    timer_cmd(&state)
        .env("BLOCK_BUTTON", "2")
        .arg("--duration")
        .arg("10")
        .assert()
        .success()
        .stdout("Timer: 10m0s\n");

    let saved = read_state(&state);
    assert_ne!(saved["startTime"], "0001-01-01T00:00:00Z");
}

#[test]
fn scrolling_adjusts_idle_duration() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("timer.json");

    timer_cmd(&state)
        .env("BLOCK_BUTTON", "4")
        .assert()
        .success()
        .stdout("Timer: 6m0s\n");
    timer_cmd(&state)
        .env("BLOCK_BUTTON", "5")
        .assert()
        .success()
        .stdout("Timer: 5m0s\n");
}

#[test]
fn right_click_stops_a_running_timer() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("timer.json");
    fs::write(&state, running_state(300, 60)).expect("write state");

    timer_cmd(&state)
        .env("BLOCK_BUTTON", "3")
        .assert()
        .success()
        .stdout("Timer: 5m0s\n");

    assert_eq!(read_state(&state)["startTime"], "0001-01-01T00:00:00Z");
}

#[test]
fn colors_mark_the_last_quarter_red() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("timer.json");
    fs::write(&state, running_state(240, 210)).expect("write state");

    timer_cmd(&state)
        .arg("--colors")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Timer: <span color='red'>"))
        .stdout(predicate::str::ends_with("</span>\n"));
}

#[test]
fn expired_timer_fires_alarm_and_resets() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("timer.json");
    let marker = dir.path().join("alarm-fired");
    fs::write(&state, running_state(60, 120)).expect("write state");

    timer_cmd(&state)
        .arg("--alarm-command")
        .arg(format!("touch '{}'", marker.display()))
        .assert()
        .success()
        .stdout("Timer: 1m0s\n");

    assert_eq!(read_state(&state)["startTime"], "0001-01-01T00:00:00Z");

    for _ in 0..100 {
        if marker.exists() {
            return;
        }
        thread::sleep(Duration::from_millis(20));
    }
    panic!("alarm command did not run");
}

#[test]
fn nonzero_alarm_exit_does_not_stop_recurrence() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("timer.json");
    fs::write(&state, running_state(60, 120)).expect("write state");

    timer_cmd(&state)
        .arg("--alarm-command")
        .arg("exit 3")
        .arg("--recurrent")
        .assert()
        .success()
        .stdout("Timer: 1m0s\n");

    assert_ne!(read_state(&state)["startTime"], "0001-01-01T00:00:00Z");
}

#[test]
fn alarm_launch_failure_is_logged_and_swallowed() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("timer.json");
    fs::write(&state, running_state(60, 120)).expect("write state");

    // Without PATH, `sh` cannot be found and the spawn itself fails.
    timer_cmd(&state)
        .env("PATH", "")
        .current_dir(dir.path())
        .arg("--alarm-command")
        .arg("true")
        .arg("--debug")
        .assert()
        .success()
        .stdout("Timer: 1m0s\n")
        .stderr(predicate::str::contains("Failed to launch alarm command"));

    assert_eq!(read_state(&state)["startTime"], "0001-01-01T00:00:00Z");
}

#[test]
fn duration_beyond_storable_range_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("timer.json");

    timer_cmd(&state)
        .arg("--duration")
        .arg("200000000")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());

    timer_cmd(&state)
        .arg("--duration")
        .arg("153722867")
        .assert()
        .success()
        .stdout("Timer: 2562047h47m0s\n");
}

#[test]
fn malformed_state_falls_back_to_default() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("timer.json");
    fs::write(&state, "{ not-valid-json ").expect("write state");

    timer_cmd(&state)
        .arg("--duration")
        .arg("3")
        .assert()
        .success()
        .stdout("Timer: 3m0s\n");

    assert_eq!(read_state(&state)["duration"], 180_000_000_000i64);
}

#[test]
fn unwritable_state_fails_without_output() {
    let dir = tempdir().expect("tempdir");
    let state = dir.path().join("missing-dir").join("timer.json");

    timer_cmd(&state)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unable to write timer state"));
}

#[test]
fn missing_home_is_fatal() {
    let mut cmd = cargo_bin_cmd!("i3-timer");
    cmd.env_remove("BLOCK_BUTTON")
        .env_remove("HOME")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("home directory"));
}
