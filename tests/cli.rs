use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn panel_cmd() -> Command {
    Command::cargo_bin("scribe-panel").expect("binary exists")
}

/// Command with config and settings confined to a temp config home.
fn isolated_cmd(temp: &TempDir) -> Command {
    let mut cmd = panel_cmd();
    cmd.env("XDG_CONFIG_HOME", temp.path());
    cmd
}

#[test]
fn help_prints_usage() {
    panel_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Floating tool and background panel for screen annotation overlays",
        ));
}

#[test]
fn events_drive_the_panel() {
    let temp = TempDir::new().unwrap();
    isolated_cmd(&temp)
        .args(["--no-persist", "-e", "tool:marker", "-e", "size:42"])
        .args(["-e", "background:black", "-e", "background"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tool: marker"))
        .stdout(predicate::str::contains("marker-size=42"))
        .stdout(predicate::str::contains("background: black"))
        .stdout(predicate::str::contains("panel: showing background"));
}

#[test]
fn unknown_event_is_rejected() {
    panel_cmd()
        .args(["--no-persist", "--event", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown event 'bogus'"));
}

#[test]
fn settings_conflict_with_no_persist() {
    panel_cmd()
        .args(["--no-persist", "--settings", "/tmp/unused.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn sizes_persist_between_runs() {
    let temp = TempDir::new().unwrap();
    isolated_cmd(&temp)
        .args(["-e", "size:12"])
        .assert()
        .success();

    assert!(temp.path().join("scribe-panel").join("settings.toml").exists());

    isolated_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("pen-size=12"));
}

#[test]
fn color_dialog_answers_are_scripted() {
    let temp = TempDir::new().unwrap();
    isolated_cmd(&temp)
        .args(["--no-persist", "-e", "pick-color", "--color-response", "cancel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color: #ea4335"));

    isolated_cmd(&temp)
        .args(["--no-persist", "-e", "pick-color", "--color-response", "#4285f4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color: #4285f4"));
}

#[test]
fn eraser_reports_circle_cursor() {
    let temp = TempDir::new().unwrap();
    isolated_cmd(&temp)
        .args(["--no-persist", "-e", "tool:eraser"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cursor: circle (62)"));
}

#[test]
fn confirmed_exit_stops_processing() {
    let temp = TempDir::new().unwrap();
    isolated_cmd(&temp)
        .args(["--no-persist", "-e", "exit", "-e", "exit-yes", "-e", "tool:marker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("quit: yes"))
        .stdout(predicate::str::contains("tool: pen"));
}

#[test]
fn config_file_sets_default_background() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");
    std::fs::write(&config_path, "[board]\ndefault_background = \"white\"\n").unwrap();

    isolated_cmd(&temp)
        .arg("--no-persist")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("background: white"));
}

#[test]
fn preview_png_is_written() {
    let temp = TempDir::new().unwrap();
    let png = temp.path().join("preview.png");

    isolated_cmd(&temp)
        .args(["--no-persist", "-e", "size:20"])
        .arg("--preview")
        .arg(&png)
        .assert()
        .success();

    let bytes = std::fs::read(&png).unwrap();
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}
