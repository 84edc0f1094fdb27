use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn editor_cmd() -> Command {
    Command::cargo_bin("graphic-editor").expect("binary exists")
}

#[test]
fn help_prints_usage() {
    editor_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "place connected points or draw freehand strokes",
        ))
        .stdout(predicate::str::contains("--mode"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn version_prints_package_version() {
    editor_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn startup_requires_wayland_env() {
    editor_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"));
}

#[test]
fn wayland_check_happens_before_config_is_read() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("broken.toml");
    std::fs::write(&config_path, "this is = = not toml").unwrap();

    editor_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .args(["--mode", "drawing", "--config"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"))
        .stderr(predicate::str::contains("Failed to parse config").not());
}

#[test]
fn unknown_flag_is_rejected() {
    editor_cmd()
        .arg("--no-such-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn schema_dump_describes_config_sections() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"canvas\""))
        .stdout(predicate::str::contains("\"keybindings\""))
        .stdout(predicate::str::contains("\"freehand\""));
}
