use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the user's config file.
fn breathe(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("breathe").unwrap();
    cmd.env("BREATHE_CONFIG", dir.path().join("config.yaml"))
        .env("HOME", dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn presets_lists_patterns() {
    let dir = TempDir::new().unwrap();
    breathe(&dir)
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Presets (5 patterns)"))
        .stdout(predicate::str::contains("4-7-8 Breathing"))
        .stdout(predicate::str::contains("3.75/min"));
}

#[test]
fn presets_as_json() {
    let dir = TempDir::new().unwrap();
    let output = breathe(&dir)
        .args(["presets", "-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 5);
}

#[test]
fn simulated_box_session_ends_after_four_cycles() {
    let dir = TempDir::new().unwrap();
    breathe(&dir)
        .args([
            "run",
            "--headless",
            "--simulate",
            "--session",
            "1",
            "--preset",
            "box",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[0:00.0] In"))
        .stdout(predicate::str::contains("[1:00.0] Finishing last round..."))
        .stdout(predicate::str::contains(
            "Session complete after 4 cycles (1:07.2)",
        ));
}

#[test]
fn simulate_requires_a_session() {
    let dir = TempDir::new().unwrap();
    breathe(&dir)
        .args(["run", "--headless", "--simulate"])
        .assert()
        .failure();
}

#[test]
fn unknown_preset_fails() {
    let dir = TempDir::new().unwrap();
    breathe(&dir)
        .args(["run", "--headless", "--simulate", "-s", "1", "-p", "nope"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("known presets: perfect, box"));
}

#[test]
fn config_file_sets_default_preset() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.yaml"),
        "defaults:\n  preset: 4-7-8\n",
    )
    .unwrap();

    breathe(&dir)
        .args(["run", "--headless", "--simulate", "-s", "0.1", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hold_secs\": 7.0"))
        .stdout(predicate::str::contains("\"cycles_completed\": 1"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.yaml"), "pacer:\n  tick_ms: 0\n").unwrap();

    breathe(&dir)
        .arg("presets")
        .assert()
        .failure()
        .stderr(predicate::str::contains("tick_ms must be positive"));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    breathe(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_breathe"));
}
