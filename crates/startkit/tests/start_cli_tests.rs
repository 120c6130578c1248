//! Integration tests for the start command
//!
//! Runs the built binary against temp directories.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn startkit(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_startkit"))
        .args(args)
        .current_dir(cwd)
        .env_remove("STARTKIT_TEMPLATE_DIR")
        .output()
        .expect("failed to run startkit")
}

#[test]
fn test_start_creates_project() {
    let tmp = TempDir::new().unwrap();
    let output = startkit(&["-q", "start", "web"], tmp.path());
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let root = tmp.path().join("web");
    let main = std::fs::read_to_string(root.join("app/main.py")).unwrap();
    assert!(main.contains("app['name'] = 'web'"));
    assert!(root.join("requirements.txt").exists());
    assert!(root.join("settings.yml").exists());
    assert!(!root.join("Makefile").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let output = startkit(
        &["-q", "start", "web", "--template-engine", "none", "--dry-run"],
        tmp.path(),
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("app/main.py"));
    assert!(stdout.contains("settings.yml"));
    assert!(!stdout.contains(".jinja"));
    assert!(!tmp.path().join("web").exists());
}

#[test]
fn test_conflict_exits_with_error() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("web");
    std::fs::create_dir_all(root.join("app")).unwrap();

    let output = startkit(&["-q", "start", "web"], tmp.path());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("would conflict with the new project: app"));
    assert!(!root.join("settings.yml").exists());
}

#[test]
fn test_custom_template_dir_from_env() {
    let tmp = TempDir::new().unwrap();
    let template = tmp.path().join("tpl");
    std::fs::create_dir_all(template.join("app")).unwrap();
    std::fs::write(template.join("app/{{ name }}.txt"), "Hello {{ name }}").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_startkit"))
        .args(["-q", "start", "out", "demo"])
        .current_dir(tmp.path())
        .env("STARTKIT_TEMPLATE_DIR", &template)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    assert_eq!(
        std::fs::read_to_string(tmp.path().join("out/app/demo.txt")).unwrap(),
        "Hello demo\n"
    );
}

#[test]
fn test_invalid_choice_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let output = startkit(&["start", "web", "--database", "mysql"], tmp.path());
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("none, postgres-sqlalchemy, postgres-raw"));
    assert!(!tmp.path().join("web").exists());
}
