use crate::support::{bibnotes, create_record, write_config};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_edit_creates_and_opens() {
    let dir = TempDir::new().unwrap();
    let folder = create_record(&dir, "doc", "title: Sample\n");

    bibnotes(&dir)
        .args(["edit", "--notext", "--editor", "true", "doc"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("notes.tex\n"));

    assert!(folder.join("notes.tex").exists());
}

#[test]
fn test_edit_uses_configured_editor() {
    let dir = TempDir::new().unwrap();
    create_record(&dir, "doc", "title: Sample\n");
    let config = write_config(&dir, "editor = 'true'\n");

    bibnotes(&dir)
        .env_remove("EDITOR")
        .env_remove("VISUAL")
        .arg("--config")
        .arg(&config)
        .args(["edit", "--notext", "doc"])
        .assert()
        .success();
}

#[test]
fn test_edit_fails_without_editor() {
    let dir = TempDir::new().unwrap();
    let folder = create_record(&dir, "doc", "title: Sample\n");

    bibnotes(&dir)
        .env_remove("EDITOR")
        .env_remove("VISUAL")
        .args(["edit", "--notext", "doc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no editor configured"));

    assert!(!folder.join("notes.tex").exists());
}

#[test]
fn test_edit_failing_editor() {
    let dir = TempDir::new().unwrap();
    create_record(&dir, "doc", "title: Sample\n");

    bibnotes(&dir)
        .args(["edit", "--notext", "--editor", "false", "doc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("non-zero status"));
}

#[test]
fn test_edit_empty_configured_editor_falls_back_to_env() {
    let dir = TempDir::new().unwrap();
    let folder = create_record(&dir, "doc", "title: Sample\n");
    let config = write_config(&dir, "editor = ''\n");

    bibnotes(&dir)
        .env("EDITOR", "true")
        .env_remove("VISUAL")
        .arg("--config")
        .arg(&config)
        .args(["edit", "--notext", "doc"])
        .assert()
        .success();

    assert!(folder.join("notes.tex").exists());
}

#[test]
fn test_edit_empty_override_falls_back_to_env() {
    let dir = TempDir::new().unwrap();
    create_record(&dir, "doc", "title: Sample\n");

    bibnotes(&dir)
        .env_remove("EDITOR")
        .env("VISUAL", "true")
        .args(["edit", "--notext", "--editor", "", "doc"])
        .assert()
        .success();
}
