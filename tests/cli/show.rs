use crate::support::{bibnotes, create_record, read};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_show_without_notes_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let folder = create_record(&dir, "doc", "title: Sample\n");

    bibnotes(&dir)
        .args(["show", "doc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no notes"));

    assert_eq!(read(&folder.join("info.yaml")), "title: Sample\n");
}

#[test]
fn test_show_assigned_but_missing() {
    let dir = TempDir::new().unwrap();
    create_record(&dir, "doc", "title: Sample\nnotes: notes.tex\n");

    bibnotes(&dir)
        .args(["show", "doc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not created yet)"));
}

#[test]
fn test_show_json_existing() {
    let dir = TempDir::new().unwrap();
    let folder = create_record(&dir, "doc", "title: Sample\nnotes: notes.tex\n");
    fs::write(folder.join("notes.tex"), "x").unwrap();

    let output = bibnotes(&dir)
        .args(["--format", "json", "show", "doc"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["has_notes"], true);
    assert_eq!(json["exists"], true);
    assert_eq!(json["notes"], "notes.tex");
}

#[test]
fn test_show_records_without_notes() {
    let dir = TempDir::new().unwrap();
    create_record(&dir, "doc", "title: Sample\n");

    bibnotes(&dir)
        .args(["--format", "records", "show", "doc"])
        .assert()
        .success()
        .stdout("N notes=- exists=false\n");
}
