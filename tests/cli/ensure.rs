use crate::support::{bibnotes, config_with_template, create_record, first_line, read};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_ensure_sample_scenario() {
    let dir = TempDir::new().unwrap();
    let folder = create_record(&dir, "sample", "title: Sample\n");
    let config = config_with_template(&dir, Some("notes.tex"), "Notes for {doc[title]}");

    let output = bibnotes(&dir)
        .arg("--config")
        .arg(&config)
        .args(["ensure", "--notext", "sample"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let notes = folder.join("notes.tex");
    assert!(first_line(&output.stdout).ends_with("notes.tex"));
    assert_eq!(read(&notes), "Notes for Sample");
}

#[test]
fn test_ensure_never_overwrites() {
    let dir = TempDir::new().unwrap();
    let folder = create_record(&dir, "doc", "title: Sample\nnotes: notes.tex\n");
    fs::write(folder.join("notes.tex"), "keep me").unwrap();
    let config = config_with_template(&dir, None, "Notes for {doc[title]}");

    for args in [vec!["ensure", "--notext", "doc"], vec!["ensure", "doc"]] {
        bibnotes(&dir)
            .arg("--config")
            .arg(&config)
            .args(&args)
            .assert()
            .success();
        assert_eq!(read(&folder.join("notes.tex")), "keep me");
    }
}

#[test]
fn test_ensure_without_template_creates_empty_file() {
    let dir = TempDir::new().unwrap();
    let folder = create_record(&dir, "doc", "title: Sample\n");

    bibnotes(&dir)
        .args(["ensure", "doc"])
        .assert()
        .success();

    assert_eq!(read(&folder.join("notes.tex")), "");
}

#[test]
fn test_ensure_template_error_is_logged() {
    let dir = TempDir::new().unwrap();
    let folder = create_record(&dir, "doc", "title: Sample\n");
    let config = config_with_template(&dir, None, "Notes for {doc[journal]}");

    bibnotes(&dir)
        .arg("--config")
        .arg(&config)
        .args(["ensure", "--notext", "doc"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to format notes template"));

    assert_eq!(read(&folder.join("notes.tex")), "");
}

#[test]
fn test_ensure_extraction_failure_aborts() {
    let dir = TempDir::new().unwrap();
    let folder = create_record(&dir, "doc", "title: Sample\nfiles:\n- missing.pdf\n");

    bibnotes(&dir)
        .args(["ensure", "doc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to extract text"));

    assert!(!folder.join("notes.tex").exists());

    bibnotes(&dir)
        .args(["ensure", "--notext", "doc"])
        .assert()
        .success();
    assert!(folder.join("notes.tex").exists());
}

#[test]
fn test_ensure_json_output() {
    let dir = TempDir::new().unwrap();
    create_record(&dir, "doc", "title: Sample\n");

    let output = bibnotes(&dir)
        .args(["--format", "json", "ensure", "--notext", "doc"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["notes"], "notes.tex");
    assert_eq!(json["exists"], true);
    assert!(json["path"].as_str().unwrap().ends_with("notes.tex"));
}
