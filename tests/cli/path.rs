use crate::support::{bibnotes, create_record, first_line, read, write_config};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_path_assigns_default_name() {
    let dir = TempDir::new().unwrap();
    let folder = create_record(&dir, "smith2020", "title: Sample\n");

    let output = bibnotes(&dir).args(["path", "smith2020"]).output().unwrap();
    assert!(output.status.success());

    let path = first_line(&output.stdout);
    assert_eq!(
        std::path::PathBuf::from(&path).file_name().unwrap(),
        "notes.tex"
    );
    assert!(path.contains("smith2020"));

    // The name is persisted, the file is not created
    assert!(read(&folder.join("info.yaml")).contains("notes: notes.tex"));
    assert!(!folder.join("notes.tex").exists());
}

#[test]
fn test_path_is_stable() {
    let dir = TempDir::new().unwrap();
    create_record(&dir, "doc", "title: A Title\n");
    let config = write_config(&dir, "notes_name = '{doc[title]}.md'\n");

    let first = bibnotes(&dir)
        .arg("--config")
        .arg(&config)
        .args(["path", "doc"])
        .output()
        .unwrap();
    let second = bibnotes(&dir)
        .arg("--config")
        .arg(&config)
        .args(["path", "doc"])
        .output()
        .unwrap();

    assert_eq!(first_line(&first.stdout), first_line(&second.stdout));
    assert!(first_line(&first.stdout).ends_with("a-title.md"));
}

#[test]
fn test_path_keeps_existing_notes() {
    let dir = TempDir::new().unwrap();
    let folder = create_record(&dir, "doc", "title: Sample\nnotes: mine.org\n");
    let before = read(&folder.join("info.yaml"));

    bibnotes(&dir)
        .args(["path", "doc"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("mine.org\n"));

    assert_eq!(read(&folder.join("info.yaml")), before);
}

#[test]
fn test_path_name_template_error_fails() {
    let dir = TempDir::new().unwrap();
    let folder = create_record(&dir, "doc", "title: Sample\n");
    let config = write_config(&dir, "notes_name = '{doc[journal]}.tex'\n");

    bibnotes(&dir)
        .arg("--config")
        .arg(&config)
        .args(["path", "doc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("journal"));

    assert!(!read(&folder.join("info.yaml")).contains("notes"));
}

#[test]
fn test_path_records_format() {
    let dir = TempDir::new().unwrap();
    create_record(&dir, "doc", "title: Sample\n");

    bibnotes(&dir)
        .args(["--format", "records", "path", "doc"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("N notes=\"notes.tex\" path="))
        .stdout(predicate::str::contains("exists=false"));
}
