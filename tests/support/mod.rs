use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for bibnotes, isolated from the user's global config
pub fn bibnotes(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("bibnotes");
    cmd.current_dir(dir.path())
        .env("BIBNOTES_CONFIG_DIR", dir.path().join("config"))
        .env_remove("RUST_LOG")
        .env_remove("BIBNOTES_LOG");
    cmd
}

/// Create a document folder with the given `info.yaml` content
pub fn create_record(dir: &TempDir, name: &str, info: &str) -> PathBuf {
    let folder = dir.path().join(name);
    fs::create_dir_all(&folder).unwrap();
    fs::write(folder.join("info.yaml"), info).unwrap();
    folder
}

/// Write a config file and return its path
pub fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("bibnotes.toml");
    fs::write(&path, content).unwrap();
    path
}

/// Write a notes template and return a config pointing at it
#[allow(dead_code)]
pub fn config_with_template(dir: &TempDir, name: Option<&str>, template: &str) -> PathBuf {
    let template_path = dir.path().join("template.tex");
    fs::write(&template_path, template).unwrap();

    let mut config = format!("notes_template = '{}'\n", template_path.display());
    if let Some(name) = name {
        config.push_str(&format!("notes_name = '{}'\n", name));
    }
    write_config(dir, &config)
}

/// First line of stdout, trimmed
pub fn first_line(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout)
        .lines()
        .next()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

#[allow(dead_code)]
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
