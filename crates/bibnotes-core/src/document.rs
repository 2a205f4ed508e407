//! Bibliographic document records
//!
//! A record is the metadata of one document plus the folder it lives in.
//! `notes` and `files` are typed; every other key (`title`, `author`,
//! `year`, ...) is kept as a YAML value so templates can reach it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Field name of the notes file
pub const NOTES_KEY: &str = "notes";

/// Field name of the attached files
pub const FILES_KEY: &str = "files";

/// A document record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Folder backing the record (not serialized)
    #[serde(skip)]
    folder: Option<PathBuf>,

    /// Notes file name, relative to the folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Attached files, relative to the folder unless absolute
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,

    /// Remaining metadata fields
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl Document {
    /// Create an empty record without a folder
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the record to a folder
    pub fn with_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    /// Set a string field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a string field in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            NOTES_KEY => self.notes = Some(value),
            FILES_KEY => self.files = vec![value],
            _ => {
                self.fields.insert(key, Value::String(value));
            }
        }
    }

    /// The folder backing this record, if any
    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    /// The folder backing this record, or an empty path when unset
    pub fn main_folder(&self) -> &Path {
        self.folder.as_deref().unwrap_or_else(|| Path::new(""))
    }

    pub(crate) fn set_folder(&mut self, folder: PathBuf) {
        self.folder = Some(folder);
    }

    /// Look up a field by name, including `notes` and `files`
    pub fn get(&self, key: &str) -> Option<Value> {
        match key {
            NOTES_KEY => self.notes.clone().map(Value::String),
            FILES_KEY if self.files.is_empty() => None,
            FILES_KEY => Some(Value::Sequence(
                self.files.iter().cloned().map(Value::String).collect(),
            )),
            _ => self.fields.get(key).cloned(),
        }
    }

    /// Absolute (folder-joined) paths of the attached files
    pub fn file_paths(&self) -> Vec<PathBuf> {
        let folder = self.main_folder();
        self.files.iter().map(|file| folder.join(file)).collect()
    }
}
