//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Notes file name used when no `notes_name` template is configured
pub const DEFAULT_NOTES_NAME: &str = "notes.tex";

/// Metadata file stored inside every document folder
pub const DEFAULT_INFO_NAME: &str = "info.yaml";

/// Settings consumed by the notes resolver and the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesConfig {
    /// Template for the notes file name, e.g. `"{doc[title]}.tex"` (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_name: Option<String>,

    /// Path of the template used to seed new notes files; `~` is expanded
    #[serde(default)]
    pub notes_template: String,

    /// Name of the metadata file inside a document folder
    #[serde(default = "default_info_name")]
    pub info_name: String,

    /// Editor override (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

fn default_info_name() -> String {
    DEFAULT_INFO_NAME.to_string()
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            notes_name: None,
            notes_template: String::new(),
            info_name: default_info_name(),
            editor: None,
        }
    }
}
