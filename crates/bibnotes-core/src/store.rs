//! Persistence of document records
//!
//! Each record lives in its own folder, with its metadata serialized as YAML
//! in `<folder>/<info_name>`.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::NotesConfig;
use crate::document::Document;
use crate::error::{BibnotesError, Result};

/// Saves records back to durable storage
pub trait DocumentStore {
    fn save(&self, doc: &Document) -> Result<()>;
}

/// Store keeping each record as a YAML file inside its folder
#[derive(Debug, Clone)]
pub struct YamlStore {
    info_name: String,
}

impl YamlStore {
    pub fn new(info_name: impl Into<String>) -> Self {
        Self {
            info_name: info_name.into(),
        }
    }

    pub fn from_config(config: &NotesConfig) -> Self {
        Self::new(config.info_name.clone())
    }

    /// Load the record stored in `folder`
    #[tracing::instrument(skip(self, folder), fields(folder = %folder.display()))]
    pub fn load(&self, folder: &Path) -> Result<Document> {
        let info_path = folder.join(&self.info_name);
        if !info_path.is_file() {
            return Err(BibnotesError::DocumentNotFound {
                path: folder.to_path_buf(),
            });
        }

        let content = fs::read_to_string(&info_path)?;
        let mut doc = if content.trim().is_empty() {
            Document::new()
        } else {
            serde_yaml::from_str::<Document>(&content).map_err(|e| {
                BibnotesError::InvalidDocument {
                    path: info_path.clone(),
                    reason: e.to_string(),
                }
            })?
        };
        doc.set_folder(folder.to_path_buf());

        debug!(has_notes = doc.notes.is_some(), files = doc.files.len(), "loaded document");
        Ok(doc)
    }
}

impl DocumentStore for YamlStore {
    fn save(&self, doc: &Document) -> Result<()> {
        let folder = doc.folder().ok_or_else(|| BibnotesError::MissingFolder {
            operation: "save document".to_string(),
        })?;
        let info_path = folder.join(&self.info_name);

        let content = serde_yaml::to_string(doc)?;
        fs::write(&info_path, content)
            .map_err(|e| BibnotesError::io_operation("write", info_path.display(), e))?;

        debug!(path = %info_path.display(), "saved document");
        Ok(())
    }
}
