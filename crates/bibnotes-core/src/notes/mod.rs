//! Notes files attached to document records
//!
//! A record's notes live in `<folder>/<notes>`. The `notes` field is filled
//! in (and the record saved) the first time a path is requested; the file
//! itself is only created by [`NotesResolver::notes_path_ensured`], seeded
//! from the configured template and, optionally, the text of the attached
//! files.


use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::config::{NotesConfig, DEFAULT_NOTES_NAME};
use crate::document::Document;
use crate::error::Result;
use crate::extract::TextExtractor;
use crate::format::format;
use crate::store::DocumentStore;
use crate::text::{clean_file_name, normalize_line_breaks};

/// Whether the record has a non-empty `notes` field
pub fn has_notes(doc: &Document) -> bool {
    doc.notes.as_deref().is_some_and(|notes| !notes.is_empty())
}

/// Path of the notes file if the record already has one assigned.
///
/// Unlike [`NotesResolver::notes_path`] this never modifies or saves the record.
pub fn existing_notes_path(doc: &Document) -> Option<PathBuf> {
    if !has_notes(doc) {
        return None;
    }
    doc.notes.as_deref().map(|notes| doc.main_folder().join(notes))
}

/// Resolves and creates notes files for records
pub struct NotesResolver<'a, S, E> {
    config: &'a NotesConfig,
    store: &'a S,
    extractor: &'a E,
}

impl<'a, S, E> NotesResolver<'a, S, E>
where
    S: DocumentStore,
    E: TextExtractor,
{
    pub fn new(config: &'a NotesConfig, store: &'a S, extractor: &'a E) -> Self {
        Self {
            config,
            store,
            extractor,
        }
    }

    /// Path of the notes file for `doc`; the file need not exist.
    ///
    /// When the record has no notes yet, a name is built from the
    /// `notes_name` template, cleaned, stored in the record and saved.
    /// Errors from formatting the name or saving the record are returned.
    pub fn notes_path(&self, doc: &mut Document) -> Result<PathBuf> {
        if !has_notes(doc) {
            let name = match self.config.notes_name.as_deref() {
                Some(template) => format(template, doc)?,
                None => DEFAULT_NOTES_NAME.to_string(),
            };

            let mut cleaned = clean_file_name(&name);
            if cleaned.is_empty() {
                cleaned = DEFAULT_NOTES_NAME.to_string();
            }

            debug!(name = %cleaned, "assigning notes file");
            doc.notes = Some(cleaned);
            self.store.save(doc)?;
        }

        let notes = doc.notes.as_deref().unwrap_or_default();
        Ok(doc.main_folder().join(notes))
    }

    /// Path of the notes file for `doc`, creating the file if needed.
    ///
    /// A new file is seeded with the rendered `notes_template` followed, unless
    /// `notext` is set, by the text of every attached file. An existing file
    /// is never touched.
    #[tracing::instrument(skip(self, doc))]
    pub fn notes_path_ensured(&self, doc: &mut Document, notext: bool) -> Result<PathBuf> {
        let path = self.notes_path(doc)?;
        if path.exists() {
            debug!(path = %path.display(), "notes file already exists");
            return Ok(path);
        }

        let mut body = self.render_template(doc)?;

        if !notext {
            for file in doc.file_paths() {
                let text = self.extractor.extract_text(&file)?;
                body.push_str(&normalize_line_breaks(&text));
            }
        }

        fs::write(&path, body)?;
        debug!(path = %path.display(), "created notes file");
        Ok(path)
    }

    /// Render the configured body template, or nothing if there is none.
    ///
    /// A template that fails to render is logged and yields an empty body.
    fn render_template(&self, doc: &Document) -> Result<String> {
        let template_path = self.config.notes_template_path();
        if !is_template_file(&template_path) {
            return Ok(String::new());
        }

        let template = fs::read_to_string(&template_path)?;
        match format(&template, doc) {
            Ok(body) => Ok(body),
            Err(e) => {
                error!(
                    template = %template_path.display(),
                    error = %e,
                    "Failed to format notes template"
                );
                Ok(String::new())
            }
        }
    }
}

fn is_template_file(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_file()
}
