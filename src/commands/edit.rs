//! `bibnotes edit` command - open a document's notes in an editor
//!
//! - Creates the notes file first, like `bibnotes ensure`
//! - `--editor <cmd>` overrides the configured editor, `$EDITOR` and `$VISUAL`
//! - Fails with a usage error if no editor is configured or detected

use std::process::Command;

use tracing::debug;

use crate::cli::Cli;
use crate::commands::helpers::print_notes_path;
use bibnotes_core::bail_usage;
use bibnotes_core::config::NotesConfig;
use bibnotes_core::document::Document;
use bibnotes_core::error::{BibnotesError, Result};
use bibnotes_core::extract::PdfExtractor;
use bibnotes_core::notes::NotesResolver;
use bibnotes_core::store::YamlStore;

/// Execute the edit command
pub fn execute(
    cli: &Cli,
    config: &NotesConfig,
    store: &YamlStore,
    doc: &mut Document,
    notext: bool,
    editor_override: Option<&str>,
) -> Result<()> {
    // Resolve the editor before touching the record; empty values fall through
    let Some(editor) = editor_override
        .map(String::from)
        .filter(|editor| !editor.is_empty())
        .or_else(|| config.editor.clone().filter(|editor| !editor.is_empty()))
        .or_else(|| non_empty_env("EDITOR"))
        .or_else(|| non_empty_env("VISUAL"))
    else {
        bail_usage!(
            "no editor configured. Set EDITOR or VISUAL environment variable, or use --editor"
        );
    };

    let resolver = NotesResolver::new(config, store, &PdfExtractor);
    let path = resolver.notes_path_ensured(doc, notext)?;

    if cli.verbose {
        debug!(editor = %editor, path = %path.display(), "open_editor");
    }

    let status = Command::new(&editor).arg(&path).status().map_err(|e| {
        BibnotesError::Other(format!("failed to open editor '{}': {}", editor, e))
    })?;

    if !status.success() {
        return Err(BibnotesError::Other(format!(
            "editor '{}' exited with non-zero status: {:?}",
            editor, status
        )));
    }

    print_notes_path(cli, doc, &path)
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
