//! `bibnotes path` command - print the notes path of a document
//!
//! Assigns and saves a notes file name when the record has none, but never
//! creates the file itself.

use tracing::debug;

use crate::cli::Cli;
use crate::commands::helpers::print_notes_path;
use bibnotes_core::config::NotesConfig;
use bibnotes_core::document::Document;
use bibnotes_core::error::Result;
use bibnotes_core::extract::PdfExtractor;
use bibnotes_core::notes::NotesResolver;
use bibnotes_core::store::YamlStore;

/// Execute the path command
pub fn execute(
    cli: &Cli,
    config: &NotesConfig,
    store: &YamlStore,
    doc: &mut Document,
) -> Result<()> {
    let resolver = NotesResolver::new(config, store, &PdfExtractor);
    let path = resolver.notes_path(doc)?;

    if cli.verbose {
        debug!(path = %path.display(), "notes_path");
    }

    print_notes_path(cli, doc, &path)
}
