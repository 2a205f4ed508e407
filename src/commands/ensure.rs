//! `bibnotes ensure` command - create a document's notes file if missing
//!
//! - New files are seeded from the configured `notes_template`
//! - `--notext` skips appending text extracted from attached files
//! - Existing files are left untouched

use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use crate::commands::helpers::print_notes_path;
use bibnotes_core::config::NotesConfig;
use bibnotes_core::document::Document;
use bibnotes_core::error::Result;
use bibnotes_core::extract::PdfExtractor;
use bibnotes_core::notes::NotesResolver;
use bibnotes_core::store::YamlStore;

/// Execute the ensure command
pub fn execute(
    cli: &Cli,
    config: &NotesConfig,
    store: &YamlStore,
    doc: &mut Document,
    notext: bool,
) -> Result<()> {
    let start = Instant::now();

    let resolver = NotesResolver::new(config, store, &PdfExtractor);
    let path = resolver.notes_path_ensured(doc, notext)?;

    if cli.verbose {
        debug!(path = %path.display(), notext, "ensure_notes");
    }
    bibnotes_core::trace_time!(start, "ensure_notes");

    print_notes_path(cli, doc, &path)
}
