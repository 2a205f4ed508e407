//! Output helpers shared by the notes commands

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use bibnotes_core::document::Document;
use bibnotes_core::error::Result;

/// Print a resolved notes path in the selected output format
pub fn print_notes_path(cli: &Cli, doc: &Document, path: &Path) -> Result<()> {
    let exists = path.exists();
    let notes = doc.notes.as_deref().unwrap_or_default();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "folder": doc.main_folder().to_string_lossy(),
                "notes": notes,
                "path": path.to_string_lossy(),
                "exists": exists,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", path.display());
        }
        OutputFormat::Records => {
            println!(
                "N notes=\"{}\" path={} exists={}",
                escape_quotes(notes),
                path.display(),
                exists
            );
        }
    }

    Ok(())
}

/// Escape double quotes for records output
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}
