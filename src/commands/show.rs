//! `bibnotes show` command - report a document's notes without changing it

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::escape_quotes;
use bibnotes_core::document::Document;
use bibnotes_core::error::Result;
use bibnotes_core::notes::{existing_notes_path, has_notes};

/// Execute the show command
pub fn execute(cli: &Cli, doc: &Document) -> Result<()> {
    let path = existing_notes_path(doc);
    let exists = path.as_ref().is_some_and(|p| p.exists());

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "folder": doc.main_folder().to_string_lossy(),
                "has_notes": has_notes(doc),
                "notes": doc.notes,
                "path": path.as_ref().map(|p| p.to_string_lossy()),
                "exists": exists,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match &path {
            Some(path) if exists => println!("{}", path.display()),
            Some(path) => println!("{} (not created yet)", path.display()),
            None => {
                if !cli.quiet {
                    println!("no notes");
                }
            }
        },
        OutputFormat::Records => match &path {
            Some(path) => println!(
                "N notes=\"{}\" path={} exists={}",
                escape_quotes(doc.notes.as_deref().unwrap_or_default()),
                path.display(),
                exists
            ),
            None => println!("N notes=- exists=false"),
        },
    }

    Ok(())
}
