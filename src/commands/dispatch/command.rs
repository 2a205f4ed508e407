//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::paths::resolve_folder;
use crate::cli::{Cli, Commands};
use crate::commands;
use bibnotes_core::config::NotesConfig;
use bibnotes_core::document::Document;
use bibnotes_core::error::Result;
use bibnotes_core::store::YamlStore;

use super::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Load the explicit `--config` file, or the global one
    pub fn load_config(&self) -> Result<NotesConfig> {
        let config = match &self.cli.config {
            Some(path) => NotesConfig::load(path)?,
            None => NotesConfig::load_default()?,
        };
        trace_command!(self.cli, self.start, "load_config");
        Ok(config)
    }

    /// Load the record stored in `folder`
    pub fn open_document(&self, store: &YamlStore, folder: &Path) -> Result<Document> {
        let doc = store.load(&resolve_folder(folder))?;
        trace_command!(self.cli, self.start, "load_document");
        Ok(doc)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let config = ctx.load_config()?;
        let store = YamlStore::from_config(&config);

        let result = match self {
            Commands::Path { folder } => {
                let mut doc = ctx.open_document(&store, folder)?;
                commands::path::execute(ctx.cli, &config, &store, &mut doc)
            }
            Commands::Ensure { folder, notext } => {
                let mut doc = ctx.open_document(&store, folder)?;
                commands::ensure::execute(ctx.cli, &config, &store, &mut doc, *notext)
            }
            Commands::Edit {
                folder,
                notext,
                editor,
            } => {
                let mut doc = ctx.open_document(&store, folder)?;
                commands::edit::execute(
                    ctx.cli,
                    &config,
                    &store,
                    &mut doc,
                    *notext,
                    editor.as_deref(),
                )
            }
            Commands::Show { folder } => {
                let doc = ctx.open_document(&store, folder)?;
                commands::show::execute(ctx.cli, &doc)
            }
        };
        result?;

        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("bibnotes {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Notes files for bibliographic document records.");
        println!();
        println!("Run `bibnotes --help` for usage information.");
        Ok(())
    }
}
