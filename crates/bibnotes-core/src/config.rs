//! Configuration for bibnotes
//!
//! Settings live in `~/.config/bibnotes/config.toml`. The directory can be
//! overridden with `BIBNOTES_CONFIG_DIR`, or a file passed explicitly.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{BibnotesError, Result};

pub use types::{NotesConfig, DEFAULT_INFO_NAME, DEFAULT_NOTES_NAME};

const CONFIG_DIR: &str = "bibnotes";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "BIBNOTES_CONFIG_DIR";

impl NotesConfig {
    /// Location of the global config file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    BibnotesError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the global config, falling back to defaults when it does not exist
    pub fn load_default() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| BibnotesError::io_operation("read config", path.display(), e))?;
        let config: NotesConfig = toml::from_str(&content)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| BibnotesError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The body template path with `~` expanded
    pub fn notes_template_path(&self) -> PathBuf {
        expand_home(&self.notes_template)
    }

    fn validate(&self) -> Result<()> {
        if self.info_name.is_empty() || self.info_name.contains(['/', '\\']) {
            bail_invalid!("info_name", format!("{:?}", self.info_name));
        }
        Ok(())
    }
}

/// Expand a leading `~` to the user's home directory.
///
/// Only `~` and `~/...` are expanded; anything else is returned as-is.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
