//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/contactbook/contactbook.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Command-line flags (`--file`, `--no-autosave`)

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Default address book file, relative to the working directory.
pub const DEFAULT_BOOK_PATH: &str = "addressbook.pickle";

/// Default interactive prompt.
pub const DEFAULT_PROMPT: &str = ">>> ";

/// Unified configuration for contactbook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Address book file (default: addressbook.pickle)
    pub book_path: PathBuf,
    /// Dump the book after every add/change (default: true)
    pub autosave: bool,
    /// Prompt printed before each input line
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            autosave: true,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

/// Raw settings for intermediate parsing.
///
/// `None` means "not specified in this layer, inherit".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub book_path: Option<PathBuf>,
    pub autosave: Option<bool>,
    pub prompt: Option<String>,
}

/// Get the XDG config directory for contactbook.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "contactbook").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("contactbook.toml"))
}

/// Parse a TOML config file into RawSettings.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    Config::builder()
        .add_source(
            File::from(path.to_path_buf())
                .format(FileFormat::Toml)
                .required(true),
        )
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(|e| ApplicationError::Config {
            message: format!("{}: {}", path.display(), e),
        })
}

impl Settings {
    /// Overlay a raw layer: fields it specifies win.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            book_path: overlay
                .book_path
                .clone()
                .unwrap_or_else(|| self.book_path.clone()),
            autosave: overlay.autosave.unwrap_or(self.autosave),
            prompt: overlay.prompt.clone().unwrap_or_else(|| self.prompt.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist when given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), config_file)
    }

    /// Load settings from explicit global and local layers.
    ///
    /// A missing global file is skipped; a missing local file is an error.
    pub fn load_from(
        global: Option<&Path>,
        config_file: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("config: global {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("config: local {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Ok(current)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, book_path: Option<PathBuf>, no_autosave: bool) -> Self {
        if let Some(path) = book_path {
            self.book_path = path;
        }
        if no_autosave {
            self.autosave = false;
        }
        self
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# contactbook configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/contactbook/contactbook.toml
#   Local:  file given with --config
#   Flags:  --file, --no-autosave

# Address book file
# book_path = "addressbook.pickle"

# Save the address book after every add/change
# autosave = true

# Interactive prompt
# prompt = ">>> "
"#
        .to_string()
    }
}
