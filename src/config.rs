//! Import configuration module.
//!
//! Handles loading and validating the optional `import.toml` at the import
//! directory root. The config file unifies the historical importer variants
//! (slug vs raw names, envelope vs bare array, spaces vs tabs, alternate
//! output filenames) behind explicit options; command-line flags override
//! file values.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! slug_mode = "slugified"   # "slugified" or "plain"
//! envelope = true           # false = bare item array (legacy)
//! indent = "spaces"         # "spaces" (three) or "tabs" (legacy)
//! output = "content.json"   # manifest filename, relative to the import dir
//! media_dir = "_media"      # candidate file subdirectory
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown
//! keys are rejected to catch typos early.

use crate::manifest::Indent;
use crate::naming::SlugMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Name of the optional config file inside the import directory.
pub const CONFIG_FILE: &str = "import.toml";

/// Import run configuration loaded from `import.toml`.
///
/// All fields have defaults matching the most complete importer variant.
/// Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    /// How `urlName` is derived from file stems.
    pub slug_mode: SlugMode,
    /// Wrap items in the `{ "content": [...] }` envelope.
    pub envelope: bool,
    /// JSON indentation style.
    pub indent: Indent,
    /// Manifest filename, written inside the import directory.
    pub output: String,
    /// Subdirectory of the import directory holding candidate files.
    pub media_dir: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            slug_mode: SlugMode::default(),
            envelope: true,
            indent: Indent::default(),
            output: "content.json".to_string(),
            media_dir: "_media".to_string(),
        }
    }
}

impl ImportConfig {
    /// Validate config values.
    ///
    /// `output` and `media_dir` are plain names resolved against the import
    /// directory; path separators would let the manifest escape it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [("output", &self.output), ("media_dir", &self.media_dir)] {
            if value.is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
            if value.contains('/') || value.contains('\\') {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a plain filename, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

/// Load config from `<import_dir>/import.toml`, falling back to defaults
/// when the file doesn't exist.
pub fn load_config(import_dir: &Path) -> Result<ImportConfig, ConfigError> {
    let config_path = import_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(ImportConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: ImportConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A stock `import.toml` with every option documented, for `--print-config`.
pub fn stock_config_toml() -> &'static str {
    r#"# cms-import configuration
# Place this file at the import directory root, next to the media
# subdirectory. All options are optional; defaults shown.

# How urlName is derived from a file's stem:
#   "slugified" - punctuation stripped, lower-cased, spaces hyphenated
#   "plain"     - raw stem verbatim (legacy importer behavior)
slug_mode = "slugified"

# Wrap items in the { "content": [...] } envelope. Set to false for
# pipelines that expect a bare item array.
envelope = true

# JSON indentation: "spaces" (three per level) or "tabs" (legacy).
indent = "spaces"

# Manifest filename, written inside the import directory.
output = "content.json"

# Subdirectory holding the candidate media files.
media_dir = "_media"
"#
}
