//! Centralized filename-to-metadata derivation.
//!
//! Every accepted media file yields the same three fields: a display title,
//! a URL name, and alt text. This module is the single place those rules
//! live, so the scanner and the tests agree on them.
//!
//! ## URL Names
//!
//! Two modes exist because historical importers disagreed:
//! - **Slugified** (default): title with everything that is not a letter,
//!   digit, or space removed, lower-cased, spaces turned into hyphens.
//! - **Plain**: the raw file stem, verbatim, as older importers emitted it.
//!
//! ```text
//! "My Photo #1.JPG"  → title "My Photo #1", urlName "my-photo-1"
//! "notes.txt"        → title "notes",       urlName "notes"
//! "Café Menu.png"    → title "Café Menu",   urlName "café-menu"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// How `urlName` is derived from a file's title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Strip punctuation, lower-case, hyphenate spaces.
    #[default]
    Slugified,
    /// Use the raw file stem verbatim (legacy importer behavior).
    Plain,
}

/// Metadata derived from a single media filename.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedName {
    /// Filename with the final extension removed.
    pub title: String,
    /// URL-safe identifier, per [`SlugMode`].
    pub url_name: String,
    /// Alt text for the item body.
    pub alt_text: String,
}

/// Derive title, URL name, and alt text from a filename.
///
/// Only the final extension is stripped: `archive.tar.gz` titles as
/// `archive.tar`. A filename without a dot is its own title.
pub fn derive_name(filename: &str, mode: SlugMode) -> DerivedName {
    let title = strip_extension(filename);
    let url_name = match mode {
        SlugMode::Slugified => slugify(&title),
        SlugMode::Plain => title.clone(),
    };
    DerivedName {
        url_name,
        alt_text: format!("alt text for {title}"),
        title,
    }
}

/// Reduce a title to a URL-safe slug.
///
/// Keeps Unicode letters, digits, and spaces; drops everything else;
/// lower-cases; then hyphenates spaces. Consecutive spaces produce
/// consecutive hyphens — the input filename owns its own tidiness.
pub fn slugify(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect::<String>()
        .to_lowercase()
        .replace(' ', "-")
}

fn strip_extension(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}
