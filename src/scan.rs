//! Media directory scanning and item accumulation.
//!
//! Walks `<import_dir>/<media_dir>` once, applies the validity filter chain
//! to each entry, and builds one [`ContentItem`] per accepted file. Rejected
//! files become [`SkippedFile`] records instead of errors — a bad file never
//! stops the run, it just doesn't appear in the manifest.
//!
//! ## Filter Chain
//!
//! Applied in order, short-circuiting on the first failure:
//!
//! 1. Directories are skipped.
//! 2. Hidden files (leading `.`) are skipped.
//! 3. Image imports only: files over 25,000,000 bytes are skipped.
//! 4. Image imports only: extensions outside {jpg, jpeg, png, gif, bmp}
//!    (case-insensitive) are skipped. No extension counts as unsupported.
//!
//! Document imports apply only rules 1 and 2.
//!
//! ## Ordering
//!
//! Items follow the OS directory listing order. The import pipeline treats
//! the manifest as a set, so no sort is imposed here.

use crate::config::ImportConfig;
use crate::manifest::{ContentBody, ContentItem, ContentSource, ImportType};
use crate::naming;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("media directory not found: {0}")]
    MediaDirMissing(PathBuf),
    #[error("media path is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Image files above this size are rejected by the import pipeline.
pub const MAX_IMAGE_BYTES: u64 = 25_000_000;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp"];

/// Why the validator rejected a candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    IsDirectory,
    Hidden,
    Oversized { size: u64 },
    UnsupportedType,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::IsDirectory => write!(f, "is a directory"),
            SkipReason::Hidden => write!(f, "is hidden"),
            SkipReason::Oversized { size } => {
                write!(f, "is greater than 25MB ({size} bytes)")
            }
            SkipReason::UnsupportedType => write!(f, "is of a non-supported file type"),
        }
    }
}

/// A file the validator rejected, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFile {
    pub filename: String,
    pub reason: SkipReason,
}

/// Everything one scan pass produced: accepted items in listing order plus
/// the skip records for reporting.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub items: Vec<ContentItem>,
    pub skipped: Vec<SkippedFile>,
}

/// Scan the media directory and accumulate content items.
///
/// A missing or unreadable media directory is fatal; everything per-file is
/// recoverable and lands in `skipped`.
pub fn scan_media(
    import_dir: &Path,
    import_type: ImportType,
    config: &ImportConfig,
) -> Result<ScanReport, ScanError> {
    let media_dir = import_dir.join(&config.media_dir);
    if !media_dir.exists() {
        return Err(ScanError::MediaDirMissing(media_dir));
    }
    if !media_dir.is_dir() {
        return Err(ScanError::NotADirectory(media_dir));
    }

    let mut report = ScanReport::default();
    for entry in fs::read_dir(&media_dir)? {
        let entry = entry?;
        let filename = entry.file_name().to_string_lossy().into_owned();
        let metadata = entry.metadata()?;

        if let Some(reason) =
            validate_entry(&filename, metadata.is_dir(), metadata.len(), import_type)
        {
            report.skipped.push(SkippedFile { filename, reason });
            continue;
        }

        let derived = naming::derive_name(&filename, config.slug_mode);
        report.items.push(ContentItem {
            content_type: import_type,
            url_name: derived.url_name,
            body: ContentBody {
                title: derived.title,
                alt_text: derived.alt_text,
                source: ContentSource {
                    reference: filename,
                },
            },
        });
    }

    Ok(report)
}

/// Apply the filter chain to one directory entry.
///
/// Returns `None` for acceptance, or the first failing rule.
fn validate_entry(
    filename: &str,
    is_dir: bool,
    size: u64,
    import_type: ImportType,
) -> Option<SkipReason> {
    if is_dir {
        return Some(SkipReason::IsDirectory);
    }
    if filename.starts_with('.') {
        return Some(SkipReason::Hidden);
    }
    if import_type == ImportType::CmsImage {
        if size > MAX_IMAGE_BYTES {
            return Some(SkipReason::Oversized { size });
        }
        if !is_supported_image(filename) {
            return Some(SkipReason::UnsupportedType);
        }
    }
    None
}

fn is_supported_image(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
