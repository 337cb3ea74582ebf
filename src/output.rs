//! CLI output formatting.
//!
//! # Information-First Display
//!
//! The run summary is **information-centric, not file-centric**: each
//! accepted item leads with its positional index and title, with the
//! original filename and derived slug as indented context lines. Skip
//! reports go to stderr, one line per rejected file, so piping stdout
//! elsewhere never loses them.
//!
//! ```text
//! Items
//! 001 My Photo #1
//!     Source: My Photo #1.JPG
//!     Slug: my-photo-1
//! 002 sunset
//!     Source: sunset.jpg
//!     Slug: sunset
//!
//! Imported 2 items, skipped 1
//! Manifest: photos/content.json
//! ```
//!
//! # Architecture
//!
//! Each surface has a `format_*` function (returns `String`s) for
//! testability and a `print_*`/`eprint_*` wrapper that does the I/O.
//! Format functions are pure — no I/O, no side effects.

use crate::scan::{ScanReport, SkippedFile};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// One stderr line for a rejected file, matching the historical wording.
pub fn format_skip_line(skip: &SkippedFile) -> String {
    format!("{} {}, skipping", skip.filename, skip.reason)
}

/// Format the end-of-run summary.
///
/// `destination` is the manifest path when one was written; `None` in
/// check mode and stdout mode, where there is no file to point at.
pub fn format_scan_summary(report: &ScanReport, destination: Option<&Path>) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Items".to_string());
    for (i, item) in report.items.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), item.body.title));
        lines.push(format!("    Source: {}", item.body.source.reference));
        lines.push(format!("    Slug: {}", item.url_name));
    }

    lines.push(String::new());
    lines.push(format!(
        "Imported {} items, skipped {}",
        report.items.len(),
        report.skipped.len()
    ));
    if let Some(path) = destination {
        lines.push(format!("Manifest: {}", path.display()));
    }

    lines
}

/// Print the run summary to stdout.
pub fn print_scan_summary(report: &ScanReport, destination: Option<&Path>) {
    for line in format_scan_summary(report, destination) {
        println!("{}", line);
    }
}

/// Report every skipped file to stderr.
pub fn eprint_skips(report: &ScanReport) {
    for skip in &report.skipped {
        eprintln!("{}", format_skip_line(skip));
    }
}
