//! # cms-import
//!
//! Generates a CMS import manifest from a local media directory. Your
//! filesystem is the data source: every valid file under the import
//! directory's media subdirectory becomes one content item, with its title,
//! URL name, and alt text derived from the filename.
//!
//! # Architecture: Scan, Derive, Serialize
//!
//! One pass, three concerns:
//!
//! ```text
//! 1. Scan       _media/      →  ScanReport       (filter chain + accumulation)
//! 2. Derive     filename     →  title/slug/alt   (naming rules)
//! 3. Serialize  ScanReport   →  content.json     (wire-format JSON)
//! ```
//!
//! The scan returns everything it learned — accepted items and skip records
//! alike — as a plain value, so the whole pipeline unit-tests without
//! process setup. Per-file rejections are data, not errors: a bad file is
//! reported on stderr and the run continues.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the media directory, applies the validity filter chain, accumulates items |
//! | [`naming`] | Filename → title, URL name, alt text (slugified or plain) |
//! | [`manifest`] | Wire-format data model and the indented JSON serializer |
//! | [`config`] | Optional `import.toml` options: slug mode, envelope, indent, filenames |
//! | [`output`] | Run summary and skip-report formatting |
//!
//! # Design Decisions
//!
//! ## Historical Variants Become Options
//!
//! Earlier importers disagreed on slug derivation (raw stem vs slugified),
//! document shape (envelope vs bare array), indentation (spaces vs tabs),
//! and destination (file vs stdout). All four are now explicit options with
//! the most complete variant as the default; see [`config::ImportConfig`].
//!
//! ## Write Failure Is Fatal
//!
//! Some earlier importers logged a failed manifest write and still exited
//! zero, so calling scripts proceeded against a stale or absent manifest.
//! Here any serialization or write failure exits non-zero.

pub mod config;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
