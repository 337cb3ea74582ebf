//! The manifest data model and its JSON serializer.
//!
//! Field names follow the CMS import wire format exactly — `type`,
//! `urlName`, `altText`, `source.ref` — so the emitted document can be
//! handed to the import pipeline unchanged:
//!
//! ```json
//! {
//!    "content": [
//!       {
//!          "type": "cms_image",
//!          "urlName": "my-photo-1",
//!          "body": {
//!             "title": "My Photo #1",
//!             "altText": "alt text for My Photo #1",
//!             "source": {
//!                "ref": "My Photo #1.JPG"
//!             }
//!          }
//!       }
//!    ]
//! }
//! ```
//!
//! The canonical rendering is three-space indent with the `content`
//! envelope. The legacy renderings (tab indent, bare array) survive as
//! [`Indent::Tabs`] and `envelope = false` for pipelines that still expect
//! them.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write manifest {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Content treatment selector, serialized verbatim into each item's `type`.
///
/// Images carry size and extension restrictions; documents are accepted
/// as-is. The clap value names keep the original underscored spelling on
/// the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ImportType {
    #[value(name = "cms_image")]
    CmsImage,
    #[value(name = "cms_document")]
    CmsDocument,
}

/// Reference back to the original file in the media directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSource {
    #[serde(rename = "ref")]
    pub reference: String,
}

/// Display fields for one content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBody {
    pub title: String,
    #[serde(rename = "altText")]
    pub alt_text: String,
    pub source: ContentSource,
}

/// One importable content item. Constructed once per accepted file and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub content_type: ImportType,
    #[serde(rename = "urlName")]
    pub url_name: String,
    pub body: ContentBody,
}

/// The document envelope: `{ "content": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestDocument {
    pub content: Vec<ContentItem>,
}

/// Indentation style for the emitted JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// Three spaces per level (canonical).
    #[default]
    Spaces,
    /// One tab per level (legacy).
    Tabs,
}

impl Indent {
    fn as_bytes(self) -> &'static [u8] {
        match self {
            Indent::Spaces => b"   ",
            Indent::Tabs => b"\t",
        }
    }
}

/// Serialize items as an indented JSON document.
///
/// With `envelope` the items are wrapped in [`ManifestDocument`]; without
/// it the output is a bare array, as the oldest pipelines expect.
pub fn to_json(
    items: &[ContentItem],
    envelope: bool,
    indent: Indent,
) -> Result<String, ManifestError> {
    let mut buf = Vec::with_capacity(256);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    if envelope {
        ManifestDocument {
            content: items.to_vec(),
        }
        .serialize(&mut ser)?;
    } else {
        items.serialize(&mut ser)?;
    }
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8(buf).expect("serializer produced invalid UTF-8"))
}

/// Write the serialized manifest to disk.
pub fn write_manifest(path: &Path, json: &str) -> Result<(), ManifestError> {
    fs::write(path, json).map_err(|source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item(filename: &str, url_name: &str) -> ContentItem {
        let title = filename.rsplit_once('.').map(|(t, _)| t).unwrap_or(filename);
        ContentItem {
            content_type: ImportType::CmsImage,
            url_name: url_name.to_string(),
            body: ContentBody {
                title: title.to_string(),
                alt_text: format!("alt text for {title}"),
                source: ContentSource {
                    reference: filename.to_string(),
                },
            },
        }
    }

    #[test]
    fn envelope_uses_three_space_indent() {
        let json = to_json(&[sample_item("a.png", "a")], true, Indent::Spaces).unwrap();
        assert!(json.starts_with("{\n   \"content\": [\n      {\n"));
        assert!(json.ends_with("\n   ]\n}"));
    }

    #[test]
    fn wire_field_names_match_import_format() {
        let json = to_json(&[sample_item("a.png", "a")], true, Indent::Spaces).unwrap();
        assert!(json.contains("\"type\": \"cms_image\""));
        assert!(json.contains("\"urlName\": \"a\""));
        assert!(json.contains("\"altText\": \"alt text for a\""));
        assert!(json.contains("\"ref\": \"a.png\""));
    }

    #[test]
    fn tab_indent_for_legacy_pipelines() {
        let json = to_json(&[sample_item("a.png", "a")], true, Indent::Tabs).unwrap();
        assert!(json.starts_with("{\n\t\"content\": [\n\t\t{\n"));
    }

    #[test]
    fn bare_array_without_envelope() {
        let json = to_json(&[sample_item("a.png", "a")], false, Indent::Spaces).unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
        assert!(!json.contains("\"content\""));
    }

    #[test]
    fn empty_scan_still_produces_a_document() {
        let json = to_json(&[], true, Indent::Spaces).unwrap();
        let doc: ManifestDocument = serde_json::from_str(&json).unwrap();
        assert!(doc.content.is_empty());
    }

    #[test]
    fn document_round_trips() {
        let items = vec![sample_item("a.png", "a"), sample_item("b.jpg", "b")];
        let json = to_json(&items, true, Indent::Spaces).unwrap();
        let doc: ManifestDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc.content, items);
    }

    #[test]
    fn bare_array_round_trips() {
        let items = vec![sample_item("a.png", "a")];
        let json = to_json(&items, false, Indent::Tabs).unwrap();
        let parsed: Vec<ContentItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, items);
    }

    #[test]
    fn import_type_serializes_underscored() {
        assert_eq!(
            serde_json::to_string(&ImportType::CmsImage).unwrap(),
            "\"cms_image\""
        );
        assert_eq!(
            serde_json::to_string(&ImportType::CmsDocument).unwrap(),
            "\"cms_document\""
        );
    }
}
