//! Shared test utilities for the cms-import test suite.
//!
//! Builds throwaway import directories so unit tests can exercise the
//! scanner without fixture files checked into the repo.

use std::fs;
use tempfile::TempDir;

/// Create an import directory whose `_media` subdirectory holds the given
/// files at the given sizes.
///
/// Sizes are applied with `set_len`, so a "30MB" fixture costs no real
/// disk on filesystems with sparse files. Validation only ever looks at
/// names and metadata, never content.
pub fn import_fixture(files: &[(&str, u64)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let media = tmp.path().join("_media");
    fs::create_dir_all(&media).unwrap();
    for (name, size) in files {
        let file = fs::File::create(media.join(name)).unwrap();
        file.set_len(*size).unwrap();
    }
    tmp
}
