#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Shared test fixtures for the fsitem workspace: declarative temporary
//! directory trees.
//!
//! Fixture helpers panic on I/O failure; they are only ever used from tests,
//! where a broken fixture should abort the run immediately.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Builds a temporary tree from declarative entries.
///
/// Entries ending in `/` become directories; everything else becomes a small
/// file. Missing parent directories are created as needed, so nested files
/// imply their ancestors.
///
/// # Examples
///
/// ```
/// let tree = fsitem_test_support::temp_tree(&["a.txt", "sub/c.txt", "empty/"]);
/// assert!(tree.path().join("sub/c.txt").is_file());
/// assert!(tree.path().join("empty").is_dir());
/// ```
#[must_use]
pub fn temp_tree(entries: &[&str]) -> TempDir {
    let temp = tempfile::tempdir().expect("create tempdir");
    populate(temp.path(), entries);
    temp
}

/// Populates `root` with the given declarative entries.
pub fn populate(root: &Path, entries: &[&str]) {
    for entry in entries {
        let path = root.join(entry.trim_end_matches('/'));
        if entry.ends_with('/') {
            fs::create_dir_all(&path).expect("create directory");
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("create parent");
            }
            fs::write(&path, b"data").expect("write file");
        }
    }
}
