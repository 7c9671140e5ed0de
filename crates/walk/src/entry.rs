use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// A single filesystem entry produced by the traversal engine.
///
/// Entries carry the cursor's classification as a directory hint so
/// downstream "is this a directory" checks do not need another metadata
/// call. Traversal is physical, so a symbolic link pointing at a directory
/// reports `false`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    path: PathBuf,
    is_dir: bool,
}

impl Entry {
    pub(crate) const fn new(path: PathBuf, is_dir: bool) -> Self {
        Self { path, is_dir }
    }

    /// Returns the absolute path to the entry.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the final component of the entry's path.
    ///
    /// Entries always sit below the traversal root, so a final component is
    /// always present.
    #[must_use]
    pub fn file_name(&self) -> &OsStr {
        self.path.file_name().unwrap_or_else(|| self.path.as_os_str())
    }

    /// Reports whether the entry was classified as a directory.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Consumes the entry, returning its path.
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
