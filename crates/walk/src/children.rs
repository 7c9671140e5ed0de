use crate::cursor::{Cursor, EntryKind};
use crate::entry::Entry;
use crate::error::WalkError;
use crate::options::{SYSTEM_NOISE_NAMES, TraverseOptions};
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, trace};

/// Opens a lazy traversal over the descendants of `root`.
///
/// Fails only when `root` does not exist; the check happens once, eagerly,
/// before any iteration begins. Every anomaly encountered afterwards is
/// absorbed and the affected entry is omitted from the sequence.
///
/// Re-traversing the same directory requires a fresh call; no traversal
/// state is shared or cached across calls.
pub fn children<P: Into<PathBuf>>(
    root: P,
    options: TraverseOptions,
) -> Result<Children, WalkError> {
    Children::new(root.into(), options)
}

/// Lazily-evaluated, order-preserving iterator over the descendants of a
/// directory.
///
/// Each pull advances the internal directory-stream cursor until a yieldable
/// entry is found or the stream is exhausted, applying the hidden-file and
/// system-noise filters and the pruning policy of the active
/// [`TraverseOptions`]. Entries surface in depth-first pre-order, each
/// directory's contents pre-sorted by natural name comparison.
///
/// One `Children` instance is single-pass and owns its cursor exclusively;
/// abandoning the iterator releases the cursor's resources.
#[derive(Debug)]
pub struct Children {
    cursor: Cursor,
    options: TraverseOptions,
}

impl Children {
    fn new(root: PathBuf, options: TraverseOptions) -> Result<Self, WalkError> {
        let root = strip_trailing_separator(root);
        if let Err(error) = fs::symlink_metadata(&root) {
            return Err(WalkError::root_missing(root, error));
        }
        debug!(root = %root.display(), ?options, "opening traversal");
        Ok(Self {
            cursor: Cursor::open(&root),
            options,
        })
    }
}

impl Iterator for Children {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        loop {
            let raw = self.cursor.advance()?;

            if raw.kind.is_error() {
                trace!(path = %raw.path.display(), kind = ?raw.kind, "absorbing entry");
                continue;
            }

            let name = raw.path.file_name().unwrap_or_default();

            if is_dot_name(name) && !self.options.includes_hidden() {
                if raw.kind == EntryKind::Directory {
                    self.cursor.skip_subtree();
                }
                continue;
            }

            if is_system_noise(name) && !self.options.includes_system_noise() {
                continue;
            }

            let is_dir = raw.kind == EntryKind::Directory;
            if is_dir {
                if self.options.is_shallow() {
                    self.cursor.skip_subtree();
                } else if let Some(predicate) = self.options.descend_predicate() {
                    let entry = Entry::new(raw.path, true);
                    if !predicate(&entry) {
                        self.cursor.skip_subtree();
                    }
                    return Some(entry);
                }
            }
            return Some(Entry::new(raw.path, is_dir));
        }
    }
}

fn is_dot_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

fn is_system_noise(name: &OsStr) -> bool {
    name.to_str()
        .is_some_and(|name| SYSTEM_NOISE_NAMES.contains(&name))
}

/// The underlying stream primitive is sensitive to a trailing separator on
/// its root.
fn strip_trailing_separator(path: PathBuf) -> PathBuf {
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => parent.join(name),
        _ => path,
    }
}
