use crate::error::FileError;
use crate::item::Item;
use fsitem_walk::TraverseOptions;
use std::fs;
use std::io;
use std::time::SystemTime;
use tracing::debug;

impl Item {
    /// Reports whether the location exists.
    ///
    /// The check does not follow a trailing symbolic link, so a dangling
    /// link still exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        fs::symlink_metadata(self.path()).is_ok()
    }

    /// Reports whether the location is a directory.
    ///
    /// Handles produced by [`children`](Item::children) carry the traversal
    /// engine's classification and answer without touching the filesystem;
    /// other handles fall back to a metadata call that follows symbolic
    /// links. A missing location reports `false`.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        match self.dir_hint() {
            Some(hint) => hint,
            None => fs::metadata(self.path()).is_ok_and(|metadata| metadata.is_dir()),
        }
    }

    /// Reports whether the location is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        fs::metadata(self.path()).is_ok_and(|metadata| metadata.is_file())
    }

    /// Returns the size of the file in bytes.
    pub fn file_size(&self) -> Result<u64, FileError> {
        self.stat("read size of").map(|metadata| metadata.len())
    }

    /// Returns the time the contents were last modified.
    pub fn modification_date(&self) -> Result<SystemTime, FileError> {
        self.stat("read modification date of")?
            .modified()
            .map_err(|source| self.io_error("read modification date of", source))
    }

    /// Returns the time the location was created.
    ///
    /// Not every filesystem records a birth time; the underlying error is
    /// surfaced where it does not.
    pub fn creation_date(&self) -> Result<SystemTime, FileError> {
        self.stat("read creation date of")?
            .created()
            .map_err(|source| self.io_error("read creation date of", source))
    }

    /// Creates the directory at this location, along with any missing
    /// ancestors.
    pub fn create_directory(&self) -> Result<(), FileError> {
        fs::create_dir_all(self.path()).map_err(|source| self.io_error("create", source))
    }

    /// Copies this item to `destination`.
    ///
    /// A directory is replayed recursively under the destination, hidden
    /// entries included; anything else is copied as a single file.
    pub fn copy_to(&self, destination: &Self) -> Result<(), FileError> {
        debug!(source = %self, %destination, "copy");
        if self.is_directory() {
            copy_tree(self, destination)
        } else {
            fs::copy(self.path(), destination.path())
                .map(drop)
                .map_err(|source| self.io_error("copy", source))
        }
    }

    /// Moves this item to `destination`, updating the handle to point at
    /// its new location on success.
    pub fn move_to(&mut self, destination: &Self) -> Result<(), FileError> {
        debug!(source = %self, %destination, "move");
        fs::rename(self.path(), destination.path())
            .map_err(|source| self.io_error("move", source))?;
        self.set_path(destination.path().to_path_buf());
        Ok(())
    }

    /// Renames the final component in place, updating the handle on
    /// success.
    pub fn rename<S: AsRef<std::ffi::OsStr>>(&mut self, name: S) -> Result<(), FileError> {
        let Some(parent) = self.parent() else {
            let source = io::Error::new(io::ErrorKind::InvalidInput, "location has no parent");
            return Err(self.io_error("rename", source));
        };
        let destination = parent.child(name.as_ref());
        self.move_to(&destination)
    }

    /// Removes the file, or the directory and its entire subtree.
    pub fn remove(&self) -> Result<(), FileError> {
        debug!(item = %self, "remove");
        let metadata = fs::symlink_metadata(self.path()).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                FileError::not_found(self.path().to_path_buf())
            } else {
                self.io_error("remove", source)
            }
        })?;
        if metadata.is_dir() {
            fs::remove_dir_all(self.path())
        } else {
            fs::remove_file(self.path())
        }
        .map_err(|source| self.io_error("remove", source))
    }

    fn stat(&self, action: &'static str) -> Result<fs::Metadata, FileError> {
        fs::metadata(self.path()).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                FileError::not_found(self.path().to_path_buf())
            } else {
                self.io_error(action, source)
            }
        })
    }

    fn io_error(&self, action: &'static str, source: io::Error) -> FileError {
        FileError::io(action, self.path().to_path_buf(), source)
    }
}

fn copy_tree(source: &Item, destination: &Item) -> Result<(), FileError> {
    destination.create_directory()?;
    for entry in source.children(TraverseOptions::recursive().with_system_hidden())? {
        let Ok(relative) = entry.path().strip_prefix(source.path()) else {
            continue;
        };
        let target = destination.path().join(relative);
        if entry.is_directory() {
            fs::create_dir_all(&target)
                .map_err(|error| FileError::io("create", target.clone(), error))?;
        } else {
            fs::copy(entry.path(), &target)
                .map_err(|error| FileError::io("copy", entry.path().to_path_buf(), error))?;
        }
    }
    Ok(())
}
