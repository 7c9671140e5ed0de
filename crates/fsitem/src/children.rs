use crate::error::FileError;
use crate::item::Item;
use fsitem_walk::TraverseOptions;

impl Item {
    /// Opens a lazy enumeration of this directory's descendants under
    /// `options`.
    ///
    /// Fails only when the location does not exist. Every anomaly
    /// encountered during iteration (an unreadable subdirectory, an entry
    /// vanishing mid-walk) is absorbed and the affected entry is omitted
    /// from the sequence; a single bad subtree never aborts the
    /// enumeration of its siblings.
    ///
    /// Yielded handles carry the engine's directory classification, so
    /// [`is_directory`](Item::is_directory) answers without another
    /// metadata call.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsitem::{Item, TraverseOptions};
    ///
    /// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
    /// let temp = tempfile::tempdir()?;
    /// std::fs::create_dir(temp.path().join("sub"))?;
    /// std::fs::write(temp.path().join("sub/inner.txt"), b"data")?;
    ///
    /// let root = Item::new(temp.path());
    /// let deep = root.children(TraverseOptions::recursive())?.count();
    /// let flat = root.children(TraverseOptions::shallow())?.count();
    /// assert_eq!((deep, flat), (2, 1));
    /// # Ok(())
    /// # }
    /// # demo().unwrap();
    /// ```
    pub fn children(&self, options: TraverseOptions) -> Result<Children, FileError> {
        fsitem_walk::children(self.path(), options)
            .map(|inner| Children { inner })
            .map_err(|error| FileError::not_found(error.into_path()))
    }
}

/// Lazy iterator over the descendants of a directory, yielding
/// directory-hinted [`Item`] handles.
///
/// Produced by [`Item::children`]. One instance is single-pass; enumerating
/// the same directory again requires a fresh call, which opens a fresh
/// traversal.
#[derive(Debug)]
pub struct Children {
    inner: fsitem_walk::Children,
}

impl Iterator for Children {
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        self.inner.next().map(|entry| {
            let is_dir = entry.is_dir();
            Item::hinted(entry.into_path(), is_dir)
        })
    }
}
