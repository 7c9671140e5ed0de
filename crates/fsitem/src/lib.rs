#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `fsitem` binds an absolute filesystem location to a single handle type,
//! [`Item`], carrying the queries and actions a caller needs against that
//! location: existence and kind checks, metadata, copy/move/remove, and a
//! lazy, order-preserving enumeration of a directory's descendants.
//!
//! # Design
//!
//! - [`Item`] is an immutable value: equality and hashing are defined over
//!   the canonical absolute path alone. The handle's location changes only
//!   as the explicit result of [`Item::move_to`] or [`Item::rename`].
//! - [`Item::children`] delegates to the traversal engine in
//!   [`fsitem_walk`], adapting each yielded entry into a directory-hinted
//!   handle so downstream [`Item::is_directory`] checks avoid another
//!   metadata call.
//! - [`FileError`] is the error taxonomy: a typed "no such file" failure
//!   for the single eager validation, and a path-carrying I/O variant for
//!   the plumbing operations.
//!
//! # Errors
//!
//! [`Item::children`] fails only when the location does not exist; every
//! anomaly encountered during iteration is absorbed by the engine and the
//! affected entry is omitted. Plumbing operations surface
//! [`FileError::Io`] with the failing action and path attached.
//!
//! # Examples
//!
//! ```
//! use fsitem::{Item, TraverseOptions};
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = Item::new(temp.path());
//! root.child("logs").create_directory()?;
//! std::fs::write(temp.path().join("readme.txt"), b"hello")?;
//!
//! let names: Vec<_> = root
//!     .children(TraverseOptions::shallow())?
//!     .map(|item| item.name().to_string_lossy().into_owned())
//!     .collect();
//! assert_eq!(names, ["logs", "readme.txt"]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod children;
mod error;
mod item;
mod ops;

pub use children::Children;
pub use error::FileError;
pub use fsitem_walk::{DescendPredicate, Entry, TraverseOptions};
pub use item::Item;

#[cfg(test)]
mod tests;
