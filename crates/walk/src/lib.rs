#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `fsitem_walk` provides the lazy, order-preserving directory traversal used
//! by the fsitem library when enumerating the descendants of a directory. The
//! walker surfaces files, directories, and symbolic links in depth-first
//! pre-order, with the entries of each directory pre-sorted by a natural
//! (numeric-aware, width-insensitive) name comparison so `file2` appears
//! before `file10` on every platform.
//!
//! # Design
//!
//! - [`TraverseOptions`] declaratively describes which descendants should be
//!   visited and in what breadth: shallow or recursive mode, the hidden-file
//!   visibility tier, and an optional per-directory descend predicate.
//! - [`Children`] implements [`Iterator`] and yields [`Entry`] values. Each
//!   pull advances an internal directory-stream cursor until a yieldable
//!   entry is found or the stream is exhausted, applying the hidden-file and
//!   system-noise filters and the pruning policy on the way.
//! - [`WalkError`] is the single construction failure: the traversal root
//!   does not exist. Nothing else is ever surfaced as an error.
//!
//! # Invariants
//!
//! - Entries are yielded in depth-first pre-order: a directory is reported
//!   before any of its contents, and its contents are reported before its
//!   next sibling.
//! - A pruned directory is still yielded; only its subtree is withheld.
//! - Traversal is physical: symbolic links are reported but never followed,
//!   and the walk stays on the entries reachable below the root.
//! - Per-entry anomalies (an unreadable subdirectory, an entry that vanishes
//!   mid-walk) are absorbed; the affected entries are omitted and iteration
//!   continues with their siblings.
//!
//! # Errors
//!
//! [`children`] fails with [`WalkError`] only when the root does not exist.
//! The check happens once, eagerly, before any lazy iteration begins.
//!
//! # Examples
//!
//! Walk a small tree and collect the discovered paths:
//!
//! ```
//! use fsitem_walk::{TraverseOptions, children};
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! fs::write(temp.path().join("notes.txt"), b"data")?;
//! fs::create_dir(temp.path().join("sub"))?;
//! fs::write(temp.path().join("sub/inner.txt"), b"data")?;
//!
//! let entries: Vec<_> = children(temp.path(), TraverseOptions::recursive())?
//!     .map(fsitem_walk::Entry::into_path)
//!     .collect();
//! assert_eq!(entries.len(), 3);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod children;
mod cursor;
mod entry;
mod error;
mod options;

pub use children::{Children, children};
pub use entry::Entry;
pub use error::WalkError;
pub use options::{DescendPredicate, TraverseOptions};
