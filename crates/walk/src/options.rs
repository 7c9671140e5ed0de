use crate::entry::Entry;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Predicate deciding whether the walker descends into a directory.
///
/// Evaluated once per directory encountered while walking with
/// [`TraverseOptions::prune_recursive`]. Returning `false` withholds the
/// directory's subtree; the directory entry itself is still yielded.
pub type DescendPredicate = dyn Fn(&Entry) -> bool + Send + Sync;

const SHALLOW: u8 = 1 << 0;
const RECURSIVE: u8 = 1 << 1;
const HIDDEN: u8 = 1 << 2;
const SYSTEM_NOISE: u8 = 1 << 3;

/// The two OS bookkeeping filenames suppressed unless
/// [`TraverseOptions::with_system_hidden`] is in effect. Both are always
/// regular files, so suppressing them never requires pruning.
pub(crate) const SYSTEM_NOISE_NAMES: [&str; 2] = [".DS_Store", ".localized"];

/// Declarative description of which descendants of a directory should be
/// visited and in what breadth.
///
/// Options compose from a mode constructor and optional visibility
/// modifiers:
///
/// - [`shallow`](Self::shallow) visits immediate children only.
/// - [`recursive`](Self::recursive) visits the full subtree depth-first.
/// - [`prune_recursive`](Self::prune_recursive) visits the full subtree but
///   consults a predicate before descending into each directory. The
///   predicate implies recursive mode, so a shallow traversal can never
///   carry one.
/// - [`with_hidden`](Self::with_hidden) makes dot-prefixed entries visible
///   and walks into dot-directories.
/// - [`with_system_hidden`](Self::with_system_hidden) additionally surfaces
///   the two reserved OS bookkeeping filenames.
///
/// Two options values with identical flags compare equal even when their
/// descend predicates differ; predicates are deliberately excluded from
/// `PartialEq` and `Hash`.
///
/// # Examples
///
/// ```
/// use fsitem_walk::TraverseOptions;
///
/// let deep = TraverseOptions::recursive().with_hidden();
/// assert!(deep.contains(&TraverseOptions::recursive()));
/// assert!(!TraverseOptions::recursive().contains(&deep));
/// ```
#[derive(Clone)]
pub struct TraverseOptions {
    bits: u8,
    descend: Option<Arc<DescendPredicate>>,
}

impl TraverseOptions {
    /// Visits only the immediate children of the root.
    #[must_use]
    pub const fn shallow() -> Self {
        Self {
            bits: SHALLOW,
            descend: None,
        }
    }

    /// Visits every descendant of the root, depth-first.
    #[must_use]
    pub const fn recursive() -> Self {
        Self {
            bits: RECURSIVE,
            descend: None,
        }
    }

    /// Visits the full subtree depth-first, consulting `predicate` before
    /// descending into each directory.
    ///
    /// A directory for which the predicate returns `false` is still
    /// yielded; only its contents are withheld.
    #[must_use]
    pub fn prune_recursive<F>(predicate: F) -> Self
    where
        F: Fn(&Entry) -> bool + Send + Sync + 'static,
    {
        Self {
            bits: RECURSIVE,
            descend: Some(Arc::new(predicate)),
        }
    }

    /// Makes dot-prefixed entries visible and walks into dot-directories.
    #[must_use]
    pub const fn with_hidden(mut self) -> Self {
        self.bits |= HIDDEN;
        self
    }

    /// Makes dot-prefixed entries visible, including the two reserved OS
    /// bookkeeping filenames that [`with_hidden`](Self::with_hidden) still
    /// suppresses.
    #[must_use]
    pub const fn with_system_hidden(mut self) -> Self {
        self.bits |= HIDDEN | SYSTEM_NOISE;
        self
    }

    /// Reports whether this options value includes every flag of `other`.
    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        self.bits | other.bits == self.bits
    }

    pub(crate) const fn is_shallow(&self) -> bool {
        self.bits & SHALLOW != 0
    }

    pub(crate) const fn includes_hidden(&self) -> bool {
        self.bits & HIDDEN != 0
    }

    pub(crate) const fn includes_system_noise(&self) -> bool {
        self.bits & SYSTEM_NOISE != 0
    }

    pub(crate) fn descend_predicate(&self) -> Option<&DescendPredicate> {
        self.descend.as_deref()
    }
}

impl Default for TraverseOptions {
    fn default() -> Self {
        Self::shallow()
    }
}

impl PartialEq for TraverseOptions {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl Eq for TraverseOptions {}

impl Hash for TraverseOptions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl fmt::Debug for TraverseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraverseOptions")
            .field("shallow", &self.is_shallow())
            .field("hidden", &self.includes_hidden())
            .field("system_noise", &self.includes_system_noise())
            .field("descend_predicate", &self.descend.is_some())
            .finish()
    }
}
