use std::env;
use std::ffi::OsStr;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// A handle binding an absolute filesystem location to queries and actions.
///
/// The handle is a value: cloning it is cheap, and equality and hashing are
/// defined over the canonical absolute path alone. A handle may carry a
/// directory hint attached by the traversal engine; the hint never
/// participates in comparison.
///
/// The location a handle points at changes only as the explicit result of
/// [`move_to`](Item::move_to) or [`rename`](Item::rename).
#[derive(Clone, Debug)]
pub struct Item {
    path: PathBuf,
    dir_hint: Option<bool>,
}

impl Item {
    /// Creates a handle for `path`.
    ///
    /// Relative paths resolve against the current working directory, and a
    /// trailing path separator is stripped, so equal locations produce
    /// equal handles.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let path = if path.is_absolute() {
            path
        } else {
            env::current_dir().map_or(path.clone(), |cwd| cwd.join(&path))
        };
        Self {
            path: strip_trailing_separator(path),
            dir_hint: None,
        }
    }

    /// Creates a handle carrying the traversal engine's classification.
    pub(crate) const fn hinted(path: PathBuf, is_dir: bool) -> Self {
        Self {
            path,
            dir_hint: Some(is_dir),
        }
    }

    /// Handle for the process working directory.
    pub fn current_dir() -> Result<Self, crate::FileError> {
        env::current_dir()
            .map(Self::new)
            .map_err(|source| crate::FileError::io("resolve", PathBuf::from("."), source))
    }

    /// Handle for the system temporary directory.
    #[must_use]
    pub fn temp_dir() -> Self {
        Self::new(env::temp_dir())
    }

    /// Returns the absolute path of the location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the final component of the path.
    ///
    /// A filesystem root has no final component; the handle then reports
    /// the whole path.
    #[must_use]
    pub fn name(&self) -> &OsStr {
        self.path.file_name().unwrap_or_else(|| self.path.as_os_str())
    }

    /// Returns the extension of the final component, if any.
    #[must_use]
    pub fn extension(&self) -> Option<&OsStr> {
        self.path.extension()
    }

    /// Returns the handle for the enclosing directory, if any.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.path.parent().map(|parent| Self {
            path: parent.to_path_buf(),
            dir_hint: Some(true),
        })
    }

    /// Returns the handle for `name` inside this location.
    #[must_use]
    pub fn child<P: AsRef<Path>>(&self, name: P) -> Self {
        Self {
            path: self.path.join(name),
            dir_hint: None,
        }
    }

    pub(crate) const fn dir_hint(&self) -> Option<bool> {
        self.dir_hint
    }

    pub(crate) fn set_path(&mut self, path: PathBuf) {
        self.path = path;
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.path.display().fmt(f)
    }
}

impl From<PathBuf> for Item {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for Item {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl AsRef<Path> for Item {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Item {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.path.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Item {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        PathBuf::deserialize(deserializer).map(Self::new)
    }
}

fn strip_trailing_separator(path: PathBuf) -> PathBuf {
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => parent.join(name),
        _ => path,
    }
}
