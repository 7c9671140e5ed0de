use std::cmp::Ordering;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::iter::Peekable;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Classification of a raw cursor entry, mirroring the states a recursive
/// directory stream reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EntryKind {
    Directory,
    File,
    Symlink,
    DeadSymlink,
    Unknown,
    /// A directory whose contents could not be read.
    UnreadableDir,
    /// An entry that vanished between listing and visiting.
    Vanished,
    /// An entry whose metadata could not be queried.
    StreamError,
}

impl EntryKind {
    pub(crate) const fn is_error(self) -> bool {
        matches!(self, Self::UnreadableDir | Self::Vanished | Self::StreamError)
    }
}

#[derive(Debug)]
pub(crate) struct RawEntry {
    pub(crate) path: PathBuf,
    pub(crate) kind: EntryKind,
}

#[derive(Debug)]
struct Frame {
    dir: PathBuf,
    names: Vec<OsString>,
    index: usize,
}

impl Frame {
    fn new(dir: PathBuf, names: Vec<OsString>) -> Self {
        Self {
            dir,
            names,
            index: 0,
        }
    }

    fn next_name(&mut self) -> Option<OsString> {
        let name = self.names.get(self.index)?;
        self.index += 1;
        Some(name.clone())
    }
}

/// Stateful depth-first cursor over the descendants of a root directory.
///
/// The cursor owns a stack of naturally-sorted directory frames. Each
/// [`advance`](Self::advance) surfaces one raw entry; classifying a readable
/// directory prepares a pending frame whose descent happens on the next
/// advance unless [`skip_subtree`](Self::skip_subtree) intervenes. The root
/// entry itself is never surfaced. All resources are released when the
/// cursor is dropped.
#[derive(Debug)]
pub(crate) struct Cursor {
    stack: Vec<Frame>,
    pending: Option<Frame>,
    skip_requested: bool,
    /// Device of the root; directories on other devices are reported but
    /// never descended into.
    device: Option<u64>,
}

impl Cursor {
    /// Opens a cursor over the contents of `root`.
    ///
    /// A root that cannot be read produces an exhausted cursor rather than
    /// an error; existence of the root is the caller's concern.
    pub(crate) fn open(root: &Path) -> Self {
        let mut stack = Vec::new();
        match read_sorted(root) {
            Ok(names) => stack.push(Frame::new(root.to_path_buf(), names)),
            Err(error) => {
                debug!(root = %root.display(), %error, "cannot open traversal root");
            }
        }
        Self {
            stack,
            pending: None,
            skip_requested: false,
            device: device_of(root),
        }
    }

    /// Advances to the next raw entry in depth-first pre-order.
    pub(crate) fn advance(&mut self) -> Option<RawEntry> {
        if let Some(frame) = self.pending.take() {
            if self.skip_requested {
                trace!(dir = %frame.dir.display(), "pruning subtree");
            } else {
                self.stack.push(frame);
            }
        }
        self.skip_requested = false;

        loop {
            let path = {
                let frame = self.stack.last_mut()?;
                if let Some(name) = frame.next_name() {
                    frame.dir.join(name)
                } else {
                    self.stack.pop();
                    continue;
                }
            };
            return Some(self.classify(path));
        }
    }

    /// One-shot request to withhold the subtree of the current entry.
    ///
    /// Effective only on the next [`advance`](Self::advance), and only when
    /// the current entry was a readable directory; otherwise a no-op.
    pub(crate) fn skip_subtree(&mut self) {
        if self.pending.is_some() {
            self.skip_requested = true;
        }
    }

    /// Classifies `path`, preparing a pending descent frame when the entry
    /// is a readable directory.
    fn classify(&mut self, path: PathBuf) -> RawEntry {
        let metadata = match fs::symlink_metadata(&path) {
            Ok(metadata) => metadata,
            Err(error) => {
                let kind = if error.kind() == io::ErrorKind::NotFound {
                    EntryKind::Vanished
                } else {
                    EntryKind::StreamError
                };
                trace!(path = %path.display(), %error, "cannot classify entry");
                return RawEntry { path, kind };
            }
        };

        let file_type = metadata.file_type();
        let kind = if file_type.is_dir() {
            if !same_device(self.device, &metadata) {
                trace!(dir = %path.display(), "staying on one device");
                EntryKind::Directory
            } else {
                match read_sorted(&path) {
                    Ok(names) => {
                        self.pending = Some(Frame::new(path.clone(), names));
                        EntryKind::Directory
                    }
                    Err(error) => {
                        trace!(dir = %path.display(), %error, "cannot read directory");
                        EntryKind::UnreadableDir
                    }
                }
            }
        } else if file_type.is_symlink() {
            if fs::metadata(&path).is_ok() {
                EntryKind::Symlink
            } else {
                EntryKind::DeadSymlink
            }
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Unknown
        };

        RawEntry { path, kind }
    }
}

#[cfg(unix)]
fn device_of(path: &Path) -> Option<u64> {
    use std::os::unix::fs::MetadataExt;
    fs::symlink_metadata(path).map(|metadata| metadata.dev()).ok()
}

#[cfg(not(unix))]
fn device_of(_path: &Path) -> Option<u64> {
    None
}

#[cfg(unix)]
fn same_device(device: Option<u64>, metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    device.is_none_or(|device| device == metadata.dev())
}

#[cfg(not(unix))]
fn same_device(_device: Option<u64>, _metadata: &fs::Metadata) -> bool {
    true
}

fn read_sorted(dir: &Path) -> io::Result<Vec<OsString>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name());
    }
    names.sort_by(|lhs, rhs| compare_natural(&lhs.to_string_lossy(), &rhs.to_string_lossy()));
    trace!(dir = %dir.display(), entries = names.len(), "read directory");
    Ok(names)
}

/// Compares file names the way a file browser sorts them: runs of digits
/// compare by numeric value (`file2` before `file10`) and fullwidth
/// compatibility forms compare equal to their ASCII counterparts.
pub(crate) fn compare_natural(lhs: &str, rhs: &str) -> Ordering {
    let mut lhs = lhs.chars().map(fold_width).peekable();
    let mut rhs = rhs.chars().map(fold_width).peekable();

    loop {
        match (lhs.peek().copied(), rhs.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                if l.is_ascii_digit() && r.is_ascii_digit() {
                    let ordering = compare_digit_runs(&mut lhs, &mut rhs);
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                } else {
                    let ordering = l.cmp(&r);
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                    lhs.next();
                    rhs.next();
                }
            }
        }
    }
}

fn compare_digit_runs<L, R>(lhs: &mut Peekable<L>, rhs: &mut Peekable<R>) -> Ordering
where
    L: Iterator<Item = char>,
    R: Iterator<Item = char>,
{
    let lhs_run = take_digit_run(lhs);
    let rhs_run = take_digit_run(rhs);
    let lhs_value = lhs_run.trim_start_matches('0');
    let rhs_value = rhs_run.trim_start_matches('0');

    // Equal magnitude and digits: the run with fewer leading zeros wins.
    lhs_value
        .len()
        .cmp(&rhs_value.len())
        .then_with(|| lhs_value.cmp(rhs_value))
        .then_with(|| lhs_run.len().cmp(&rhs_run.len()))
}

fn take_digit_run<I: Iterator<Item = char>>(chars: &mut Peekable<I>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// Folds fullwidth compatibility forms onto their ASCII counterparts.
fn fold_width(c: char) -> char {
    match c {
        '\u{ff01}'..='\u{ff5e}' => char::from_u32(c as u32 - 0xfee0).unwrap_or(c),
        '\u{3000}' => ' ',
        _ => c,
    }
}
