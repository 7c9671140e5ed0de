use super::*;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[test]
fn new_resolves_relative_paths() {
    let item = Item::new("some/relative/file.txt");
    assert!(item.path().is_absolute());
    assert_eq!(item.name(), "file.txt");
}

#[test]
fn new_strips_trailing_separator() {
    let with_slash = Item::new("/var/data/");
    let without = Item::new("/var/data");
    assert_eq!(with_slash, without);
    assert_eq!(with_slash.path(), Path::new("/var/data"));
}

#[test]
fn equality_and_hash_ignore_directory_hint() {
    let plain = Item::new("/var/data");
    let hinted = Item::hinted(PathBuf::from("/var/data"), true);
    assert_eq!(plain, hinted);

    let mut set = HashSet::new();
    set.insert(plain);
    assert!(set.contains(&hinted));
}

#[test]
fn accessors_expose_path_components() {
    let item = Item::new("/var/data/archive.tar.gz");
    assert_eq!(item.name(), "archive.tar.gz");
    assert_eq!(item.extension(), Some(OsStr::new("gz")));
    assert_eq!(
        item.parent().expect("has parent").path(),
        Path::new("/var/data")
    );
    assert_eq!(
        item.child("nested.txt").path(),
        Path::new("/var/data/archive.tar.gz/nested.txt")
    );
}

#[test]
fn root_has_no_parent_and_reports_whole_path_as_name() {
    let root = Item::new("/");
    assert!(root.parent().is_none());
    assert_eq!(root.name(), "/");
}

#[test]
fn display_shows_the_path() {
    let item = Item::new("/var/data/file.txt");
    assert_eq!(item.to_string(), "/var/data/file.txt");
}

#[test]
fn conversions_round_trip_through_path() {
    let path = Path::new("/var/data");
    let item = Item::from(path);
    assert_eq!(item, Item::from(path.to_path_buf()));
    assert_eq!(item.as_ref(), path);
}

#[test]
fn temp_dir_points_at_an_existing_directory() {
    let temp = Item::temp_dir();
    assert!(temp.exists());
    assert!(temp.is_directory());
}

#[test]
fn current_dir_points_at_an_existing_directory() {
    let cwd = Item::current_dir().expect("current directory");
    assert!(cwd.path().is_absolute());
    assert!(cwd.is_directory());
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trips_as_a_path() {
    let item = Item::new("/var/data/file.txt");
    let encoded = serde_json::to_string(&item).expect("serialize");
    assert_eq!(encoded, "\"/var/data/file.txt\"");
    let decoded: Item = serde_json::from_str(&encoded).expect("deserialize");
    assert_eq!(decoded, item);
}
