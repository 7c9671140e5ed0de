//! End-to-end coverage for handle operations against real directory trees.

use fsitem::{FileError, Item, TraverseOptions};
use fsitem_test_support::temp_tree;
use std::fs;
use std::path::PathBuf;

#[test]
fn create_directory_then_query_kind() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = Item::new(temp.path()).child("nested").child("deep");

    assert!(!dir.exists());
    dir.create_directory().expect("create directory");
    assert!(dir.exists());
    assert!(dir.is_directory());
    assert!(!dir.is_file());
}

#[test]
fn metadata_reports_size_and_dates() {
    let tree = temp_tree(&["payload.bin"]);
    let item = Item::new(tree.path()).child("payload.bin");

    assert_eq!(item.file_size().expect("size"), 4);
    item.modification_date().expect("modification date");
}

#[test]
fn metadata_on_missing_location_is_not_found() {
    let tree = temp_tree(&[]);
    let item = Item::new(tree.path()).child("absent.txt");

    let error = item.file_size().expect_err("missing file");
    assert!(matches!(error, FileError::NotFound { .. }));
    assert_eq!(error.path(), item.path());
    assert!(error.to_string().contains("no such file"));
}

#[test]
fn copy_file_duplicates_contents() {
    let tree = temp_tree(&["original.txt"]);
    let source = Item::new(tree.path()).child("original.txt");
    let destination = Item::new(tree.path()).child("duplicate.txt");

    source.copy_to(&destination).expect("copy file");
    assert!(source.exists());
    assert_eq!(
        fs::read(destination.path()).expect("read duplicate"),
        b"data"
    );
}

#[test]
fn copy_directory_replays_subtree_including_hidden() {
    let tree = temp_tree(&["src/a.txt", "src/.hidden/secret.txt", "src/sub/b.txt"]);
    let source = Item::new(tree.path()).child("src");
    let destination = Item::new(tree.path()).child("dst");

    source.copy_to(&destination).expect("copy tree");

    assert!(destination.child("a.txt").is_file());
    assert!(destination.child("sub").is_directory());
    assert!(destination.child("sub/b.txt").is_file());
    assert!(destination.child(".hidden/secret.txt").is_file());
}

#[test]
fn move_updates_the_handle() {
    let tree = temp_tree(&["before.txt"]);
    let mut item = Item::new(tree.path()).child("before.txt");
    let destination = Item::new(tree.path()).child("after.txt");

    item.move_to(&destination).expect("move");
    assert_eq!(item, destination);
    assert!(item.exists());
    assert!(!Item::new(tree.path()).child("before.txt").exists());
}

#[test]
fn rename_keeps_the_parent() {
    let tree = temp_tree(&["old-name.txt"]);
    let mut item = Item::new(tree.path()).child("old-name.txt");

    item.rename("new-name.txt").expect("rename");
    assert_eq!(item.name(), "new-name.txt");
    assert_eq!(
        item.parent().expect("parent"),
        Item::new(tree.path())
    );
    assert!(item.exists());
}

#[test]
fn remove_handles_files_and_subtrees() {
    let tree = temp_tree(&["doomed.txt", "doomed/inner/deep.txt"]);
    let file = Item::new(tree.path()).child("doomed.txt");
    let dir = Item::new(tree.path()).child("doomed");

    file.remove().expect("remove file");
    dir.remove().expect("remove tree");
    assert!(!file.exists());
    assert!(!dir.exists());

    let error = file.remove().expect_err("already removed");
    assert!(matches!(error, FileError::NotFound { .. }));
}

#[test]
fn children_yields_hinted_handles() {
    let tree = temp_tree(&["a.txt", "sub/c.txt"]);
    let root = Item::new(tree.path());

    let items: Vec<_> = root
        .children(TraverseOptions::shallow())
        .expect("children")
        .collect();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name(), "a.txt");
    assert!(!items[0].is_directory());
    assert_eq!(items[1].name(), "sub");
    assert!(items[1].is_directory());
}

#[test]
fn children_of_missing_location_fails_eagerly() {
    let tree = temp_tree(&[]);
    let missing = Item::new(tree.path()).child("absent");

    let error = missing
        .children(TraverseOptions::recursive())
        .expect_err("missing root");
    assert!(matches!(error, FileError::NotFound { .. }));
    assert_eq!(error.path(), missing.path());
}

#[test]
fn children_of_a_file_is_empty() {
    let tree = temp_tree(&["plain.txt"]);
    let file = Item::new(tree.path()).child("plain.txt");

    let count = file
        .children(TraverseOptions::recursive())
        .expect("children")
        .count();
    assert_eq!(count, 0);
}

#[test]
fn recursive_children_cover_the_scenario_tree() {
    let tree = temp_tree(&["a.txt", ".b.txt", "sub/c.txt", ".hidden/.d.txt"]);
    let root = Item::new(tree.path());

    let visible: Vec<PathBuf> = root
        .children(TraverseOptions::recursive())
        .expect("children")
        .map(|item| item.path().to_path_buf())
        .collect();
    assert_eq!(
        visible,
        vec![
            tree.path().join("a.txt"),
            tree.path().join("sub"),
            tree.path().join("sub/c.txt"),
        ]
    );

    let all = root
        .children(TraverseOptions::recursive().with_hidden())
        .expect("children")
        .count();
    assert_eq!(all, 6);
}

#[test]
fn prune_yields_directories_without_descent() {
    let tree = temp_tree(&["a.txt", "sub/c.txt"]);
    let root = Item::new(tree.path());

    let names: Vec<_> = root
        .children(TraverseOptions::prune_recursive(|_| false))
        .expect("children")
        .map(|item| item.name().to_os_string())
        .collect();
    assert_eq!(names, ["a.txt", "sub"]);
}
