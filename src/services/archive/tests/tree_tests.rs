use super::tree::{ArchiveTree, Visit};
use crate::types::errors::UnpackFailure;

fn walk_all(tree: &ArchiveTree) -> Vec<String> {
    let mut seen = Vec::new();
    tree.walk(|visit| -> Result<(), ()> {
        seen.push(match visit {
            Visit::Dir(path) => format!("d:{path}"),
            Visit::File { path, index } => format!("f:{path}#{index}"),
        });
        Ok(())
    })
    .unwrap();
    seen
}

#[test]
fn test_walk_is_depth_first_preorder() {
    let tree = ArchiveTree::from_entries([
        (0, "b.jar"),
        (1, "nested/"),
        (2, "nested/c.jar"),
        (3, "nested/deeper/d.jar"),
        (4, "z.jar"),
    ])
    .unwrap();

    assert_eq!(
        walk_all(&tree),
        vec![
            "f:b.jar#0",
            "d:nested",
            "f:nested/c.jar#2",
            "d:nested/deeper",
            "f:nested/deeper/d.jar#3",
            "f:z.jar#4",
        ]
    );
    assert_eq!(tree.file_count(), 4);
}

#[test]
fn test_implied_directories_are_created() {
    // No explicit "lib/" entry
    let tree = ArchiveTree::from_entries([(0, "lib/a.jar"), (1, "lib/b.jar")]).unwrap();

    assert_eq!(
        walk_all(&tree),
        vec!["d:lib", "f:lib/a.jar#0", "f:lib/b.jar#1"]
    );
}

#[test]
fn test_late_file_groups_under_first_seen_directory() {
    let tree =
        ArchiveTree::from_entries([(0, "lib/a.jar"), (1, "top.jar"), (2, "lib/b.jar")]).unwrap();

    assert_eq!(
        walk_all(&tree),
        vec!["d:lib", "f:lib/a.jar#0", "f:lib/b.jar#2", "f:top.jar#1"]
    );
}

#[test]
fn test_duplicate_names_keep_first() {
    let tree =
        ArchiveTree::from_entries([(0, "a.jar"), (1, "a.jar"), (2, "dir/"), (3, "dir/")]).unwrap();

    assert_eq!(walk_all(&tree), vec!["f:a.jar#0", "d:dir"]);
}

#[test]
fn test_walk_stops_on_error() {
    let tree = ArchiveTree::from_entries([(0, "a.jar"), (1, "b.jar")]).unwrap();
    let mut visited = 0;
    let result = tree.walk(|_| {
        visited += 1;
        Err("boom")
    });

    assert_eq!(result, Err("boom"));
    assert_eq!(visited, 1);
}

#[test]
fn test_empty_tree() {
    let tree = ArchiveTree::from_entries(std::iter::empty()).unwrap();
    assert_eq!(tree.file_count(), 0);
    assert!(walk_all(&tree).is_empty());
}

#[test]
fn test_absolute_entry_is_rejected() {
    let result = ArchiveTree::from_entries([(0, "ok.jar"), (1, "/abs.jar")]);
    assert!(matches!(result, Err(UnpackFailure::UnsafeEntry(name)) if name == "/abs.jar"));
}

#[test]
fn test_climbing_entry_is_rejected() {
    let result = ArchiveTree::from_entries([(0, "lib/../../escape.jar")]);
    assert!(matches!(result, Err(UnpackFailure::UnsafeEntry(_))));
}

#[test]
fn test_file_then_directory_with_same_name_clashes() {
    let result = ArchiveTree::from_entries([(0, "x"), (1, "x/y.jar")]);
    assert!(matches!(result, Err(UnpackFailure::NameClash(path)) if path == "x"));
}

#[test]
fn test_directory_then_file_with_same_name_clashes() {
    let result = ArchiveTree::from_entries([(0, "lib/"), (1, "lib/a.jar"), (2, "lib")]);
    assert!(matches!(result, Err(UnpackFailure::NameClash(path)) if path == "lib"));
}
