//! End-to-end scenarios for the scan -> group -> resolve flow

use conflict_core::{AlwaysConfirm, ResolveOptions, ResolveReport, Resolver, group_conflicts};
use conflict_fs::DirectoryScanner;
use conflict_test_utils::{TestTree, conflict_name};
use pretty_assertions::assert_eq;

fn resolve(tree: &TestTree, options: ResolveOptions) -> ResolveReport {
    let mut confirm = AlwaysConfirm;
    Resolver::new(options, &mut confirm).run(tree.root()).unwrap()
}

fn recursive() -> ResolveOptions {
    ResolveOptions {
        recursive: true,
        ..Default::default()
    }
}

/// A small synced folder with a mix of resolved, conflicting and orphaned files.
fn synced_folder() -> TestTree {
    let tree = TestTree::new();
    tree
        // newer conflict copy beats the original
        .file("docs/report.txt", "v1", 100)
        .file("docs/report.txt.sync-conflict-20150101-120000", "v0", 50)
        .file("docs/report.txt.sync-conflict-20150102-090000", "v2", 200)
        // original is already the newest
        .file("notes.md", "mine", 500)
        .file("notes.md.sync-conflict-20150101-120000", "theirs", 10)
        // extension placed after the marker, Syncthing style
        .file("photos/cat.jpg", "old cat", 0)
        .file(
            &format!("photos/{}", conflict_name("cat.jpg", "20150301-101010")),
            "new cat",
            30,
        )
        // no original next to it
        .file("orphan.sync-conflict-20150101-120000", "lonely", 0)
        .file("photos/dog.jpg", "dog", 0);
    tree
}

#[test]
fn recursive_run_resolves_the_whole_folder() {
    let tree = synced_folder();

    let report = resolve(&tree, recursive());

    assert_eq!(report.deleted, 4);
    assert_eq!(report.renamed, 2);
    assert_eq!(report.orphaned, 1);
    assert_eq!(report.groups_resolved, 3);
    assert!(report.is_clean(), "errors: {:?}", report.errors);

    let files: Vec<String> = tree.snapshot().into_keys().collect();
    assert_eq!(
        files,
        vec![
            "docs/report.txt",
            "notes.md",
            "orphan.sync-conflict-20150101-120000",
            "photos/cat.jpg",
            "photos/dog.jpg",
        ]
    );
    assert_eq!(tree.read("docs/report.txt").as_deref(), Some("v2"));
    assert_eq!(tree.read("notes.md").as_deref(), Some("mine"));
    assert_eq!(tree.read("photos/cat.jpg").as_deref(), Some("new cat"));
}

#[test]
fn dry_run_over_the_folder_is_byte_identical() {
    let tree = synced_folder();
    let before = tree.snapshot();

    let report = resolve(
        &tree,
        ResolveOptions {
            dry_run: true,
            recursive: true,
            ..Default::default()
        },
    );

    assert_eq!(tree.snapshot(), before);
    assert_eq!((report.deleted, report.renamed), (0, 0));
    // four intended deletions, two intended renames
    assert_eq!(report.actions.len(), 6);
}

#[test]
fn resolution_is_idempotent() {
    let tree = synced_folder();

    let first = resolve(&tree, recursive());
    let settled = tree.snapshot();
    let second = resolve(&tree, recursive());

    assert!(first.deleted > 0);
    assert_eq!(second.deleted, 0);
    assert_eq!(second.renamed, 0);
    assert_eq!(second.groups_resolved, 0);
    assert!(second.actions.is_empty());
    assert_eq!(second.orphaned, 1);
    assert_eq!(tree.snapshot(), settled);
}

#[test]
fn only_root_is_touched_without_recursion() {
    let tree = synced_folder();

    let report = resolve(&tree, ResolveOptions::default());

    assert_eq!(report.deleted, 1);
    assert_eq!(report.renamed, 0);
    assert!(tree.exists("docs/report.txt.sync-conflict-20150101-120000"));
    assert!(tree.exists("photos/cat.sync-conflict-20150301-101010.jpg"));
}

#[test]
fn scanned_groups_match_resolver_view() {
    let tree = synced_folder();

    let total: usize = DirectoryScanner::new(tree.root())
        .recursive(true)
        .scan()
        .map(|listing| group_conflicts(&listing.unwrap()).conflict_count())
        .sum();

    assert_eq!(total, 4);
}
