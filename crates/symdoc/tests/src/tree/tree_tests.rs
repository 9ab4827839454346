use super::*;

fn paths(tree: &PathTree<u32>) -> Vec<&str> {
    tree.pages().map(PathNode::full_path).collect()
}

#[test]
fn insert_creates_scaffold_ancestors() {
    let mut tree = PathTree::new("docs");
    let node = tree.insert("a/b/c", 1).unwrap();
    assert_eq!(node.name(), "c");
    assert_eq!(node.full_path(), "docs/a/b/c");

    assert_eq!(tree.page_count(), 1);
    assert!(tree.node("a").unwrap().is_scaffold());
    assert!(tree.node("a/b").unwrap().is_scaffold());
    assert_eq!(tree.node("a/b").unwrap().full_path(), "docs/a/b");
    assert_eq!(tree.lookup("a/b/c"), Some(&1));
    assert_eq!(tree.lookup("a/b"), None);
}

#[test]
fn reinsert_replaces_only_the_page() {
    let mut tree = PathTree::new("docs");
    tree.insert("a/b", 1).unwrap();
    tree.insert("a/b/c", 2).unwrap();
    tree.insert("a/b", 3).unwrap();

    let b = tree.node("a/b").unwrap();
    assert_eq!(b.page(), Some(&3));
    assert_eq!(b.children().count(), 1);
    assert_eq!(tree.root().children().count(), 1);
    assert_eq!(tree.lookup("a/b/c"), Some(&2));
}

#[test]
fn scaffold_can_later_receive_a_page() {
    let mut tree = PathTree::new("docs");
    tree.insert("N/Foo/Bar", 1).unwrap();
    tree.insert("N/Foo", 2).unwrap();

    assert!(!tree.node("N/Foo").unwrap().is_scaffold());
    assert_eq!(tree.node("N/Foo").unwrap().full_path(), "docs/N/Foo");
    assert_eq!(tree.page_count(), 2);
}

#[test]
fn empty_segment_fails_but_keeps_prefix() {
    let mut tree = PathTree::new("docs");
    let error = tree.insert("a//b", 1).unwrap_err();
    assert_eq!(
        error,
        PathInsertionError {
            path: "a//b".to_string(),
            index: 1,
        }
    );
    assert_eq!(error.to_string(), "path `a//b` has an empty segment at position 1");

    assert!(tree.node("a").unwrap().is_scaffold());
    assert_eq!(tree.page_count(), 0);
}

#[test]
fn blank_and_empty_paths_are_rejected() {
    let mut tree = PathTree::new("docs");
    assert_eq!(tree.insert("", 1).unwrap_err().index, 0);
    assert_eq!(tree.insert("a/  /b", 1).unwrap_err().index, 1);
    assert_eq!(tree.insert("a/b/", 1).unwrap_err().index, 2);
}

#[test]
fn segments_are_trimmed() {
    let mut tree = PathTree::new("docs");
    tree.insert(" N / Foo ", 7).unwrap();
    assert_eq!(tree.lookup("N/Foo"), Some(&7));
    assert_eq!(tree.node("N/Foo").unwrap().name(), "Foo");
    assert_eq!(tree.node("N/Foo").unwrap().full_path(), "docs/N/Foo");
}

#[test]
fn lookup_misses_are_none() {
    let mut tree = PathTree::new("docs");
    tree.insert("a/b", 1).unwrap();

    assert_eq!(tree.lookup("a/x"), None);
    assert_eq!(tree.lookup("a/b/c"), None);
    assert_eq!(tree.lookup(""), None);
    assert!(tree.node("a//b").is_none());
}

#[test]
fn pages_walk_depth_first_in_name_order() {
    let mut tree = PathTree::new("docs");
    tree.insert("b", 1).unwrap();
    tree.insert("a/y", 2).unwrap();
    tree.insert("a", 3).unwrap();
    tree.insert("a/x", 4).unwrap();

    assert_eq!(paths(&tree), vec!["docs/a", "docs/a/x", "docs/a/y", "docs/b"]);
}

#[test]
fn pages_can_be_walked_more_than_once() {
    let mut tree = PathTree::new("root");
    tree.insert("one", 1).unwrap();
    tree.insert("two/three", 3).unwrap();

    let first = paths(&tree);
    let second = paths(&tree);
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn empty_tree_has_no_pages() {
    let tree: PathTree<u32> = PathTree::new("docs");
    assert_eq!(tree.pages().next(), None);
    assert_eq!(tree.root().full_path(), "docs");
    assert!(tree.root().is_scaffold());
}
