//! # Path Resolver
//!
//! File: cli/src/project/path.rs
//!
//! ## Overview
//!
//! Computes where a node lives relative to the project root, as a
//! slash-delimited string built from node names.
//!
//! | Target                         | `resolve_path`        |
//! |--------------------------------|-----------------------|
//! | the project root itself        | `"/"`                 |
//! | `root -> src -> CMakeLists.txt`| `"src/CMakeLists.txt"`|
//! | unknown id                     | `""`                  |
//!
//! Names are trusted to be simple path components: no escaping or normalization
//! is applied.
//!

use crate::project::node::Node;

/// Separator between path segments.
const SEPARATOR: char = '/';
/// Path reported for the root itself, and the directory of top-level entries.
pub const ROOT_PATH: &str = "/";
/// Label used by [`parent_directory_name`] when the directory is the root.
pub const DEFAULT_ROOT_LABEL: &str = "Project Root";

/// Location of `target_id` relative to the project root.
///
/// Returns `"/"` when the target is the root, and `""` when the id does not
/// exist anywhere in the snapshot.
pub fn resolve_path(tree: &[Node], target_id: &str) -> String {
    fn find<'a>(nodes: &'a [Node], target_id: &str, trail: &mut Vec<&'a str>) -> bool {
        for node in nodes {
            trail.push(node.name.as_str());
            if node.id == target_id || find(node.children(), target_id, trail) {
                return true;
            }
            trail.pop();
        }
        false
    }

    let mut trail = Vec::new();
    if !find(tree, target_id, &mut trail) {
        return String::new();
    }
    // The first segment is the synthetic project root.
    let relative = &trail[1..];
    if relative.is_empty() {
        ROOT_PATH.to_string()
    } else {
        relative.join("/")
    }
}

/// The directory part of [`resolve_path`]: the path minus its last segment,
/// or `"/"` when there are fewer than two segments.
pub fn directory_of(tree: &[Node], target_id: &str) -> String {
    parent_of(&resolve_path(tree, target_id))
}

/// Last segment of [`directory_of`], or `root_label` when that directory is
/// the project root.
pub fn parent_directory_name(tree: &[Node], target_id: &str, root_label: &str) -> String {
    let directory = directory_of(tree, target_id);
    if directory == ROOT_PATH {
        return root_label.to_string();
    }
    match directory.rsplit(SEPARATOR).next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => root_label.to_string(),
    }
}

/// Drops the last segment of a resolved path.
pub fn parent_of(path: &str) -> String {
    if path.is_empty() || path == ROOT_PATH {
        return ROOT_PATH.to_string();
    }
    match path.rsplit_once(SEPARATOR) {
        Some((head, _)) if !head.is_empty() => head.to_string(),
        _ => ROOT_PATH.to_string(),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::node::{Node, ROOT_ID};
    use crate::project::schema::{ConfigurationRecord, DEFAULT_TOOL_VERSION};

    fn config(id: &str) -> Node {
        Node::config(
            id,
            "CMakeLists.txt",
            ConfigurationRecord::new_default(DEFAULT_TOOL_VERSION),
        )
    }

    fn sample_tree() -> Vec<Node> {
        vec![Node::folder(ROOT_ID, "Project").with_children(vec![
            Node::folder("src", "src").with_children(vec![
                config("main-cmake"),
                Node::folder("main", "main").with_children(vec![config("main-main-cmake")]),
            ]),
            config("root-cmake"),
        ])]
    }

    #[test]
    fn test_resolve_path() {
        let tree = sample_tree();
        assert_eq!(resolve_path(&tree, "root-cmake"), "CMakeLists.txt");
        assert_eq!(resolve_path(&tree, "main-cmake"), "src/CMakeLists.txt");
        assert_eq!(resolve_path(&tree, "main-main-cmake"), "src/main/CMakeLists.txt");
        assert_eq!(resolve_path(&tree, "main"), "src/main");
    }

    #[test]
    fn test_root_and_missing_are_distinguishable() {
        let tree = sample_tree();
        assert_eq!(resolve_path(&tree, ROOT_ID), "/");
        assert_eq!(resolve_path(&tree, "no-such-id"), "");
        assert_eq!(resolve_path(&[], ROOT_ID), "");
    }

    #[test]
    fn test_directory_of() {
        let tree = sample_tree();
        assert_eq!(directory_of(&tree, "root-cmake"), "/");
        assert_eq!(directory_of(&tree, "main-cmake"), "src");
        assert_eq!(directory_of(&tree, "main-main-cmake"), "src/main");
        assert_eq!(directory_of(&tree, ROOT_ID), "/");
        assert_eq!(directory_of(&tree, "no-such-id"), "/");
    }

    #[test]
    fn test_parent_directory_name() {
        let tree = sample_tree();
        let label = DEFAULT_ROOT_LABEL;
        assert_eq!(parent_directory_name(&tree, "root-cmake", label), "Project Root");
        assert_eq!(parent_directory_name(&tree, "main-cmake", label), "src");
        assert_eq!(parent_directory_name(&tree, "main-main-cmake", label), "main");
        assert_eq!(parent_directory_name(&tree, "main-cmake", "ルート"), "src");
        assert_eq!(parent_directory_name(&tree, "root-cmake", "ルート"), "ルート");
    }

    #[test]
    fn test_path_round_trip_for_every_node() {
        let tree = sample_tree();
        for id in crate::project::node::collect_ids(&tree) {
            let path = resolve_path(&tree, id);
            assert!(!path.is_empty());
            let expected_dir = match path.rsplit_once('/') {
                Some((head, _)) if path != "/" => head.to_string(),
                _ => "/".to_string(),
            };
            assert_eq!(directory_of(&tree, id), expected_dir, "directory of {id}");
        }
    }

    #[test]
    fn test_nested_scenario() {
        let tree = vec![Node::folder(ROOT_ID, "Project").with_children(vec![
            Node::folder("src", "src").with_children(vec![config("cfg")]),
        ])];
        assert_eq!(resolve_path(&tree, "cfg"), "src/CMakeLists.txt");
        assert_eq!(directory_of(&tree, "cfg"), "src");
        assert_eq!(parent_directory_name(&tree, "cfg", DEFAULT_ROOT_LABEL), "src");
    }
}
