//! # Tree Mutator
//!
//! File: cli/src/project/mutate.rs
//!
//! ## Overview
//!
//! Pure functions over project snapshots. Every operation takes an immutable
//! `&[Node]` and returns a new `Vec<Node>`; the input is never altered.
//!
//! ## Architecture
//!
//! Two layers:
//!
//! - **Raw operations** (`locate`, `replace`, `insert_child`, `remove`): depth-first,
//!   pre-order, children visited in sequence order. Absence is never an error:
//!   `locate` yields `None`, `replace` and `remove` return the input unchanged.
//! - **Checked operations** (`insert_under`, `delete_node`, `rename_node`,
//!   `update_settings`): what callers such as the CLI use. They enforce id uniqueness,
//!   refuse to delete the project root, refuse cycles, and report missing ids
//!   as [`CreatorError::NodeNotFound`].
//!
//! ## Examples
//!
//! ```rust,ignore
//! let tree = node::default_project("Project");
//! let tree = mutate::insert_under(&tree, ROOT_ID, Node::folder("src", "src"))?;
//! let src = mutate::locate(&tree, "src").expect("just inserted");
//! let tree = mutate::delete_node(&tree, &src.id)?;
//! ```
//!
use crate::core::error::{CreatorError, Result};
use crate::project::node::{collect_ids, find_duplicate_id, Node, NodeBody, ROOT_ID};
use crate::project::schema::ConfigurationRecord;
use tracing::debug;

/// Finds the first node (pre-order) whose id is `id`.
pub fn locate<'a>(tree: &'a [Node], id: &str) -> Option<&'a Node> {
    for node in tree {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = locate(node.children(), id) {
            return Some(found);
        }
    }
    None
}

/// Nodes from the top of the snapshot down to and including `id`.
pub fn ancestry<'a>(tree: &'a [Node], id: &str) -> Option<Vec<&'a Node>> {
    for node in tree {
        if node.id == id {
            return Some(vec![node]);
        }
        if let Some(mut chain) = ancestry(node.children(), id) {
            chain.insert(0, node);
            return Some(chain);
        }
    }
    None
}

/// Swaps the node carrying `updated.id` for `updated`, wherever it is nested.
///
/// Siblings and ancestors keep their structure. Returns an equal copy of the
/// input when no node matches.
pub fn replace(tree: &[Node], updated: &Node) -> Vec<Node> {
    tree.iter()
        .map(|node| {
            if node.id == updated.id {
                return updated.clone();
            }
            match &node.body {
                NodeBody::Folder { children } => Node {
                    id: node.id.clone(),
                    name: node.name.clone(),
                    parent_id: node.parent_id.clone(),
                    body: NodeBody::Folder {
                        children: replace(children, updated),
                    },
                },
                NodeBody::Config { .. } => node.clone(),
            }
        })
        .collect()
}

/// Returns `parent` with `child` appended to the end of its children.
///
/// Fails when `parent` is not a folder or when `child`'s subtree already
/// contains `parent`.
pub fn insert_child(parent: &Node, child: Node) -> Result<Node> {
    let NodeBody::Folder { children } = &parent.body else {
        anyhow::bail!(CreatorError::NotAFolder {
            id: parent.id.clone()
        });
    };
    if collect_ids(std::slice::from_ref(&child)).contains(&parent.id.as_str()) {
        anyhow::bail!(CreatorError::CycleDetected { id: child.id });
    }
    let mut children = children.clone();
    children.push(child);
    Ok(Node {
        id: parent.id.clone(),
        name: parent.name.clone(),
        parent_id: parent.parent_id.clone(),
        body: NodeBody::Folder { children },
    })
}

/// Drops the node with `id` (and its whole subtree) from whichever sequence
/// holds it. Returns an equal copy of the input when nothing matches.
///
/// The project root is not special-cased here; use [`delete_node`].
pub fn remove(tree: &[Node], id: &str) -> Vec<Node> {
    tree.iter()
        .filter(|node| node.id != id)
        .map(|node| match &node.body {
            NodeBody::Folder { children } => Node {
                id: node.id.clone(),
                name: node.name.clone(),
                parent_id: node.parent_id.clone(),
                body: NodeBody::Folder {
                    children: remove(children, id),
                },
            },
            NodeBody::Config { .. } => node.clone(),
        })
        .collect()
}

/// Appends `child` under the folder `parent_id`.
///
/// Every name in `child`'s subtree must be non-blank, and every id must be
/// unique within the subtree and new to the snapshot. An id that belongs to the
/// parent or one of its ancestors is reported as a cycle, any other clash as a
/// duplicate. `child.parent_id` is set to `parent_id`.
pub fn insert_under(tree: &[Node], parent_id: &str, mut child: Node) -> Result<Vec<Node>> {
    let chain = ancestry(tree, parent_id).ok_or_else(|| CreatorError::NodeNotFound {
        id: parent_id.to_string(),
    })?;
    check_names(std::slice::from_ref(&child))?;
    if let Some(id) = find_duplicate_id(std::slice::from_ref(&child)) {
        anyhow::bail!(CreatorError::DuplicateId { id: id.to_string() });
    }
    for id in collect_ids(std::slice::from_ref(&child)) {
        if chain.iter().any(|ancestor| ancestor.id == id) {
            anyhow::bail!(CreatorError::CycleDetected { id: id.to_string() });
        }
        if locate(tree, id).is_some() {
            anyhow::bail!(CreatorError::DuplicateId { id: id.to_string() });
        }
    }
    let parent = chain[chain.len() - 1];
    child.parent_id = Some(parent.id.clone());
    debug!("Inserting node '{}' under '{}'", child.id, parent.id);
    let updated = insert_child(parent, child)?;
    Ok(replace(tree, &updated))
}

/// Every name in `nodes` (recursively) must be non-blank.
fn check_names(nodes: &[Node]) -> Result<()> {
    for node in nodes {
        if node.name.trim().is_empty() {
            anyhow::bail!(CreatorError::InvalidName(format!(
                "file name is required (node '{}')",
                node.id
            )));
        }
        check_names(node.children())?;
    }
    Ok(())
}

/// Removes the node `id` and everything it owns. The project root is refused.
pub fn delete_node(tree: &[Node], id: &str) -> Result<Vec<Node>> {
    if id == ROOT_ID {
        anyhow::bail!(CreatorError::RootProtected);
    }
    if locate(tree, id).is_none() {
        anyhow::bail!(CreatorError::NodeNotFound { id: id.to_string() });
    }
    debug!("Removing node '{}' and its subtree", id);
    Ok(remove(tree, id))
}

/// Gives node `id` a new display/path name.
pub fn rename_node(tree: &[Node], id: &str, name: &str) -> Result<Vec<Node>> {
    if name.trim().is_empty() {
        anyhow::bail!(CreatorError::InvalidName("file name is required".to_string()));
    }
    let node = locate(tree, id).ok_or_else(|| CreatorError::NodeNotFound { id: id.to_string() })?;
    let renamed = Node {
        name: name.to_string(),
        ..node.clone()
    };
    Ok(replace(tree, &renamed))
}

/// Replaces the settings of configuration node `id`.
pub fn update_settings(
    tree: &[Node],
    id: &str,
    settings: ConfigurationRecord,
) -> Result<Vec<Node>> {
    let node = locate(tree, id).ok_or_else(|| CreatorError::NodeNotFound { id: id.to_string() })?;
    if node.is_folder() {
        anyhow::bail!(CreatorError::NotAConfig { id: id.to_string() });
    }
    let updated = Node {
        id: node.id.clone(),
        name: node.name.clone(),
        parent_id: node.parent_id.clone(),
        body: NodeBody::Config {
            settings: Some(settings),
        },
    };
    Ok(replace(tree, &updated))
}
