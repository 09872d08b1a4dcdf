//! # Project Tree Nodes
//!
//! File: cli/src/project/node.rs
//!
//! ## Overview
//!
//! A project is a *snapshot*: an ordered `Vec<Node>` of root-level nodes, normally
//! a single synthetic root folder with id [`ROOT_ID`]. Each [`Node`] is either a
//! folder that exclusively owns its ordered children, or a configuration node that
//! (eventually) holds a [`ConfigurationRecord`].
//!
//! Nodes are never edited in place. Every change produces a new node which replaces
//! the old one wholesale (see `project::mutate`).
//!
//! ## Serialized form
//!
//! ```json
//! { "id": "root", "name": "Project", "type": "folder", "children": [
//!     { "id": "cmake-1718000000000", "name": "CMakeLists.txt", "type": "cmake",
//!       "parentId": "root", "cmakeForm": { "cmakeVersion": "3.29", ... } }
//! ] }
//! ```
//!
use crate::project::schema::ConfigurationRecord;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Id of the synthetic project root. The root is never deleted.
pub const ROOT_ID: &str = "root";

/// Name the project root gets when no configuration overrides it.
pub const DEFAULT_ROOT_NAME: &str = "Project";

/// Discriminant of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Folder,
    Config,
}

impl NodeKind {
    /// Prefix used for generated ids.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            NodeKind::Folder => "folder",
            NodeKind::Config => "cmake",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Folder => f.write_str("folder"),
            NodeKind::Config => f.write_str("config"),
        }
    }
}

/// Variant-specific part of a node.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum NodeBody {
    #[serde(rename = "folder")]
    Folder {
        #[serde(default)]
        children: Vec<Node>,
    },
    #[serde(rename = "cmake")]
    Config {
        #[serde(
            rename = "cmakeForm",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        settings: Option<ConfigurationRecord>,
    },
}

/// One entry of the project tree.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    /// Used verbatim as a path component.
    pub name: String,
    /// Back-reference to the enclosing folder. Informational only; traversal
    /// always goes through `children`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(flatten)]
    pub body: NodeBody,
}

impl Node {
    /// An empty folder.
    pub fn folder(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
            body: NodeBody::Folder {
                children: Vec::new(),
            },
        }
    }

    /// A configuration node holding `settings`.
    pub fn config(
        id: impl Into<String>,
        name: impl Into<String>,
        settings: ConfigurationRecord,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
            body: NodeBody::Config {
                settings: Some(settings),
            },
        }
    }

    /// Builder-style helper for constructing fixtures and nested folders.
    pub fn with_children(mut self, new_children: Vec<Node>) -> Self {
        if let NodeBody::Folder { children } = &mut self.body {
            *children = new_children;
        }
        self
    }

    pub fn kind(&self) -> NodeKind {
        match self.body {
            NodeBody::Folder { .. } => NodeKind::Folder,
            NodeBody::Config { .. } => NodeKind::Config,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind() == NodeKind::Folder
    }

    /// Children of a folder; empty for configuration nodes.
    pub fn children(&self) -> &[Node] {
        match &self.body {
            NodeBody::Folder { children } => children,
            NodeBody::Config { .. } => &[],
        }
    }

    /// Settings of a configuration node, if it has been populated.
    pub fn settings(&self) -> Option<&ConfigurationRecord> {
        match &self.body {
            NodeBody::Config { settings } => settings.as_ref(),
            NodeBody::Folder { .. } => None,
        }
    }
}

/// Creates a fresh snapshot containing only an empty project root.
pub fn default_project(root_name: &str) -> Vec<Node> {
    vec![Node::folder(ROOT_ID, root_name)]
}

/// Every id in the snapshot, in pre-order.
pub fn collect_ids(tree: &[Node]) -> Vec<&str> {
    fn walk<'a>(nodes: &'a [Node], out: &mut Vec<&'a str>) {
        for node in nodes {
            out.push(node.id.as_str());
            walk(node.children(), out);
        }
    }
    let mut ids = Vec::new();
    walk(tree, &mut ids);
    ids
}

/// The first id (in pre-order) that appears more than once, if any.
pub fn find_duplicate_id(tree: &[Node]) -> Option<&str> {
    let mut seen = HashSet::new();
    collect_ids(tree).into_iter().find(|id| !seen.insert(*id))
}

/// Generates an id of the form `<folder|cmake>-<unix millis>` that is not yet
/// used anywhere in `tree`. Collisions get a numeric suffix.
pub fn generate_id(tree: &[Node], kind: NodeKind) -> String {
    let base = format!("{}-{}", kind.id_prefix(), Utc::now().timestamp_millis());
    let taken: HashSet<&str> = collect_ids(tree).into_iter().collect();
    if !taken.contains(base.as_str()) {
        return base;
    }
    (1u64..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !taken.contains(candidate.as_str()))
        .unwrap_or(base)
}
