//! Arena-backed tree of filesystem entries.

use std::path::{Path, PathBuf};

/// Index of a node inside its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// A single entry of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Path used to stat and list this entry.
    pub path: PathBuf,
    /// Final path component, as reported by the entry source.
    pub name: String,
    pub is_dir: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// Whether the name, or the name of any kept descendant, matches the pattern.
    pub(crate) matched: bool,
}

impl Node {
    pub(crate) fn new(path: PathBuf, name: String, is_dir: bool, parent: Option<NodeId>) -> Self {
        Self {
            path,
            name,
            is_dir,
            parent,
            children: Vec::new(),
            matched: false,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn matched(&self) -> bool {
        self.matched
    }
}

/// A filtered directory tree. The root always sits at index 0.
///
/// Nodes are stored in depth-first pre-order, so iterating [`Tree::iter`]
/// visits them in the same order as the rendered lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
}

impl Tree {
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a built tree, which holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Looks up a node by its path.
    pub fn find(&self, path: impl AsRef<Path>) -> Option<NodeId> {
        let path = path.as_ref();
        self.iter().find(|(_, n)| n.path == path).map(|(id, _)| id)
    }

    /// 0 for the root, one more than the parent otherwise.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.node(parent).parent;
        }
        depth
    }

    /// The root has no siblings and counts as last.
    pub fn is_last_sibling(&self, id: NodeId) -> bool {
        match self.node(id).parent {
            None => true,
            Some(parent) => self.node(parent).children.last() == Some(&id),
        }
    }
}
