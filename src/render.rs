//! Text rendering of a built [`Tree`].

use crate::options::TreeConfig;
use crate::tree::{NodeId, Tree};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUATION: &str = "|";
const INDENT: &str = "    ";

/// Renders `tree` depth-first, one newline-terminated line per node.
///
/// The root line always shows the root path. Other lines show the entry name,
/// or the full path when [`TreeConfig::full_paths`] is set, preceded by the
/// prefix chain and connector unless indentation is disabled.
pub fn render(tree: &Tree, config: &TreeConfig) -> String {
    let mut out = String::with_capacity(tree.len() * 32);
    render_node(tree, config, tree.root(), 0, "", &mut out);
    out
}

fn render_node(
    tree: &Tree,
    config: &TreeConfig,
    id: NodeId,
    depth: usize,
    chain: &str,
    out: &mut String,
) {
    let node = tree.node(id);
    if depth == 0 || config.full_paths {
        out.push_str(&node.path.to_string_lossy());
    } else {
        out.push_str(&node.name);
    }
    out.push('\n');

    // Children at depth 1 have an empty chain.
    let child_chain = if depth == 0 {
        String::new()
    } else {
        let marker = if tree.is_last_sibling(id) { "" } else { CONTINUATION };
        format!("{chain}{marker}{INDENT}")
    };
    for &child in node.children() {
        if !config.disable_indentation {
            out.push_str(&child_chain);
            out.push_str(connector(tree, child));
        }
        render_node(tree, config, child, depth + 1, &child_chain, out);
    }
}

fn connector(tree: &Tree, id: NodeId) -> &'static str {
    if tree.is_last_sibling(id) {
        LAST_BRANCH
    } else {
        BRANCH
    }
}

/// The prefix printed before the entry `id`: continuation markers for every
/// ancestor below the root followed by the connector. Empty for the root.
pub fn prefix(tree: &Tree, id: NodeId) -> String {
    if tree.node(id).parent().is_none() {
        return String::new();
    }
    let mut chain = prefix_chain(tree, id);
    chain.push_str(connector(tree, id));
    chain
}

fn prefix_chain(tree: &Tree, id: NodeId) -> String {
    if tree.depth(id) < 2 {
        return String::new();
    }
    let Some(parent) = tree.node(id).parent() else {
        return String::new();
    };
    let mut chain = prefix_chain(tree, parent);
    if !tree.is_last_sibling(parent) {
        chain.push_str(CONTINUATION);
    }
    chain.push_str(INDENT);
    chain
}
