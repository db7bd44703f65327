use crate::error::TreeError;
use crate::options::TreeConfig;
use crate::source::{EntryMeta, EntrySource, LocalFs};
use crate::tree::{Node, NodeId, Tree};
use std::ffi::OsStr;
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};

/// Builds the filtered tree rooted at `path` from the local filesystem.
///
/// # Errors
///
/// Fails with [`TreeError::Path`] if `path` cannot be stat'd and with
/// [`TreeError::List`] if any directory below it cannot be listed. No partial
/// tree is returned.
pub fn build(path: impl AsRef<Path>, config: &TreeConfig) -> Result<Tree, TreeError> {
    build_with(&LocalFs, path, config)
}

/// Same as [`build`], reading entries from `source`.
pub fn build_with<S: EntrySource + ?Sized>(
    source: &S,
    path: impl AsRef<Path>,
    config: &TreeConfig,
) -> Result<Tree, TreeError> {
    let path = path.as_ref();
    #[cfg(feature = "logging")]
    tracing::debug!("Building tree from root: {}", path.display());
    let meta = source
        .stat(path)
        .map_err(|e| TreeError::path(path, e))?;
    let mut builder = Builder {
        source,
        config,
        nodes: Vec::new(),
    };
    builder.add(path.to_path_buf(), meta, None)?;
    Ok(Tree {
        nodes: builder.nodes,
    })
}

struct Builder<'a, S: ?Sized> {
    source: &'a S,
    config: &'a TreeConfig,
    nodes: Vec<Node>,
}

impl<S: EntrySource + ?Sized> Builder<'_, S> {
    /// Appends the subtree at `path` in pre-order and returns its id.
    fn add(
        &mut self,
        path: PathBuf,
        meta: EntryMeta,
        parent: Option<NodeId>,
    ) -> Result<NodeId, TreeError> {
        let id = NodeId(self.nodes.len());
        let name = meta.name.to_string_lossy().into_owned();
        let mut node = Node::new(path, name, meta.is_dir, parent);
        node.matched = self.config.matches(&node.name);
        let is_dir = node.is_dir;
        self.nodes.push(node);
        if !is_dir {
            return Ok(id);
        }

        let dir = self.nodes[id.0].path.clone();
        let entries = self
            .source
            .list(&dir)
            .map_err(|e| TreeError::list(&dir, e))?;
        #[cfg(feature = "logging")]
        tracing::debug!("Listed {} entries in {}", entries.len(), dir.display());

        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            let start = self.nodes.len();
            let child = self.add(child_path(&dir, &entry.name), entry, Some(id))?;
            if self.should_include(child) {
                children.push(child);
            } else {
                #[cfg(feature = "logging")]
                tracing::debug!("Pruned {}", self.nodes[child.0].path.display());
                // The child's subtree occupies the tail of the arena.
                self.nodes.truncate(start);
            }
        }

        let descendant_matched = children.iter().any(|c| self.nodes[c.0].matched);
        let node = &mut self.nodes[id.0];
        node.matched |= descendant_matched;
        node.children = children;
        Ok(id)
    }

    fn should_include(&self, id: NodeId) -> bool {
        let node = &self.nodes[id.0];
        if !self.config.include_hidden && node.name.starts_with('.') {
            return false;
        }
        if self.config.directories_only && !node.is_dir {
            return false;
        }
        node.matched
    }
}

/// `parent`, a separator and `name`, concatenated without normalizing, so a
/// parent ending in a separator yields a doubled one.
fn child_path(parent: &Path, name: &OsStr) -> PathBuf {
    let mut path = parent.as_os_str().to_os_string();
    path.push(MAIN_SEPARATOR_STR);
    path.push(name);
    PathBuf::from(path)
}
