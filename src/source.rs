//! Filesystem listing capability used by the tree builder.
//!
//! [`LocalFs`] reads the real filesystem; [`MemoryFs`] serves a tree held in
//! memory, which is handy for tests and for rendering paths that do not exist
//! on disk.

use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Metadata of a single entry as reported by an [`EntrySource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMeta {
    /// Final path component, exactly as stored on disk.
    pub name: OsString,
    pub is_dir: bool,
}

/// Source of filesystem entries.
///
/// `list` returns the immediate entries of a directory in the order the
/// builder must keep them.
pub trait EntrySource {
    fn stat(&self, path: &Path) -> io::Result<EntryMeta>;
    fn list(&self, path: &Path) -> io::Result<Vec<EntryMeta>>;
}

/// The local filesystem. Symlinks are never followed.
///
/// Directory entries are listed sorted by the raw bytes of their file name.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl EntrySource for LocalFs {
    fn stat(&self, path: &Path) -> io::Result<EntryMeta> {
        let metadata = fs::symlink_metadata(path)?;
        Ok(EntryMeta {
            name: entry_name(path),
            is_dir: metadata.is_dir(),
        })
    }

    fn list(&self, path: &Path) -> io::Result<Vec<EntryMeta>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            entries.push(EntryMeta {
                name: entry.file_name(),
                is_dir: file_type.is_dir(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

/// Name of the entry at `path`. Paths without a final component, such as `.`
/// or `/`, are named after the path itself.
pub(crate) fn entry_name(path: &Path) -> OsString {
    match path.file_name() {
        Some(name) => name.to_os_string(),
        None => path.as_os_str().to_os_string(),
    }
}

/// An in-memory directory tree.
///
/// Paths are given relative to the root passed to [`MemoryFs::new`] and are
/// joined onto it, so they must be looked up with the same root. Missing
/// parent directories are created on the fly. Entries are listed in insertion
/// order.
///
/// ```
/// use twig::MemoryFs;
///
/// let fs = MemoryFs::new(".")
///     .dir(".idea")
///     .file(".idea/run.xml")
///     .file(".gitignore");
/// # let _ = fs;
/// ```
#[derive(Debug, Clone)]
pub struct MemoryFs {
    root: PathBuf,
    kinds: HashMap<PathBuf, bool>,
    children: HashMap<PathBuf, Vec<EntryMeta>>,
    denied: HashSet<PathBuf>,
}

impl MemoryFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut kinds = HashMap::new();
        kinds.insert(root.clone(), true);
        let mut children = HashMap::new();
        children.insert(root.clone(), Vec::new());
        Self {
            root,
            kinds,
            children,
            denied: HashSet::new(),
        }
    }

    pub fn dir(mut self, relative: impl AsRef<Path>) -> Self {
        self.insert(relative.as_ref(), true);
        self
    }

    pub fn file(mut self, relative: impl AsRef<Path>) -> Self {
        self.insert(relative.as_ref(), false);
        self
    }

    /// Makes listing the directory at `relative` fail with
    /// [`io::ErrorKind::PermissionDenied`].
    pub fn deny(mut self, relative: impl AsRef<Path>) -> Self {
        self.denied.insert(self.root.join(relative));
        self
    }

    fn insert(&mut self, relative: &Path, is_dir: bool) {
        let mut current = self.root.clone();
        let mut components = relative.components().peekable();
        while let Some(component) = components.next() {
            let last = components.peek().is_none();
            let kind = if last { is_dir } else { true };
            let parent = current.clone();
            current.push(component);
            if self.kinds.contains_key(&current) {
                continue;
            }
            self.kinds.insert(current.clone(), kind);
            if kind {
                self.children.entry(current.clone()).or_default();
            }
            self.children.entry(parent).or_default().push(EntryMeta {
                name: entry_name(&current),
                is_dir: kind,
            });
        }
    }
}

impl EntrySource for MemoryFs {
    fn stat(&self, path: &Path) -> io::Result<EntryMeta> {
        match self.kinds.get(path) {
            Some(&is_dir) => Ok(EntryMeta {
                name: entry_name(path),
                is_dir,
            }),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such entry: {}", path.display()),
            )),
        }
    }

    fn list(&self, path: &Path) -> io::Result<Vec<EntryMeta>> {
        if self.denied.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ));
        }
        match self.children.get(path) {
            Some(entries) => Ok(entries.clone()),
            None => Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("not a directory: {}", path.display()),
            )),
        }
    }
}
