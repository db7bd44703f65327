//! # Twig
//!
//! `twig` renders a directory hierarchy as an indented text tree, in the
//! spirit of the classic `tree` utility. The whole tree is built in memory,
//! filtered, and then rendered into a single string.
//!
//! Filtering drops hidden entries (unless requested), non-directories in
//! directories-only mode, and entries whose name does not match a glob
//! pattern. A directory that does not match the pattern is still shown when
//! something below it does, so the path to a match is never hidden.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use twig::{TreeOptionsBuilder, twig};
//!
//! let config = TreeOptionsBuilder::new()
//!     .include_hidden(true)
//!     .pattern("*.rs")
//!     .build()
//!     .compile()
//!     .expect("Invalid pattern");
//!
//! let tree = twig(".", &config).expect("Failed to read directory");
//! print!("{}", tree);
//! ```

mod builder;
mod error;
mod options;
mod render;
mod source;
mod tree;

pub use builder::{build, build_with};
pub use error::TreeError;
pub use options::{TreeConfig, TreeOptions, TreeOptionsBuilder};
pub use render::{prefix, render};
pub use source::{EntryMeta, EntrySource, LocalFs, MemoryFs};
pub use tree::{Node, NodeId, Tree};

use std::path::Path;

/// Builds the tree at `path` from the local filesystem and renders it.
pub fn twig(path: impl AsRef<Path>, config: &TreeConfig) -> Result<String, TreeError> {
    let tree = build(path, config)?;
    Ok(render(&tree, config))
}
