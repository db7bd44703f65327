use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot stat {path}: {source}")]
    Path {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot list {path}: {source}")]
    List {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: globset::Error,
    },
}
impl TreeError {
    pub(crate) fn path(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreeError::Path {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn list(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreeError::List {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn pattern(pattern: impl Into<String>, source: globset::Error) -> Self {
        TreeError::Pattern {
            pattern: pattern.into(),
            source,
        }
    }
}
