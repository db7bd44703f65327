use crate::error::TreeError;
use globset::{Glob, GlobMatcher};
use serde::{Deserialize, Serialize};
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeOptions {
    pub include_hidden: bool,
    pub directories_only: bool,
    pub disable_indentation: bool,
    pub full_paths: bool,
    pub pattern: String,
}
impl TreeOptions {
    pub fn compile(self) -> Result<TreeConfig, TreeError> {
        TreeConfig::new(self)
    }
}
#[derive(Debug, Default)]
pub struct TreeOptionsBuilder {
    options: TreeOptions,
}
impl TreeOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn directories_only(mut self, yes: bool) -> Self {
        self.options.directories_only = yes;
        self
    }
    pub fn disable_indentation(mut self, yes: bool) -> Self {
        self.options.disable_indentation = yes;
        self
    }
    pub fn full_paths(mut self, yes: bool) -> Self {
        self.options.full_paths = yes;
        self
    }
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.options.pattern = pattern.into();
        self
    }
    pub fn build(self) -> TreeOptions {
        self.options
    }
}

/// Compiled, read-only configuration shared by the builder and the renderer.
///
/// The glob pattern is compiled once here. An empty pattern matches every name.
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    pub include_hidden: bool,
    pub directories_only: bool,
    pub disable_indentation: bool,
    pub full_paths: bool,
    matcher: Option<GlobMatcher>,
}
impl TreeConfig {
    /// # Errors
    ///
    /// Returns [`TreeError::Pattern`] if the pattern is not a valid glob.
    pub fn new(options: TreeOptions) -> Result<Self, TreeError> {
        let matcher = if options.pattern.is_empty() {
            None
        } else {
            let glob = Glob::new(&options.pattern)
                .map_err(|e| TreeError::pattern(&options.pattern, e))?;
            Some(glob.compile_matcher())
        };
        Ok(Self {
            include_hidden: options.include_hidden,
            directories_only: options.directories_only,
            disable_indentation: options.disable_indentation,
            full_paths: options.full_paths,
            matcher,
        })
    }
    pub fn pattern(&self) -> Option<&str> {
        self.matcher.as_ref().map(|m| m.glob().glob())
    }
    pub fn matches(&self, name: &str) -> bool {
        match &self.matcher {
            Some(matcher) => matcher.is_match(name),
            None => true,
        }
    }
}
