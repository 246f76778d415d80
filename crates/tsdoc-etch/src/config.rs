//! Run configuration
//!
//! Settings are read from a `tsdoc.toml` file when one exists and can be
//! overridden field by field from the command line. Every field has a
//! default so an empty file (or no file) is a valid configuration.

use crate::diagnostics::{DocError, DocResult};
use globset::{Glob, GlobMatcher};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the project root
pub const CONFIG_FILE: &str = "tsdoc.toml";

/// A path rewrite applied to relative source paths before they become
/// page titles and output slugs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRule {
    /// Text to look for
    pub find: String,
    /// Replacement text
    #[serde(default)]
    pub replace: String,
}

impl AliasRule {
    /// Create a new alias rule
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
        }
    }

    /// Parse the `find=replace` form used on the command line
    pub fn parse(s: &str) -> DocResult<Self> {
        match s.split_once('=') {
            Some((find, replace)) if !find.is_empty() => Ok(Self::new(find, replace)),
            _ => Err(DocError::config(format!(
                "alias must look like find=replace, got {:?}",
                s
            ))),
        }
    }
}

/// CSS colors for the label classes emitted by the decorators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelColors {
    pub kind: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub literal: String,
    pub name: String,
    pub link: String,
}

impl Default for LabelColors {
    fn default() -> Self {
        Self {
            kind: "#c678dd".to_string(),
            type_: "#e5c07b".to_string(),
            literal: "#98c379".to_string(),
            name: "#61afef".to_string(),
            link: "#56b6c2".to_string(),
        }
    }
}

/// Configuration for a documentation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocConfig {
    /// Project root; source paths are made relative to it
    pub root: PathBuf,
    /// Entry glob, relative to the root, selecting documented files
    pub entry: String,
    /// Output directory for generated pages
    pub docs: PathBuf,
    /// Remove the output directory before generating
    pub clear_docs_on_start: bool,
    /// Document declarations marked private
    pub document_private: bool,
    /// Document declarations marked `@internal`
    pub document_internal: bool,
    /// Prefix of every cross-reference link
    pub link_prefix: String,
    /// Path rewrites, applied in order
    pub aliases: Vec<AliasRule>,
    /// Label colors written into each page's style block
    pub colors: LabelColors,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            entry: "src/**/*.ts".to_string(),
            docs: PathBuf::from(".tsdoc"),
            clear_docs_on_start: false,
            document_private: false,
            document_internal: false,
            link_prefix: "/docs/".to_string(),
            aliases: Vec::new(),
            colors: LabelColors::default(),
        }
    }
}

impl DocConfig {
    /// Create a config rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> DocResult<Self> {
        toml::from_str(text).map_err(|e| DocError::config(e.to_string()))
    }

    /// Load configuration from a TOML file
    ///
    /// A relative `root` in the file is resolved against the file's
    /// directory.
    pub fn load(path: impl AsRef<Path>) -> DocResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            DocError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let mut config = Self::from_toml(&text)?;
        if config.root.is_relative() {
            if let Some(dir) = path.parent() {
                config.root = dir.join(&config.root);
            }
        }
        Ok(config)
    }

    /// Load `tsdoc.toml` from the root if present, defaults otherwise
    pub fn discover(root: impl Into<PathBuf>) -> DocResult<Self> {
        let root = root.into();
        let candidate = root.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading configuration");
            Self::load(candidate)
        } else {
            Ok(Self::new(root))
        }
    }

    /// Output directory, resolved against the root when relative
    pub fn docs_dir(&self) -> PathBuf {
        if self.docs.is_absolute() {
            self.docs.clone()
        } else {
            self.root.join(&self.docs)
        }
    }

    /// Compile the entry glob
    pub fn scope(&self) -> DocResult<GlobMatcher> {
        let entry = self.entry.trim_start_matches("./");
        Ok(Glob::new(entry)?.compile_matcher())
    }

    /// Apply alias rules to a relative, `/`-separated path
    pub fn apply_aliases(&self, path: &str) -> String {
        self.aliases
            .iter()
            .fold(path.to_string(), |acc, rule| acc.replace(&rule.find, &rule.replace))
    }

    /// Validate values the type system cannot
    pub fn validate(&self) -> DocResult<()> {
        if self.entry.trim().is_empty() {
            return Err(DocError::config("entry glob must not be empty"));
        }
        if self.aliases.iter().any(|a| a.find.is_empty()) {
            return Err(DocError::config("alias `find` must not be empty"));
        }
        self.scope()?;
        Ok(())
    }
}
