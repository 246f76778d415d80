//! Qualified names and documentation paths
//!
//! The [`Scope`] is the part of the configuration that decides where a
//! file's page lives: which files are documented, the page title and
//! slug, and the link prefix of every cross-reference.

use crate::config::DocConfig;
use crate::diagnostics::DocResult;
use crate::syntax::NodeRef;
use crate::utils::slug::{anchor, page_slug, relative_path, strip_extension};
use globset::GlobMatcher;
use std::path::{Path, PathBuf};

/// Separator between the segments of a qualified name
pub const NAME_DELIMITER: &str = ".";

/// Names of the enclosing declarations, outermost first, then the node's
/// own name
///
/// Anonymous ancestors contribute nothing, so a property of an object
/// literal assigned to `o` is `o.a`.
pub fn qualified_name(node: NodeRef<'_>) -> String {
    let mut segments: Vec<&str> = node.ancestors().filter_map(|n| n.name()).collect();
    segments.reverse();
    if let Some(name) = node.name() {
        segments.push(name);
    }
    segments.join(NAME_DELIMITER)
}

/// Documented scope and page addressing
#[derive(Debug, Clone)]
pub struct Scope {
    root: PathBuf,
    matcher: GlobMatcher,
    config: DocConfig,
}

impl Scope {
    /// Build the scope of a configuration
    pub fn new(config: &DocConfig) -> DocResult<Self> {
        Ok(Self {
            root: config.root.clone(),
            matcher: config.scope()?,
            config: config.clone(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the file at `path` is documented
    pub fn contains(&self, path: &Path) -> bool {
        relative_path(&self.root, path)
            .map(|rel| self.matcher.is_match(rel))
            .unwrap_or(false)
    }

    /// Page title: the aliased relative path without extension
    pub fn title(&self, path: &Path) -> Option<String> {
        let rel = relative_path(&self.root, path)?;
        let aliased = self.config.apply_aliases(&rel);
        Some(strip_extension(&aliased).trim_start_matches('/').to_string())
    }

    /// Output slug of the page for `path`
    pub fn slug(&self, path: &Path) -> Option<String> {
        self.title(path).map(|title| page_slug(&title))
    }

    /// `<link_prefix><slug>` for a file in scope
    pub fn page_path(&self, path: &Path) -> Option<String> {
        if !self.contains(path) {
            return None;
        }
        self.slug(path)
            .map(|slug| format!("{}{}", self.config.link_prefix, slug))
    }

    /// `<link_prefix><slug>#<anchor>` for a node in a file in scope
    ///
    /// Nodes outside the scope have no documentation path.
    pub fn doc_path(&self, node: NodeRef<'_>) -> Option<String> {
        let page = self.page_path(node.tree().path())?;
        let anchor = anchor(&qualified_name(node));
        if anchor.is_empty() {
            Some(page)
        } else {
            Some(format!("{}#{}", page, anchor))
        }
    }
}
