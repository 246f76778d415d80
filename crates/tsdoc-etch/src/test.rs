//! Test utilities for tsdoc-etch.
//!
//! Fixtures parse in-memory TypeScript under the fake project root
//! [`ROOT`], so tests never touch the filesystem unless they want to.
//!
//! # Example
//!
//! ```
//! use tsdoc_etch::test::Fixture;
//!
//! let fixture = Fixture::new(&[("src/a.ts", "export type Id = string;")]);
//! let count = fixture.with(|session| session.cx().symbols.len());
//! assert_eq!(count, 1);
//! ```

use crate::config::DocConfig;
use crate::context::DocContext;
use crate::naming::Scope;
use crate::project::Project;
use crate::syntax::{lower, FileId, NodeRef, SourceTree};
use crate::utils::swc::parse_typescript_source;
use crate::utils::symbols::SymbolTable;
use std::path::{Path, PathBuf};

/// Root of every fixture project
pub const ROOT: &str = "/project";

/// Parse and lower one file
///
/// Panics when the source does not parse.
pub fn parse_tree(path: &str, text: &str) -> SourceTree {
    let parsed = parse_typescript_source(path, text.to_string())
        .unwrap_or_else(|e| panic!("fixture {} does not parse: {}", path, e));
    lower(FileId::new(0), &parsed)
}

/// Build a project from `(relative path, source)` pairs rooted at [`ROOT`]
pub fn project(files: &[(&str, &str)]) -> Project {
    let sources = files
        .iter()
        .map(|(rel, text)| (source_path(rel), text.to_string()))
        .collect();
    Project::from_sources(ROOT, sources)
        .unwrap_or_else(|e| panic!("fixture project does not parse: {}", e))
}

/// Absolute path of a fixture file
pub fn source_path(rel: &str) -> PathBuf {
    Path::new(ROOT).join(rel)
}

/// A project and the configuration it is documented with
pub struct Fixture {
    project: Project,
    config: DocConfig,
}

impl Fixture {
    pub fn new(files: &[(&str, &str)]) -> Self {
        Self {
            project: project(files),
            config: DocConfig::new(ROOT),
        }
    }

    /// Adjust the configuration before use
    pub fn configure(mut self, f: impl FnOnce(&mut DocConfig)) -> Self {
        f(&mut self.config);
        self
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn config(&self) -> &DocConfig {
        &self.config
    }

    /// Run `f` against a fresh scope, symbol table and render context
    pub fn with<R>(&self, f: impl FnOnce(&Session<'_>) -> R) -> R {
        let scope = Scope::new(&self.config)
            .unwrap_or_else(|e| panic!("fixture config is invalid: {}", e));
        let symbols = SymbolTable::build(&self.project, &scope, &self.config);
        let cx = DocContext::new(&self.project, &self.config, &scope, &symbols);
        f(&Session {
            project: &self.project,
            cx: &cx,
        })
    }
}

/// Borrowed view of a fixture while its context is alive
pub struct Session<'p> {
    project: &'p Project,
    cx: &'p DocContext<'p>,
}

impl<'p> Session<'p> {
    pub fn cx(&self) -> &'p DocContext<'p> {
        self.cx
    }

    pub fn project(&self) -> &'p Project {
        self.project
    }

    /// The file at `rel`
    pub fn tree(&self, rel: &str) -> &'p SourceTree {
        self.project
            .by_path(&source_path(rel))
            .unwrap_or_else(|| panic!("no fixture file {}", rel))
    }

    /// First node of `rel` declaring `name`
    pub fn named(&self, rel: &str, name: &str) -> NodeRef<'p> {
        self.tree(rel)
            .nodes()
            .find(|n| n.name() == Some(name))
            .unwrap_or_else(|| panic!("no declaration {} in {}", name, rel))
    }
}
