//! Symbol table
//!
//! Maps every documented declaration, keyed by its file and qualified
//! name, to its documentation path. The table is filled by a first
//! traversal pass over the in-scope files before any page is rendered,
//! so a reference can link to a declaration on a page that has not been
//! written yet.

use crate::config::DocConfig;
use crate::naming::{qualified_name, Scope};
use crate::project::Project;
use crate::syntax::{FileId, NodeRef};
use crate::visibility::Visibility;
use crate::walk::Traveler;
use indexmap::IndexMap;

/// Documentation paths of documented declarations
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    paths: IndexMap<(FileId, String), String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every documentable declaration of the in-scope files
    ///
    /// Declarations hidden by their visibility are left out, so
    /// references to them render as plain labels.
    pub fn build(project: &Project, scope: &Scope, config: &DocConfig) -> Self {
        let mut table = Self::new();
        let traveler = Traveler::new();
        for tree in project.files() {
            if !scope.contains(tree.path()) {
                continue;
            }
            for (_, node) in traveler.travel(tree.root()) {
                if !Visibility::of(node).should_document(config) {
                    continue;
                }
                if let Some(path) = scope.doc_path(node) {
                    table.insert(node, path);
                }
            }
        }
        tracing::debug!(symbols = table.len(), "built symbol table");
        table
    }

    /// Record the documentation path of a declaration
    pub fn insert(&mut self, node: NodeRef<'_>, path: impl Into<String>) {
        self.paths
            .insert((node.file(), qualified_name(node)), path.into());
    }

    /// Documentation path of a declaration
    pub fn get(&self, node: NodeRef<'_>) -> Option<&str> {
        self.paths
            .get(&(node.file(), qualified_name(node)))
            .map(String::as_str)
    }

    pub fn contains(&self, node: NodeRef<'_>) -> bool {
        self.get(node).is_some()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Qualified names and paths, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.paths
            .iter()
            .map(|((_, name), path)| (name.as_str(), path.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::project;
    use std::path::Path;

    #[test]
    fn test_build_skips_out_of_scope_and_private() {
        let project = project(&[
            (
                "src/geo/point.ts",
                "export interface Point { x: number }\n/** @private */\nexport const secret = 1;\nexport namespace N { export type T = 1; }",
            ),
            ("vendor/lib.ts", "export type V = string;"),
        ]);
        let config = DocConfig::new("/project");
        let scope = Scope::new(&config).unwrap();
        let table = SymbolTable::build(&project, &scope, &config);

        let entries: Vec<_> = table.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("Point", "/docs/src-geo-point#point"),
                ("N", "/docs/src-geo-point#n"),
                ("N.T", "/docs/src-geo-point#nt"),
            ]
        );

        let vendor = project.by_path(Path::new("/project/vendor/lib.ts")).unwrap();
        let v = vendor.nodes().find(|n| n.name() == Some("V")).unwrap();
        assert!(!table.contains(v));
    }

    #[test]
    fn test_document_private_includes_hidden_declarations() {
        let project = project(&[("src/a.ts", "/** @private */\nexport const secret = 1;")]);
        let mut config = DocConfig::new("/project");
        config.document_private = true;
        let scope = Scope::new(&config).unwrap();
        let table = SymbolTable::build(&project, &scope, &config);
        assert_eq!(table.len(), 1);
    }
}
