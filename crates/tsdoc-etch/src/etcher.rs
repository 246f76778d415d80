//! Etcher - documentation run orchestrator
//!
//! A run loads every source under the root, builds the symbol table
//! over the in-scope files, renders one page per in-scope file that has
//! at least one non-empty block and finishes with the `index.json`
//! manifest of the declarations written.
//!
//! # Example
//!
//! ```no_run
//! use tsdoc_etch::{DocConfig, Etcher};
//!
//! let mut etcher = Etcher::new(DocConfig::new("."));
//! let report = etcher.run().expect("documentation run failed");
//! println!("{} pages", report.pages.len());
//! ```

use crate::config::DocConfig;
use crate::context::DocContext;
use crate::diagnostics::{DiagnosticsCollector, DocResult};
use crate::naming::{qualified_name, Scope};
use crate::page::{page_file_name, PageComposer};
use crate::project::{statements, Project};
use crate::render::Renderer;
use crate::syntax::SourceTree;
use crate::utils::symbols::SymbolTable;
use crate::walk::{DeclarationRecord, Traveler};
use std::fs;
use std::path::PathBuf;

/// File name of the declaration manifest
pub const MANIFEST_FILE: &str = "index.json";

/// One written page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPage {
    /// Source file the page documents
    pub source: PathBuf,
    /// Path of the page
    pub path: PathBuf,
    pub title: String,
    /// Number of top-level blocks on the page
    pub blocks: usize,
}

/// Outcome of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Output directory
    pub docs_dir: PathBuf,
    pub pages: Vec<WrittenPage>,
    /// Path of `index.json`
    pub manifest: PathBuf,
    /// Number of declarations listed in the manifest
    pub declarations: usize,
    /// In-scope files that produced no block
    pub skipped: usize,
}

/// Runs documentation generation for one configuration
pub struct Etcher {
    config: DocConfig,
    diagnostics: DiagnosticsCollector,
}

impl Etcher {
    pub fn new(config: DocConfig) -> Self {
        Self {
            config,
            diagnostics: DiagnosticsCollector::new(),
        }
    }

    pub fn config(&self) -> &DocConfig {
        &self.config
    }

    /// Diagnostics of the last run
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    /// Run the documentation pipeline
    ///
    /// Pages written before a failure stay on disk.
    pub fn run(&mut self) -> DocResult<RunReport> {
        let config = &self.config;
        config.validate()?;

        let docs_dir = config.docs_dir();
        if config.clear_docs_on_start && docs_dir.exists() {
            tracing::debug!(path = %docs_dir.display(), "clearing output directory");
            fs::remove_dir_all(&docs_dir)?;
        }
        fs::create_dir_all(&docs_dir)?;

        let project = Project::load(config)?;
        let scope = Scope::new(config)?;
        let symbols = SymbolTable::build(&project, &scope, config);
        let cx = DocContext::new(&project, config, &scope, &symbols);
        let renderer = Renderer::new(&cx);
        let composer = PageComposer::new(config)?;
        let traveler = Traveler::new();

        let mut pages = Vec::new();
        let mut records = Vec::new();
        let mut skipped = 0;

        for tree in project.files() {
            if !scope.contains(tree.path()) {
                continue;
            }
            let (Some(title), Some(slug)) = (scope.title(tree.path()), scope.slug(tree.path()))
            else {
                continue;
            };

            let blocks = page_blocks(&renderer, tree);
            if blocks.is_empty() {
                tracing::debug!(path = %tree.path().display(), "nothing to document");
                skipped += 1;
                continue;
            }

            let page = composer.compose(&title, &blocks)?;
            let path = docs_dir.join(page_file_name(&slug));
            fs::write(&path, page)?;
            tracing::info!(page = %path.display(), blocks = blocks.len(), "wrote page");

            for (label, node) in traveler.travel(tree.root()) {
                if !cx.should_document(node) {
                    continue;
                }
                if let Some(doc_path) = scope.doc_path(node) {
                    let signature = renderer.signatures().signature(node);
                    records.push(DeclarationRecord::new(
                        &title,
                        qualified_name(node),
                        label,
                        doc_path,
                        &signature,
                    ));
                }
            }

            pages.push(WrittenPage {
                source: tree.path().to_path_buf(),
                path,
                title,
                blocks: blocks.len(),
            });
        }

        let manifest = docs_dir.join(MANIFEST_FILE);
        fs::write(&manifest, serde_json::to_string_pretty(&records)?)?;
        tracing::info!(
            manifest = %manifest.display(),
            declarations = records.len(),
            "wrote manifest"
        );

        self.diagnostics = cx.take_diagnostics();

        Ok(RunReport {
            docs_dir,
            pages,
            manifest,
            declarations: records.len(),
            skipped,
        })
    }
}

/// The non-empty blocks of a file's top-level statements
fn page_blocks<'a>(renderer: &Renderer<'a>, tree: &'a SourceTree) -> Vec<String> {
    statements(tree.root())
        .into_iter()
        .map(|statement| renderer.render(statement))
        .filter(|block| !block.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn write(root: &Path, rel: &str, text: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    #[test]
    fn test_run_writes_pages_and_manifest() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "src/geo/point.ts", "export interface Point { x: number; y: number }\nexport const origin: Point = { x: 0, y: 0 };");
        write(dir.path(), "src/empty.ts", "import { Point } from \"./geo/point\";");
        write(dir.path(), "scripts/build.ts", "export const out = 1;");

        let mut etcher = Etcher::new(DocConfig::new(dir.path()));
        let report = etcher.run().unwrap();

        assert_eq!(report.pages.len(), 1);
        assert_eq!(report.skipped, 1);
        let page = fs::read_to_string(dir.path().join(".tsdoc/src-geo-point.mdx")).unwrap();
        assert!(page.contains("<Meta title=\"src/geo/point\" />"));
        assert!(page.contains("\n---\n"));
        assert!(page.contains("[Point](/docs/src-geo-point#point)"));
        assert!(!dir.path().join(".tsdoc/scripts-build.mdx").exists());

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&report.manifest).unwrap()).unwrap();
        let names: Vec<&str> = manifest
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["qualifiedName"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Point", "origin"]);
        assert_eq!(manifest[1]["kind"], "const");
        assert_eq!(manifest[1]["type"], "Point");
        assert_eq!(report.declarations, 2);
    }

    #[test]
    fn test_clear_docs_on_start() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "src/a.ts", "export type A = string;");
        write(dir.path(), ".tsdoc/stale.mdx", "old");

        let mut config = DocConfig::new(dir.path());
        config.clear_docs_on_start = true;
        Etcher::new(config).run().unwrap();

        assert!(!dir.path().join(".tsdoc/stale.mdx").exists());
        assert!(dir.path().join(".tsdoc/src-a.mdx").exists());
    }

    #[test]
    fn test_parse_failure_aborts() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "src/a.ts", "export function broken( {");
        let result = Etcher::new(DocConfig::new(dir.path())).run();
        assert!(matches!(result, Err(crate::diagnostics::DocError::Parse { .. })));
    }

    #[test]
    fn test_broken_file_outside_scope_does_not_abort() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "src/a.ts", "import { helper } from \"../scripts/broken\";\nexport type A = helper;");
        write(dir.path(), "scripts/broken.ts", "export function broken( {");

        let mut etcher = Etcher::new(DocConfig::new(dir.path()));
        let report = etcher.run().unwrap();

        assert_eq!(report.pages.len(), 1);
        let page = fs::read_to_string(dir.path().join(".tsdoc/src-a.mdx")).unwrap();
        assert!(page.contains(r#"<span className="ts-doc-type">helper</span>"#));
    }

    #[test]
    fn test_diagnostics_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "src/a.ts", "export const d = new Date().getTime();\nexport type A = 1;");
        let mut etcher = Etcher::new(DocConfig::new(dir.path()));
        etcher.run().unwrap();
        assert!(etcher
            .diagnostics()
            .with_code(crate::diagnostics::UNRESOLVED_TYPE)
            .next()
            .is_some());
    }
}
