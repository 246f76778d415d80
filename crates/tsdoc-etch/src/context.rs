//! Render context
//!
//! One [`DocContext`] exists per run. It bundles the read-only inputs
//! every pass needs (project, configuration, scope, symbol table and the
//! checker) with the diagnostics collector the passes report into.

use crate::checker::Checker;
use crate::config::DocConfig;
use crate::diagnostics::{Diagnostic, DiagnosticsCollector};
use crate::naming::Scope;
use crate::project::Project;
use crate::syntax::NodeRef;
use crate::utils::symbols::SymbolTable;
use crate::visibility::Visibility;
use std::cell::RefCell;

pub struct DocContext<'p> {
    pub project: &'p Project,
    pub config: &'p DocConfig,
    pub scope: &'p Scope,
    pub symbols: &'p SymbolTable,
    pub checker: Checker<'p>,
    diagnostics: RefCell<DiagnosticsCollector>,
}

impl<'p> DocContext<'p> {
    pub fn new(
        project: &'p Project,
        config: &'p DocConfig,
        scope: &'p Scope,
        symbols: &'p SymbolTable,
    ) -> Self {
        Self {
            project,
            config,
            scope,
            symbols,
            checker: Checker::new(project),
            diagnostics: RefCell::new(DiagnosticsCollector::new()),
        }
    }

    /// Record a warning about `node` and log it
    pub fn report(&self, code: &str, message: impl Into<String>, node: Option<NodeRef<'_>>) {
        let mut diagnostic = Diagnostic::warning(message).with_code(code);
        if let Some(node) = node {
            let (line, col) = node.line_col();
            diagnostic = diagnostic.in_file(node.tree().path()).at(line, col);
        }
        tracing::warn!("{}", diagnostic.format());
        self.diagnostics.borrow_mut().add(diagnostic);
    }

    /// Whether `node`'s block is produced under the configuration
    pub fn should_document(&self, node: NodeRef<'_>) -> bool {
        Visibility::of(node).should_document(self.config)
    }

    /// Documentation path of a declaration, if it has a page
    pub fn link_target(&self, declaration: NodeRef<'_>) -> Option<&'p str> {
        self.symbols.get(declaration)
    }

    /// Number of diagnostics reported so far
    pub fn diagnostic_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Copy of the diagnostics reported so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().diagnostics().to_vec()
    }

    /// Move the reported diagnostics out, leaving the collector empty
    pub fn take_diagnostics(&self) -> DiagnosticsCollector {
        self.diagnostics.take()
    }
}
