//! Error types and diagnostics
//!
//! Whole-run failures (unreadable files, unparsable sources, bad
//! configuration) are [`DocError`]s and abort the run. Everything else
//! the generator cannot express is recorded as a [`Diagnostic`] and the
//! run continues with a degraded fragment.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for tsdoc-etch operations
pub type DocResult<T> = Result<T, DocError>;

/// Diagnostic code for a node kind no handler knows how to process
pub const MISSING_SUPPORT: &str = "missing-support";

/// Diagnostic code for a checked type that could not be described
pub const UNRESOLVED_TYPE: &str = "unresolved-type";

/// Diagnostic code for a node that has no signature handler
pub const MISSING_TYPE: &str = "missing-type";

/// Main error type for tsdoc-etch
#[derive(Debug, Error)]
pub enum DocError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source file failed to parse
    #[error("Parse error in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Entry glob could not be compiled
    #[error("Invalid entry glob: {0}")]
    Glob(#[from] globset::Error),

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid path
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl DocError {
    /// Create a parse error
    pub fn parse(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        DocError::Parse {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        DocError::Config(message.into())
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        DocError::Other(message.into())
    }
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    /// Error - the run cannot produce this output
    Error,
    /// Warning - output degraded, generation continues
    Warning,
    /// Info - informational message
    Info,
}

impl DiagnosticSeverity {
    /// Get display string
    pub fn display(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Info => "info",
        }
    }
}

/// A diagnostic message
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Message
    pub message: String,
    /// Source file
    pub file: Option<PathBuf>,
    /// Line number (1-indexed)
    pub line: Option<usize>,
    /// Column number (0-indexed)
    pub col: Option<usize>,
    /// Diagnostic code (for categorization)
    pub code: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(severity: DiagnosticSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            file: None,
            line: None,
            col: None,
            code: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Error, message)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Warning, message)
    }

    /// Create an info diagnostic
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Info, message)
    }

    /// Set the source file
    pub fn in_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Set the location
    pub fn at(mut self, line: usize, col: usize) -> Self {
        self.line = Some(line);
        self.col = Some(col);
        self
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Check the diagnostic code
    pub fn has_code(&self, code: &str) -> bool {
        self.code.as_deref() == Some(code)
    }

    /// Location prefix, `file:line:col`
    pub fn location(&self) -> Option<String> {
        let file = self.file.as_ref()?;
        let mut result = file.display().to_string();
        if let Some(line) = self.line {
            result.push(':');
            result.push_str(&line.to_string());
            if let Some(col) = self.col {
                result.push(':');
                result.push_str(&col.to_string());
            }
        }
        Some(result)
    }

    /// Format the diagnostic for display
    pub fn format(&self) -> String {
        let mut result = String::new();

        if let Some(location) = self.location() {
            result.push_str(&location);
            result.push_str(": ");
        }

        result.push_str(self.severity.display());

        if let Some(ref code) = self.code {
            result.push('[');
            result.push_str(code);
            result.push(']');
        }

        result.push_str(": ");
        result.push_str(&self.message);

        result
    }
}

/// Collector for diagnostics during doc generation
#[derive(Debug, Default)]
pub struct DiagnosticsCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticsCollector {
    /// Create a new collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add every diagnostic of another collector
    pub fn extend(&mut self, other: DiagnosticsCollector) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Add a warning
    pub fn warning(&mut self, message: impl Into<String>) {
        self.add(Diagnostic::warning(message));
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == DiagnosticSeverity::Error)
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of diagnostics collected
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if nothing was collected
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics carrying the given code
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.diagnostics.iter().filter(move |d| d.has_code(code))
    }

    /// Get error count
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Error)
            .count()
    }

    /// Get warning count
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Warning)
            .count()
    }
}
