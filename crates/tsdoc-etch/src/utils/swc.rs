//! SWC/deno_ast TypeScript parsing utilities
//!
//! This module wraps deno_ast (which wraps SWC). It handles:
//! - Parsing TypeScript/TSX files
//! - Converting SWC positions into byte offsets of the source text
//! - Extracting leading JSDoc comments

use crate::diagnostics::{DocError, DocResult};
use deno_ast::swc::ast as swc_ast;
use deno_ast::swc::common::comments::{Comment, CommentKind};
use deno_ast::swc::common::{BytePos, Span};
use deno_ast::{MediaType, ParseParams, ParsedSource, SourcePos, SourceTextInfo, StartSourcePos};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Information about the source file
#[derive(Debug, Clone)]
pub struct SourceInfo {
    /// The file path
    pub path: PathBuf,
    /// The source text
    pub text: Arc<str>,
    /// Source text info for location lookups
    pub text_info: SourceTextInfo,
}

impl SourceInfo {
    /// Create source info from a file path and content
    pub fn new(path: impl Into<PathBuf>, text: impl Into<Arc<str>>) -> Self {
        let text: Arc<str> = text.into();
        let text_info = SourceTextInfo::new(text.clone());
        Self {
            path: path.into(),
            text,
            text_info,
        }
    }

    /// Get the source text as a string slice
    pub fn source_text(&self) -> &str {
        &self.text
    }

    /// Byte offset of an SWC position within the source text
    ///
    /// deno_ast numbers positions from `START_SOURCE_POS`, not zero.
    pub fn byte_index(&self, pos: BytePos) -> usize {
        SourcePos::unsafely_from_byte_pos(pos)
            .as_byte_index(StartSourcePos::START_SOURCE_POS)
            .min(self.text.len())
    }

    /// Byte range of a span, clamped to the text and to char boundaries
    pub fn byte_range(&self, span: Span) -> (usize, usize) {
        let mut start = self.byte_index(span.lo);
        let mut end = self.byte_index(span.hi).max(start);
        while !self.text.is_char_boundary(start) {
            start -= 1;
        }
        while !self.text.is_char_boundary(end) {
            end += 1;
        }
        (start, end)
    }

    /// Extract source text for a span
    pub fn text_for_span(&self, span: Span) -> &str {
        let (start, end) = self.byte_range(span);
        &self.text[start..end]
    }
}

/// A parsed TypeScript module with source information
pub struct ParsedModule {
    /// The parsed source from deno_ast
    pub source: ParsedSource,
    /// Source information for location lookups
    pub source_info: SourceInfo,
}

impl ParsedModule {
    /// Get the program AST as a reference
    pub fn program_ref(&self) -> deno_ast::ProgramRef<'_> {
        self.source.program_ref()
    }

    /// Get the source text
    pub fn source_text(&self) -> &str {
        self.source_info.source_text()
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.source_info.path
    }

    /// Extract source text for a span
    pub fn text_for_span(&self, span: Span) -> &str {
        self.source_info.text_for_span(span)
    }

    /// Byte range of a span
    pub fn byte_range(&self, span: Span) -> (usize, usize) {
        self.source_info.byte_range(span)
    }

    /// Get leading comments for a position
    pub fn leading_comments(&self, pos: BytePos) -> Vec<Comment> {
        let source_pos = SourcePos::unsafely_from_byte_pos(pos);
        self.source
            .comments()
            .get_leading(source_pos)
            .map(|v| v.to_vec())
            .unwrap_or_default()
    }

    /// Get JSDoc comment for a span (the last leading `/** */` block)
    pub fn jsdoc_for_span(&self, span: Span) -> Option<String> {
        self.leading_comments(span.lo)
            .iter()
            .rev()
            .find(|c| c.kind == CommentKind::Block && c.text.starts_with('*'))
            .map(|c| c.text.to_string())
    }
}

/// Parse TypeScript source code from a string
///
/// deno_ast requires an absolute path to build the module specifier.
pub fn parse_typescript_source(
    path: impl AsRef<Path>,
    source: impl Into<Arc<str>>,
) -> DocResult<ParsedModule> {
    let path = path.as_ref();
    let source: Arc<str> = source.into();

    let media_type = match MediaType::from_path(path) {
        MediaType::Unknown => MediaType::TypeScript,
        other => other,
    };

    let specifier = deno_ast::ModuleSpecifier::from_file_path(path)
        .map_err(|_| DocError::InvalidPath(path.display().to_string()))?;

    let parsed = deno_ast::parse_module(ParseParams {
        specifier,
        text: source.clone(),
        media_type,
        capture_tokens: true,
        scope_analysis: false,
        maybe_syntax: None,
    })
    .map_err(|e| DocError::parse(path, e.to_string()))?;

    Ok(ParsedModule {
        source: parsed,
        source_info: SourceInfo::new(path, source),
    })
}

/// Convert a string literal's value to a String
pub fn str_value(s: &swc_ast::Str) -> String {
    String::from_utf8_lossy(s.value.as_bytes()).into_owned()
}

/// Get the name of a property key
pub fn prop_name_str(name: &swc_ast::PropName) -> Option<String> {
    match name {
        swc_ast::PropName::Ident(i) => Some(i.sym.to_string()),
        swc_ast::PropName::Str(s) => Some(str_value(s)),
        swc_ast::PropName::Num(n) => Some(n.value.to_string()),
        swc_ast::PropName::BigInt(b) => Some(b.value.to_string()),
        swc_ast::PropName::Computed(_) => None,
    }
}

/// Get the name from an expression used as a key
pub fn expr_to_name(expr: &swc_ast::Expr) -> Option<String> {
    match expr {
        swc_ast::Expr::Ident(i) => Some(i.sym.to_string()),
        swc_ast::Expr::Lit(swc_ast::Lit::Str(s)) => Some(str_value(s)),
        swc_ast::Expr::Lit(swc_ast::Lit::Num(n)) => Some(n.value.to_string()),
        swc_ast::Expr::Member(m) => {
            let obj = expr_to_name(&m.obj)?;
            let prop = match &m.prop {
                swc_ast::MemberProp::Ident(i) => i.sym.to_string(),
                swc_ast::MemberProp::Computed(c) => expr_to_name(&c.expr)?,
                swc_ast::MemberProp::PrivateName(p) => format!("#{}", p.name),
            };
            Some(format!("{}.{}", obj, prop))
        }
        _ => None,
    }
}
