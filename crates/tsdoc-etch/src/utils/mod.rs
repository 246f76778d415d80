//! Utilities for tsdoc-etch
//!
//! This module provides utilities for:
//! - SWC/deno_ast TypeScript parsing
//! - Output slugs and anchors
//! - The symbol table of documented declarations

pub mod slug;
pub mod swc;
pub mod symbols;

pub use swc::{parse_typescript_source, ParsedModule, SourceInfo};
pub use symbols::SymbolTable;
