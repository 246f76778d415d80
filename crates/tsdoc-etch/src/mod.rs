//! tsdoc-etch: TypeScript documentation generator
//!
//! This crate turns a TypeScript source tree into MDX documentation
//! pages by:
//! - Parsing each source file with deno_ast/SWC and lowering it into an
//!   arena of typed syntax nodes
//! - Resolving every declaration's signature through a kind-keyed
//!   dispatch table, inferring types the source leaves implicit
//! - Rendering one documentation block per declaration, with
//!   cross-reference links between documented declarations
//! - Writing one page per source file plus an `index.json` manifest
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐
//! │ src/**/*.ts     │───▶│ Project (arena   │
//! │ (SWC parse)     │    │ syntax trees)    │
//! └─────────────────┘    └────────┬─────────┘
//!                                 │
//!              ┌──────────────────┼──────────────────┐
//!              ▼                  ▼                  ▼
//!       ┌────────────┐    ┌──────────────┐    ┌────────────┐
//!       │ Traveler   │    │ Signatures   │    │ Renderer   │
//!       │ (symbols)  │    │ (+ checker)  │    │ (blocks)   │
//!       └─────┬──────┘    └──────┬───────┘    └─────┬──────┘
//!             └──────────────────┴──────────────────┘
//!                                ▼
//!                      ┌───────────────────┐
//!                      │ .mdx + index.json │
//!                      └───────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use tsdoc_etch::{DocConfig, Etcher};
//!
//! let config = DocConfig::discover(".").expect("invalid tsdoc.toml");
//! let report = Etcher::new(config).run().expect("documentation run failed");
//! println!("wrote {} pages", report.pages.len());
//! ```

// Syntax
pub mod classify;
pub mod js_doc;
pub mod syntax;

// Core
pub mod checker;
pub mod context;
pub mod decorate;
pub mod dispatch;
pub mod naming;
pub mod project;
pub mod render;
pub mod signature;
pub mod visibility;
pub mod walk;

// Output and configuration
pub mod config;
pub mod diagnostics;
pub mod etcher;
pub mod page;
pub mod printer;
pub mod test;

// Submodules
pub mod utils;

// Re-exports for convenience
pub use checker::{CheckedType, Checker};
pub use config::{AliasRule, DocConfig, LabelColors};
pub use context::DocContext;
pub use diagnostics::{Diagnostic, DiagnosticSeverity, DiagnosticsCollector, DocError, DocResult};
pub use dispatch::{Fallback, KindMap};
pub use etcher::{Etcher, RunReport, WrittenPage};
pub use js_doc::{JsDoc, JsDocTag};
pub use naming::{qualified_name, Scope};
pub use project::Project;
pub use render::Renderer;
pub use signature::SignatureResolver;
pub use syntax::{NodeRef, SourceTree, SyntaxKind};
pub use visibility::Visibility;
pub use walk::{DeclarationRecord, Traveler};

// Terminal output
pub use printer::RunPrinter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
