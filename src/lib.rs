//! callscope - Heuristic multi-language call graph extraction
//!
//! Given a text buffer and a declared source language, callscope finds
//! function/method/class-like definitions and the call sites between them
//! using regular-expression scanning and line-oriented heuristics — no
//! parser, no AST. The output is a deterministic set of entities, calls,
//! and call sites with stable ids, suitable for graph rendering or JSON
//! export.
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **lib.rs** (this file): pure logic, no CLI concerns
//! - **bin/callscope.rs**: thin wrapper that calls the library
//!
//! # Example
//!
//! ```
//! let result = callscope::parse("def greet(name):\n    pass\n\ndef main():\n    greet('x')\n", "python");
//! assert_eq!(result.entities.len(), 2);
//! assert_eq!(result.call_sites[0].caller_name, "main");
//! ```
//!
//! # Guarantees and limitations
//!
//! Extraction is a pure function of `(buffer, language)`: no shared mutable
//! state, safe to call concurrently, no state retained between invocations.
//! Unsupported language tags and empty buffers yield empty results rather
//! than errors. Scope attribution is a nearest-preceding-declaration
//! heuristic, and declaration-vs-call disambiguation inspects line shape
//! only — both are accepted approximations, not compiler-grade analysis.

pub mod core;

pub use crate::core::{
    parse, Call, CallEdge, CallSite, Entity, EntityKind, ExportDocument, ExtractError, Extractor,
    Language, ParseResult, Result, GLOBAL_CALLER,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
