//! Core module for the callscope extraction engine
//!
//! # Architecture
//!
//! - `models`: core data structures (Entity, Call, CallSite, ParseResult)
//! - `error`: error types using thiserror (export/CLI layers only)
//! - `stripper`: comment/docstring removal before structural matching
//! - `dialect`: per-language pattern tables as configuration data
//! - `extractor`: the shared extraction engine and dispatcher
//! - `export`: JSON export boundary

pub mod dialect;
pub mod error;
pub mod export;
pub mod extractor;
pub mod models;
pub mod stripper;

// Re-export commonly used types
pub use dialect::{config_for, DialectConfig, ParamStyle};
pub use error::{ExtractError, Result};
pub use export::ExportDocument;
pub use extractor::{attribute_caller, parse, Extractor};
pub use models::{
    Call, CallEdge, CallSite, Entity, EntityKind, Language, ParseResult, GLOBAL_CALLER,
};
pub use stripper::strip_comments;
