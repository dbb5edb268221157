//! Core rewriting engine.
//!
//! ## Module Structure
//!
//! - `classifier`: decides which text needs translating
//! - `locator`: finds React function components
//! - `wrap`: rewrites literals inside components into translation calls
//! - `parsers`: swc-based parsing and printing
//! - `pipeline`: parse, locate, wrap and print a single file
//! - `file_scanner`: finds source files to process
//! - `context`: configuration and parallel processing for a whole run

pub mod classifier;
pub mod context;
pub mod file_scanner;
pub mod locator;
pub mod parsers;
pub mod pipeline;
pub mod wrap;

pub use context::{FileError, WrapContext, WrapResults};
