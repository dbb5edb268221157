//! Source parsing and printing.
//!
//! - `jsx`: JSX/TSX source file parser (uses swc for AST generation)
//! - `printer`: code generation for rewritten modules and single nodes

pub mod jsx;
pub mod printer;
