//! twrap - automatic i18n wrapping for React components
//!
//! twrap is a CLI tool and library that finds translatable literals inside
//! React function components (JSX/TSX) and rewrites them into calls to a
//! translation function, e.g. `"안녕"` into `t("안녕")`.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Component locator, literal rewriter and file pipeline

pub mod cli;
pub mod config;
pub mod core;
