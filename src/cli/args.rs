//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `wrap`: Rewrite literals inside React components into translation calls
//! - `init`: Initialize twrap configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by commands that process source files.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Name of the translation function (overrides config file)
    #[arg(long)]
    pub translation_fn: Option<String>,

    /// Unicode script that marks text for translation (overrides config file).
    /// Can be specified multiple times: --script Han --script Hiragana
    #[arg(long = "script")]
    pub scripts: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct WrapArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct WrapCommand {
    #[command(flatten)]
    pub args: WrapArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Wrap translatable literals inside React components with t(...) calls
    Wrap(WrapCommand),
    /// Initialize a new .twraprc.json configuration file
    Init,
}
