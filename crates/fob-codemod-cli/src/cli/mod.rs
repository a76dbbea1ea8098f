//! Command-line interface definition for fob-codemod.
//!
//! # Command Structure
//!
//! - `fob-codemod fc` - Canonical `FC<Props>` component declarations
//! - `fob-codemod imports` - Per-symbol Material UI imports

mod commands;
mod tests;
mod validation;

use clap::Parser;

pub use commands::{Command, FcArgs, ImportsArgs, RunArgs};
pub use validation::{parse_extension, parse_library_root, parse_wrapper_symbol};

/// fob-codemod - structural codemods for TypeScript and React
#[derive(Parser, Debug)]
#[command(
    name = "fob-codemod",
    version,
    about = "Structural codemods for TypeScript and React sources",
    long_about = "fob-codemod rewrites TypeScript/React sources by matching on the syntax tree.\n\
                  Only the matched nodes change; comments, formatting and everything else in\n\
                  the file are kept exactly as written."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows every file processed and why declarations were skipped.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
