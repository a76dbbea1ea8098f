//! fob-codemod CLI - structural TypeScript/React codemods.
//!
//! This is the main entry point for the codemod CLI. It handles command-line
//! argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use fob_codemod_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);
    ui::set_quiet(args.quiet);

    let result = match args.command {
        cli::Command::Fc(fc_args) => commands::fc_execute(fc_args),
        cli::Command::Imports(imports_args) => commands::imports_execute(imports_args),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
