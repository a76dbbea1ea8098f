//! Command implementations for the fob-codemod CLI.
//!
//! - `fc` - Canonical `FC<Props>` component declarations
//! - `imports` - Per-symbol library imports
//!
//! Both commands resolve their configuration, then hand the work to the
//! shared driver in [`run`].

pub mod run;

use fob_codemod::Transform;

use crate::cli::{FcArgs, ImportsArgs, RunArgs};
use crate::config::{ConfigOverrides, load_config};
use crate::error::Result;

pub use run::{FileOutcome, FileStatus, RunMode, RunSummary};

/// Execute the fc command.
///
/// # Errors
///
/// Returns configuration errors, [`crate::CliError::CheckFailed`] under
/// `--check`, and [`crate::CliError::TransformFailed`] when files failed.
pub fn fc_execute(args: FcArgs) -> Result<()> {
    let overrides = ConfigOverrides::from(&args);
    execute(Transform::Fc, &args.run, &overrides)
}

/// Execute the imports command.
///
/// # Errors
///
/// Same as [`fc_execute`].
pub fn imports_execute(args: ImportsArgs) -> Result<()> {
    let overrides = ConfigOverrides::from(&args);
    execute(Transform::Imports, &args.run, &overrides)
}

fn execute(transform: Transform, args: &RunArgs, overrides: &ConfigOverrides) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = load_config(args.config.as_deref(), &cwd, overrides)?;

    run::execute(transform, args, &config)?;
    Ok(())
}
