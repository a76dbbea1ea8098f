//! fob-codemod CLI - run structural codemods over a source tree.
//!
//! This crate provides the command-line interface for `fob-codemod`,
//! exposing its transforms over whole directories with parallel processing,
//! layered configuration and dry-run/check modes for CI.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`config`] - Layered configuration loading with figment
//! - [`discovery`] - Source file discovery honoring `.gitignore`
//! - `commands` - The `fc` and `imports` subcommands
//! - [`error`] - Error types with actionable hints
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages and run summaries
//!
//! # Example
//!
//! ```rust,no_run
//! use fob_codemod_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // Command dispatch...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, ConfigError, Result, ResultExt};
