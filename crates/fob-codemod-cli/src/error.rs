//! Error handling for the codemod CLI.
//!
//! - **Top-level errors** (`CliError`) represent broad categories of failures
//! - **Domain-specific errors** (`ConfigError`) carry a hint for the user
//! - **Error conversion** is automatic via `#[from]` attributes
//!
//! # Example
//!
//! ```rust,no_run
//! use fob_codemod_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_source(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod diagnostic;

use std::path::PathBuf;

use fob_codemod::CodemodError;
use thiserror::Error;

pub use diagnostic::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors from the codemod library
    #[error(transparent)]
    Codemod(#[from] CodemodError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed
    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] ignore::Error),

    /// Some files could not be transformed
    #[error("{count} file(s) could not be transformed\n\nHint: Run with --verbose for details, or fix the reported syntax errors")]
    TransformFailed {
        /// Number of files that failed
        count: usize,
    },

    /// `--check` found files that would be rewritten
    #[error("{count} file(s) would be rewritten\n\nHint: Run without --check to apply the codemod")]
    CheckFailed {
        /// Number of files that would change
        count: usize,
    },
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file doesn't exist at the given location
    #[error("Config file not found: {}\n\nHint: Create a fob-codemod.toml file or pass an existing file to --config", .0.display())]
    NotFound(PathBuf),

    /// Config file extension is not a supported format
    #[error("Unsupported config format: {}\n\nHint: Use a .toml, .json, .yaml or .yml file", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Replace a not-found I/O error with [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }
}

impl From<CodemodError> for ConfigError {
    fn from(err: CodemodError) -> Self {
        match err {
            CodemodError::InvalidConfig { field, reason } => ConfigError::InvalidValue {
                field,
                value: reason.unwrap_or_else(|| "invalid".to_string()),
                hint: "Check fob-codemod.toml, FOB_CODEMOD_* variables and command-line flags"
                    .to_string(),
            },
            other => ConfigError::InvalidValue {
                field: "configuration".to_string(),
                value: other.to_string(),
                hint: "Check fob-codemod.toml syntax and field types".to_string(),
            },
        }
    }
}
