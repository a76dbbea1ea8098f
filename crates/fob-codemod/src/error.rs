//! Error types for codemod transforms

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while transforming a source unit
#[derive(Error, Debug, Diagnostic)]
pub enum CodemodError {
    /// The source could not be parsed
    #[error("Failed to parse {source_name}: {message}")]
    #[diagnostic(
        code(fob::codemod::parse_failed),
        help("codemods only run on syntactically valid JavaScript/TypeScript")
    )]
    Parse {
        source_name: String,
        message: String,
    },

    /// Two rewrites touched the same region of the source
    #[error("Overlapping edits at {}..{} and {}..{}", first.0, first.1, second.0, second.1)]
    #[diagnostic(code(fob::codemod::edit_conflict))]
    EditConflict { first: (u32, u32), second: (u32, u32) },

    /// An edit points outside the source or splits a UTF-8 character
    #[error("Edit range {start}..{end} is not valid for a source of {len} bytes")]
    #[diagnostic(code(fob::codemod::edit_out_of_bounds))]
    EditOutOfBounds { start: u32, end: u32, len: usize },

    /// Configuration failed validation
    #[error("Invalid configuration: {field}{}", reason.as_ref().map(|r| format!(" - {}", r)).unwrap_or_default())]
    #[diagnostic(code(fob::codemod::invalid_config))]
    InvalidConfig {
        field: String,
        reason: Option<String>,
    },
}

impl CodemodError {
    /// Create a Parse error from parser diagnostics
    pub fn parse(source_name: impl Into<String>, diagnostics: &[String]) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            message: diagnostics.join(", "),
        }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: Some(reason.into()),
        }
    }
}

/// Result type for codemod operations
pub type Result<T> = std::result::Result<T, CodemodError>;
