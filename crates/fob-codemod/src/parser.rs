//! Parser façade for reading the modules a codemod rewrites
//!
//! Wraps `oxc_parser` so every transform parses the same way: one allocator
//! per source unit, parse errors surfaced as [`CodemodError::Parse`].

use crate::error::{CodemodError, Result};
use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::SourceType;

/// Parse options for reading source code
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Source type (JavaScript, TypeScript, JSX, TSX)
    pub source_type: SourceType,
    /// Name used in diagnostics (usually the file path)
    pub source_name: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::tsx()
    }
}

impl ParseOptions {
    /// Create parse options from file path (auto-detects source type)
    ///
    /// Unknown extensions fall back to TSX, the most permissive dialect the
    /// transforms target.
    pub fn from_path(path: &str) -> Self {
        Self {
            source_type: SourceType::from_path(path).unwrap_or(SourceType::tsx()),
            source_name: path.to_string(),
        }
    }

    /// Create parse options for TypeScript
    pub fn typescript() -> Self {
        Self {
            source_type: SourceType::ts(),
            source_name: "<input>.ts".to_string(),
        }
    }

    /// Create parse options for TSX
    pub fn tsx() -> Self {
        Self {
            source_type: SourceType::tsx(),
            source_name: "<input>.tsx".to_string(),
        }
    }
}

/// Parsed program with AST and metadata
pub struct ParsedProgram<'a> {
    /// The parsed AST program
    pub program: Program<'a>,
    /// Original source text
    pub source_text: &'a str,
}

impl<'a> ParsedProgram<'a> {
    /// Get the program AST
    pub fn ast(&self) -> &Program<'a> {
        &self.program
    }

    /// Slice the original source covered by `span`
    pub fn slice(&self, span: oxc_span::Span) -> &'a str {
        crate::edit::slice_source(self.source_text, span)
    }
}

/// Parse source code into an AST
///
/// # Errors
///
/// Returns [`CodemodError::Parse`] when the parser reports any error. A
/// codemod never rewrites a partially parsed module.
pub fn parse<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    options: &ParseOptions,
) -> Result<ParsedProgram<'a>> {
    let result = Parser::new(allocator, source, options.source_type).parse();

    if !result.errors.is_empty() || result.panicked {
        let diagnostics: Vec<String> = result.errors.iter().map(|err| err.to_string()).collect();
        return Err(CodemodError::parse(options.source_name.clone(), &diagnostics));
    }

    Ok(ParsedProgram {
        program: result.program,
        source_text: source,
    })
}
