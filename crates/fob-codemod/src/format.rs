//! Formatting conventions for emitted statements
//!
//! New statements follow the style of the code around them: quote style is
//! read from the module specifier they replace, semicolons from the statement
//! they replace or sit next to.

/// Quote style for string literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Single quotes: `'hello'`
    #[default]
    Single,
    /// Double quotes: `"hello"`
    Double,
}

impl QuoteStyle {
    /// Detect the quote style of a raw string literal (`'react'` or `"react"`)
    pub fn of_literal(raw: &str) -> Self {
        if raw.starts_with('"') {
            QuoteStyle::Double
        } else {
            QuoteStyle::Single
        }
    }

    /// Quote `value`, escaping the quote character and backslashes
    pub fn quote(self, value: &str) -> String {
        let q = match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        };
        let mut out = String::with_capacity(value.len() + 2);
        out.push(q);
        for ch in value.chars() {
            if ch == q || ch == '\\' {
                out.push('\\');
            }
            out.push(ch);
        }
        out.push(q);
        out
    }
}

/// Formatting options for emitted statements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitStyle {
    /// Quote style for module specifiers
    pub quote_style: QuoteStyle,
    /// End statements with a semicolon
    pub use_semicolons: bool,
}

impl Default for EmitStyle {
    fn default() -> Self {
        Self {
            quote_style: QuoteStyle::Single,
            use_semicolons: true,
        }
    }
}

impl EmitStyle {
    /// Derive the style of an existing import statement
    ///
    /// `statement` is the full statement text, `specifier_raw` the raw module
    /// specifier literal including its quotes.
    pub fn of_statement(statement: &str, specifier_raw: &str) -> Self {
        Self {
            quote_style: QuoteStyle::of_literal(specifier_raw),
            use_semicolons: statement.trim_end().ends_with(';'),
        }
    }

    pub(crate) fn terminator(&self) -> &'static str {
        if self.use_semicolons { ";" } else { "" }
    }
}

/// Whether `name` can be written as a bare identifier
///
/// Must start with a letter, underscore, or dollar sign and contain only
/// letters, numbers, underscores, or dollar signs.
pub fn is_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
