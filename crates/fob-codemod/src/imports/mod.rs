//! Import declaration rewrites
//!
//! - [`repair`]: makes sure the wrapper type is imported after the shape
//!   normalizer introduced references to it
//! - [`split`]: turns root imports of a component library into one
//!   per-symbol import each

pub mod repair;
pub mod split;

use oxc_ast::ast::{
    ImportDeclaration, ImportDeclarationSpecifier, ModuleExportName, Program, Statement,
};
use oxc_span::Span;

use crate::format::EmitStyle;
use crate::parser::ParsedProgram;

pub use repair::{ImportRepair, RepairAction, repair_wrapper_import};
pub use split::{SplitOutcome, split_library_imports};

/// Top-level import declarations in source order
pub(crate) fn top_level_imports<'p, 'a>(
    program: &'p Program<'a>,
) -> impl Iterator<Item = &'p ImportDeclaration<'a>> {
    program.body.iter().filter_map(|stmt| match stmt {
        Statement::ImportDeclaration(decl) => Some(&**decl),
        _ => None,
    })
}

/// The exported name a specifier refers to
pub(crate) fn module_export_name(name: &ModuleExportName<'_>) -> String {
    match name {
        ModuleExportName::IdentifierName(ident) => ident.name.to_string(),
        ModuleExportName::IdentifierReference(ident) => ident.name.to_string(),
        ModuleExportName::StringLiteral(lit) => lit.value.to_string(),
    }
}

/// The name a specifier binds in the importing module
pub(crate) fn specifier_local<'a>(specifier: &ImportDeclarationSpecifier<'a>) -> &'a str {
    match specifier {
        ImportDeclarationSpecifier::ImportSpecifier(s) => s.local.name.as_str(),
        ImportDeclarationSpecifier::ImportDefaultSpecifier(s) => s.local.name.as_str(),
        ImportDeclarationSpecifier::ImportNamespaceSpecifier(s) => s.local.name.as_str(),
    }
}

/// Quote and semicolon style of an existing import
pub(crate) fn import_style(parsed: &ParsedProgram<'_>, decl: &ImportDeclaration<'_>) -> EmitStyle {
    EmitStyle::of_statement(parsed.slice(decl.span), parsed.slice(decl.source.span))
}

/// `span` extended over one trailing line break, if present
pub(crate) fn with_trailing_newline(source: &str, span: Span) -> Span {
    let rest = &source[span.end as usize..];
    let extra = if rest.starts_with("\r\n") {
        2
    } else if rest.starts_with('\n') {
        1
    } else {
        0
    };
    Span::new(span.start, span.end + extra)
}
