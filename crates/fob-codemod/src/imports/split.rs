//! Per-symbol import splitting for component libraries
//!
//! ```text
//! import { Button, ButtonProps } from '@material-ui/core';
//! ```
//!
//! becomes
//!
//! ```text
//! import Button from '@material-ui/core/Button';
//! import { ButtonProps } from '@material-ui/core/Button';
//! ```
//!
//! Named specifiers whose exported name contains `Props` stay named and are
//! imported from the subpath with `Props` removed; every other named
//! specifier becomes a default import of its own subpath.

use oxc_ast::ast::{ImportDeclaration, ImportDeclarationSpecifier};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::{import_style, module_export_name, top_level_imports, with_trailing_newline};
use crate::build::{ImportDecl, ImportSpec};
use crate::edit::{Edit, SourceEdits, line_indent};
use crate::parser::ParsedProgram;

/// Marker that keeps a specifier named instead of turning it into a default import
const PROPS_MARKER: &str = "Props";

#[derive(Debug, Default)]
pub struct SplitOutcome {
    /// Root imports replaced (or dropped, for an empty specifier list)
    pub statements_split: usize,
    /// Statements written in their place
    pub statements_emitted: usize,
    pub edits: SourceEdits,
}

/// Split every import of a library root in `libraries`
pub fn split_library_imports(parsed: &ParsedProgram<'_>, libraries: &[String]) -> SplitOutcome {
    let mut outcome = SplitOutcome::default();
    let mut seen = FxHashSet::default();

    for library in libraries {
        if !seen.insert(library.as_str()) {
            continue;
        }

        for decl in top_level_imports(parsed.ast())
            .filter(|decl| decl.source.value.as_str() == library.as_str())
        {
            let Some(statements) = split_declaration(decl, library) else {
                continue;
            };

            let span = if statements.is_empty() {
                with_trailing_newline(parsed.source_text, decl.span)
            } else {
                decl.span
            };

            let style = import_style(parsed, decl);
            let separator = format!("\n{}", line_indent(parsed.source_text, decl.span.start));
            let text = statements
                .iter()
                .map(|statement| statement.render(&style))
                .collect::<Vec<_>>()
                .join(&separator);

            debug!(
                library = library.as_str(),
                emitted = statements.len(),
                "splitting library import"
            );
            outcome.statements_split += 1;
            outcome.statements_emitted += statements.len();
            outcome.edits.push(Edit::replace(span, text));
        }
    }

    outcome
}

/// Replacement statements for one root import
///
/// `None` keeps the import as written: side-effect imports, imports with
/// attributes or a phase, and imports without named specifiers.
fn split_declaration(decl: &ImportDeclaration<'_>, library: &str) -> Option<Vec<ImportDecl>> {
    if decl.with_clause.is_some() || decl.phase.is_some() {
        trace!(library, "keeping import with attributes or phase");
        return None;
    }

    let Some(specifiers) = decl.specifiers.as_ref() else {
        trace!(library, "keeping side-effect import");
        return None;
    };

    let type_only = decl.import_kind.is_type();
    let mut residual = Vec::new();
    let mut split = Vec::new();

    for specifier in specifiers.iter() {
        match specifier {
            ImportDeclarationSpecifier::ImportDefaultSpecifier(default) => {
                residual.push(ImportSpec::Default {
                    local: default.local.name.to_string(),
                });
            }
            ImportDeclarationSpecifier::ImportNamespaceSpecifier(namespace) => {
                residual.push(ImportSpec::Namespace {
                    local: namespace.local.name.to_string(),
                });
            }
            ImportDeclarationSpecifier::ImportSpecifier(named) => {
                let imported = module_export_name(&named.imported);
                let local = named.local.name.to_string();
                let type_only = type_only || named.import_kind.is_type();

                let statement = if imported.contains(PROPS_MARKER) {
                    let subpath = imported.replacen(PROPS_MARKER, "", 1);
                    ImportDecl::new(
                        format!("{library}/{subpath}"),
                        vec![ImportSpec::Named { imported, local }],
                    )
                } else {
                    ImportDecl::new(
                        format!("{library}/{imported}"),
                        vec![ImportSpec::Default { local }],
                    )
                };
                split.push(statement.type_only(type_only));
            }
        }
    }

    if split.is_empty() && !residual.is_empty() {
        trace!(library, "keeping import without named specifiers");
        return None;
    }

    let mut statements = Vec::with_capacity(split.len() + 1);
    if !residual.is_empty() {
        statements.push(ImportDecl::new(library, residual).type_only(type_only));
    }
    statements.extend(split);
    Some(statements)
}
