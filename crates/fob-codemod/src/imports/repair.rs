//! Wrapper import repair
//!
//! After the shape normalizer rewrote at least one declaration the module
//! references the wrapper type (`FC`), which must be imported from the
//! wrapper module (`react`). At most one statement is modified or inserted.

use oxc_ast::ast::{ImportDeclaration, ImportDeclarationSpecifier};
use tracing::debug;

use super::{import_style, specifier_local, top_level_imports};
use crate::build::{ImportDecl, ImportSpec};
use crate::config::CodemodConfig;
use crate::edit::{Edit, SourceEdits};
use crate::format::EmitStyle;
use crate::parser::ParsedProgram;

/// What the repair did to the module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairAction {
    /// No declaration was rewritten
    NotNeeded,
    /// The wrapper symbol is already bound by an import from the wrapper module
    AlreadyImported,
    /// An existing wrapper-module import gained the wrapper specifier
    Extended,
    /// A new import statement was added
    Inserted,
}

#[derive(Debug)]
pub struct ImportRepair {
    pub action: RepairAction,
    pub edits: SourceEdits,
}

impl ImportRepair {
    fn unchanged(action: RepairAction) -> Self {
        Self {
            action,
            edits: SourceEdits::new(),
        }
    }

    fn with_edit(action: RepairAction, edit: Edit) -> Self {
        Self {
            action,
            edits: std::iter::once(edit).collect(),
        }
    }
}

/// Ensure the wrapper symbol is imported when `rewrites` is non-zero
pub fn repair_wrapper_import(
    parsed: &ParsedProgram<'_>,
    config: &CodemodConfig,
    rewrites: usize,
) -> ImportRepair {
    if rewrites == 0 {
        return ImportRepair::unchanged(RepairAction::NotNeeded);
    }

    let program = parsed.ast();
    let wrapper = config.wrapper_symbol.as_str();
    let wrapper_imports: Vec<&ImportDeclaration<'_>> = top_level_imports(program)
        .filter(|decl| decl.source.value.as_str() == config.wrapper_module)
        .collect();

    let already_bound = wrapper_imports
        .iter()
        .flat_map(|decl| decl.specifiers.iter().flatten())
        .any(|specifier| specifier_local(specifier) == wrapper);
    if already_bound {
        debug!(symbol = wrapper, "wrapper already imported");
        return ImportRepair::unchanged(RepairAction::AlreadyImported);
    }

    if let Some(decl) = wrapper_imports
        .iter()
        .copied()
        .find(|decl| !is_namespace_import(decl) && !is_type_only_default(decl))
    {
        debug!(symbol = wrapper, module = %config.wrapper_module, "extending existing import");
        return ImportRepair::with_edit(RepairAction::Extended, extend_import(parsed, decl, config));
    }

    let wrapper_import = ImportDecl::new(
        config.wrapper_module.clone(),
        vec![ImportSpec::named(wrapper)],
    );

    let edit = match top_level_imports(program).next() {
        Some(first) => {
            let style = import_style(parsed, first);
            Edit::insert(first.span.end, format!("\n{}", wrapper_import.render(&style)))
        }
        None => {
            let statement = wrapper_import.render(&EmitStyle::default());
            let prologue_end = program
                .directives
                .last()
                .map(|directive| directive.span.end)
                .or_else(|| program.hashbang.as_ref().map(|hashbang| hashbang.span.end));
            match prologue_end {
                Some(end) => Edit::insert(end, format!("\n{statement}")),
                None => Edit::insert(0, format!("{statement}\n")),
            }
        }
    };

    debug!(symbol = wrapper, module = %config.wrapper_module, "inserting import");
    ImportRepair::with_edit(RepairAction::Inserted, edit)
}

fn is_namespace_import(decl: &ImportDeclaration<'_>) -> bool {
    decl.specifiers.iter().flatten().any(|specifier| {
        matches!(
            specifier,
            ImportDeclarationSpecifier::ImportNamespaceSpecifier(_)
        )
    })
}

/// `import type React from 'react'` cannot also carry named bindings
fn is_type_only_default(decl: &ImportDeclaration<'_>) -> bool {
    decl.import_kind.is_type()
        && decl.specifiers.iter().flatten().any(|specifier| {
            matches!(
                specifier,
                ImportDeclarationSpecifier::ImportDefaultSpecifier(_)
            )
        })
}

/// Add the wrapper as the first named specifier of `decl`
fn extend_import(
    parsed: &ParsedProgram<'_>,
    decl: &ImportDeclaration<'_>,
    config: &CodemodConfig,
) -> Edit {
    let wrapper = config.wrapper_symbol.as_str();

    let first_named = decl.specifiers.iter().flatten().find_map(|specifier| match specifier {
        ImportDeclarationSpecifier::ImportSpecifier(named) => Some(named.span.start),
        _ => None,
    });
    if let Some(start) = first_named {
        return Edit::insert(start, format!("{wrapper}, "));
    }

    let default_end = decl.specifiers.iter().flatten().find_map(|specifier| match specifier {
        ImportDeclarationSpecifier::ImportDefaultSpecifier(default) => Some(default.span.end),
        _ => None,
    });
    if let Some(end) = default_end {
        return Edit::insert(end, format!(", {{ {wrapper} }}"));
    }

    // `import 'react'` or `import {} from 'react'`
    let rendered = ImportDecl::new(config.wrapper_module.clone(), vec![ImportSpec::named(wrapper)])
        .type_only(decl.import_kind.is_type())
        .render(&import_style(parsed, decl));
    Edit::replace(decl.span, rendered)
}
