//! Builders for the source fragments the transforms emit
//!
//! Every node a transform synthesizes is described by a small typed value
//! and rendered to text here, so the rewrite passes never concatenate
//! source by hand.

use crate::format::{EmitStyle, is_identifier_name};

/// A single import specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSpec {
    /// `import local from '...'`
    Default { local: String },
    /// `import * as local from '...'`
    Namespace { local: String },
    /// `import { imported as local } from '...'`
    Named { imported: String, local: String },
}

impl ImportSpec {
    /// A named specifier without an alias
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::Named {
            imported: name.clone(),
            local: name,
        }
    }

    /// The name this specifier binds in the importing module
    pub fn local(&self) -> &str {
        match self {
            ImportSpec::Default { local }
            | ImportSpec::Namespace { local }
            | ImportSpec::Named { local, .. } => local,
        }
    }

    /// Render a named specifier the way it appears between braces
    fn render_named(imported: &str, local: &str, style: &EmitStyle) -> String {
        let imported = if is_identifier_name(imported) {
            imported.to_string()
        } else {
            style.quote_style.quote(imported)
        };
        if imported == local {
            imported
        } else {
            format!("{imported} as {local}")
        }
    }
}

/// An import declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    pub source: String,
    pub specifiers: Vec<ImportSpec>,
    pub type_only: bool,
}

impl ImportDecl {
    pub fn new(source: impl Into<String>, specifiers: Vec<ImportSpec>) -> Self {
        Self {
            source: source.into(),
            specifiers,
            type_only: false,
        }
    }

    pub fn type_only(mut self, type_only: bool) -> Self {
        self.type_only = type_only;
        self
    }

    /// Render the declaration as a single statement
    ///
    /// A default specifier is always written first and a namespace specifier
    /// replaces the braces, as the grammar requires.
    pub fn render(&self, style: &EmitStyle) -> String {
        let mut clauses = Vec::new();

        if let Some(local) = self.specifiers.iter().find_map(|s| match s {
            ImportSpec::Default { local } => Some(local),
            _ => None,
        }) {
            clauses.push(local.clone());
        }

        if let Some(local) = self.specifiers.iter().find_map(|s| match s {
            ImportSpec::Namespace { local } => Some(local),
            _ => None,
        }) {
            clauses.push(format!("* as {local}"));
        }

        let named: Vec<String> = self
            .specifiers
            .iter()
            .filter_map(|s| match s {
                ImportSpec::Named { imported, local } => {
                    Some(ImportSpec::render_named(imported, local, style))
                }
                _ => None,
            })
            .collect();
        if !named.is_empty() {
            clauses.push(format!("{{ {} }}", named.join(", ")));
        }

        let keyword = if self.type_only { "import type" } else { "import" };
        let source = style.quote_style.quote(&self.source);

        if clauses.is_empty() {
            format!("{keyword} {source}{}", style.terminator())
        } else {
            format!(
                "{keyword} {} from {source}{}",
                clauses.join(", "),
                style.terminator()
            )
        }
    }
}

/// A generic type reference with its type arguments, e.g. `FC<ButtonProps>`
pub fn type_reference(name: &str, arguments: &[&str]) -> String {
    if arguments.is_empty() {
        name.to_string()
    } else {
        format!("{name}<{}>", arguments.join(", "))
    }
}

/// A binding identifier with a type annotation, e.g. `Button: FC<ButtonProps>`
pub fn typed_binding(name: &str, type_annotation: &str) -> String {
    format!("{name}: {type_annotation}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::QuoteStyle;

    fn single() -> EmitStyle {
        EmitStyle::default()
    }

    #[test]
    fn renders_named_import() {
        let decl = ImportDecl::new("react", vec![ImportSpec::named("FC")]);
        assert_eq!(decl.render(&single()), "import { FC } from 'react';");
    }

    #[test]
    fn renders_default_import_without_semicolon() {
        let decl = ImportDecl::new(
            "@material-ui/core/Button",
            vec![ImportSpec::Default {
                local: "Button".into(),
            }],
        );
        let style = EmitStyle {
            quote_style: QuoteStyle::Double,
            use_semicolons: false,
        };
        assert_eq!(
            decl.render(&style),
            "import Button from \"@material-ui/core/Button\""
        );
    }

    #[test]
    fn renders_default_before_named() {
        let decl = ImportDecl::new(
            "react",
            vec![
                ImportSpec::named("FC"),
                ImportSpec::Default {
                    local: "React".into(),
                },
                ImportSpec::Named {
                    imported: "useState".into(),
                    local: "useLocalState".into(),
                },
            ],
        );
        assert_eq!(
            decl.render(&single()),
            "import React, { FC, useState as useLocalState } from 'react';"
        );
    }

    #[test]
    fn renders_namespace_and_type_only() {
        let decl = ImportDecl::new(
            "@material-ui/core",
            vec![ImportSpec::Namespace { local: "Mui".into() }],
        )
        .type_only(true);
        assert_eq!(
            decl.render(&single()),
            "import type * as Mui from '@material-ui/core';"
        );
    }

    #[test]
    fn renders_side_effect_import() {
        let decl = ImportDecl::new("./styles.css", Vec::new());
        assert_eq!(decl.render(&single()), "import './styles.css';");
    }

    #[test]
    fn quotes_string_export_names() {
        let decl = ImportDecl::new(
            "lib",
            vec![ImportSpec::Named {
                imported: "some-name".into(),
                local: "someName".into(),
            }],
        );
        assert_eq!(
            decl.render(&single()),
            "import { 'some-name' as someName } from 'lib';"
        );
    }

    #[test]
    fn builds_type_fragments() {
        let ty = type_reference("FC", &["ButtonProps<T>"]);
        assert_eq!(ty, "FC<ButtonProps<T>>");
        assert_eq!(typed_binding("Button", &ty), "Button: FC<ButtonProps<T>>");
        assert_eq!(type_reference("FC", &[]), "FC");
    }
}
