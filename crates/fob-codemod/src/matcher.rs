//! Structural matching of declaration candidates
//!
//! The collector walks the whole program once and turns every declaration
//! that could take the canonical shape into a typed [`Candidate`]. Nothing
//! is filtered here beyond the node kind; eligibility lives in
//! [`crate::rules`] so each condition can be inspected and tested on its own.

use oxc_ast::ast::{
    BindingPatternKind, Declaration, Expression, FormalParameters, Function, Program, TSType,
    TSTypeName, VariableDeclarator,
};
use oxc_ast_visit::{Visit, walk};
use oxc_span::Span;

use crate::edit::slice_source;

/// A declaration that may be rewritten into the canonical shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub shape: Shape,
    /// Bound name; `None` for destructured bindings and anonymous functions
    pub name: Option<Binding>,
    pub first_param: FirstParam,
    /// Number of parameters, including a rest parameter
    pub param_count: usize,
    pub has_type_parameters: bool,
    pub span: Span,
}

/// A bound identifier and where it sits in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub span: Span,
}

/// The two declaration forms the normalizer understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// `const Name = (...) => ...` or `const Name = function (...) {...}`
    Assigned {
        init: InitKind,
        /// `: Type` already on the binding
        binding_annotation: Option<Span>,
    },
    /// `function Name(...) {...}`
    Declared(DeclaredFunction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitKind {
    Arrow,
    FunctionExpression,
}

/// Header and body layout of a function declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredFunction {
    /// `[async] function Name`, up to the opening parenthesis
    pub header: Span,
    pub params: Span,
    /// End of the parameter list, or of the return type when there is one
    pub signature_end: u32,
    pub body: Option<Span>,
    pub is_async: bool,
    pub is_generator: bool,
    pub has_this_param: bool,
}

/// What the first parameter looks like
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirstParam {
    /// No positional parameter at all
    Missing,
    /// Identifier, array pattern, or a pattern with a default value
    Other,
    /// `{ ... }` optionally followed by `: Type`
    Object {
        pattern: Span,
        annotation: Option<ParamAnnotation>,
    },
}

/// Type annotation on a destructured parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamAnnotation {
    /// Range removed when the annotation moves onto the binding
    pub strip: Span,
    /// Set when the annotation is a single named type reference
    pub type_ref: Option<PropTypeRef>,
}

/// A named type reference such as `ButtonProps` or `ListProps<Item>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropTypeRef {
    /// Referenced name without type arguments
    pub name: String,
    /// Source text of the whole reference, type arguments included
    pub text: String,
}

/// Collect every declaration candidate in `program`, in source order
pub fn collect_candidates(program: &Program<'_>, source: &str) -> Vec<Candidate> {
    let mut collector = CandidateCollector {
        source,
        candidates: Vec::new(),
    };
    walk::walk_program(&mut collector, program);

    let mut candidates = collector.candidates;
    candidates.sort_by_key(|candidate| candidate.span.start);
    candidates
}

struct CandidateCollector<'s> {
    source: &'s str,
    candidates: Vec<Candidate>,
}

impl<'a> Visit<'a> for CandidateCollector<'_> {
    fn visit_variable_declarator(&mut self, declarator: &VariableDeclarator<'a>) {
        if let Some(candidate) = assigned_candidate(declarator, self.source) {
            self.candidates.push(candidate);
        }
        walk::walk_variable_declarator(self, declarator);
    }

    // Function declarations in statement position and behind `export`.
    // `export default function` is visited as a function, not a declaration,
    // and never becomes a candidate.
    fn visit_declaration(&mut self, declaration: &Declaration<'a>) {
        if let Declaration::FunctionDeclaration(function) = declaration {
            self.candidates.push(declared_candidate(function, self.source));
        }
        walk::walk_declaration(self, declaration);
    }
}

fn assigned_candidate(declarator: &VariableDeclarator<'_>, source: &str) -> Option<Candidate> {
    let (init, params, has_type_parameters) = match declarator.init.as_ref()? {
        Expression::ArrowFunctionExpression(arrow) => (
            InitKind::Arrow,
            &*arrow.params,
            arrow.type_parameters.is_some(),
        ),
        Expression::FunctionExpression(function) => (
            InitKind::FunctionExpression,
            &*function.params,
            function.type_parameters.is_some(),
        ),
        _ => return None,
    };

    let (name, binding_annotation) = match &declarator.id.kind {
        BindingPatternKind::BindingIdentifier(ident) => {
            let annotation = declarator
                .id
                .type_annotation
                .as_ref()
                .map(|ann| ann.span);
            (
                Some(Binding {
                    name: ident.name.to_string(),
                    span: ident.span,
                }),
                annotation,
            )
        }
        _ => (None, None),
    };

    Some(Candidate {
        shape: Shape::Assigned {
            init,
            binding_annotation,
        },
        name,
        first_param: first_param(params, source),
        param_count: param_count(params),
        has_type_parameters,
        span: declarator.span,
    })
}

fn declared_candidate(function: &Function<'_>, source: &str) -> Candidate {
    Candidate {
        shape: Shape::Declared(DeclaredFunction {
            header: Span::new(function.span.start, function.params.span.start),
            params: function.params.span,
            signature_end: function
                .return_type
                .as_ref()
                .map_or(function.params.span.end, |ret| ret.span.end),
            body: function.body.as_ref().map(|body| body.span),
            is_async: function.r#async,
            is_generator: function.generator,
            has_this_param: function.this_param.is_some(),
        }),
        name: function.id.as_ref().map(|id| Binding {
            name: id.name.to_string(),
            span: id.span,
        }),
        first_param: first_param(&function.params, source),
        param_count: param_count(&function.params),
        has_type_parameters: function.type_parameters.is_some(),
        span: function.span,
    }
}

fn param_count(params: &FormalParameters<'_>) -> usize {
    params.items.len() + usize::from(params.rest.is_some())
}

fn first_param(params: &FormalParameters<'_>, source: &str) -> FirstParam {
    let Some(param) = params.items.first() else {
        return FirstParam::Missing;
    };

    let BindingPatternKind::ObjectPattern(object) = &param.pattern.kind else {
        return FirstParam::Other;
    };

    let Some(ann) = param.pattern.type_annotation.as_ref() else {
        return FirstParam::Object {
            pattern: object.span,
            annotation: None,
        };
    };

    // The pattern span covers the annotation as well
    let strip_start = annotation_start(source, ann.span.start);
    FirstParam::Object {
        pattern: Span::new(object.span.start, strip_start),
        annotation: Some(ParamAnnotation {
            strip: Span::new(strip_start, ann.span.end),
            type_ref: named_type_ref(&ann.type_annotation, source),
        }),
    }
}

/// Start of `[?] : Type`, pulled back over whitespace and an optional marker
fn annotation_start(source: &str, colon: u32) -> u32 {
    let head = source[..colon as usize].trim_end();
    let head = head.strip_suffix('?').map_or(head, str::trim_end);
    head.len() as u32
}

/// A single type reference whose name is a plain identifier
///
/// Unions, intersections, literal object types and qualified names such as
/// `React.Props` do not qualify.
fn named_type_ref(ty: &TSType<'_>, source: &str) -> Option<PropTypeRef> {
    let TSType::TSTypeReference(reference) = ty else {
        return None;
    };
    let TSTypeName::IdentifierReference(ident) = &reference.type_name else {
        return None;
    };

    Some(PropTypeRef {
        name: ident.name.to_string(),
        text: slice_source(source, reference.span).to_string(),
    })
}
