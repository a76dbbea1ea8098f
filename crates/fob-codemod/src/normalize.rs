//! Shape normalizer
//!
//! Rewrites every eligible candidate into the canonical declaration
//!
//! ```text
//! const Button: FC<ButtonProps> = ({ label }) => ...
//! ```
//!
//! Assigned candidates keep their statement, keyword and function kind; only
//! the binding gains the wrapper type and the first parameter loses its
//! annotation. Declared candidates are turned into a `const` bound to an arrow
//! function with the same parameters, return type and body.

use oxc_span::Span;
use tracing::{debug, trace};

use crate::build::{type_reference, typed_binding};
use crate::config::CodemodConfig;
use crate::edit::{Edit, SourceEdits, slice_source};
use crate::matcher::{Candidate, FirstParam, ParamAnnotation, Shape, collect_candidates};
use crate::parser::ParsedProgram;
use crate::rules::check_eligibility;

/// Result of running the normalizer over one module
#[derive(Debug, Default)]
pub struct NormalizeOutcome {
    /// Number of declarations rewritten; import repair runs only when non-zero
    pub rewrites: usize,
    pub edits: SourceEdits,
}

/// The rewrite target for one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalDeclaration {
    name: String,
    name_end: u32,
    /// `Wrapper<PropType>`
    wrapper_type: String,
    /// Parameter annotation removed from the function
    strip: Span,
    form: CanonicalForm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CanonicalForm {
    Assigned { binding_annotation: Option<Span> },
    /// `arrow_at` is the end of the signature; a line break may not precede `=>`
    Declared { header: Span, is_async: bool, arrow_at: u32 },
}

impl CanonicalDeclaration {
    /// Build the canonical form of `candidate`
    ///
    /// Re-validates the parts the rewrite depends on and returns `None` when
    /// any is missing, so a candidate that slipped past the rules is left
    /// unmodified instead of producing broken output.
    pub fn from_candidate(
        candidate: &Candidate,
        source: &str,
        config: &CodemodConfig,
    ) -> Option<Self> {
        let binding = candidate.name.as_ref()?;
        let FirstParam::Object {
            annotation: Some(ParamAnnotation {
                strip,
                type_ref: Some(type_ref),
            }),
            ..
        } = &candidate.first_param
        else {
            return None;
        };

        let form = match &candidate.shape {
            Shape::Assigned {
                binding_annotation, ..
            } => CanonicalForm::Assigned {
                binding_annotation: *binding_annotation,
            },
            Shape::Declared(function) => {
                let header = slice_source(source, function.header);
                if !(header.starts_with("function") || header.starts_with("async")) {
                    return None;
                }
                function.body?;
                CanonicalForm::Declared {
                    header: function.header,
                    is_async: function.is_async,
                    arrow_at: function.signature_end,
                }
            }
        };

        Some(Self {
            name: binding.name.clone(),
            name_end: binding.span.end,
            wrapper_type: type_reference(&config.wrapper_symbol, &[type_ref.text.as_str()]),
            strip: *strip,
            form,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The binding's new type, e.g. `FC<ButtonProps>`
    pub fn wrapper_type(&self) -> &str {
        &self.wrapper_type
    }

    /// Source edits that turn the original declaration into this one
    pub fn edits(&self, source: &str) -> Vec<Edit> {
        let mut edits = Vec::with_capacity(3);

        match &self.form {
            CanonicalForm::Assigned { binding_annotation } => {
                let annotation = format!(": {}", self.wrapper_type);
                edits.push(match binding_annotation {
                    Some(span) => Edit::replace(*span, annotation),
                    None => Edit::insert(self.name_end, annotation),
                });
                edits.push(Edit::delete(self.strip));
            }
            CanonicalForm::Declared {
                header,
                is_async,
                arrow_at,
            } => {
                let async_kw = if *is_async { "async " } else { "" };
                edits.push(Edit::replace(
                    *header,
                    format!(
                        "const {} = {async_kw}",
                        typed_binding(&self.name, &self.wrapper_type)
                    ),
                ));
                edits.push(Edit::delete(self.strip));

                let spaced = source[*arrow_at as usize..]
                    .chars()
                    .next()
                    .is_some_and(char::is_whitespace);
                let arrow = if spaced { " =>" } else { " => " };
                edits.push(Edit::insert(*arrow_at, arrow));
            }
        }

        edits
    }
}

/// Rewrite every eligible declaration in `parsed`
pub fn normalize(parsed: &ParsedProgram<'_>, config: &CodemodConfig) -> NormalizeOutcome {
    let source = parsed.source_text;
    let mut outcome = NormalizeOutcome::default();

    for candidate in collect_candidates(parsed.ast(), source) {
        let name = candidate.name.as_ref().map_or("<anonymous>", |b| b.name.as_str());

        if let Err(reason) = check_eligibility(&candidate, config) {
            trace!(name, %reason, "skipping declaration");
            continue;
        }

        let Some(canonical) = CanonicalDeclaration::from_candidate(&candidate, source, config)
        else {
            debug!(name, "declaration matched but could not be rebuilt, leaving it unmodified");
            continue;
        };

        debug!(
            name,
            wrapper = canonical.wrapper_type(),
            "rewriting declaration"
        );
        for edit in canonical.edits(source) {
            outcome.edits.push(edit);
        }
        outcome.rewrites += 1;
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ParseOptions, parse};
    use oxc_allocator::Allocator;

    fn run(source: &str) -> (String, usize) {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, source, &ParseOptions::tsx()).unwrap();
        let outcome = normalize(&parsed, &CodemodConfig::default());
        (outcome.edits.apply(source).unwrap(), outcome.rewrites)
    }

    #[test]
    fn rewrites_assigned_arrow() {
        let (code, rewrites) = run("const Foo = ({bar}: BarProps) => null");
        assert_eq!(code, "const Foo: FC<BarProps> = ({bar}) => null");
        assert_eq!(rewrites, 1);
    }

    #[test]
    fn rewrites_declared_function() {
        let (code, rewrites) = run("function Foo({bar}: BarProps) { return null }");
        assert_eq!(code, "const Foo: FC<BarProps> = ({bar}) => { return null }");
        assert_eq!(rewrites, 1);
    }

    #[test]
    fn keeps_export_async_and_return_type() {
        let (code, _) = run("export async function Foo({ bar }: BarProps): Promise<null> {\n  return null;\n}");
        assert_eq!(
            code,
            "export const Foo: FC<BarProps> = async ({ bar }): Promise<null> => {\n  return null;\n}"
        );
    }

    #[test]
    fn inserts_arrow_space_when_body_is_tight() {
        let (code, _) = run("function Foo({ bar }: BarProps){ return null }");
        assert_eq!(code, "const Foo: FC<BarProps> = ({ bar }) => { return null }");
    }

    #[test]
    fn arrow_stays_on_the_signature_line() {
        let (code, _) = run("function Foo({ bar }: BarProps)\n{\n  return null;\n}");
        assert_eq!(code, "const Foo: FC<BarProps> = ({ bar }) =>\n{\n  return null;\n}");
        assert!(parse(&Allocator::default(), &code, &ParseOptions::tsx()).is_ok());

        let (code, _) = run("function Foo({ bar }: BarProps) // renders bar\n{ return null }");
        assert_eq!(
            code,
            "const Foo: FC<BarProps> = ({ bar }) => // renders bar\n{ return null }"
        );
        assert!(parse(&Allocator::default(), &code, &ParseOptions::tsx()).is_ok());
    }

    #[test]
    fn arrow_follows_return_type_on_its_own_line() {
        let (code, _) = run("function Foo({ bar }: BarProps): JSX.Element\n{ return null }");
        assert_eq!(
            code,
            "const Foo: FC<BarProps> = ({ bar }): JSX.Element =>\n{ return null }"
        );
    }

    #[test]
    fn strips_spaced_annotation() {
        let (code, _) = run("const Foo = ({ bar } : BarProps) => null;");
        assert_eq!(code, "const Foo: FC<BarProps> = ({ bar }) => null;");
    }

    #[test]
    fn keeps_function_expressions_and_keyword() {
        let (code, _) = run("let Foo = function ({ bar }: BarProps) { return null };");
        assert_eq!(
            code,
            "let Foo: FC<BarProps> = function ({ bar }) { return null };"
        );
    }

    #[test]
    fn replaces_existing_binding_annotation() {
        let (code, _) = run("const Foo: React.FC<BarProps> = ({ bar }: BarProps) => null;");
        assert_eq!(code, "const Foo: FC<BarProps> = ({ bar }) => null;");
    }

    #[test]
    fn preserves_remaining_parameters() {
        let (code, _) = run(
            "function Foo({ a = 1, ...rest }: FooProps, ref: Ref, extra = 2, ...more: number[]) { return ref }",
        );
        assert_eq!(
            code,
            "const Foo: FC<FooProps> = ({ a = 1, ...rest }, ref: Ref, extra = 2, ...more: number[]) => { return ref }"
        );
    }

    #[test]
    fn preserves_generic_arguments_of_prop_type() {
        let (code, _) = run("const List = ({ items }: ListProps<Item>) => null;");
        assert_eq!(code, "const List: FC<ListProps<Item>> = ({ items }) => null;");
    }

    #[test]
    fn rewrites_all_candidates_including_nested() {
        let source = "function Outer({ a }: OuterProps) {\n  const Inner = ({ b }: InnerProps) => <b>{b}</b>;\n  return <Inner b={a} />;\n}\nconst Other = ({ c }: OtherProps) => c;";
        let (code, rewrites) = run(source);
        assert_eq!(rewrites, 3);
        assert_eq!(
            code,
            "const Outer: FC<OuterProps> = ({ a }) => {\n  const Inner: FC<InnerProps> = ({ b }) => <b>{b}</b>;\n  return <Inner b={a} />;\n}\nconst Other: FC<OtherProps> = ({ c }) => c;"
        );
    }

    #[test]
    fn leaves_ineligible_declarations_untouched() {
        let source = "const A = ({ a }: AOptions) => null;\nconst B = <T,>({ b }: BProps) => null;\nfunction C(props: CProps) { return null }";
        let (code, rewrites) = run(source);
        assert_eq!(code, source);
        assert_eq!(rewrites, 0);
    }

    #[test]
    fn is_idempotent() {
        let (once, _) = run("function Foo({bar}: BarProps) { return null }\nconst Baz = ({q}: BazProps) => q;");
        let (twice, rewrites) = run(&once);
        assert_eq!(twice, once);
        assert_eq!(rewrites, 0);
    }

    #[test]
    fn uses_configured_wrapper() {
        let allocator = Allocator::default();
        let source = "const Foo = ({ bar }: BarProps) => null;";
        let parsed = parse(&allocator, source, &ParseOptions::tsx()).unwrap();
        let config = CodemodConfig {
            wrapper_symbol: "VFC".into(),
            ..CodemodConfig::default()
        };
        let outcome = normalize(&parsed, &config);
        assert_eq!(
            outcome.edits.apply(source).unwrap(),
            "const Foo: VFC<BarProps> = ({ bar }) => null;"
        );
    }
}
