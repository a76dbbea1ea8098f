//! Eligibility rules for the canonical declaration rewrite
//!
//! Each [`Rule`] is one shape predicate over a [`Candidate`]. A candidate is
//! eligible when every rule passes; the first failing rule names the
//! [`SkipReason`].

use std::fmt;

use crate::config::CodemodConfig;
use crate::matcher::{Candidate, FirstParam, ParamAnnotation, Shape};

/// Why a candidate was left untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoParameters,
    NotObjectPattern,
    MissingAnnotation,
    NotNamedReference,
    SuffixMismatch { type_name: String },
    HasTypeParameters,
    Anonymous,
    MissingBody,
    Generator,
    ThisParameter,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoParameters => write!(f, "function takes no parameters"),
            SkipReason::NotObjectPattern => write!(f, "first parameter is not destructured"),
            SkipReason::MissingAnnotation => write!(f, "first parameter has no type annotation"),
            SkipReason::NotNamedReference => {
                write!(f, "first parameter type is not a single named type")
            }
            SkipReason::SuffixMismatch { type_name } => {
                write!(f, "type '{type_name}' does not carry the props suffix")
            }
            SkipReason::HasTypeParameters => write!(f, "function already declares type parameters"),
            SkipReason::Anonymous => write!(f, "declaration has no plain name"),
            SkipReason::MissingBody => write!(f, "function has no body"),
            SkipReason::Generator => write!(f, "generator functions cannot become arrows"),
            SkipReason::ThisParameter => write!(f, "function declares a `this` parameter"),
        }
    }
}

/// A single eligibility predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    HasName,
    FirstParamIsObjectPattern,
    ParamIsAnnotated,
    AnnotationIsNamedReference,
    SuffixMatches,
    NoTypeParameters,
    HasBody,
    NotGenerator,
    NoThisParameter,
}

impl Rule {
    /// All rules, in the order they are evaluated
    pub const ALL: &'static [Rule] = &[
        Rule::HasName,
        Rule::FirstParamIsObjectPattern,
        Rule::ParamIsAnnotated,
        Rule::AnnotationIsNamedReference,
        Rule::SuffixMatches,
        Rule::NoTypeParameters,
        Rule::HasBody,
        Rule::NotGenerator,
        Rule::NoThisParameter,
    ];

    pub fn check(self, candidate: &Candidate, config: &CodemodConfig) -> Result<(), SkipReason> {
        match self {
            Rule::HasName => candidate
                .name
                .as_ref()
                .map(|_| ())
                .ok_or(SkipReason::Anonymous),
            Rule::FirstParamIsObjectPattern => match candidate.first_param {
                FirstParam::Missing => Err(SkipReason::NoParameters),
                FirstParam::Other => Err(SkipReason::NotObjectPattern),
                FirstParam::Object { .. } => Ok(()),
            },
            Rule::ParamIsAnnotated => match &candidate.first_param {
                FirstParam::Object {
                    annotation: Some(_),
                    ..
                } => Ok(()),
                _ => Err(SkipReason::MissingAnnotation),
            },
            Rule::AnnotationIsNamedReference => match &candidate.first_param {
                FirstParam::Object {
                    annotation:
                        Some(ParamAnnotation {
                            type_ref: Some(_), ..
                        }),
                    ..
                } => Ok(()),
                _ => Err(SkipReason::NotNamedReference),
            },
            Rule::SuffixMatches => match &candidate.first_param {
                FirstParam::Object {
                    annotation:
                        Some(ParamAnnotation {
                            type_ref: Some(type_ref),
                            ..
                        }),
                    ..
                } if type_ref.name.ends_with(&config.suffix) => Ok(()),
                FirstParam::Object {
                    annotation:
                        Some(ParamAnnotation {
                            type_ref: Some(type_ref),
                            ..
                        }),
                    ..
                } => Err(SkipReason::SuffixMismatch {
                    type_name: type_ref.name.clone(),
                }),
                _ => Err(SkipReason::NotNamedReference),
            },
            Rule::NoTypeParameters => {
                if candidate.has_type_parameters {
                    Err(SkipReason::HasTypeParameters)
                } else {
                    Ok(())
                }
            }
            Rule::HasBody => match &candidate.shape {
                Shape::Declared(function) if function.body.is_none() => {
                    Err(SkipReason::MissingBody)
                }
                _ => Ok(()),
            },
            Rule::NotGenerator => match &candidate.shape {
                Shape::Declared(function) if function.is_generator => Err(SkipReason::Generator),
                _ => Ok(()),
            },
            Rule::NoThisParameter => match &candidate.shape {
                Shape::Declared(function) if function.has_this_param => {
                    Err(SkipReason::ThisParameter)
                }
                _ => Ok(()),
            },
        }
    }
}

/// Run every rule against `candidate`
pub fn check_eligibility(candidate: &Candidate, config: &CodemodConfig) -> Result<(), SkipReason> {
    Rule::ALL
        .iter()
        .try_for_each(|rule| rule.check(candidate, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::collect_candidates;
    use crate::parser::{ParseOptions, parse};
    use oxc_allocator::Allocator;

    fn first_verdict(source: &str) -> Result<(), SkipReason> {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, source, &ParseOptions::tsx()).unwrap();
        let candidates = collect_candidates(parsed.ast(), source);
        check_eligibility(&candidates[0], &CodemodConfig::default())
    }

    #[test]
    fn accepts_canonical_candidates() {
        assert_eq!(first_verdict("const Foo = ({ bar }: BarProps) => null;"), Ok(()));
        assert_eq!(
            first_verdict("const Foo = function ({ bar }: BarProps) { return null };"),
            Ok(())
        );
        assert_eq!(
            first_verdict("async function Foo({ bar }: BarProps) { return null }"),
            Ok(())
        );
    }

    #[test]
    fn suffix_gate() {
        assert_eq!(
            first_verdict("const Foo = ({ bar }: BarOptions) => null;"),
            Err(SkipReason::SuffixMismatch {
                type_name: "BarOptions".into()
            })
        );
    }

    #[test]
    fn generic_gate() {
        assert_eq!(
            first_verdict("const Foo = <T,>({ bar }: BarProps) => null;"),
            Err(SkipReason::HasTypeParameters)
        );
        assert_eq!(
            first_verdict("function Foo<T>({ bar }: BarProps<T>) { return null }"),
            Err(SkipReason::HasTypeParameters)
        );
    }

    #[test]
    fn rejects_non_reference_annotations() {
        assert_eq!(
            first_verdict("const Foo = ({ bar }: AProps | BProps) => null;"),
            Err(SkipReason::NotNamedReference)
        );
        assert_eq!(
            first_verdict("const Foo = ({ bar }: React.ButtonProps) => null;"),
            Err(SkipReason::NotNamedReference)
        );
        assert_eq!(
            first_verdict("const Foo = ({ bar }: { bar: string }) => null;"),
            Err(SkipReason::NotNamedReference)
        );
    }

    #[test]
    fn rejects_unusable_parameters() {
        assert_eq!(
            first_verdict("const Foo = () => null;"),
            Err(SkipReason::NoParameters)
        );
        assert_eq!(
            first_verdict("const Foo = (props: FooProps) => null;"),
            Err(SkipReason::NotObjectPattern)
        );
        assert_eq!(
            first_verdict("const Foo = ({ bar }) => null;"),
            Err(SkipReason::MissingAnnotation)
        );
        assert_eq!(
            first_verdict("const { a } = ({ bar }: BarProps) => null;"),
            Err(SkipReason::Anonymous)
        );
    }

    #[test]
    fn rejects_functions_that_cannot_become_arrows() {
        assert_eq!(
            first_verdict("function* Foo({ bar }: BarProps) { yield null }"),
            Err(SkipReason::Generator)
        );
        assert_eq!(
            first_verdict(
                "function Foo({ bar }: BarProps): null;\nfunction Foo({ bar }: BarProps) { return null }"
            ),
            Err(SkipReason::MissingBody)
        );
    }

    #[test]
    fn custom_suffix() {
        let config = CodemodConfig {
            suffix: "Options".into(),
            ..CodemodConfig::default()
        };
        let allocator = Allocator::default();
        let source = "const Foo = ({ bar }: BarOptions) => null;";
        let parsed = parse(&allocator, source, &ParseOptions::tsx()).unwrap();
        let candidates = collect_candidates(parsed.ast(), source);
        assert_eq!(check_eligibility(&candidates[0], &config), Ok(()));
    }
}
