//! Transformation engine
//!
//! Runs a pipeline of [`TransformPass`]es over one source unit. Each pass
//! sees a fresh parse of the output of the previous one and answers with
//! source edits, so passes never observe stale spans.

use oxc_allocator::Allocator;
use tracing::debug;

use crate::config::CodemodConfig;
use crate::edit::SourceEdits;
use crate::error::Result;
use crate::imports::{RepairAction, repair_wrapper_import, split_library_imports};
use crate::normalize::normalize;
use crate::parser::{ParseOptions, ParsedProgram, parse};

/// Counters describing what the passes changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    pub declarations_rewritten: usize,
    /// Wrapper imports extended or inserted
    pub imports_repaired: usize,
    /// Library root imports replaced
    pub imports_split: usize,
    /// Per-symbol imports written for them
    pub imports_emitted: usize,
}

impl ChangeSummary {
    pub fn merge(&mut self, other: ChangeSummary) {
        self.declarations_rewritten += other.declarations_rewritten;
        self.imports_repaired += other.imports_repaired;
        self.imports_split += other.imports_split;
        self.imports_emitted += other.imports_emitted;
    }

    pub fn is_empty(&self) -> bool {
        *self == ChangeSummary::default()
    }
}

/// Result of a transformation pass
#[derive(Debug, Default)]
pub struct TransformResult {
    /// Edits against the source the pass was run on
    pub edits: SourceEdits,
    pub summary: ChangeSummary,
}

/// Trait for transformation passes
pub trait TransformPass: Send + Sync {
    /// Name of the transformation pass
    fn name(&self) -> &'static str;

    /// Compute the edits for a parsed program
    fn run(&self, parsed: &ParsedProgram<'_>) -> Result<TransformResult>;
}

/// Transformation engine that applies multiple passes
pub struct TransformEngine {
    passes: Vec<Box<dyn TransformPass>>,
    parse_options: ParseOptions,
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformEngine {
    pub fn new() -> Self {
        Self {
            passes: Vec::new(),
            parse_options: ParseOptions::default(),
        }
    }

    /// Set parse options
    pub fn with_parse_options(mut self, opts: ParseOptions) -> Self {
        self.parse_options = opts;
        self
    }

    /// Add a transformation pass
    pub fn add_pass<P: TransformPass + 'static>(mut self, pass: P) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// Transform source code
    ///
    /// # Errors
    ///
    /// Fails when the source (or the output of a pass) does not parse, or
    /// when a pass produces overlapping edits.
    pub fn transform(&self, source: &str) -> Result<TransformOutput> {
        let mut code = source.to_string();
        let mut summary = ChangeSummary::default();

        for pass in &self.passes {
            let allocator = Allocator::default();
            let result = {
                let parsed = parse(&allocator, &code, &self.parse_options)?;
                pass.run(&parsed)?
            };

            debug!(
                pass = pass.name(),
                source = %self.parse_options.source_name,
                edits = result.edits.len(),
                "pass finished"
            );

            if !result.edits.is_empty() {
                code = result.edits.apply(&code)?;
            }
            summary.merge(result.summary);
        }

        Ok(TransformOutput {
            modified: code != source,
            code,
            summary,
        })
    }
}

/// Output from transformation engine
#[derive(Debug, Clone)]
pub struct TransformOutput {
    /// Generated code
    pub code: String,
    /// Whether the code differs from the input
    pub modified: bool,
    pub summary: ChangeSummary,
}

/// Rewrites declarations into the wrapper form and repairs the wrapper import
pub struct FcPass {
    config: CodemodConfig,
}

impl FcPass {
    pub fn new(config: CodemodConfig) -> Self {
        Self { config }
    }
}

impl TransformPass for FcPass {
    fn name(&self) -> &'static str {
        "fc"
    }

    fn run(&self, parsed: &ParsedProgram<'_>) -> Result<TransformResult> {
        let outcome = normalize(parsed, &self.config);
        let repair = repair_wrapper_import(parsed, &self.config, outcome.rewrites);

        let mut edits = outcome.edits;
        edits.extend(repair.edits);

        Ok(TransformResult {
            edits,
            summary: ChangeSummary {
                declarations_rewritten: outcome.rewrites,
                imports_repaired: usize::from(matches!(
                    repair.action,
                    RepairAction::Extended | RepairAction::Inserted
                )),
                ..ChangeSummary::default()
            },
        })
    }
}

/// Splits library root imports into per-symbol imports
pub struct SplitImportsPass {
    libraries: Vec<String>,
}

impl SplitImportsPass {
    pub fn new(libraries: Vec<String>) -> Self {
        Self { libraries }
    }
}

impl TransformPass for SplitImportsPass {
    fn name(&self) -> &'static str {
        "imports"
    }

    fn run(&self, parsed: &ParsedProgram<'_>) -> Result<TransformResult> {
        let outcome = split_library_imports(parsed, &self.libraries);
        Ok(TransformResult {
            edits: outcome.edits,
            summary: ChangeSummary {
                imports_split: outcome.statements_split,
                imports_emitted: outcome.statements_emitted,
                ..ChangeSummary::default()
            },
        })
    }
}

/// The transforms this crate ships
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Canonical wrapper-typed component declarations
    Fc,
    /// Per-symbol library imports
    Imports,
}

impl Transform {
    pub fn name(self) -> &'static str {
        match self {
            Transform::Fc => "fc",
            Transform::Imports => "imports",
        }
    }

    /// Build an engine running this transform
    ///
    /// # Errors
    ///
    /// Returns [`crate::CodemodError::InvalidConfig`] when `config` fails
    /// validation.
    pub fn engine(
        self,
        config: &CodemodConfig,
        parse_options: ParseOptions,
    ) -> Result<TransformEngine> {
        config.validate()?;
        let engine = TransformEngine::new().with_parse_options(parse_options);
        Ok(match self {
            Transform::Fc => engine.add_pass(FcPass::new(config.clone())),
            Transform::Imports => {
                engine.add_pass(SplitImportsPass::new(config.libraries.clone()))
            }
        })
    }

    /// Run this transform over `source`
    ///
    /// `path` selects the dialect; without one the source is parsed as TSX.
    pub fn apply(
        self,
        source: &str,
        path: Option<&str>,
        config: &CodemodConfig,
    ) -> Result<TransformOutput> {
        let parse_options = path.map(ParseOptions::from_path).unwrap_or_default();
        self.engine(config, parse_options)?.transform(source)
    }
}

/// Run the wrapper declaration transform over one source unit
pub fn transform_fc(
    source: &str,
    path: Option<&str>,
    config: &CodemodConfig,
) -> Result<TransformOutput> {
    Transform::Fc.apply(source, path, config)
}

/// Run the library import splitter over one source unit
pub fn transform_imports(
    source: &str,
    path: Option<&str>,
    config: &CodemodConfig,
) -> Result<TransformOutput> {
    Transform::Imports.apply(source, path, config)
}
