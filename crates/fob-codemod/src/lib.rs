//! Structural codemods for TypeScript/React sources using OXC
//!
//! This crate rewrites modules by matching on OXC's typed AST and splicing
//! source edits, so everything outside the rewritten nodes stays byte for
//! byte as it was.
//!
//! # Transforms
//!
//! - **`fc`** - rewrites components whose first parameter is a destructured
//!   object typed as `SomethingProps` into `const Name: FC<SomethingProps> =
//!   ({ ... }) => ...` and makes sure `FC` is imported from `react`
//! - **`imports`** - splits root imports of Material UI packages into one
//!   import per symbol
//!
//! # Examples
//!
//! ```rust
//! use fob_codemod::{CodemodConfig, transform_fc};
//!
//! let source = "function Button({ label }: ButtonProps) {\n  return label;\n}\n";
//! let output = transform_fc(source, Some("Button.tsx"), &CodemodConfig::default())?;
//!
//! assert!(output.modified);
//! assert_eq!(
//!     output.code,
//!     "import { FC } from 'react';\nconst Button: FC<ButtonProps> = ({ label }) => {\n  return label;\n}\n"
//! );
//! # Ok::<(), fob_codemod::CodemodError>(())
//! ```
//!
//! ```rust
//! use fob_codemod::{CodemodConfig, transform_imports};
//!
//! let source = "import { Button, ButtonProps } from '@material-ui/core';\n";
//! let output = transform_imports(source, None, &CodemodConfig::default())?;
//!
//! assert_eq!(
//!     output.code,
//!     "import Button from '@material-ui/core/Button';\nimport { ButtonProps } from '@material-ui/core/Button';\n"
//! );
//! # Ok::<(), fob_codemod::CodemodError>(())
//! ```

mod build;
mod config;
mod edit;
mod engine;
mod error;
mod format;
mod matcher;
mod parser;
mod rules;

pub mod imports;
pub mod normalize;

pub use build::{ImportDecl, ImportSpec};
pub use config::{CodemodConfig, DEFAULT_LIBRARIES};
pub use edit::{Edit, SourceEdits};
pub use engine::{
    ChangeSummary, FcPass, SplitImportsPass, Transform, TransformEngine, TransformOutput,
    TransformPass, TransformResult, transform_fc, transform_imports,
};
pub use error::{CodemodError, Result};
pub use format::{EmitStyle, QuoteStyle, is_identifier_name};
pub use matcher::{
    Binding, Candidate, DeclaredFunction, FirstParam, InitKind, ParamAnnotation, PropTypeRef, Shape,
    collect_candidates,
};
pub use parser::{ParseOptions, ParsedProgram, parse};
pub use rules::{Rule, SkipReason, check_eligibility};

// Re-export commonly used OXC types for convenience
pub use oxc_allocator::Allocator;
pub use oxc_span::Span;
