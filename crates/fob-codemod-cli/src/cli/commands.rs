use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::{parse_extension, parse_library_root, parse_wrapper_symbol};

/// Available fob-codemod subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite components into `const Name: FC<NameProps> = (...) => ...`
    ///
    /// Matches assigned arrow functions, function expressions and function
    /// declarations whose first parameter is a destructured object typed
    /// with a `...Props` type, and adds the `FC` import where needed.
    Fc(FcArgs),

    /// Split Material UI root imports into per-symbol imports
    ///
    /// `import { Button } from '@material-ui/core'` becomes
    /// `import Button from '@material-ui/core/Button'`.
    Imports(ImportsArgs),
}

/// Arguments shared by every transform
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Files or directories to transform
    ///
    /// Directories are walked recursively, honoring .gitignore and skipping
    /// node_modules.
    #[arg(value_name = "PATH", default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Report files that would change without writing them
    #[arg(long, conflicts_with_all = ["check", "print"])]
    pub dry_run: bool,

    /// Exit with an error if any file would change (for CI)
    #[arg(long, conflicts_with = "print")]
    pub check: bool,

    /// Print transformed sources to stdout instead of writing them
    #[arg(long)]
    pub print: bool,

    /// Path to a config file (TOML, JSON or YAML)
    ///
    /// Defaults to fob-codemod.toml in the current directory when present.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// File extensions to transform
    #[arg(
        long,
        value_name = "EXT",
        value_delimiter = ',',
        default_value = "ts,tsx,js,jsx",
        value_parser = parse_extension
    )]
    pub extensions: Vec<String>,
}

/// Arguments for the fc command
#[derive(Args, Debug, Clone)]
pub struct FcArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Suffix a prop type must end with to be matched
    #[arg(long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Wrapper type used for rewritten declarations
    #[arg(long = "wrapper", value_name = "SYMBOL", value_parser = parse_wrapper_symbol)]
    pub wrapper_symbol: Option<String>,

    /// Module the wrapper type is imported from
    #[arg(long, value_name = "MODULE")]
    pub wrapper_module: Option<String>,
}

/// Arguments for the imports command
#[derive(Args, Debug, Clone)]
pub struct ImportsArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Library root to split (repeatable, replaces the configured roots)
    ///
    /// Examples:
    ///   fob-codemod imports --library @mui/material src
    ///   fob-codemod imports --library @material-ui/core --library @material-ui/lab
    #[arg(long = "library", value_name = "ROOT", value_parser = parse_library_root)]
    pub libraries: Vec<String>,
}
