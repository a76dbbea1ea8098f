//! Shared driver for every transform command.
//!
//! Discovers the files under the given paths, runs the transform over them in
//! parallel and reports the outcome per file plus a final summary.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use fob_codemod::{ChangeSummary, CodemodConfig, Transform};
use rayon::prelude::*;
use tracing::debug;

use crate::cli::RunArgs;
use crate::discovery::SourceWalker;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

/// What happens to a file the transform changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Write the result back to the file
    Write,
    /// Only report what would change
    DryRun,
    /// Report and fail if anything would change
    Check,
    /// Print results to stdout, leave files alone
    Print,
}

impl RunMode {
    pub fn from_args(args: &RunArgs) -> Self {
        if args.check {
            RunMode::Check
        } else if args.dry_run {
            RunMode::DryRun
        } else if args.print {
            RunMode::Print
        } else {
            RunMode::Write
        }
    }

    pub fn writes_files(self) -> bool {
        matches!(self, RunMode::Write)
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            RunMode::Write => "rewritten",
            RunMode::DryRun | RunMode::Check => "would be rewritten",
            RunMode::Print => "transformed",
        }
    }
}

/// Result of processing one file
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
}

#[derive(Debug)]
pub enum FileStatus {
    Unchanged { code: String },
    Changed { code: String, summary: ChangeSummary },
    Failed(String),
}

/// Totals for a finished run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub scanned: usize,
    pub changed: usize,
    pub failed: usize,
    pub totals: ChangeSummary,
    pub elapsed: Duration,
}

impl RunSummary {
    fn from_outcomes(outcomes: &[FileOutcome], elapsed: Duration) -> Self {
        let mut summary = RunSummary {
            scanned: outcomes.len(),
            elapsed,
            ..RunSummary::default()
        };

        for outcome in outcomes {
            match &outcome.status {
                FileStatus::Unchanged { .. } => {}
                FileStatus::Changed { summary: changes, .. } => {
                    summary.changed += 1;
                    summary.totals.merge(*changes);
                }
                FileStatus::Failed(_) => summary.failed += 1,
            }
        }

        summary
    }
}

/// Run `transform` over every file selected by `args`.
///
/// # Errors
///
/// Returns [`CliError::CheckFailed`] when `--check` finds files that would
/// change and [`CliError::TransformFailed`] when any file could not be read,
/// parsed or written. All other files are still processed in both cases.
pub fn execute(
    transform: Transform,
    args: &RunArgs,
    config: &CodemodConfig,
) -> Result<RunSummary> {
    let mode = RunMode::from_args(args);

    let files = SourceWalker::new(args.paths.clone())
        .with_extensions(args.extensions.clone())
        .walk()?;

    if files.is_empty() {
        ui::warning("No source files found");
        return Ok(RunSummary::default());
    }

    debug!(
        transform = transform.name(),
        files = files.len(),
        ?mode,
        "Running codemod"
    );

    let start = Instant::now();
    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|path| process_file(transform, path, config, mode))
        .collect();
    let summary = RunSummary::from_outcomes(&outcomes, start.elapsed());

    report(&outcomes, mode)?;
    ui::print_run_summary(mode, &summary);

    if summary.failed > 0 {
        return Err(CliError::TransformFailed {
            count: summary.failed,
        });
    }

    if mode == RunMode::Check && summary.changed > 0 {
        return Err(CliError::CheckFailed {
            count: summary.changed,
        });
    }

    Ok(summary)
}

fn process_file(
    transform: Transform,
    path: &Path,
    config: &CodemodConfig,
    mode: RunMode,
) -> FileOutcome {
    let status = match transform_file(transform, path, config, mode) {
        Ok(status) => status,
        Err(err) => FileStatus::Failed(err.to_string()),
    };

    FileOutcome {
        path: path.to_path_buf(),
        status,
    }
}

fn transform_file(
    transform: Transform,
    path: &Path,
    config: &CodemodConfig,
    mode: RunMode,
) -> Result<FileStatus> {
    let source = fs::read_to_string(path).with_path(path)?;
    let path_str = path.to_string_lossy();

    let output = transform.apply(&source, Some(&*path_str), config)?;

    if !output.modified {
        debug!(path = %path.display(), "Unchanged");
        return Ok(FileStatus::Unchanged { code: source });
    }

    if mode.writes_files() {
        fs::write(path, &output.code)?;
    }

    debug!(path = %path.display(), summary = ?output.summary, "Changed");
    Ok(FileStatus::Changed {
        code: output.code,
        summary: output.summary,
    })
}

fn report(outcomes: &[FileOutcome], mode: RunMode) -> Result<()> {
    let banner = outcomes.len() > 1;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for outcome in outcomes {
        let display = outcome.path.display();

        match &outcome.status {
            FileStatus::Failed(message) => {
                ui::error(&format!("{}: {}", display, message));
            }
            FileStatus::Unchanged { code } => {
                if mode == RunMode::Print {
                    print_source(&mut out, banner, &outcome.path, code)?;
                }
            }
            FileStatus::Changed { code, .. } => match mode {
                RunMode::Write => ui::success(&format!("Rewrote {}", display)),
                RunMode::DryRun | RunMode::Check => {
                    ui::info(&format!("Would rewrite {}", display))
                }
                RunMode::Print => print_source(&mut out, banner, &outcome.path, code)?,
            },
        }
    }

    out.flush()?;
    Ok(())
}

fn print_source(
    out: &mut impl std::io::Write,
    banner: bool,
    path: &Path,
    code: &str,
) -> Result<()> {
    if banner {
        writeln!(out, "// ==> {} <==", path.display())?;
    }
    write!(out, "{}", code)?;
    if !code.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(paths: Vec<PathBuf>) -> RunArgs {
        RunArgs {
            paths,
            dry_run: false,
            check: false,
            print: false,
            config: None,
            extensions: vec!["ts".into(), "tsx".into(), "js".into(), "jsx".into()],
        }
    }

    const COMPONENT: &str = "const Button = ({ label }: ButtonProps) => <b>{label}</b>;\n";

    #[test]
    fn test_run_mode_from_args() {
        let mut run = args(vec![]);
        assert_eq!(RunMode::from_args(&run), RunMode::Write);
        run.check = true;
        assert_eq!(RunMode::from_args(&run), RunMode::Check);
        run.check = false;
        run.print = true;
        assert_eq!(RunMode::from_args(&run), RunMode::Print);
    }

    #[test]
    fn test_write_mode_rewrites_files() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Button.tsx");
        fs::write(&file, COMPONENT).unwrap();
        fs::write(temp.path().join("plain.ts"), "export const x = 1;\n").unwrap();

        let summary = execute(
            Transform::Fc,
            &args(vec![temp.path().to_path_buf()]),
            &CodemodConfig::default(),
        )
        .unwrap();

        assert_eq!(summary.scanned, 2);
        assert_eq!(summary.changed, 1);
        assert_eq!(summary.totals.declarations_rewritten, 1);

        let rewritten = fs::read_to_string(&file).unwrap();
        assert!(rewritten.contains("const Button: FC<ButtonProps> = ({ label }) =>"));
        assert!(rewritten.starts_with("import { FC } from 'react';"));
    }

    #[test]
    fn test_check_mode_fails_without_writing() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Button.tsx");
        fs::write(&file, COMPONENT).unwrap();

        let mut run = args(vec![file.clone()]);
        run.check = true;

        let err = execute(Transform::Fc, &run, &CodemodConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::CheckFailed { count: 1 }));
        assert_eq!(fs::read_to_string(&file).unwrap(), COMPONENT);
    }

    #[test]
    fn test_failed_file_does_not_stop_the_run() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("Button.tsx");
        fs::write(&good, COMPONENT).unwrap();
        fs::write(temp.path().join("broken.tsx"), "const = ;\n").unwrap();

        let err = execute(
            Transform::Fc,
            &args(vec![temp.path().to_path_buf()]),
            &CodemodConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, CliError::TransformFailed { count: 1 }));
        assert!(fs::read_to_string(&good).unwrap().contains("FC<ButtonProps>"));
    }

    #[test]
    fn test_file_removed_before_reading_is_not_found() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("Gone.tsx");

        let err = transform_file(Transform::Fc, &gone, &CodemodConfig::default(), RunMode::Write)
            .unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(ref p) if p == &gone));
        assert!(err.to_string().starts_with("File not found"));
    }

    #[test]
    fn test_empty_tree_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let summary = execute(
            Transform::Imports,
            &args(vec![temp.path().to_path_buf()]),
            &CodemodConfig::default(),
        )
        .unwrap();
        assert_eq!(summary.scanned, 0);
    }

    #[test]
    fn test_print_source_banner() {
        let mut out = Vec::new();
        print_source(&mut out, true, Path::new("a.tsx"), "x;").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "// ==> a.tsx <==\nx;\n");
    }
}
