//! Formatting utilities for durations and run summaries.

use std::time::Duration;

use fob_codemod::ChangeSummary;
use owo_colors::OwoColorize;

use super::{colors_enabled, is_quiet};
use crate::commands::{RunMode, RunSummary};

/// Format duration in human-readable format.
///
/// Converts to the most appropriate unit (ms, s, m:s).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use fob_codemod_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// `count` followed by `noun`, pluralized with a trailing `s`.
///
/// ```
/// use fob_codemod_cli::ui::plural;
///
/// assert_eq!(plural(1, "file"), "1 file");
/// assert_eq!(plural(3, "file"), "3 files");
/// ```
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

fn change_details(totals: &ChangeSummary) -> Vec<String> {
    let mut details = Vec::new();
    if totals.declarations_rewritten > 0 {
        details.push(format!(
            "{} rewritten",
            plural(totals.declarations_rewritten, "declaration")
        ));
    }
    if totals.imports_repaired > 0 {
        details.push(format!(
            "{} repaired",
            plural(totals.imports_repaired, "import")
        ));
    }
    if totals.imports_split > 0 {
        details.push(format!(
            "{} split into {}",
            plural(totals.imports_split, "import"),
            totals.imports_emitted
        ));
    }
    details
}

/// One-line description of a finished run, without colors.
pub fn summary_line(mode: RunMode, summary: &RunSummary) -> String {
    let mut line = format!(
        "{} of {} {} in {}",
        summary.changed,
        plural(summary.scanned, "file"),
        mode.past_tense(),
        format_duration(summary.elapsed)
    );

    let details = change_details(&summary.totals);
    if !details.is_empty() {
        line.push_str(&format!(" ({})", details.join(", ")));
    }

    line
}

/// Print the run summary to stderr.
///
/// Quiet runs only report a summary when some file failed.
pub fn print_run_summary(mode: RunMode, summary: &RunSummary) {
    if is_quiet() && summary.failed == 0 {
        return;
    }

    let line = summary_line(mode, summary);

    if !colors_enabled() {
        eprintln!("{}", line);
        return;
    }

    if summary.failed > 0 {
        eprintln!("{} {}", "✗".red().bold(), line);
    } else if summary.changed == 0 {
        eprintln!("{} {}", "✓".green().bold(), line.dimmed());
    } else {
        eprintln!("{} {}", "✓".green().bold(), line.bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(scanned: usize, changed: usize, totals: ChangeSummary) -> RunSummary {
        RunSummary {
            scanned,
            changed,
            failed: 0,
            totals,
            elapsed: Duration::from_millis(12),
        }
    }

    #[test]
    fn test_format_duration_milliseconds() {
        assert_eq!(format_duration(Duration::from_millis(0)), "0ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
    }

    #[test]
    fn test_format_duration_seconds() {
        assert_eq!(format_duration(Duration::from_millis(1000)), "1.00s");
        assert_eq!(format_duration(Duration::from_millis(59_999)), "60.00s");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration(Duration::from_secs(60)), "1m 0s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn test_summary_line_without_changes() {
        let line = summary_line(RunMode::Write, &summary(4, 0, ChangeSummary::default()));
        assert_eq!(line, "0 of 4 files rewritten in 12ms");
    }

    #[test]
    fn test_summary_line_with_details() {
        let totals = ChangeSummary {
            declarations_rewritten: 3,
            imports_repaired: 1,
            imports_split: 0,
            imports_emitted: 0,
        };
        let line = summary_line(RunMode::Check, &summary(1, 1, totals));
        assert_eq!(
            line,
            "1 of 1 file would be rewritten in 12ms (3 declarations rewritten, 1 import repaired)"
        );
    }

    #[test]
    fn test_summary_line_for_split_imports() {
        let totals = ChangeSummary {
            imports_split: 2,
            imports_emitted: 5,
            ..ChangeSummary::default()
        };
        let line = summary_line(RunMode::DryRun, &summary(2, 2, totals));
        assert!(line.ends_with("(2 imports split into 5)"));
    }
}
