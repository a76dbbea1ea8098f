//! Status message functions for terminal output.

use owo_colors::OwoColorize;

use super::{colors_enabled, is_quiet};

/// Print a success message to stderr.
///
/// # Examples
///
/// ```no_run
/// use fob_codemod_cli::ui::success;
///
/// success("Rewrote 3 files");
/// ```
pub fn success(message: &str) {
    if is_quiet() {
        return;
    }

    if colors_enabled() {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {}", message);
    }
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    if is_quiet() {
        return;
    }

    if colors_enabled() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {}", message);
    }
}

/// Print a warning message to stderr.
///
/// # Examples
///
/// ```no_run
/// use fob_codemod_cli::ui::warning;
///
/// warning("No source files found");
/// ```
pub fn warning(message: &str) {
    if is_quiet() {
        return;
    }

    if colors_enabled() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    } else {
        eprintln!("⚠ {}", message);
    }
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    } else {
        eprintln!("✗ {}", message);
    }
}
