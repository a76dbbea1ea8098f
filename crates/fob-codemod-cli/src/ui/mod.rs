//! Terminal output for codemod runs.
//!
//! Status lines and summaries go to stderr so `--print` output on stdout
//! stays clean enough to pipe.
//!
//! # Examples
//!
//! ```no_run
//! use fob_codemod_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Rewrote src/Button.tsx");
//! ui::error("Failed to parse src/broken.tsx");
//! ```

mod format;
mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_duration, plural, print_run_summary, summary_line};
pub use messages::{error, info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    // NO_COLOR wins over everything
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support.
///
/// Call once from `main`; `no_color` comes from the `--no-color` flag.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

/// Whether status output is currently colored
pub fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

/// Silence everything but errors (`--quiet`).
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub(crate) fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}
