//! Logging infrastructure for the codemod CLI.
//!
//! Sets up a `tracing` subscriber whose verbosity follows the global
//! `--verbose`/`--quiet` flags, falling back to `RUST_LOG`.
//!
//! # Example
//!
//! ```rust,no_run
//! use fob_codemod_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Scanning sources");
//! debug!(path = "src/Button.tsx", "transforming");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used with `--verbose`
const VERBOSE_FILTER: &str = "fob_codemod=debug,fob_codemod_cli=debug";

/// Filter used with `--quiet`
const QUIET_FILTER: &str = "fob_codemod=error,fob_codemod_cli=error";

/// Filter used when neither a flag nor `RUST_LOG` is given
const DEFAULT_FILTER: &str = "fob_codemod=info,fob_codemod_cli=info";

/// Initialize the tracing subscriber with the specified options.
///
/// Must be called once, before any logging occurs.
///
/// # Verbosity Levels
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for the codemod crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for the codemod crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize logger with custom environment filter.
///
/// ```rust,no_run
/// use fob_codemod_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_logger_with_filter(EnvFilter::new("fob_codemod=trace"), true);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second initialization (e.g. from tests) keeps the first subscriber
    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
    {
        tracing::debug!(%err, "Logger already initialized");
    }
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
