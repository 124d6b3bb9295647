//! Logging for the scheduling pipeline.
//!
//! The pipeline logs through verbosity-gated macros so a library caller can
//! silence it per computation, independent of the installed subscriber.
//! Verbosity levels:
//! - 0: SILENT (warnings and errors only)
//! - 1: CHANGES (stage results: order length, completion time)
//! - 2: CHECKS (per-task early/late times)
//! - 3: DEBUG (queue and edge relaxation internals)
//!
//! Events are emitted through `tracing`; the `cpm` binary installs a
//! `tracing-subscriber` fmt subscriber writing to stderr so stdout stays
//! reserved for prompts and the results table.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Environment variable consulted when no explicit log level is given.
pub const LOG_ENV_VAR: &str = "CRITPATH_LOG";

/// Log at CHANGES level (verbosity >= 1).
///
/// Used for: stage results such as the sorted order and completion time.
#[macro_export]
macro_rules! log_changes {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHANGES {
            ::tracing::info!($($arg)*);
        }
    };
}

/// Log at CHECKS level (verbosity >= 2).
///
/// Used for: per-task timings as each pass settles them.
#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHECKS {
            ::tracing::debug!($($arg)*);
        }
    };
}

/// Log at DEBUG level (verbosity >= 3).
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            ::tracing::trace!($($arg)*);
        }
    };
}

/// Subscriber level that lets every event at `verbosity` through.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        VERBOSITY_SILENT => Level::WARN,
        VERBOSITY_CHANGES => Level::INFO,
        VERBOSITY_CHECKS => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Parse a level name such as "info" or "warning".
pub fn parse_level_str(s: &str) -> Option<Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// Install the global stderr subscriber.
///
/// Level priority: `explicit`, then `CRITPATH_LOG`, then the level implied by
/// `verbosity`. Call once at startup.
pub fn init_logging(explicit: Option<Level>, verbosity: u8) -> Result<()> {
    let level = explicit
        .or_else(|| {
            std::env::var(LOG_ENV_VAR)
                .ok()
                .and_then(|s| parse_level_str(&s))
        })
        .unwrap_or_else(|| level_for_verbosity(verbosity));

    fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    Ok(())
}
