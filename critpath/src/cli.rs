//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::config::{ScheduleConfig, UnknownDependencyPolicy};
use crate::logging::VERBOSITY_DEBUG;

/// Command-line arguments for `cpm`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cpm",
    version,
    about = "Compute a critical path schedule from interactively entered tasks.",
    long_about = None
)]
pub struct CliArgs {
    /// What to do when a dependency names a task that was never entered.
    #[arg(long, value_enum, value_name = "POLICY", default_value_t = UnknownDeps::Reject)]
    pub unknown_deps: UnknownDeps,

    /// Scheduler verbosity: 0=silent, 1=changes, 2=checks, 3=debug.
    #[arg(long, value_name = "LEVEL", default_value_t = 0,
          value_parser = clap::value_parser!(u8).range(0..=VERBOSITY_DEBUG as i64))]
    pub verbosity: u8,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CRITPATH_LOG` or the level implied by `--verbosity` is used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Unknown-dependency policy as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum UnknownDeps {
    Reject,
    Warn,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl CliArgs {
    pub fn schedule_config(&self) -> ScheduleConfig {
        let unknown_dependencies = match self.unknown_deps {
            UnknownDeps::Reject => UnknownDependencyPolicy::Reject,
            UnknownDeps::Warn => UnknownDependencyPolicy::Warn,
        };
        ScheduleConfig {
            unknown_dependencies,
            verbosity: self.verbosity,
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
