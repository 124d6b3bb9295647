//! Configuration types for schedule computation.

use std::fmt;
use std::str::FromStr;

use crate::logging::VERBOSITY_SILENT;

/// What the graph builder does with a dependency naming a task that is not
/// in the task set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownDependencyPolicy {
    /// Fail the build with `GraphError::UnknownDependency`.
    #[default]
    Reject,
    /// Drop the edge, log a warning, and record it on the schedule.
    Warn,
}

impl fmt::Display for UnknownDependencyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::Warn => write!(f, "warn"),
        }
    }
}

impl FromStr for UnknownDependencyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "warn" => Ok(Self::Warn),
            other => Err(format!("Unknown dependency policy: {}", other)),
        }
    }
}

/// Configuration for one schedule computation.
#[derive(Clone, Debug)]
pub struct ScheduleConfig {
    /// Handling of dependency names missing from the task set.
    pub unknown_dependencies: UnknownDependencyPolicy,
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    pub verbosity: u8,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            unknown_dependencies: UnknownDependencyPolicy::Reject,
            verbosity: VERBOSITY_SILENT,
        }
    }
}

impl ScheduleConfig {
    /// Default configuration with the given unknown-dependency policy.
    pub fn with_policy(unknown_dependencies: UnknownDependencyPolicy) -> Self {
        Self {
            unknown_dependencies,
            ..Self::default()
        }
    }
}
