//! Critical Path Method scheduling.
//!
//! Computes earliest and latest start/finish times for every task of a
//! project, plus the project completion time, from task durations and
//! dependencies. The computation is a fixed pipeline:
//!
//! 1. Build the dependency graph ([`graph`])
//! 2. Order it topologically, failing on cycles ([`topological`])
//! 3. Forward pass for early times ([`forward_pass`])
//! 4. Backward pass for late times ([`backward_pass`])
//! 5. Assemble the [`Schedule`] ([`report`])
//!
//! The [`input`] and [`render`] modules implement the interactive prompt and
//! the results table used by the `cpm` binary.

pub mod backward_pass;
pub mod cli;
mod config;
pub mod forward_pass;
pub mod graph;
pub mod input;
mod interner;
pub mod logging;
mod models;
#[cfg(feature = "python")]
mod python;
pub mod render;
pub mod report;
pub mod schedule;
pub mod topological;

pub use config::{ScheduleConfig, UnknownDependencyPolicy};
pub use forward_pass::ForwardPassError;
pub use graph::{DependencyGraph, GraphError};
pub use input::{InputError, PromptSource};
pub use interner::{TaskId, TaskIndex, MAX_TASKS};
pub use models::{DroppedDependency, Task, TaskSet, TaskSetError, TaskTiming};
pub use report::Schedule;
pub use schedule::{compute_schedule, ScheduleContext, ScheduleError};
pub use topological::{topological_sort, SortError};
