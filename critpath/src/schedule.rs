//! The scheduling pipeline: build, sort, forward pass, backward pass, report.

use thiserror::Error;

use crate::backward_pass::backward_pass;
use crate::config::ScheduleConfig;
use crate::forward_pass::{forward_pass, ForwardPassError};
use crate::graph::{DependencyGraph, GraphError};
use crate::interner::TaskId;
use crate::log_changes;
use crate::models::TaskSet;
use crate::report::Schedule;
use crate::topological::{topological_sort, SortError};

/// Errors that abort a schedule computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Sort(#[from] SortError),
    #[error(transparent)]
    ForwardPass(#[from] ForwardPassError),
}

/// Working state threaded through the pipeline stages.
///
/// Per-task vectors are indexed by `TaskId` and filled in by the passes;
/// before a pass has run its vectors hold zeros.
#[derive(Debug, Clone)]
pub struct ScheduleContext {
    pub graph: DependencyGraph,
    /// Topological order of all task ids.
    pub order: Vec<TaskId>,
    pub earliest_start: Vec<u64>,
    pub earliest_finish: Vec<u64>,
    pub latest_start: Vec<u64>,
    pub latest_finish: Vec<u64>,
    pub completion_time: u64,
    pub verbosity: u8,
}

impl ScheduleContext {
    /// Run the build and sort stages, leaving the context ready for the
    /// passes.
    pub fn prepare(tasks: &TaskSet, config: &ScheduleConfig) -> Result<Self, ScheduleError> {
        let graph = DependencyGraph::build(tasks, config)?;
        let order = topological_sort(&graph, config.verbosity)?;
        log_changes!(
            config.verbosity,
            "ordered {} tasks ({} dependencies dropped)",
            order.len(),
            graph.dropped.len()
        );

        let n = graph.len();
        Ok(Self {
            graph,
            order,
            earliest_start: vec![0; n],
            earliest_finish: vec![0; n],
            latest_start: vec![0; n],
            latest_finish: vec![0; n],
            completion_time: 0,
            verbosity: config.verbosity,
        })
    }
}

/// Compute the critical path schedule for a task set.
///
/// # Returns
/// * `Ok(Schedule)` with early/late times for every task
/// * `Err(ScheduleError::Graph)` if a dependency names an unknown task and the
///   policy is `Reject`
/// * `Err(ScheduleError::Sort)` if the dependency graph has a cycle
/// * `Err(ScheduleError::ForwardPass)` if a chain of durations overflows `u64`
pub fn compute_schedule(tasks: &TaskSet, config: &ScheduleConfig) -> Result<Schedule, ScheduleError> {
    let mut ctx = ScheduleContext::prepare(tasks, config)?;
    forward_pass(&mut ctx)?;
    backward_pass(&mut ctx);
    Ok(Schedule::from_context(ctx))
}
