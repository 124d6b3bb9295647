//! Assembled schedule results.

use crate::interner::{TaskId, TaskIndex};
use crate::models::{DroppedDependency, TaskTiming};
use crate::schedule::ScheduleContext;

/// Read-only result of a schedule computation.
///
/// Rows iterate in the input order of the task set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    index: TaskIndex,
    timings: Vec<TaskTiming>,
    order: Vec<TaskId>,
    completion_time: u64,
    dropped: Vec<DroppedDependency>,
}

impl Schedule {
    /// Collect the per-task vectors of a context that has been through both
    /// passes.
    pub fn from_context(ctx: ScheduleContext) -> Self {
        let timings = (0..ctx.graph.len())
            .map(|idx| TaskTiming {
                earliest_start: ctx.earliest_start[idx],
                earliest_finish: ctx.earliest_finish[idx],
                latest_start: ctx.latest_start[idx],
                latest_finish: ctx.latest_finish[idx],
            })
            .collect();

        Self {
            index: ctx.graph.index,
            timings,
            order: ctx.order,
            completion_time: ctx.completion_time,
            dropped: ctx.graph.dropped,
        }
    }

    /// Project completion time: the maximum earliest finish, which equals the
    /// maximum latest finish.
    pub fn completion_time(&self) -> u64 {
        self.completion_time
    }

    pub fn timing(&self, name: &str) -> Option<&TaskTiming> {
        self.index
            .get_id(name)
            .map(|id| &self.timings[id as usize])
    }

    /// `(name, timing)` rows in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TaskTiming)> + '_ {
        self.index
            .names()
            .iter()
            .map(String::as_str)
            .zip(self.timings.iter())
    }

    /// Task names in the order the passes visited them.
    pub fn topological_order(&self) -> Vec<&str> {
        self.order.iter().map(|&id| self.index.name(id)).collect()
    }

    /// Zero-slack tasks in topological order.
    pub fn critical_tasks(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter(|&&id| self.timings[id as usize].is_critical())
            .map(|&id| self.index.name(id))
            .collect()
    }

    /// Dependencies dropped because they named unknown tasks.
    pub fn dropped_dependencies(&self) -> &[DroppedDependency] {
        &self.dropped
    }

    pub fn len(&self) -> usize {
        self.timings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }
}
