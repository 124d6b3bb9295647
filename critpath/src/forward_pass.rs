//! Forward pass: earliest start and finish times.

use thiserror::Error;

use crate::schedule::ScheduleContext;
use crate::{log_changes, log_checks};

/// Errors raised while computing early times.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForwardPassError {
    #[error("Earliest finish of task {task:?} exceeds the representable time range")]
    DurationOverflow { task: String },
}

/// Fill `earliest_start`, `earliest_finish` and `completion_time`.
///
/// Tasks are visited in topological order, so each dependency's finish time
/// is final before it is read:
/// - EST = max(EFT of dependencies), or 0 without dependencies
/// - EFT = EST + duration
///
/// The completion time is the maximum EFT, and 0 for an empty graph.
///
/// Fails with `DurationOverflow` if a chain of durations does not fit in
/// `u64`. Once this pass succeeds every late time lies in `0..=completion`,
/// so the backward pass cannot overflow.
pub fn forward_pass(ctx: &mut ScheduleContext) -> Result<(), ForwardPassError> {
    for &task_id in &ctx.order {
        let idx = task_id as usize;

        let earliest_start = ctx.graph.deps[idx]
            .iter()
            .map(|&dep| ctx.earliest_finish[dep as usize])
            .max()
            .unwrap_or(0);
        let earliest_finish = earliest_start
            .checked_add(ctx.graph.durations[idx])
            .ok_or_else(|| ForwardPassError::DurationOverflow {
                task: ctx.graph.index.name(task_id).to_string(),
            })?;

        ctx.earliest_start[idx] = earliest_start;
        ctx.earliest_finish[idx] = earliest_finish;

        log_checks!(
            ctx.verbosity,
            "early times {}: EST={} EFT={}",
            ctx.graph.index.name(task_id),
            earliest_start,
            earliest_finish
        );
    }

    ctx.completion_time = ctx.earliest_finish.iter().copied().max().unwrap_or(0);
    log_changes!(ctx.verbosity, "project completion time {}", ctx.completion_time);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScheduleConfig;
    use crate::models::{Task, TaskSet};

    fn run(tasks: Vec<Task>) -> ScheduleContext {
        let tasks = TaskSet::try_from(tasks).unwrap();
        let mut ctx = ScheduleContext::prepare(&tasks, &ScheduleConfig::default()).unwrap();
        forward_pass(&mut ctx).unwrap();
        ctx
    }

    #[test]
    fn test_single_task() {
        let ctx = run(vec![Task::with_deps("a", 5, &[])]);

        assert_eq!(ctx.earliest_start, vec![0]);
        assert_eq!(ctx.earliest_finish, vec![5]);
        assert_eq!(ctx.completion_time, 5);
    }

    #[test]
    fn test_chain() {
        let ctx = run(vec![
            Task::with_deps("a", 3, &[]),
            Task::with_deps("b", 2, &["a"]),
        ]);

        assert_eq!(ctx.earliest_start, vec![0, 3]);
        assert_eq!(ctx.earliest_finish, vec![3, 5]);
        assert_eq!(ctx.completion_time, 5);
    }

    #[test]
    fn test_diamond_takes_latest_dependency() {
        let ctx = run(vec![
            Task::with_deps("a", 2, &[]),
            Task::with_deps("b", 3, &["a"]),
            Task::with_deps("c", 1, &["a"]),
            Task::with_deps("d", 2, &["b", "c"]),
        ]);

        assert_eq!(ctx.earliest_start, vec![0, 2, 2, 5]);
        assert_eq!(ctx.earliest_finish, vec![2, 5, 3, 7]);
        assert_eq!(ctx.completion_time, 7);
    }

    #[test]
    fn test_completion_spans_disconnected_components() {
        let ctx = run(vec![
            Task::with_deps("short", 2, &[]),
            Task::with_deps("long", 9, &[]),
        ]);

        assert_eq!(ctx.completion_time, 9);
    }

    #[test]
    fn test_zero_duration_root() {
        let ctx = run(vec![Task::with_deps("milestone", 0, &[])]);

        assert_eq!(ctx.earliest_start, vec![0]);
        assert_eq!(ctx.earliest_finish, vec![0]);
        assert_eq!(ctx.completion_time, 0);
    }

    #[test]
    fn test_max_duration_alone_fits() {
        let ctx = run(vec![Task::with_deps("a", u64::MAX, &[])]);

        assert_eq!(ctx.earliest_finish, vec![u64::MAX]);
        assert_eq!(ctx.completion_time, u64::MAX);
    }

    #[test]
    fn test_chain_overflow_is_an_error() {
        let tasks = TaskSet::try_from(vec![
            Task::with_deps("a", u64::MAX, &[]),
            Task::with_deps("b", 1, &["a"]),
        ])
        .unwrap();
        let mut ctx = ScheduleContext::prepare(&tasks, &ScheduleConfig::default()).unwrap();

        assert_eq!(
            forward_pass(&mut ctx),
            Err(ForwardPassError::DurationOverflow {
                task: "b".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_task_set() {
        let ctx = run(vec![]);

        assert!(ctx.earliest_finish.is_empty());
        assert_eq!(ctx.completion_time, 0);
    }
}
