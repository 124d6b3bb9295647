//! Backward pass: latest start and finish times.

use crate::schedule::ScheduleContext;
use crate::{log_checks, log_debug};

/// Fill `latest_start` and `latest_finish`. Requires a successful forward
/// pass, which bounds every duration by the completion time.
///
/// Every task is first seeded as if it had no dependents:
/// LFT = completion time, LST = LFT - duration.
///
/// Tasks are then visited in reverse topological order. A task's LST is
/// final once all of its dependents have been visited, at which point it
/// tightens each of its dependencies:
/// - LFT(dep) = min(LFT(dep), LST(task))
/// - LST(dep) = LFT(dep) - duration(dep)
///
/// Late times only ever decrease from their seed.
pub fn backward_pass(ctx: &mut ScheduleContext) {
    let completion = ctx.completion_time;

    for (idx, &duration) in ctx.graph.durations.iter().enumerate() {
        ctx.latest_finish[idx] = completion;
        ctx.latest_start[idx] = completion - duration;
    }

    for &task_id in ctx.order.iter().rev() {
        let idx = task_id as usize;
        let task_latest_start = ctx.latest_start[idx];

        for &dep in &ctx.graph.deps[idx] {
            let dep_idx = dep as usize;
            if task_latest_start < ctx.latest_finish[dep_idx] {
                log_debug!(
                    ctx.verbosity,
                    "tighten {} via {}: LFT {} -> {}",
                    ctx.graph.index.name(dep),
                    ctx.graph.index.name(task_id),
                    ctx.latest_finish[dep_idx],
                    task_latest_start
                );
                ctx.latest_finish[dep_idx] = task_latest_start;
                ctx.latest_start[dep_idx] = task_latest_start - ctx.graph.durations[dep_idx];
            }
        }

        log_checks!(
            ctx.verbosity,
            "late times {}: LST={} LFT={}",
            ctx.graph.index.name(task_id),
            ctx.latest_start[idx],
            ctx.latest_finish[idx]
        );
    }
}
