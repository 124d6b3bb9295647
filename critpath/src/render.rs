//! Plain-text results table.

use std::io::{self, Write};

use crate::report::Schedule;

/// Write the results table, the completion time, the critical tasks and any
/// dropped dependencies.
pub fn render_schedule<W: Write>(schedule: &Schedule, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Results:")?;
    writeln!(out, "Task | EST | EFT | LST | LFT")?;
    for (name, timing) in schedule.iter() {
        writeln!(
            out,
            "{} | {} | {} | {} | {}",
            name,
            timing.earliest_start,
            timing.earliest_finish,
            timing.latest_start,
            timing.latest_finish
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Project completion time: {}", schedule.completion_time())?;
    writeln!(out, "Critical tasks: {}", schedule.critical_tasks().join(", "))?;

    for dropped in schedule.dropped_dependencies() {
        writeln!(
            out,
            "Warning: ignored dependency of {} on unknown task {}",
            dropped.task, dropped.dependency
        )?;
    }

    Ok(())
}
