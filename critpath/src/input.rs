//! Interactive task entry.
//!
//! Prompts for a name, a duration and a dependency list per task until the
//! user types `done` (any case) or input ends. Invalid entries are reported
//! and the task is prompted again from its name.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::models::{Task, TaskSet, TaskSetError};

/// Recoverable problems with one entered task.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid duration {0:?}: expected a non-negative integer")]
    InvalidDuration(String),
    #[error(transparent)]
    TaskSet(#[from] TaskSetError),
}

/// Keyword that ends task entry.
pub const DONE_KEYWORD: &str = "done";

/// Parse a duration field. Surrounding whitespace is ignored.
pub fn parse_duration(raw: &str) -> Result<u64, InputError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| InputError::InvalidDuration(trimmed.to_string()))
}

/// Split a comma-separated dependency list, trimming entries and discarding
/// empty ones.
pub fn parse_dependencies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|dep| !dep.is_empty())
        .map(str::to_string)
        .collect()
}

/// Prompt loop over a line reader, writing prompts and diagnostics to `out`.
pub struct PromptSource<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Collect tasks until `done` or end of input.
    pub fn collect_tasks(&mut self) -> io::Result<TaskSet> {
        let mut tasks = TaskSet::new();

        loop {
            let Some(name) = self.ask("Enter task name (or type \"done\" to finish): ")? else {
                break;
            };
            if name.trim().eq_ignore_ascii_case(DONE_KEYWORD) {
                break;
            }
            let name = name.trim().to_string();

            let Some(duration) = self.ask(&format!("Enter duration for task {}: ", name))? else {
                break;
            };
            let Some(deps) =
                self.ask(&format!("Enter dependencies for task {} (comma-separated): ", name))?
            else {
                break;
            };

            let entered = Self::parse_task(name, &duration, &deps)
                .and_then(|task| tasks.insert(task).map_err(InputError::from));
            if let Err(err) = entered {
                tracing::debug!(error = %err, "task entry rejected");
                writeln!(
                    self.out,
                    "Please provide a valid task name and duration ({})",
                    err
                )?;
            }
        }

        Ok(tasks)
    }

    fn parse_task(name: String, duration: &str, deps: &str) -> Result<Task, InputError> {
        if name.is_empty() {
            return Err(TaskSetError::EmptyName.into());
        }
        let duration = parse_duration(duration)?;
        Ok(Task::new(name, duration, parse_dependencies(deps)))
    }

    /// Write `prompt` and read one line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
