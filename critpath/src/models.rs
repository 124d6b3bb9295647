//! Core data types for schedule computation.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::interner::MAX_TASKS;

/// Errors raised while assembling a task set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskSetError {
    #[error("Task name must not be empty")]
    EmptyName,
    #[error("Duplicate task: {0}")]
    DuplicateTask(String),
    #[error("Task set is full ({0} tasks)")]
    TooManyTasks(usize),
}

/// Reject a task set that already holds `MAX_TASKS` tasks.
fn check_capacity(len: usize) -> Result<(), TaskSetError> {
    if len >= MAX_TASKS {
        return Err(TaskSetError::TooManyTasks(MAX_TASKS));
    }
    Ok(())
}

/// A task to be scheduled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    /// Duration in abstract time units.
    pub duration: u64,
    /// Names of tasks that must finish before this one starts.
    pub dependencies: Vec<String>,
}

impl Task {
    pub fn new<S: Into<String>>(name: S, duration: u64, dependencies: Vec<String>) -> Self {
        Self {
            name: name.into(),
            duration,
            dependencies,
        }
    }

    /// Convenience constructor taking dependency names as string slices.
    pub fn with_deps<S: Into<String>>(name: S, duration: u64, dependencies: &[&str]) -> Self {
        Self::new(
            name,
            duration,
            dependencies.iter().map(|d| d.to_string()).collect(),
        )
    }
}

/// All tasks of one project, in input order, with unique non-empty names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskSet {
    tasks: Vec<Task>,
    names: FxHashSet<String>,
}

impl TaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task. Names are compared exactly. At most `MAX_TASKS` tasks
    /// are accepted.
    pub fn insert(&mut self, task: Task) -> Result<(), TaskSetError> {
        check_capacity(self.tasks.len())?;
        if task.name.is_empty() {
            return Err(TaskSetError::EmptyName);
        }
        if self.names.contains(&task.name) {
            return Err(TaskSetError::DuplicateTask(task.name));
        }
        self.names.insert(task.name.clone());
        self.tasks.push(task);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TryFrom<Vec<Task>> for TaskSet {
    type Error = TaskSetError;

    fn try_from(tasks: Vec<Task>) -> Result<Self, Self::Error> {
        let mut set = TaskSet::new();
        for task in tasks {
            set.insert(task)?;
        }
        Ok(set)
    }
}

impl<'a> IntoIterator for &'a TaskSet {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

/// Early and late times for one task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskTiming {
    /// Earliest start time (forward pass).
    pub earliest_start: u64,
    /// Earliest finish time (forward pass).
    pub earliest_finish: u64,
    /// Latest start time (backward pass).
    pub latest_start: u64,
    /// Latest finish time (backward pass).
    pub latest_finish: u64,
}

impl TaskTiming {
    /// Slack = latest_start - earliest_start, floored at 0 for hand-built
    /// timings whose late start precedes the early start.
    pub fn slack(&self) -> u64 {
        self.latest_start.saturating_sub(self.earliest_start)
    }

    pub fn is_critical(&self) -> bool {
        self.latest_start == self.earliest_start
    }
}

/// A dependency edge dropped because its source is not a known task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DroppedDependency {
    /// The task that listed the dependency.
    pub task: String,
    /// The unknown name it referenced.
    pub dependency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_input_order() {
        let mut set = TaskSet::new();
        set.insert(Task::with_deps("b", 2, &[])).unwrap();
        set.insert(Task::with_deps("a", 1, &["b"])).unwrap();

        let names: Vec<&str> = set.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(set.contains("a"));
        assert!(!set.contains("A"));
    }

    #[test]
    fn test_insert_rejects_empty_name() {
        let mut set = TaskSet::new();
        assert_eq!(
            set.insert(Task::with_deps("", 1, &[])),
            Err(TaskSetError::EmptyName)
        );
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert_rejects_duplicate() {
        let result = TaskSet::try_from(vec![
            Task::with_deps("a", 1, &[]),
            Task::with_deps("a", 4, &[]),
        ]);
        assert_eq!(result, Err(TaskSetError::DuplicateTask("a".to_string())));
    }

    #[test]
    fn test_capacity_limit_matches_task_id_range() {
        assert_eq!(check_capacity(0), Ok(()));
        assert_eq!(check_capacity(MAX_TASKS - 1), Ok(()));
        assert_eq!(
            check_capacity(MAX_TASKS),
            Err(TaskSetError::TooManyTasks(MAX_TASKS))
        );
        // The last accepted position is still a valid id
        assert!(crate::interner::TaskId::try_from(MAX_TASKS - 1).is_ok());
    }

    #[test]
    fn test_task_timing_critical() {
        let timing = TaskTiming {
            earliest_start: 2,
            earliest_finish: 5,
            latest_start: 2,
            latest_finish: 5,
        };
        assert!(timing.is_critical());
        assert_eq!(timing.slack(), 0);

        let timing_with_slack = TaskTiming {
            earliest_start: 2,
            earliest_finish: 3,
            latest_start: 4,
            latest_finish: 5,
        };
        assert!(!timing_with_slack.is_critical());
        assert_eq!(timing_with_slack.slack(), 2);
    }

    #[test]
    fn test_slack_of_inconsistent_timing_is_zero() {
        let timing = TaskTiming {
            earliest_start: 5,
            earliest_finish: 6,
            latest_start: 3,
            latest_finish: 4,
        };
        assert_eq!(timing.slack(), 0);
        assert!(!timing.is_critical());
    }
}
