//! Dependency graph construction.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::config::{ScheduleConfig, UnknownDependencyPolicy};
use crate::interner::{TaskId, TaskIndex};
use crate::log_debug;
use crate::models::{DroppedDependency, TaskSet};

/// Errors raised while building the dependency graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Task {task:?} depends on unknown task {dependency:?}")]
    UnknownDependency { task: String, dependency: String },
}

/// Dense, id-indexed view of a task set.
///
/// All vectors are indexed by `TaskId`, which is the task's position in
/// input order.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    pub index: TaskIndex,
    pub durations: Vec<u64>,
    /// Distinct direct dependencies of each task.
    pub deps: Vec<Vec<TaskId>>,
    /// Tasks that directly depend on each task (reverse of `deps`).
    pub dependents: Vec<Vec<TaskId>>,
    /// Number of distinct direct dependencies of each task.
    pub in_degree: Vec<usize>,
    /// Edges dropped under `UnknownDependencyPolicy::Warn`.
    pub dropped: Vec<DroppedDependency>,
}

impl DependencyGraph {
    /// Build the graph, resolving dependency names according to the
    /// configured unknown-dependency policy.
    pub fn build(tasks: &TaskSet, config: &ScheduleConfig) -> Result<Self, GraphError> {
        let index = TaskIndex::new(tasks.iter().map(|t| t.name.as_str()));
        let n = index.len();

        let mut durations = Vec::with_capacity(n);
        let mut deps: Vec<Vec<TaskId>> = vec![Vec::new(); n];
        let mut dependents: Vec<Vec<TaskId>> = vec![Vec::new(); n];
        let mut dropped = Vec::new();

        for (idx, task) in tasks.iter().enumerate() {
            durations.push(task.duration);
            // TaskSet caps its length at MAX_TASKS, so this cannot truncate
            let id = idx as TaskId;
            let mut seen: FxHashSet<TaskId> = FxHashSet::default();

            for dep_name in &task.dependencies {
                let Some(dep_id) = index.get_id(dep_name) else {
                    match config.unknown_dependencies {
                        UnknownDependencyPolicy::Reject => {
                            return Err(GraphError::UnknownDependency {
                                task: task.name.clone(),
                                dependency: dep_name.clone(),
                            });
                        }
                        UnknownDependencyPolicy::Warn => {
                            tracing::warn!(
                                task = %task.name,
                                dependency = %dep_name,
                                "dropping dependency on unknown task"
                            );
                            dropped.push(DroppedDependency {
                                task: task.name.clone(),
                                dependency: dep_name.clone(),
                            });
                            continue;
                        }
                    }
                };

                if !seen.insert(dep_id) {
                    continue;
                }
                log_debug!(config.verbosity, "edge {} -> {}", dep_name, task.name);
                deps[idx].push(dep_id);
                dependents[dep_id as usize].push(id);
            }
        }

        let in_degree = deps.iter().map(Vec::len).collect();

        Ok(Self {
            index,
            durations,
            deps,
            dependents,
            in_degree,
            dropped,
        })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
