//! Topological ordering of the dependency graph.

use std::collections::VecDeque;

use thiserror::Error;

use crate::graph::DependencyGraph;
use crate::interner::TaskId;
use crate::log_debug;

/// Errors raised while ordering the dependency graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Tasks that could not be ordered, in input order. Each lies on or
    /// downstream of a dependency cycle.
    #[error("Circular dependency detected among tasks: {}", .unresolved.join(", "))]
    CyclicDependency { unresolved: Vec<String> },
}

/// Order tasks so every dependency precedes its dependents (Kahn's algorithm).
///
/// The queue is seeded with zero in-degree tasks in input order and drained
/// FIFO, so the result is deterministic for a given task set.
///
/// # Returns
/// * `Ok(order)` containing every task id exactly once
/// * `Err(SortError::CyclicDependency)` if some tasks can never be released
pub fn topological_sort(graph: &DependencyGraph, verbosity: u8) -> Result<Vec<TaskId>, SortError> {
    let mut in_degree = graph.in_degree.clone();

    let mut queue: VecDeque<TaskId> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, &degree)| degree == 0)
        .map(|(idx, _)| idx as TaskId)
        .collect();

    let mut order: Vec<TaskId> = Vec::with_capacity(graph.len());

    while let Some(task_id) = queue.pop_front() {
        log_debug!(verbosity, "release {}", graph.index.name(task_id));
        order.push(task_id);

        for &dependent in &graph.dependents[task_id as usize] {
            let degree = &mut in_degree[dependent as usize];
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(dependent);
            }
        }
    }

    if order.len() != graph.len() {
        let unresolved = in_degree
            .iter()
            .enumerate()
            .filter(|(_, &degree)| degree > 0)
            .map(|(idx, _)| graph.index.name(idx as TaskId).to_string())
            .collect();
        return Err(SortError::CyclicDependency { unresolved });
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScheduleConfig;
    use crate::models::{Task, TaskSet};

    fn sort(tasks: Vec<Task>) -> Result<Vec<String>, SortError> {
        let tasks = TaskSet::try_from(tasks).unwrap();
        let graph = DependencyGraph::build(&tasks, &ScheduleConfig::default()).unwrap();
        topological_sort(&graph, 0).map(|order| {
            order
                .into_iter()
                .map(|id| graph.index.name(id).to_string())
                .collect()
        })
    }

    #[test]
    fn test_empty_graph() {
        assert_eq!(sort(vec![]).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_independent_tasks_keep_input_order() {
        let order = sort(vec![
            Task::with_deps("c", 1, &[]),
            Task::with_deps("a", 1, &[]),
            Task::with_deps("b", 1, &[]),
        ])
        .unwrap();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_dependencies_precede_dependents() {
        let order = sort(vec![
            Task::with_deps("d", 2, &["b", "c"]),
            Task::with_deps("b", 3, &["a"]),
            Task::with_deps("c", 1, &["a"]),
            Task::with_deps("a", 2, &[]),
        ])
        .unwrap();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_fifo_release_order() {
        // x and a are roots; y is released by x before b is released by a
        let order = sort(vec![
            Task::with_deps("x", 1, &[]),
            Task::with_deps("a", 1, &[]),
            Task::with_deps("b", 1, &["a"]),
            Task::with_deps("y", 1, &["x"]),
        ])
        .unwrap();
        assert_eq!(order, vec!["x", "a", "y", "b"]);
    }

    #[test]
    fn test_two_task_cycle() {
        let result = sort(vec![
            Task::with_deps("a", 5, &["b"]),
            Task::with_deps("b", 3, &["a"]),
        ]);
        assert_eq!(
            result,
            Err(SortError::CyclicDependency {
                unresolved: vec!["a".to_string(), "b".to_string()],
            })
        );
    }

    #[test]
    fn test_cycle_reports_only_unresolved_tasks() {
        // root is orderable; c depends on the cycle so it is stuck too
        let result = sort(vec![
            Task::with_deps("root", 1, &[]),
            Task::with_deps("a", 1, &["root", "b"]),
            Task::with_deps("b", 1, &["a"]),
            Task::with_deps("c", 1, &["b"]),
        ]);
        assert_eq!(
            result,
            Err(SortError::CyclicDependency {
                unresolved: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            })
        );
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let result = sort(vec![Task::with_deps("a", 1, &["a"])]);
        assert!(matches!(result, Err(SortError::CyclicDependency { .. })));
    }

    #[test]
    fn test_cycle_error_message_names_tasks() {
        let err = SortError::CyclicDependency {
            unresolved: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Circular dependency detected among tasks: a, b"
        );
    }
}
