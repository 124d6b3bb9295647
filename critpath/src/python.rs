//! Python bindings, built with the `python` feature.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::HashMap;

use crate::config::{ScheduleConfig, UnknownDependencyPolicy};
use crate::models::{Task, TaskSet, TaskTiming};
use crate::schedule::compute_schedule;

/// Early and late times of one task.
#[pyclass(name = "TaskTiming")]
#[derive(Clone, Debug)]
pub struct PyTaskTiming {
    inner: TaskTiming,
}

#[pymethods]
impl PyTaskTiming {
    #[getter]
    fn est(&self) -> u64 {
        self.inner.earliest_start
    }

    #[getter]
    fn eft(&self) -> u64 {
        self.inner.earliest_finish
    }

    #[getter]
    fn lst(&self) -> u64 {
        self.inner.latest_start
    }

    #[getter]
    fn lft(&self) -> u64 {
        self.inner.latest_finish
    }

    #[getter]
    fn slack(&self) -> u64 {
        self.inner.slack()
    }

    fn __repr__(&self) -> String {
        format!(
            "TaskTiming(est={}, eft={}, lst={}, lft={})",
            self.inner.earliest_start,
            self.inner.earliest_finish,
            self.inner.latest_start,
            self.inner.latest_finish
        )
    }
}

/// Computed schedule.
#[pyclass(name = "Schedule")]
#[derive(Clone, Debug)]
pub struct PySchedule {
    /// Task names in input order.
    #[pyo3(get)]
    pub tasks: Vec<String>,
    #[pyo3(get)]
    pub timings: HashMap<String, PyTaskTiming>,
    #[pyo3(get)]
    pub completion_time: u64,
    #[pyo3(get)]
    pub critical_tasks: Vec<String>,
}

#[pymethods]
impl PySchedule {
    fn __repr__(&self) -> String {
        format!(
            "Schedule(tasks={}, completion_time={})",
            self.tasks.len(),
            self.completion_time
        )
    }
}

/// Compute the critical path schedule.
///
/// # Arguments
/// * `tasks` - List of `(name, duration, dependencies)` tuples
/// * `warn_unknown_dependencies` - Drop dependencies on unknown tasks instead of raising
///
/// # Raises
/// * ValueError on duplicate or empty names, unknown dependencies, or cycles
#[pyfunction]
#[pyo3(name = "compute_schedule", signature = (tasks, warn_unknown_dependencies=false))]
fn py_compute_schedule(
    tasks: Vec<(String, u64, Vec<String>)>,
    warn_unknown_dependencies: bool,
) -> PyResult<PySchedule> {
    let mut task_set = TaskSet::new();
    for (name, duration, deps) in tasks {
        task_set
            .insert(Task::new(name, duration, deps))
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
    }

    let policy = if warn_unknown_dependencies {
        UnknownDependencyPolicy::Warn
    } else {
        UnknownDependencyPolicy::Reject
    };
    let schedule = compute_schedule(&task_set, &ScheduleConfig::with_policy(policy))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    Ok(PySchedule {
        tasks: schedule.iter().map(|(name, _)| name.to_string()).collect(),
        timings: schedule
            .iter()
            .map(|(name, t)| (name.to_string(), PyTaskTiming { inner: *t }))
            .collect(),
        completion_time: schedule.completion_time(),
        critical_tasks: schedule
            .critical_tasks()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

/// The critpath Python module.
#[pymodule]
fn critpath(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTaskTiming>()?;
    m.add_class::<PySchedule>()?;
    m.add_function(wrap_pyfunction!(py_compute_schedule, m)?)?;
    Ok(())
}
