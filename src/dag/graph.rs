// src/dag/graph.rs

use std::collections::HashMap;

use tracing::debug;

use crate::errors::{Result, ScheduleError};
use crate::request::model::ScheduleTask;

/// Lowest accepted `estimated_hours` value.
pub const MIN_ESTIMATED_HOURS: u32 = 1;
/// Highest accepted `estimated_hours` value.
pub const MAX_ESTIMATED_HOURS: u32 = 1000;

/// In-memory dependency graph keyed by task title.
///
/// Edges point dependency -> dependent, so the adjacency list of `"A"` holds
/// the tasks that must wait for `"A"`. The graph is built once per request
/// and consumed by the scheduler; it has no lifecycle beyond that call.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// Node titles in first-seen input order.
    ///
    /// Worklist seeding iterates this list, which makes tie-breaking between
    /// independent tasks reproducible across runs.
    pub(crate) titles: Vec<String>,

    /// Direct dependents of each title. A dependency listed twice by the
    /// same task contributes two entries here and two in-degree increments;
    /// the extra edges cancel out during scheduling.
    pub(crate) adjacency: HashMap<String, Vec<String>>,

    /// Count of unresolved prerequisite edges per title.
    pub(crate) in_degree: HashMap<String, usize>,
}

impl DependencyGraph {
    /// Validate `tasks` and build the graph.
    ///
    /// Fails with [`ScheduleError::InvalidInput`] before returning any
    /// partial structure if the task list is empty, a title is blank or
    /// repeated, estimated hours fall outside `1..=1000`, or a dependency
    /// names a task that is not part of the request. Caller-supplied tasks
    /// are never mutated.
    pub fn build(tasks: &[ScheduleTask]) -> Result<Self> {
        if tasks.is_empty() {
            return Err(ScheduleError::InvalidInput(
                "At least one task is required".to_string(),
            ));
        }

        let mut titles: Vec<String> = Vec::with_capacity(tasks.len());
        let mut adjacency: HashMap<String, Vec<String>> = HashMap::with_capacity(tasks.len());
        let mut in_degree: HashMap<String, usize> = HashMap::with_capacity(tasks.len());

        // First pass: one node per task title.
        for task in tasks {
            if task.title.trim().is_empty() {
                return Err(ScheduleError::InvalidInput(
                    "All tasks must have a title".to_string(),
                ));
            }

            if !(MIN_ESTIMATED_HOURS..=MAX_ESTIMATED_HOURS).contains(&task.estimated_hours) {
                return Err(ScheduleError::InvalidInput(format!(
                    "Task '{}' has invalid estimated hours {} (must be between {} and {})",
                    task.title, task.estimated_hours, MIN_ESTIMATED_HOURS, MAX_ESTIMATED_HOURS
                )));
            }

            if adjacency.contains_key(&task.title) {
                return Err(ScheduleError::InvalidInput(format!(
                    "Duplicate task title: '{}'",
                    task.title
                )));
            }

            titles.push(task.title.clone());
            adjacency.insert(task.title.clone(), Vec::new());
            in_degree.insert(task.title.clone(), 0);
        }

        // Second pass: register edges dependency -> dependent.
        for task in tasks {
            for dependency in &task.dependencies {
                if dependency.trim().is_empty() {
                    continue;
                }

                match adjacency.get_mut(dependency) {
                    Some(dependents) => {
                        dependents.push(task.title.clone());
                        if let Some(count) = in_degree.get_mut(&task.title) {
                            *count += 1;
                        }
                    }
                    None => {
                        return Err(ScheduleError::InvalidInput(format!(
                            "Task '{}' has an unknown dependency: '{}'",
                            task.title, dependency
                        )));
                    }
                }
            }
        }

        let edges: usize = in_degree.values().sum();
        debug!(nodes = titles.len(), edges, "dependency graph built");

        Ok(Self {
            titles,
            adjacency,
            in_degree,
        })
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// `true` if the graph holds no nodes. Unreachable via [`Self::build`],
    /// which rejects empty requests.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// All node titles, in first-seen input order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(|s| s.as_str())
    }

    /// Immediate dependents of a task (tasks that list this one as a
    /// dependency), one entry per registered edge.
    pub fn dependents_of(&self, title: &str) -> &[String] {
        self.adjacency
            .get(title)
            .map(|d| d.as_slice())
            .unwrap_or(&[])
    }

    /// Number of unresolved prerequisite edges for a task. Zero means all
    /// prerequisites are satisfied; unknown titles also report zero.
    pub fn in_degree_of(&self, title: &str) -> usize {
        self.in_degree.get(title).copied().unwrap_or(0)
    }
}
