// src/dag/scheduler.rs

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::dag::graph::DependencyGraph;
use crate::errors::{Result, ScheduleError};
use crate::request::model::{ScheduleRequest, ScheduleResponse};

/// Compute a topological order over `graph` by repeatedly removing
/// zero-in-degree nodes (Kahn's algorithm).
///
/// The worklist is seeded with every node whose in-degree is zero, in
/// first-seen input order, and processed FIFO; both choices are what make
/// the output reproducible for a fixed request. `task_count` is the number
/// of tasks in the originating request: a sort that consumes fewer nodes
/// means the remainder forms at least one cycle, reported as
/// [`ScheduleError::CycleDetected`] with no partial order surfaced.
///
/// The function owns `graph` and touches no state outside it, so concurrent
/// calls over different requests need no coordination.
pub fn schedule(graph: DependencyGraph, task_count: usize) -> Result<Vec<String>> {
    let DependencyGraph {
        titles,
        adjacency,
        mut in_degree,
    } = graph;

    let mut worklist: VecDeque<String> = titles
        .iter()
        .filter(|title| in_degree.get(title.as_str()).copied() == Some(0))
        .cloned()
        .collect();

    let mut order: Vec<String> = Vec::with_capacity(task_count);

    while let Some(current) = worklist.pop_front() {
        if let Some(dependents) = adjacency.get(&current) {
            for dependent in dependents {
                if let Some(count) = in_degree.get_mut(dependent) {
                    *count -= 1;
                    if *count == 0 {
                        worklist.push_back(dependent.clone());
                    }
                }
            }
        }
        order.push(current);
    }

    if order.len() != task_count {
        warn!(
            scheduled = order.len(),
            total = task_count,
            "tasks left unresolved after worklist drained; at least one cycle exists"
        );
        return Err(ScheduleError::CycleDetected);
    }

    debug!(tasks = order.len(), "topological order computed");
    Ok(order)
}

/// Validate `request`, build its dependency graph, and compute the
/// recommended execution order.
///
/// This is the one-step operation the CLI uses; library callers wanting the
/// intermediate graph can use [`DependencyGraph::build`] and [`schedule`]
/// directly.
pub fn calculate_schedule(request: &ScheduleRequest) -> Result<ScheduleResponse> {
    let graph = DependencyGraph::build(&request.tasks)?;
    let order = schedule(graph, request.tasks.len())?;
    let message = format!("Successfully scheduled {} tasks", order.len());

    Ok(ScheduleResponse {
        recommended_order: order,
        message,
    })
}
