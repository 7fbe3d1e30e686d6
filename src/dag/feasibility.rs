// src/dag/feasibility.rs

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::errors::{Result, ScheduleError};
use crate::request::model::ScheduleTask;

/// Check whether sequential single-worker execution of `order`, starting at
/// `now`, completes every task before its due date.
///
/// Each task starts at `now` or at the latest completion time among its
/// dependencies simulated so far, whichever is later. A dependency that does
/// not appear earlier in `order` is ignored for this purpose rather than
/// treated as an error: the checker trusts the caller's order and does not
/// enforce dependency-before-dependent placement. Durations are wall-clock
/// hours, not calendar-aware.
///
/// Returns `Ok(false)` on the first missed due date; infeasibility is an
/// expected outcome, not an error. An `order` entry naming no submitted task
/// is rejected as [`ScheduleError::InvalidInput`]. Inputs are never mutated.
pub fn is_feasible(
    tasks: &[ScheduleTask],
    order: &[String],
    now: DateTime<Utc>,
) -> Result<bool> {
    let by_title: HashMap<&str, &ScheduleTask> =
        tasks.iter().map(|task| (task.title.as_str(), task)).collect();

    let mut completion_times: HashMap<&str, DateTime<Utc>> =
        HashMap::with_capacity(order.len());

    for title in order {
        let task = match by_title.get(title.as_str()) {
            Some(task) => *task,
            None => {
                return Err(ScheduleError::InvalidInput(format!(
                    "Order references an unknown task: '{title}'"
                )));
            }
        };

        let mut earliest_start = now;
        for dependency in &task.dependencies {
            if let Some(&dep_completion) = completion_times.get(dependency.as_str()) {
                if dep_completion > earliest_start {
                    earliest_start = dep_completion;
                }
            }
        }

        let completion = earliest_start + Duration::hours(i64::from(task.estimated_hours));
        completion_times.insert(task.title.as_str(), completion);

        if let Some(due) = task.due_date {
            if completion > due {
                debug!(
                    task = %task.title,
                    %completion,
                    %due,
                    "due date missed; schedule is not feasible"
                );
                return Ok(false);
            }
        }
    }

    Ok(true)
}
