// src/request/model.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level scheduling request as read from a TOML file.
///
/// This is a direct mapping of the request format:
///
/// ```toml
/// [[tasks]]
/// title = "Research"
/// estimated_hours = 4
///
/// [[tasks]]
/// title = "Design"
/// estimated_hours = 8
/// due_date = "2026-08-10T17:00:00Z"
/// dependencies = ["Research"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleRequest {
    /// All tasks, in file order.
    ///
    /// File order is the input order: it decides which of two independent
    /// tasks comes first in the computed schedule, so the same file always
    /// produces the same order.
    #[serde(default)]
    pub tasks: Vec<ScheduleTask>,
}

/// A single `[[tasks]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleTask {
    /// Task title. Must be non-blank and unique within the request; this is
    /// the task's identity, there is no separate numeric ID at this layer.
    pub title: String,

    /// Estimated effort in whole hours. Must lie in `1..=1000`.
    pub estimated_hours: u32,

    /// Optional completion deadline (RFC 3339 string in TOML).
    ///
    /// If `None`, the task is unconstrained.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,

    /// Titles of tasks in the same request that must complete before this
    /// one can start. Blank entries are ignored, not errors.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// Successful scheduling outcome.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    /// Task titles in a valid execution order: every dependency appears
    /// before each task that lists it.
    pub recommended_order: Vec<String>,

    /// Human-readable summary. Carries no machine-checkable meaning.
    pub message: String,
}
