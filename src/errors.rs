// src/errors.rs

//! Crate-wide error types.
//!
//! The scheduling core distinguishes two terminal failure kinds: bad input,
//! rejected during validation before any scheduling work happens, and cycle
//! detection, reported only after the topological sort has drained its
//! worklist. File-level failures (missing request file, TOML syntax) stay on
//! `anyhow` with path context and never reach the core.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The request is malformed: empty task list, blank or duplicate titles,
    /// estimated hours out of range, or a dependency naming a task that is
    /// not part of the request.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The dependency graph contains at least one directed cycle, so no
    /// valid execution order exists.
    #[error("Circular dependency detected. Tasks cannot be scheduled due to dependency cycles.")]
    CycleDetected,
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
