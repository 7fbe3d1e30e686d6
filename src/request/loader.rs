// src/request/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::request::model::ScheduleRequest;

/// Load a scheduling request from a given path.
///
/// This only performs TOML deserialization; semantic validation (blank
/// titles, unknown dependencies, cycles) happens when the dependency graph
/// is built, so a loaded request is not yet known to be schedulable.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ScheduleRequest> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading request file at {:?}", path))?;

    let request: ScheduleRequest = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML request from {:?}", path))?;

    Ok(request)
}

/// Helper to resolve a default request path.
///
/// Currently this just returns `Plandag.toml` in the current working
/// directory; it exists so a later version can respect an env var or search
/// multiple locations.
pub fn default_request_path() -> PathBuf {
    PathBuf::from("Plandag.toml")
}
