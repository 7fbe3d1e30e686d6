// src/lib.rs

pub mod cli;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod request;

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info};

use crate::cli::{CliArgs, OutputFormat};
use crate::dag::{calculate_schedule, is_feasible};
use crate::request::loader::load_from_path;
use crate::request::model::{ScheduleRequest, ScheduleResponse};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - request loading
/// - graph construction + topological scheduling
/// - output rendering (text or JSON)
/// - the optional due-date feasibility pass
pub fn run(args: CliArgs) -> Result<()> {
    let request = load_from_path(&args.request)?;

    if args.dry_run {
        print_dry_run(&request);
        return Ok(());
    }

    let response = calculate_schedule(&request)?;
    info!(tasks = response.recommended_order.len(), "schedule computed");

    match args.format {
        OutputFormat::Text => print_text(&response),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    if args.feasibility {
        let now = args.now.unwrap_or_else(Utc::now);
        debug!(%now, "running feasibility check");

        if is_feasible(&request.tasks, &response.recommended_order, now)? {
            println!("Feasible: every task completes before its due date.");
        } else {
            println!("Not feasible: at least one task misses its due date.");
        }
    }

    Ok(())
}

/// Text rendering of a successful schedule.
fn print_text(response: &ScheduleResponse) {
    println!("Recommended order:");
    for (i, title) in response.recommended_order.iter().enumerate() {
        println!("  {}. {}", i + 1, title);
    }
    println!("{}", response.message);
}

/// Simple dry-run output: print tasks, durations, due dates and deps.
fn print_dry_run(request: &ScheduleRequest) {
    println!("plandag dry-run");
    println!("tasks ({}):", request.tasks.len());
    for task in &request.tasks {
        println!("  - {}", task.title);
        println!("      estimated_hours: {}", task.estimated_hours);
        if let Some(due) = task.due_date {
            println!("      due_date: {due}");
        }
        if !task.dependencies.is_empty() {
            println!("      dependencies: {:?}", task.dependencies);
        }
    }

    debug!("dry-run complete (no scheduling)");
}
