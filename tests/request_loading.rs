use std::error::Error;
use std::fs;

use chrono::{TimeZone, Utc};
use plandag::dag::calculate_schedule;
use plandag::request::load_from_path;

type TestResult = Result<(), Box<dyn Error>>;

const PLAN: &str = r#"
[[tasks]]
title = "Design"
estimated_hours = 8
due_date = "2026-08-10T17:00:00Z"
dependencies = ["Research"]

[[tasks]]
title = "Research"
estimated_hours = 4

[[tasks]]
title = "Implement"
estimated_hours = 16
dependencies = ["Design", "Research"]
"#;

#[test]
fn request_file_round_trips_preserving_task_order() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Plandag.toml");
    fs::write(&path, PLAN)?;

    let request = load_from_path(&path)?;

    let titles: Vec<&str> = request.tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Design", "Research", "Implement"]);

    let design = &request.tasks[0];
    assert_eq!(design.estimated_hours, 8);
    assert_eq!(
        design.due_date,
        Some(Utc.with_ymd_and_hms(2026, 8, 10, 17, 0, 0).unwrap())
    );
    assert_eq!(design.dependencies, vec!["Research"]);

    let research = &request.tasks[1];
    assert_eq!(research.due_date, None);
    assert!(research.dependencies.is_empty());
    Ok(())
}

#[test]
fn loaded_request_schedules_end_to_end() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Plandag.toml");
    fs::write(&path, PLAN)?;

    let request = load_from_path(&path)?;
    let response = calculate_schedule(&request)?;

    assert_eq!(
        response.recommended_order,
        vec!["Research", "Design", "Implement"]
    );
    assert_eq!(response.message, "Successfully scheduled 3 tasks");
    Ok(())
}

#[test]
fn missing_request_file_reports_the_path() {
    let err = load_from_path("/nonexistent/Plandag.toml").unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("reading request file"), "{msg}");
    assert!(msg.contains("Plandag.toml"), "{msg}");
}

#[test]
fn malformed_toml_reports_a_parse_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Plandag.toml");
    fs::write(&path, "[[tasks]\ntitle = broken")?;

    let err = load_from_path(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parsing TOML request"));
    Ok(())
}
