use std::error::Error;

use plandag::dag::{DependencyGraph, calculate_schedule, schedule};
use plandag::request::model::ScheduleRequest;
use plandag_test_utils::builders::{ScheduleRequestBuilder, ScheduleTaskBuilder};

type TestResult = Result<(), Box<dyn Error>>;

fn chain() -> ScheduleRequest {
    ScheduleRequestBuilder::new()
        .with_task(ScheduleTaskBuilder::new("A").hours(2).build())
        .with_task(ScheduleTaskBuilder::new("B").hours(3).depends_on("A").build())
        .with_task(
            ScheduleTaskBuilder::new("C")
                .hours(1)
                .depends_on("A")
                .depends_on("B")
                .build(),
        )
        .build()
}

#[test]
fn linear_chain_schedules_in_dependency_order() -> TestResult {
    let response = calculate_schedule(&chain())?;

    assert_eq!(response.recommended_order, vec!["A", "B", "C"]);
    assert_eq!(response.message, "Successfully scheduled 3 tasks");
    Ok(())
}

#[test]
fn single_task_without_dependencies_is_returned_alone() -> TestResult {
    let request = ScheduleRequestBuilder::new()
        .with_task(ScheduleTaskBuilder::new("Only").build())
        .build();

    let response = calculate_schedule(&request)?;
    assert_eq!(response.recommended_order, vec!["Only"]);
    Ok(())
}

#[test]
fn diamond_submitted_in_reverse_still_respects_edges() -> TestResult {
    // A -> B, A -> C, B -> D, C -> D, submitted as [D, C, B, A].
    let request = ScheduleRequestBuilder::new()
        .with_task(
            ScheduleTaskBuilder::new("D")
                .depends_on("B")
                .depends_on("C")
                .build(),
        )
        .with_task(ScheduleTaskBuilder::new("C").depends_on("A").build())
        .with_task(ScheduleTaskBuilder::new("B").depends_on("A").build())
        .with_task(ScheduleTaskBuilder::new("A").build())
        .build();

    let order = calculate_schedule(&request)?.recommended_order;

    let pos = |title: &str| order.iter().position(|t| t == title).unwrap();
    assert!(pos("A") < pos("B"));
    assert!(pos("A") < pos("C"));
    assert!(pos("B") < pos("D"));
    assert!(pos("C") < pos("D"));

    // Tie-break between B and C follows edge registration order, which
    // follows input order: C's edge from A is registered before B's.
    assert_eq!(order, vec!["A", "C", "B", "D"]);
    Ok(())
}

#[test]
fn independent_tasks_keep_input_order() -> TestResult {
    let request = ScheduleRequestBuilder::new()
        .with_task(ScheduleTaskBuilder::new("Gamma").build())
        .with_task(ScheduleTaskBuilder::new("Alpha").build())
        .with_task(ScheduleTaskBuilder::new("Beta").build())
        .build();

    let order = calculate_schedule(&request)?.recommended_order;
    assert_eq!(order, vec!["Gamma", "Alpha", "Beta"]);
    Ok(())
}

#[test]
fn duplicate_dependency_entries_each_count_as_an_edge() -> TestResult {
    let request = ScheduleRequestBuilder::new()
        .with_task(ScheduleTaskBuilder::new("A").build())
        .with_task(
            ScheduleTaskBuilder::new("B")
                .depends_on("A")
                .depends_on("A")
                .build(),
        )
        .build();

    let graph = DependencyGraph::build(&request.tasks)?;
    assert_eq!(graph.in_degree_of("B"), 2);
    assert_eq!(graph.dependents_of("A"), &["B", "B"]);

    let order = schedule(graph, request.tasks.len())?;
    assert_eq!(order, vec!["A", "B"]);
    Ok(())
}

#[test]
fn repeated_invocations_return_identical_orders() -> TestResult {
    let request = chain();

    let first = calculate_schedule(&request)?.recommended_order;
    let second = calculate_schedule(&request)?.recommended_order;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn concurrent_invocations_agree_on_the_order() -> TestResult {
    let request = ScheduleRequestBuilder::new()
        .with_task(ScheduleTaskBuilder::new("setup").build())
        .with_task(ScheduleTaskBuilder::new("build").depends_on("setup").build())
        .with_task(ScheduleTaskBuilder::new("lint").depends_on("setup").build())
        .with_task(
            ScheduleTaskBuilder::new("release")
                .depends_on("build")
                .depends_on("lint")
                .build(),
        )
        .build();

    let expected = calculate_schedule(&request)?.recommended_order;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let request = request.clone();
            std::thread::spawn(move || calculate_schedule(&request))
        })
        .collect();

    for handle in handles {
        let response = handle.join().expect("scheduling thread panicked")?;
        assert_eq!(response.recommended_order, expected);
    }
    Ok(())
}
