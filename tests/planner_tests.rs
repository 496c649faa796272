mod common;

use common::temp_out;
use std::fs;
use zenplan::core::planner::{
    FilePlanner, OfflinePlanner, PlanRequest, parse_plan_response, plan_or_fallback,
};
use zenplan::models::plan::AIPlanResponse;
use zenplan::models::task::{Task, TaskCategory};

const SAMPLE: &str = r#"{
  "summary": "Front-load focus work.",
  "recommendedSchedule": [
    {"time": "09:00 AM", "activity": "Write draft", "category": "Work", "duration": "2 hours"},
    {"time": "11:00 AM", "activity": "Walk", "category": "Health", "duration": "30 mins"}
  ],
  "motivationalQuote": "Small steps."
}"#;

#[test]
fn request_joins_task_titles() {
    let tasks = vec![
        Task::new("1", "Email Bob", TaskCategory::Work),
        Task::new("2", "Buy milk", TaskCategory::Personal),
    ];
    let req = PlanRequest::new("tired today", &tasks);

    assert_eq!(req.existing_tasks, "Email Bob, Buy milk");
    assert_eq!(req.brain_dump, "tired today");
    assert!(!req.is_empty());
    assert!(PlanRequest::new("  ", &[]).is_empty());
}

#[test]
fn parses_the_response_shape() {
    let plan = parse_plan_response(SAMPLE).unwrap();
    assert_eq!(plan.summary, "Front-load focus work.");
    assert_eq!(plan.recommended_schedule.len(), 2);
    assert_eq!(plan.recommended_schedule[1].activity, "Walk");
    assert_eq!(plan.motivational_quote, "Small steps.");
}

#[test]
fn empty_or_malformed_bodies_fail_to_parse() {
    assert!(parse_plan_response("").is_err());
    assert!(parse_plan_response("not json").is_err());
}

#[test]
fn file_planner_reads_a_response_document() {
    let path = temp_out("planner_ok", "json");
    fs::write(&path, SAMPLE).unwrap();

    let req = PlanRequest::new("dump", &[]);
    let plan = plan_or_fallback(&FilePlanner::new(&path), &req);
    assert_eq!(plan.recommended_schedule[0].time, "09:00 AM");
}

#[test]
fn failures_resolve_to_the_fixed_fallback() {
    let req = PlanRequest::new("dump", &[]);

    let missing = plan_or_fallback(&FilePlanner::new("/nonexistent/zenplan/plan.json"), &req);
    assert_eq!(missing, AIPlanResponse::fallback());

    let offline = plan_or_fallback(&OfflinePlanner, &req);
    assert_eq!(offline.motivational_quote, "Order is the key to clarity.");
    assert_eq!(offline.recommended_schedule[0].duration, "15 mins");
}
