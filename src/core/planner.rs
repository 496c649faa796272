//! "Optimize my day" collaborator seam.
//!
//! The planner itself lives outside this crate (a generative-language
//! service). This module only knows the request it sends, the JSON shape it
//! gets back and the rule that a failure must never reach the UI: whatever
//! goes wrong resolves to [`AIPlanResponse::fallback`].

use crate::errors::{AppError, AppResult};
use crate::models::plan::AIPlanResponse;
use crate::models::task::Task;
use log::warn;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub brain_dump: String,
    /// Titles of the current tasks joined with ", ".
    pub existing_tasks: String,
}

impl PlanRequest {
    pub fn new(brain_dump: &str, tasks: &[Task]) -> Self {
        Self {
            brain_dump: brain_dump.to_string(),
            existing_tasks: tasks
                .iter()
                .map(|t| t.title.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Nothing worth sending: no brain dump and no tasks.
    pub fn is_empty(&self) -> bool {
        self.brain_dump.trim().is_empty() && self.existing_tasks.is_empty()
    }
}

pub trait Planner {
    fn optimize(&self, request: &PlanRequest) -> AppResult<AIPlanResponse>;
}

/// Reads a response document that was produced out of band.
pub struct FilePlanner {
    path: PathBuf,
}

impl FilePlanner {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Planner for FilePlanner {
    fn optimize(&self, _request: &PlanRequest) -> AppResult<AIPlanResponse> {
        let raw = fs::read_to_string(&self.path)?;
        parse_plan_response(&raw)
    }
}

/// Parse the collaborator's JSON text. An empty body counts as `{}`.
pub fn parse_plan_response(raw: &str) -> AppResult<AIPlanResponse> {
    let text = if raw.trim().is_empty() { "{}" } else { raw };
    serde_json::from_str(text).map_err(AppError::from)
}

pub fn plan_or_fallback(planner: &dyn Planner, request: &PlanRequest) -> AIPlanResponse {
    match planner.optimize(request) {
        Ok(plan) => plan,
        Err(e) => {
            warn!("planner: falling back after error: {}", e);
            AIPlanResponse::fallback()
        }
    }
}

/// Used when no response document is available: always reports that the
/// collaborator could not be reached.
pub struct OfflinePlanner;

impl Planner for OfflinePlanner {
    fn optimize(&self, _request: &PlanRequest) -> AppResult<AIPlanResponse> {
        Err(AppError::Other("planner unavailable offline".into()))
    }
}
