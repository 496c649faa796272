use serde::{Deserialize, Serialize};

/// One row of a recommended schedule, e.g. `09:00 AM / Deep work / Work / 2 hours`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayScheduleItem {
    pub time: String,
    pub activity: String,
    pub category: String,
    pub duration: String,
}

/// Structured answer of the day planner collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AIPlanResponse {
    pub summary: String,
    pub recommended_schedule: Vec<DayScheduleItem>,
    pub motivational_quote: String,
}

impl AIPlanResponse {
    /// Fixed payload shown whenever the collaborator fails.
    pub fn fallback() -> Self {
        Self {
            summary: "I've encountered a small ripple in the stream of thoughts, but stay centered."
                .to_string(),
            motivational_quote: "Order is the key to clarity.".to_string(),
            recommended_schedule: vec![DayScheduleItem {
                time: "Start".to_string(),
                activity: "Review your current priorities".to_string(),
                category: "Mindfulness".to_string(),
                duration: "15 mins".to_string(),
            }],
        }
    }
}
