use crate::utils::time::{duration_minutes, format_fractional_hour, fractional_hour_to_clock_string};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_EVENT_CATEGORY: &str = "work";

/// A block on the day timeline.
///
/// Serialized with camelCase keys so that stored arrays keep the
/// `{id, title, date, startHour, endHour, category}` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,  // "YYYY-MM-DD"
    pub start_hour: f64,  // fractional hour, 9.5 = 09:30
    pub end_hour: f64,    // not checked against start_hour
    pub category: String, // free-form tag
}

impl CalendarEvent {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        start_hour: f64,
        end_hour: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date,
            start_hour,
            end_hour,
            category: DEFAULT_EVENT_CATEGORY.to_string(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// NaN and infinite hours serialize as JSON `null` and cannot be reloaded.
    pub fn has_finite_hours(&self) -> bool {
        self.start_hour.is_finite() && self.end_hour.is_finite()
    }

    /// Hour bucket the event is anchored to on the timeline.
    pub fn start_bucket(&self) -> i64 {
        self.start_hour.floor() as i64
    }

    pub fn duration_hours(&self) -> f64 {
        self.end_hour - self.start_hour
    }

    pub fn duration_minutes(&self) -> i64 {
        duration_minutes(self.start_hour, self.end_hour)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        fractional_hour_to_clock_string(self.start_hour)
    }

    pub fn end_str(&self) -> String {
        fractional_hour_to_clock_string(self.end_hour)
    }

    /// "9 AM - 10 AM", as shown on a timeline block.
    pub fn span_label(&self) -> String {
        format!(
            "{} - {}",
            format_fractional_hour(self.start_hour),
            format_fractional_hour(self.end_hour)
        )
    }
}
