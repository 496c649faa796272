use crate::models::event::CalendarEvent;
use serde::Serialize;

/// Flat row written by the CSV and JSON exporters.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: String,
    pub date: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub start_hour: f64,
    pub end_hour: f64,
    pub duration_minutes: i64,
    pub category: String,
}

impl From<&CalendarEvent> for EventExport {
    fn from(ev: &CalendarEvent) -> Self {
        Self {
            id: ev.id.clone(),
            date: ev.date_str(),
            title: ev.title.clone(),
            start: ev.start_str(),
            end: ev.end_str(),
            start_hour: ev.start_hour,
            end_hour: ev.end_hour,
            duration_minutes: ev.duration_minutes(),
            category: ev.category.clone(),
        }
    }
}
