//! Day view projection: one day's events out of the global store, then
//! partitioned into hour buckets for the timeline.

use crate::core::store::EventStore;
use crate::models::event::CalendarEvent;
use chrono::NaiveDate;

/// Events of `date`, in store order (hence sorted by start hour).
///
/// Linear in the size of the whole store; it runs on every render.
pub fn project_day(store: &EventStore, date: NaiveDate) -> Vec<&CalendarEvent> {
    store.iter().filter(|e| e.date == date).collect()
}

/// Events anchored to `hour`, i.e. `floor(start_hour) == hour`.
///
/// An event spanning several hours only lives in the bucket of its start.
pub fn bucket_by_hour<'a>(day_events: &[&'a CalendarEvent], hour: u32) -> Vec<&'a CalendarEvent> {
    day_events
        .iter()
        .copied()
        .filter(|e| e.start_bucket() == hour as i64)
        .collect()
}

/// Number of events per date, for the week strip.
pub fn count_for_date(store: &EventStore, date: NaiveDate) -> usize {
    store.iter().filter(|e| e.date == date).count()
}
