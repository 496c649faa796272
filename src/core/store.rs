//! Ordered collection of calendar events for all dates.
//!
//! The store is the sole owner of the events. It only changes through
//! [`EventStore::add`], [`EventStore::update`] and [`EventStore::remove`],
//! each of which consumes the current state and hands back the next one.
//!
//! Invariant: iteration yields non-decreasing `start_hour`; ties keep their
//! previous relative order. The sort is global, not per day.

use crate::errors::{AppError, AppResult};
use crate::models::event::CalendarEvent;
use crate::utils::ids::resolve_by_prefix;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventStore {
    events: Vec<CalendarEvent>,
}

fn sort_by_start(events: &mut [CalendarEvent]) {
    // slice::sort_by is stable
    events.sort_by(|a, b| a.start_hour.total_cmp(&b.start_hour));
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from previously persisted events, restoring the order.
    pub fn from_events(mut events: Vec<CalendarEvent>) -> Self {
        sort_by_start(&mut events);
        Self { events }
    }

    pub fn add(mut self, event: CalendarEvent) -> Self {
        debug!("store: add {} ({})", event.id, event.date);
        self.events.push(event);
        sort_by_start(&mut self.events);
        self
    }

    /// Replace every event with the same id. Unknown ids are ignored.
    pub fn update(mut self, event: CalendarEvent) -> Self {
        let mut replaced = 0;
        for slot in self.events.iter_mut().filter(|e| e.id == event.id) {
            *slot = event.clone();
            replaced += 1;
        }
        if replaced == 0 {
            debug!("store: update of unknown id {} ignored", event.id);
        } else {
            debug!("store: update {} ({} replaced)", event.id, replaced);
        }
        sort_by_start(&mut self.events);
        self
    }

    /// Drop every event with this id. Unknown ids are ignored.
    pub fn remove(mut self, id: &str) -> Self {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        debug!("store: remove {} ({} dropped)", id, before - self.events.len());
        self
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalendarEvent> {
        self.events.iter()
    }

    pub fn get(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Find the single event whose id equals or starts with `prefix`.
    pub fn resolve_prefix(&self, prefix: &str) -> AppResult<&CalendarEvent> {
        resolve_by_prefix(&self.events, prefix, |e| e.id.as_str(), AppError::EventNotFound)
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a CalendarEvent;
    type IntoIter = std::slice::Iter<'a, CalendarEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
