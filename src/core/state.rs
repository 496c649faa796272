//! Application state owner.
//!
//! `AppState` holds everything the planner knows (tasks, habits, calendar
//! events) plus the selected date, and is the only thing allowed to change
//! it. Views never poke at fields: they call a named operation and get told
//! about the outcome through the observer list.

use crate::core::edit::{Commit, EditSession};
use crate::core::layout::{HourRow, LayoutConfig};
use crate::core::projector::project_day;
use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::event::CalendarEvent;
use crate::models::habit::Habit;
use crate::models::task::{Progress, Task, TaskCategory};
use chrono::NaiveDate;
use log::{debug, warn};
use uuid::Uuid;

/// What a committed mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Events,
    Tasks,
    Habits,
    SelectedDate,
    Cleared,
}

/// Plain data, as persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppData {
    pub tasks: Vec<Task>,
    pub habits: Vec<Habit>,
    pub events: EventStore,
}

pub type SubscriptionId = u64;

type Listener = Box<dyn FnMut(Change, &AppData) -> AppResult<()>>;

pub struct AppState {
    data: AppData,
    selected_date: NaiveDate,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: SubscriptionId,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("data", &self.data)
            .field("selected_date", &self.selected_date)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl AppState {
    pub fn new(data: AppData, selected_date: NaiveDate) -> Self {
        Self {
            data,
            selected_date,
            listeners: Vec::new(),
            next_id: 1,
        }
    }

    // ---------------------------
    // Observers
    // ---------------------------

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(Change, &AppData) -> AppResult<()> + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        before != self.listeners.len()
    }

    /// Every listener sees the change, even when an earlier one failed;
    /// the first error is returned.
    fn notify(&mut self, change: Change) -> AppResult<()> {
        debug!("state: notify {:?} to {} listener(s)", change, self.listeners.len());
        let mut first_err = None;
        for (_, listener) in self.listeners.iter_mut() {
            if let Err(e) = listener(change, &self.data)
                && first_err.is_none()
            {
                first_err = Some(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    // ---------------------------
    // Read access
    // ---------------------------

    pub fn data(&self) -> &AppData {
        &self.data
    }

    pub fn events(&self) -> &EventStore {
        &self.data.events
    }

    pub fn tasks(&self) -> &[Task] {
        &self.data.tasks
    }

    pub fn habits(&self) -> &[Habit] {
        &self.data.habits
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn day_events(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        project_day(&self.data.events, date)
    }

    pub fn day_layout(&self, date: NaiveDate, layout: &LayoutConfig) -> Vec<HourRow<'_>> {
        layout.layout_day(&self.day_events(date))
    }

    pub fn completion(&self) -> Progress {
        Progress::of(&self.data.tasks)
    }

    // ---------------------------
    // Calendar events
    // ---------------------------

    fn replace_events(&mut self, f: impl FnOnce(EventStore) -> EventStore) -> AppResult<()> {
        let store = std::mem::take(&mut self.data.events);
        self.data.events = f(store);
        self.notify(Change::Events)
    }

    /// Non-finite hours are rejected before the store is touched.
    fn check_hours(event: &CalendarEvent) -> AppResult<()> {
        if event.has_finite_hours() {
            return Ok(());
        }
        warn!("state: rejecting {} with non-finite hours", event.id);
        Err(AppError::InvalidTime(format!(
            "{}..{}",
            event.start_hour, event.end_hour
        )))
    }

    pub fn add_event(&mut self, event: CalendarEvent) -> AppResult<()> {
        Self::check_hours(&event)?;
        self.replace_events(|s| s.add(event))
    }

    pub fn update_event(&mut self, event: CalendarEvent) -> AppResult<()> {
        Self::check_hours(&event)?;
        self.replace_events(|s| s.update(event))
    }

    pub fn remove_event(&mut self, id: &str) -> AppResult<()> {
        self.replace_events(|s| s.remove(id))
    }

    /// Commit an edit session against the selected date.
    ///
    /// Listeners are only notified when something was actually stored.
    pub fn commit_session(&mut self, session: &mut EditSession) -> AppResult<Commit> {
        let commit = session.commit(self.selected_date)?;
        if commit != Commit::Rejected {
            let applied = commit.clone();
            self.replace_events(|s| applied.apply(s))?;
        }
        Ok(commit)
    }

    /// Navigate the day view.
    pub fn select_date(&mut self, date: NaiveDate) -> AppResult<()> {
        if self.selected_date == date {
            return Ok(());
        }
        self.selected_date = date;
        self.notify(Change::SelectedDate)
    }

    // ---------------------------
    // Tasks
    // ---------------------------

    /// Newest tasks go first.
    pub fn add_task(&mut self, title: &str, category: TaskCategory) -> AppResult<Task> {
        let task = Task::new(new_id(), title, category);
        self.data.tasks.insert(0, task.clone());
        self.notify(Change::Tasks)?;
        Ok(task)
    }

    /// Returns `false` (and notifies nobody) when the id is unknown.
    pub fn toggle_task(&mut self, id: &str) -> AppResult<bool> {
        match self.data.tasks.iter_mut().find(|t| t.id == id) {
            Some(t) => t.toggle(),
            None => return Ok(false),
        }
        self.notify(Change::Tasks)?;
        Ok(true)
    }

    // ---------------------------
    // Habits
    // ---------------------------

    pub fn add_habit(&mut self, title: &str, color: &str) -> AppResult<Habit> {
        let habit = Habit::new(new_id(), title, color);
        self.data.habits.push(habit.clone());
        self.notify(Change::Habits)?;
        Ok(habit)
    }

    pub fn toggle_habit(&mut self, id: &str) -> AppResult<bool> {
        match self.data.habits.iter_mut().find(|h| h.id == id) {
            Some(h) => h.toggle(),
            None => return Ok(false),
        }
        self.notify(Change::Habits)?;
        Ok(true)
    }

    pub fn remove_habit(&mut self, id: &str) -> AppResult<bool> {
        let before = self.data.habits.len();
        self.data.habits.retain(|h| h.id != id);
        if before == self.data.habits.len() {
            return Ok(false);
        }
        self.notify(Change::Habits)?;
        Ok(true)
    }

    // ---------------------------
    // Reset
    // ---------------------------

    pub fn clear_all(&mut self) -> AppResult<()> {
        self.data = AppData::default();
        self.notify(Change::Cleared)
    }
}
