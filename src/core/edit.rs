//! Draft state for creating or editing exactly one calendar event.
//!
//! ```text
//! Idle --begin_create / begin_create_at_slot--> Creating
//! any  --begin_edit(event)-------------------> EditingExisting
//! Creating        --commit (title ok)--> Idle   (Commit::Create)
//! EditingExisting --commit (title ok)--> Idle   (Commit::Update)
//! any  --cancel------------------------> Idle
//! ```
//!
//! Opening a new session while one is active silently discards the old draft.

use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::event::{CalendarEvent, DEFAULT_EVENT_CATEGORY};
use crate::utils::time::{fractional_hour_to_clock_string, parse_clock_string};
use chrono::NaiveDate;
use log::debug;
use uuid::Uuid;

pub const DEFAULT_START: &str = "09:00";
pub const DEFAULT_END: &str = "10:00";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionMode {
    #[default]
    Idle,
    Creating,
    EditingExisting {
        target_id: String,
    },
}

/// Result of a commit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Commit {
    /// Nothing to commit: idle session or blank title. The form stays open.
    Rejected,
    Create(CalendarEvent),
    Update(CalendarEvent),
}

impl Commit {
    /// Route the committed event into the store.
    pub fn apply(self, store: EventStore) -> EventStore {
        match self {
            Commit::Rejected => store,
            Commit::Create(ev) => store.add(ev),
            Commit::Update(ev) => store.update(ev),
        }
    }

    pub fn event(&self) -> Option<&CalendarEvent> {
        match self {
            Commit::Rejected => None,
            Commit::Create(ev) | Commit::Update(ev) => Some(ev),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    mode: SessionMode,
    pub draft_title: String,
    pub draft_start: String,
    pub draft_end: String,
    pub draft_category: String,
}

impl Default for EditSession {
    fn default() -> Self {
        Self {
            mode: SessionMode::Idle,
            draft_title: String::new(),
            draft_start: DEFAULT_START.to_string(),
            draft_end: DEFAULT_END.to_string(),
            draft_category: DEFAULT_EVENT_CATEGORY.to_string(),
        }
    }
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    pub fn is_active(&self) -> bool {
        self.mode != SessionMode::Idle
    }

    pub fn target_id(&self) -> Option<&str> {
        match &self.mode {
            SessionMode::EditingExisting { target_id } => Some(target_id),
            _ => None,
        }
    }

    /// "add" action: blank title, 09:00 to 10:00.
    pub fn begin_create(&mut self) {
        if self.is_active() {
            debug!("edit session: discarding open draft");
        }
        *self = Self {
            mode: SessionMode::Creating,
            ..Self::default()
        };
    }

    /// Click on an empty hour slot: prefill that hour and the next.
    ///
    /// The last slot of the day ends at 23:59 since "24:00" is not a valid
    /// clock string.
    pub fn begin_create_at_slot(&mut self, hour: u32) -> AppResult<()> {
        if hour > 23 {
            return Err(AppError::InvalidSlot(hour));
        }
        self.begin_create();
        self.draft_start = format!("{:02}:00", hour);
        self.draft_end = if hour == 23 {
            "23:59".to_string()
        } else {
            format!("{:02}:00", hour + 1)
        };
        Ok(())
    }

    /// "edit" action: drafts decomposed from the event's fractional hours.
    pub fn begin_edit(&mut self, event: &CalendarEvent) {
        if self.is_active() {
            debug!("edit session: discarding open draft");
        }
        self.mode = SessionMode::EditingExisting {
            target_id: event.id.clone(),
        };
        self.draft_title = event.title.clone();
        self.draft_start = fractional_hour_to_clock_string(event.start_hour);
        self.draft_end = fractional_hour_to_clock_string(event.end_hour);
        self.draft_category = event.category.clone();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft_title = title.into();
    }

    pub fn set_start(&mut self, start: impl Into<String>) {
        self.draft_start = start.into();
    }

    pub fn set_end(&mut self, end: impl Into<String>) {
        self.draft_end = end.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.draft_category = category.into();
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Turn the draft into an event for `date`.
    ///
    /// A blank title (after trimming) is rejected without error and the
    /// session stays open; so does an unparsable draft time, which is
    /// reported as [`AppError::InvalidTime`]. On success the session is back
    /// to idle.
    pub fn commit(&mut self, date: NaiveDate) -> AppResult<Commit> {
        if !self.is_active() || self.draft_title.trim().is_empty() {
            return Ok(Commit::Rejected);
        }

        let start_hour = parse_clock_string(&self.draft_start)
            .ok_or_else(|| AppError::InvalidTime(self.draft_start.clone()))?;
        let end_hour = parse_clock_string(&self.draft_end)
            .ok_or_else(|| AppError::InvalidTime(self.draft_end.clone()))?;

        let id = match &self.mode {
            SessionMode::EditingExisting { target_id } => target_id.clone(),
            _ => Uuid::new_v4().to_string(),
        };

        let event = CalendarEvent::new(id, self.draft_title.clone(), date, start_hour, end_hour)
            .with_category(self.draft_category.clone());

        let commit = match self.mode {
            SessionMode::EditingExisting { .. } => Commit::Update(event),
            _ => Commit::Create(event),
        };

        self.cancel();
        Ok(commit)
    }
}
