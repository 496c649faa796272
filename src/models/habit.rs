use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Swatches offered when creating a habit; the first one is the default.
pub const HABIT_COLORS: [&str; 7] = [
    "#16a34a", "#0d9488", "#4338ca", "#be185d", "#dc2626", "#a21caf", "#ea580c",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub title: String,
    pub streak: u32,
    pub completed_today: bool,
    pub color: String,
}

impl Habit {
    pub fn new(id: impl Into<String>, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            streak: 0,
            completed_today: false,
            color: color.into(),
        }
    }

    /// Flip today's completion. Completing extends the streak, undoing it
    /// gives the day back (never below zero).
    pub fn toggle(&mut self) {
        self.completed_today = !self.completed_today;
        self.streak = if self.completed_today {
            self.streak + 1
        } else {
            self.streak.saturating_sub(1)
        };
    }
}

pub fn is_valid_color(c: &str) -> bool {
    c.len() == 7 && c.starts_with('#') && c[1..].chars().all(|ch| ch.is_ascii_hexdigit())
}

/// One cell of the Monday-first weekly strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMark {
    Other,
    Today,
    TodayDone,
}

pub const WEEK_LETTERS: [char; 7] = ['M', 'T', 'W', 'T', 'F', 'S', 'S'];

/// Only today carries state: it is done as soon as any habit was completed.
pub fn weekly_snapshot(habits: &[Habit], today: NaiveDate) -> [DayMark; 7] {
    let mut marks = [DayMark::Other; 7];
    let idx = today.weekday().num_days_from_monday() as usize;
    marks[idx] = if habits.iter().any(|h| h.completed_today) {
        DayMark::TodayDone
    } else {
        DayMark::Today
    };
    marks
}
