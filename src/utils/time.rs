//! Time utilities: "HH:MM" clock strings <-> fractional hours, AM/PM labels.
//!
//! A fractional hour encodes time-of-day as hours since midnight, e.g.
//! `14.25` is 2:15 PM.

use chrono::{NaiveTime, Timelike};

const LAST_MINUTE_OF_DAY: i64 = 23 * 60 + 59;

/// Parse a zero-padded "HH:MM" string into a fractional hour (`H + M/60`).
pub fn parse_clock_string(t: &str) -> Option<f64> {
    let time = NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()?;
    Some(fractional_hour(time))
}

pub fn fractional_hour(t: NaiveTime) -> f64 {
    t.hour() as f64 + t.minute() as f64 / 60.0
}

/// Split a fractional hour into `(hour, minute)`.
///
/// The hour is floored and the minutes rounded; a rounding that reaches 60
/// carries into the hour. The result never leaves `00:00..=23:59`.
pub fn clock_parts(h: f64) -> (u32, u32) {
    if !h.is_finite() || h <= 0.0 {
        return (0, 0);
    }

    // floor(h) * 60 + round(fract(h) * 60) == round(h * 60) for h >= 0
    let total = ((h * 60.0).round() as i64).min(LAST_MINUTE_OF_DAY);
    ((total / 60) as u32, (total % 60) as u32)
}

/// Format a fractional hour back into a zero-padded "HH:MM" string.
pub fn fractional_hour_to_clock_string(h: f64) -> String {
    let (hour, minute) = clock_parts(h);
    format!("{:02}:{:02}", hour, minute)
}

/// Display label like "9 AM" / "12 PM". Minutes are dropped.
pub fn format_fractional_hour(h: f64) -> String {
    let floor_h = h.floor() as i64;
    let ampm = if floor_h >= 12 { "PM" } else { "AM" };
    let display = match floor_h % 12 {
        0 => 12,
        n => n,
    };
    format!("{} {}", display, ampm)
}

/// Duration in minutes between two fractional hours, rounded.
pub fn duration_minutes(start: f64, end: f64) -> i64 {
    ((end - start) * 60.0).round() as i64
}
