//! Vertical geometry of the day timeline.
//!
//! The grid is a column of fixed-height hour rows (`first_hour..=last_hour`).
//! Each event becomes a single block anchored in the row of its start hour;
//! blocks longer than an hour overflow downwards through their height instead
//! of being split. Blocks that share a row are stacked in order with a fixed
//! margin, so overlapping events are not placed side by side.

use crate::core::projector::bucket_by_hour;
use crate::models::event::CalendarEvent;
use crate::utils::time::{format_fractional_hour, fractional_hour};
use chrono::{NaiveDate, NaiveDateTime};

pub const HOUR_HEIGHT: f64 = 80.0;
pub const MIN_BLOCK_HEIGHT: f64 = 50.0;
pub const FIRST_HOUR: u32 = 6;
pub const LAST_HOUR: u32 = 23;
pub const BLOCK_MARGIN: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub hour_height: f64,
    pub min_block_height: f64,
    pub first_hour: u32,
    pub last_hour: u32,
    pub block_margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hour_height: HOUR_HEIGHT,
            min_block_height: MIN_BLOCK_HEIGHT,
            first_hour: FIRST_HOUR,
            last_hour: LAST_HOUR,
            block_margin: BLOCK_MARGIN,
        }
    }
}

/// Geometry of one event relative to the top of its hour row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockLayout {
    pub offset_within_hour: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBlock<'a> {
    pub event: &'a CalendarEvent,
    pub layout: BlockLayout,
    /// Top edge inside the row once earlier blocks of the row are stacked.
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourRow<'a> {
    pub hour: u32,
    pub label: String,
    /// Top edge of the row inside the grid.
    pub top: f64,
    pub blocks: Vec<PlacedBlock<'a>>,
}

impl LayoutConfig {
    pub fn hours(&self) -> impl Iterator<Item = u32> {
        self.first_hour..=self.last_hour
    }

    pub fn visible_hours(&self) -> usize {
        self.hours().count()
    }

    pub fn grid_height(&self) -> f64 {
        self.visible_hours() as f64 * self.hour_height
    }

    pub fn block_layout(&self, event: &CalendarEvent) -> BlockLayout {
        let offset_within_hour = event.start_hour.fract() * self.hour_height;
        let height = (event.duration_hours() * self.hour_height).max(self.min_block_height);
        BlockLayout {
            offset_within_hour,
            height,
        }
    }

    /// Stack the events of one hour bucket in document order.
    pub fn stack<'a>(&self, bucket: &[&'a CalendarEvent]) -> Vec<PlacedBlock<'a>> {
        let mut cursor = 0.0;
        bucket
            .iter()
            .map(|&event| {
                let layout = self.block_layout(event);
                let top = cursor + layout.offset_within_hour;
                cursor = top + layout.height + self.block_margin;
                PlacedBlock { event, layout, top }
            })
            .collect()
    }

    /// Lay out a projected day, one row per visible hour.
    pub fn layout_day<'a>(&self, day_events: &[&'a CalendarEvent]) -> Vec<HourRow<'a>> {
        self.hours()
            .enumerate()
            .map(|(i, hour)| HourRow {
                hour,
                label: format_fractional_hour(hour as f64),
                top: i as f64 * self.hour_height,
                blocks: self.stack(&bucket_by_hour(day_events, hour)),
            })
            .collect()
    }

    /// Vertical position of the "current time" line, if it should be shown.
    ///
    /// Only the real current date gets an indicator, and only while the time
    /// is inside `[first_hour, 24)`.
    pub fn now_indicator(&self, now: NaiveDateTime, selected: NaiveDate) -> Option<f64> {
        if now.date() != selected {
            return None;
        }

        let h = fractional_hour(now.time());
        if h < self.first_hour as f64 || h >= 24.0 {
            return None;
        }

        Some((h - self.first_hour as f64) * self.hour_height)
    }

    /// Row index (0-based) that contains a grid position.
    pub fn row_at(&self, position: f64) -> Option<usize> {
        if position < 0.0 || self.hour_height <= 0.0 {
            return None;
        }
        let idx = (position / self.hour_height).floor() as usize;
        (idx < self.visible_hours()).then_some(idx)
    }
}

pub fn block_layout(event: &CalendarEvent) -> BlockLayout {
    LayoutConfig::default().block_layout(event)
}

pub fn layout_day<'a>(day_events: &[&'a CalendarEvent]) -> Vec<HourRow<'a>> {
    LayoutConfig::default().layout_day(day_events)
}

pub fn now_indicator(now: NaiveDateTime, selected: NaiveDate) -> Option<f64> {
    LayoutConfig::default().now_indicator(now, selected)
}
