//! Plain-text rendering of a laid-out day.

use crate::core::layout::{HourRow, LayoutConfig, PlacedBlock};
use crate::utils::formatting::{dim, pad_left, short_id, truncate};
use crate::utils::time::fractional_hour_to_clock_string;

const LABEL_WIDTH: usize = 5;
const TITLE_WIDTH: usize = 28;

fn gutter(label: &str) -> String {
    format!("{} │", pad_left(label, LABEL_WIDTH))
}

fn block_line(block: &PlacedBlock<'_>) -> String {
    format!(
        "▍{:<width$} {}  top={:.0} h={:.0}  [{}]",
        truncate(&block.event.title, TITLE_WIDTH),
        block.event.span_label(),
        block.top,
        block.layout.height,
        short_id(&block.event.id),
        width = TITLE_WIDTH
    )
}

/// Render hour rows, one line per block, plus the "now" marker when given.
pub fn render_day(rows: &[HourRow<'_>], now: Option<f64>, layout: &LayoutConfig) -> String {
    let now_row = now.and_then(|pos| layout.row_at(pos));
    let mut out = String::new();

    for (i, row) in rows.iter().enumerate() {
        match row.blocks.split_first() {
            None => out.push_str(&gutter(&row.label)),
            Some((first, rest)) => {
                out.push_str(&format!("{} {}", gutter(&row.label), block_line(first)));
                for block in rest {
                    out.push('\n');
                    out.push_str(&format!("{} {}", gutter(""), block_line(block)));
                }
            }
        }
        out.push('\n');

        if now_row == Some(i)
            && let Some(pos) = now
        {
            let h = layout.first_hour as f64 + pos / layout.hour_height;
            out.push_str(&format!(
                "{} ●── now {} (y={:.0})\n",
                pad_left("", LABEL_WIDTH),
                fractional_hour_to_clock_string(h),
                pos
            ));
        }
    }

    out
}

/// One-line status of the now indicator, used by `watch`.
pub fn render_now(now: Option<f64>, layout: &LayoutConfig) -> String {
    match now {
        Some(pos) => {
            let h = layout.first_hour as f64 + pos / layout.hour_height;
            format!(
                "●── now {} (y={:.0} of {:.0})",
                fractional_hour_to_clock_string(h),
                pos,
                layout.grid_height()
            )
        }
        None => dim("now indicator hidden (not today or outside the visible hours)"),
    }
}
