// src/export/logic.rs

use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{EventExport, ExportFormat};
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use std::path::Path;

/// High-level export of calendar events.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the events of `store`.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None` / `"all"` for everything, otherwise a period such as
    ///   `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or `start:end`
    pub fn export(
        store: &EventStore,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output path must be absolute: {}",
                file
            )));
        }

        let bounds = match range {
            None | Some("all") => None,
            Some(r) => Some(parse_period(r).map_err(AppError::InvalidDate)?),
        };

        // Per-day chronological order reads better in a file than the
        // store's global start-hour order.
        let mut rows: Vec<_> = store
            .iter()
            .filter(|ev| bounds.is_none_or(|(from, to)| ev.date >= from && ev.date <= to))
            .collect();
        rows.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then(a.start_hour.total_cmp(&b.start_hour))
        });
        let rows: Vec<EventExport> = rows.into_iter().map(EventExport::from).collect();

        if rows.is_empty() {
            warning("No events found for the requested range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Csv => export_csv(&rows, path)?,
        }

        Ok(rows.len())
    }
}
