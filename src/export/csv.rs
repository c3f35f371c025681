// src/export/csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{DailyExport, EventExport};
use serde::Serialize;

/// Serialize rows to UTF-8 CSV text; the header comes from the field names.
fn to_csv<T: Serialize>(rows: &[T], headers: &[&str]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    if rows.is_empty() {
        // serde only emits the header with the first record
        wtr.write_record(headers)?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

pub fn summaries_to_csv(rows: &[DailyExport]) -> AppResult<String> {
    to_csv(
        rows,
        &[
            "date",
            "start_time",
            "end_time",
            "work_hours",
            "break_time",
            "daily_wage",
            "notes",
        ],
    )
}

pub fn events_to_csv(rows: &[EventExport]) -> AppResult<String> {
    to_csv(rows, &["id", "type", "label", "timestamp", "is_modified"])
}
