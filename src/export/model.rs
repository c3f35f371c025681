// src/export/model.rs

use crate::config::Language;
use crate::models::day_summary::{DailySummary, PeriodReport};
use crate::models::event::Event;
use chrono::FixedOffset;
use serde::Serialize;

/// Flat row of the daily summary export. Field order is the CSV column order.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DailyExport {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub work_hours: String,
    pub break_time: String,
    pub daily_wage: i64,
    pub notes: String,
}

impl DailyExport {
    pub fn from_summary(d: &DailySummary, lang: Language, in_progress_label: &str) -> Self {
        Self {
            date: d.date.format("%Y-%m-%d").to_string(),
            start_time: d.start_time_str(),
            end_time: d.end_time_str(in_progress_label),
            work_hours: d.work_hours_str(),
            break_time: d.break_time_str(),
            daily_wage: d.daily_wage,
            notes: d.notes_str(lang),
        }
    }
}

pub(crate) fn report_rows(
    report: &PeriodReport,
    lang: Language,
    in_progress_label: &str,
) -> Vec<DailyExport> {
    report
        .days
        .iter()
        .map(|d| DailyExport::from_summary(d, lang, in_progress_label))
        .collect()
}

/// Flat row of the raw punch export.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventExport {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub timestamp: String,
    pub is_modified: bool,
}

impl EventExport {
    pub fn from_event(ev: &Event, tz: &FixedOffset, lang: Language) -> Self {
        Self {
            id: ev.id,
            kind: ev.kind.to_db_str().to_string(),
            label: ev.kind.label(lang.is_japanese()).to_string(),
            timestamp: ev.timestamp.with_timezone(tz).to_rfc3339(),
            is_modified: ev.is_modified,
        }
    }
}

/// JSON document for a summary export: rows plus the period total.
#[derive(Serialize, Debug)]
pub(crate) struct ReportDocument {
    pub days: Vec<DailyExport>,
    pub total_wage: i64,
}
