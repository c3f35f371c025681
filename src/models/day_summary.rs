use crate::config::Language;
use crate::core::calculator::notes::Anomaly;
use crate::utils::formatting::{format_duration, format_wage};
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::Serialize;

/// How the end of a working day is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EndTime {
    /// No effective work end (no session, or an orphan start on a past day).
    Missing,
    At(NaiveTime),
    /// Still clocked in on the reference day.
    InProgress,
}

/// One reconciled day. Derived on every read, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: EndTime,
    pub worked_minutes: i64,
    pub break_minutes: i64,
    pub daily_wage: i64,
    pub notes: Vec<Anomaly>,
}

impl DailySummary {
    /// `MM/DD(weekday)`, e.g. `10/02(Thu)` or `10/02(木)`.
    pub fn date_label(&self, lang: Language) -> String {
        format!(
            "{:02}/{:02}({})",
            self.date.month(),
            self.date.day(),
            weekday_label(self.date.weekday(), lang)
        )
    }

    pub fn start_time_str(&self) -> String {
        self.start_time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }

    pub fn end_time_str(&self, in_progress_label: &str) -> String {
        match self.end_time {
            EndTime::Missing => String::new(),
            EndTime::At(t) => t.format("%H:%M").to_string(),
            EndTime::InProgress => in_progress_label.to_string(),
        }
    }

    pub fn work_hours_str(&self) -> String {
        format_duration(self.worked_minutes)
    }

    pub fn break_time_str(&self) -> String {
        format_duration(self.break_minutes)
    }

    /// Wage for display; empty when nothing accrued.
    pub fn wage_str(&self, lang: Language) -> String {
        if self.daily_wage == 0 {
            String::new()
        } else {
            format_wage(self.daily_wage, lang)
        }
    }

    pub fn notes_str(&self, lang: Language) -> String {
        self.notes
            .iter()
            .map(|n| n.render(lang))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub fn weekday_label(w: Weekday, lang: Language) -> &'static str {
    match lang {
        Language::En => match w {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        },
        Language::Ja => match w {
            Weekday::Mon => "月",
            Weekday::Tue => "火",
            Weekday::Wed => "水",
            Weekday::Thu => "木",
            Weekday::Fri => "金",
            Weekday::Sat => "土",
            Weekday::Sun => "日",
        },
    }
}

/// Output of one reconciliation run over a period.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PeriodReport {
    pub days: Vec<DailySummary>,
    pub total_wage: i64,
}
