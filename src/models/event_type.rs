use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The four punch kinds a user can record.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    StartWork,
    EndWork,
    StartBreak,
    EndBreak,
}

impl EventType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventType::StartWork => "START_WORK",
            EventType::EndWork => "END_WORK",
            EventType::StartBreak => "START_BREAK",
            EventType::EndBreak => "END_BREAK",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "START_WORK" => Some(EventType::StartWork),
            "END_WORK" => Some(EventType::EndWork),
            "START_BREAK" => Some(EventType::StartBreak),
            "END_BREAK" => Some(EventType::EndBreak),
            _ => None,
        }
    }

    /// Helper: accepts CLI spellings (`start-work`, `START_WORK`, `startwork`, ...)
    pub fn from_cli(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "startwork" | "in" => Some(EventType::StartWork),
            "endwork" | "out" => Some(EventType::EndWork),
            "startbreak" => Some(EventType::StartBreak),
            "endbreak" => Some(EventType::EndBreak),
            _ => None,
        }
    }

    /// Human label used in tables and raw exports.
    pub fn label(&self, japanese: bool) -> &'static str {
        match (self, japanese) {
            (EventType::StartWork, false) => "Start work",
            (EventType::EndWork, false) => "End work",
            (EventType::StartBreak, false) => "Start break",
            (EventType::EndBreak, false) => "End break",
            (EventType::StartWork, true) => "出勤",
            (EventType::EndWork, true) => "退勤",
            (EventType::StartBreak, true) => "休憩開始",
            (EventType::EndBreak, true) => "休憩終了",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

impl FromStr for EventType {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        EventType::from_cli(s).ok_or_else(|| AppError::InvalidEventType(s.to_string()))
    }
}
