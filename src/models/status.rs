use super::event_type::EventType;
use serde::Serialize;
use std::fmt;

/// Where the user stands right now, derived from the latest live event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkStatus {
    Working,
    OnBreak,
    NotWorking,
}

impl WorkStatus {
    pub fn from_latest(kind: Option<EventType>) -> Self {
        match kind {
            Some(EventType::StartWork) | Some(EventType::EndBreak) => WorkStatus::Working,
            Some(EventType::StartBreak) => WorkStatus::OnBreak,
            Some(EventType::EndWork) | None => WorkStatus::NotWorking,
        }
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorkStatus::Working => "WORKING",
            WorkStatus::OnBreak => "ON_BREAK",
            WorkStatus::NotWorking => "NOT_WORKING",
        };
        f.write_str(s)
    }
}
