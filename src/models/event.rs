use super::event_type::EventType;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: i64,
    pub user_id: i64,            // ⇔ events.user_id
    pub kind: EventType,         // ⇔ events.kind ('START_WORK' | 'END_WORK' | ...)
    pub timestamp: DateTime<Utc>, // ⇔ events.timestamp (TEXT, RFC 3339 UTC)
    pub is_deleted: bool,        // ⇔ events.is_deleted (INT 0/1)
    pub is_modified: bool,       // ⇔ events.is_modified (INT 0/1)
    pub created_at: DateTime<Utc>, // ⇔ events.created_at (TEXT, RFC 3339 UTC)
}

impl Event {
    /// Live punch: the event happens now and is written now.
    pub fn punch(user_id: i64, kind: EventType, now: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            user_id,
            kind,
            timestamp: now,
            is_deleted: false,
            is_modified: false,
            created_at: now,
        }
    }

    /// Manual correction: back-dated (or present) instant chosen by the user.
    pub fn correction(
        user_id: i64,
        kind: EventType,
        timestamp: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            user_id,
            kind,
            timestamp,
            is_deleted: false,
            is_modified: true,
            created_at: now,
        }
    }

    /// Calendar day of the punch in the given civil timezone.
    pub fn local_date(&self, tz: &FixedOffset) -> NaiveDate {
        self.timestamp.with_timezone(tz).date_naive()
    }

    pub fn local_time_str(&self, tz: &FixedOffset) -> String {
        self.timestamp.with_timezone(tz).format("%H:%M").to_string()
    }

    pub fn local_datetime_str(&self, tz: &FixedOffset) -> String {
        self.timestamp
            .with_timezone(tz)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }
}
