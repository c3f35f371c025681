use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::db::users::find_user;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::utils::date::parse_required_date;
use crate::utils::time::{local_to_utc, parse_required_time};
use chrono::{DateTime, FixedOffset, Utc};

/// Raw form fields of a manual correction, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct CorrectionInput {
    pub date: String,
    pub time: String,
    pub kind: String,
}

/// Manual correction: one back-dated (or present) event flagged as modified.
pub struct AddLogic;

impl AddLogic {
    /// Validate the raw fields. Every problem is reported before anything
    /// touches the store.
    pub fn parse(
        input: &CorrectionInput,
        tz: &FixedOffset,
        now: DateTime<Utc>,
    ) -> AppResult<(EventType, DateTime<Utc>)> {
        if input.kind.trim().is_empty() {
            return Err(AppError::MissingField("type"));
        }
        let kind: EventType = input.kind.parse()?;
        let date = parse_required_date(&input.date)?;
        let time = parse_required_time(&input.time)?;
        let timestamp = local_to_utc(date, time, tz)?;

        if timestamp > now {
            return Err(AppError::InvalidTime(format!(
                "{} {} is in the future",
                input.date.trim(),
                input.time.trim()
            )));
        }

        Ok((kind, timestamp))
    }

    pub fn apply(
        pool: &mut DbPool,
        user_id: i64,
        input: &CorrectionInput,
        tz: &FixedOffset,
        now: DateTime<Utc>,
    ) -> AppResult<Event> {
        let (kind, timestamp) = Self::parse(input, tz, now)?;

        if find_user(&pool.conn, user_id)?.is_none() {
            return Err(AppError::UserNotFound(user_id));
        }

        let mut ev = Event::correction(user_id, kind, timestamp, now);
        ev.id = insert_event(&pool.conn, &ev)?;

        tracing::info!(id = ev.id, user_id, kind = %kind, "manual correction recorded");
        ttlog_quiet(
            &pool.conn,
            "add",
            kind.to_db_str(),
            &format!(
                "user={} id={} at {} (manual)",
                user_id,
                ev.id,
                ev.local_datetime_str(tz)
            ),
        );

        Ok(ev)
    }
}
