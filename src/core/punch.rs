use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::db::users::find_user;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use chrono::{DateTime, Utc};

/// Live punch: one event stamped with the current instant.
pub struct PunchLogic;

impl PunchLogic {
    pub fn apply(
        pool: &mut DbPool,
        user_id: i64,
        kind: EventType,
        now: DateTime<Utc>,
    ) -> AppResult<Event> {
        if find_user(&pool.conn, user_id)?.is_none() {
            return Err(AppError::UserNotFound(user_id));
        }

        let mut ev = Event::punch(user_id, kind, now);
        ev.id = insert_event(&pool.conn, &ev)?;

        tracing::info!(id = ev.id, user_id, kind = %kind, "punch recorded");
        ttlog_quiet(
            &pool.conn,
            "punch",
            kind.to_db_str(),
            &format!("user={} id={} at {}", user_id, ev.id, now.to_rfc3339()),
        );

        Ok(ev)
    }
}
