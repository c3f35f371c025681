use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::db::queries::{latest_event_by_timestamp, load_events_between};
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::status::WorkStatus;
use crate::core::report::instant_bounds;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

#[derive(Debug, Clone)]
pub struct StatusView {
    pub status: WorkStatus,
    pub today: NaiveDate,
    pub today_events: Vec<Event>,
    /// The punch that `del` would currently accept, if any.
    pub deletable: Option<i64>,
}

pub struct StatusLogic;

impl StatusLogic {
    pub fn current(
        pool: &DbPool,
        user_id: i64,
        tz: &FixedOffset,
        now: DateTime<Utc>,
        window_minutes: i64,
    ) -> AppResult<StatusView> {
        let latest = latest_event_by_timestamp(&pool.conn, user_id)?;
        let status = WorkStatus::from_latest(latest.map(|e| e.kind));

        let today = crate::utils::date::today_at(now, tz);
        let (from, to) = instant_bounds(Some((today, today)), tz)?;
        let today_events = load_events_between(&pool.conn, user_id, from, to)?;

        let deletable = DeleteLogic::check(pool, user_id, None, now, window_minutes)
            .ok()
            .map(|e| e.id);

        Ok(StatusView {
            status,
            today,
            today_events,
            deletable,
        })
    }
}
