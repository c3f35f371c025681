use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{find_event, latest_created_event, soft_delete_event};
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use chrono::{DateTime, Utc};

/// Undo of the latest punch. Only the most recently created live event of
/// the user may be soft-deleted, and only within `window_minutes` of its
/// creation.
///
/// The check and the update are not atomic: two requests inside the window
/// can both pass the "is latest" check. Acceptable for single-user punching.
pub struct DeleteLogic;

impl DeleteLogic {
    /// Resolve which record would be deleted and check every rule.
    pub fn check(
        pool: &DbPool,
        user_id: i64,
        id: Option<i64>,
        now: DateTime<Utc>,
        window_minutes: i64,
    ) -> AppResult<Event> {
        let latest = latest_created_event(&pool.conn, user_id)?;

        let target = match id {
            Some(id) => find_event(&pool.conn, id)?
                .filter(|e| e.user_id == user_id && !e.is_deleted)
                .ok_or_else(|| AppError::RecordNotFound(id.to_string()))?,
            None => latest
                .clone()
                .ok_or_else(|| AppError::RecordNotFound("no punches recorded".into()))?,
        };

        match &latest {
            Some(l) if l.id == target.id => {}
            Some(l) => {
                return Err(AppError::NotMostRecent {
                    requested: target.id,
                    latest: l.id,
                });
            }
            None => return Err(AppError::RecordNotFound(target.id.to_string())),
        }

        let age = now - target.created_at;
        if age.num_seconds() > window_minutes.saturating_mul(60) {
            return Err(AppError::DeletionWindowExpired {
                id: target.id,
                age: age.num_minutes(),
                window: window_minutes,
            });
        }

        Ok(target)
    }

    pub fn apply(
        pool: &mut DbPool,
        user_id: i64,
        id: Option<i64>,
        now: DateTime<Utc>,
        window_minutes: i64,
    ) -> AppResult<Event> {
        let target = Self::check(pool, user_id, id, now, window_minutes)?;

        soft_delete_event(&pool.conn, target.id)?;

        tracing::info!(id = target.id, user_id, "punch soft-deleted");
        ttlog_quiet(
            &pool.conn,
            "del",
            target.kind.to_db_str(),
            &format!("user={} id={} soft-deleted", user_id, target.id),
        );

        Ok(Event {
            is_deleted: true,
            ..target
        })
    }
}
