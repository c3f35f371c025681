use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const EVENT_COLUMNS: &str = "id, user_id, kind, timestamp, is_deleted, is_modified, created_at";

/// Stored form of an instant: RFC 3339, UTC, second precision. Fixed width,
/// so string comparison in SQL matches chronological order.
pub fn to_db_ts(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn parse_db_ts(col: usize, s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                col,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTime(s.to_string())),
            )
        })
}

pub fn map_row(row: &Row) -> Result<Event> {
    let kind_str: String = row.get("kind")?;
    let kind = EventType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEventType(kind_str.clone())),
        )
    })?;

    let ts: String = row.get("timestamp")?;
    let created: String = row.get("created_at")?;

    Ok(Event {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        kind,
        timestamp: parse_db_ts(3, &ts)?,
        is_deleted: row.get::<_, i32>("is_deleted")? == 1,
        is_modified: row.get::<_, i32>("is_modified")? == 1,
        created_at: parse_db_ts(6, &created)?,
    })
}

/// Append a new event and return its id.
pub fn insert_event(conn: &Connection, ev: &Event) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (user_id, kind, timestamp, is_deleted, is_modified, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            ev.user_id,
            ev.kind.to_db_str(),
            to_db_ts(&ev.timestamp),
            if ev.is_deleted { 1 } else { 0 },
            if ev.is_modified { 1 } else { 0 },
            to_db_ts(&ev.created_at),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn collect(rows: impl Iterator<Item = Result<Event>>) -> AppResult<Vec<Event>> {
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Live (not soft-deleted) events of a user with `from <= timestamp < to`.
/// `None` leaves that side unbounded. Ordered by timestamp, then id.
pub fn load_events_between(
    conn: &Connection,
    user_id: i64,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> AppResult<Vec<Event>> {
    let from_str = from.as_ref().map(to_db_ts);
    let to_str = to.as_ref().map(to_db_ts);

    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM events
         WHERE user_id = ?1
           AND is_deleted = 0
           AND (?2 IS NULL OR timestamp >= ?2)
           AND (?3 IS NULL OR timestamp < ?3)
         ORDER BY timestamp ASC, id ASC"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![user_id, from_str, to_str], map_row)?;
    collect(rows)
}

pub fn find_event(conn: &Connection, id: i64) -> AppResult<Option<Event>> {
    let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?1");
    Ok(conn.query_row(&sql, [id], map_row).optional()?)
}

/// Most recently created live event of a user (creation order, not punch time).
pub fn latest_created_event(conn: &Connection, user_id: i64) -> AppResult<Option<Event>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM events
         WHERE user_id = ?1 AND is_deleted = 0
         ORDER BY created_at DESC, id DESC
         LIMIT 1"
    );
    Ok(conn.query_row(&sql, [user_id], map_row).optional()?)
}

/// Live event with the latest punch time; drives the current status.
pub fn latest_event_by_timestamp(conn: &Connection, user_id: i64) -> AppResult<Option<Event>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM events
         WHERE user_id = ?1 AND is_deleted = 0
         ORDER BY timestamp DESC, id DESC
         LIMIT 1"
    );
    Ok(conn.query_row(&sql, [user_id], map_row).optional()?)
}

pub fn soft_delete_event(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("UPDATE events SET is_deleted = 1 WHERE id = ?1", [id])?;
    Ok(())
}

pub fn count_events_for_user(conn: &Connection, user_id: i64) -> AppResult<i64> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM events WHERE user_id = ?1",
        [user_id],
        |r| r.get(0),
    )?)
}
