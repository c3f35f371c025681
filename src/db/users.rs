use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_user(row: &Row) -> rusqlite::Result<User> {
    let created: String = row.get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTime(created.clone())),
            )
        })?;

    Ok(User {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        created_at,
    })
}

pub fn insert_user(conn: &Connection, name: &str, email: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO users (name, email, created_at) VALUES (?1, ?2, ?3)",
        params![name, email, Utc::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_user(conn: &Connection, id: i64) -> AppResult<Option<User>> {
    Ok(conn
        .query_row(
            "SELECT id, name, email, created_at FROM users WHERE id = ?1",
            [id],
            map_user,
        )
        .optional()?)
}

pub fn find_user_by_email(conn: &Connection, email: &str) -> AppResult<Option<User>> {
    Ok(conn
        .query_row(
            "SELECT id, name, email, created_at FROM users WHERE email = ?1 COLLATE NOCASE",
            [email],
            map_user,
        )
        .optional()?)
}

pub fn list_users(conn: &Connection) -> AppResult<Vec<User>> {
    let mut stmt = conn.prepare("SELECT id, name, email, created_at FROM users ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_user)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_user(conn: &Connection, id: i64, name: &str, email: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE users SET name = ?1, email = ?2 WHERE id = ?3",
        params![name, email, id],
    )?;
    Ok(())
}

pub fn delete_user(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM users WHERE id = ?1", [id])?;
    Ok(())
}
