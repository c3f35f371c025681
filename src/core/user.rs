use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::count_events_for_user;
use crate::db::users::{
    delete_user, find_user, find_user_by_email, insert_user, list_users, update_user,
};
use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap());

/// Trimmed name and e-mail, or the first validation failure.
pub fn validate_user(name: &str, email: &str) -> AppResult<(String, String)> {
    let name = name.trim();
    let email = email.trim();

    if name.is_empty() {
        return Err(AppError::InvalidUser("name is required".into()));
    }
    if email.is_empty() {
        return Err(AppError::InvalidUser("e-mail is required".into()));
    }
    if !EMAIL.is_match(email) {
        return Err(AppError::InvalidUser(format!("'{email}' is not an e-mail address")));
    }

    Ok((name.to_string(), email.to_string()))
}

/// User registry operations.
pub struct UserLogic;

impl UserLogic {
    pub fn add(pool: &mut DbPool, name: &str, email: &str) -> AppResult<User> {
        let (name, email) = validate_user(name, email)?;

        if find_user_by_email(&pool.conn, &email)?.is_some() {
            return Err(AppError::DuplicateEmail(email));
        }

        let id = insert_user(&pool.conn, &name, &email)?;
        ttlog_quiet(&pool.conn, "user", "add", &format!("id={id} name={name}"));

        find_user(&pool.conn, id)?.ok_or(AppError::UserNotFound(id))
    }

    pub fn list(pool: &DbPool) -> AppResult<Vec<User>> {
        list_users(&pool.conn)
    }

    /// Change name and/or e-mail; omitted fields keep their value.
    pub fn edit(
        pool: &mut DbPool,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<User> {
        let current = find_user(&pool.conn, id)?.ok_or(AppError::UserNotFound(id))?;

        let (name, email) = validate_user(
            name.unwrap_or(&current.name),
            email.unwrap_or(&current.email),
        )?;

        if let Some(other) = find_user_by_email(&pool.conn, &email)?
            && other.id != id
        {
            return Err(AppError::DuplicateEmail(email));
        }

        update_user(&pool.conn, id, &name, &email)?;
        ttlog_quiet(&pool.conn, "user", "edit", &format!("id={id} name={name}"));

        find_user(&pool.conn, id)?.ok_or(AppError::UserNotFound(id))
    }

    /// Punch records are append-only, so a user owning any cannot be removed.
    pub fn remove(pool: &mut DbPool, id: i64) -> AppResult<()> {
        if find_user(&pool.conn, id)?.is_none() {
            return Err(AppError::UserNotFound(id));
        }
        if count_events_for_user(&pool.conn, id)? > 0 {
            return Err(AppError::UserHasEvents(id));
        }

        delete_user(&pool.conn, id)?;
        ttlog_quiet(&pool.conn, "user", "remove", &format!("id={id}"));
        Ok(())
    }
}
