//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! Malformed punch sequences are NOT errors: the reconciliation engine turns
//! them into notes on the affected day. Only boundary failures live here.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid event type: {0} (use start-work, end-work, start-break or end-break)")]
    InvalidEventType(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    // ---------------------------
    // Punch deletion
    // ---------------------------
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Only the most recent record can be deleted (record {requested}, latest is {latest})")]
    NotMostRecent { requested: i64, latest: i64 },

    #[error("Records can only be deleted within {window} minutes of creation (record {id} is {age} minutes old)")]
    DeletionWindowExpired { id: i64, age: i64, window: i64 },

    // ---------------------------
    // Users
    // ---------------------------
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Invalid user data: {0}")]
    InvalidUser(String),

    #[error("E-mail address already registered: {0}")]
    DuplicateEmail(String),

    #[error("User {0} still owns punch records and cannot be removed")]
    UserHasEvents(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
