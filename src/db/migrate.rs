use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

/// Ensure that the `log` table exists. It also records applied migrations,
/// so it has to come first.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_users_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            email       TEXT NOT NULL UNIQUE,
            created_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_events_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id      INTEGER NOT NULL REFERENCES users(id),
            kind         TEXT NOT NULL
                         CHECK(kind IN ('START_WORK','END_WORK','START_BREAK','END_BREAK')),
            timestamp    TEXT NOT NULL,
            is_deleted   INTEGER NOT NULL DEFAULT 0,
            is_modified  INTEGER NOT NULL DEFAULT 0,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_user_ts ON events(user_id, timestamp);
        CREATE INDEX IF NOT EXISTS idx_events_user_created ON events(user_id, created_at);
        "#,
    )?;
    Ok(())
}

/// The single-user setup works out of the box: user 1 always exists.
fn seed_default_user(conn: &Connection) -> AppResult<()> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |r| r.get(0))?;
    if count == 0 {
        conn.execute(
            "INSERT INTO users (id, name, email, created_at) VALUES (1, 'default', 'default@localhost', ?1)",
            [chrono::Utc::now().to_rfc3339()],
        )?;
    }
    Ok(())
}

type Migration = (&'static str, &'static str, fn(&Connection) -> AppResult<()>);

const MIGRATIONS: &[Migration] = &[
    ("20250301_0001_create_users", "Created users table", create_users_table),
    ("20250301_0002_create_events", "Created events table", create_events_table),
    ("20250301_0003_seed_default_user", "Seeded default user", seed_default_user),
];

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations, in order, each at most once.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for (version, message, apply) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        apply(conn).map_err(|e| AppError::Migration(format!("{version}: {e}")))?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [version, message],
        )?;

        tracing::info!(version, "migration applied");
    }

    Ok(())
}
