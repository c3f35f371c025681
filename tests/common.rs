#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;
use timecard::models::event::Event;
use timecard::models::event_type::EventType;

/// Binary under test, isolated from the real configuration directory.
pub fn tc() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("timecard_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("timecard");
    cmd.env("TIMECARD_HOME", &home).env_remove("TIMECARD_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timecard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timecard_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize an empty DB (schema + default user) in test mode.
pub fn init_db(db_path: &str) {
    tc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Record a manual correction through the CLI.
pub fn add(db_path: &str, date: &str, time: &str, kind: &str) {
    tc().args(["--db", db_path, "add", date, time, kind])
        .assert()
        .success();
}

/// Scenario A of 2025-10-02 plus an orphan end on 2025-10-03.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    add(db_path, "2025-10-02", "09:00", "start-work");
    add(db_path, "2025-10-02", "12:00", "start-break");
    add(db_path, "2025-10-02", "13:00", "end-break");
    add(db_path, "2025-10-02", "18:00", "end-work");
    add(db_path, "2025-10-03", "18:00", "end-work");
}

// ---------------------------------------------------------------------
// Library helpers
// ---------------------------------------------------------------------

pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("valid offset")
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Instant of a local wall-clock time in JST.
pub fn at(date: NaiveDate, hh: u32, mm: u32) -> DateTime<Utc> {
    jst()
        .from_local_datetime(&date.and_hms_opt(hh, mm, 0).expect("valid time"))
        .single()
        .expect("unambiguous")
        .with_timezone(&Utc)
}

/// In-memory event as the store would return it.
pub fn ev(id: i64, kind: EventType, ts: DateTime<Utc>) -> Event {
    let mut e = Event::punch(1, kind, ts);
    e.id = id;
    e
}
