mod common;
use chrono::{DateTime, Duration, TimeZone, Utc};
use common::{day, jst};
use std::path::Path;
use timecard::config::Language;
use timecard::core::calculator::wage::WageRule;
use timecard::core::del::DeleteLogic;
use timecard::core::logic::ReconcileContext;
use timecard::core::punch::PunchLogic;
use timecard::core::report::ReportLogic;
use timecard::core::status::StatusLogic;
use timecard::core::user::{UserLogic, validate_user};
use timecard::db::initialize::init_db;
use timecard::db::pool::DbPool;
use timecard::errors::AppError;
use timecard::export::ExportFormat;
use timecard::export::logic::{ExportLogic, ExportRequest};
use timecard::models::event_type::EventType;
use timecard::models::status::WorkStatus;

const WINDOW: i64 = 5;

fn pool() -> DbPool {
    let pool = DbPool::in_memory().expect("in-memory db");
    init_db(&pool.conn).expect("migrations");
    pool
}

/// 2025-10-02 09:00 JST
fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 2, 0, 0, 0).unwrap()
}

fn ctx() -> ReconcileContext {
    ReconcileContext {
        tz: jst(),
        today: day(2025, 10, 31),
        rule: WageRule::default(),
    }
}

#[test]
fn test_delete_with_nothing_recorded() {
    let mut pool = pool();

    let err = DeleteLogic::apply(&mut pool, 1, None, base(), WINDOW).unwrap_err();
    assert!(matches!(err, AppError::RecordNotFound(_)));

    let err = DeleteLogic::apply(&mut pool, 1, Some(42), base(), WINDOW).unwrap_err();
    assert!(matches!(err, AppError::RecordNotFound(_)));
}

#[test]
fn test_delete_only_most_recent() {
    let mut pool = pool();
    let first = PunchLogic::apply(&mut pool, 1, EventType::StartWork, base()).unwrap();
    let second = PunchLogic::apply(
        &mut pool,
        1,
        EventType::StartBreak,
        base() + Duration::minutes(1),
    )
    .unwrap();

    let err = DeleteLogic::apply(
        &mut pool,
        1,
        Some(first.id),
        base() + Duration::minutes(2),
        WINDOW,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::NotMostRecent { requested, latest } if requested == first.id && latest == second.id
    ));

    let deleted = DeleteLogic::apply(
        &mut pool,
        1,
        Some(second.id),
        base() + Duration::minutes(2),
        WINDOW,
    )
    .unwrap();
    assert_eq!(deleted.id, second.id);
    assert!(deleted.is_deleted);

    // the earlier punch is now the latest one again
    let again = DeleteLogic::check(&pool, 1, None, base() + Duration::minutes(3), WINDOW).unwrap();
    assert_eq!(again.id, first.id);
}

#[test]
fn test_delete_window() {
    let mut pool = pool();
    let ev = PunchLogic::apply(&mut pool, 1, EventType::StartWork, base()).unwrap();

    // exactly five minutes is still allowed
    let edge = DeleteLogic::check(&pool, 1, None, base() + Duration::minutes(5), WINDOW);
    assert_eq!(edge.unwrap().id, ev.id);

    let err = DeleteLogic::apply(
        &mut pool,
        1,
        None,
        base() + Duration::minutes(5) + Duration::seconds(1),
        WINDOW,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::DeletionWindowExpired { id, window: 5, .. } if id == ev.id
    ));
}

#[test]
fn test_delete_with_huge_window_does_not_overflow() {
    let mut pool = pool();
    let ev = PunchLogic::apply(&mut pool, 1, EventType::StartWork, base()).unwrap();

    let found = DeleteLogic::check(&pool, 1, None, base() + Duration::days(365), i64::MAX);
    assert_eq!(found.unwrap().id, ev.id);
}

#[test]
fn test_delete_ignores_other_users_records() {
    let mut pool = pool();
    let other = UserLogic::add(&mut pool, "Hanako", "hanako@example.com").unwrap();
    let ev = PunchLogic::apply(&mut pool, other.id, EventType::StartWork, base()).unwrap();

    let err = DeleteLogic::apply(&mut pool, 1, Some(ev.id), base(), WINDOW).unwrap_err();
    assert!(matches!(err, AppError::RecordNotFound(_)));
}

#[test]
fn test_punch_for_unknown_user_fails() {
    let mut pool = pool();
    let err = PunchLogic::apply(&mut pool, 99, EventType::StartWork, base()).unwrap_err();
    assert!(matches!(err, AppError::UserNotFound(99)));
}

#[test]
fn test_status_follows_latest_punch() {
    let mut pool = pool();
    let tz = jst();

    let view = StatusLogic::current(&pool, 1, &tz, base(), WINDOW).unwrap();
    assert_eq!(view.status, WorkStatus::NotWorking);
    assert!(view.today_events.is_empty());
    assert_eq!(view.deletable, None);

    PunchLogic::apply(&mut pool, 1, EventType::StartWork, base()).unwrap();
    let brk = PunchLogic::apply(
        &mut pool,
        1,
        EventType::StartBreak,
        base() + Duration::hours(3),
    )
    .unwrap();

    let now = base() + Duration::hours(3) + Duration::minutes(1);
    let view = StatusLogic::current(&pool, 1, &tz, now, WINDOW).unwrap();
    assert_eq!(view.status, WorkStatus::OnBreak);
    assert_eq!(view.today, day(2025, 10, 2));
    assert_eq!(view.today_events.len(), 2);
    assert_eq!(view.deletable, Some(brk.id));

    PunchLogic::apply(&mut pool, 1, EventType::EndBreak, now).unwrap();
    let view = StatusLogic::current(&pool, 1, &tz, now, WINDOW).unwrap();
    assert_eq!(view.status, WorkStatus::Working);
}

#[test]
fn test_report_excludes_deleted_punches() {
    let mut pool = pool();

    PunchLogic::apply(&mut pool, 1, EventType::StartWork, base()).unwrap();
    let end = base() + Duration::hours(8);
    PunchLogic::apply(&mut pool, 1, EventType::EndWork, end).unwrap();
    let typo = PunchLogic::apply(&mut pool, 1, EventType::EndWork, end + Duration::minutes(1))
        .unwrap();
    DeleteLogic::apply(&mut pool, 1, Some(typo.id), end + Duration::minutes(2), WINDOW).unwrap();

    let bounds = Some((day(2025, 10, 1), day(2025, 10, 31)));
    let report = ReportLogic::build(&pool, 1, bounds, &ctx()).unwrap();

    assert_eq!(report.days.len(), 1);
    assert!(report.days[0].notes.is_empty());
    assert_eq!(report.days[0].worked_minutes, 480);
    assert_eq!(report.total_wage, 12000);

    // outside the requested period
    let bounds = Some((day(2025, 11, 1), day(2025, 11, 30)));
    let report = ReportLogic::build(&pool, 1, bounds, &ctx()).unwrap();
    assert!(report.days.is_empty());
}

#[test]
fn test_summary_csv_layout() {
    let mut pool = pool();
    PunchLogic::apply(&mut pool, 1, EventType::StartWork, base()).unwrap();
    PunchLogic::apply(&mut pool, 1, EventType::EndWork, base() + Duration::hours(8)).unwrap();
    // orphan end on the next local day
    PunchLogic::apply(&mut pool, 1, EventType::EndWork, base() + Duration::hours(33)).unwrap();

    let req = ExportRequest {
        format: ExportFormat::Csv,
        path: Path::new("unused.csv"),
        bounds: None,
        events: false,
        force: true,
        lang: Language::En,
        in_progress_label: "in progress",
    };

    let csv = ExportLogic::render(&pool, 1, &req, &ctx()).unwrap().unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines,
        vec![
            "date,start_time,end_time,work_hours,break_time,daily_wage,notes",
            "2025-10-02,09:00,17:00,8:00,0:00,12000,",
            "2025-10-03,,18:00,0:00,0:00,0,1 end-work event has no matching start-work",
        ]
    );
}

#[test]
fn test_raw_events_csv_layout() {
    let mut pool = pool();
    PunchLogic::apply(&mut pool, 1, EventType::StartWork, base()).unwrap();

    let req = ExportRequest {
        format: ExportFormat::Csv,
        path: Path::new("unused.csv"),
        bounds: None,
        events: true,
        force: true,
        lang: Language::En,
        in_progress_label: "in progress",
    };

    let csv = ExportLogic::render(&pool, 1, &req, &ctx()).unwrap().unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "id,type,label,timestamp,is_modified");
    assert_eq!(lines[1], "1,START_WORK,Start work,2025-10-02T09:00:00+09:00,false");
}

#[test]
fn test_export_of_empty_period_renders_nothing() {
    let pool = pool();
    let req = ExportRequest {
        format: ExportFormat::Json,
        path: Path::new("unused.json"),
        bounds: Some((day(2025, 10, 1), day(2025, 10, 31))),
        events: false,
        force: true,
        lang: Language::En,
        in_progress_label: "in progress",
    };

    assert!(ExportLogic::render(&pool, 1, &req, &ctx()).unwrap().is_none());
}

#[test]
fn test_user_validation() {
    assert!(validate_user("Taro", "taro@example.com").is_ok());
    assert!(matches!(
        validate_user("  ", "taro@example.com"),
        Err(AppError::InvalidUser(_))
    ));
    assert!(matches!(validate_user("Taro", ""), Err(AppError::InvalidUser(_))));
    assert!(matches!(
        validate_user("Taro", "not-an-address"),
        Err(AppError::InvalidUser(_))
    ));
}

#[test]
fn test_user_registry() {
    let mut pool = pool();

    let taro = UserLogic::add(&mut pool, " Taro ", "taro@example.com").unwrap();
    assert_eq!(taro.name, "Taro");

    let dup = UserLogic::add(&mut pool, "Other", "TARO@example.com").unwrap_err();
    assert!(matches!(dup, AppError::DuplicateEmail(_)));

    let edited = UserLogic::edit(&mut pool, taro.id, Some("Taro Yamada"), None).unwrap();
    assert_eq!(edited.name, "Taro Yamada");
    assert_eq!(edited.email, "taro@example.com");

    let clash = UserLogic::edit(&mut pool, taro.id, None, Some("default@localhost")).unwrap_err();
    assert!(matches!(clash, AppError::DuplicateEmail(_)));

    let names: Vec<String> = UserLogic::list(&pool)
        .unwrap()
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(names, vec!["default", "Taro Yamada"]);

    PunchLogic::apply(&mut pool, taro.id, EventType::StartWork, base()).unwrap();
    let busy = UserLogic::remove(&mut pool, taro.id).unwrap_err();
    assert!(matches!(busy, AppError::UserHasEvents(_)));

    let ghost = UserLogic::remove(&mut pool, 99).unwrap_err();
    assert!(matches!(ghost, AppError::UserNotFound(99)));

    let spare = UserLogic::add(&mut pool, "Spare", "spare@example.com").unwrap();
    UserLogic::remove(&mut pool, spare.id).unwrap();
    assert_eq!(UserLogic::list(&pool).unwrap().len(), 2);
}
