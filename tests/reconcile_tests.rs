mod common;
use chrono::{FixedOffset, NaiveTime};
use common::{at, day, ev, jst};
use timecard::config::Language;
use timecard::core::calculator::grouping::group_by_local_date;
use timecard::core::calculator::notes::Anomaly;
use timecard::core::calculator::pairing::{Interval, pair_day};
use timecard::core::calculator::wage::WageRule;
use timecard::core::logic::{Core, ReconcileContext};
use timecard::models::day_summary::EndTime;
use timecard::models::event_type::EventType::{EndBreak, EndWork, StartBreak, StartWork};

fn ctx(today: chrono::NaiveDate) -> ReconcileContext {
    ReconcileContext {
        tz: jst(),
        today,
        rule: WageRule::default(),
    }
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

#[test]
fn test_standard_day_with_one_break() {
    let d = day(2025, 10, 2);
    let events = vec![
        ev(1, StartWork, at(d, 9, 0)),
        ev(2, StartBreak, at(d, 12, 0)),
        ev(3, EndBreak, at(d, 13, 0)),
        ev(4, EndWork, at(d, 18, 0)),
    ];

    let report = Core::reconcile(&events, &ctx(day(2025, 10, 31)));
    assert_eq!(report.days.len(), 1);

    let s = &report.days[0];
    assert_eq!(s.start_time, Some(hm(9, 0)));
    assert_eq!(s.end_time, EndTime::At(hm(18, 0)));
    assert_eq!(s.worked_minutes, 480);
    assert_eq!(s.break_minutes, 60);
    assert_eq!(s.daily_wage, 12000);
    assert!(s.notes.is_empty());

    assert_eq!(s.work_hours_str(), "8:00");
    assert_eq!(s.break_time_str(), "1:00");
    assert_eq!(s.date_label(Language::En), "10/02(Thu)");
    assert_eq!(report.total_wage, 12000);
}

#[test]
fn test_orphan_end_work_only() {
    let d = day(2025, 10, 3);
    let events = vec![ev(1, EndWork, at(d, 18, 0))];

    let report = Core::reconcile(&events, &ctx(day(2025, 10, 31)));
    let s = &report.days[0];

    assert_eq!(s.start_time_str(), "");
    assert_eq!(s.end_time_str("in progress"), "18:00");
    assert_eq!(s.worked_minutes, 0);
    assert_eq!(s.daily_wage, 0);
    assert_eq!(s.notes, vec![Anomaly::UnpairedEndWork(1)]);
    assert_eq!(
        s.notes_str(Language::En),
        "1 end-work event has no matching start-work"
    );
}

#[test]
fn test_orphan_end_work_is_reported_today_too() {
    let d = day(2025, 10, 3);
    let events = vec![ev(1, EndWork, at(d, 18, 0))];

    let report = Core::reconcile(&events, &ctx(d));
    assert_eq!(report.days[0].notes, vec![Anomaly::UnpairedEndWork(1)]);
}

#[test]
fn test_open_break_in_the_past() {
    let d = day(2025, 10, 4);
    let events = vec![ev(1, StartBreak, at(d, 12, 0))];

    let report = Core::reconcile(&events, &ctx(day(2025, 10, 31)));
    let s = &report.days[0];

    assert_eq!(s.break_minutes, 0);
    assert_eq!(s.notes, vec![Anomaly::UnpairedStartBreak(1)]);
    assert_eq!(s.end_time, EndTime::Missing);
}

#[test]
fn test_period_total_is_sum_of_daily_wages() {
    let d1 = day(2025, 10, 2);
    let d2 = day(2025, 10, 3);
    let d3 = day(2025, 10, 6);

    let events = vec![
        ev(1, StartWork, at(d1, 9, 0)),
        ev(2, StartBreak, at(d1, 12, 0)),
        ev(3, EndBreak, at(d1, 13, 0)),
        ev(4, EndWork, at(d1, 18, 0)),
        ev(5, EndWork, at(d2, 18, 0)),
        ev(6, StartWork, at(d3, 9, 0)),
        ev(7, EndWork, at(d3, 14, 0)),
    ];

    let report = Core::reconcile(&events, &ctx(day(2025, 10, 31)));
    let wages: Vec<i64> = report.days.iter().map(|d| d.daily_wage).collect();

    assert_eq!(wages, vec![12000, 0, 7500]);
    assert_eq!(report.total_wage, 19500);
}

#[test]
fn test_fifo_pairing_of_overlapping_sessions() {
    let d = day(2025, 10, 7);
    let (t1, t2, t3, t4) = (at(d, 9, 0), at(d, 10, 0), at(d, 12, 0), at(d, 17, 0));

    let events = vec![
        ev(1, StartWork, t1),
        ev(2, StartWork, t2),
        ev(3, EndWork, t3),
        ev(4, EndWork, t4),
    ];

    let p = pair_day(&events);
    assert_eq!(
        p.work_pairs,
        vec![
            Interval { start: t1, end: t3 },
            Interval { start: t2, end: t4 },
        ]
    );

    // outer span, not the sum of the sessions
    let report = Core::reconcile(&events, &ctx(day(2025, 10, 31)));
    let s = &report.days[0];
    assert_eq!(s.worked_minutes, 480);
    assert_eq!(s.notes, vec![Anomaly::MultipleWorkSessions]);
}

#[test]
fn test_worked_minutes_never_negative() {
    let d = day(2025, 10, 8);
    let events = vec![
        ev(1, StartWork, at(d, 9, 0)),
        ev(2, EndWork, at(d, 10, 0)),
        ev(3, StartBreak, at(d, 9, 0)),
        ev(4, EndBreak, at(d, 12, 0)),
    ];

    let report = Core::reconcile(&events, &ctx(day(2025, 10, 31)));
    let s = &report.days[0];

    assert_eq!(s.worked_minutes, 0);
    assert_eq!(s.break_minutes, 180);
    assert_eq!(s.daily_wage, 0);
}

#[test]
fn test_lone_start_today_is_in_progress() {
    let d = day(2025, 10, 9);
    let events = vec![ev(1, StartWork, at(d, 9, 0))];

    let report = Core::reconcile(&events, &ctx(d));
    let s = &report.days[0];

    assert_eq!(s.start_time, Some(hm(9, 0)));
    assert_eq!(s.end_time, EndTime::InProgress);
    assert_eq!(s.end_time_str("in progress"), "in progress");
    assert_eq!(s.worked_minutes, 0);
    assert!(s.notes.is_empty());
}

#[test]
fn test_lone_start_yesterday_is_reported() {
    let d = day(2025, 10, 9);
    let events = vec![ev(1, StartWork, at(d, 9, 0))];

    let report = Core::reconcile(&events, &ctx(day(2025, 10, 10)));
    let s = &report.days[0];

    assert_eq!(s.start_time, Some(hm(9, 0)));
    assert_eq!(s.end_time, EndTime::Missing);
    assert_eq!(s.worked_minutes, 0);
    assert_eq!(s.notes, vec![Anomaly::UnpairedStartWork(1)]);
    assert_eq!(
        s.notes_str(Language::En),
        "1 start-work event has no matching end-work"
    );
}

#[test]
fn test_second_session_open_today_keeps_first_end() {
    let d = day(2025, 10, 9);
    let events = vec![
        ev(1, StartWork, at(d, 9, 0)),
        ev(2, EndWork, at(d, 12, 0)),
        ev(3, StartWork, at(d, 13, 0)),
    ];

    let report = Core::reconcile(&events, &ctx(d));
    let s = &report.days[0];

    assert_eq!(s.end_time, EndTime::At(hm(12, 0)));
    assert_eq!(s.worked_minutes, 180);
    assert!(s.notes.is_empty());
}

#[test]
fn test_multiple_breaks_are_summed() {
    let d = day(2025, 10, 10);
    let events = vec![
        ev(1, StartWork, at(d, 9, 0)),
        ev(2, StartBreak, at(d, 12, 0)),
        ev(3, EndBreak, at(d, 12, 15)),
        ev(4, StartBreak, at(d, 15, 0)),
        ev(5, EndBreak, at(d, 15, 20)),
        ev(6, EndWork, at(d, 18, 0)),
    ];

    let report = Core::reconcile(&events, &ctx(day(2025, 10, 31)));
    let s = &report.days[0];

    assert_eq!(s.break_minutes, 35);
    assert_eq!(s.worked_minutes, 540 - 35);
    assert_eq!(s.notes, vec![Anomaly::BreakPairsSummed(2)]);
    assert_eq!(s.notes_str(Language::En), "2 break pairs summed");
}

#[test]
fn test_breaks_without_work_session_still_count() {
    let d = day(2025, 10, 11);
    let events = vec![
        ev(1, StartBreak, at(d, 12, 0)),
        ev(2, EndBreak, at(d, 12, 15)),
        ev(3, StartBreak, at(d, 15, 0)),
        ev(4, EndBreak, at(d, 15, 20)),
    ];

    let report = Core::reconcile(&events, &ctx(day(2025, 10, 31)));
    let s = &report.days[0];

    assert_eq!(s.break_minutes, 35);
    assert_eq!(s.worked_minutes, 0);
    assert_eq!(s.notes, vec![Anomaly::BreakPairsSummed(2)]);
}

#[test]
fn test_restarted_break_replaces_open_one() {
    let d = day(2025, 10, 12);
    let events = vec![
        ev(1, StartWork, at(d, 9, 0)),
        ev(2, StartBreak, at(d, 12, 0)),
        ev(3, StartBreak, at(d, 12, 30)),
        ev(4, EndBreak, at(d, 13, 0)),
        ev(5, EndWork, at(d, 18, 0)),
    ];

    let report = Core::reconcile(&events, &ctx(day(2025, 10, 31)));
    let s = &report.days[0];

    assert_eq!(s.break_minutes, 30);
    assert_eq!(s.notes, vec![Anomaly::UnpairedStartBreak(1)]);
}

#[test]
fn test_notes_keep_fixed_order() {
    let d = day(2025, 10, 13);
    // deliberately shuffled; the engine sorts by timestamp
    let events = vec![
        ev(1, StartBreak, at(d, 14, 0)),
        ev(2, EndWork, at(d, 13, 0)),
        ev(3, StartWork, at(d, 8, 0)),
        ev(4, EndBreak, at(d, 7, 0)),
        ev(5, EndWork, at(d, 10, 0)),
        ev(6, StartBreak, at(d, 9, 0)),
        ev(7, EndBreak, at(d, 9, 10)),
        ev(8, StartWork, at(d, 11, 0)),
        ev(9, EndWork, at(d, 12, 0)),
        ev(10, StartBreak, at(d, 9, 30)),
        ev(11, EndBreak, at(d, 9, 40)),
        ev(12, StartWork, at(d, 15, 0)),
    ];

    let report = Core::reconcile(&events, &ctx(day(2025, 10, 31)));
    let s = &report.days[0];

    assert_eq!(
        s.notes,
        vec![
            Anomaly::MultipleWorkSessions,
            Anomaly::UnpairedStartWork(1),
            Anomaly::UnpairedEndWork(1),
            Anomaly::UnpairedStartBreak(1),
            Anomaly::UnpairedEndBreak(1),
            Anomaly::BreakPairsSummed(2),
        ]
    );
    assert_eq!(s.start_time, Some(hm(8, 0)));
    assert_eq!(s.end_time, EndTime::At(hm(12, 0)));
    // 08:00-12:00 minus two 10-minute breaks
    assert_eq!(s.worked_minutes, 220);
}

#[test]
fn test_grouping_follows_local_calendar_day() {
    let d = day(2025, 10, 2);
    let next = day(2025, 10, 3);

    // 00:10 JST on the 3rd is still the 2nd in UTC
    let late_end = at(next, 0, 10);
    assert_eq!(late_end.date_naive(), d);

    let events = vec![ev(1, StartWork, at(d, 23, 30)), ev(2, EndWork, late_end)];
    let groups = group_by_local_date(&events, &jst());

    let keys: Vec<_> = groups.keys().copied().collect();
    assert_eq!(keys, vec![d, next]);

    // no pairing across midnight
    let report = Core::reconcile(&events, &ctx(day(2025, 10, 31)));
    assert_eq!(report.days[0].notes, vec![Anomaly::UnpairedStartWork(1)]);
    assert_eq!(report.days[1].notes, vec![Anomaly::UnpairedEndWork(1)]);
}

#[test]
fn test_grouping_depends_on_offset() {
    let d = day(2025, 10, 3);
    let events = vec![ev(1, EndWork, at(d, 0, 10))];

    let utc = FixedOffset::east_opt(0).expect("valid offset");
    let in_jst: Vec<_> = group_by_local_date(&events, &jst()).into_keys().collect();
    let in_utc: Vec<_> = group_by_local_date(&events, &utc).into_keys().collect();

    assert_eq!(in_jst, vec![d]);
    assert_eq!(in_utc, vec![day(2025, 10, 2)]);
}

#[test]
fn test_days_sorted_by_full_date_across_years() {
    let events = vec![
        ev(1, StartWork, at(day(2025, 1, 5), 9, 0)),
        ev(2, EndWork, at(day(2025, 1, 5), 10, 0)),
        ev(3, StartWork, at(day(2024, 12, 30), 9, 0)),
        ev(4, EndWork, at(day(2024, 12, 30), 10, 0)),
    ];

    let report = Core::reconcile(&events, &ctx(day(2025, 1, 31)));
    let dates: Vec<_> = report.days.iter().map(|d| d.date).collect();

    assert_eq!(dates, vec![day(2024, 12, 30), day(2025, 1, 5)]);
}

#[test]
fn test_japanese_rendering() {
    let d = day(2025, 10, 2);
    let events = vec![
        ev(1, StartWork, at(d, 9, 0)),
        ev(2, EndWork, at(d, 12, 0)),
        ev(3, EndWork, at(d, 18, 0)),
    ];

    let report = Core::reconcile(&events, &ctx(day(2025, 10, 31)));
    let s = &report.days[0];

    assert_eq!(s.date_label(Language::Ja), "10/02(木)");
    assert_eq!(
        s.notes_str(Language::Ja),
        "1件の退勤記録に対応する出勤記録がありません"
    );
    assert_eq!(s.wage_str(Language::Ja), "4,500円");
}

#[test]
fn test_empty_input_gives_empty_report() {
    let report = Core::reconcile(&[], &ctx(day(2025, 10, 31)));
    assert!(report.days.is_empty());
    assert_eq!(report.total_wage, 0);
}
