use super::notes::collect_notes;
use super::pairing::pair_day;
use super::wage::WageRule;
use crate::models::day_summary::{DailySummary, EndTime};
use crate::models::event::Event;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Reconcile one day. `events` are that day's punches sorted by timestamp.
pub fn summarize_day(
    date: NaiveDate,
    events: &[Event],
    tz: &FixedOffset,
    today: NaiveDate,
    rule: &WageRule,
) -> DailySummary {
    let is_today = date == today;
    let pairing = pair_day(events);
    let notes = collect_notes(&pairing, is_today);
    let total_break = pairing.total_break();
    let local_time = |t: DateTime<Utc>| t.with_timezone(tz).time();

    let (start_time, end_time, worked_minutes) = match pairing.outer_span() {
        Some(span) => {
            let worked = (span.duration() - total_break).num_minutes().max(0);
            (
                Some(local_time(span.start)),
                EndTime::At(local_time(span.end)),
                worked,
            )
        }
        None => {
            // Only orphans: show the earliest unmatched start, if any.
            let start = pairing.open_starts.front().copied().map(local_time);
            let end = if start.is_some() && is_today {
                EndTime::InProgress
            } else {
                pairing
                    .last_orphan_end
                    .map_or(EndTime::Missing, |t| EndTime::At(local_time(t)))
            };
            (start, end, 0)
        }
    };

    DailySummary {
        date,
        start_time,
        end_time,
        worked_minutes,
        break_minutes: total_break.num_minutes().max(0),
        daily_wage: rule.daily_wage(worked_minutes),
        notes,
    }
}
