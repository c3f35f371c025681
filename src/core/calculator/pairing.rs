use crate::models::event::Event;
use crate::models::event_type::EventType;
use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;

/// A closed `(start, end)` interval: a work session or a break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Everything the single pass over one day's events learns.
#[derive(Debug, Clone, Default)]
pub struct DayPairing {
    pub work_pairs: Vec<Interval>,
    pub break_pairs: Vec<Interval>,

    /// START_WORK instants still waiting for an END_WORK, oldest first.
    pub open_starts: VecDeque<DateTime<Utc>>,
    pub start_work_count: usize,
    pub end_work_count: usize,
    pub unpaired_end_work: usize,
    /// Latest END_WORK that found no start.
    pub last_orphan_end: Option<DateTime<Utc>>,

    /// Break still open when the day ran out.
    pub open_break: Option<DateTime<Utc>>,
    /// Breaks abandoned by a following START_BREAK.
    pub unpaired_start_break: usize,
    pub unpaired_end_break: usize,
}

impl DayPairing {
    pub fn unpaired_start_work(&self) -> usize {
        self.start_work_count - self.work_pairs.len()
    }

    pub fn total_break(&self) -> Duration {
        self.break_pairs
            .iter()
            .fold(Duration::zero(), |acc, b| acc + b.duration())
    }

    /// Outer span of all work sessions: earliest start, latest end.
    pub fn outer_span(&self) -> Option<Interval> {
        let start = self.work_pairs.iter().map(|p| p.start).min()?;
        let end = self.work_pairs.iter().map(|p| p.end).max()?;
        Some(Interval { start, end })
    }
}

/// Pair the events of a single day. `events` must already be sorted by
/// timestamp (see `group_by_local_date`).
///
/// Work: FIFO, the oldest unmatched start takes the next end.
/// Breaks: a single open-break pointer; a new start abandons the open one.
pub fn pair_day(events: &[Event]) -> DayPairing {
    let mut p = DayPairing::default();

    for ev in events {
        let t = ev.timestamp;

        match ev.kind {
            EventType::StartWork => {
                p.start_work_count += 1;
                p.open_starts.push_back(t);
            }
            EventType::EndWork => {
                p.end_work_count += 1;
                match p.open_starts.pop_front() {
                    Some(start) => p.work_pairs.push(Interval { start, end: t }),
                    None => {
                        p.unpaired_end_work += 1;
                        p.last_orphan_end = Some(t);
                    }
                }
            }
            EventType::StartBreak => {
                if p.open_break.replace(t).is_some() {
                    p.unpaired_start_break += 1;
                }
            }
            EventType::EndBreak => match p.open_break.take() {
                Some(start) => p.break_pairs.push(Interval { start, end: t }),
                None => p.unpaired_end_break += 1,
            },
        }
    }

    p
}
