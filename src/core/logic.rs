use crate::core::calculator::{grouping, summary, wage};
use crate::core::calculator::wage::WageRule;
use crate::models::day_summary::PeriodReport;
use crate::models::event::Event;
use chrono::{FixedOffset, NaiveDate};

/// Inputs of a reconciliation run besides the events themselves.
#[derive(Debug, Clone, Copy)]
pub struct ReconcileContext {
    /// Civil timezone used to assign punches to calendar days.
    pub tz: FixedOffset,
    /// Reference day for the "still working" exemption.
    pub today: NaiveDate,
    pub rule: WageRule,
}

pub struct Core;

impl Core {
    /// Turn one user's punches for a period into per-day rows plus the
    /// period's wage total. Pure: same input, same report.
    ///
    /// `events` may arrive in any order and must already exclude
    /// soft-deleted records.
    pub fn reconcile(events: &[Event], ctx: &ReconcileContext) -> PeriodReport {
        let groups = grouping::group_by_local_date(events, &ctx.tz);

        // BTreeMap iteration is already in calendar order
        let days: Vec<_> = groups
            .iter()
            .map(|(date, day_events)| {
                summary::summarize_day(*date, day_events, &ctx.tz, ctx.today, &ctx.rule)
            })
            .collect();

        let total_wage = wage::period_total(days.iter().map(|d| d.daily_wage));

        tracing::debug!(
            events = events.len(),
            days = days.len(),
            total_wage,
            "reconciled period"
        );

        PeriodReport { days, total_wage }
    }
}
