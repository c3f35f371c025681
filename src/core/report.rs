use crate::core::logic::{Core, ReconcileContext};
use crate::db::pool::DbPool;
use crate::db::queries::load_events_between;
use crate::errors::AppResult;
use crate::models::day_summary::PeriodReport;
use crate::utils::time::start_of_local_day;
use chrono::{DateTime, Days, FixedOffset, NaiveDate, Utc};

/// Convert inclusive local-day bounds into a half-open UTC instant range.
pub fn instant_bounds(
    bounds: Option<(NaiveDate, NaiveDate)>,
    tz: &FixedOffset,
) -> AppResult<(Option<DateTime<Utc>>, Option<DateTime<Utc>>)> {
    let Some((from, to)) = bounds else {
        return Ok((None, None));
    };

    let start = start_of_local_day(from, tz)?;
    let end = match to.checked_add_days(Days::new(1)) {
        Some(next) => Some(start_of_local_day(next, tz)?),
        None => None,
    };

    Ok((Some(start), end))
}

pub struct ReportLogic;

impl ReportLogic {
    /// Fetch one user's live punches for the period and reconcile them.
    pub fn build(
        pool: &DbPool,
        user_id: i64,
        bounds: Option<(NaiveDate, NaiveDate)>,
        ctx: &ReconcileContext,
    ) -> AppResult<PeriodReport> {
        let (from, to) = instant_bounds(bounds, &ctx.tz)?;
        let events = load_events_between(&pool.conn, user_id, from, to)?;
        Ok(Core::reconcile(&events, ctx))
    }
}
