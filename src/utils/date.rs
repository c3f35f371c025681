use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};

/// Current calendar day in the configured civil timezone.
pub fn today(tz: &FixedOffset) -> NaiveDate {
    today_at(Utc::now(), tz)
}

pub fn today_at(now: DateTime<Utc>, tz: &FixedOffset) -> NaiveDate {
    now.with_timezone(tz).date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_required_date(s: &str) -> AppResult<NaiveDate> {
    if s.trim().is_empty() {
        return Err(AppError::MissingField("date"));
    }
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Inclusive range of calendar days covered by a month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = NaiveDate::from_ymd_opt(year, month, month_last_day(year, month)?)?;
    Some((first, last))
}

/// First and last day of the month containing `d`.
pub fn month_containing(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    // month of an existing date is always valid
    month_bounds(d.year(), d.month()).unwrap_or((d, d))
}

/// Parse a period expression into inclusive date bounds.
///
/// Supported:
/// - `all` → `None` (no bound)
/// - YYYY, YYYY-MM, YYYY-MM-DD
/// - YYYY:YYYY, YYYY-MM:YYYY-MM, YYYY-MM-DD:YYYY-MM-DD
pub fn parse_period(p: &str) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let p = p.trim();
    if p.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let invalid = || AppError::InvalidPeriod(p.to_string());

    let (start, end) = match p.split_once(':') {
        Some((s, e)) => {
            let (s, e) = (s.trim(), e.trim());
            if s.len() != e.len() {
                return Err(AppError::InvalidPeriod(format!(
                    "{p}: start and end must have the same format"
                )));
            }
            (period_bounds(s).ok_or_else(invalid)?.0, period_bounds(e).ok_or_else(invalid)?.1)
        }
        None => period_bounds(p).ok_or_else(invalid)?,
    };

    if start > end {
        return Err(AppError::InvalidPeriod(format!("{p}: start is after end")));
    }

    Ok(Some((start, end)))
}

/// Bounds of a single YYYY / YYYY-MM / YYYY-MM-DD token.
fn period_bounds(token: &str) -> Option<(NaiveDate, NaiveDate)> {
    match token.len() {
        // YYYY
        4 => {
            let y: i32 = token.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        // YYYY-MM
        7 => {
            let (y, m) = token.split_once('-')?;
            month_bounds(y.parse().ok()?, m.parse().ok()?)
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(token)?;
            Some((d, d))
        }
        _ => None,
    }
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
