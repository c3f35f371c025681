//! Time utilities: parsing HH:MM, UTC offsets, combining local date + time.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_required_time(t: &str) -> AppResult<NaiveTime> {
    if t.trim().is_empty() {
        return Err(AppError::MissingField("time"));
    }
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Parse `+09:00`, `-05:30`, `+0900`, `Z` or `UTC` into a fixed offset.
pub fn parse_utc_offset(s: &str) -> Option<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }

    // chrono also takes bare "+09" and ignores trailing text
    let rest = s.trim_start_matches(['+', '-']);
    if rest.len() < 4 || !rest.chars().all(|c| c.is_ascii_digit() || c == ':') {
        return None;
    }

    s.parse::<FixedOffset>().ok()
}

/// Interpret a local wall-clock date + time in `tz` and return the instant.
pub fn local_to_utc(date: NaiveDate, time: NaiveTime, tz: &FixedOffset) -> AppResult<DateTime<Utc>> {
    tz.from_local_datetime(&date.and_time(time))
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidTime(format!("{date} {time}")))
}

/// First instant of `date` in `tz`, as UTC.
pub fn start_of_local_day(date: NaiveDate, tz: &FixedOffset) -> AppResult<DateTime<Utc>> {
    local_to_utc(date, NaiveTime::MIN, tz)
}
