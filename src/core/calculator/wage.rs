use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Hourly pay with truncation to whole `minute_unit` blocks.
///
/// Partial blocks are not paid: with the default 60-minute unit a 59-minute
/// day earns nothing and a 119-minute day earns one hour.
/// Upper bound for `hourly_rate`. Keeps a full day of pay, and any realistic
/// period total, far away from `i64` overflow.
pub const MAX_HOURLY_RATE: i64 = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WageRule {
    pub hourly_rate: i64,
    pub minute_unit: i64,
}

impl Default for WageRule {
    fn default() -> Self {
        Self {
            hourly_rate: 1500,
            minute_unit: 60,
        }
    }
}

impl WageRule {
    pub fn new(hourly_rate: i64, minute_unit: i64) -> AppResult<Self> {
        if minute_unit <= 0 {
            return Err(AppError::Config(format!(
                "minute_unit must be a positive number of minutes, got {minute_unit}"
            )));
        }
        if !(0..=MAX_HOURLY_RATE).contains(&hourly_rate) {
            return Err(AppError::Config(format!(
                "hourly_rate must be between 0 and {MAX_HOURLY_RATE}, got {hourly_rate}"
            )));
        }
        Ok(Self {
            hourly_rate,
            minute_unit,
        })
    }

    pub fn daily_wage(&self, worked_minutes: i64) -> i64 {
        (worked_minutes.max(0) / self.minute_unit).saturating_mul(self.hourly_rate)
    }
}

pub fn period_total<I: IntoIterator<Item = i64>>(wages: I) -> i64 {
    wages.into_iter().fold(0, i64::saturating_add)
}
