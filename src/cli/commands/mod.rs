pub mod add;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod log;
pub mod punch;
pub mod report;
pub mod status;
pub mod user;

use crate::config::Config;
use crate::core::logic::ReconcileContext;
use crate::core::calculator::wage::WageRule;
use crate::db::initialize::open_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date;

/// Open the configured database, applying pending migrations.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    tracing::debug!(database = %cfg.database, "opening database");
    open_db(&cfg.database)
}

/// Build the reconciliation inputs from the configuration plus any
/// command-line overrides. Only the CLI layer reads the clock.
pub(crate) fn reconcile_context(
    cfg: &Config,
    as_of: Option<&str>,
    rate: Option<i64>,
    unit: Option<i64>,
) -> AppResult<ReconcileContext> {
    let tz = cfg.timezone()?;
    let base = cfg.wage_rule()?;
    let rule = WageRule::new(
        rate.unwrap_or(base.hourly_rate),
        unit.unwrap_or(base.minute_unit),
    )?;
    let today = match as_of {
        Some(s) => date::parse_required_date(s)?,
        None => date::today(&tz),
    };

    Ok(ReconcileContext { tz, today, rule })
}
