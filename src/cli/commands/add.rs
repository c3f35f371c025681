use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, CorrectionInput};
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::Utc;

/// Record a manual correction at a user-chosen local date and time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, time, kind } = cmd {
        let tz = cfg.timezone()?;
        let input = CorrectionInput {
            date: date.clone(),
            time: time.clone(),
            kind: kind.clone(),
        };

        // validate before the store is touched
        AddLogic::parse(&input, &tz, Utc::now())?;

        let mut pool = open_pool(cfg)?;
        let ev = AddLogic::apply(&mut pool, cfg.current_user, &input, &tz, Utc::now())?;

        success(format!(
            "#{} {} at {} (manual correction)",
            ev.id,
            ev.kind.label(cfg.language.is_japanese()),
            ev.local_datetime_str(&tz)
        ));
    }

    Ok(())
}
