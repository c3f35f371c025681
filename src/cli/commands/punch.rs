use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::errors::AppResult;
use crate::models::event_type::EventType;
use crate::ui::messages::success;
use chrono::Utc;

/// Record a live punch stamped with the current instant.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { kind } = cmd {
        // reject unknown types before opening the store
        let kind: EventType = kind.parse()?;
        let tz = cfg.timezone()?;

        let mut pool = open_pool(cfg)?;
        let ev = PunchLogic::apply(&mut pool, cfg.current_user, kind, Utc::now())?;

        success(format!(
            "#{} {} at {}",
            ev.id,
            kind.label(cfg.language.is_japanese()),
            ev.local_datetime_str(&tz)
        ));
    }

    Ok(())
}
