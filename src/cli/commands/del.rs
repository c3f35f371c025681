use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let tz = cfg.timezone()?;
        let mut pool = open_pool(cfg)?;

        let ev = DeleteLogic::apply(
            &mut pool,
            cfg.current_user,
            *id,
            Utc::now(),
            cfg.deletion_window()?,
        )?;

        success(format!(
            "Punch #{} ({} at {}) has been deleted.",
            ev.id,
            ev.kind.label(cfg.language.is_japanese()),
            ev.local_datetime_str(&tz)
        ));
    }

    Ok(())
}
