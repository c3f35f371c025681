use crate::cli::commands::{open_pool, reconcile_context};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::logic::{ExportLogic, ExportRequest};
use crate::utils::date;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        events,
        as_of,
        force,
    } = cmd
    {
        let ctx = reconcile_context(cfg, as_of.as_deref(), None, None)?;
        let bounds = match range {
            Some(r) => date::parse_period(r)?,
            None => None,
        };

        let path = expand_tilde(file);
        let req = ExportRequest {
            format: *format,
            path: path.as_path(),
            bounds,
            events: *events,
            force: *force,
            lang: cfg.language,
            in_progress_label: &cfg.in_progress_label,
        };

        let mut pool = open_pool(cfg)?;
        ExportLogic::export(&mut pool, cfg.current_user, &req, &ctx)?;
    }
    Ok(())
}
