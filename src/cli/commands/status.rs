use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_status, highlight_modified};
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use chrono::Utc;

/// Show the current status and the punches of today.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if !matches!(cmd, Commands::Status) {
        return Ok(());
    }

    let tz = cfg.timezone()?;
    let pool = open_pool(cfg)?;
    let view = StatusLogic::current(
        &pool,
        cfg.current_user,
        &tz,
        Utc::now(),
        cfg.deletion_window()?,
    )?;

    println!(
        "{} {}{}{}",
        bold("Status:"),
        color_for_status(view.status),
        view.status,
        RESET
    );

    if view.today_events.is_empty() {
        println!("No punches on {}.", view.today);
        return Ok(());
    }

    println!("\n📅 Punches on {}:\n", view.today);

    let sep = cfg.separator_char.chars().next().unwrap_or('-');
    let mut table = Table::new(
        vec![
            Column::right("ID"),
            Column::left("TIME"),
            Column::left("TYPE"),
            Column::left(""),
        ],
        sep,
    );

    let japanese = cfg.language.is_japanese();
    for ev in &view.today_events {
        let mut marks = Vec::new();
        if ev.is_modified {
            marks.push("modified");
        }
        if view.deletable == Some(ev.id) {
            marks.push("deletable");
        }

        table.add_row(vec![
            ev.id.to_string(),
            highlight_modified(&ev.local_time_str(&tz), ev.is_modified),
            ev.kind.label(japanese).to_string(),
            marks.join(", "),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
