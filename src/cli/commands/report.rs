use crate::cli::commands::{open_pool, reconcile_context};
use crate::cli::parser::Commands;
use crate::config::{Config, Language};
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::models::day_summary::PeriodReport;
use crate::ui::messages::info;
use crate::utils::colors::colorize_notes;
use crate::utils::date;
use crate::utils::formatting::{bold, format_wage};
use crate::utils::table::{Column, Table};

fn headers(lang: Language) -> [&'static str; 7] {
    match lang {
        Language::En => ["DATE", "START", "END", "WORKED", "BREAK", "WAGE", "NOTES"],
        Language::Ja => ["日付", "出勤", "退勤", "勤務時間", "休憩", "日給", "備考"],
    }
}

/// Render the daily timesheet as a terminal table.
pub fn render_report(report: &PeriodReport, cfg: &Config) -> String {
    let lang = cfg.language;
    let [d, s, e, w, b, wage, notes] = headers(lang);
    let sep = cfg.separator_char.chars().next().unwrap_or('-');

    let mut table = Table::new(
        vec![
            Column::left(d),
            Column::left(s),
            Column::left(e),
            Column::right(w),
            Column::right(b),
            Column::right(wage),
            Column::left(notes),
        ],
        sep,
    );

    for day in &report.days {
        table.add_row(vec![
            day.date_label(lang),
            day.start_time_str(),
            day.end_time_str(&cfg.in_progress_label),
            day.work_hours_str(),
            day.break_time_str(),
            day.wage_str(lang),
            colorize_notes(&day.notes_str(lang)),
        ]);
    }

    let total_label = match lang {
        Language::En => "Total wage:",
        Language::Ja => "合計:",
    };

    format!(
        "{}\n{} {}\n",
        table.render(),
        bold(total_label),
        format_wage(report.total_wage, lang)
    )
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        period,
        as_of,
        rate,
        unit,
    } = cmd
    {
        let ctx = reconcile_context(cfg, as_of.as_deref(), *rate, *unit)?;

        let bounds = match period {
            Some(p) => date::parse_period(p)?,
            // the reference day picks the default month
            None => Some(date::month_containing(ctx.today)),
        };

        let pool = open_pool(cfg)?;
        let report = ReportLogic::build(&pool, cfg.current_user, bounds, &ctx)?;

        if report.days.is_empty() {
            info("No punches found for the selected period.");
            return Ok(());
        }

        print!("{}", render_report(&report, cfg));
    }

    Ok(())
}
