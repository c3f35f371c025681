// src/export/logic.rs

use crate::config::Language;
use crate::core::logic::ReconcileContext;
use crate::core::report::{ReportLogic, instant_bounds};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::load_events_between;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json::to_json;
use crate::export::model::{EventExport, ReportDocument, report_rows};
use crate::export::{ExportFormat, csv, notify_export_success};
use crate::ui::messages::{info, warning};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// What to export and how.
#[derive(Debug, Clone)]
pub struct ExportRequest<'a> {
    pub format: ExportFormat,
    pub path: &'a Path,
    pub bounds: Option<(NaiveDate, NaiveDate)>,
    /// Raw punches instead of daily summaries.
    pub events: bool,
    pub force: bool,
    pub lang: Language,
    pub in_progress_label: &'a str,
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Render the export body without touching the filesystem.
    /// Returns `None` when the period holds no punches.
    pub fn render(
        pool: &DbPool,
        user_id: i64,
        req: &ExportRequest<'_>,
        ctx: &ReconcileContext,
    ) -> AppResult<Option<String>> {
        if req.events {
            let (from, to) = instant_bounds(req.bounds, &ctx.tz)?;
            let events = load_events_between(&pool.conn, user_id, from, to)?;
            if events.is_empty() {
                return Ok(None);
            }

            let rows: Vec<EventExport> = events
                .iter()
                .map(|e| EventExport::from_event(e, &ctx.tz, req.lang))
                .collect();

            let body = match req.format {
                ExportFormat::Csv => csv::events_to_csv(&rows)?,
                ExportFormat::Json => to_json(&rows)?,
            };
            return Ok(Some(body));
        }

        let report = ReportLogic::build(pool, user_id, req.bounds, ctx)?;
        if report.days.is_empty() {
            return Ok(None);
        }

        let rows = report_rows(&report, req.lang, req.in_progress_label);
        let body = match req.format {
            ExportFormat::Csv => csv::summaries_to_csv(&rows)?,
            ExportFormat::Json => to_json(&ReportDocument {
                days: rows,
                total_wage: report.total_wage,
            })?,
        };
        Ok(Some(body))
    }

    pub fn export(
        pool: &mut DbPool,
        user_id: i64,
        req: &ExportRequest<'_>,
        ctx: &ReconcileContext,
    ) -> AppResult<()> {
        if req.path.is_dir() {
            return Err(AppError::Export(format!(
                "{} is a directory",
                req.path.display()
            )));
        }

        ensure_writable(req.path, req.force)?;

        let Some(body) = Self::render(pool, user_id, req, ctx)? else {
            warning("No punches found for the selected range. Nothing to export.");
            return Ok(());
        };

        let label = req.format.as_str().to_uppercase();
        info(format!("Exporting to {}: {}", label, req.path.display()));
        fs::write(req.path, body)?;

        ttlog_quiet(
            &pool.conn,
            "export",
            req.format.as_str(),
            &format!(
                "user={} {} → {}",
                user_id,
                if req.events { "events" } else { "summary" },
                req.path.display()
            ),
        );

        notify_export_success(&label, req.path);
        Ok(())
    }
}
