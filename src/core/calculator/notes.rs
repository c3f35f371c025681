use super::pairing::DayPairing;
use crate::config::Language;
use serde::Serialize;

/// A defect found while reconciling a day. Informational only: it is shown
/// next to the day's row and never stops the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Anomaly {
    MultipleWorkSessions,
    UnpairedStartWork(usize),
    UnpairedEndWork(usize),
    UnpairedStartBreak(usize),
    UnpairedEndBreak(usize),
    BreakPairsSummed(usize),
}

impl Anomaly {
    pub fn render(&self, lang: Language) -> String {
        match lang {
            Language::En => match *self {
                Anomaly::MultipleWorkSessions => "multiple work-session pairs present".to_string(),
                Anomaly::UnpairedStartWork(k) => {
                    format!("{k} start-work {} no matching end-work", event_has(k))
                }
                Anomaly::UnpairedEndWork(k) => {
                    format!("{k} end-work {} no matching start-work", event_has(k))
                }
                Anomaly::UnpairedStartBreak(k) => {
                    format!("{k} start-break {} no matching end-break", event_has(k))
                }
                Anomaly::UnpairedEndBreak(k) => {
                    format!("{k} end-break {} no matching start-break", event_has(k))
                }
                Anomaly::BreakPairsSummed(n) => format!("{n} break pairs summed"),
            },
            Language::Ja => match *self {
                Anomaly::MultipleWorkSessions => "複数の出勤・退勤ペアが存在します".to_string(),
                Anomaly::UnpairedStartWork(k) => {
                    format!("{k}件の出勤記録に対応する退勤記録がありません")
                }
                Anomaly::UnpairedEndWork(k) => {
                    format!("{k}件の退勤記録に対応する出勤記録がありません")
                }
                Anomaly::UnpairedStartBreak(k) => {
                    format!("{k}件の休憩開始記録に対応する休憩終了記録がありません")
                }
                Anomaly::UnpairedEndBreak(k) => {
                    format!("{k}件の休憩終了記録に対応する休憩開始記録がありません")
                }
                Anomaly::BreakPairsSummed(n) => {
                    format!("{n}件の休憩ペアの合計時間を表示しています")
                }
            },
        }
    }
}

fn event_has(k: usize) -> &'static str {
    if k == 1 { "event has" } else { "events have" }
}

/// Build the day's notes in their fixed order.
///
/// A trailing START_WORK on the reference day means "still clocked in" and is
/// not reported. An orphan END_WORK is reported on every day, today included.
pub fn collect_notes(p: &DayPairing, is_today: bool) -> Vec<Anomaly> {
    let mut notes = Vec::new();

    if p.work_pairs.len() > 1 {
        notes.push(Anomaly::MultipleWorkSessions);
    }

    let unpaired_start_work = p.unpaired_start_work();
    if unpaired_start_work > 0 && !is_today {
        notes.push(Anomaly::UnpairedStartWork(unpaired_start_work));
    }

    if p.unpaired_end_work > 0 {
        notes.push(Anomaly::UnpairedEndWork(p.unpaired_end_work));
    }

    let unpaired_start_break = p.unpaired_start_break + usize::from(p.open_break.is_some());
    if unpaired_start_break > 0 {
        notes.push(Anomaly::UnpairedStartBreak(unpaired_start_break));
    }

    if p.unpaired_end_break > 0 {
        notes.push(Anomaly::UnpairedEndBreak(p.unpaired_end_break));
    }

    if p.break_pairs.len() > 1 {
        notes.push(Anomaly::BreakPairsSummed(p.break_pairs.len()));
    }

    notes
}
