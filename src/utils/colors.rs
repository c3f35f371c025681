/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::status::WorkStatus;

pub fn color_for_status(status: WorkStatus) -> &'static str {
    match status {
        WorkStatus::Working => GREEN,
        WorkStatus::OnBreak => YELLOW,
        WorkStatus::NotWorking => GREY,
    }
}

/// Manually corrected punches are highlighted in cyan.
pub fn highlight_modified(value: &str, is_modified: bool) -> String {
    if is_modified {
        format!("{CYAN}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Days carrying notes are flagged in red.
pub fn colorize_notes(value: &str) -> String {
    if value.trim().is_empty() {
        String::new()
    } else {
        format!("{RED}{value}{RESET}")
    }
}
