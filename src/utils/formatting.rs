//! Formatting utilities used for CLI and export outputs.

use crate::config::Language;

/// Minutes as `H:MM` (e.g. 480 → `8:00`, 65 → `1:05`). Negative → empty.
pub fn format_duration(minutes: i64) -> String {
    if minutes < 0 {
        return String::new();
    }
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Integer with thousands separators: 12000 → `12,000`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if n < 0 { format!("-{out}") } else { out }
}

pub fn format_wage(amount: i64, lang: Language) -> String {
    match lang {
        Language::En => group_thousands(amount),
        Language::Ja => format!("{}円", group_thousands(amount)),
    }
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}
