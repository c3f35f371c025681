//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured in terminal columns, so Japanese notes and weekday
//! labels line up with ASCII cells.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap());

pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Terminal columns taken by `s`, ignoring colour escapes.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

pub struct Column {
    pub header: String,
    pub right_align: bool,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            right_align: false,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            right_align: true,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>, separator: char) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .chain(std::iter::once(col.header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        out.push_str(&self.render_line(&headers, &widths));

        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            out.push_str(&self.render_line(&cells, &widths));
        }

        out
    }

    fn render_line(&self, cells: &[&str], widths: &[usize]) -> String {
        let mut parts = Vec::with_capacity(widths.len());

        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).copied().unwrap_or("");
            let pad = " ".repeat(widths[i].saturating_sub(visible_width(cell)));
            if col.right_align {
                parts.push(format!("{pad}{cell}"));
            } else {
                parts.push(format!("{cell}{pad}"));
            }
        }

        let mut line = parts.join("  ").trim_end().to_string();
        line.push('\n');
        line
    }
}
