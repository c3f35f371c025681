//! User-facing status lines. Diagnostics go through `tracing` instead.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn line<T: fmt::Display>(self, msg: T) -> String {
        format!("{}{}{} {}{}", self.color(), BOLD, self.icon(), RESET, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", Level::Info.line(msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", Level::Success.line(msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", Level::Warning.line(msg));
}

/// Errors go to stderr so that piped report output stays clean.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", Level::Error.line(msg));
}
