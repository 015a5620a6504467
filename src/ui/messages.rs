use std::env;
use std::fmt;
use std::io::{self, IsTerminal};
use unicode_width::UnicodeWidthStr;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Severity of a one-line user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
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
}

/// Colors are off when `NO_COLOR` is set or the stream is not a terminal,
/// so piped output and saved logs stay plain.
fn use_color(on_terminal: bool) -> bool {
    on_terminal && env::var_os("NO_COLOR").is_none()
}

/// One message line, icon first.
pub fn render(level: Level, msg: &str, color: bool) -> String {
    if color {
        format!("{}{}{} {}{}", level.color(), BOLD, level.icon(), RESET, msg)
    } else {
        format!("{} {}", level.icon(), msg)
    }
}

/// Section title underlined to its display width, e.g. a fortnight label
/// or "Settings of ADM".
pub fn render_header(title: &str, color: bool) -> String {
    let rule = "=".repeat(title.width().max(3));
    if color {
        format!("{BOLD}{}{title}\n{rule}{RESET}\n", Level::Info.color())
    } else {
        format!("{title}\n{rule}\n")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    let color = use_color(io::stdout().is_terminal());
    println!("{}", render(Level::Info, &msg.to_string(), color));
}

pub fn success<T: fmt::Display>(msg: T) {
    let color = use_color(io::stdout().is_terminal());
    println!("{}", render(Level::Success, &msg.to_string(), color));
}

pub fn warning<T: fmt::Display>(msg: T) {
    let color = use_color(io::stdout().is_terminal());
    println!("{}", render(Level::Warning, &msg.to_string(), color));
}

pub fn error<T: fmt::Display>(msg: T) {
    let color = use_color(io::stderr().is_terminal());
    eprintln!("{}", render(Level::Error, &msg.to_string(), color));
}

pub fn header<T: fmt::Display>(msg: T) {
    let color = use_color(io::stdout().is_terminal());
    println!("{}", render_header(&msg.to_string(), color));
}
