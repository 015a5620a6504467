/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Balance color:
/// \>0 → green
/// \<0 → red (over budget / negative net)
/// 0 → reset
pub fn color_for_balance(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}

/// Grey out empty cells ("", "-", "--:--").
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "-" || v == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
