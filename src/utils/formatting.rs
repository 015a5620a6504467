//! Formatting utilities used for CLI and export outputs.
//!
//! Amounts follow pt-BR conventions: `.` groups thousands, `,` separates the
//! two decimals. Dates are shown as `dd/mm/yyyy`.

use chrono::NaiveDate;

/// Round to 2 decimal places, half away from zero.
///
/// Applied to every stored hour and money field so totals reconcile.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Shown in place of a NaN or infinite amount.
pub const NOT_A_NUMBER: &str = "-";

/// `1234.5` → `1.234,50`
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return NOT_A_NUMBER.to_string();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let int_part = cents / 100;
    let dec_part = cents % 100;

    let digits = int_part.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{grouped},{dec_part:02}")
}

pub fn currency_symbol(code: &str) -> String {
    match code.to_uppercase().as_str() {
        "EUR" => "€".to_string(),
        "BRL" => "R$".to_string(),
        "USD" => "US$".to_string(),
        "GBP" => "£".to_string(),
        "CHF" => "CHF".to_string(),
        other => other.to_string(),
    }
}

/// `(-10.0, "EUR")` → `-€ 10,00`
pub fn format_currency(value: f64, code: &str) -> String {
    if !value.is_finite() {
        return format!("{} {NOT_A_NUMBER}", currency_symbol(code));
    }
    let number = format_number(value.abs());
    let negative = value < 0.0 && number != "0,00";
    let sign = if negative { "-" } else { "" };
    format!("{sign}{} {number}", currency_symbol(code))
}

pub fn format_hours(hours: f64) -> String {
    format!("{}h", format_number(hours))
}

/// `2025-01-07` → `07/01/2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
