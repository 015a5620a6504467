mod common;
use common::d;
use rfortnight::ui::messages::{Level, render, render_header};
use rfortnight::utils::formatting::{
    NOT_A_NUMBER, currency_symbol, format_currency, format_date, format_hours, format_number, round2,
};

#[test]
fn test_format_number_groups_thousands() {
    assert_eq!(format_number(1234.56), "1.234,56");
    assert_eq!(format_number(1234567.0), "1.234.567,00");
    assert_eq!(format_number(0.5), "0,50");
    assert_eq!(format_number(-42.0), "-42,00");
}

#[test]
fn test_format_currency() {
    assert_eq!(format_currency(1234.56, "EUR"), "€ 1.234,56");
    assert_eq!(format_currency(-10.0, "EUR"), "-€ 10,00");
    assert_eq!(format_currency(5.0, "BRL"), "R$ 5,00");
    assert_eq!(format_currency(5.0, "brl"), "R$ 5,00");
    assert_eq!(format_currency(1.0, "XYZ"), "XYZ 1,00");
    assert_eq!(currency_symbol("GBP"), "£");
}

#[test]
fn test_format_hours_and_dates() {
    assert_eq!(format_hours(8.0), "8,00h");
    assert_eq!(format_hours(11.25), "11,25h");
    assert_eq!(format_date(d("2025-01-07")), "07/01/2025");
}

#[test]
fn test_round2_half_away_from_zero() {
    assert_eq!(round2(0.125), 0.13);
    assert_eq!(round2(-0.125), -0.13);
    assert_eq!(round2(8.333333), 8.33);
    assert_eq!(round2(110.0), 110.0);
}

#[test]
fn test_non_finite_amounts_are_not_printed_as_numbers() {
    assert_eq!(format_number(f64::NAN), NOT_A_NUMBER);
    assert_eq!(format_number(f64::INFINITY), NOT_A_NUMBER);
    assert_eq!(format_number(f64::NEG_INFINITY), NOT_A_NUMBER);
    assert_eq!(format_hours(f64::NAN), "-h");
    assert_eq!(format_currency(f64::NEG_INFINITY, "EUR"), "€ -");
    assert_eq!(format_currency(f64::NAN, "BRL"), "R$ -");
}

#[test]
fn test_plain_messages_have_no_escape_codes() {
    assert_eq!(render(Level::Success, "Expense saved", false), "✅ Expense saved");
    assert_eq!(render(Level::Error, "unknown user", false), "❌ unknown user");
    assert!(render(Level::Warning, "x", true).starts_with("\x1b[33m"));
    assert!(render(Level::Info, "x", true).ends_with("x"));
}

#[test]
fn test_header_rule_matches_title_width() {
    assert_eq!(render_header("Settings of ADM", false), "Settings of ADM\n===============\n");
    // accented letters and symbols count by display width
    assert_eq!(render_header("Março €", false), "Março €\n=======\n");
    assert_eq!(render_header("", false), "\n===\n");
}
