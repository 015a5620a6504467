#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use rfortnight::models::advance::AdvanceEntry;
use rfortnight::models::expense::{ExpenseCategory, ExpenseEntry};
use rfortnight::models::time_entry::TimeEntry;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rfn() -> Command {
    cargo_bin_cmd!("rfortnight")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfortnight.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Same as `setup_test_db`, for the local JSON backend
pub fn setup_test_local(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfortnight.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB, set rates and add a small dataset in the 2nd fortnight of September 2025
pub fn init_db_with_data(db_path: &str) {
    rfn()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rfn()
        .args([
            "--db",
            db_path,
            "--test",
            "settings",
            "--rate",
            "10",
            "--overtime-rate",
            "15",
            "--fund",
            "100",
        ])
        .assert()
        .success();

    // Tuesday, 9h
    add_shift(db_path, "2025-09-16", "08:00", "12:00", "13:00", "18:00");
    // Saturday, holiday by default, 4h
    add_shift(db_path, "2025-09-20", "10:00", "12:00", "13:00", "15:00");

    rfn()
        .args([
            "--db",
            db_path,
            "--test",
            "expense",
            "2025-09-17",
            "25.50",
            "--category",
            "lunch",
            "--ref",
            "AG-7",
        ])
        .assert()
        .success();

    rfn()
        .args([
            "--db",
            db_path,
            "--test",
            "advance",
            "2025-09-18",
            "40",
            "--desc",
            "Cash",
        ])
        .assert()
        .success();
}

pub fn add_shift(db_path: &str, date: &str, start: &str, lunch_out: &str, lunch_in: &str, end: &str) {
    rfn()
        .args([
            "--db",
            db_path,
            "--test",
            "add",
            date,
            "--in",
            start,
            "--lunch-out",
            lunch_out,
            "--lunch-in",
            lunch_in,
            "--out",
            end,
        ])
        .assert()
        .success();
}

/// Extract the first `id: <uuid>` printed by an add-like command.
pub fn printed_id(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout)
        .lines()
        .find_map(|l| l.trim().strip_prefix("id: ").map(|s| s.trim().to_string()))
        .expect("command printed an id")
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid test time")
}

/// A stored shift with already computed fields.
pub fn entry(date: &str, total: f64, regular: f64, overtime: f64, earnings: f64, holiday: bool) -> TimeEntry {
    TimeEntry {
        id: format!("t-{date}"),
        user_id: "u1".to_string(),
        date: d(date),
        start: t("09:00"),
        lunch_start: t("12:00"),
        lunch_end: t("13:00"),
        dinner_start: None,
        dinner_end: None,
        end: t("18:00"),
        description: String::new(),
        is_holiday: holiday,
        total_hours: total,
        regular_hours: regular,
        overtime_hours: overtime,
        earnings,
    }
}

pub fn expense(id: &str, date: &str, amount: f64, category: ExpenseCategory) -> ExpenseEntry {
    ExpenseEntry {
        id: id.to_string(),
        user_id: "u1".to_string(),
        date: d(date),
        amount,
        category,
        description: String::new(),
        reference: None,
    }
}

pub fn advance(id: &str, date: &str, amount: f64) -> AdvanceEntry {
    AdvanceEntry {
        id: id.to_string(),
        user_id: "u1".to_string(),
        date: d(date),
        amount,
        description: None,
    }
}
