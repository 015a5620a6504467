// src/export/model.rs

use crate::core::report::PeriodReport;
use crate::models::time_entry::TimeEntry;
use crate::utils::formatting::{format_currency, format_date, format_hours, format_number};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One value of a report table, typed so each writer can render it natively.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Money(f64),
    Hours(f64),
    Number(f64),
    Date(NaiveDate),
    Time(NaiveTime),
    Empty,
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    pub fn opt_time(t: Option<NaiveTime>) -> Self {
        t.map(Cell::Time).unwrap_or(Cell::Empty)
    }

    /// Human-readable rendering (PDF, terminal).
    pub fn display(&self, currency: &str) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Money(v) => format_currency(*v, currency),
            Cell::Hours(v) => format_hours(*v),
            Cell::Number(v) => format_number(*v),
            Cell::Date(d) => format_date(*d),
            Cell::Time(t) => t.format("%H:%M").to_string(),
            Cell::Empty => String::new(),
        }
    }
}

/// A titled table: one worksheet in XLSX, one section in PDF.
#[derive(Debug, Clone)]
pub struct Table {
    pub title: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn display_rows(&self, currency: &str) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| r.iter().map(|c| c.display(currency)).collect())
            .collect()
    }
}

pub(crate) fn hours_table(report: &PeriodReport) -> Table {
    let rows = report
        .entries
        .iter()
        .map(|e| {
            vec![
                Cell::Date(e.date),
                Cell::Time(e.start),
                Cell::Time(e.lunch_start),
                Cell::Time(e.lunch_end),
                Cell::opt_time(e.dinner_start),
                Cell::opt_time(e.dinner_end),
                Cell::Time(e.end),
                Cell::text(e.description.clone()),
                Cell::text(if e.is_holiday { "yes" } else { "no" }),
                Cell::Hours(e.total_hours),
                Cell::Hours(e.regular_hours),
                Cell::Hours(e.overtime_hours),
                Cell::Money(e.earnings),
            ]
        })
        .collect();

    Table {
        title: "Hours",
        headers: vec![
            "Date",
            "In",
            "Lunch out",
            "Lunch in",
            "Dinner out",
            "Dinner in",
            "Out",
            "Description",
            "Holiday",
            "Total",
            "Regular",
            "Overtime",
            "Earnings",
        ],
        rows,
    }
}

pub(crate) fn expenses_table(report: &PeriodReport) -> Table {
    let rows = report
        .expenses
        .iter()
        .map(|e| {
            vec![
                Cell::Date(e.date),
                e.reference.clone().map(Cell::Text).unwrap_or(Cell::Empty),
                Cell::text(e.category.label()),
                Cell::text(e.description.clone()),
                Cell::Money(e.amount),
            ]
        })
        .collect();

    Table {
        title: "Expenses",
        headers: vec!["Date", "Ref", "Category", "Description", "Amount"],
        rows,
    }
}

pub(crate) fn advances_table(report: &PeriodReport) -> Table {
    let rows = report
        .advances
        .iter()
        .map(|a| {
            vec![
                Cell::Date(a.date),
                a.description.clone().map(Cell::Text).unwrap_or(Cell::Empty),
                Cell::Money(a.amount),
            ]
        })
        .collect();

    Table {
        title: "Advances",
        headers: vec!["Date", "Description", "Amount (deducted)"],
        rows,
    }
}

pub(crate) fn summary_table(report: &PeriodReport) -> Table {
    let t = &report.summary.totals;

    let rows = vec![
        vec![Cell::text("Total hours"), Cell::Hours(t.total_hours)],
        vec![Cell::text("Regular hours"), Cell::Hours(t.total_regular)],
        vec![Cell::text("Overtime hours"), Cell::Hours(t.total_overtime)],
        vec![Cell::text("Gross earnings"), Cell::Money(t.total_earnings)],
        vec![Cell::text("Expenses"), Cell::Money(t.total_expenses)],
        vec![Cell::text("Gross + expenses"), Cell::Money(t.gross_plus_expenses)],
        vec![Cell::text("Advances"), Cell::Money(t.total_advances)],
        vec![Cell::text("Net earnings"), Cell::Money(t.net_earnings)],
        vec![Cell::text("Expense fund"), Cell::Money(t.total_fund)],
        vec![Cell::text("Fund balance"), Cell::Money(t.fund_balance)],
        vec![Cell::text("Grand total"), Cell::Money(t.grand_total)],
    ];

    Table {
        title: "Summary",
        headers: vec!["Item", "Value"],
        rows,
    }
}

/// Flat CSV row for one shift.
#[derive(Serialize, Clone, Debug)]
pub struct TimeEntryExport {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "In")]
    pub start: String,
    #[serde(rename = "Lunch out")]
    pub lunch_start: String,
    #[serde(rename = "Lunch in")]
    pub lunch_end: String,
    #[serde(rename = "Dinner out")]
    pub dinner_start: String,
    #[serde(rename = "Dinner in")]
    pub dinner_end: String,
    #[serde(rename = "Out")]
    pub end: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Holiday")]
    pub holiday: &'static str,
    #[serde(rename = "Total hours")]
    pub total_hours: f64,
    #[serde(rename = "Regular hours")]
    pub regular_hours: f64,
    #[serde(rename = "Overtime hours")]
    pub overtime_hours: f64,
    #[serde(rename = "Earnings")]
    pub earnings: f64,
}

impl From<&TimeEntry> for TimeEntryExport {
    fn from(e: &TimeEntry) -> Self {
        let hhmm = |t: NaiveTime| t.format("%H:%M").to_string();
        Self {
            date: format_date(e.date),
            start: hhmm(e.start),
            lunch_start: hhmm(e.lunch_start),
            lunch_end: hhmm(e.lunch_end),
            dinner_start: e.dinner_start.map(hhmm).unwrap_or_default(),
            dinner_end: e.dinner_end.map(hhmm).unwrap_or_default(),
            end: hhmm(e.end),
            description: e.description.clone(),
            holiday: if e.is_holiday { "SIM" } else { "NAO" },
            total_hours: e.total_hours,
            regular_hours: e.regular_hours,
            overtime_hours: e.overtime_hours,
            earnings: e.earnings,
        }
    }
}
