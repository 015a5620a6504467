//! Reduction of one period's entries, expenses and advances into totals and
//! chart-ready series.

use crate::models::advance::AdvanceEntry;
use crate::models::expense::{ExpenseCategory, ExpenseEntry};
use crate::models::settings::AppSettings;
use crate::models::time_entry::TimeEntry;
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PeriodTotals {
    pub total_hours: f64,
    pub total_regular: f64,
    pub total_overtime: f64,
    /// Gross earnings.
    pub total_earnings: f64,
    pub total_expenses: f64,
    pub total_advances: f64,
    /// Fixed per-period fund, never accumulated across periods.
    pub total_fund: f64,
    /// `total_fund - total_expenses`; negative means over budget.
    pub fund_balance: f64,
    /// `total_earnings - total_advances`; may be negative.
    pub net_earnings: f64,
    pub gross_plus_expenses: f64,
    /// `net_earnings + total_expenses`, the amount to be settled.
    pub grand_total: f64,
}

/// Activity of one day of the month. Days without activity are absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub day: u32,
    pub earnings: f64,
    pub expenses: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPoint {
    pub category: ExpenseCategory,
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub totals: PeriodTotals,
    /// Ascending by day of month.
    pub daily: Vec<DailyPoint>,
    /// Descending by summed amount.
    pub categories: Vec<CategoryPoint>,
}

pub fn summarize(
    entries: &[TimeEntry],
    expenses: &[ExpenseEntry],
    advances: &[AdvanceEntry],
    settings: &AppSettings,
) -> PeriodSummary {
    PeriodSummary {
        totals: compute_totals(entries, expenses, advances, settings),
        daily: daily_series(entries, expenses),
        categories: category_series(expenses),
    }
}

pub fn compute_totals(
    entries: &[TimeEntry],
    expenses: &[ExpenseEntry],
    advances: &[AdvanceEntry],
    settings: &AppSettings,
) -> PeriodTotals {
    let total_hours: f64 = entries.iter().map(|e| e.total_hours).sum();
    let total_regular: f64 = entries.iter().map(|e| e.regular_hours).sum();
    let total_overtime: f64 = entries.iter().map(|e| e.overtime_hours).sum();
    let total_earnings: f64 = entries.iter().map(|e| e.earnings).sum();
    let total_expenses: f64 = expenses.iter().map(|e| e.amount).sum();
    let total_advances: f64 = advances.iter().map(|a| a.amount).sum();

    let total_fund = settings.expense_fund;
    let net_earnings = total_earnings - total_advances;

    PeriodTotals {
        total_hours,
        total_regular,
        total_overtime,
        total_earnings,
        total_expenses,
        total_advances,
        total_fund,
        fund_balance: total_fund - total_expenses,
        net_earnings,
        gross_plus_expenses: total_earnings + total_expenses,
        grand_total: net_earnings + total_expenses,
    }
}

/// Earnings and expenses grouped by day of month, sorted numerically.
pub fn daily_series(entries: &[TimeEntry], expenses: &[ExpenseEntry]) -> Vec<DailyPoint> {
    let mut days: BTreeMap<u32, DailyPoint> = BTreeMap::new();

    for t in entries {
        day_point(&mut days, t.date.day()).earnings += t.earnings;
    }

    for e in expenses {
        day_point(&mut days, e.date.day()).expenses += e.amount;
    }

    days.into_values().collect()
}

fn day_point(days: &mut BTreeMap<u32, DailyPoint>, day: u32) -> &mut DailyPoint {
    days.entry(day).or_insert(DailyPoint {
        day,
        earnings: 0.0,
        expenses: 0.0,
    })
}

/// Expenses summed per category, largest first. Ties keep first-seen order.
pub fn category_series(expenses: &[ExpenseEntry]) -> Vec<CategoryPoint> {
    let mut points: Vec<CategoryPoint> = Vec::new();

    for e in expenses {
        match points.iter_mut().find(|p| p.category == e.category) {
            Some(p) => p.total += e.amount,
            None => points.push(CategoryPoint {
                category: e.category,
                total: e.amount,
            }),
        }
    }

    points.sort_by(|a, b| b.total.total_cmp(&a.total));
    points
}
