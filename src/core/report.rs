//! Everything known about one period for one user, ready for display,
//! exports and the narrative collaborator.

use crate::core::period::filter_by_period;
use crate::core::summary::{PeriodSummary, summarize};
use crate::models::advance::AdvanceEntry;
use crate::models::expense::{ExpenseCategory, ExpenseEntry};
use crate::models::period::Period;
use crate::models::settings::AppSettings;
use crate::models::time_entry::TimeEntry;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PeriodReport {
    pub period: Period,
    pub settings: AppSettings,
    pub entries: Vec<TimeEntry>,
    pub expenses: Vec<ExpenseEntry>,
    pub advances: Vec<AdvanceEntry>,
    pub summary: PeriodSummary,
}

impl PeriodReport {
    /// Filter full collections down to `period` and reduce them.
    /// Output lists are sorted by date (stable, so same-day order is kept).
    pub fn build(
        period: &Period,
        settings: &AppSettings,
        entries: &[TimeEntry],
        expenses: &[ExpenseEntry],
        advances: &[AdvanceEntry],
    ) -> Self {
        let mut entries = filter_by_period(entries, period);
        let mut expenses = filter_by_period(expenses, period);
        let mut advances = filter_by_period(advances, period);

        entries.sort_by_key(|e| e.date);
        expenses.sort_by_key(|e| e.date);
        advances.sort_by_key(|a| a.date);

        let summary = summarize(&entries, &expenses, &advances, settings);

        Self {
            period: period.clone(),
            settings: settings.clone(),
            entries,
            expenses,
            advances,
            summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.expenses.is_empty() && self.advances.is_empty()
    }
}

/// Expenses of the period, optionally narrowed to one category and/or a
/// reference containing `reference` (case-insensitive).
pub fn filter_expenses<'a>(
    expenses: &'a [ExpenseEntry],
    category: Option<ExpenseCategory>,
    reference: Option<&str>,
) -> Vec<&'a ExpenseEntry> {
    let needle = reference.map(|r| r.trim().to_lowercase());

    expenses
        .iter()
        .filter(|e| category.is_none_or(|c| e.category == c))
        .filter(|e| match &needle {
            None => true,
            Some(n) => e
                .reference
                .as_ref()
                .is_some_and(|r| r.to_lowercase().contains(n.as_str())),
        })
        .collect()
}
