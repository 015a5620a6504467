use crate::core::calculator::{net_duration, price_shift};
use crate::errors::{AppError, AppResult};
use crate::models::advance::AdvanceEntry;
use crate::models::expense::{ExpenseCategory, ExpenseEntry};
use crate::models::settings::AppSettings;
use crate::models::time_entry::{TimeEntry, TimeEntryDraft};
use crate::store::{Store, audit};
use crate::utils::date::is_weekend;
use crate::utils::{format_hours, round2};
use chrono::NaiveDate;
use uuid::Uuid;

/// High-level business logic for creating entries.
pub struct AddLogic;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn check_amount(amount: f64) -> AppResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::InvalidAmount(format!(
            "{amount} (must be greater than zero)"
        )));
    }
    Ok(())
}

impl AddLogic {
    /// Validate a draft against the owner's existing entries and stamp the
    /// computed fields with the current settings. Nothing is persisted.
    pub fn build_time_entry(
        draft: &TimeEntryDraft,
        owner: &str,
        settings: &AppSettings,
        existing: &[TimeEntry],
    ) -> AppResult<TimeEntry> {
        if existing
            .iter()
            .any(|e| e.user_id == owner && e.date == draft.date)
        {
            return Err(AppError::DuplicateDate(draft.date.to_string()));
        }

        let total_hours = net_duration(
            draft.start,
            draft.lunch_start,
            draft.lunch_end,
            draft.dinner_start,
            draft.dinner_end,
            draft.end,
        );

        if total_hours <= 0.0 {
            return Err(AppError::Validation(
                "invalid times, check the order: start < lunch < dinner < end".into(),
            ));
        }

        let is_holiday = draft.is_holiday.unwrap_or_else(|| is_weekend(draft.date));
        let priced = price_shift(
            total_hours,
            is_holiday,
            settings.daily_limit,
            settings.hourly_rate,
            settings.overtime_rate,
        );

        Ok(TimeEntry {
            id: new_id(),
            user_id: owner.to_string(),
            date: draft.date,
            start: draft.start,
            lunch_start: draft.lunch_start,
            lunch_end: draft.lunch_end,
            dinner_start: draft.dinner_start,
            dinner_end: draft.dinner_end,
            end: draft.end,
            description: draft.description.trim().to_string(),
            is_holiday,
            total_hours: priced.total_hours,
            regular_hours: priced.regular_hours,
            overtime_hours: priced.overtime_hours,
            earnings: priced.earnings,
        })
    }

    /// Create and persist a shift. Rejected shifts are never saved.
    pub fn add_time_entry(
        store: &mut dyn Store,
        owner: &str,
        settings: &AppSettings,
        draft: &TimeEntryDraft,
    ) -> AppResult<TimeEntry> {
        let existing = store.load_time_entries(owner)?;

        let entry = Self::build_time_entry(draft, owner, settings, &existing)?;
        store.save_time_entries(std::slice::from_ref(&entry), owner)?;

        audit(
            store,
            "add",
            &entry.date_str(),
            &format!(
                "Time entry {} ({}, holiday={})",
                entry.id,
                format_hours(entry.total_hours),
                entry.is_holiday
            ),
        );

        Ok(entry)
    }

    pub fn add_expense(
        store: &mut dyn Store,
        owner: &str,
        date: NaiveDate,
        amount: f64,
        category: ExpenseCategory,
        description: &str,
        reference: Option<String>,
    ) -> AppResult<ExpenseEntry> {
        check_amount(amount)?;

        let expense = ExpenseEntry {
            id: new_id(),
            user_id: owner.to_string(),
            date,
            amount: round2(amount),
            category,
            description: description.trim().to_string(),
            reference: reference
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
        };

        store.save_expenses(std::slice::from_ref(&expense), owner)?;
        audit(
            store,
            "add",
            &date.to_string(),
            &format!("Expense {} ({} {})", expense.id, expense.amount, category.label()),
        );

        Ok(expense)
    }

    pub fn add_advance(
        store: &mut dyn Store,
        owner: &str,
        date: NaiveDate,
        amount: f64,
        description: Option<String>,
    ) -> AppResult<AdvanceEntry> {
        check_amount(amount)?;

        let advance = AdvanceEntry {
            id: new_id(),
            user_id: owner.to_string(),
            date,
            amount: round2(amount),
            description: description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        };

        store.save_advances(std::slice::from_ref(&advance), owner)?;
        audit(
            store,
            "add",
            &date.to_string(),
            &format!("Advance {} ({})", advance.id, advance.amount),
        );

        Ok(advance)
    }
}
