use crate::config::Config;
use crate::core::period::{current_period_index, find_period, generate_periods};
use crate::core::report::PeriodReport;
use crate::errors::{AppError, AppResult};
use crate::models::period::Period;
use crate::store::Store;
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// The period catalog for the configured span of years.
    pub fn periods(cfg: &Config) -> Vec<Period> {
        generate_periods(cfg.first_year, cfg.last_year)
    }

    /// Pick a period by id, or the current one when no id is given.
    pub fn select_period(
        periods: &[Period],
        id: Option<&str>,
        today: NaiveDate,
    ) -> AppResult<Period> {
        match id {
            Some(id) => find_period(periods, id)
                .cloned()
                .ok_or_else(|| AppError::InvalidPeriod(id.to_string())),
            None => periods
                .get(current_period_index(periods, today))
                .cloned()
                .ok_or_else(|| AppError::InvalidPeriod("empty period catalog".into())),
        }
    }

    /// Load the owner's full collections and reduce them to one period.
    pub fn load_report(
        store: &mut dyn Store,
        owner: &str,
        period: &Period,
    ) -> AppResult<PeriodReport> {
        let settings = store.load_settings(owner)?;
        let entries = store.load_time_entries(owner)?;
        let expenses = store.load_expenses(owner)?;
        let advances = store.load_advances(owner)?;

        Ok(PeriodReport::build(
            period, &settings, &entries, &expenses, &advances,
        ))
    }
}
