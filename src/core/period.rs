//! Fortnight catalog, "current period" resolution and period filtering.

use crate::models::Dated;
use crate::models::period::Period;
use crate::utils::date::{month_last_day, month_name};
use chrono::NaiveDate;

/// When today falls outside the catalog, the selection falls back to the
/// period this many places before the end of the catalog (second-to-last).
pub const FALLBACK_OFFSET_FROM_END: usize = 2;

/// Every fortnight from January of `first_year` to December of `last_year`,
/// in chronological order: two per month (1–15, 16–last day).
///
/// Deterministic: calling it again with the same span yields the same catalog.
/// An inverted span yields an empty catalog.
pub fn generate_periods(first_year: i32, last_year: i32) -> Vec<Period> {
    let mut periods = Vec::new();

    for year in first_year..=last_year {
        for month in 1..=12u32 {
            let (Some(first), Some(mid), Some(second), Some(last)) = (
                NaiveDate::from_ymd_opt(year, month, 1),
                NaiveDate::from_ymd_opt(year, month, 15),
                NaiveDate::from_ymd_opt(year, month, 16),
                month_last_day(year, month).and_then(|d| NaiveDate::from_ymd_opt(year, month, d)),
            ) else {
                continue;
            };

            let name = month_name(month);

            periods.push(Period {
                id: format!("{year}-{month}-1"),
                label: format!("1st fortnight {name} {year}"),
                start_date: first,
                end_date: mid,
            });

            periods.push(Period {
                id: format!("{year}-{month}-2"),
                label: format!("2nd fortnight {name} {year}"),
                start_date: second,
                end_date: last,
            });
        }
    }

    periods
}

/// Index of the period containing `today`, or the fallback
/// (`len - FALLBACK_OFFSET_FROM_END`, clamped at 0) when none does.
pub fn current_period_index(periods: &[Period], today: NaiveDate) -> usize {
    periods
        .iter()
        .position(|p| p.contains(today))
        .unwrap_or_else(|| periods.len().saturating_sub(FALLBACK_OFFSET_FROM_END))
}

pub fn find_period<'a>(periods: &'a [Period], id: &str) -> Option<&'a Period> {
    periods.iter().find(|p| p.id == id)
}

/// Items whose date lies in `[start_date, end_date]`, input order preserved.
pub fn filter_by_period<T: Dated + Clone>(items: &[T], period: &Period) -> Vec<T> {
    items
        .iter()
        .filter(|item| period.contains(item.date()))
        .cloned()
        .collect()
}
