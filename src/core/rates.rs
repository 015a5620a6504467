//! Retroactive re-pricing of every stored shift after a rate change.

use crate::core::calculator::price_shift;
use crate::models::time_entry::TimeEntry;

/// Recompute the split and earnings of every entry from its stored
/// `total_hours`, using the new rates.
///
/// This rewrites the whole history: past entries are re-priced at the new
/// rates, the rate in force when they were created is not kept. Holiday
/// entries stay entirely overtime.
pub fn reapply_rates(
    entries: &[TimeEntry],
    hourly_rate: f64,
    overtime_rate: f64,
    daily_limit: f64,
) -> Vec<TimeEntry> {
    entries
        .iter()
        .map(|entry| {
            let priced = price_shift(
                entry.total_hours,
                entry.is_holiday,
                daily_limit,
                hourly_rate,
                overtime_rate,
            );
            TimeEntry {
                total_hours: priced.total_hours,
                regular_hours: priced.regular_hours,
                overtime_hours: priced.overtime_hours,
                earnings: priced.earnings,
                ..entry.clone()
            }
        })
        .collect()
}
