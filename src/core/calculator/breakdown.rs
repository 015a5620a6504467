//! Regular / overtime split and pricing.

use crate::utils::round2;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoursSplit {
    pub regular_hours: f64,
    pub overtime_hours: f64,
}

/// Hours up to `daily_limit` are regular, the rest is overtime.
pub fn hours_breakdown(total_hours: f64, daily_limit: f64) -> HoursSplit {
    HoursSplit {
        regular_hours: total_hours.min(daily_limit),
        overtime_hours: (total_hours - daily_limit).max(0.0),
    }
}

/// Holiday/weekend shifts are paid entirely as overtime, whatever the limit.
pub fn split_hours(total_hours: f64, is_holiday: bool, daily_limit: f64) -> HoursSplit {
    if is_holiday {
        HoursSplit {
            regular_hours: 0.0,
            overtime_hours: total_hours,
        }
    } else {
        hours_breakdown(total_hours, daily_limit)
    }
}

/// Earnings for a split at the given rates. Not rounded.
pub fn price(split: HoursSplit, hourly_rate: f64, overtime_rate: f64) -> f64 {
    split.regular_hours * hourly_rate + split.overtime_hours * overtime_rate
}

/// Stored hour and money fields of one shift, all rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricedShift {
    pub total_hours: f64,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub earnings: f64,
}

/// Round the total, split the rounded total, round the split and price it.
///
/// Creation and re-pricing both go through here, so the stored earnings
/// always equal `regular_hours * rate + overtime_hours * overtime_rate`
/// and re-pricing with unchanged rates is a no-op.
pub fn price_shift(
    total_hours: f64,
    is_holiday: bool,
    daily_limit: f64,
    hourly_rate: f64,
    overtime_rate: f64,
) -> PricedShift {
    let total_hours = round2(total_hours);
    let raw = split_hours(total_hours, is_holiday, daily_limit);
    let split = HoursSplit {
        regular_hours: round2(raw.regular_hours),
        overtime_hours: round2(raw.overtime_hours),
    };

    PricedShift {
        total_hours,
        regular_hours: split.regular_hours,
        overtime_hours: split.overtime_hours,
        earnings: round2(price(split, hourly_rate, overtime_rate)),
    }
}
