use chrono::NaiveDate;
use serde::Serialize;

/// A half-month pay window: day 1–15 or day 16–last day of the month.
/// Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Period {
    pub id: String,
    pub label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Period {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
