use super::Dated;
use crate::utils::time::{hhmm, hhmm_opt};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One work shift.
///
/// The four computed fields (`total_hours`, `regular_hours`, `overtime_hours`,
/// `earnings`) are stamped when the entry is created and rewritten only by a
/// bulk rate reapplication; they are never recomputed on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate, // ⇔ time_entries.date (TEXT "YYYY-MM-DD")

    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub lunch_start: NaiveTime,
    #[serde(with = "hhmm")]
    pub lunch_end: NaiveTime,
    #[serde(with = "hhmm_opt", default)]
    pub dinner_start: Option<NaiveTime>,
    #[serde(with = "hhmm_opt", default)]
    pub dinner_end: Option<NaiveTime>,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,

    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_holiday: bool,

    pub total_hours: f64,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub earnings: f64,
}

impl TimeEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Dinner block is only meaningful when both ends are present.
    pub fn dinner(&self) -> Option<(NaiveTime, NaiveTime)> {
        match (self.dinner_start, self.dinner_end) {
            (Some(s), Some(e)) => Some((s, e)),
            _ => None,
        }
    }

    /// Human readable shift, e.g. `09:00-12:00 | 13:00-18:00`.
    pub fn schedule(&self) -> String {
        let t = |x: NaiveTime| x.format("%H:%M").to_string();
        match self.dinner() {
            Some((ds, de)) => format!(
                "{}-{} | {}-{} | {}-{}",
                t(self.start),
                t(self.lunch_start),
                t(self.lunch_end),
                t(ds),
                t(de),
                t(self.end)
            ),
            None => format!(
                "{}-{} | {}-{}",
                t(self.start),
                t(self.lunch_start),
                t(self.lunch_end),
                t(self.end)
            ),
        }
    }
}

impl Dated for TimeEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// User input for a new shift, before any computed field exists.
#[derive(Debug, Clone)]
pub struct TimeEntryDraft {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub lunch_start: NaiveTime,
    pub lunch_end: NaiveTime,
    pub dinner_start: Option<NaiveTime>,
    pub dinner_end: Option<NaiveTime>,
    pub end: NaiveTime,
    pub description: String,
    /// `None` lets the weekday decide.
    pub is_holiday: Option<bool>,
}
