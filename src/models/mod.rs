pub mod advance;
pub mod expense;
pub mod period;
pub mod settings;
pub mod time_entry;
pub mod user;

use chrono::NaiveDate;

/// Anything carrying a calendar day, so it can be selected by period.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}
