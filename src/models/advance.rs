use super::Dated;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A salary pre-payment, deducted from gross earnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceEntry {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl Dated for AdvanceEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
