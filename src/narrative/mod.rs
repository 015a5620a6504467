//! Plain-language analysis of a fortnight, produced by an external text
//! generation service.
//!
//! [`narrative_report`] never fails: a missing key, a transport error or an
//! empty answer each turn into a fixed fallback message.

pub mod gemini;

pub use gemini::GeminiNarrator;

use crate::core::report::PeriodReport;
use crate::errors::AppResult;
use crate::utils::round2;
use chrono::NaiveDate;
use serde::Serialize;

pub const MISSING_KEY_MESSAGE: &str =
    "API key not configured. Set the environment variable named in the `narrative.api_key_env` setting.";
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Could not reach the narrative service. Check your API key and connection, then try again.";
pub const EMPTY_RESPONSE_MESSAGE: &str = "Could not generate the report.";

pub trait Narrator {
    fn generate(&self, input: &NarrativeInput) -> AppResult<String>;
}

#[derive(Debug, Clone, Serialize)]
pub struct NarrativeEntry {
    pub date: NaiveDate,
    pub total: f64,
    pub overtime: f64,
    pub description: String,
    pub holiday: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NarrativeExpense {
    pub date: NaiveDate,
    pub reference: Option<String>,
    pub amount: f64,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NarrativeAdvance {
    pub date: NaiveDate,
    pub amount: f64,
    pub description: Option<String>,
}

/// Everything the service is told about one period.
#[derive(Debug, Clone, Serialize)]
pub struct NarrativeInput {
    pub period_label: String,
    pub user_name: String,
    pub currency: String,
    pub hourly_rate: f64,
    pub daily_limit: f64,
    pub entries: Vec<NarrativeEntry>,
    pub expenses: Vec<NarrativeExpense>,
    pub advances: Vec<NarrativeAdvance>,
    pub total_hours: f64,
    pub total_overtime: f64,
    pub gross_earnings: f64,
    pub total_advances: f64,
    pub net_earnings: f64,
    pub total_fund: f64,
    pub total_expenses: f64,
    pub fund_balance: f64,
}

impl From<&PeriodReport> for NarrativeInput {
    fn from(report: &PeriodReport) -> Self {
        let t = &report.summary.totals;

        Self {
            period_label: report.period.label.clone(),
            user_name: report.settings.user_name.clone(),
            currency: report.settings.currency.clone(),
            hourly_rate: report.settings.hourly_rate,
            daily_limit: report.settings.daily_limit,
            entries: report
                .entries
                .iter()
                .map(|e| NarrativeEntry {
                    date: e.date,
                    total: e.total_hours,
                    overtime: e.overtime_hours,
                    description: e.description.clone(),
                    holiday: e.is_holiday,
                })
                .collect(),
            expenses: report
                .expenses
                .iter()
                .map(|e| NarrativeExpense {
                    date: e.date,
                    reference: e.reference.clone(),
                    amount: e.amount,
                    category: e.category.label().to_string(),
                    description: e.description.clone(),
                })
                .collect(),
            advances: report
                .advances
                .iter()
                .map(|a| NarrativeAdvance {
                    date: a.date,
                    amount: a.amount,
                    description: a.description.clone(),
                })
                .collect(),
            total_hours: round2(t.total_hours),
            total_overtime: round2(t.total_overtime),
            gross_earnings: round2(t.total_earnings),
            total_advances: round2(t.total_advances),
            net_earnings: round2(t.net_earnings),
            total_fund: round2(t.total_fund),
            total_expenses: round2(t.total_expenses),
            fund_balance: round2(t.fund_balance),
        }
    }
}

/// Ask `narrator` for the analysis; `None` means no API key is configured.
pub fn narrative_report(narrator: Option<&dyn Narrator>, input: &NarrativeInput) -> String {
    let Some(narrator) = narrator else {
        return MISSING_KEY_MESSAGE.to_string();
    };

    match narrator.generate(input) {
        Ok(text) if text.trim().is_empty() => EMPTY_RESPONSE_MESSAGE.to_string(),
        Ok(text) => text,
        Err(_) => CONNECTION_ERROR_MESSAGE.to_string(),
    }
}
