use serde::{Deserialize, Serialize};

pub const DEFAULT_DAILY_LIMIT: f64 = 8.0;
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Per-user pay and fund configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub user_id: String,
    pub hourly_rate: f64,
    pub overtime_rate: f64,
    pub daily_limit: f64,
    pub currency: String,
    pub user_name: String,
    /// Fixed per-period allowance expenses are drawn from.
    pub expense_fund: f64,
}

impl AppSettings {
    pub fn defaults_for(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            hourly_rate: 0.0,
            overtime_rate: 8.0,
            daily_limit: DEFAULT_DAILY_LIMIT,
            currency: DEFAULT_CURRENCY.to_string(),
            user_name: "Employee".to_string(),
            expense_fund: 0.0,
        }
    }
}

/// Partial update coming from the `settings` command.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub hourly_rate: Option<f64>,
    pub overtime_rate: Option<f64>,
    pub daily_limit: Option<f64>,
    pub expense_fund: Option<f64>,
    pub currency: Option<String>,
    pub user_name: Option<String>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.hourly_rate.is_none()
            && self.overtime_rate.is_none()
            && self.daily_limit.is_none()
            && self.expense_fund.is_none()
            && self.currency.is_none()
            && self.user_name.is_none()
    }
}
