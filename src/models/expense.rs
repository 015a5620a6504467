use super::Dated;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed set of expense categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Breakfast,
    Lunch,
    Dinner,
    Fuel,
    Transport,
    Misc,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Breakfast,
        ExpenseCategory::Lunch,
        ExpenseCategory::Dinner,
        ExpenseCategory::Fuel,
        ExpenseCategory::Transport,
        ExpenseCategory::Misc,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Breakfast => "breakfast",
            ExpenseCategory::Lunch => "lunch",
            ExpenseCategory::Dinner => "dinner",
            ExpenseCategory::Fuel => "fuel",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Misc => "misc",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "breakfast" => Some(ExpenseCategory::Breakfast),
            "lunch" => Some(ExpenseCategory::Lunch),
            "dinner" => Some(ExpenseCategory::Dinner),
            "fuel" => Some(ExpenseCategory::Fuel),
            "transport" => Some(ExpenseCategory::Transport),
            "misc" => Some(ExpenseCategory::Misc),
            _ => None,
        }
    }

    /// Helper: parse CLI input (any case)
    pub fn from_code(code: &str) -> Option<Self> {
        Self::from_db_str(&code.trim().to_lowercase())
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Breakfast => "Breakfast",
            ExpenseCategory::Lunch => "Lunch",
            ExpenseCategory::Dinner => "Dinner",
            ExpenseCategory::Fuel => "Fuel",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Misc => "Misc",
        }
    }
}

/// One withdrawal against the expense fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub description: String,
    /// Optional reference number (receipt / agency code).
    #[serde(default)]
    pub reference: Option<String>,
}

impl Dated for ExpenseEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
