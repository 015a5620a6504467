use crate::config::NarrativeConfig;
use crate::errors::{AppError, AppResult};
use crate::narrative::{NarrativeInput, Narrator};
use crate::utils::formatting::{format_currency, format_number};
use serde::Deserialize;
use serde_json::json;
use std::env;
use std::time::Duration;

/// Client of the `generateContent` endpoint.
pub struct GeminiNarrator {
    http: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GeminiNarrator {
    /// Build a client from configuration. `Ok(None)` when the key variable is unset or empty.
    pub fn from_config(cfg: &NarrativeConfig) -> AppResult<Option<Self>> {
        let api_key = match env::var(&cfg.api_key_env) {
            Ok(k) if !k.trim().is_empty() => k,
            _ => return Ok(None),
        };

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        Ok(Some(Self {
            http,
            endpoint: cfg.endpoint.trim_end_matches('/').to_string(),
            model: cfg.model.clone(),
            api_key,
        }))
    }

    fn url(&self) -> String {
        format!("{}/{}:generateContent", self.endpoint, self.model)
    }
}

/// The instruction sent to the model.
pub fn build_prompt(input: &NarrativeInput) -> AppResult<String> {
    let money = |v: f64| format_currency(v, &input.currency);

    let entries = serde_json::to_string(&input.entries)?;
    let expenses = serde_json::to_string(&input.expenses)?;
    let advances = serde_json::to_string(&input.advances)?;

    Ok(format!(
        "Act as a senior financial and productivity analyst.
Analyse the following data of the worker \"{user}\" for the period {period}.

EARNINGS AND ADVANCES:
- Hours up to {limit}h per day are regular and paid at {rate}; hours beyond are overtime.
- Exception: on weekends and holidays every hour is overtime.
- Total hours worked: {hours}h
- Total overtime hours: {overtime}h
- Gross earnings: {gross}
- (-) Advances: {advances_total} (deducted from pay)
- (=) Net amount to receive: {net}

EXPENSE FUND (separate from pay):
- Fixed fund available: {fund}
- Total expenses: {expenses_total}
- Fund balance (fund - expenses): {balance}

ADVANCES: {advances}

WORK LOG: {entries}

EXPENSES: {expenses}

Write a concise Markdown report with:
1. **Financial summary**: confirm the net amount to receive.
2. **Expense fund**: was the fixed fund of {fund} enough to cover the expenses?
3. **Hours**: a short comment on the workload.
4. **Tips**: financial suggestions.

Keep the tone professional and direct.",
        user = input.user_name,
        period = input.period_label,
        limit = format_number(input.daily_limit),
        rate = money(input.hourly_rate),
        hours = format_number(input.total_hours),
        overtime = format_number(input.total_overtime),
        gross = money(input.gross_earnings),
        advances_total = money(input.total_advances),
        net = money(input.net_earnings),
        fund = money(input.total_fund),
        expenses_total = money(input.total_expenses),
        balance = money(input.fund_balance),
    ))
}

impl Narrator for GeminiNarrator {
    fn generate(&self, input: &NarrativeInput) -> AppResult<String> {
        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(input)? }] }]
        });

        let res = self
            .http
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()?;

        let status = res.status();
        if !status.is_success() {
            return Err(AppError::Narrative(format!(
                "service answered {}",
                status.as_u16()
            )));
        }

        let parsed: GenerateResponse = res.json()?;

        Ok(parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join(""))
    }
}
