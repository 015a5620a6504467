mod common;
use common::{advance, entry, expense};
use rfortnight::config::NarrativeConfig;
use rfortnight::core::period::{find_period, generate_periods};
use rfortnight::core::report::PeriodReport;
use rfortnight::errors::{AppError, AppResult};
use rfortnight::models::expense::ExpenseCategory;
use rfortnight::models::settings::AppSettings;
use rfortnight::narrative::gemini::build_prompt;
use rfortnight::narrative::{
    CONNECTION_ERROR_MESSAGE, EMPTY_RESPONSE_MESSAGE, GeminiNarrator, MISSING_KEY_MESSAGE,
    NarrativeInput, Narrator, narrative_report,
};

struct Fixed(&'static str);

impl Narrator for Fixed {
    fn generate(&self, _input: &NarrativeInput) -> AppResult<String> {
        Ok(self.0.to_string())
    }
}

struct Broken;

impl Narrator for Broken {
    fn generate(&self, _input: &NarrativeInput) -> AppResult<String> {
        Err(AppError::Narrative("service answered 503".into()))
    }
}

fn sample_input() -> NarrativeInput {
    let periods = generate_periods(2025, 2025);
    let period = find_period(&periods, "2025-1-1").expect("known period");
    let settings = AppSettings {
        user_name: "Ana Souza".into(),
        hourly_rate: 10.0,
        overtime_rate: 15.0,
        expense_fund: 100.0,
        ..AppSettings::defaults_for("u1")
    };

    let report = PeriodReport::build(
        period,
        &settings,
        &[
            entry("2025-01-02", 8.0, 8.0, 0.0, 80.0, false),
            entry("2025-01-04", 4.0, 0.0, 4.0, 60.0, true),
        ],
        &[expense("e1", "2025-01-03", 20.0, ExpenseCategory::Fuel)],
        &[advance("a1", "2025-01-05", 30.0)],
    );

    NarrativeInput::from(&report)
}

#[test]
fn test_input_carries_period_totals() {
    let input = sample_input();
    assert_eq!(input.period_label, "1st fortnight January 2025");
    assert_eq!(input.user_name, "Ana Souza");
    assert_eq!(input.entries.len(), 2);
    assert_eq!(input.gross_earnings, 140.0);
    assert_eq!(input.net_earnings, 110.0);
    assert_eq!(input.fund_balance, 80.0);
    assert_eq!(input.expenses[0].category, "Fuel");
}

#[test]
fn test_answer_is_returned_verbatim() {
    let input = sample_input();
    let text = narrative_report(Some(&Fixed("## Summary\nAll good.")), &input);
    assert_eq!(text, "## Summary\nAll good.");
}

#[test]
fn test_missing_narrator_gives_missing_key_message() {
    assert_eq!(narrative_report(None, &sample_input()), MISSING_KEY_MESSAGE);
}

#[test]
fn test_blank_answer_gives_fallback() {
    let text = narrative_report(Some(&Fixed("  \n ")), &sample_input());
    assert_eq!(text, EMPTY_RESPONSE_MESSAGE);
}

#[test]
fn test_service_failure_gives_connection_message() {
    let text = narrative_report(Some(&Broken), &sample_input());
    assert_eq!(text, CONNECTION_ERROR_MESSAGE);
}

#[test]
fn test_prompt_mentions_worker_period_and_amounts() {
    let prompt = build_prompt(&sample_input()).expect("prompt");
    assert!(prompt.contains("Ana Souza"));
    assert!(prompt.contains("1st fortnight January 2025"));
    assert!(prompt.contains("€ 140,00"));
    assert!(prompt.contains("€ 110,00"));
    assert!(prompt.contains("€ 80,00"));
    assert!(prompt.contains("2025-01-04"));
}

#[test]
fn test_unset_key_variable_means_no_narrator() {
    let cfg = NarrativeConfig {
        api_key_env: "RFORTNIGHT_TEST_KEY_THAT_IS_NEVER_SET".into(),
        ..NarrativeConfig::default()
    };
    let narrator = GeminiNarrator::from_config(&cfg).expect("no client error");
    assert!(narrator.is_none());
}
