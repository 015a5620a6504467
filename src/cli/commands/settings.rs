use crate::cli::commands::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::SettingsLogic;
use crate::errors::AppResult;
use crate::models::settings::{AppSettings, SettingsPatch};
use crate::ui::messages::{header, info, success};
use crate::utils::{format_currency, format_hours};

fn print_settings(s: &AppSettings) {
    println!("  Name          : {}", s.user_name);
    println!("  Hourly rate   : {}", format_currency(s.hourly_rate, &s.currency));
    println!("  Overtime rate : {}", format_currency(s.overtime_rate, &s.currency));
    println!("  Daily limit   : {}", format_hours(s.daily_limit));
    println!("  Expense fund  : {}", format_currency(s.expense_fund, &s.currency));
    println!("  Currency      : {}", s.currency);
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        rate,
        overtime_rate,
        limit,
        fund,
        currency,
        name,
    } = cmd
    {
        let mut session = Session::open(cfg)?;
        let owner = session.owner().to_string();

        let patch = SettingsPatch {
            hourly_rate: *rate,
            overtime_rate: *overtime_rate,
            daily_limit: *limit,
            expense_fund: *fund,
            currency: currency.clone(),
            user_name: name.clone(),
        };

        if patch.is_empty() {
            let current = session.store().load_settings(&owner)?;
            header(format!("Settings of {}", session.user.username));
            print_settings(&current);
            return Ok(());
        }

        let update = SettingsLogic::apply(session.store(), &owner, &patch)?;
        success("Settings saved.");
        if let Some(n) = update.repriced {
            info(format!("{n} time entries re-priced with the new rates."));
        }
        print_settings(&update.settings);
    }

    Ok(())
}
