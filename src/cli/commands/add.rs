use crate::cli::commands::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::time_entry::TimeEntryDraft;
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::time::{parse_optional_time, parse_required_time};
use crate::utils::{format_currency, format_hours};

/// Record a work shift.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        lunch_out,
        lunch_in,
        dinner_out,
        dinner_in,
        end,
        desc,
        holiday,
        no_holiday,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let is_holiday = if *holiday {
            Some(true)
        } else if *no_holiday {
            Some(false)
        } else {
            None
        };

        let draft = TimeEntryDraft {
            date: d,
            start: parse_required_time("in", start)?,
            lunch_start: parse_required_time("lunch-out", lunch_out)?,
            lunch_end: parse_required_time("lunch-in", lunch_in)?,
            dinner_start: parse_optional_time(dinner_out.as_ref())?,
            dinner_end: parse_optional_time(dinner_in.as_ref())?,
            end: parse_required_time("out", end)?,
            description: desc.clone(),
            is_holiday,
        };

        let mut session = Session::open(cfg)?;
        let owner = session.owner().to_string();
        let settings = session.store().load_settings(&owner)?;

        let entry = AddLogic::add_time_entry(session.store(), &owner, &settings, &draft)?;

        if is_holiday.is_none() && entry.is_holiday {
            info("Weekend date: shift marked as holiday (use --no-holiday to override).");
        }

        success(format!(
            "Shift added for {} ({}): {} total, {} overtime, {}",
            entry.date,
            entry.schedule(),
            format_hours(entry.total_hours),
            format_hours(entry.overtime_hours),
            format_currency(entry.earnings, &settings.currency)
        ));
        println!("   id: {}", entry.id);
    }

    Ok(())
}
