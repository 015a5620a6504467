use crate::cli::commands::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::format_currency;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Advance { date, amount, desc } = cmd {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let mut session = Session::open(cfg)?;
        let owner = session.owner().to_string();
        let currency = session.store().load_settings(&owner)?.currency;

        let advance = AddLogic::add_advance(session.store(), &owner, d, *amount, desc.clone())?;

        success(format!(
            "Advance of {} added for {}",
            format_currency(advance.amount, &currency),
            advance.date
        ));
        println!("   id: {}", advance.id);
    }

    Ok(())
}
