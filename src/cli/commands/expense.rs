use crate::cli::commands::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::expense::ExpenseCategory;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::format_currency;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Expense {
        date,
        amount,
        category,
        desc,
        reference,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let cat = ExpenseCategory::from_code(category)
            .ok_or_else(|| AppError::InvalidCategory(category.to_string()))?;

        let mut session = Session::open(cfg)?;
        let owner = session.owner().to_string();
        let currency = session.store().load_settings(&owner)?.currency;

        let expense =
            AddLogic::add_expense(session.store(), &owner, d, *amount, cat, desc, reference.clone())?;

        success(format!(
            "{} expense of {} added for {}",
            expense.category.label(),
            format_currency(expense.amount, &currency),
            expense.date
        ));
        println!("   id: {}", expense.id);
    }

    Ok(())
}
