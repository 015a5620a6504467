use crate::cli::commands::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::{DeleteLogic, EntryKind};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        time,
        expense,
        advance,
        yes,
    } = cmd
    {
        let (kind, id) = match (time, expense, advance) {
            (Some(id), _, _) => (EntryKind::Time, id),
            (_, Some(id), _) => (EntryKind::Expense, id),
            (_, _, Some(id)) => (EntryKind::Advance, id),
            _ => {
                return Err(AppError::Validation(
                    "one of --time, --expense or --advance is required".into(),
                ));
            }
        };

        let prompt = format!("Delete {} {}? This action is irreversible.", kind.label(), id);
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut session = Session::open(cfg)?;
        let owner = session.owner().to_string();
        DeleteLogic::apply(session.store(), &owner, kind, id)?;

        success(format!("The {} {} has been deleted.", kind.label(), id));
    }

    Ok(())
}
