use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut store = open_store(cfg)?;
        let rows = store.load_log()?;

        header("Internal log");
        if rows.is_empty() {
            info("The log is empty.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("Date"),
            Column::left("Operation"),
            Column::left("Message"),
        ]);

        for r in rows {
            let date = chrono::DateTime::parse_from_rfc3339(&r.date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(r.date);

            let op_target = if r.target.is_empty() {
                r.operation
            } else {
                format!("{} ({})", r.operation, r.target)
            };

            table.add_row(vec![date, op_target, r.message]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
