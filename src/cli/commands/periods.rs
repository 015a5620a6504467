use crate::config::Config;
use crate::core::logic::Core;
use crate::core::period::current_period_index;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::date::today;
use crate::utils::format_date;
use crate::utils::table::{Column, Table};

/// Print the fortnight catalog; the current period is highlighted.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let periods = Core::periods(cfg);
    let current = current_period_index(&periods, today());

    header(format!("Periods {}-{}", cfg.first_year, cfg.last_year));

    let mut table = Table::new(vec![
        Column::left("Id"),
        Column::left("Label"),
        Column::left("From"),
        Column::left("To"),
    ]);

    for (i, p) in periods.iter().enumerate() {
        let marker = if i == current { "*" } else { "" };
        table.add_row(vec![
            format!("{}{}", p.id, marker),
            p.label.clone(),
            format_date(p.start_date),
            format_date(p.end_date),
        ]);
    }

    for (i, line) in table.render().lines().enumerate() {
        // two header lines precede the rows
        if i >= 2 && i - 2 == current {
            println!("{CYAN}{line}{RESET}");
        } else {
            println!("{line}");
        }
    }

    Ok(())
}
