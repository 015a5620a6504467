use crate::cli::commands::{Session, resolve_period};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::report::PeriodReport;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_balance};
use crate::utils::table::{Column, Table};
use crate::utils::{format_currency, format_hours};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { period } = cmd {
        let period = resolve_period(cfg, period)?;
        let mut session = Session::open(cfg)?;
        let owner = session.owner().to_string();
        let report = Core::load_report(session.store(), &owner, &period)?;

        print_summary(&report);
    }
    Ok(())
}

pub fn print_summary(report: &PeriodReport) {
    let t = &report.summary.totals;
    let cur = report.settings.currency.as_str();
    let money = |v: f64| format_currency(v, cur);

    header(format!(
        "{} - {}",
        report.settings.user_name, report.period.label
    ));

    println!("  Hours           : {}", format_hours(t.total_hours));
    println!("    regular       : {}", format_hours(t.total_regular));
    println!("    overtime      : {}", format_hours(t.total_overtime));
    println!("  Gross earnings  : {}", money(t.total_earnings));
    println!("  Advances        : {}", money(t.total_advances));
    println!(
        "  Net earnings    : {}{}{}",
        color_for_balance(t.net_earnings),
        money(t.net_earnings),
        RESET
    );
    println!();
    println!("  Expense fund    : {}", money(t.total_fund));
    println!("  Expenses        : {}", money(t.total_expenses));
    println!(
        "  Fund balance    : {}{}{}",
        color_for_balance(t.fund_balance),
        money(t.fund_balance),
        RESET
    );
    println!();
    println!("  Gross + expenses: {}", money(t.gross_plus_expenses));
    println!("  Grand total     : {}", money(t.grand_total));
    println!();

    if report.summary.daily.is_empty() {
        info("No activity in this period.");
        return;
    }

    let mut daily = Table::new(vec![
        Column::right("Day"),
        Column::right("Earnings"),
        Column::right("Expenses"),
    ]);
    for d in &report.summary.daily {
        daily.add_row(vec![d.day.to_string(), money(d.earnings), money(d.expenses)]);
    }
    print!("{}", daily.render());

    if !report.summary.categories.is_empty() {
        println!();
        let mut cats = Table::new(vec![Column::left("Category"), Column::right("Total")]);
        for c in &report.summary.categories {
            cats.add_row(vec![c.category.label().to_string(), money(c.total)]);
        }
        print!("{}", cats.render());
    }
}
