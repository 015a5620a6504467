use crate::cli::commands::{Session, resolve_period};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::report::{PeriodReport, filter_expenses};
use crate::errors::{AppError, AppResult};
use crate::models::expense::ExpenseCategory;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};
use crate::utils::{format_currency, format_date, format_hours};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        expenses,
        advances,
        category,
        reference,
    } = cmd
    {
        let period = resolve_period(cfg, period)?;
        let mut session = Session::open(cfg)?;
        let owner = session.owner().to_string();
        let report = Core::load_report(session.store(), &owner, &period)?;

        if *expenses {
            let cat = category
                .as_deref()
                .map(|c| {
                    ExpenseCategory::from_code(c)
                        .ok_or_else(|| AppError::InvalidCategory(c.to_string()))
                })
                .transpose()?;
            print_expenses(&report, cat, reference.as_deref());
        } else if *advances {
            print_advances(&report);
        } else {
            print_entries(&report);
        }
    }
    Ok(())
}

fn print_entries(report: &PeriodReport) {
    header(format!("Shifts - {}", report.period.label));

    if report.entries.is_empty() {
        info("No shifts in this period.");
        return;
    }

    let currency = &report.settings.currency;
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::left("Schedule"),
        Column::left("Description"),
        Column::left("Hol."),
        Column::right("Total"),
        Column::right("Overtime"),
        Column::right("Earnings"),
        Column::left("Id"),
    ]);

    for e in &report.entries {
        table.add_row(vec![
            format_date(e.date),
            e.schedule(),
            colorize_optional(&e.description),
            if e.is_holiday { "yes" } else { "no" }.to_string(),
            format_hours(e.total_hours),
            format_hours(e.overtime_hours),
            format_currency(e.earnings, currency),
            e.id.clone(),
        ]);
    }

    print!("{}", table.render());
}

fn print_expenses(report: &PeriodReport, category: Option<ExpenseCategory>, reference: Option<&str>) {
    header(format!("Expenses - {}", report.period.label));

    let rows = filter_expenses(&report.expenses, category, reference);
    if rows.is_empty() {
        info("No expenses match.");
        return;
    }

    let currency = &report.settings.currency;
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::left("Ref"),
        Column::left("Category"),
        Column::left("Description"),
        Column::right("Amount"),
        Column::left("Id"),
    ]);

    let mut total = 0.0;
    for e in &rows {
        total += e.amount;
        table.add_row(vec![
            format_date(e.date),
            colorize_optional(e.reference.as_deref().unwrap_or("-")),
            e.category.label().to_string(),
            colorize_optional(&e.description),
            format_currency(e.amount, currency),
            e.id.clone(),
        ]);
    }

    print!("{}", table.render());
    println!("\nTotal: {}", format_currency(total, currency));
}

fn print_advances(report: &PeriodReport) {
    header(format!("Advances - {}", report.period.label));

    if report.advances.is_empty() {
        info("No advances in this period.");
        return;
    }

    let currency = &report.settings.currency;
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::left("Description"),
        Column::right("Amount"),
        Column::left("Id"),
    ]);

    for a in &report.advances {
        table.add_row(vec![
            format_date(a.date),
            colorize_optional(a.description.as_deref().unwrap_or("-")),
            format_currency(a.amount, currency),
            a.id.clone(),
        ]);
    }

    print!("{}", table.render());
    println!(
        "\nTotal: {}",
        format_currency(report.summary.totals.total_advances, currency)
    );
}
