mod common;
use common::{advance, d, entry, expense};
use rfortnight::core::period::{find_period, generate_periods};
use rfortnight::core::report::{PeriodReport, filter_expenses};
use rfortnight::core::summary::{category_series, compute_totals, daily_series, summarize};
use rfortnight::models::expense::ExpenseCategory;
use rfortnight::models::settings::AppSettings;

fn settings(fund: f64) -> AppSettings {
    AppSettings {
        expense_fund: fund,
        ..AppSettings::defaults_for("u1")
    }
}

#[test]
fn test_empty_input_gives_zero_totals_and_empty_series() {
    let s = summarize(&[], &[], &[], &settings(50.0));
    assert_eq!(s.totals.total_hours, 0.0);
    assert_eq!(s.totals.total_earnings, 0.0);
    assert_eq!(s.totals.total_fund, 50.0);
    assert_eq!(s.totals.fund_balance, 50.0);
    assert_eq!(s.totals.net_earnings, 0.0);
    assert!(s.daily.is_empty());
    assert!(s.categories.is_empty());
}

#[test]
fn test_negative_balances_are_reported() {
    let entries = vec![entry("2025-01-02", 2.0, 2.0, 0.0, 20.0, false)];
    let expenses = vec![expense("e1", "2025-01-02", 70.0, ExpenseCategory::Fuel)];
    let advances = vec![advance("a1", "2025-01-03", 50.0)];

    let t = compute_totals(&entries, &expenses, &advances, &settings(60.0));
    assert_eq!(t.fund_balance, -10.0);
    assert_eq!(t.net_earnings, -30.0);
    assert_eq!(t.gross_plus_expenses, 90.0);
    assert_eq!(t.grand_total, 40.0);
}

#[test]
fn test_daily_series_is_sparse_and_numerically_sorted() {
    let entries = vec![
        entry("2025-01-10", 8.0, 8.0, 0.0, 80.0, false),
        entry("2025-01-02", 8.0, 8.0, 0.0, 80.0, false),
    ];
    let expenses = vec![
        expense("e1", "2025-01-10", 5.0, ExpenseCategory::Lunch),
        expense("e2", "2025-01-09", 7.0, ExpenseCategory::Dinner),
        expense("e3", "2025-01-10", 3.0, ExpenseCategory::Misc),
    ];

    let daily = daily_series(&entries, &expenses);
    let days: Vec<u32> = daily.iter().map(|p| p.day).collect();
    assert_eq!(days, vec![2, 9, 10]);

    assert_eq!(daily[0].earnings, 80.0);
    assert_eq!(daily[0].expenses, 0.0);
    assert_eq!(daily[1].earnings, 0.0);
    assert_eq!(daily[1].expenses, 7.0);
    assert_eq!(daily[2].earnings, 80.0);
    assert_eq!(daily[2].expenses, 8.0);
}

#[test]
fn test_category_series_descending() {
    let expenses = vec![
        expense("e1", "2025-01-02", 5.0, ExpenseCategory::Lunch),
        expense("e2", "2025-01-03", 30.0, ExpenseCategory::Fuel),
        expense("e3", "2025-01-04", 12.0, ExpenseCategory::Lunch),
        expense("e4", "2025-01-05", 2.0, ExpenseCategory::Breakfast),
    ];

    let cats = category_series(&expenses);
    let order: Vec<_> = cats.iter().map(|c| (c.category, c.total)).collect();
    assert_eq!(
        order,
        vec![
            (ExpenseCategory::Fuel, 30.0),
            (ExpenseCategory::Lunch, 17.0),
            (ExpenseCategory::Breakfast, 2.0),
        ]
    );
}

#[test]
fn test_series_reconcile_with_totals() {
    let entries = vec![
        entry("2025-01-02", 9.0, 8.0, 1.0, 95.0, false),
        entry("2025-01-04", 4.0, 0.0, 4.0, 60.0, true),
        entry("2025-01-07", 8.5, 8.0, 0.5, 87.5, false),
    ];
    let expenses = vec![
        expense("e1", "2025-01-02", 12.4, ExpenseCategory::Lunch),
        expense("e2", "2025-01-04", 40.0, ExpenseCategory::Fuel),
        expense("e3", "2025-01-07", 3.6, ExpenseCategory::Lunch),
    ];

    let s = summarize(&entries, &expenses, &[], &settings(100.0));

    let daily_earnings: f64 = s.daily.iter().map(|p| p.earnings).sum();
    let daily_expenses: f64 = s.daily.iter().map(|p| p.expenses).sum();
    let category_total: f64 = s.categories.iter().map(|c| c.total).sum();

    assert!((daily_earnings - s.totals.total_earnings).abs() < 1e-9);
    assert!((daily_expenses - s.totals.total_expenses).abs() < 1e-9);
    assert!((category_total - s.totals.total_expenses).abs() < 1e-9);
    assert_eq!(s.totals.total_overtime, 5.5);
    assert_eq!(s.totals.total_regular, 16.0);
}

#[test]
fn test_report_filters_and_sorts_by_period() {
    let periods = generate_periods(2025, 2025);
    let p = find_period(&periods, "2025-1-1").expect("period");

    let entries = vec![
        entry("2025-01-09", 8.0, 8.0, 0.0, 80.0, false),
        entry("2025-01-20", 8.0, 8.0, 0.0, 80.0, false),
        entry("2025-01-03", 8.0, 8.0, 0.0, 80.0, false),
    ];
    let expenses = vec![expense("e1", "2025-01-16", 9.0, ExpenseCategory::Misc)];
    let advances = vec![advance("a1", "2025-01-15", 10.0)];

    let report = PeriodReport::build(p, &settings(0.0), &entries, &expenses, &advances);

    let dates: Vec<_> = report.entries.iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![d("2025-01-03"), d("2025-01-09")]);
    assert!(report.expenses.is_empty());
    assert_eq!(report.advances.len(), 1);
    assert_eq!(report.summary.totals.total_earnings, 160.0);
    assert_eq!(report.summary.totals.net_earnings, 150.0);
    assert!(!report.is_empty());
}

#[test]
fn test_filter_expenses_by_category_and_reference() {
    let mut with_ref = expense("e1", "2025-01-02", 5.0, ExpenseCategory::Lunch);
    with_ref.reference = Some("AG-1234".to_string());
    let other = expense("e2", "2025-01-03", 8.0, ExpenseCategory::Lunch);
    let fuel = expense("e3", "2025-01-03", 50.0, ExpenseCategory::Fuel);
    let all = vec![with_ref, other, fuel];

    let lunch = filter_expenses(&all, Some(ExpenseCategory::Lunch), None);
    assert_eq!(lunch.len(), 2);

    let by_ref = filter_expenses(&all, None, Some("ag-12"));
    assert_eq!(by_ref.len(), 1);
    assert_eq!(by_ref[0].id, "e1");

    let none = filter_expenses(&all, Some(ExpenseCategory::Fuel), Some("AG"));
    assert!(none.is_empty());

    assert_eq!(filter_expenses(&all, None, None).len(), 3);
}
