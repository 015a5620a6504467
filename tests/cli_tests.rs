mod common;
use common::{init_db_with_data, printed_id, rfn, setup_test_db, setup_test_local};
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    rfn()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("rFortnight initialization completed!"))
        .stdout(contains("Default administrator 'ADM' created."));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list_shifts() {
    let db_path = setup_test_db("add_list");
    init_db_with_data(&db_path);

    rfn()
        .args(["--db", &db_path, "--test", "list", "--period", "2025-9-2"])
        .assert()
        .success()
        .stdout(contains("2nd fortnight September 2025"))
        .stdout(contains("16/09/2025"))
        .stdout(contains("20/09/2025"))
        .stdout(contains("€ 95,00"))
        .stdout(contains("€ 60,00"));
}

#[test]
fn test_add_rejects_second_shift_on_same_date() {
    let db_path = setup_test_db("add_duplicate");
    init_db_with_data(&db_path);

    rfn()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "2025-09-16",
            "--in",
            "09:00",
            "--lunch-out",
            "12:00",
            "--lunch-in",
            "13:00",
            "--out",
            "17:00",
        ])
        .assert()
        .failure()
        .stderr(contains("already exists for 2025-09-16"));
}

#[test]
fn test_add_rejects_unordered_times() {
    let db_path = setup_test_db("add_unordered");
    rfn()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rfn()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "2025-09-15",
            "--in",
            "13:00",
            "--lunch-out",
            "12:00",
            "--lunch-in",
            "14:00",
            "--out",
            "18:00",
        ])
        .assert()
        .failure()
        .stderr(contains("invalid times"));
}

#[test]
fn test_add_weekend_is_holiday_unless_overridden() {
    let db_path = setup_test_db("add_weekend");
    rfn()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rfn()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "2025-09-21",
            "--in",
            "09:00",
            "--lunch-out",
            "12:00",
            "--lunch-in",
            "13:00",
            "--out",
            "15:00",
        ])
        .assert()
        .success()
        .stdout(contains("Weekend date: shift marked as holiday"))
        .stdout(contains("5,00h overtime"));

    rfn()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "2025-09-27",
            "--in",
            "09:00",
            "--lunch-out",
            "12:00",
            "--lunch-in",
            "13:00",
            "--out",
            "15:00",
            "--no-holiday",
        ])
        .assert()
        .success()
        .stdout(contains("Weekend date").not())
        .stdout(contains("0,00h overtime"));
}

#[test]
fn test_summary_reconciles_pay_and_fund() {
    let db_path = setup_test_db("summary");
    init_db_with_data(&db_path);

    // 95 + 60 earned, 40 advanced, 25.50 spent from a fund of 100
    rfn()
        .args(["--db", &db_path, "--test", "summary", "--period", "2025-9-2"])
        .assert()
        .success()
        .stdout(contains("€ 155,00"))
        .stdout(contains("€ 115,00"))
        .stdout(contains("€ 74,50"))
        .stdout(contains("Lunch"));
}

#[test]
fn test_summary_unknown_period_fails() {
    let db_path = setup_test_db("summary_unknown");
    init_db_with_data(&db_path);

    rfn()
        .args(["--db", &db_path, "--test", "summary", "--period", "1999-1-1"])
        .assert()
        .failure()
        .stderr(contains("Unknown period: 1999-1-1"));
}

#[test]
fn test_settings_change_reprices_entries() {
    let db_path = setup_test_db("settings_reprice");
    init_db_with_data(&db_path);

    rfn()
        .args(["--db", &db_path, "--test", "settings", "--rate", "20"])
        .assert()
        .success()
        .stdout(contains("2 time entries re-priced"));

    // 8h * 20 + 1h * 15
    rfn()
        .args(["--db", &db_path, "--test", "list", "--period", "2025-9-2"])
        .assert()
        .success()
        .stdout(contains("€ 175,00"));
}

#[test]
fn test_settings_show_and_validate() {
    let db_path = setup_test_db("settings_show");
    init_db_with_data(&db_path);

    rfn()
        .args(["--db", &db_path, "--test", "settings"])
        .assert()
        .success()
        .stdout(contains("Settings of ADM"))
        .stdout(contains("€ 100,00"));

    rfn()
        .args(["--db", &db_path, "--test", "settings", "--currency", "EURO"])
        .assert()
        .failure()
        .stderr(contains("Validation failed"));
}

#[test]
fn test_expense_rejects_bad_category_and_amount() {
    let db_path = setup_test_db("expense_invalid");
    rfn()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rfn()
        .args([
            "--db",
            &db_path,
            "--test",
            "expense",
            "2025-09-17",
            "10",
            "--category",
            "pizza",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid expense category: pizza"));

    rfn()
        .args(["--db", &db_path, "--test", "expense", "2025-09-17", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));
}

#[test]
fn test_list_expenses_filters_by_reference_and_category() {
    let db_path = setup_test_db("list_expenses");
    init_db_with_data(&db_path);

    rfn()
        .args([
            "--db",
            &db_path,
            "--test",
            "expense",
            "2025-09-19",
            "12",
            "--category",
            "fuel",
        ])
        .assert()
        .success();

    rfn()
        .args([
            "--db", &db_path, "--test", "list", "--period", "2025-9-2", "--expenses", "--ref",
            "ag",
        ])
        .assert()
        .success()
        .stdout(contains("AG-7"))
        .stdout(contains("Fuel").not());

    rfn()
        .args([
            "--db",
            &db_path,
            "--test",
            "list",
            "--period",
            "2025-9-2",
            "--expenses",
            "--category",
            "fuel",
        ])
        .assert()
        .success()
        .stdout(contains("Fuel"))
        .stdout(contains("AG-7").not());
}

#[test]
fn test_list_advances() {
    let db_path = setup_test_db("list_advances");
    init_db_with_data(&db_path);

    rfn()
        .args([
            "--db", &db_path, "--test", "list", "--period", "2025-9-2", "--advances",
        ])
        .assert()
        .success()
        .stdout(contains("Cash"))
        .stdout(contains("€ 40,00"));
}

#[test]
fn test_del_expense_by_id() {
    let db_path = setup_test_db("del_expense");
    rfn()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let out = rfn()
        .args(["--db", &db_path, "--test", "expense", "2025-09-17", "8.40"])
        .output()
        .expect("run expense");
    assert!(out.status.success());
    let id = printed_id(&out.stdout);

    rfn()
        .args(["--db", &db_path, "--test", "del", "--expense", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    rfn()
        .args(["--db", &db_path, "--test", "del", "--expense", &id, "--yes"])
        .assert()
        .failure()
        .stderr(contains("No expense found"));
}

#[test]
fn test_del_only_touches_own_entries() {
    let db_path = setup_test_db("del_owner");
    rfn()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    rfn()
        .args(["--db", &db_path, "--test", "user", "add", "bob"])
        .assert()
        .success();

    let out = rfn()
        .args(["--db", &db_path, "--test", "advance", "2025-09-18", "15"])
        .output()
        .expect("run advance");
    let id = printed_id(&out.stdout);

    rfn()
        .args([
            "--db", &db_path, "--test", "--user", "bob", "del", "--advance", &id, "--yes",
        ])
        .assert()
        .failure()
        .stderr(contains("No advance found"));
}

#[test]
fn test_user_management_rules() {
    let db_path = setup_test_db("users");
    rfn()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rfn()
        .args(["--db", &db_path, "--test", "user", "add", "bob", "--name", "Bob"])
        .assert()
        .success()
        .stdout(contains("User 'bob' created (user)."));

    rfn()
        .args(["--db", &db_path, "--test", "user", "add", "BOB"])
        .assert()
        .failure()
        .stderr(contains("Username already exists"));

    rfn()
        .args(["--db", &db_path, "--test", "--user", "bob", "user", "add", "carl"])
        .assert()
        .failure()
        .stderr(contains("not allowed"));

    rfn()
        .args(["--db", &db_path, "--test", "user", "del", "ADM"])
        .assert()
        .failure()
        .stderr(contains("cannot be deleted"));

    rfn()
        .args(["--db", &db_path, "--test", "user", "list"])
        .assert()
        .success()
        .stdout(contains("ADM"))
        .stdout(contains("bob"));

    rfn()
        .args(["--db", &db_path, "--test", "user", "del", "bob"])
        .assert()
        .success();

    rfn()
        .args(["--db", &db_path, "--test", "--user", "bob", "summary"])
        .assert()
        .failure()
        .stderr(contains("Unknown or inactive user: bob"));
}

#[test]
fn test_users_see_only_their_own_data() {
    let db_path = setup_test_db("users_isolated");
    init_db_with_data(&db_path);

    rfn()
        .args(["--db", &db_path, "--test", "user", "add", "bob"])
        .assert()
        .success();

    rfn()
        .args([
            "--db", &db_path, "--test", "--user", "bob", "list", "--period", "2025-9-2",
        ])
        .assert()
        .success()
        .stdout(contains("No shifts in this period."));
}

#[test]
fn test_periods_lists_catalog() {
    let db_path = setup_test_db("periods");

    rfn()
        .args(["--db", &db_path, "--test", "periods"])
        .assert()
        .success()
        .stdout(contains("2025-1-1"))
        .stdout(contains("2nd fortnight September 2025"))
        .stdout(contains("2026-12-2"));
}

#[test]
fn test_log_print_shows_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    rfn()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("settings"))
        .stdout(contains("add"));
}

#[test]
fn test_local_backend_round_trip() {
    let store_path = setup_test_local("local_backend");

    rfn()
        .args(["--local", &store_path, "--test", "init"])
        .assert()
        .success();

    add_local_shift(&store_path);

    rfn()
        .args(["--local", &store_path, "--test", "list", "--period", "2025-9-2"])
        .assert()
        .success()
        .stdout(contains("16/09/2025"));

    let raw = std::fs::read_to_string(&store_path).expect("local store written");
    assert!(raw.contains("2025-09-16"));
}

fn add_local_shift(store_path: &str) {
    rfn()
        .args([
            "--local",
            store_path,
            "--test",
            "add",
            "2025-09-16",
            "--in",
            "08:00",
            "--lunch-out",
            "12:00",
            "--lunch-in",
            "13:00",
            "--out",
            "17:00",
        ])
        .assert()
        .success();
}

#[test]
fn test_report_without_api_key() {
    let db_path = setup_test_db("report_no_key");
    init_db_with_data(&db_path);

    rfn()
        .env_remove("GEMINI_API_KEY")
        .args(["--db", &db_path, "--test", "report", "--period", "2025-9-2"])
        .assert()
        .success()
        .stdout(contains("API key not configured"));
}

#[test]
fn test_dinner_break_is_subtracted() {
    let db_path = setup_test_db("dinner_break");
    rfn()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // 3 + 5 + 3 = 11h on a Wednesday
    rfn()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "2025-09-24",
            "--in",
            "09:00",
            "--lunch-out",
            "12:00",
            "--lunch-in",
            "13:00",
            "--dinner-out",
            "18:00",
            "--dinner-in",
            "19:00",
            "--out",
            "22:00",
        ])
        .assert()
        .success()
        .stdout(contains("11,00h total"))
        .stdout(contains("3,00h overtime"));
}
