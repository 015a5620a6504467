mod common;
use common::{d, entry, t};
use rfortnight::core::add::AddLogic;
use rfortnight::core::calculator::{
    hours_breakdown, net_duration, price, price_shift, split_hours,
};
use rfortnight::core::rates::reapply_rates;
use rfortnight::models::settings::AppSettings;
use rfortnight::models::time_entry::TimeEntryDraft;

#[test]
fn test_net_duration_without_dinner() {
    let h = net_duration(t("09:00"), t("12:00"), t("13:00"), None, None, t("18:00"));
    assert_eq!(h, 8.0);

    let h = net_duration(t("08:15"), t("12:00"), t("12:30"), None, None, t("17:00"));
    assert!((h - 8.25).abs() < 1e-9);
}

#[test]
fn test_net_duration_with_dinner_block() {
    let h = net_duration(
        t("09:00"),
        t("12:00"),
        t("13:00"),
        Some(t("20:00")),
        Some(t("21:00")),
        t("22:00"),
    );
    assert_eq!(h, 11.0);
}

#[test]
fn test_net_duration_half_dinner_is_ignored() {
    let h = net_duration(t("09:00"), t("12:00"), t("13:00"), Some(t("20:00")), None, t("18:00"));
    assert_eq!(h, 8.0);
}

#[test]
fn test_net_duration_invalid_order_is_zero() {
    // lunch end before lunch start
    assert_eq!(
        net_duration(t("09:00"), t("12:00"), t("11:00"), None, None, t("18:00")),
        0.0
    );
    // lunch before clock-in
    assert_eq!(
        net_duration(t("09:00"), t("08:00"), t("13:00"), None, None, t("18:00")),
        0.0
    );
    // clock-out before lunch end
    assert_eq!(
        net_duration(t("09:00"), t("12:00"), t("13:00"), None, None, t("12:30")),
        0.0
    );
    // dinner before lunch end
    assert_eq!(
        net_duration(
            t("09:00"),
            t("12:00"),
            t("13:00"),
            Some(t("12:30")),
            Some(t("14:00")),
            t("22:00")
        ),
        0.0
    );
    // clock-out before dinner end
    assert_eq!(
        net_duration(
            t("09:00"),
            t("12:00"),
            t("13:00"),
            Some(t("20:00")),
            Some(t("21:00")),
            t("20:30")
        ),
        0.0
    );
}

#[test]
fn test_net_duration_equal_boundaries_are_valid() {
    // zero-length lunch and a shift ending at lunch end are still ordered
    let h = net_duration(t("09:00"), t("12:00"), t("12:00"), None, None, t("17:00"));
    assert_eq!(h, 8.0);
}

#[test]
fn test_breakdown_splits_at_limit() {
    let s = hours_breakdown(10.0, 8.0);
    assert_eq!((s.regular_hours, s.overtime_hours), (8.0, 2.0));

    let s = hours_breakdown(6.0, 8.0);
    assert_eq!((s.regular_hours, s.overtime_hours), (6.0, 0.0));

    for total in [0.0, 3.5, 8.0, 9.25, 14.0] {
        let s = hours_breakdown(total, 8.0);
        assert!((s.regular_hours + s.overtime_hours - total).abs() < 1e-9);
    }
}

#[test]
fn test_holiday_is_all_overtime() {
    for limit in [4.0, 8.0, 12.0] {
        let s = split_hours(6.0, true, limit);
        assert_eq!(s.regular_hours, 0.0);
        assert_eq!(s.overtime_hours, 6.0);
    }
}

#[test]
fn test_price() {
    let s = split_hours(10.0, false, 8.0);
    assert_eq!(price(s, 10.0, 15.0), 110.0);
}

#[test]
fn test_reapply_rates_regular_and_holiday() {
    let entries = vec![
        entry("2025-01-02", 10.0, 8.0, 2.0, 0.0, false),
        entry("2025-01-04", 6.0, 0.0, 6.0, 0.0, true),
    ];

    let updated = reapply_rates(&entries, 10.0, 15.0, 8.0);

    assert_eq!(updated[0].earnings, 110.0);
    assert_eq!(updated[0].regular_hours, 8.0);
    assert_eq!(updated[0].overtime_hours, 2.0);

    assert_eq!(updated[1].regular_hours, 0.0);
    assert_eq!(updated[1].overtime_hours, 6.0);
    assert_eq!(updated[1].earnings, 90.0);

    // identity fields untouched
    assert_eq!(updated[0].id, entries[0].id);
    assert_eq!(updated[1].total_hours, 6.0);
}

#[test]
fn test_reapply_rates_uses_new_limit() {
    let entries = vec![entry("2025-01-02", 10.0, 8.0, 2.0, 110.0, false)];
    let updated = reapply_rates(&entries, 10.0, 15.0, 6.0);
    assert_eq!(updated[0].regular_hours, 6.0);
    assert_eq!(updated[0].overtime_hours, 4.0);
    assert_eq!(updated[0].earnings, 120.0);
}

#[test]
fn test_price_shift_prices_rounded_hours() {
    // 8h20m
    let p = price_shift(25.0 / 3.0, false, 8.0, 10.0, 15.0);
    assert_eq!(p.total_hours, 8.33);
    assert_eq!(p.regular_hours, 8.0);
    assert_eq!(p.overtime_hours, 0.33);
    assert_eq!(p.earnings, 84.95);
}

#[test]
fn test_reapply_with_same_rates_keeps_created_earnings() {
    let settings = AppSettings {
        hourly_rate: 10.0,
        overtime_rate: 15.0,
        ..AppSettings::defaults_for("u1")
    };
    let draft = TimeEntryDraft {
        date: d("2025-09-16"),
        start: t("09:00"),
        lunch_start: t("12:00"),
        lunch_end: t("13:00"),
        dinner_start: None,
        dinner_end: None,
        end: t("18:20"),
        description: String::new(),
        is_holiday: None,
    };

    let created = AddLogic::build_time_entry(&draft, "u1", &settings, &[]).expect("valid shift");
    assert_eq!(created.earnings, 84.95);
    assert_eq!(
        created.earnings,
        ((created.regular_hours * 10.0 + created.overtime_hours * 15.0) * 100.0).round() / 100.0
    );

    let repriced = reapply_rates(std::slice::from_ref(&created), 10.0, 15.0, 8.0);
    assert_eq!(repriced[0], created);
}
