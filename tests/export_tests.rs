mod common;
use common::{init_db_with_data, rfn, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;

fn export(db_path: &str, format: &str, out: &str) -> assert_cmd::assert::Assert {
    rfn()
        .args([
            "--db", db_path, "--test", "export", "--format", format, "--file", out, "--period",
            "2025-9-2", "--force",
        ])
        .assert()
}

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_data(&db_path);

    export(&db_path, "csv", &out).success();

    let content = fs::read_to_string(&out).expect("csv written");
    let mut lines = content.lines();
    let header = lines.next().expect("header row");
    assert!(header.starts_with("Date,In,Lunch out,Lunch in"));
    assert!(header.contains("Earnings"));
    assert!(content.contains("16/09/2025"));
    assert!(content.contains("08:00"));
    assert!(content.contains("NAO"));
    assert!(content.contains("SIM"));
    assert_eq!(lines.count(), 2);
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path);

    export(&db_path, "json", &out).success();

    let content = fs::read_to_string(&out).expect("json written");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(v["period"]["id"], "2025-9-2");
    assert_eq!(v["entries"].as_array().map(|a| a.len()), Some(2));
    assert_eq!(v["expenses"][0]["reference"], "AG-7");
    assert_eq!(v["summary"]["totals"]["grand_total"], 140.5);
}

#[test]
fn test_export_xlsx() {
    let db_path = setup_test_db("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");
    init_db_with_data(&db_path);

    export(&db_path, "xlsx", &out).success();

    let bytes = fs::read(&out).expect("xlsx written");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_pdf() {
    let db_path = setup_test_db("export_pdf");
    let out = temp_out("export_pdf", "pdf");
    init_db_with_data(&db_path);

    export(&db_path, "pdf", &out).success();

    let bytes = fs::read(&out).expect("pdf written");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    export(&db_path, "csv", "relative_out.csv")
        .failure()
        .stderr(contains("must be absolute"));

    assert!(!std::path::Path::new("relative_out.csv").exists());
}

#[test]
fn test_export_empty_period_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_db_with_data(&db_path);

    rfn()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--period",
            "2025-2-1",
        ])
        .assert()
        .success()
        .stdout(contains("nothing exported"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_existing_file_needs_force() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "json");
    init_db_with_data(&db_path);
    fs::write(&out, "old").expect("seed file");

    // No answer on stdin: the prompt is declined
    rfn()
        .args([
            "--db", &db_path, "--test", "export", "--format", "json", "--file", &out, "--period",
            "2025-9-2",
        ])
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).expect("file kept"), "old");

    export(&db_path, "json", &out).success();
    assert!(fs::read_to_string(&out).expect("file replaced").contains("grand_total"));
}
