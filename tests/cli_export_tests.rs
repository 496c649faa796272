use predicates::str::contains;
use std::fs;

mod common;
use common::{add_block, init_test_db, temp_out, zp};

fn seeded(name: &str) -> String {
    let db_path = init_test_db(name);
    add_block(&db_path, "Late", "2026-10-16", "15:00", "16:00");
    add_block(&db_path, "Early", "2026-10-16", "08:00", "09:00");
    add_block(&db_path, "Next month", "2026-11-02", "10:00", "11:00");
    db_path
}

#[test]
fn test_export_csv_filtered_by_month() {
    let db_path = seeded("export_csv_month");
    let out = temp_out("export_csv_month", "csv");

    zp().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2026-10",
    ])
    .assert()
    .success()
    .stdout(contains("2 event(s)"));

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 3, "header plus two rows: {content}");
    assert!(lines[1].contains("Early"));
    assert!(lines[2].contains("Late"));
    assert!(!content.contains("Next month"));
}

#[test]
fn test_export_json_all() {
    let db_path = seeded("export_json_all");
    let out = temp_out("export_json_all", "json");

    zp().args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let rows = v.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2]["date"], "2026-11-02");
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = seeded("export_relative");

    zp().args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = seeded("export_empty");
    let out = temp_out("export_empty", "csv");

    zp().args(["--db", &db_path, "export", "--file", &out, "--range", "2020"])
        .assert()
        .success()
        .stdout(contains("No events found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_existing_file_needs_force() {
    let db_path = seeded("export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").unwrap();

    zp().args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");

    zp().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("Early"));
}
