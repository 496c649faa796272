#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn zp() -> Command {
    cargo_bin_cmd!("zenplan")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_zenplan.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `init` a fresh test database and return its path.
pub fn init_test_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    zp().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

/// Pull the full id out of an "... (id: <uuid>)" success line.
pub fn id_from_output(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    let start = text.find("(id: ").expect("id in output") + "(id: ".len();
    let rest = &text[start..];
    let end = rest.find(')').expect("closing paren");
    rest[..end].to_string()
}

/// Add a block through the CLI and return its id.
pub fn add_block(db_path: &str, title: &str, date: &str, start: &str, end: &str) -> String {
    let out = zp()
        .args([
            "--db", db_path, "add", "--title", title, "--date", date, "--start", start, "--end",
            end,
        ])
        .output()
        .expect("run add");
    assert!(out.status.success(), "add failed: {:?}", out);
    id_from_output(&out.stdout)
}
