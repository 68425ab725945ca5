#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rbl() -> Command {
    cargo_bin_cmd!("rbilllog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbilllog.sqlite", name));
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

/// Initialize DB and add a small dataset useful for many tests:
/// two days in the week of 2026-02-09 and one in the week before.
pub fn init_db_with_data(db_path: &str) {
    rbl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rbl()
        .args([
            "--db",
            db_path,
            "add",
            "2026-02-09",
            "--item",
            "consult_a_90020=2",
            "--item",
            "consult_b_90035=3",
        ])
        .assert()
        .success();

    rbl()
        .args([
            "--db",
            db_path,
            "add",
            "2026-02-13",
            "--item",
            "care_plan_gpmp_721=1",
        ])
        .assert()
        .success();

    rbl()
        .args([
            "--db",
            db_path,
            "add",
            "2026-02-04",
            "-i",
            "procedure_ecg_11707=1",
        ])
        .assert()
        .success();
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
