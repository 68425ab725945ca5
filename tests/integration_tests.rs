use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rbilllog::config::Config;
use rbilllog::db::pool::DbPool;
use rbilllog::db::repository::DayRepository;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{init_db_with_data, rbl, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    rbl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());

    // second run leaves an existing schema alone
    rbl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("already up to date"));
}

#[test]
fn test_add_prints_totals() {
    let db_path = setup_test_db("add_prints_totals");

    rbl()
        .args([
            "--db",
            &db_path,
            "add",
            "2026-02-11",
            "--item",
            "consult_a_90020=2",
        ])
        .assert()
        .success()
        .stdout(contains("Saved 2026-02-11."))
        .stdout(contains("Total minutes      : 4"))
        .stdout(contains("Total hours        : 1"))
        .stdout(contains("$57.30"))
        .stdout(contains("$40.10"))
        .stdout(contains("$2.51"))
        .stdout(contains("$59.81"));
}

#[test]
fn test_add_sums_repeated_keys() {
    let db_path = setup_test_db("add_repeated_keys");

    rbl()
        .args([
            "--db",
            &db_path,
            "add",
            "2026-02-11",
            "-i",
            "consult_a_90020=1",
            "-i",
            "consult_a_90020=1",
        ])
        .assert()
        .success()
        .stdout(contains("Total minutes      : 4"));
}

#[test]
fn test_add_without_items_saves_zero_day() {
    let db_path = setup_test_db("add_zero_day");

    rbl()
        .args(["--db", &db_path, "add", "2026-02-11"])
        .assert()
        .success()
        .stdout(contains("saving a zero day"))
        .stdout(contains("Total hours        : 0"));
}

#[test]
fn test_add_duplicate_date_is_refused() {
    let db_path = setup_test_db("add_duplicate");
    init_db_with_data(&db_path);

    rbl()
        .args([
            "--db",
            &db_path,
            "add",
            "2026-02-09",
            "--item",
            "consult_e_90054=1",
        ])
        .assert()
        .failure()
        .stderr(contains("already exists for 2026-02-09"));

    let pool = DbPool::new(&db_path).expect("open db");
    let days = pool.list_days().expect("list days");
    assert_eq!(days.len(), 3);

    let day = pool
        .get_day_by_date(chrono::NaiveDate::from_ymd_opt(2026, 2, 9).unwrap())
        .expect("query")
        .expect("day exists");
    let items = pool.list_line_items(day.id).expect("items");
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i.item_key != "consult_e_90054"));
}

#[test]
fn test_add_rejects_invalid_input() {
    let db_path = setup_test_db("add_invalid");

    rbl()
        .args(["--db", &db_path, "add", "2026-02-30"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    rbl()
        .args(["--db", &db_path, "add", "11/02/2026"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    rbl()
        .args(["--db", &db_path, "add", "2026-02-11", "-i", "consult_z_99999=1"])
        .assert()
        .failure()
        .stderr(contains("Unknown item key: consult_z_99999"));

    rbl()
        .args(["--db", &db_path, "add", "2026-02-11", "-i", "consult_a_90020=-1"])
        .assert()
        .failure()
        .stderr(contains("Invalid count"));

    rbl()
        .args(["--db", &db_path, "add", "2026-02-11", "-i", "consult_a_90020"])
        .assert()
        .failure()
        .stderr(contains("Invalid count"));

    rbl()
        .args(["--db", &db_path, "add", "2026-02-11", "-i", "consult_a_90020=+3"])
        .assert()
        .failure()
        .stderr(contains("Invalid count"));

    // nothing was stored by the failed attempts
    let pool = DbPool::new(&db_path).expect("open db");
    assert!(pool.list_days().expect("list days").is_empty());
}

#[test]
fn test_show_day_groups_by_category() {
    let db_path = setup_test_db("show_day");
    init_db_with_data(&db_path);

    rbl()
        .args(["--db", &db_path, "show", "2026-02-09"])
        .assert()
        .success()
        .stdout(contains("2026-02-09"))
        .stdout(contains("Consultations"))
        .stdout(contains("Level A consult (RACF) 90020"))
        .stdout(contains("Level B consult (RACF) 90035"))
        .stdout(contains("157.50"));
}

#[test]
fn test_show_missing_day_fails() {
    let db_path = setup_test_db("show_missing");
    init_db_with_data(&db_path);

    rbl()
        .args(["--db", &db_path, "show", "2026-03-01"])
        .assert()
        .failure()
        .stderr(contains("No record found for 2026-03-01"));
}

#[test]
fn test_list_groups_days_by_work_week() {
    let db_path = setup_test_db("list_weeks");
    init_db_with_data(&db_path);

    let output = rbl()
        .args(["--db", &db_path, "list", "--period", "2026-02"])
        .output()
        .expect("run list");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);

    let recent = stdout
        .find("2026-02-09 to 2026-02-15")
        .expect("week of the 9th listed");
    let older = stdout
        .find("2026-02-02 to 2026-02-08")
        .expect("week of the 2nd listed");
    assert!(recent < older, "most recent week comes first");

    let d9 = stdout.find("2026-02-09 Mon").expect("day row");
    let d13 = stdout.find("2026-02-13 Fri").expect("day row");
    assert!(d9 < d13, "days ascend within a week");

    assert!(stdout.contains("Week total"));
    assert!(stdout.contains("3 day(s) in 2 week(s)"));
}

#[test]
fn test_list_empty_period() {
    let db_path = setup_test_db("list_empty");
    init_db_with_data(&db_path);

    rbl()
        .args(["--db", &db_path, "list", "--period", "2025"])
        .assert()
        .success()
        .stdout(contains("No records found"));
}

#[test]
fn test_list_invalid_period() {
    let db_path = setup_test_db("list_invalid");

    rbl()
        .args(["--db", &db_path, "list", "--period", "2026-02:2026"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_del_removes_day_and_items() {
    let db_path = setup_test_db("del_day");
    init_db_with_data(&db_path);

    let day_id = {
        let pool = DbPool::new(&db_path).expect("open db");
        pool.get_day_by_date(chrono::NaiveDate::from_ymd_opt(2026, 2, 9).unwrap())
            .expect("query")
            .expect("day exists")
            .id
    };

    rbl()
        .args(["--db", &db_path, "del", "2026-02-09", "--force"])
        .assert()
        .success()
        .stdout(contains("The record for 2026-02-09 has been deleted."));

    let pool = DbPool::new(&db_path).expect("open db");
    assert_eq!(pool.list_days().expect("list").len(), 2);
    assert!(pool.list_line_items(day_id).expect("items").is_empty());

    rbl()
        .args(["--db", &db_path, "del", "2026-02-09", "--force"])
        .assert()
        .failure()
        .stderr(contains("No record found for 2026-02-09"));
}

#[test]
fn test_del_without_confirmation_keeps_day() {
    let db_path = setup_test_db("del_cancelled");
    init_db_with_data(&db_path);

    rbl()
        .args(["--db", &db_path, "del", "2026-02-09"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    let pool = DbPool::new(&db_path).expect("open db");
    assert_eq!(pool.list_days().expect("list").len(), 3);
}

#[test]
fn test_budget_set_and_show() {
    let db_path = setup_test_db("budget_set_show");
    init_db_with_data(&db_path);

    rbl()
        .args(["--db", &db_path, "budget", "set", "2026-02", "400"])
        .assert()
        .success()
        .stdout(contains("Budget for 2026-02 set to $400.00."));

    // replaced, not duplicated
    rbl()
        .args(["--db", &db_path, "budget", "set", "2026-02", "500.5"])
        .assert()
        .success();

    rbl()
        .args(["--db", &db_path, "budget", "show"])
        .assert()
        .success()
        .stdout(contains("2026-02"))
        .stdout(contains("500.50"));

    rbl()
        .args(["--db", &db_path, "budget", "show", "2026-03"])
        .assert()
        .success()
        .stdout(contains("No budgets set."));
}

#[test]
fn test_budget_rejects_invalid_input() {
    let db_path = setup_test_db("budget_invalid");

    rbl()
        .args(["--db", &db_path, "budget", "set", "2026-02", "-10"])
        .assert()
        .failure()
        .stderr(contains("Invalid budget amount"));

    rbl()
        .args(["--db", &db_path, "budget", "set", "2026-02", "lots"])
        .assert()
        .failure()
        .stderr(contains("Invalid budget amount"));

    rbl()
        .args(["--db", &db_path, "budget", "set", "2026-13", "100"])
        .assert()
        .failure()
        .stderr(contains("Invalid month format"));
}

#[test]
fn test_summary_compares_month_with_budget() {
    let db_path = setup_test_db("summary_budget");
    init_db_with_data(&db_path);

    rbl()
        .args(["--db", &db_path, "budget", "set", "2026-02", "100"])
        .assert()
        .success();

    rbl()
        .args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Monthly summary"))
        .stdout(contains("2026-02 (February 2026)"))
        .stdout(contains("100.00"))
        .stdout(contains("over by"));
}

#[test]
fn test_summary_without_budget() {
    let db_path = setup_test_db("summary_no_budget");
    init_db_with_data(&db_path);

    rbl()
        .args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("no budget"));
}

#[test]
fn test_catalog_lists_every_category() {
    let db_path = setup_test_db("catalog");

    rbl()
        .args(["--db", &db_path, "catalog"])
        .assert()
        .success()
        .stdout(contains("Consultations"))
        .stdout(contains("Telehealth"))
        .stdout(contains("Procedures"))
        .stdout(contains("Care Plans & Assessments"))
        .stdout(contains("consult_a_90020"))
        .stdout(contains("assessment_cmr_903"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    rbl()
        .args(["--db", &db_path, "del", "2026-02-04", "--force"])
        .assert()
        .success();

    rbl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("add (2026-02-09)"))
        .stdout(contains("del (2026-02-04)"));
}

#[test]
fn test_init_reports_schema_creation_and_audits_db_path() {
    let db_path = setup_test_db("init_audit_target");

    rbl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Created days, day_line_items and monthly_budgets tables."));

    rbl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains(format!("init ({})", db_path)))
        .stdout(contains("Database initialized"));
}

#[test]
fn test_read_commands_do_not_create_missing_database() {
    let db_path = setup_test_db("missing_db");

    for args in [
        vec!["show", "2026-02-09"],
        vec!["list", "--period", "all"],
        vec!["summary"],
        vec!["del", "2026-02-09", "--force"],
        vec!["budget", "show"],
        vec!["log", "--print"],
    ] {
        let mut full = vec!["--db", db_path.as_str()];
        full.extend(args);
        rbl()
            .args(&full)
            .assert()
            .failure()
            .stdout(contains("Created days").not())
            .stderr(contains("Database not found"));
    }

    assert!(!std::path::Path::new(&db_path).exists());
}

#[test]
fn test_del_unknown_date_fails_before_confirmation() {
    let db_path = setup_test_db("del_unknown_no_prompt");
    init_db_with_data(&db_path);

    rbl()
        .args(["--db", &db_path, "del", "2026-03-01"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stdout(contains("Confirm").not())
        .stderr(contains("No record found for 2026-03-01"));
}

#[test]
fn test_resolve_db_keeps_absolute_and_anchors_relative_paths() {
    let abs = std::env::temp_dir().join("resolve_abs.sqlite");
    assert_eq!(Config::resolve_db(abs.to_str().unwrap()), abs);

    let rel = Config::resolve_db("rel.sqlite");
    assert_eq!(rel, Config::config_dir().join("rel.sqlite"));
}

#[cfg(unix)]
#[test]
fn test_relative_db_is_the_same_file_for_init_and_later_commands() {
    let base: PathBuf = std::env::temp_dir().join("rbilllog_relative_db");
    fs::remove_dir_all(&base).ok();
    let home = base.join("home");
    let cwd = base.join("cwd");
    fs::create_dir_all(&home).unwrap();
    fs::create_dir_all(&cwd).unwrap();

    rbl()
        .env("HOME", &home)
        .current_dir(&cwd)
        .args(["--db", "rel.sqlite", "--test", "init"])
        .assert()
        .success();

    rbl()
        .env("HOME", &home)
        .current_dir(&cwd)
        .args(["--db", "rel.sqlite", "add", "2026-02-09", "-i", "consult_a_90020=1"])
        .assert()
        .success();

    rbl()
        .env("HOME", &home)
        .current_dir(&cwd)
        .args(["--db", "rel.sqlite", "show", "2026-02-09"])
        .assert()
        .success()
        .stdout(contains("Level A consult (RACF) 90020"));

    assert!(!cwd.join("rel.sqlite").exists());

    let db = home.join(".rbilllog").join("rel.sqlite");
    let pool = DbPool::new(db.to_str().unwrap()).expect("open db");
    assert_eq!(pool.list_days().expect("list").len(), 1);
}
