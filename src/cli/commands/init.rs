use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;
use crate::ui::messages::success;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing rBillLog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    let created = init_db(&conn)?;

    if created {
        success("Created days, day_line_items and monthly_budgets tables.");
        success(format!("Database initialized at {}", &db_path));
    } else {
        success(format!("Database at {} is already up to date", &db_path));
    }

    log::audit(
        &conn,
        "init",
        &db_path,
        if created {
            "Database initialized"
        } else {
            "Database schema checked"
        },
    );

    println!("🎉 rBillLog initialization completed!");
    Ok(())
}
