use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::ExportScope;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        date,
        range,
        force,
    } = cmd
    {
        let scope = match date {
            Some(d) => ExportScope::Day(d),
            None => ExportScope::Range(range.as_deref()),
        };

        let pool = DbPool::open_existing(&cfg.database)?;

        if ExportLogic::export(&pool, *format, file, &scope, *force)? {
            let target = date
                .as_deref()
                .or(range.as_deref())
                .unwrap_or("all");
            log::audit(
                &pool.conn,
                "export",
                target,
                &format!("Exported {} to {}", format.as_str(), file),
            );
        }
    }
    Ok(())
}
