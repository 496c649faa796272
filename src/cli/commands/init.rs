use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::KvStore;
use crate::db::migrate::latest_version;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use log::debug;

/// Handle the `init` command
///
/// Creates the config directory and file (skipped in test mode), then opens
/// the database, which applies every pending migration.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    info("Initializing zenplan…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_path);

    let storage = KvStore::open(&db_path)?;
    debug!("init: schema at {}", latest_version());

    storage.audit(
        "init",
        "",
        &format!("Database initialized at {}", db_path),
    );

    success(format!("Database initialized at {}", db_path));
    Ok(())
}
