use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with all pending migrations, default user included
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    let path = Config::config_file();

    println!("⚙️  Initializing timecard…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &cfg.database);

    let pool = open_db(&cfg.database)?;
    success(format!("Database initialized at {}", &cfg.database));

    // internal log is non-blocking
    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 timecard initialization completed!");
    Ok(())
}
