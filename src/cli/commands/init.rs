use crate::cli::parser::Cli;
use crate::config::{Backend, Config};
use crate::core::users::UserLogic;
use crate::errors::AppResult;
use crate::store::{LocalStore, SqliteStore, Store, audit};
use crate::models::user::DEFAULT_ADMIN;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the configured store (SQLite database with all migrations, or JSON file)
///  - the default administrator when no user exists yet
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rFortnight…");

    if cli.test {
        info("Test mode: configuration file left untouched.");
    } else {
        cfg.save()?;
        println!("📄 Config file : {}", Config::config_file().display());
    }

    let mut store: Box<dyn Store> = match cfg.backend {
        Backend::Sqlite => {
            let path = cfg.database_path();
            if let Some(dir) = path.parent()
                && !dir.as_os_str().is_empty()
            {
                std::fs::create_dir_all(dir)?;
            }
            Box::new(SqliteStore::create(&path)?)
        }
        Backend::Local => Box::new(LocalStore::open(&cfg.local_store_path())?),
    };

    let location = store.describe();
    println!("🗄️  Store       : {}", location);

    if UserLogic::ensure_default_admin(store.as_mut())? {
        info(format!("Default administrator '{}' created.", DEFAULT_ADMIN));
    }

    audit(
        store.as_mut(),
        "init",
        "store initialized",
        &format!("Store initialized at {}", location),
    );

    success("rFortnight initialization completed!");
    Ok(())
}
