//! Persistence port.
//!
//! Every collection is scoped by owner id. `save_*` upserts the owner's
//! rows by id and leaves the others untouched; `delete_*` removes a single row.
//! Two implementations exist: [`SqliteStore`] and [`LocalStore`]. One of them
//! is picked at startup by [`open_store`]; the two are never reconciled.

pub mod local;
pub mod sqlite;

pub use local::LocalStore;
pub use sqlite::SqliteStore;

use crate::config::{Backend, Config};
use crate::db::log::LogRow;
use crate::errors::AppResult;
use crate::models::advance::AdvanceEntry;
use crate::models::expense::ExpenseEntry;
use crate::models::settings::AppSettings;
use crate::models::time_entry::TimeEntry;
use crate::models::user::User;
use crate::ui::messages::warning;

pub trait Store {
    /// Stored settings, or the defaults for `owner` when none exist.
    fn load_settings(&mut self, owner: &str) -> AppResult<AppSettings>;
    fn save_settings(&mut self, settings: &AppSettings) -> AppResult<()>;

    /// Save re-priced entries together with the settings that priced them.
    /// Entries go first, so a failure never leaves new rates over old earnings.
    fn save_repricing(&mut self, settings: &AppSettings, entries: &[TimeEntry]) -> AppResult<()> {
        self.save_time_entries(entries, &settings.user_id)?;
        self.save_settings(settings)
    }

    fn load_time_entries(&mut self, owner: &str) -> AppResult<Vec<TimeEntry>>;
    fn save_time_entries(&mut self, entries: &[TimeEntry], owner: &str) -> AppResult<()>;
    fn delete_time_entry(&mut self, id: &str) -> AppResult<bool>;

    fn load_expenses(&mut self, owner: &str) -> AppResult<Vec<ExpenseEntry>>;
    fn save_expenses(&mut self, expenses: &[ExpenseEntry], owner: &str) -> AppResult<()>;
    fn delete_expense(&mut self, id: &str) -> AppResult<bool>;

    fn load_advances(&mut self, owner: &str) -> AppResult<Vec<AdvanceEntry>>;
    fn save_advances(&mut self, advances: &[AdvanceEntry], owner: &str) -> AppResult<()>;
    fn delete_advance(&mut self, id: &str) -> AppResult<bool>;

    fn load_users(&mut self) -> AppResult<Vec<User>>;
    fn save_user(&mut self, user: &User) -> AppResult<()>;
    fn delete_user(&mut self, id: &str) -> AppResult<bool>;

    /// Append a line to the internal audit log.
    fn log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;
    fn load_log(&mut self) -> AppResult<Vec<LogRow>>;

    /// Short human-readable backend description.
    fn describe(&self) -> String;
}

/// Log through the store; a failure only prints a warning.
pub fn audit(store: &mut dyn Store, operation: &str, target: &str, message: &str) {
    if let Err(e) = store.log(operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// Open the configured backend.
///
/// When the SQLite database is missing or cannot be migrated, fall back to the
/// local JSON store. Data written to one backend is never merged into the
/// other.
pub fn open_store(cfg: &Config) -> AppResult<Box<dyn Store>> {
    match cfg.backend {
        Backend::Local => Ok(Box::new(LocalStore::open(&cfg.local_store_path())?)),
        Backend::Sqlite => match SqliteStore::open(&cfg.database_path()) {
            Ok(store) => Ok(Box::new(store)),
            Err(e) => {
                warning(format!(
                    "SQLite database unavailable ({}), falling back to local store {}",
                    e,
                    cfg.local_store_path().display()
                ));
                Ok(Box::new(LocalStore::open(&cfg.local_store_path())?))
            }
        },
    }
}
