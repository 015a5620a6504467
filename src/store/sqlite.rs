use super::Store;
use crate::db::initialize::init_db;
use crate::db::log::{LogRow, load_log, ttlog};
use crate::db::migrate::is_up_to_date;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::advance::AdvanceEntry;
use crate::models::expense::ExpenseEntry;
use crate::models::settings::AppSettings;
use crate::models::time_entry::TimeEntry;
use crate::models::user::User;
use std::path::{Path, PathBuf};

pub struct SqliteStore {
    pool: DbPool,
    path: PathBuf,
}

impl SqliteStore {
    /// Open an initialized database. A missing file or a schema that was
    /// never migrated is reported as an error so the caller can fall back.
    pub fn open(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "database not found: {} (run `rfortnight init`)",
                path.display()
            )));
        }

        let pool = DbPool::open_existing(&path.to_string_lossy())?;
        if !is_up_to_date(&pool.conn)? {
            init_db(&pool.conn)?;
        }

        Ok(Self {
            pool,
            path: path.to_path_buf(),
        })
    }

    /// Create (if needed) and migrate the database.
    pub fn create(path: &Path) -> AppResult<Self> {
        let pool = DbPool::new(&path.to_string_lossy())?;
        init_db(&pool.conn)?;
        Ok(Self {
            pool,
            path: path.to_path_buf(),
        })
    }

    /// Fully migrated in-memory database.
    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self {
            pool,
            path: PathBuf::from(":memory:"),
        })
    }

    /// Run `f` inside one transaction, so a whole collection lands at once.
    fn in_tx<F>(&mut self, f: F) -> AppResult<()>
    where
        F: FnOnce(&rusqlite::Connection) -> AppResult<()>,
    {
        let tx = self.pool.conn.transaction()?;
        f(&tx)?;
        tx.commit()?;
        Ok(())
    }
}

impl Store for SqliteStore {
    fn load_settings(&mut self, owner: &str) -> AppResult<AppSettings> {
        Ok(queries::load_settings(&self.pool.conn, owner)?
            .unwrap_or_else(|| AppSettings::defaults_for(owner)))
    }

    fn save_settings(&mut self, settings: &AppSettings) -> AppResult<()> {
        queries::upsert_settings(&self.pool.conn, settings)
    }

    fn save_repricing(&mut self, settings: &AppSettings, entries: &[TimeEntry]) -> AppResult<()> {
        self.in_tx(|conn| {
            for e in entries {
                queries::upsert_time_entry(conn, e, &settings.user_id)?;
            }
            queries::upsert_settings(conn, settings)
        })
    }

    fn load_time_entries(&mut self, owner: &str) -> AppResult<Vec<TimeEntry>> {
        queries::load_time_entries(&self.pool.conn, owner)
    }

    fn save_time_entries(&mut self, entries: &[TimeEntry], owner: &str) -> AppResult<()> {
        self.in_tx(|conn| {
            for e in entries {
                queries::upsert_time_entry(conn, e, owner)?;
            }
            Ok(())
        })
    }

    fn delete_time_entry(&mut self, id: &str) -> AppResult<bool> {
        queries::delete_time_entry(&self.pool.conn, id)
    }

    fn load_expenses(&mut self, owner: &str) -> AppResult<Vec<ExpenseEntry>> {
        queries::load_expenses(&self.pool.conn, owner)
    }

    fn save_expenses(&mut self, expenses: &[ExpenseEntry], owner: &str) -> AppResult<()> {
        self.in_tx(|conn| {
            for e in expenses {
                queries::upsert_expense(conn, e, owner)?;
            }
            Ok(())
        })
    }

    fn delete_expense(&mut self, id: &str) -> AppResult<bool> {
        queries::delete_expense(&self.pool.conn, id)
    }

    fn load_advances(&mut self, owner: &str) -> AppResult<Vec<AdvanceEntry>> {
        queries::load_advances(&self.pool.conn, owner)
    }

    fn save_advances(&mut self, advances: &[AdvanceEntry], owner: &str) -> AppResult<()> {
        self.in_tx(|conn| {
            for a in advances {
                queries::upsert_advance(conn, a, owner)?;
            }
            Ok(())
        })
    }

    fn delete_advance(&mut self, id: &str) -> AppResult<bool> {
        queries::delete_advance(&self.pool.conn, id)
    }

    fn load_users(&mut self) -> AppResult<Vec<User>> {
        queries::load_users(&self.pool.conn)
    }

    fn save_user(&mut self, user: &User) -> AppResult<()> {
        queries::upsert_user(&self.pool.conn, user)
    }

    fn delete_user(&mut self, id: &str) -> AppResult<bool> {
        queries::delete_user(&self.pool.conn, id)
    }

    fn log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.pool.conn, operation, target, message)
    }

    fn load_log(&mut self) -> AppResult<Vec<LogRow>> {
        load_log(&self.pool.conn)
    }

    fn describe(&self) -> String {
        format!("sqlite ({})", self.path.display())
    }
}
