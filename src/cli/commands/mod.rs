pub mod add;
pub mod advance;
pub mod config;
pub mod del;
pub mod expense;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod periods;
pub mod report;
pub mod settings;
pub mod summary;
pub mod user;

use crate::config::Config;
use crate::core::logic::Core;
use crate::core::users::UserLogic;
use crate::errors::AppResult;
use crate::models::period::Period;
use crate::models::user::User;
use crate::store::{Store, open_store};
use crate::utils::date::today;

/// Store and resolved user every data command works with.
pub struct Session {
    pub store: Box<dyn Store>,
    pub user: User,
}

impl Session {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let mut store = open_store(cfg)?;
        UserLogic::ensure_default_admin(store.as_mut())?;
        let user = UserLogic::current(store.as_mut(), &cfg.user)?;
        Ok(Self { store, user })
    }

    pub fn owner(&self) -> &str {
        &self.user.id
    }

    pub fn store(&mut self) -> &mut dyn Store {
        self.store.as_mut()
    }
}

/// Resolve `--period`, defaulting to the fortnight containing today.
pub fn resolve_period(cfg: &Config, id: &Option<String>) -> AppResult<Period> {
    let periods = Core::periods(cfg);
    Core::select_period(&periods, id.as_deref(), today())
}
