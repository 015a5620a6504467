use super::Store;
use crate::db::log::LogRow;
use crate::errors::AppResult;
use crate::models::advance::AdvanceEntry;
use crate::models::expense::ExpenseEntry;
use crate::models::settings::AppSettings;
use crate::models::time_entry::TimeEntry;
use crate::models::user::User;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk layout: flat lists, filtered by owner on read.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    settings: Vec<AppSettings>,
    #[serde(default)]
    time_entries: Vec<TimeEntry>,
    #[serde(default)]
    expenses: Vec<ExpenseEntry>,
    #[serde(default)]
    advances: Vec<AdvanceEntry>,
    #[serde(default)]
    log: Vec<LogRow>,
}

/// JSON-file store; every mutation rewrites the whole document.
/// With no path it stays in memory.
pub struct LocalStore {
    path: Option<PathBuf>,
    doc: Document,
}

/// Upsert `items` by id into `all`, stamping the owner.
fn merge<T: Clone>(
    all: &mut Vec<T>,
    items: &[T],
    owner: &str,
    id_of: fn(&T) -> &str,
    set_owner: fn(&mut T, &str),
) {
    for item in items {
        let mut item = item.clone();
        set_owner(&mut item, owner);
        match all.iter_mut().find(|x| id_of(x) == id_of(&item)) {
            Some(slot) => *slot = item,
            None => all.push(item),
        }
    }
}

impl LocalStore {
    pub fn open(path: &Path) -> AppResult<Self> {
        let doc = if path.exists() {
            let raw = fs::read_to_string(path)?;
            if raw.trim().is_empty() {
                Document::default()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            Document::default()
        };

        Ok(Self {
            path: Some(path.to_path_buf()),
            doc,
        })
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            doc: Document::default(),
        }
    }

    fn flush(&self) -> AppResult<()> {
        if let Some(path) = &self.path {
            if let Some(dir) = path.parent()
                && !dir.as_os_str().is_empty()
            {
                fs::create_dir_all(dir)?;
            }
            let json = serde_json::to_string_pretty(&self.doc)?;
            fs::write(path, json)?;
        }
        Ok(())
    }
}

impl Store for LocalStore {
    fn load_settings(&mut self, owner: &str) -> AppResult<AppSettings> {
        Ok(self
            .doc
            .settings
            .iter()
            .find(|s| s.user_id == owner)
            .cloned()
            .unwrap_or_else(|| AppSettings::defaults_for(owner)))
    }

    fn save_settings(&mut self, settings: &AppSettings) -> AppResult<()> {
        self.doc.settings.retain(|s| s.user_id != settings.user_id);
        self.doc.settings.push(settings.clone());
        self.flush()
    }

    fn load_time_entries(&mut self, owner: &str) -> AppResult<Vec<TimeEntry>> {
        Ok(self
            .doc
            .time_entries
            .iter()
            .filter(|e| e.user_id == owner)
            .cloned()
            .collect())
    }

    fn save_time_entries(&mut self, entries: &[TimeEntry], owner: &str) -> AppResult<()> {
        merge(
            &mut self.doc.time_entries,
            entries,
            owner,
            |e| e.id.as_str(),
            |e, o| e.user_id = o.to_string(),
        );
        self.flush()
    }

    fn delete_time_entry(&mut self, id: &str) -> AppResult<bool> {
        let before = self.doc.time_entries.len();
        self.doc.time_entries.retain(|e| e.id != id);
        let removed = self.doc.time_entries.len() != before;
        if removed {
            self.flush()?;
        }
        Ok(removed)
    }

    fn load_expenses(&mut self, owner: &str) -> AppResult<Vec<ExpenseEntry>> {
        Ok(self
            .doc
            .expenses
            .iter()
            .filter(|e| e.user_id == owner)
            .cloned()
            .collect())
    }

    fn save_expenses(&mut self, expenses: &[ExpenseEntry], owner: &str) -> AppResult<()> {
        merge(
            &mut self.doc.expenses,
            expenses,
            owner,
            |e| e.id.as_str(),
            |e, o| e.user_id = o.to_string(),
        );
        self.flush()
    }

    fn delete_expense(&mut self, id: &str) -> AppResult<bool> {
        let before = self.doc.expenses.len();
        self.doc.expenses.retain(|e| e.id != id);
        let removed = self.doc.expenses.len() != before;
        if removed {
            self.flush()?;
        }
        Ok(removed)
    }

    fn load_advances(&mut self, owner: &str) -> AppResult<Vec<AdvanceEntry>> {
        Ok(self
            .doc
            .advances
            .iter()
            .filter(|a| a.user_id == owner)
            .cloned()
            .collect())
    }

    fn save_advances(&mut self, advances: &[AdvanceEntry], owner: &str) -> AppResult<()> {
        merge(
            &mut self.doc.advances,
            advances,
            owner,
            |a| a.id.as_str(),
            |a, o| a.user_id = o.to_string(),
        );
        self.flush()
    }

    fn delete_advance(&mut self, id: &str) -> AppResult<bool> {
        let before = self.doc.advances.len();
        self.doc.advances.retain(|a| a.id != id);
        let removed = self.doc.advances.len() != before;
        if removed {
            self.flush()?;
        }
        Ok(removed)
    }

    fn load_users(&mut self) -> AppResult<Vec<User>> {
        let mut users = self.doc.users.clone();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }

    fn save_user(&mut self, user: &User) -> AppResult<()> {
        match self.doc.users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => *slot = user.clone(),
            None => self.doc.users.push(user.clone()),
        }
        self.flush()
    }

    fn delete_user(&mut self, id: &str) -> AppResult<bool> {
        let before = self.doc.users.len();
        self.doc.users.retain(|u| u.id != id);
        let removed = self.doc.users.len() != before;
        if removed {
            self.flush()?;
        }
        Ok(removed)
    }

    fn log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.doc.log.push(LogRow {
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
        self.flush()
    }

    fn load_log(&mut self) -> AppResult<Vec<LogRow>> {
        Ok(self.doc.log.clone())
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(p) => format!("local ({})", p.display()),
            None => "local (in memory)".to_string(),
        }
    }
}
