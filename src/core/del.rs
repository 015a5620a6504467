use crate::errors::{AppError, AppResult};
use crate::store::{Store, audit};

/// What kind of row a delete targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Time,
    Expense,
    Advance,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Time => "time entry",
            EntryKind::Expense => "expense",
            EntryKind::Advance => "advance",
        }
    }
}

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one of `owner`'s rows. Ids of other users are reported as not found.
    pub fn apply(store: &mut dyn Store, owner: &str, kind: EntryKind, id: &str) -> AppResult<()> {
        let owned = match kind {
            EntryKind::Time => store.load_time_entries(owner)?.iter().any(|e| e.id == id),
            EntryKind::Expense => store.load_expenses(owner)?.iter().any(|e| e.id == id),
            EntryKind::Advance => store.load_advances(owner)?.iter().any(|a| a.id == id),
        };

        if !owned {
            return Err(AppError::NotFound(kind.label(), id.to_string()));
        }

        let removed = match kind {
            EntryKind::Time => store.delete_time_entry(id)?,
            EntryKind::Expense => store.delete_expense(id)?,
            EntryKind::Advance => store.delete_advance(id)?,
        };

        if !removed {
            return Err(AppError::NotFound(kind.label(), id.to_string()));
        }

        audit(store, "del", id, &format!("Deleted {}", kind.label()));
        Ok(())
    }
}
