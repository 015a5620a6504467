use crate::errors::{AppError, AppResult};
use crate::models::user::{DEFAULT_ADMIN, Role, User};
use crate::store::{Store, audit};
use uuid::Uuid;

pub struct UserLogic;

impl UserLogic {
    /// Seed the default administrator when there are no users at all.
    /// Returns true when it was created.
    pub fn ensure_default_admin(store: &mut dyn Store) -> AppResult<bool> {
        if !store.load_users()?.is_empty() {
            return Ok(false);
        }
        let admin = User::default_admin();
        store.save_user(&admin)?;
        audit(store, "user", &admin.username, "Default administrator created");
        Ok(true)
    }

    /// Resolve the active user by username (case-insensitive).
    pub fn current(store: &mut dyn Store, username: &str) -> AppResult<User> {
        store
            .load_users()?
            .into_iter()
            .find(|u| u.username.eq_ignore_ascii_case(username) && u.is_active)
            .ok_or_else(|| AppError::UnknownUser(username.to_string()))
    }

    fn require_admin(actor: &User) -> AppResult<()> {
        if actor.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden(actor.username.clone()))
        }
    }

    pub fn create(
        store: &mut dyn Store,
        actor: &User,
        username: &str,
        name: &str,
        role: Role,
    ) -> AppResult<User> {
        Self::require_admin(actor)?;

        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::Validation("username cannot be empty".into()));
        }

        if store
            .load_users()?
            .iter()
            .any(|u| u.username.eq_ignore_ascii_case(username))
        {
            return Err(AppError::UsernameTaken(username.to_string()));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            name: name.trim().to_string(),
            role,
            is_active: true,
        };
        store.save_user(&user)?;
        audit(store, "user", &user.username, "User created");
        Ok(user)
    }

    pub fn delete(store: &mut dyn Store, actor: &User, username: &str) -> AppResult<()> {
        Self::require_admin(actor)?;

        if username.eq_ignore_ascii_case(DEFAULT_ADMIN) {
            return Err(AppError::ProtectedAccount(DEFAULT_ADMIN.to_string()));
        }

        let target = store
            .load_users()?
            .into_iter()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .ok_or_else(|| AppError::NotFound("user", username.to_string()))?;

        store.delete_user(&target.id)?;
        audit(store, "user", &target.username, "User deleted");
        Ok(())
    }
}
