use serde::{Deserialize, Serialize};

/// Username of the administrator seeded by `init`; it can never be deleted.
pub const DEFAULT_ADMIN: &str = "ADM";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub role: Role,
    pub is_active: bool,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn default_admin() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            username: DEFAULT_ADMIN.to_string(),
            name: "Administrator".to_string(),
            role: Role::Admin,
            is_active: true,
        }
    }
}
