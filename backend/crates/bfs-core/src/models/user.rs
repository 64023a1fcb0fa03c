use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered portal account. Holds the password hash, so it never leaves
/// the server; use [`PublicUser`] for anything serialized to a client.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: Role,
    pub profile_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// New `user`-role account. `email` is expected to be normalized already.
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            phone: None,
            password_hash,
            role: Role::User,
            profile_complete: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a profile update and recompute the completeness flag
    pub fn update_profile(&mut self, name: String, phone: Option<String>) {
        self.name = name;
        self.phone = phone.filter(|p| !p.trim().is_empty());
        self.profile_complete = !self.name.trim().is_empty() && self.phone.is_some();
        self.updated_at = Utc::now();
    }

    pub fn public(&self) -> PublicUser {
        PublicUser::from(self)
    }
}

/// Client-facing projection of a [`User`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub profile_complete: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            phone: user.phone.clone(),
            role: user.role,
            profile_complete: user.profile_complete,
            created_at: user.created_at,
        }
    }
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}
