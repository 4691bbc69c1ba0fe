use super::resource_id;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

resource_id!(
    /// Identifier of a [`User`].
    UserId
);

/// Represents a registered user.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
/// Emails are unique across all users (compared case-insensitively).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

/// Payload for updating an existing user. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Fields a user listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSortField {
    Name,
    Email,
    CreatedAt,
}

impl FromStr for UserSortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match s {
            "name" => Ok(UserSortField::Name),
            "email" => Ok(UserSortField::Email),
            "createdAt" => Ok(UserSortField::CreatedAt),
            _ => Err(()),
        }
    }
}

impl User {
    /// Normalized form used for uniqueness checks.
    pub fn email_key(&self) -> String {
        self.email.trim().to_lowercase()
    }
}
