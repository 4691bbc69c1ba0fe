//! [`ActorEntity`] implementation for [`User`].

use crate::error::ApiError;
use crate::model::{User, UserCreate, UserId, UserSortField, UserUpdate};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;
use std::cmp::Ordering;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Filter = ();
    type SortField = UserSortField;
    type Context = ();
    type Error = ApiError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, ApiError> {
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            created_at: Utc::now(),
        })
    }

    /// Emails are unique across users, ignoring case.
    fn conflicts_with(&self, other: &Self) -> Option<ApiError> {
        (self.email_key() == other.email_key()).then(|| {
            ApiError::Conflict(format!("Email {} is already in use", self.email))
        })
    }

    /// # Fields Updated
    /// - `name`
    /// - `email`
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), ApiError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    fn matches(&self, _filter: &()) -> bool {
        true
    }

    fn compare_by(&self, other: &Self, field: UserSortField) -> Ordering {
        match field {
            UserSortField::Name => self.name.cmp(&other.name),
            UserSortField::Email => self.email.cmp(&other.email),
            UserSortField::CreatedAt => self.created_at.cmp(&other.created_at),
        }
    }
}
