//! # User Client
//!
//! Provides a high-level API for interacting with the `User` actor.

use crate::error::ApiError;
use crate::model::User;
use crate::resource::Resource;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = ApiError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> ApiError {
        ApiError::from_framework(User::KIND, e)
    }
}
