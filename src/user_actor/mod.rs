//! # User Actor
//!
//! Manages registered users. Users have no context dependencies (`Context = ()`), no filters
//! and one uniqueness rule: two users may not share an email address.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`User`]
//! - [`validation`] - body and query-parameter rules
//! - [`new()`] - factory that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use crud_api::model::UserCreate;
//! use crud_api::user_actor;
//! use resource_actor::ActorClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let user = client
//!         .create(UserCreate {
//!             name: "Alice".to_string(),
//!             email: "alice@example.com".to_string(),
//!         })
//!         .await?;
//!     assert_eq!(user.id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod validation;

use crate::clients::UserClient;
use crate::error::ApiError;
use crate::model::{User, UserId, UserSortField};
use crate::resource::{self, QueryParams, Resource};
use resource_actor::{ResourceActor, Sort};
use serde_json::Value;

/// Creates a new User actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, UserClient::new(generic_client))
}

impl Resource for User {
    const KIND: &'static str = "User";

    fn parse_id(raw: &str) -> Result<UserId, ApiError> {
        resource::parse_id(Self::KIND, raw)
    }

    fn validate_create(body: &Value) -> Result<Self::Create, ApiError> {
        validation::validate_create(body)
    }

    fn validate_replace(body: &Value) -> Result<Self::Update, ApiError> {
        validation::validate_replace(body)
    }

    fn parse_filter(_params: &QueryParams) -> Result<(), ApiError> {
        Ok(())
    }

    fn parse_sort(params: &QueryParams) -> Option<Sort<UserSortField>> {
        resource::sort_from(params)
    }
}
