//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::query::ListQuery;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants of this enum map directly to the store primitives:
///
/// - **List**: Snapshot of the collection, filtered and sorted by a [`ListQuery`].
/// - **Get (Read)**: Fetches the current state of the resource by ID.
/// - **Create**: Uses [`ActorEntity::Create`] to initialize and store a new resource.
/// - **Update**: Applies [`ActorEntity::Update`] to an existing resource.
/// - **Delete**: Removes the resource and hands it back.
/// - **Len**: Current collection size.
///
/// This type is generic over `T: ActorEntity`, so a "User Create" payload can never be sent to
/// a "Product" actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        query: ListQuery<T>,
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    Len {
        respond_to: Response<usize>,
    },
}
