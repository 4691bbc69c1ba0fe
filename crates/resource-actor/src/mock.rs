//! # Mock Channel Helpers
//!
//! Utilities for testing client wrappers without spawning a real [`ResourceActor`](crate::ResourceActor).
//!
//! [`create_mock_client`] returns a normal [`ResourceClient`] together with the receiving end of
//! its channel. The test plays the actor: it pulls the next request with one of the `expect_*`
//! helpers, asserts on the payload and answers through the returned responder.
//!
//! | Feature | Mock channel | Real Actor |
//! |---------|--------------|------------|
//! | **Determinism** | The test decides every reply | Real state management |
//! | **Error Injection** | Send any `FrameworkError` | Requires reaching that state |
//! | **Use Case** | Logic *around* the client | The entity and actor themselves |
//!
//! ```rust,ignore
//! let (client, mut receiver) = create_mock_client::<Task>(10);
//! let task_client = TaskClient::new(client);
//!
//! let call = tokio::spawn(async move { task_client.require(7).await });
//!
//! let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
//! assert_eq!(id, 7);
//! responder.send(Ok(None)).unwrap();
//!
//! assert!(call.await.unwrap().is_err());
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::message::{ResourceRequest, Response};
use crate::query::ListQuery;
use tokio::sync::mpsc;

/// Creates a client whose requests land in the returned receiver instead of an actor.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(ListQuery<T>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
