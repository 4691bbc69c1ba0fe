//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that owns one resource
//! collection. It implements the "Server" side of the Actor Model, processing messages
//! sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// The actor owns the in-memory store for a given entity type `T: ActorEntity` and processes
/// all incoming `ResourceRequest<T>` messages one at a time inside its own Tokio task. That
/// sequential loop is the mutual exclusion for the collection: a mutation is fully applied (or
/// fully rejected) before the next request observes any state, and reads hand out copies.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
/// use std::cmp::Ordering;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate(String);
/// #[derive(Debug)] struct NoteUpdate(String);
/// #[derive(Debug, Clone, Copy)] enum NoteSort {}
/// #[derive(Debug)] struct NoteError;
///
/// impl std::fmt::Display for NoteError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "note error") }
/// }
/// impl std::error::Error for NoteError {}
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Filter = ();
///     type SortField = NoteSort;
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, NoteError> {
///         Ok(Self { id, text: params.0 })
///     }
///     async fn on_update(&mut self, update: NoteUpdate, _: &()) -> Result<(), NoteError> {
///         self.text = update.0;
///         Ok(())
///     }
///     fn matches(&self, _: &()) -> bool { true }
///     fn compare_by(&self, _: &Self, field: NoteSort) -> Ordering { match field {} }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let note = client.create(NoteCreate("hello".into())).await.unwrap();
///     assert_eq!(note.id, 1);
/// }
/// ```
///
/// # Identifiers
///
/// New ids come from a `u32` counter. The counter is a high-water mark: it always equals the
/// largest id ever handed out plus one, so a new entity receives `max + 1` and an id freed by a
/// delete is never issued again. The store is a `BTreeMap` keyed by id; since ids only grow,
/// iteration order is insertion order.
///
/// ## Operations
///
/// * **List**: clones the collection in order and applies the [`ListQuery`](crate::ListQuery).
/// * **Get**: returns a clone of the entity if found, or `None`.
/// * **Create**: builds the entity from the next id, runs `on_create`, checks
///   `conflicts_with` against every stored entity, then inserts it. The counter only advances
///   when the entity is stored.
/// * **Update**: applies `on_update` to a working copy, checks `conflicts_with` against every
///   *other* entity, then swaps the copy in. Any failure leaves the stored entity untouched.
/// * **Delete**: runs `on_delete`, removes the entity and returns it.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn find_conflict(&self, candidate: &T, skip: Option<&T::Id>) -> Option<T::Error> {
        self.store
            .iter()
            .filter(|(id, _)| Some(*id) != skip)
            .find_map(|(_, existing)| candidate.conflicts_with(existing))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies that were created *after* the actor was instantiated
    /// but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "User" instead of "crud_api::model::user::User")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { query, respond_to } => {
                    let snapshot: Vec<T> = self.store.values().cloned().collect();
                    let items = query.apply(snapshot);
                    debug!(entity_type, ?query, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    let mut item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    if let Some(e) = self.find_conflict(&item, None) {
                        warn!(entity_type, error = %e, "Create conflict");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }

                    self.next_id += 1;
                    self.store.insert(id.clone(), item.clone());
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut candidate = current.clone();
                    if let Err(e) = candidate.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    if let Some(e) = self.find_conflict(&candidate, Some(&id)) {
                        warn!(entity_type, %id, error = %e, "Update conflict");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }

                    self.store.insert(id.clone(), candidate.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(candidate));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let result = self
                        .store
                        .remove(&id)
                        .ok_or_else(|| FrameworkError::NotFound(id.to_string()));
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Len { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
