//! # Resource Actor
//!
//! Building blocks for type-safe, in-memory resource collections served by actors.
//! Each resource kind (users, products, tasks, ...) is owned by one [`ResourceActor`] running in
//! its own Tokio task; the rest of the application talks to it through a cheap, cloneable
//! [`ResourceClient`].
//!
//! ## Why an actor per collection?
//!
//! - **Isolation**: the actor owns the only copy of its collection. Nothing else can touch it.
//! - **Serialization without locks**: requests are processed one at a time, so every create,
//!   update or delete is applied completely before the next request sees the collection.
//! - **Uniform API**: list / get / create / update / delete are written once and reused by
//!   every entity that implements [`ActorEntity`].
//!
//! ## Module Tour
//!
//! - [`entity`]: the [`ActorEntity`] contract (ids, DTOs, uniqueness, query hooks).
//! - [`actor`]: the [`ResourceActor`] event loop and id assignment.
//! - [`client`] / [`client_trait`]: the generic client and the [`ActorClient`] wrapper trait.
//! - [`query`]: the query engine ([`ListQuery`], [`Sort`], [`SortOrder`]).
//! - [`mock`]: channel helpers for testing client wrappers without an actor.
//! - [`tracing`]: subscriber setup shared by binaries.
//!
//! ## Identifier Rules
//!
//! Ids are assigned by the actor: the first entity gets `1`, every later one gets one more than
//! the largest id ever assigned. Deleted ids leave gaps that are never filled.
//!
//! ## Testing
//!
//! Unit tests for entities can drive a real actor (`tokio::spawn(actor.run(()))`), which is fast
//! and deterministic since everything is in memory. Client wrappers can be tested against
//! [`mock::create_mock_client`] to inject specific replies and errors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod query;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use query::{ListQuery, Sort, SortOrder};
