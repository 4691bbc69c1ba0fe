//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (User, Product, Task) must
//! implement to be managed by the generic `ResourceActor`. It specifies associated types for IDs,
//! DTOs, list queries, context, and errors, and provides hooks for the lifecycle (`on_create`,
//! `on_update`, `on_delete`), for uniqueness checks (`conflicts_with`) and for the query engine
//! (`matches`, `compare_by`).
//!
//! # Provided Methods (Hooks)
//! The lifecycle hooks and `conflicts_with` have default implementations that accept everything.
//! Only `from_create_params`, `on_update`, `matches` and `compare_by` are required.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks.
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing them to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    ///
    /// Identifiers are generated by the actor from a `u32` counter, and the store keeps
    /// entities ordered by id, so ascending id order is insertion order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (already validated).
    type Create: Send + Sync + Debug;

    /// The set of fields to change on an existing instance. Absent fields are left untouched.
    type Update: Send + Sync + Debug;

    /// Filter predicates understood by [`ActorEntity::matches`].
    type Filter: Send + Sync + Debug + Default;

    /// Allow-list of fields a listing may be sorted by.
    type SortField: Copy + Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Uniqueness policy: returns an error when `self` may not coexist with `other`.
    ///
    /// The actor calls this against every other stored entity before committing a create or
    /// an update, so a rejected write leaves the collection unchanged.
    fn conflicts_with(&self, _other: &Self) -> Option<Self::Error> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update to the entity. Runs against a working copy; the stored entity is
    /// only replaced when this hook and the uniqueness check both succeed.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Query Hooks ---

    /// Returns true when the entity passes every predicate in `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Compares two entities on a single sort field (ascending).
    fn compare_by(&self, other: &Self, field: Self::SortField) -> Ordering;
}
