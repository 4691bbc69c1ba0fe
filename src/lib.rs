//! # CRUD API
//!
//! An HTTP service exposing in-memory collections of users, products and tasks, with request
//! validation, filtering, sorting and a uniform JSON envelope.
//!
//! ## Layout
//!
//! - **[model]**: pure data structures ([`User`](model::User), [`Product`](model::Product),
//!   [`Task`](model::Task)) plus their payloads, filters and sort fields.
//! - **`*_actor`**: one [`ResourceActor`](resource_actor::ResourceActor) per kind, with its
//!   [`ActorEntity`](resource_actor::ActorEntity) implementation and validation rules.
//! - **[clients]**: type-safe wrappers that translate framework errors into [`ApiError`](error::ApiError).
//! - **[handlers]**: list / fetch / create / replace / patch / delete, generic over the kind.
//! - **[http]**: the axum router, envelope and request logging.
//! - **[lifecycle]**: starting, seeding and stopping the actors.
//!
//! ## Testing
//!
//! See [`resource_actor::mock`] for utilities to test clients without spawning actors; the
//! `tests/` directory drives the whole router through `tower::ServiceExt::oneshot`.

pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod resource;
pub mod task_actor;
pub mod user_actor;
pub mod validation;
