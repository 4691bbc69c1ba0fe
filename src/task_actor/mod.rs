//! # Task Actor
//!
//! Manages tasks. Tasks are the only kind that supports partial updates (`PATCH`), and every
//! change to a task refreshes its `updatedAt` timestamp.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Task`]
//! - [`validation`] - create, replace and partial-update rules plus listing filters
//! - [`new()`] - factory that creates the actor and its client

pub mod entity;
pub mod validation;

use crate::clients::TaskClient;
use crate::error::ApiError;
use crate::model::{Task, TaskFilter, TaskId, TaskSortField};
use crate::resource::{self, Patchable, QueryParams, Resource};
use resource_actor::{ResourceActor, Sort};
use serde_json::Value;

/// Creates a new Task actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Task>, TaskClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, TaskClient::new(generic_client))
}

impl Resource for Task {
    const KIND: &'static str = "Task";

    fn parse_id(raw: &str) -> Result<TaskId, ApiError> {
        resource::parse_id(Self::KIND, raw)
    }

    fn validate_create(body: &Value) -> Result<Self::Create, ApiError> {
        validation::validate_create(body)
    }

    fn validate_replace(body: &Value) -> Result<Self::Update, ApiError> {
        validation::validate_replace(body)
    }

    fn parse_filter(params: &QueryParams) -> Result<TaskFilter, ApiError> {
        Ok(validation::parse_filter(params))
    }

    fn parse_sort(params: &QueryParams) -> Option<Sort<TaskSortField>> {
        resource::sort_from(params)
    }
}

impl Patchable for Task {
    fn validate_patch(body: &Value) -> Result<Self::Update, ApiError> {
        validation::validate_patch(body)
    }
}
