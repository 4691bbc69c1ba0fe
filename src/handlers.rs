//! Resource operations, independent of the HTTP framework.
//!
//! Each function composes the validator, the store client and the query engine for one
//! request. They are generic over the resource kind, so users, products and tasks share the
//! exact same flow; the kind-specific rules live in each [`Resource`] implementation.

use crate::error::ApiError;
use crate::resource::{Patchable, QueryParams, Resource};
use resource_actor::ActorClient;
use serde_json::Value;
use tracing::instrument;

/// Filtered and sorted listing. An empty result is not an error.
pub async fn list<T, C>(client: &C, params: &QueryParams) -> Result<Vec<T>, ApiError>
where
    T: Resource,
    C: ActorClient<T, Error = ApiError>,
{
    let query = T::list_query(params)?;
    client.list(query).await
}

pub async fn fetch<T, C>(client: &C, raw_id: &str) -> Result<T, ApiError>
where
    T: Resource,
    C: ActorClient<T, Error = ApiError>,
{
    let id = T::parse_id(raw_id)?;
    client.require(id).await
}

#[instrument(skip(client, body), fields(kind = T::KIND))]
pub async fn create<T, C>(client: &C, body: &Value) -> Result<T, ApiError>
where
    T: Resource,
    C: ActorClient<T, Error = ApiError>,
{
    let params = T::validate_create(body)?;
    client.create(params).await
}

/// Full replace. A missing entity is reported before the body is validated.
#[instrument(skip(client, body), fields(kind = T::KIND))]
pub async fn replace<T, C>(client: &C, raw_id: &str, body: &Value) -> Result<T, ApiError>
where
    T: Resource,
    C: ActorClient<T, Error = ApiError>,
{
    let id = T::parse_id(raw_id)?;
    client.require(id.clone()).await?;
    let update = T::validate_replace(body)?;
    client.update(id, update).await
}

#[instrument(skip(client, body), fields(kind = T::KIND))]
pub async fn patch<T, C>(client: &C, raw_id: &str, body: &Value) -> Result<T, ApiError>
where
    T: Patchable,
    C: ActorClient<T, Error = ApiError>,
{
    let id = T::parse_id(raw_id)?;
    client.require(id.clone()).await?;
    let update = T::validate_patch(body)?;
    client.update(id, update).await
}

/// Removes the entity and hands it back.
#[instrument(skip(client), fields(kind = T::KIND))]
pub async fn delete<T, C>(client: &C, raw_id: &str) -> Result<T, ApiError>
where
    T: Resource,
    C: ActorClient<T, Error = ApiError>,
{
    let id = T::parse_id(raw_id)?;
    client.delete(id).await
}
