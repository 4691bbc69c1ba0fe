//! Generic axum handlers, instantiated once per resource kind by the router.

use super::envelope::{Envelope, ErrorResponse};
use crate::error::ApiError;
use crate::handlers;
use crate::resource::{Patchable, QueryParams, Resource};
use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use resource_actor::ActorClient;
use serde::Serialize;
use serde_json::Value;

/// Router state for one resource kind.
#[derive(Clone)]
pub struct ResourceState<C> {
    pub client: C,
    pub diagnostics: bool,
}

type HandlerResult = Result<Response, ErrorResponse>;

type PathId = Result<Path<String>, PathRejection>;
type Params = Result<Query<QueryParams>, QueryRejection>;
type RawBody = Result<Bytes, BytesRejection>;

impl<C> ResourceState<C> {
    fn reject(&self, error: ApiError) -> ErrorResponse {
        ErrorResponse::new(error, self.diagnostics)
    }

    /// Extractor failures become validation errors inside the envelope.
    fn id(&self, path: PathId) -> Result<String, ErrorResponse> {
        path.map(|Path(id)| id)
            .map_err(|rejection| self.reject(ApiError::validation(rejection.body_text())))
    }

    fn params(&self, query: Params) -> Result<QueryParams, ErrorResponse> {
        query
            .map(|Query(params)| params)
            .map_err(|rejection| self.reject(ApiError::validation(rejection.body_text())))
    }

    fn body(&self, body: RawBody) -> Result<Value, ErrorResponse> {
        let bytes =
            body.map_err(|rejection| self.reject(ApiError::validation(rejection.body_text())))?;
        parse_body(&bytes).map_err(|e| self.reject(e))
    }
}

/// Parses a request body. An empty body counts as `{}`; malformed JSON is a 400.
pub fn parse_body(body: &Bytes) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::validation(format!("Malformed JSON body: {e}")))
}

pub async fn list<T, C>(
    State(state): State<ResourceState<C>>,
    query: Params,
) -> HandlerResult
where
    T: Resource + Serialize,
    C: ActorClient<T, Error = ApiError> + Clone + 'static,
{
    let params = state.params(query)?;
    let items = handlers::list::<T, C>(&state.client, &params)
        .await
        .map_err(|e| state.reject(e))?;
    let count = items.len();
    Ok(Envelope::data(items).with_count(count).respond(StatusCode::OK))
}

pub async fn get<T, C>(State(state): State<ResourceState<C>>, path: PathId) -> HandlerResult
where
    T: Resource + Serialize,
    C: ActorClient<T, Error = ApiError> + Clone + 'static,
{
    let id = state.id(path)?;
    let item = handlers::fetch::<T, C>(&state.client, &id)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Envelope::data(item).respond(StatusCode::OK))
}

pub async fn create<T, C>(State(state): State<ResourceState<C>>, body: RawBody) -> HandlerResult
where
    T: Resource + Serialize,
    C: ActorClient<T, Error = ApiError> + Clone + 'static,
{
    let body = state.body(body)?;
    let item = handlers::create::<T, C>(&state.client, &body)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Envelope::data(item)
        .with_message(format!("{} created successfully", T::KIND))
        .respond(StatusCode::CREATED))
}

pub async fn replace<T, C>(
    State(state): State<ResourceState<C>>,
    path: PathId,
    body: RawBody,
) -> HandlerResult
where
    T: Resource + Serialize,
    C: ActorClient<T, Error = ApiError> + Clone + 'static,
{
    let id = state.id(path)?;
    let body = state.body(body)?;
    let item = handlers::replace::<T, C>(&state.client, &id, &body)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Envelope::data(item)
        .with_message(format!("{} updated successfully", T::KIND))
        .respond(StatusCode::OK))
}

pub async fn patch<T, C>(
    State(state): State<ResourceState<C>>,
    path: PathId,
    body: RawBody,
) -> HandlerResult
where
    T: Patchable + Serialize,
    C: ActorClient<T, Error = ApiError> + Clone + 'static,
{
    let id = state.id(path)?;
    let body = state.body(body)?;
    let item = handlers::patch::<T, C>(&state.client, &id, &body)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Envelope::data(item)
        .with_message(format!("{} updated successfully", T::KIND))
        .respond(StatusCode::OK))
}

pub async fn delete<T, C>(State(state): State<ResourceState<C>>, path: PathId) -> HandlerResult
where
    T: Resource + Serialize,
    C: ActorClient<T, Error = ApiError> + Clone + 'static,
{
    let id = state.id(path)?;
    let item = handlers::delete::<T, C>(&state.client, &id)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Envelope::data(item)
        .with_message(format!("{} deleted successfully", T::KIND))
        .respond(StatusCode::OK))
}
