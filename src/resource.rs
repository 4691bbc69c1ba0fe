//! The contract that lets one set of handlers serve every resource kind.

use crate::error::ApiError;
use resource_actor::{ActorEntity, ListQuery, Sort};
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

/// Raw query-string parameters of a listing request.
pub type QueryParams = HashMap<String, String>;

/// A resource kind exposed over the API.
///
/// The store side comes from [`ActorEntity`]; this trait adds the request side: how ids are read
/// from a path, how bodies become validated create/update payloads and how query parameters
/// become a [`ListQuery`].
pub trait Resource: ActorEntity<Error = ApiError> {
    /// Human-readable kind used in messages ("Task with id 7 not found").
    const KIND: &'static str;

    fn parse_id(raw: &str) -> Result<Self::Id, ApiError>;

    /// Validates a body in create mode: every mandatory field present, defaults filled in.
    fn validate_create(body: &Value) -> Result<Self::Create, ApiError>;

    /// Validates a body in full-replace mode: every mandatory field present, only provided
    /// optional fields applied.
    fn validate_replace(body: &Value) -> Result<Self::Update, ApiError>;

    fn parse_filter(params: &QueryParams) -> Result<Self::Filter, ApiError>;

    fn parse_sort(params: &QueryParams) -> Option<Sort<Self::SortField>>;

    fn list_query(params: &QueryParams) -> Result<ListQuery<Self>, ApiError> {
        Ok(ListQuery::new(
            Self::parse_filter(params)?,
            Self::parse_sort(params),
        ))
    }
}

/// Resource kinds that also accept partial updates.
pub trait Patchable: Resource {
    /// Validates a body in partial mode: at least one recognized field, only present fields
    /// checked.
    fn validate_patch(body: &Value) -> Result<Self::Update, ApiError>;
}

/// Reads a path identifier.
///
/// Anything that is not a non-negative integer is a 400. An all-digit id too large for the id
/// type can never have been assigned, so it is reported as missing.
pub fn parse_id<I: FromStr>(kind: &'static str, raw: &str) -> Result<I, ApiError> {
    raw.parse().map_err(|_| {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            ApiError::NotFound {
                kind,
                id: raw.to_string(),
            }
        } else {
            ApiError::validation(format!("Invalid {kind} id: {raw}"))
        }
    })
}

/// `sortBy` / `order` for field type `F`; unknown fields yield `None` (order unchanged).
pub fn sort_from<F: FromStr>(params: &QueryParams) -> Option<Sort<F>> {
    Sort::from_params(
        params.get("sortBy").map(String::as_str),
        params.get("order").map(String::as_str),
    )
}

/// A query parameter that is present and not blank.
pub fn param<'a>(params: &'a QueryParams, name: &str) -> Option<&'a str> {
    params
        .get(name)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}
