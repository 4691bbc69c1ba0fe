//! Error type shared by every resource kind.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can end an API operation.
///
/// Each variant carries the HTTP status it is rendered with; see [`ApiError::status_code`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request failed a field or parameter rule.
    #[error("{0}")]
    Validation(String),

    /// The addressed entity does not exist.
    #[error("{kind} with id {id} not found")]
    NotFound { kind: &'static str, id: String },

    /// No route matches the request.
    #[error("Route {method} {path} not found")]
    RouteNotFound { method: String, path: String },

    /// The write would break a uniqueness rule (duplicate email).
    #[error("{0}")]
    Conflict(String),

    /// Anything else: the actor went away, a reply was dropped, ...
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::NotFound { .. } | ApiError::RouteNotFound { .. } => 404,
            ApiError::Conflict(_) => 409,
            ApiError::Internal(_) => 500,
        }
    }

    /// Translates a framework error for the resource `kind` ("User", "Product", "Task").
    ///
    /// Entity errors raised inside the actor are unboxed back into the original `ApiError`.
    pub fn from_framework(kind: &'static str, error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound(id) => ApiError::NotFound { kind, id },
            entity @ FrameworkError::EntityError(_) => match entity.into_entity_error::<ApiError>() {
                Ok(api_error) => api_error,
                Err(other) => ApiError::Internal(other.to_string()),
            },
            other => ApiError::Internal(other.to_string()),
        }
    }
}
