//! The uniform JSON envelope every response is wrapped in.
//!
//! ```json
//! { "success": true, "data": [...], "count": 2 }
//! { "success": false, "error": { "message": "Task with id 7 not found", "stack": "..." } }
//! ```

use crate::error::ApiError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            message: None,
            error: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn respond(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// An [`ApiError`] on its way out, plus whether diagnostics may be shown.
#[derive(Debug)]
pub struct ErrorResponse {
    pub error: ApiError,
    pub diagnostics: bool,
}

impl ErrorResponse {
    pub fn new(error: ApiError, diagnostics: bool) -> Self {
        Self { error, diagnostics }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self.error, "Request failed");
        }
        let envelope: Envelope<()> = Envelope {
            success: false,
            data: None,
            count: None,
            message: None,
            error: Some(ErrorBody {
                message: self.error.to_string(),
                stack: self.diagnostics.then(|| format!("{:?}", self.error)),
            }),
        };
        envelope.respond(status)
    }
}
