//! HTTP mapping of [`ExplorerError`].
//!
//! Errors are rendered with the same envelope as successful responses
//! (`success: false`), so clients can rely on one top-level shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use httpexplorer_core::{ExplorerError, ResponseEnvelope};

/// An [`ExplorerError`] bound to the request path it answers.
#[derive(Debug, Error)]
#[error("{error} (endpoint {endpoint})")]
pub struct ApiError {
    pub error: ExplorerError,
    pub endpoint: String,
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn new(error: ExplorerError, endpoint: impl Into<String>) -> Self {
        Self { error, endpoint: endpoint.into() }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.error.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Attach the endpoint to a core result.
pub trait AtEndpoint<T> {
    fn at(self, endpoint: &str) -> ApiResult<T>;
}

impl<T> AtEndpoint<T> for httpexplorer_core::Result<T> {
    fn at(self, endpoint: &str) -> ApiResult<T> {
        self.map_err(|e| ApiError::new(e, endpoint))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() && !matches!(self.error, ExplorerError::Status { .. }) {
            tracing::error!(endpoint = %self.endpoint, error = %self.error, "request failed");
        }

        let data = json!({
            "code": self.error.client_code().as_str(),
            "details": self.error.issues(),
        });
        let body = ResponseEnvelope::build(false, self.error.to_string(), Some(data), self.endpoint);
        (status, Json(body)).into_response()
    }
}
