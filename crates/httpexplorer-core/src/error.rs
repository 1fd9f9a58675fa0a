//! Shared error type across HTTP Explorer crates.

use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Unknown id or sensor.
    NotFound,
    /// Input rejected by the schema layer.
    ValidationFailed,
    /// Required request data missing (e.g. a header).
    BadRequest,
    /// Deliberately surfaced status code (status test endpoint).
    StatusTest,
    /// Invalid configuration at startup.
    InvalidConfig,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::ValidationFailed => "VALIDATION_FAILED",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::StatusTest => "STATUS_TEST",
            ClientCode::InvalidConfig => "INVALID_CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// One field-level validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Offending field (`body`, `query` or `path` when not attributable).
    pub field: String,
    /// Human readable explanation.
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ExplorerError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("{0}")]
    NotFound(String),
    #[error("dati non validi")]
    Validation(Vec<FieldIssue>),
    #[error("{0}")]
    BadRequest(String),
    #[error("{message}")]
    Status { code: u16, message: String },
    #[error("invalid config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ExplorerError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ExplorerError::NotFound(_) => ClientCode::NotFound,
            ExplorerError::Validation(_) => ClientCode::ValidationFailed,
            ExplorerError::BadRequest(_) => ClientCode::BadRequest,
            ExplorerError::Status { .. } => ClientCode::StatusTest,
            ExplorerError::Config(_) => ClientCode::InvalidConfig,
            ExplorerError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Numeric HTTP status the error is surfaced with.
    pub fn http_status(&self) -> u16 {
        match self {
            ExplorerError::NotFound(_) => 404,
            ExplorerError::Validation(_) => 422,
            ExplorerError::BadRequest(_) => 400,
            ExplorerError::Status { code, .. } => *code,
            ExplorerError::Config(_) | ExplorerError::Internal(_) => 500,
        }
    }

    /// Field-level detail, empty for non-validation errors.
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            ExplorerError::Validation(issues) => issues,
            _ => &[],
        }
    }

    /// Shorthand for a single-issue validation failure.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ExplorerError::Validation(vec![FieldIssue::new(field, message)])
    }
}

impl From<ValidationErrors> for ExplorerError {
    fn from(errs: ValidationErrors) -> Self {
        let mut issues: Vec<FieldIssue> = errs
            .field_errors()
            .into_iter()
            .flat_map(|(field, list)| {
                list.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("vincolo '{}' non rispettato", e.code));
                    FieldIssue::new(field.to_string(), message)
                })
            })
            .collect();
        issues.sort_by(|a, b| a.field.cmp(&b.field));
        ExplorerError::Validation(issues)
    }
}
