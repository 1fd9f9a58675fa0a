//! Route handlers, one module per resource family.
//!
//! Handlers stay thin: extract and validate, call into the core repositories
//! and queries, wrap the result in a [`ResponseEnvelope`].
//!
//! [`ResponseEnvelope`]: httpexplorer_core::ResponseEnvelope

pub mod home;
pub mod introspect;
pub mod products;
pub mod temperatures;
pub mod testing;
pub mod users;

use axum::http::{header, HeaderMap};
use serde::Deserialize;
use validator::Validate;

/// `/{resource}/:id`
#[derive(Debug, Deserialize, Validate)]
pub struct IdPath {
    #[validate(range(min = 1, message = "deve essere >= 1"))]
    pub id: u64,
}

/// `/temperature/sensore/:nome`
#[derive(Debug, Deserialize, Validate)]
pub struct SensorPath {
    pub nome: String,
}

/// `/test/status/:status_code`
#[derive(Debug, Deserialize, Validate)]
pub struct StatusPath {
    #[validate(range(min = 100, max = 599, message = "deve essere tra 100 e 599"))]
    pub status_code: u16,
}

/// `/test/delay/:secondi`
#[derive(Debug, Deserialize, Validate)]
pub struct DelayPath {
    #[validate(range(min = 0.1, max = 10.0, message = "deve essere tra 0.1 e 10"))]
    pub secondi: f64,
}

/// `?formato=html|json`
#[derive(Debug, Deserialize, Validate)]
pub struct FormatQuery {
    pub formato: Option<String>,
}

/// Raw `Accept` header, if present and valid UTF-8.
pub(crate) fn accept(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::ACCEPT).and_then(|v| v.to_str().ok())
}
