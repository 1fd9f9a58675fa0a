//! HTTP Explorer core: transport-agnostic domain for the didactic HTTP server.
//!
//! Holds the content negotiation decision, the response envelope, the
//! in-memory repositories and the catalog queries running over them. Nothing
//! here knows about axum or sockets, so the server crate and the tests share
//! the exact same behavior.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here; every fallible
//! path surfaces as [`ExplorerError`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod envelope;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod negotiation;
pub mod repository;
pub mod status;
pub mod user_agent;

/// Shared result type.
pub use error::{ExplorerError, Result};
pub use envelope::ResponseEnvelope;
pub use negotiation::{prefers_markup, Representation};
pub use repository::{Record, Repository};
