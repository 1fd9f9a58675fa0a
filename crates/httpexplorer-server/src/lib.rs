//! HTTP Explorer server library entry.
//!
//! Wires configuration, shared state, the request pipeline and the route
//! handlers into one axum router. Consumed by the binary (`main.rs`) and by
//! the integration tests, which drive [`router::build_router`] in-process.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod extract;
pub mod obs;
pub mod ops;
pub mod pipeline;
pub mod render;
pub mod router;
