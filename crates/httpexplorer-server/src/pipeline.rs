//! Request lifecycle middleware.
//!
//! Wraps every route (fallback included): counts the request before the
//! handler runs, times it, then stamps `X-Process-Time` and `X-Served-By` on
//! whatever the handler returned, error responses included.

use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tokio::time::Instant;

use crate::app_state::AppState;

pub const X_PROCESS_TIME: HeaderName = HeaderName::from_static("x-process-time");
pub const X_SERVED_BY: HeaderName = HeaderName::from_static("x-served-by");

pub async fn track(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();

    state.counters().record(method.as_str());
    tracing::info!(method = %method, uri = %req.uri(), "request");

    let mut res = next.run(req).await;

    let elapsed = started.elapsed();
    let status = res.status();
    tracing::info!(
        method = %method,
        status = status.as_u16(),
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "response"
    );

    let metrics = state.metrics();
    metrics
        .responses
        .inc(&[("method", method.as_str()), ("status", status.as_str())]);
    metrics
        .request_duration
        .observe(&[("method", method.as_str())], elapsed);

    let headers = res.headers_mut();
    if let Ok(v) = HeaderValue::from_str(&elapsed.as_secs_f64().to_string()) {
        headers.insert(X_PROCESS_TIME, v);
    }
    headers.insert(X_SERVED_BY, state.served_by().clone());
    res
}
