#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use httpexplorer_server::{app_state::AppState, config::ServerConfig, router::build_router};

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("body must be JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("body must be UTF-8")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Seeded state plus a router sharing it.
pub fn app() -> (AppState, Router) {
    app_with(ServerConfig::default())
}

pub fn app_with(cfg: ServerConfig) -> (AppState, Router) {
    let state = AppState::new(cfg).expect("state");
    (state.clone(), build_router(state))
}

pub async fn send(app: &Router, req: Request<Body>) -> Reply {
    let res = app.clone().oneshot(req).await.expect("infallible");
    let status = res.status();
    let headers = res.headers().clone();
    let body = to_bytes(res.into_body(), usize::MAX).await.expect("body").to_vec();
    Reply { status, headers, body }
}

pub async fn get(app: &Router, uri: &str) -> Reply {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_with(app: &Router, uri: &str, name: &str, value: &str) -> Reply {
    send(app, Request::get(uri).header(name, value).body(Body::empty()).unwrap()).await
}

pub async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> Reply {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

pub async fn delete(app: &Router, uri: &str) -> Reply {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

/// Shape shared by every envelope response.
pub fn assert_envelope(v: &Value, success: bool, endpoint: &str) {
    assert_eq!(v["success"], success, "envelope: {v}");
    assert_eq!(v["endpoint"], endpoint);
    assert!(v["message"].is_string());
    assert!(v.get("data").is_some());
    let ts = v["timestamp"].as_str().expect("timestamp");
    assert!(ts.ends_with('Z') && ts.contains('T'), "timestamp {ts}");
}
