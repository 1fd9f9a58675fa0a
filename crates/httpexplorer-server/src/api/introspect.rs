//! Request introspection: headers, user agent, client address.

use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::{
    extract::ConnectInfo,
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use httpexplorer_core::user_agent::analyze;
use httpexplorer_core::{ExplorerError, ResponseEnvelope};

use crate::error::{ApiError, ApiResult};

/// Header name → value; repeated headers are joined with ", ".
pub fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut out: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        out.entry(name.as_str().to_string())
            .and_modify(|v| {
                v.push_str(", ");
                v.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    out
}

/// `GET /headers`: the raw map, without the envelope.
pub async fn headers(headers: HeaderMap) -> impl IntoResponse {
    Json(header_map(&headers))
}

pub async fn user_agent(headers: HeaderMap) -> ApiResult<impl IntoResponse> {
    let ua = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            ApiError::new(
                ExplorerError::BadRequest("Header User-Agent mancante".into()),
                "/user-agent",
            )
        })?;

    Ok(Json(ResponseEnvelope::ok(
        "Analisi User-Agent completata",
        analyze(ua),
        "/user-agent",
    )))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Proxy headers take precedence over the socket peer; blank ones are skipped.
pub async fn client_ip(
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
) -> impl IntoResponse {
    let forwarded = header_str(&headers, "x-forwarded-for");
    let real_ip = header_str(&headers, "x-real-ip");
    let client_host = peer.map(|ConnectInfo(addr)| addr.ip().to_string());

    let present = |v: &&str| !v.trim().is_empty();
    let detected = forwarded
        .filter(present)
        .or_else(|| real_ip.filter(present))
        .map(str::to_string)
        .or_else(|| client_host.clone());

    Json(json!({
        "ip_rilevato": detected,
        "dettagli": {
            "client_host": client_host,
            "x_forwarded_for": forwarded,
            "x_real_ip": real_ip,
        }
    }))
}
