//! `/test/*`: endpoints that each demonstrate one HTTP mechanism.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    extract::{ConnectInfo, Query, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde_json::{json, Value};

use httpexplorer_core::envelope::now_iso8601;
use httpexplorer_core::status;
use httpexplorer_core::{ExplorerError, Representation, ResponseEnvelope};

use crate::api::introspect::header_map;
use crate::api::{accept, DelayPath, FormatQuery, StatusPath};
use crate::app_state::AppState;
use crate::error::{ApiResult, AtEndpoint};
use crate::extract::{ValidPath, ValidQuery};

/// Entity tag of the cache demo resource.
pub const CACHE_ETAG: &str = "\"abc123def456\"";
const CACHE_LAST_MODIFIED: &str = "Wed, 21 Oct 2015 07:28:00 GMT";
const CACHE_CONTROL: &str = "public, max-age=3600";

/// Codes >= 400 surface as error envelopes, lower ones are answered literally.
pub async fn status_code(
    uri: Uri,
    ValidPath(StatusPath { status_code }): ValidPath<StatusPath>,
) -> ApiResult<Response> {
    let outcome = status::simulate(status_code).at(uri.path())?;
    let code = StatusCode::from_u16(status_code).unwrap_or(StatusCode::OK);

    let body = ResponseEnvelope::ok(
        outcome.message.clone(),
        json!({ "status_code_richiesto": outcome.status_code_richiesto }),
        uri.path(),
    );
    Ok((code, Json(body)).into_response())
}

pub async fn delay(
    uri: Uri,
    ValidPath(DelayPath { secondi }): ValidPath<DelayPath>,
) -> ApiResult<impl IntoResponse> {
    // NaN slips through the range check.
    let pause = Duration::try_from_secs_f64(secondi)
        .map_err(|_| ExplorerError::invalid("secondi", "deve essere tra 0.1 e 10"))
        .at(uri.path())?;
    tokio::time::sleep(pause).await;

    Ok(Json(ResponseEnvelope::ok(
        format!("Risposta dopo {secondi} secondi di delay"),
        json!({ "delay_richiesto": secondi }),
        uri.path(),
    )))
}

pub async fn custom_headers() -> Response {
    let added = ["X-Custom-Header", "X-API-Version", "X-Response-Time", "X-Server-Name"];
    let mut res = Json(ResponseEnvelope::ok(
        "Risposta con headers personalizzati",
        json!({ "headers_aggiunti": added }),
        "/test/headers-personalizzati",
    ))
    .into_response();

    let headers = res.headers_mut();
    headers.insert(
        HeaderName::from_static("x-custom-header"),
        HeaderValue::from_static("Valore-Personalizzato"),
    );
    headers.insert(HeaderName::from_static("x-api-version"), HeaderValue::from_static("1.0.0"));
    if let Ok(now) = HeaderValue::from_str(&now_iso8601()) {
        headers.insert(HeaderName::from_static("x-response-time"), now);
    }
    headers.insert(HeaderName::from_static("x-server-name"), HeaderValue::from_static("HTTP-Explorer"));
    res
}

fn etag_matches(if_none_match: &str) -> bool {
    if_none_match
        .split(',')
        .map(|t| t.trim().trim_start_matches("W/"))
        .any(|t| t == "*" || t == CACHE_ETAG)
}

/// Cacheable resource; a matching `If-None-Match` gets `304 Not Modified`.
pub async fn cache(headers: HeaderMap) -> Response {
    let cache_headers = [
        (header::CACHE_CONTROL, CACHE_CONTROL),
        (header::ETAG, CACHE_ETAG),
        (header::LAST_MODIFIED, CACHE_LAST_MODIFIED),
    ];

    let revalidated = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(etag_matches);
    if revalidated {
        return (StatusCode::NOT_MODIFIED, cache_headers).into_response();
    }

    (
        cache_headers,
        Json(ResponseEnvelope::ok(
            "Risposta con headers di cache",
            json!({ "cache_info": "Questa risposta può essere cachata per 1 ora" }),
            "/test/cache",
        )),
    )
        .into_response()
}

pub async fn cors_preflight() -> impl IntoResponse {
    (
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, PUT, DELETE, PATCH"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "*"),
        ],
        Json(json!({
            "message": "CORS preflight riuscito",
            "metodi_permessi": ["GET", "POST", "PUT", "DELETE", "PATCH"],
        })),
    )
}

pub async fn head() -> impl IntoResponse {
    Json(json!({ "message": "Questo body non sarà mai inviato con HEAD" }))
}

/// `?formato=html|json` overrides the `Accept` header.
pub async fn content_negotiation(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidQuery(query): ValidQuery<FormatQuery>,
) -> ApiResult<Response> {
    let accept = accept(&headers);
    let decision = Representation::negotiate_with_override(accept, query.formato.as_deref());

    if decision == Representation::Html {
        let html = state.pages().negotiation_demo(accept).at("/test/content-negotiation")?;
        return Ok(Html(html).into_response());
    }

    let data = json!({
        "titolo": "Content Negotiation Demo",
        "descrizione": "Questo endpoint dimostra come HTTP permette al client di specificare il formato preferito",
        "meccanismo": "Header Accept della richiesta",
        "formati_supportati": ["text/html", "application/json"],
        "esempi": {
            "browser": "Apri questo URL nel browser: ricevi HTML",
            "curl_json": "curl http://localhost:8000/test/content-negotiation",
            "curl_html": "curl -H 'Accept: text/html' http://localhost:8000/test/content-negotiation",
            "forzare_json": "/test/content-negotiation?formato=json",
            "forzare_html": "/test/content-negotiation?formato=html"
        },
        "header_ricevuto": accept.unwrap_or("Nessun header Accept"),
        "decisione": decision.label(),
    });
    Ok(Json(ResponseEnvelope::ok(
        "Content Negotiation Demo - Formato JSON",
        data,
        "/test/content-negotiation",
    ))
    .into_response())
}

/// Mirrors the request back. A body that is not JSON yields `body_json: null`.
pub async fn echo(
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
    query: Option<Query<BTreeMap<String, String>>>,
    body: Bytes,
) -> impl IntoResponse {
    let url = match headers.get(header::HOST).and_then(|h| h.to_str().ok()) {
        Some(host) if uri.host().is_none() => format!("http://{host}{uri}"),
        _ => uri.to_string(),
    };
    let body_raw = (!body.is_empty()).then(|| String::from_utf8_lossy(&body).into_owned());
    let body_json = if body.is_empty() {
        None
    } else {
        serde_json::from_slice::<Value>(&body).ok()
    };

    let data = json!({
        "metodo": method.as_str(),
        "url": url,
        "headers": header_map(&headers),
        "query_params": query.map(|Query(q)| q).unwrap_or_default(),
        "body_raw": body_raw,
        "body_json": body_json,
        "client_ip": peer.map(|ConnectInfo(addr)| addr.ip().to_string()),
    });
    Json(ResponseEnvelope::ok("Echo della richiesta ricevuta", data, "/test/echo"))
}
