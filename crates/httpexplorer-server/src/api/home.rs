use axum::{
    extract::State,
    http::{header, HeaderMap, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;

use httpexplorer_core::{ExplorerError, Representation, ResponseEnvelope};

use crate::api::accept;
use crate::app_state::AppState;
use crate::error::{ApiError, ApiResult, AtEndpoint};

const ROBOTS_TXT: &str = "User-agent: *\nAllow: /\nDisallow: /test/\n\n# HTTP Explorer - Server didattico\n# Crawl-delay: 1\n";

/// `GET /`: HTML landing page or a JSON overview.
pub async fn homepage(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Response> {
    if Representation::negotiate(accept(&headers)) == Representation::Html {
        return Ok(Html(state.pages().homepage().at("/")?).into_response());
    }

    let data = json!({
        "content_negotiation": {
            "descrizione": "Questo endpoint supporta content negotiation",
            "formati_supportati": ["application/json", "text/html"],
            "header_utilizzato": "Accept",
            "esempio_html": "curl -H 'Accept: text/html' http://localhost:8000/",
            "esempio_json": "curl -H 'Accept: application/json' http://localhost:8000/"
        },
        "funzionalita": [
            "Gestione completa di tutti i metodi HTTP",
            "Content Negotiation (HTML + JSON)",
            "Esempi di API RESTful",
            "Testing di status codes",
            "Gestione headers personalizzati"
        ],
        "endpoints_principali": {
            "/prodotti": "API per gestione prodotti (e-commerce) - Supporta HTML + JSON",
            "/utenti": "API per gestione utenti",
            "/temperature": "Letture di temperatura da sensori IoT simulati",
            "/test": "Endpoint per testing vari scenari HTTP",
            "/statistiche": "Contatori delle richieste ricevute"
        }
    });
    Ok(Json(ResponseEnvelope::ok(
        "Benvenuto nell'HTTP Explorer! Server didattico per esplorare il protocollo HTTP.",
        data,
        "/",
    ))
    .into_response())
}

/// `GET /statistiche`
pub async fn statistics(State(state): State<AppState>) -> impl IntoResponse {
    Json(ResponseEnvelope::ok(
        "Statistiche aggiornate del server",
        state.counters().snapshot(),
        "/statistiche",
    ))
}

pub async fn robots_txt() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], ROBOTS_TXT)
}

/// Unknown routes get the error envelope too.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::new(
        ExplorerError::NotFound(format!("Endpoint {} non trovato", uri.path())),
        uri.path(),
    )
}
