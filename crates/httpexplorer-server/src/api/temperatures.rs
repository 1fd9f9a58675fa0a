//! `/temperature`: readings pushed by simulated IoT sensors.

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use httpexplorer_core::envelope::now_iso8601;
use httpexplorer_core::model::{NewReading, SensorSummary, TemperatureQuery};
use httpexplorer_core::ResponseEnvelope;

use crate::api::{IdPath, SensorPath};
use crate::app_state::AppState;
use crate::error::{ApiResult, AtEndpoint};
use crate::extract::{ValidJson, ValidPath, ValidQuery};

pub async fn list(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<TemperatureQuery>,
) -> impl IntoResponse {
    let listing = query.run(state.temperatures().list());
    let message = format!("Trovate {} letture di temperatura", listing.temperature.len());
    Json(ResponseEnvelope::ok(message, listing, "/temperature"))
}

/// The server stamps the reading with the ingestion instant.
pub async fn create(
    State(state): State<AppState>,
    ValidJson(reading): ValidJson<NewReading>,
) -> impl IntoResponse {
    let stored = state.temperatures().create(reading.into_reading(now_iso8601()));
    let location = format!("/temperature/{}", stored.id.unwrap_or_default());
    tracing::debug!(sensore = %stored.sensore, valore = stored.valore, "reading ingested");

    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ResponseEnvelope::ok("Temperatura registrata con successo", stored, "/temperature")),
    )
}

pub async fn get(
    State(state): State<AppState>,
    uri: Uri,
    ValidPath(IdPath { id }): ValidPath<IdPath>,
) -> ApiResult<impl IntoResponse> {
    let reading = state.temperatures().get(id).at(uri.path())?;
    Ok(Json(ResponseEnvelope::ok("Lettura temperatura trovata", reading, uri.path())))
}

pub async fn delete(
    State(state): State<AppState>,
    uri: Uri,
    ValidPath(IdPath { id }): ValidPath<IdPath>,
) -> ApiResult<impl IntoResponse> {
    let removed = state.temperatures().delete(id).at(uri.path())?;
    Ok(Json(ResponseEnvelope::ok(
        "Lettura temperatura eliminata con successo",
        json!({ "temperatura_eliminata": removed }),
        uri.path(),
    )))
}

pub async fn by_sensor(
    State(state): State<AppState>,
    uri: Uri,
    ValidPath(SensorPath { nome }): ValidPath<SensorPath>,
) -> ApiResult<impl IntoResponse> {
    let summary = SensorSummary::for_sensor(state.temperatures().list(), &nome).at(uri.path())?;
    Ok(Json(ResponseEnvelope::ok(format!("Letture del sensore {nome}"), summary, uri.path())))
}
