//! `/prodotti`: the dual-format CRUD resource.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;

use httpexplorer_core::model::{Product, ProductPatch, ProductQuery};
use httpexplorer_core::{Representation, ResponseEnvelope};

use crate::api::{accept, IdPath};
use crate::app_state::AppState;
use crate::error::{ApiResult, AtEndpoint};
use crate::extract::{ValidJson, ValidPath, ValidQuery};

pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    ValidQuery(query): ValidQuery<ProductQuery>,
) -> ApiResult<Response> {
    let page = query.run(state.products().list());

    if Representation::negotiate(accept(&headers)) == Representation::Html {
        let html = state.pages().product_list(&page.prodotti, &query).at(uri.path())?;
        return Ok(Html(html).into_response());
    }

    let message = format!(
        "Trovati {} prodotti, mostrati {}",
        page.paginazione.totale_risultati,
        page.prodotti.len()
    );
    Ok(Json(ResponseEnvelope::ok(message, page, uri.path())).into_response())
}

pub async fn get(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    ValidPath(IdPath { id }): ValidPath<IdPath>,
) -> ApiResult<Response> {
    let product = state.products().get(id).at(uri.path())?;

    if Representation::negotiate(accept(&headers)) == Representation::Html {
        let html = state.pages().product_detail(&product).at(uri.path())?;
        return Ok(Html(html).into_response());
    }
    Ok(Json(ResponseEnvelope::ok("Prodotto trovato", product, uri.path())).into_response())
}

/// `201 Created` with a `Location` pointing at the new record.
pub async fn create(
    State(state): State<AppState>,
    ValidJson(product): ValidJson<Product>,
) -> Response {
    let stored = state.products().create(product);
    let location = format!("/prodotti/{}", stored.id.unwrap_or_default());
    tracing::info!(%location, "product created");

    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ResponseEnvelope::ok("Prodotto creato con successo", stored, "/prodotti")),
    )
        .into_response()
}

pub async fn replace(
    State(state): State<AppState>,
    uri: Uri,
    ValidPath(IdPath { id }): ValidPath<IdPath>,
    ValidJson(product): ValidJson<Product>,
) -> ApiResult<impl IntoResponse> {
    let stored = state.products().replace(id, product).at(uri.path())?;
    Ok(Json(ResponseEnvelope::ok("Prodotto aggiornato completamente", stored, uri.path())))
}

pub async fn patch(
    State(state): State<AppState>,
    uri: Uri,
    ValidPath(IdPath { id }): ValidPath<IdPath>,
    ValidJson(changes): ValidJson<ProductPatch>,
) -> ApiResult<impl IntoResponse> {
    let fields = changes.changed_fields();
    let updated = state
        .products()
        .patch(id, |p| changes.apply_to(p))
        .at(uri.path())?;

    let message = format!("Prodotto aggiornato parzialmente. Campi modificati: {fields:?}");
    Ok(Json(ResponseEnvelope::ok(message, updated, uri.path())))
}

pub async fn delete(
    State(state): State<AppState>,
    uri: Uri,
    ValidPath(IdPath { id }): ValidPath<IdPath>,
) -> ApiResult<impl IntoResponse> {
    let removed = state.products().delete(id).at(uri.path())?;
    Ok(Json(ResponseEnvelope::ok(
        "Prodotto eliminato con successo",
        json!({ "prodotto_eliminato": removed }),
        uri.path(),
    )))
}
