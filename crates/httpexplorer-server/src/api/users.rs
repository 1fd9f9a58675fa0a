use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use httpexplorer_core::model::User;
use httpexplorer_core::ResponseEnvelope;

use crate::app_state::AppState;
use crate::extract::ValidJson;

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    Json(ResponseEnvelope::ok("Lista utenti ottenuta", state.users().list(), "/utenti"))
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(user): ValidJson<User>,
) -> impl IntoResponse {
    let stored = state.users().create(user);
    (
        StatusCode::CREATED,
        Json(ResponseEnvelope::ok("Utente creato con successo", stored, "/utenti")),
    )
}
