//! Axum router wiring.
//!
//! Layer order, outermost first: tracing span, request pipeline (counters,
//! timing headers), CORS. The pipeline sits outside CORS so preflight answers
//! are counted and stamped as well.
//!
//! `CorsLayer` answers every `OPTIONS` request itself, so the `/test/cors`
//! demo is merged in after it and sets its own CORS headers.

use axum::{
    middleware,
    routing::{get, head, options, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{api, app_state::AppState, ops, pipeline};

pub fn build_router(state: AppState) -> Router {
    let mut routes = Router::new()
        .route("/", get(api::home::homepage))
        .route("/statistiche", get(api::home::statistics))
        .route("/robots.txt", get(api::home::robots_txt))
        // products
        .route("/prodotti", get(api::products::list).post(api::products::create))
        .route(
            "/prodotti/:id",
            get(api::products::get)
                .put(api::products::replace)
                .patch(api::products::patch)
                .delete(api::products::delete),
        )
        // users
        .route("/utenti", get(api::users::list).post(api::users::create))
        // temperatures
        .route("/temperature", get(api::temperatures::list).post(api::temperatures::create))
        .route(
            "/temperature/:id",
            get(api::temperatures::get).delete(api::temperatures::delete),
        )
        .route("/temperature/sensore/:nome", get(api::temperatures::by_sensor))
        // HTTP mechanics
        .route("/test/status/:status_code", get(api::testing::status_code))
        .route("/test/delay/:secondi", get(api::testing::delay))
        .route("/test/headers-personalizzati", get(api::testing::custom_headers))
        .route("/test/cache", get(api::testing::cache))
        .route("/test/head", head(api::testing::head))
        .route("/test/content-negotiation", get(api::testing::content_negotiation))
        .route("/test/echo", post(api::testing::echo))
        // introspection
        .route("/headers", get(api::introspect::headers))
        .route("/user-agent", get(api::introspect::user_agent))
        .route("/test/ip", get(api::introspect::client_ip))
        // ops
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .fallback(api::home::not_found);

    if state.cfg().cors.permissive {
        routes = routes.layer(CorsLayer::permissive());
    }

    routes
        .route("/test/cors", options(api::testing::cors_preflight))
        .layer(middleware::from_fn_with_state(state.clone(), pipeline::track))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
