#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};

use common::{app, assert_envelope, get, get_with, send};

#[tokio::test]
async fn status_404_is_an_error_envelope() {
    let (_, app) = app();
    let r = get(&app, "/test/status/404").await;
    assert_eq!(r.status, StatusCode::NOT_FOUND);
    let v = r.json();
    assert_envelope(&v, false, "/test/status/404");
    assert_eq!(v["message"], "Not Found - Risorsa non trovata");
    assert_eq!(v["data"]["code"], "STATUS_TEST");
}

#[tokio::test]
async fn status_200_echoes_the_code() {
    let (_, app) = app();
    let r = get(&app, "/test/status/200").await;
    assert_eq!(r.status, StatusCode::OK);
    let v = r.json();
    assert_envelope(&v, true, "/test/status/200");
    assert_eq!(v["message"], "OK - Richiesta riuscita");
    assert_eq!(v["data"]["status_code_richiesto"], 200);
}

#[tokio::test]
async fn status_literal_codes_and_fallback_phrase() {
    let (_, app) = app();
    let r = get(&app, "/test/status/302").await;
    assert_eq!(r.status, StatusCode::FOUND);
    assert_eq!(r.json()["message"], "Status code 302");

    let r = get(&app, "/test/status/418").await;
    assert_eq!(r.status.as_u16(), 418);
    assert_eq!(r.json()["message"], "Status code 418");

    let r = get(&app, "/test/status/503").await;
    assert_eq!(r.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(r.json()["message"], "Service Unavailable - Servizio non disponibile");
}

#[tokio::test]
async fn status_out_of_range_is_422() {
    let (_, app) = app();
    assert_eq!(get(&app, "/test/status/99").await.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(get(&app, "/test/status/600").await.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delay_bounds() {
    let (_, app) = app();
    assert_eq!(get(&app, "/test/delay/0.05").await.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(get(&app, "/test/delay/11").await.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(get(&app, "/test/delay/NaN").await.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delay_waits_then_answers() {
    let (_, app) = app();
    let started = std::time::Instant::now();
    let r = get(&app, "/test/delay/0.1").await;
    assert!(started.elapsed() >= std::time::Duration::from_millis(100));
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.json()["data"]["delay_richiesto"], 0.1);
}

#[tokio::test]
async fn custom_headers_are_attached() {
    let (_, app) = app();
    let r = get(&app, "/test/headers-personalizzati").await;
    assert_eq!(r.header("x-custom-header"), Some("Valore-Personalizzato"));
    assert_eq!(r.header("x-api-version"), Some("1.0.0"));
    assert_eq!(r.header("x-server-name"), Some("HTTP-Explorer"));
    assert!(r.header("x-response-time").is_some());
}

#[tokio::test]
async fn cache_headers_and_conditional_request() {
    let (_, app) = app();
    let r = get(&app, "/test/cache").await;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.header("cache-control"), Some("public, max-age=3600"));
    assert_eq!(r.header("etag"), Some("\"abc123def456\""));
    assert_eq!(r.header("last-modified"), Some("Wed, 21 Oct 2015 07:28:00 GMT"));

    let r = get_with(&app, "/test/cache", "if-none-match", "\"abc123def456\"").await;
    assert_eq!(r.status, StatusCode::NOT_MODIFIED);
    assert!(r.body.is_empty());
    assert_eq!(r.header("etag"), Some("\"abc123def456\""));

    let r = get_with(&app, "/test/cache", "if-none-match", "\"stale\"").await;
    assert_eq!(r.status, StatusCode::OK);
}

#[tokio::test]
async fn options_and_head_demos() {
    let (_, app) = app();
    let r = send(&app, Request::options("/test/cors").body(Body::empty()).unwrap()).await;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.json()["metodi_permessi"][4], "PATCH");
    assert_eq!(r.header("access-control-allow-origin"), Some("*"));

    let r = send(&app, Request::head("/test/head").body(Body::empty()).unwrap()).await;
    assert_eq!(r.status, StatusCode::OK);
    assert!(r.body.is_empty());
}

#[tokio::test]
async fn cors_headers_for_cross_origin_requests() {
    let (_, app) = app();
    let r = get_with(&app, "/prodotti", "origin", "http://example.org").await;
    assert_eq!(r.header("access-control-allow-origin"), Some("*"));
}

#[tokio::test]
async fn content_negotiation_demo() {
    let (_, app) = app();

    let v = get(&app, "/test/content-negotiation").await.json();
    assert_eq!(v["data"]["decisione"], "JSON");
    assert_eq!(v["data"]["header_ricevuto"], "Nessun header Accept");

    let r = get_with(&app, "/test/content-negotiation", "accept", "text/html").await;
    assert!(r.text().contains("Hai ricevuto HTML!"));

    let r = get(&app, "/test/content-negotiation?formato=html").await;
    assert!(r.header("content-type").unwrap().starts_with("text/html"));

    let v = get_with(&app, "/test/content-negotiation?formato=json", "accept", "text/html")
        .await
        .json();
    assert_eq!(v["data"]["decisione"], "JSON");
}

#[tokio::test]
async fn echo_mirrors_the_request() {
    let (_, app) = app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/test/echo?corso=reti")
        .header("host", "lab.local")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"ciao": 1}"#))
        .unwrap();
    let v = send(&app, req).await.json();
    assert_envelope(&v, true, "/test/echo");
    let d = &v["data"];
    assert_eq!(d["metodo"], "POST");
    assert_eq!(d["url"], "http://lab.local/test/echo?corso=reti");
    assert_eq!(d["query_params"]["corso"], "reti");
    assert_eq!(d["headers"]["host"], "lab.local");
    assert_eq!(d["body_raw"], r#"{"ciao": 1}"#);
    assert_eq!(d["body_json"]["ciao"], 1);
    assert!(d["client_ip"].is_null());
}

#[tokio::test]
async fn echo_degrades_malformed_json_to_null() {
    let (_, app) = app();
    let req = Request::post("/test/echo").body(Body::from("non è json")).unwrap();
    let r = send(&app, req).await;
    assert_eq!(r.status, StatusCode::OK);
    let d = &r.json()["data"];
    assert_eq!(d["body_raw"], "non è json");
    assert!(d["body_json"].is_null());

    let d = &send(&app, Request::post("/test/echo").body(Body::empty()).unwrap()).await.json()["data"];
    assert!(d["body_raw"].is_null());
}

#[tokio::test]
async fn user_agent_is_required() {
    let (_, app) = app();
    let r = get(&app, "/user-agent").await;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);
    let v = r.json();
    assert_envelope(&v, false, "/user-agent");
    assert_eq!(v["message"], "Header User-Agent mancante");
    assert_eq!(v["data"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn user_agent_analysis() {
    let (_, app) = app();
    let ua = "Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0";
    let v = get_with(&app, "/user-agent", "user-agent", ua).await.json();
    assert_eq!(v["data"]["browser_rilevato"], "Firefox");
    assert_eq!(v["data"]["sistema_operativo"], "Linux");
    assert_eq!(v["data"]["contiene_mobile"], false);
}

#[tokio::test]
async fn client_ip_prefers_proxy_headers() {
    let (_, app) = app();
    let req = Request::get("/test/ip")
        .header("x-forwarded-for", "203.0.113.7")
        .header("x-real-ip", "198.51.100.1")
        .body(Body::empty())
        .unwrap();
    let v = send(&app, req).await.json();
    assert_eq!(v["ip_rilevato"], "203.0.113.7");
    assert_eq!(v["dettagli"]["x_real_ip"], "198.51.100.1");

    let v = get_with(&app, "/test/ip", "x-real-ip", "198.51.100.1").await.json();
    assert_eq!(v["ip_rilevato"], "198.51.100.1");

    let v = get(&app, "/test/ip").await.json();
    assert!(v["ip_rilevato"].is_null());
}

#[tokio::test]
async fn blank_forwarded_for_falls_through() {
    let (_, app) = app();
    let req = Request::get("/test/ip")
        .header("x-forwarded-for", "")
        .header("x-real-ip", "198.51.100.1")
        .body(Body::empty())
        .unwrap();
    let v = send(&app, req).await.json();
    assert_eq!(v["ip_rilevato"], "198.51.100.1");
    assert_eq!(v["dettagli"]["x_forwarded_for"], "");

    let v = get_with(&app, "/test/ip", "x-real-ip", " ").await.json();
    assert!(v["ip_rilevato"].is_null());
}

#[tokio::test]
async fn headers_are_returned_raw() {
    let (_, app) = app();
    let v = get_with(&app, "/headers", "x-corso", "telecomunicazioni").await.json();
    assert_eq!(v["x-corso"], "telecomunicazioni");
    assert!(v.get("success").is_none());
}

#[tokio::test]
async fn homepage_robots_and_fallback() {
    let (_, app) = app();
    let v = get(&app, "/").await.json();
    assert_envelope(&v, true, "/");
    assert!(v["data"]["endpoints_principali"]["/prodotti"].is_string());

    let r = get_with(&app, "/", "accept", "text/html").await;
    assert!(r.text().contains("HTTP Explorer"));

    let r = get(&app, "/robots.txt").await;
    assert!(r.header("content-type").unwrap().starts_with("text/plain"));
    assert!(r.text().contains("Disallow: /test/"));

    let r = get(&app, "/non-esiste").await;
    assert_eq!(r.status, StatusCode::NOT_FOUND);
    assert_envelope(&r.json(), false, "/non-esiste");
}
