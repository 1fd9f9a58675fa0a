#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{app, assert_envelope, delete, get, send_json};

fn approx(v: &serde_json::Value, expected: f64) -> bool {
    (v.as_f64().unwrap() - expected).abs() < 1e-9
}

#[tokio::test]
async fn users_list_and_create() {
    let (_, app) = app();
    let v = get(&app, "/utenti").await.json();
    assert_envelope(&v, true, "/utenti");
    assert_eq!(v["data"][0]["nome"], "Mario Rossi");
    assert_eq!(v["data"].as_array().unwrap().len(), 2);

    let r = send_json(
        &app,
        Method::POST,
        "/utenti",
        json!({ "nome": "Luca Verdi", "email": "luca@email.com" }),
    )
    .await;
    assert_eq!(r.status, StatusCode::CREATED);
    let v = r.json();
    assert_eq!(v["data"]["id"], 3);
    assert!(v["data"]["eta"].is_null());
}

#[tokio::test]
async fn users_age_is_bounded() {
    let (_, app) = app();
    let r = send_json(
        &app,
        Method::POST,
        "/utenti",
        json!({ "nome": "Matusalemme", "email": "m@email.com", "eta": 130 }),
    )
    .await;
    assert_eq!(r.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(r.json()["data"]["details"][0]["field"], "eta");
}

#[tokio::test]
async fn temperature_statistics_ignore_filters() {
    let (_, app) = app();
    let v = get(&app, "/temperature?sensore=SENSORE_LAB").await.json();
    let d = &v["data"];
    assert_eq!(d["temperature"].as_array().unwrap().len(), 1);
    assert_eq!(d["temperature"][0]["sensore"], "sensore_lab");
    assert_eq!(d["statistiche"]["totale_letture"], 4);
    assert_eq!(d["statistiche"]["sensori_attivi"], 3);
    assert!(approx(&d["statistiche"]["temperatura_media"], 16.95));
    assert_eq!(d["filtri_applicati"]["sensore"], "SENSORE_LAB");
    assert_eq!(v["message"], "Trovate 1 letture di temperatura");
}

#[tokio::test]
async fn temperatures_newest_first_and_limited() {
    let (_, app) = app();
    let v = get(&app, "/temperature?limite=2").await.json();
    let ids: Vec<u64> = v["data"]["temperature"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3]);

    let v = get(&app, "/temperature?posizione=aula").await.json();
    assert_eq!(v["data"]["temperature"].as_array().unwrap().len(), 2);

    assert_eq!(get(&app, "/temperature?limite=0").await.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn ingested_reading_is_stamped_and_newest() {
    let (_, app) = app();
    let r = send_json(
        &app,
        Method::POST,
        "/temperature",
        json!({ "valore": -3.5, "sensore": "sensore_tetto" }),
    )
    .await;
    assert_eq!(r.status, StatusCode::CREATED);
    assert_eq!(r.header("location"), Some("/temperature/5"));
    let v = r.json();
    assert_eq!(v["data"]["unita"], "celsius");
    assert!(v["data"]["timestamp"].as_str().unwrap().ends_with('Z'));

    let v = get(&app, "/temperature").await.json();
    assert_eq!(v["data"]["temperature"][0]["id"], 5);
    assert_eq!(v["data"]["statistiche"]["sensori_attivi"], 4);

    let r = send_json(&app, Method::POST, "/temperature", json!({ "valore": 1.0, "sensore": "" })).await;
    assert_eq!(r.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn long_sensor_names_are_accepted() {
    let (_, app) = app();
    let name = "sensore_".repeat(20);
    let r = send_json(&app, Method::POST, "/temperature", json!({ "valore": 19.0, "sensore": name })).await;
    assert_eq!(r.status, StatusCode::CREATED);
    assert_eq!(r.json()["data"]["sensore"], name);
}

#[tokio::test]
async fn reading_fetch_and_delete() {
    let (_, app) = app();
    let v = get(&app, "/temperature/1").await.json();
    assert_envelope(&v, true, "/temperature/1");
    assert_eq!(v["data"]["valore"], 21.5);

    let v = delete(&app, "/temperature/1").await.json();
    assert_eq!(v["data"]["temperatura_eliminata"]["id"], 1);

    let r = get(&app, "/temperature/1").await;
    assert_eq!(r.status, StatusCode::NOT_FOUND);
    assert_eq!(r.json()["message"], "Lettura temperatura con ID 1 non trovata");
}

#[tokio::test]
async fn sensor_summary() {
    let (_, app) = app();
    let v = get(&app, "/temperature/sensore/SENSORE_AULA_1").await.json();
    assert_envelope(&v, true, "/temperature/sensore/SENSORE_AULA_1");
    let s = &v["data"]["statistiche"];
    assert_eq!(s["numero_letture"], 2);
    assert!(approx(&s["temperatura_minima"], 21.5));
    assert!(approx(&s["temperatura_massima"], 22.3));
    assert!(approx(&s["temperatura_media"], 21.9));
    assert_eq!(s["ultima_lettura"], "2024-01-15T10:00:00.000000Z");
    assert_eq!(v["data"]["letture"][0]["id"], 2);

    let r = get(&app, "/temperature/sensore/sensore_fantasma").await;
    assert_eq!(r.status, StatusCode::NOT_FOUND);
    assert_eq!(r.json()["message"], "Nessuna lettura trovata per il sensore sensore_fantasma");
}
