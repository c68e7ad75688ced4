//! Review cycle integration tests.

use axum::http::StatusCode;
use chrono::{Datelike, Utc};
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_active_cycle_is_seeded_current_year() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app.request("GET", "/api/ciclos/ativo", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["ano"], Utc::now().year());
    assert_eq!(response.body["status"], "em_andamento");
}

#[tokio::test]
async fn test_no_active_cycle_is_not_found() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let active = app.request("GET", "/api/ciclos/ativo", None, Some(&token)).await;
    let id = active.body["id"].as_i64().expect("seeded cycle id");

    let closed = app
        .request(
            "PUT",
            &format!("/api/ciclos/{id}"),
            Some(json!({ "status": "finalizado" })),
            Some(&token),
        )
        .await;
    assert_eq!(closed.status, StatusCode::OK);
    assert_eq!(closed.body["status"], "finalizado");

    let response = app.request("GET", "/api/ciclos/ativo", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Nenhum ciclo ativo encontrado");
}

#[tokio::test]
async fn test_create_cycle_defaults_to_planning() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/ciclos",
            Some(json!({
                "ano": 2022,
                "data_inicio": "2022-01-01",
                "data_fim": "2022-12-31",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["ano"], 2022);
    assert_eq!(response.body["status"], "planejamento");
    assert!(response.body["descricao"].is_null());

    let fetched = app
        .request(
            "GET",
            &format!("/api/ciclos/{}", response.body["id"]),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["ano"], 2022);
}

#[tokio::test]
async fn test_duplicate_year_conflicts() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    app.create_cycle(&token, 2023).await;

    let response = app
        .request(
            "POST",
            "/api/ciclos",
            Some(json!({
                "ano": 2023,
                "data_inicio": "2023-02-01",
                "data_fim": "2023-11-30",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_invalid_cycles_are_rejected() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let inverted = app
        .request(
            "POST",
            "/api/ciclos",
            Some(json!({
                "ano": 2021,
                "data_inicio": "2021-12-31",
                "data_fim": "2021-01-01",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(inverted.status, StatusCode::UNPROCESSABLE_ENTITY);

    let out_of_range = app
        .request(
            "POST",
            "/api/ciclos",
            Some(json!({
                "ano": 1999,
                "data_inicio": "1999-01-01",
                "data_fim": "1999-12-31",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(out_of_range.status, StatusCode::UNPROCESSABLE_ENTITY);

    let id = app.create_cycle(&token, 2021).await;
    let inverted_update = app
        .request(
            "PUT",
            &format!("/api/ciclos/{id}"),
            Some(json!({ "data_fim": "2020-06-30" })),
            Some(&token),
        )
        .await;
    assert_eq!(inverted_update.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_cycles() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    app.create_cycle(&token, 2021).await;
    app.create_cycle(&token, 2022).await;

    let response = app.request("GET", "/api/ciclos", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_delete_cycle() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let free = app.create_cycle(&token, 2021).await;
    let referenced = app.create_cycle(&token, 2022).await;

    let created = app
        .create_behavioral(&token, referenced, "12345", "admin", [3, 3, 3, 3, 3])
        .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let blocked = app
        .request("DELETE", &format!("/api/ciclos/{referenced}"), None, Some(&token))
        .await;
    assert_eq!(blocked.status, StatusCode::CONFLICT);

    let deleted = app
        .request("DELETE", &format!("/api/ciclos/{free}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Ciclo deletado com sucesso");
    assert_eq!(deleted.body["ciclo_id"], free);

    let gone = app
        .request("GET", &format!("/api/ciclos/{free}"), None, Some(&token))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}
