//! Goal integration tests.

use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{SAMPLE_PASSWORD, TestApp};

async fn create_goal(app: &TestApp, token: &str, ciclo: i64, colaborador: &str) -> Value {
    let response = app
        .request(
            "POST",
            "/api/metas",
            Some(json!({
                "ciclo_id": ciclo,
                "colaborador_matricula": colaborador,
                "titulo": "Reduzir bugs em produção",
                "descricao": "Meta trimestral",
                "peso": 30,
                "data_limite": "2022-12-31",
            })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body
}

#[tokio::test]
async fn test_goal_lifecycle() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let ciclo = app.create_cycle(&token, 2022).await;

    let goal = create_goal(&app, &token, ciclo, "12345").await;
    assert_eq!(goal["peso"], 30);
    assert!(goal["resultado_alcancado"].is_null());
    let id = goal["id"].as_i64().expect("goal id");

    let renamed = app
        .request(
            "PUT",
            &format!("/api/metas/{id}"),
            Some(json!({ "titulo": "Zerar bugs críticos" })),
            Some(&token),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.body["titulo"], "Zerar bugs críticos");
    assert_eq!(renamed.body["peso"], 30);
    assert_eq!(renamed.body["data_limite"], "2022-12-31");
    assert_eq!(renamed.body["descricao"], "Meta trimestral");

    let scored = app
        .request(
            "PUT",
            &format!("/api/metas/{id}"),
            Some(json!({ "resultado_alcancado": 85.5, "comentarios_gestor": "Bom avanço" })),
            Some(&token),
        )
        .await;
    assert_eq!(scored.status, StatusCode::OK);
    assert_eq!(scored.body["resultado_alcancado"], 85.5);
    assert_eq!(scored.body["comentarios_gestor"], "Bom avanço");

    let deleted = app
        .request("DELETE", &format!("/api/metas/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Meta deletada com sucesso");
    assert_eq!(deleted.body["meta_id"], id);

    let gone = app
        .request("GET", &format!("/api/metas/{id}"), None, Some(&token))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body["message"], "Meta não encontrada");
}

#[tokio::test]
async fn test_goal_validation() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let ciclo = app.create_cycle(&token, 2022).await;

    let heavy = app
        .request(
            "POST",
            "/api/metas",
            Some(json!({
                "ciclo_id": ciclo,
                "colaborador_matricula": "12345",
                "titulo": "Peso demais",
                "peso": 150,
                "data_limite": "2022-12-31",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(heavy.status, StatusCode::UNPROCESSABLE_ENTITY);

    let unknown_employee = app
        .request(
            "POST",
            "/api/metas",
            Some(json!({
                "ciclo_id": ciclo,
                "colaborador_matricula": "nao-existe",
                "titulo": "Sem dono",
                "peso": 10,
                "data_limite": "2022-12-31",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(unknown_employee.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown_employee.body["message"], "Colaborador não encontrado");

    let goal = create_goal(&app, &token, ciclo, "12345").await;
    let overshoot = app
        .request(
            "PUT",
            &format!("/api/metas/{}", goal["id"]),
            Some(json!({ "resultado_alcancado": 120.0 })),
            Some(&token),
        )
        .await;
    assert_eq!(overshoot.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_goal_listing() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let ciclo = app.create_cycle(&token, 2022).await;
    create_goal(&app, &token, ciclo, "12345").await;
    create_goal(&app, &token, ciclo, "12345").await;
    create_goal(&app, &token, ciclo, "67890").await;

    let all = app.request("GET", "/api/metas", None, Some(&token)).await;
    assert_eq!(all.body.as_array().map(Vec::len), Some(3));

    let filtered = app
        .request(
            "GET",
            "/api/metas?colaborador_matricula=67890",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(filtered.body.as_array().map(Vec::len), Some(1));

    let joao = app.login("12345", SAMPLE_PASSWORD).await;
    let mine = app.request("GET", "/api/metas/minhas", None, Some(&joao)).await;
    assert_eq!(mine.status, StatusCode::OK);
    assert_eq!(mine.body.as_array().map(Vec::len), Some(2));
    assert!(
        mine.body
            .as_array()
            .expect("list")
            .iter()
            .all(|g| g["colaborador_matricula"] == "12345")
    );
}
