//! Final result integration tests.

use axum::http::StatusCode;

use crate::helpers::{SAMPLE_PASSWORD, TestApp};

/// Cycle 2022 with behavioral 4.4 and deliverables 3.6 for `12345`.
async fn scored_cycle(app: &TestApp, token: &str) -> i64 {
    let ciclo = app.create_cycle(token, 2022).await;
    let behavioral = app
        .create_behavioral(token, ciclo, "12345", "admin", [4, 5, 4, 5, 4])
        .await;
    assert_eq!(behavioral.status, StatusCode::CREATED);
    let deliverables = app
        .create_deliverables(token, ciclo, "12345", "admin", [4, 3, 4, 3, 4])
        .await;
    assert_eq!(deliverables.status, StatusCode::CREATED);
    ciclo
}

#[tokio::test]
async fn test_final_result_for_admin() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let ciclo = scored_cycle(&app, &token).await;

    let response = app
        .request(
            "GET",
            &format!("/api/resultados/colaborador/12345/ciclo/{ciclo}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["colaborador_matricula"], "12345");
    assert_eq!(response.body["colaborador_nome"], "João Silva");
    assert_eq!(response.body["ciclo_id"], ciclo);
    assert_eq!(response.body["ciclo_ano"], 2022);
    assert_eq!(response.body["media_comportamental"], 4.4);
    assert_eq!(response.body["media_entregas"], 3.6);
    assert_eq!(response.body["nota_final"], 4.0);
}

#[tokio::test]
async fn test_final_result_visible_to_subject_and_manager() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let ciclo = app.create_cycle(&admin, 2022).await;
    app.create_behavioral(&admin, ciclo, "11111", "67890", [4, 4, 4, 4, 4])
        .await;
    app.create_deliverables(&admin, ciclo, "11111", "67890", [3, 3, 3, 3, 3])
        .await;
    let path = format!("/api/resultados/colaborador/11111/ciclo/{ciclo}");

    let pedro = app.login("11111", SAMPLE_PASSWORD).await;
    let own = app.request("GET", &path, None, Some(&pedro)).await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.body["nota_final"], 3.5);

    let maria = app.login("67890", SAMPLE_PASSWORD).await;
    let as_manager = app.request("GET", &path, None, Some(&maria)).await;
    assert_eq!(as_manager.status, StatusCode::OK);

    let joao = app.login("12345", SAMPLE_PASSWORD).await;
    let peer = app.request("GET", &path, None, Some(&joao)).await;
    assert_eq!(peer.status, StatusCode::FORBIDDEN);
    assert_eq!(peer.error_code(), "FORBIDDEN");
}

#[tokio::test]
async fn test_averages_span_multiple_evaluations() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let ciclo = app.create_cycle(&token, 2022).await;
    app.create_behavioral(&token, ciclo, "12345", "admin", [4, 4, 4, 4, 4])
        .await;
    app.create_behavioral(&token, ciclo, "12345", "67890", [3, 3, 3, 3, 3])
        .await;
    app.create_behavioral(&token, ciclo, "12345", "11111", [3, 3, 3, 3, 3])
        .await;
    app.create_deliverables(&token, ciclo, "12345", "admin", [5, 5, 5, 5, 5])
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/resultados/colaborador/12345/ciclo/{ciclo}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["media_comportamental"], 3.33);
    assert_eq!(response.body["media_entregas"], 5.0);
    assert_eq!(response.body["nota_final"], 4.17);
}

#[tokio::test]
async fn test_missing_track_is_not_found() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let ciclo = app.create_cycle(&token, 2022).await;
    app.create_behavioral(&token, ciclo, "12345", "admin", [4, 4, 4, 4, 4])
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/resultados/colaborador/12345/ciclo/{ciclo}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body["message"],
        "Avaliações não encontradas para este colaborador e ciclo"
    );
}

#[tokio::test]
async fn test_unknown_subject_or_cycle() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let ciclo = scored_cycle(&app, &token).await;

    let unknown_employee = app
        .request(
            "GET",
            &format!("/api/resultados/colaborador/nao-existe/ciclo/{ciclo}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(unknown_employee.status, StatusCode::NOT_FOUND);

    let unknown_cycle = app
        .request(
            "GET",
            "/api/resultados/colaborador/12345/ciclo/9999",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(unknown_cycle.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown_cycle.body["message"], "Ciclo não encontrado");
}
