//! Behavioral and deliverables evaluation integration tests.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{SAMPLE_PASSWORD, TestApp};

#[tokio::test]
async fn test_behavioral_evaluation_lifecycle() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let ciclo = app.create_cycle(&token, 2022).await;

    let created = app
        .create_behavioral(&token, ciclo, "12345", "admin", [4, 5, 4, 5, 4])
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["media_competencias"], 4.4);
    assert_eq!(created.body["status"], "pendente");
    assert_eq!(created.body["tipo_avaliacao"], "avaliacao_gestor");
    let id = created.body["id"].as_i64().expect("evaluation id");

    let updated = app
        .request(
            "PUT",
            &format!("/api/avaliacoes/{id}"),
            Some(json!({ "adaptabilidade": 5, "comentarios": "Evoluiu bem" })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["media_competencias"], 4.6);
    assert_eq!(updated.body["lideranca"], 4);
    assert_eq!(updated.body["comentarios"], "Evoluiu bem");

    let completed = app
        .request("POST", &format!("/api/avaliacoes/{id}/concluir"), None, Some(&token))
        .await;
    assert_eq!(completed.status, StatusCode::OK);
    assert_eq!(completed.body["status"], "concluida");

    let again = app
        .request("POST", &format!("/api/avaliacoes/{id}/concluir"), None, Some(&token))
        .await;
    assert_eq!(again.status, StatusCode::CONFLICT);

    let deleted = app
        .request("DELETE", &format!("/api/avaliacoes/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Avaliação deletada com sucesso");
    assert_eq!(deleted.body["avaliacao_id"], id);

    let gone = app
        .request("GET", &format!("/api/avaliacoes/{id}"), None, Some(&token))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body["message"], "Avaliação não encontrada");
}

#[tokio::test]
async fn test_behavioral_evaluation_validation() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let ciclo = app.create_cycle(&token, 2022).await;

    let out_of_range = app
        .create_behavioral(&token, ciclo, "12345", "admin", [6, 5, 4, 5, 4])
        .await;
    assert_eq!(out_of_range.status, StatusCode::UNPROCESSABLE_ENTITY);

    let zero = app
        .create_behavioral(&token, ciclo, "12345", "admin", [0, 5, 4, 5, 4])
        .await;
    assert_eq!(zero.status, StatusCode::UNPROCESSABLE_ENTITY);

    let unknown_cycle = app
        .create_behavioral(&token, 9999, "12345", "admin", [3, 3, 3, 3, 3])
        .await;
    assert_eq!(unknown_cycle.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown_cycle.body["message"], "Ciclo não encontrado");

    let unknown_subject = app
        .create_behavioral(&token, ciclo, "nao-existe", "admin", [3, 3, 3, 3, 3])
        .await;
    assert_eq!(unknown_subject.status, StatusCode::NOT_FOUND);
    assert_eq!(
        unknown_subject.body["message"],
        "Colaborador avaliado não encontrado"
    );

    let missing_type = app
        .request(
            "POST",
            "/api/avaliacoes",
            Some(json!({
                "ciclo_id": ciclo,
                "avaliado_matricula": "12345",
                "avaliador_matricula": "admin",
                "lideranca": 3,
                "comunicacao": 3,
                "trabalho_equipe": 3,
                "resolucao_problemas": 3,
                "adaptabilidade": 3,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(missing_type.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_mine_and_pending_are_caller_scoped() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let ciclo = app.create_cycle(&admin, 2022).await;

    app.create_behavioral(&admin, ciclo, "11111", "67890", [3, 3, 3, 3, 3])
        .await;
    app.create_behavioral(&admin, ciclo, "12345", "67890", [4, 4, 4, 4, 4])
        .await;
    let done = app
        .create_behavioral(&admin, ciclo, "67890", "12345", [5, 5, 5, 5, 5])
        .await;
    let done_id = done.body["id"].as_i64().expect("evaluation id");

    let maria = app.login("67890", SAMPLE_PASSWORD).await;
    let pending = app
        .request("GET", "/api/avaliacoes/pendentes", None, Some(&maria))
        .await;
    assert_eq!(pending.status, StatusCode::OK);
    assert_eq!(pending.body.as_array().map(Vec::len), Some(2));

    let mine = app
        .request("GET", "/api/avaliacoes/minhas", None, Some(&maria))
        .await;
    assert_eq!(mine.body.as_array().map(Vec::len), Some(1));
    assert_eq!(mine.body[0]["avaliado_matricula"], "67890");

    let joao = app.login("12345", SAMPLE_PASSWORD).await;
    app.request("POST", &format!("/api/avaliacoes/{done_id}/concluir"), None, Some(&joao))
        .await;
    let joao_pending = app
        .request("GET", "/api/avaliacoes/pendentes", None, Some(&joao))
        .await;
    assert_eq!(joao_pending.body.as_array().map(Vec::len), Some(0));

    let other_cycle = app
        .request(
            "GET",
            &format!("/api/avaliacoes/minhas?ciclo_id={}", ciclo + 1000),
            None,
            Some(&maria),
        )
        .await;
    assert_eq!(other_cycle.body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_list_filters() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let ciclo = app.create_cycle(&token, 2022).await;

    app.create_behavioral(&token, ciclo, "11111", "67890", [3, 3, 3, 3, 3])
        .await;
    app.create_behavioral(&token, ciclo, "12345", "admin", [4, 4, 4, 4, 4])
        .await;

    let by_subject = app
        .request(
            "GET",
            "/api/avaliacoes?avaliado_matricula=12345",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(by_subject.status, StatusCode::OK);
    assert_eq!(by_subject.body.as_array().map(Vec::len), Some(1));
    assert_eq!(by_subject.body[0]["avaliador_matricula"], "admin");

    let by_status = app
        .request("GET", "/api/avaliacoes?status=concluida", None, Some(&token))
        .await;
    assert_eq!(by_status.body.as_array().map(Vec::len), Some(0));

    let bad_status = app
        .request("GET", "/api/avaliacoes?status=aberta", None, Some(&token))
        .await;
    assert_eq!(bad_status.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_deliverables_evaluation_lifecycle() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let ciclo = app.create_cycle(&token, 2022).await;

    let created = app
        .create_deliverables(&token, ciclo, "12345", "admin", [4, 3, 4, 3, 4])
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["media_entregas"], 3.6);
    let id = created.body["id"].as_i64().expect("evaluation id");

    let updated = app
        .request(
            "PUT",
            &format!("/api/entregas/{id}"),
            Some(json!({ "prazo": 5, "impacto": 5 })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["media_entregas"], 4.4);

    let joao = app.login("12345", SAMPLE_PASSWORD).await;
    let mine = app.request("GET", "/api/entregas/minhas", None, Some(&joao)).await;
    assert_eq!(mine.status, StatusCode::OK);
    assert_eq!(mine.body.as_array().map(Vec::len), Some(1));

    let completed = app
        .request("POST", &format!("/api/entregas/{id}/concluir"), None, Some(&token))
        .await;
    assert_eq!(completed.body["status"], "concluida");
    let again = app
        .request("POST", &format!("/api/entregas/{id}/concluir"), None, Some(&token))
        .await;
    assert_eq!(again.status, StatusCode::CONFLICT);

    let deleted = app
        .request("DELETE", &format!("/api/entregas/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["avaliacao_id"], id);
}

#[tokio::test]
async fn test_deliverables_out_of_range_rejected() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let ciclo = app.create_cycle(&token, 2022).await;

    let response = app
        .create_deliverables(&token, ciclo, "12345", "admin", [4, 3, 4, 3, 9])
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}
