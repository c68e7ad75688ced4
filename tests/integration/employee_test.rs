//! Employee registry integration tests.

use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{SAMPLE_PASSWORD, TestApp};

fn matriculas(body: &Value) -> Vec<String> {
    let mut list: Vec<String> = body
        .as_array()
        .expect("expected a list")
        .iter()
        .filter_map(|e| e["matricula"].as_str().map(str::to_string))
        .collect();
    list.sort();
    list
}

#[tokio::test]
async fn test_me_returns_caller_without_hash() {
    let app = TestApp::new().await;
    let token = app.login("67890", SAMPLE_PASSWORD).await;

    let response = app.request("GET", "/api/colaboradores/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["matricula"], "67890");
    assert_eq!(response.body["nome"], "Maria Santos");
    assert!(response.body.get("senha_hash").is_none());
    assert!(response.body.get("senha").is_none());
}

#[tokio::test]
async fn test_create_employee_then_duplicate_conflicts() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let created = app.create_employee(&token, "E100", Some("12345")).await;
    assert_eq!(created["matricula"], "E100");
    assert_eq!(created["gestor_matricula"], "12345");
    assert_eq!(created["ativo"], true);
    assert!(created.get("senha_hash").is_none());

    let duplicate = app
        .request(
            "POST",
            "/api/colaboradores",
            Some(json!({
                "matricula": "E100",
                "nome": "Outro",
                "email": "outro@empresa.com",
                "senha": SAMPLE_PASSWORD,
                "cargo": "Analista",
                "departamento": "Tecnologia",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(duplicate.error_code(), "CONFLICT");

    let same_email = app
        .request(
            "POST",
            "/api/colaboradores",
            Some(json!({
                "matricula": "E101",
                "nome": "Outro",
                "email": "e100@empresa.com",
                "senha": SAMPLE_PASSWORD,
                "cargo": "Analista",
                "departamento": "Tecnologia",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(same_email.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_new_employee_can_log_in() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    app.create_employee(&token, "E200", None).await;

    let employee_token = app.login("E200", SAMPLE_PASSWORD).await;
    let me = app
        .request("GET", "/api/colaboradores/me", None, Some(&employee_token))
        .await;
    assert_eq!(me.body["matricula"], "E200");
}

#[tokio::test]
async fn test_create_employee_rejects_bad_input() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let bad_email = app
        .request(
            "POST",
            "/api/colaboradores",
            Some(json!({
                "matricula": "E300",
                "nome": "Sem Email",
                "email": "nao-e-email",
                "senha": SAMPLE_PASSWORD,
                "cargo": "Analista",
                "departamento": "Tecnologia",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(bad_email.status, StatusCode::UNPROCESSABLE_ENTITY);

    let unknown_manager = app
        .request(
            "POST",
            "/api/colaboradores",
            Some(json!({
                "matricula": "E301",
                "nome": "Sem Gestor",
                "email": "e301@empresa.com",
                "senha": SAMPLE_PASSWORD,
                "cargo": "Analista",
                "departamento": "Tecnologia",
                "gestor_matricula": "nao-existe",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(unknown_manager.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_unknown_employee_is_not_found() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request("GET", "/api/colaboradores/nao-existe", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Colaborador não encontrado");
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "PUT",
            "/api/colaboradores/12345",
            Some(json!({ "cargo": "Coordenador" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["cargo"], "Coordenador");
    assert_eq!(response.body["nome"], "João Silva");
    assert_eq!(response.body["email"], "12345@empresa.com");
    assert_eq!(response.body["gestor_matricula"], "admin");
}

#[tokio::test]
async fn test_update_to_taken_email_conflicts() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "PUT",
            "/api/colaboradores/12345",
            Some(json!({ "email": "67890@empresa.com" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_deactivate_hides_from_default_list() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let first = app
        .request("DELETE", "/api/colaboradores/11111", None, Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["message"], "Colaborador desativado com sucesso");
    assert_eq!(first.body["matricula"], "11111");
    assert_eq!(first.body["ativo"], false);

    let second = app
        .request("DELETE", "/api/colaboradores/11111", None, Some(&token))
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);

    let active = app.request("GET", "/api/colaboradores", None, Some(&token)).await;
    assert_eq!(active.status, StatusCode::OK);
    assert!(!matriculas(&active.body).contains(&"11111".to_string()));

    let all = app
        .request(
            "GET",
            "/api/colaboradores?incluir_inativos=true",
            None,
            Some(&token),
        )
        .await;
    assert!(matriculas(&all.body).contains(&"11111".to_string()));

    let still_readable = app
        .request("GET", "/api/colaboradores/11111", None, Some(&token))
        .await;
    assert_eq!(still_readable.status, StatusCode::OK);
    assert_eq!(still_readable.body["ativo"], false);
}

#[tokio::test]
async fn test_list_is_paginated() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let page = app
        .request("GET", "/api/colaboradores?skip=1&limit=2", None, Some(&token))
        .await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.body.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_reporting_line() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let reports = app
        .request("GET", "/api/colaboradores/admin/subordinados", None, Some(&token))
        .await;
    assert_eq!(reports.status, StatusCode::OK);
    assert_eq!(matriculas(&reports.body), vec!["12345", "67890"]);

    let maria_reports = app
        .request("GET", "/api/colaboradores/67890/subordinados", None, Some(&token))
        .await;
    assert_eq!(matriculas(&maria_reports.body), vec!["11111"]);

    let manager = app
        .request("GET", "/api/colaboradores/11111/gestor", None, Some(&token))
        .await;
    assert_eq!(manager.status, StatusCode::OK);
    assert_eq!(manager.body["matricula"], "67890");

    let no_manager = app
        .request("GET", "/api/colaboradores/admin/gestor", None, Some(&token))
        .await;
    assert_eq!(no_manager.status, StatusCode::NOT_FOUND);
    assert_eq!(
        no_manager.body["message"],
        "Colaborador não possui gestor cadastrado"
    );

    let unknown = app
        .request("GET", "/api/colaboradores/nao-existe/subordinados", None, Some(&token))
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}
