//! Authentication integration tests.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{ADMIN_PASSWORD, SAMPLE_PASSWORD, TestApp};

#[tokio::test]
async fn test_token_endpoint_accepts_form_credentials() {
    let app = TestApp::new().await;

    let response = app
        .request_form("/api/auth/token", "username=admin&password=admin123")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["access_token"].is_string());
    assert_eq!(response.body["token_type"], "bearer");
}

#[tokio::test]
async fn test_json_login_returns_profile() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "matricula": "12345", "senha": SAMPLE_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["matricula"], "12345");
    assert_eq!(response.body["nome"], "João Silva");
    assert_eq!(response.body["token_type"], "bearer");
    assert!(response.body["access_token"].is_string());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "matricula": "admin", "senha": "errada" })),
            None,
        )
        .await;
    let unknown = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "matricula": "99999", "senha": ADMIN_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body["message"], unknown.body["message"]);
    assert_eq!(
        wrong_password
            .headers
            .get("www-authenticate")
            .and_then(|v| v.to_str().ok()),
        Some("Bearer")
    );
}

#[tokio::test]
async fn test_form_login_with_wrong_password_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request_form("/api/auth/token", "username=admin&password=nope")
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/colaboradores/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHENTICATED");
    assert!(response.headers.contains_key("www-authenticate"));
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/colaboradores/me", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_of_deactivated_employee_stops_working() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let token = app.login("11111", SAMPLE_PASSWORD).await;

    let before = app.request("GET", "/api/colaboradores/me", None, Some(&token)).await;
    assert_eq!(before.status, StatusCode::OK);

    let deactivated = app
        .request("DELETE", "/api/colaboradores/11111", None, Some(&admin))
        .await;
    assert_eq!(deactivated.status, StatusCode::OK);

    let after = app.request("GET", "/api/colaboradores/me", None, Some(&token)).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);

    let relogin = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "matricula": "11111", "senha": SAMPLE_PASSWORD })),
            None,
        )
        .await;
    assert_eq!(relogin.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_json_is_a_validation_error() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/auth/login", Some(json!({ "matricula": "admin" })), None)
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_health_reports_backend() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "memory");
    assert_eq!(response.body["database_ok"], true);
}
