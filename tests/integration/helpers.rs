//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use avalia_core::config::AppConfig;
use avalia_database::Repositories;
use avalia_service::Seeder;

/// Password of the seeded administrator.
pub const ADMIN_PASSWORD: &str = "admin123";
/// Password of the seeded sample employees.
pub const SAMPLE_PASSWORD: &str = "senha123";

/// Test application over a fresh in-memory store.
///
/// Seeded with `admin`, `12345` and `67890` (reporting to `admin`), `11111`
/// (reporting to `67890`) and an in-progress cycle for the current year.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Repositories behind the router
    pub repos: Repositories,
}

impl TestApp {
    /// Create a new seeded test application
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.environment = "test".to_string();

        let repos = Repositories::memory();
        Seeder::new(repos.clone(), &config.auth)
            .run(None)
            .await
            .expect("Failed to seed test data");

        let router = avalia_api::build_app(config, repos.clone());
        Self { router, repos }
    }

    /// Log in through the JSON endpoint and return the access token
    pub async fn login(&self, matricula: &str, senha: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(json!({ "matricula": matricula, "senha": senha })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);
        response.body["access_token"]
            .as_str()
            .expect("Missing access_token")
            .to_string()
    }

    /// Token of the seeded administrator
    pub async fn admin_token(&self) -> String {
        self.login("admin", ADMIN_PASSWORD).await
    }

    /// Register an employee through the API
    pub async fn create_employee(&self, token: &str, matricula: &str, gestor: Option<&str>) -> Value {
        let response = self
            .request(
                "POST",
                "/api/colaboradores",
                Some(json!({
                    "matricula": matricula,
                    "nome": format!("Colaborador {matricula}"),
                    "email": format!("{}@empresa.com", matricula.to_lowercase()),
                    "senha": SAMPLE_PASSWORD,
                    "cargo": "Analista",
                    "departamento": "Tecnologia",
                    "gestor_matricula": gestor,
                })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body
    }

    /// Open a cycle for `ano` and return its id
    pub async fn create_cycle(&self, token: &str, ano: i32) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/ciclos",
                Some(json!({
                    "ano": ano,
                    "descricao": format!("Ciclo {ano}"),
                    "data_inicio": format!("{ano}-01-01"),
                    "data_fim": format!("{ano}-12-31"),
                    "status": "em_andamento",
                })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["id"].as_i64().expect("Missing cycle id")
    }

    /// Record a behavioral evaluation and return its body
    pub async fn create_behavioral(
        &self,
        token: &str,
        ciclo_id: i64,
        avaliado: &str,
        avaliador: &str,
        scores: [i32; 5],
    ) -> TestResponse {
        self.request(
            "POST",
            "/api/avaliacoes",
            Some(json!({
                "ciclo_id": ciclo_id,
                "avaliado_matricula": avaliado,
                "avaliador_matricula": avaliador,
                "tipo_avaliacao": "avaliacao_gestor",
                "lideranca": scores[0],
                "comunicacao": scores[1],
                "trabalho_equipe": scores[2],
                "resolucao_problemas": scores[3],
                "adaptabilidade": scores[4],
            })),
            Some(token),
        )
        .await
    }

    /// Record a deliverables evaluation and return its body
    pub async fn create_deliverables(
        &self,
        token: &str,
        ciclo_id: i64,
        avaliado: &str,
        avaliador: &str,
        scores: [i32; 5],
    ) -> TestResponse {
        self.request(
            "POST",
            "/api/entregas",
            Some(json!({
                "ciclo_id": ciclo_id,
                "avaliado_matricula": avaliado,
                "avaliador_matricula": avaliador,
                "qualidade": scores[0],
                "prazo": scores[1],
                "produtividade": scores[2],
                "impacto": scores[3],
                "inovacao": scores[4],
            })),
            Some(token),
        )
        .await
    }

    /// Make a JSON request
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.send(method, path, "application/json", body_str, token).await
    }

    /// Make a form-encoded request
    pub async fn request_form(&self, path: &str, form: &str) -> TestResponse {
        self.send(
            "POST",
            path,
            "application/x-www-form-urlencoded",
            form.to_string(),
            None,
        )
        .await
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        content_type: &str,
        body: String,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", content_type);

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `error` code of an error body
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
