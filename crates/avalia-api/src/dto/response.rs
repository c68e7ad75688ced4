//! Response DTOs.

use serde::{Deserialize, Serialize};

use avalia_auth::LoginResult;
use avalia_entity::Employee;

/// Token-only response of `POST /auth/token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub matricula: String,
    pub nome: String,
    pub cargo: String,
}

impl From<LoginResult> for TokenResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            access_token: result.access_token,
            token_type: result.token_type.to_string(),
        }
    }
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            access_token: result.access_token,
            token_type: result.token_type.to_string(),
            matricula: result.employee.matricula,
            nome: result.employee.nome,
            cargo: result.employee.cargo,
        }
    }
}

/// Response of the employee soft delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeactivateResponse {
    pub message: String,
    pub matricula: String,
    pub nome: String,
    pub ativo: bool,
}

impl From<Employee> for DeactivateResponse {
    fn from(employee: Employee) -> Self {
        Self {
            message: "Colaborador desativado com sucesso".to_string(),
            matricula: employee.matricula,
            nome: employee.nome,
            ativo: employee.ativo,
        }
    }
}

/// Response of a cycle deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleDeletedResponse {
    pub message: String,
    pub ciclo_id: i32,
}

/// Response of an evaluation deletion (either track).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationDeletedResponse {
    pub message: String,
    pub avaliacao_id: i32,
}

/// Response of a goal deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalDeletedResponse {
    pub message: String,
    pub meta_id: i32,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Persistence backend in use.
    pub database: String,
    /// Whether the backend answered.
    pub database_ok: bool,
}
