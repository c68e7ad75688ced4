//! Request DTOs.

use serde::{Deserialize, Serialize};

/// OAuth2 password-flow form for `POST /auth/token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenForm {
    /// Employee identifier.
    pub username: String,
    /// Password.
    pub password: String,
}

/// JSON login body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub matricula: String,
    pub senha: String,
}
