//! Credential verification and token issuance.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use avalia_core::config::AuthConfig;
use avalia_core::error::AppError;
use avalia_database::EmployeeRepository;
use avalia_entity::Employee;

use crate::jwt::JwtEncoder;
use crate::password::PasswordHasher;

const INVALID_CREDENTIALS: &str = "Matrícula ou senha incorretos";
/// Hashed once per issuer and verified against when no stored hash applies.
const DUMMY_PASSWORD: &str = "avalia-dummy-password";

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Signed access token.
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: &'static str,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// The authenticated employee.
    pub employee: Employee,
}

/// Verifies credentials and issues session tokens.
#[derive(Clone)]
pub struct SessionIssuer {
    employees: Arc<dyn EmployeeRepository>,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
    dummy_hash: Option<Arc<str>>,
}

impl std::fmt::Debug for SessionIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionIssuer")
            .field("encoder", &self.encoder)
            .finish_non_exhaustive()
    }
}

impl SessionIssuer {
    /// Create an issuer over the employee store.
    pub fn new(employees: Arc<dyn EmployeeRepository>, config: &AuthConfig) -> Self {
        let hasher = PasswordHasher::new();
        let dummy_hash = hasher
            .hash_password(DUMMY_PASSWORD)
            .inspect_err(|e| warn!(error = %e, "Failed to prepare dummy password hash"))
            .ok()
            .map(Arc::from);
        Self {
            employees,
            hasher,
            encoder: JwtEncoder::new(config),
            dummy_hash,
        }
    }

    /// Authenticate `matricula`/`senha` and issue an access token.
    ///
    /// Unknown identifiers, inactive accounts and wrong passwords all fail
    /// with the same `InvalidCredentials` error, each after one Argon2
    /// verification.
    pub async fn login(&self, matricula: &str, senha: &str) -> Result<LoginResult, AppError> {
        let Some(employee) = self.employees.find_by_matricula(matricula).await? else {
            self.verify_dummy(senha);
            warn!(matricula = %matricula, "Login rejected: unknown identifier");
            return Err(AppError::invalid_credentials(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(senha, &employee.senha_hash)? {
            warn!(matricula = %matricula, "Login rejected: wrong password");
            return Err(AppError::invalid_credentials(INVALID_CREDENTIALS));
        }
        if !employee.ativo {
            warn!(matricula = %matricula, "Login rejected: inactive account");
            return Err(AppError::invalid_credentials(INVALID_CREDENTIALS));
        }

        let issued = self.encoder.issue(&employee.matricula)?;
        info!(matricula = %employee.matricula, "Login successful");

        Ok(LoginResult {
            access_token: issued.token,
            token_type: "bearer",
            expires_at: issued.expires_at,
            employee,
        })
    }

    /// Spend the cost of a real verification; the outcome is discarded.
    fn verify_dummy(&self, senha: &str) {
        if let Some(hash) = &self.dummy_hash {
            let _ = self.hasher.verify_password(senha, hash);
        }
    }
}
