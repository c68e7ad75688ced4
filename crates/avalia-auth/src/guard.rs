//! Resolves bearer tokens to active employees.

use std::sync::Arc;

use tracing::debug;

use avalia_core::config::AuthConfig;
use avalia_core::error::AppError;
use avalia_database::EmployeeRepository;
use avalia_entity::Employee;

use crate::jwt::JwtDecoder;

/// Validates inbound tokens on protected calls.
#[derive(Clone)]
pub struct AccessGuard {
    employees: Arc<dyn EmployeeRepository>,
    decoder: JwtDecoder,
}

impl std::fmt::Debug for AccessGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGuard")
            .field("decoder", &self.decoder)
            .finish_non_exhaustive()
    }
}

impl AccessGuard {
    /// Create a guard over the employee store.
    pub fn new(employees: Arc<dyn EmployeeRepository>, config: &AuthConfig) -> Self {
        Self {
            employees,
            decoder: JwtDecoder::new(config),
        }
    }

    /// Verify `token` and return the active employee it names.
    pub async fn authenticate(&self, token: &str) -> Result<Employee, AppError> {
        let claims = self.decoder.decode(token)?;

        match self.employees.find_by_matricula(claims.matricula()).await? {
            Some(employee) if employee.ativo => Ok(employee),
            _ => {
                debug!(matricula = %claims.matricula(), "Token subject is not an active employee");
                Err(AppError::unauthenticated("Credenciais inválidas"))
            }
        }
    }
}
