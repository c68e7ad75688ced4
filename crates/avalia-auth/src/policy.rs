//! Access rules for reading another employee's results.

use std::collections::HashSet;

use avalia_core::config::AuthConfig;
use avalia_core::error::AppError;
use avalia_entity::Employee;

/// Decides whether a caller may see a target employee's final result.
///
/// Allowed for the employee themself, their direct manager, and any
/// configured administrator.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    admin_matriculas: HashSet<String>,
}

impl AccessPolicy {
    /// Build the policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            admin_matriculas: config.admin_matriculas.iter().cloned().collect(),
        }
    }

    /// Whether `matricula` is a configured administrator.
    pub fn is_admin(&self, matricula: &str) -> bool {
        self.admin_matriculas.contains(matricula)
    }

    /// Whether `caller` may read `target`'s result.
    pub fn can_view_results(&self, caller: &Employee, target: &Employee) -> bool {
        caller.matricula == target.matricula
            || target.is_managed_by(&caller.matricula)
            || self.is_admin(&caller.matricula)
    }

    /// Like [`can_view_results`](Self::can_view_results), failing with `Forbidden`.
    pub fn require_view_results(&self, caller: &Employee, target: &Employee) -> Result<(), AppError> {
        if self.can_view_results(caller, target) {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "Sem permissão para visualizar o resultado deste colaborador",
            ))
        }
    }
}
