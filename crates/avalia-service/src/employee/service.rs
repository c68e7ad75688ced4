//! Employee registration, profile updates and reporting lines.

use std::sync::Arc;

use tracing::{info, warn};

use avalia_auth::password::{PasswordHasher, PasswordValidator};
use avalia_core::config::AuthConfig;
use avalia_core::error::AppError;
use avalia_core::result::AppResult;
use avalia_core::types::PageRequest;
use avalia_database::EmployeeRepository;
use avalia_entity::{Employee, EmployeeChanges, EmployeeFilter, EmployeePatch, NewEmployee};

use crate::context::RequestContext;
use crate::validation::validate;

/// Handles employee CRUD and hierarchy lookups.
#[derive(Clone)]
pub struct EmployeeService {
    employees: Arc<dyn EmployeeRepository>,
    hasher: PasswordHasher,
    validator: PasswordValidator,
}

impl std::fmt::Debug for EmployeeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeService")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

impl EmployeeService {
    /// Creates a new employee service.
    pub fn new(employees: Arc<dyn EmployeeRepository>, config: &AuthConfig) -> Self {
        Self {
            employees,
            hasher: PasswordHasher::new(),
            validator: PasswordValidator::new(config),
        }
    }

    /// Register a new employee with a hashed password.
    pub async fn create(&self, data: NewEmployee) -> AppResult<Employee> {
        validate(&data)?;
        self.validator
            .validate(&data.senha, &[&data.matricula, &data.nome, &data.email])?;
        if data.gestor_matricula.as_deref() == Some(data.matricula.as_str()) {
            return Err(AppError::validation(
                "Colaborador não pode ser gestor de si mesmo",
            ));
        }

        let senha_hash = self.hasher.hash_password(&data.senha)?;
        let matricula = data.matricula.clone();
        match self.employees.create(data.into_record(senha_hash)).await {
            Ok(employee) => {
                info!(matricula = %employee.matricula, nome = %employee.nome, "Employee created");
                Ok(employee)
            }
            Err(e) => {
                warn!(matricula = %matricula, error = %e, "Employee creation rejected");
                Err(e)
            }
        }
    }

    /// List employees; inactive ones only when the filter asks for them.
    pub async fn list(&self, filter: EmployeeFilter, page: PageRequest) -> AppResult<Vec<Employee>> {
        self.employees.list(filter, page).await
    }

    /// Fetch one employee by identifier.
    pub async fn get(&self, matricula: &str) -> AppResult<Employee> {
        self.employees
            .find_by_matricula(matricula)
            .await?
            .ok_or_else(|| AppError::not_found("Colaborador não encontrado"))
    }

    /// The authenticated employee.
    pub fn me(&self, ctx: &RequestContext) -> Employee {
        ctx.employee.clone()
    }

    /// Apply a partial update. A supplied password is re-hashed.
    pub async fn update(&self, matricula: &str, patch: EmployeePatch) -> AppResult<Employee> {
        validate(&patch)?;
        if let Some(senha) = patch.senha.as_deref() {
            self.validator.validate(senha, &[matricula])?;
        }
        let senha_hash = patch
            .senha
            .as_deref()
            .map(|s| self.hasher.hash_password(s))
            .transpose()?;

        let employee = self
            .employees
            .update(matricula, patch.into_changes(senha_hash))
            .await
            .inspect_err(|e| warn!(matricula = %matricula, error = %e, "Employee update rejected"))?;
        info!(matricula = %employee.matricula, "Employee updated");
        Ok(employee)
    }

    /// Replace an employee's password.
    pub async fn set_password(&self, matricula: &str, senha: &str) -> AppResult<Employee> {
        self.validator.validate(senha, &[matricula])?;
        let changes = EmployeeChanges {
            senha_hash: Some(self.hasher.hash_password(senha)?),
            ..Default::default()
        };
        let employee = self.employees.update(matricula, changes).await?;
        info!(matricula = %employee.matricula, "Password changed");
        Ok(employee)
    }

    /// Soft-delete an employee.
    pub async fn deactivate(&self, matricula: &str) -> AppResult<Employee> {
        let employee = self
            .employees
            .deactivate(matricula)
            .await
            .inspect_err(|e| warn!(matricula = %matricula, error = %e, "Deactivation rejected"))?;
        info!(matricula = %employee.matricula, "Employee deactivated");
        Ok(employee)
    }

    /// Direct reports of `gestor_matricula`.
    pub async fn subordinates(
        &self,
        gestor_matricula: &str,
        filter: EmployeeFilter,
    ) -> AppResult<Vec<Employee>> {
        if self
            .employees
            .find_by_matricula(gestor_matricula)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("Gestor não encontrado"));
        }
        self.employees
            .list_subordinates(gestor_matricula, filter)
            .await
    }

    /// The direct manager of `matricula`.
    pub async fn manager(&self, matricula: &str) -> AppResult<Employee> {
        let employee = self.get(matricula).await?;
        let gestor = employee
            .gestor_matricula
            .ok_or_else(|| AppError::not_found("Colaborador não possui gestor cadastrado"))?;
        self.employees
            .find_by_matricula(&gestor)
            .await?
            .ok_or_else(|| AppError::not_found("Gestor não encontrado no sistema"))
    }
}
