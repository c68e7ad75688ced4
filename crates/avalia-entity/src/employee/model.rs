//! Employee entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use avalia_core::types::deserialize_some;

/// An employee registered in the review system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    /// Surrogate key.
    pub id: i32,
    /// Unique employee identifier used for login and references.
    pub matricula: String,
    /// Full name.
    pub nome: String,
    /// Unique email address.
    pub email: String,
    /// Argon2id password hash.
    #[serde(skip_serializing, default)]
    pub senha_hash: String,
    /// Job title.
    pub cargo: String,
    /// Department.
    pub departamento: String,
    /// Identifier of the direct manager, if any.
    pub gestor_matricula: Option<String>,
    /// Soft-delete flag.
    pub ativo: bool,
    /// When the employee was created.
    pub criado_em: DateTime<Utc>,
    /// When the employee was last updated.
    pub atualizado_em: DateTime<Utc>,
}

impl Employee {
    /// Whether `matricula` is this employee's direct manager.
    pub fn is_managed_by(&self, matricula: &str) -> bool {
        self.gestor_matricula.as_deref() == Some(matricula)
    }
}

/// Input for registering an employee.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewEmployee {
    /// Unique identifier.
    #[validate(length(min = 1, max = 50))]
    pub matricula: String,
    /// Full name.
    #[validate(length(min = 1, max = 200))]
    pub nome: String,
    /// Email address.
    #[validate(email, length(max = 200))]
    pub email: String,
    /// Plaintext password, hashed before it reaches the store.
    #[serde(skip_serializing)]
    #[validate(length(min = 6, max = 100))]
    pub senha: String,
    /// Job title.
    #[validate(length(min = 1, max = 100))]
    pub cargo: String,
    /// Department.
    #[validate(length(min = 1, max = 100))]
    pub departamento: String,
    /// Direct manager identifier.
    #[serde(default)]
    #[validate(length(min = 1, max = 50))]
    pub gestor_matricula: Option<String>,
}

impl NewEmployee {
    /// Replace the plaintext password with its hash.
    pub fn into_record(self, senha_hash: String) -> CreateEmployee {
        CreateEmployee {
            matricula: self.matricula,
            nome: self.nome,
            email: self.email,
            senha_hash,
            cargo: self.cargo,
            departamento: self.departamento,
            gestor_matricula: self.gestor_matricula,
        }
    }
}

/// Data persisted when an employee is created.
#[derive(Debug, Clone)]
pub struct CreateEmployee {
    /// Unique identifier.
    pub matricula: String,
    /// Full name.
    pub nome: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub senha_hash: String,
    /// Job title.
    pub cargo: String,
    /// Department.
    pub departamento: String,
    /// Direct manager identifier.
    pub gestor_matricula: Option<String>,
}

/// Partial update for an employee. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EmployeePatch {
    /// New full name.
    #[validate(length(min = 1, max = 200))]
    pub nome: Option<String>,
    /// New email address.
    #[validate(email, length(max = 200))]
    pub email: Option<String>,
    /// New plaintext password.
    #[serde(skip_serializing)]
    #[validate(length(min = 6, max = 100))]
    pub senha: Option<String>,
    /// New job title.
    #[validate(length(min = 1, max = 100))]
    pub cargo: Option<String>,
    /// New department.
    #[validate(length(min = 1, max = 100))]
    pub departamento: Option<String>,
    /// New manager; `null` removes the manager.
    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(length(min = 1, max = 50))]
    pub gestor_matricula: Option<Option<String>>,
    /// Reactivate or deactivate.
    pub ativo: Option<bool>,
}

impl EmployeePatch {
    /// Replace the plaintext password (if any) with its hash.
    pub fn into_changes(self, senha_hash: Option<String>) -> EmployeeChanges {
        EmployeeChanges {
            nome: self.nome,
            email: self.email,
            senha_hash,
            cargo: self.cargo,
            departamento: self.departamento,
            gestor_matricula: self.gestor_matricula,
            ativo: self.ativo,
        }
    }
}

/// Field changes applied to a stored employee.
#[derive(Debug, Clone, Default)]
pub struct EmployeeChanges {
    /// New full name.
    pub nome: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New password hash.
    pub senha_hash: Option<String>,
    /// New job title.
    pub cargo: Option<String>,
    /// New department.
    pub departamento: Option<String>,
    /// New manager; `Some(None)` removes it.
    pub gestor_matricula: Option<Option<String>>,
    /// New active flag.
    pub ativo: Option<bool>,
}

impl EmployeeChanges {
    /// Apply the supplied fields onto `employee` and bump `atualizado_em`.
    pub fn apply(&self, employee: &mut Employee) {
        if let Some(nome) = &self.nome {
            employee.nome = nome.clone();
        }
        if let Some(email) = &self.email {
            employee.email = email.clone();
        }
        if let Some(senha_hash) = &self.senha_hash {
            employee.senha_hash = senha_hash.clone();
        }
        if let Some(cargo) = &self.cargo {
            employee.cargo = cargo.clone();
        }
        if let Some(departamento) = &self.departamento {
            employee.departamento = departamento.clone();
        }
        if let Some(gestor) = &self.gestor_matricula {
            employee.gestor_matricula = gestor.clone();
        }
        if let Some(ativo) = self.ativo {
            employee.ativo = ativo;
        }
        employee.atualizado_em = Utc::now();
    }

    /// The manager this change assigns, if it assigns one.
    pub fn new_manager(&self) -> Option<&str> {
        self.gestor_matricula.as_ref().and_then(|g| g.as_deref())
    }
}

/// Listing filter for employees.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EmployeeFilter {
    /// Include soft-deleted employees.
    #[serde(default)]
    pub incluir_inativos: bool,
}

impl EmployeeFilter {
    /// Whether `employee` passes this filter.
    pub fn matches(&self, employee: &Employee) -> bool {
        self.incluir_inativos || employee.ativo
    }
}
