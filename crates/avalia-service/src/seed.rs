//! Bootstrap data: the administrator, a few sample employees and the current cycle.

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;
use tracing::info;

use avalia_auth::password::{PasswordHasher, PasswordValidator};
use avalia_core::config::AuthConfig;
use avalia_core::error::{AppError, ErrorKind};
use avalia_core::result::AppResult;
use avalia_database::Repositories;
use avalia_entity::{CycleStatus, NewCycle, NewEmployee};

use crate::validation::validate;

/// Identifier of the bootstrap administrator.
pub const ADMIN_MATRICULA: &str = "admin";
/// Password given to the administrator when none is supplied.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
/// Password of the sample employees.
const SAMPLE_PASSWORD: &str = "senha123";

/// (matricula, nome, cargo, departamento, gestor), managers listed before their reports.
const SAMPLE_EMPLOYEES: [(&str, &str, &str, &str, &str); 3] = [
    ("12345", "João Silva", "Analista", "Tecnologia", ADMIN_MATRICULA),
    ("67890", "Maria Santos", "Gerente", "Operações", ADMIN_MATRICULA),
    ("11111", "Pedro Oliveira", "Coordenador", "Tecnologia", "67890"),
];

/// What a seeding run created and what was already there.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeedReport {
    pub created: Vec<String>,
    pub skipped: Vec<String>,
}

/// Idempotent seeder; rows that already exist are left untouched.
///
/// Built-in passwords are bootstrap credentials and skip the strength policy.
/// An operator-supplied admin password must satisfy it, and is checked before
/// anything is written.
#[derive(Debug, Clone)]
pub struct Seeder {
    repos: Repositories,
    hasher: PasswordHasher,
    validator: PasswordValidator,
}

impl Seeder {
    pub fn new(repos: Repositories, config: &AuthConfig) -> Self {
        Self {
            repos,
            hasher: PasswordHasher::new(),
            validator: PasswordValidator::new(config),
        }
    }

    /// Seed everything. `admin_password` defaults to [`DEFAULT_ADMIN_PASSWORD`].
    pub async fn run(&self, admin_password: Option<&str>) -> AppResult<SeedReport> {
        if let Some(senha) = admin_password {
            self.validator.validate(senha, &[ADMIN_MATRICULA])?;
        }
        let mut report = SeedReport::default();

        let admin = NewEmployee {
            matricula: ADMIN_MATRICULA.to_string(),
            nome: "Administrador".to_string(),
            email: "admin@empresa.com".to_string(),
            senha: admin_password.unwrap_or(DEFAULT_ADMIN_PASSWORD).to_string(),
            cargo: "Administrador".to_string(),
            departamento: "TI".to_string(),
            gestor_matricula: None,
        };
        self.seed_employee(admin, &mut report).await?;

        for (matricula, nome, cargo, departamento, gestor) in SAMPLE_EMPLOYEES {
            let employee = NewEmployee {
                matricula: matricula.to_string(),
                nome: nome.to_string(),
                email: format!("{matricula}@empresa.com"),
                senha: SAMPLE_PASSWORD.to_string(),
                cargo: cargo.to_string(),
                departamento: departamento.to_string(),
                gestor_matricula: Some(gestor.to_string()),
            };
            self.seed_employee(employee, &mut report).await?;
        }

        self.seed_current_cycle(&mut report).await?;

        info!(
            created = report.created.len(),
            skipped = report.skipped.len(),
            "Seeding finished"
        );
        Ok(report)
    }

    async fn seed_employee(&self, data: NewEmployee, report: &mut SeedReport) -> AppResult<()> {
        let label = format!("colaborador {}", data.matricula);
        if self
            .repos
            .employees
            .find_by_matricula(&data.matricula)
            .await?
            .is_some()
        {
            report.skipped.push(label);
            return Ok(());
        }
        validate(&data)?;
        let senha_hash = self.hasher.hash_password(&data.senha)?;
        let employee = self.repos.employees.create(data.into_record(senha_hash)).await?;
        info!(matricula = %employee.matricula, "Seeded employee");
        report.created.push(label);
        Ok(())
    }

    async fn seed_current_cycle(&self, report: &mut SeedReport) -> AppResult<()> {
        let ano = Utc::now().year();
        let label = format!("ciclo {ano}");
        let (Some(data_inicio), Some(data_fim)) = (
            NaiveDate::from_ymd_opt(ano, 1, 1),
            NaiveDate::from_ymd_opt(ano, 12, 31),
        ) else {
            return Err(AppError::internal(format!("Ano fora do intervalo: {ano}")));
        };

        let cycle = NewCycle {
            ano,
            descricao: Some(format!("Ciclo de Avaliação {ano}")),
            data_inicio,
            data_fim,
            status: CycleStatus::EmAndamento,
        };
        match self.repos.cycles.create(cycle).await {
            Ok(cycle) => {
                info!(ciclo_id = cycle.id, ano, "Seeded current cycle");
                report.created.push(label);
                Ok(())
            }
            Err(e) if e.is(ErrorKind::Conflict) => {
                report.skipped.push(label);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
