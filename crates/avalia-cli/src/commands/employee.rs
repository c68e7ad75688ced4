//! Employee management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use avalia_core::config::AppConfig;
use avalia_core::error::AppError;
use avalia_core::types::PageRequest;
use avalia_core::types::pagination::MAX_LIMIT;
use avalia_entity::{Employee, EmployeeFilter, NewEmployee};
use avalia_service::EmployeeService;

use crate::output::{self, OutputFormat};

/// Arguments for employee commands
#[derive(Debug, Args)]
pub struct EmployeeArgs {
    /// Employee subcommand
    #[command(subcommand)]
    pub command: EmployeeCommand,
}

/// Employee subcommands
#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    /// List employees
    List {
        /// Include deactivated employees
        #[arg(short, long)]
        all: bool,
    },
    /// Register an employee
    Create {
        /// Employee identifier
        matricula: String,
        /// Full name
        #[arg(long)]
        nome: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Job title
        #[arg(long)]
        cargo: String,
        /// Department
        #[arg(long)]
        departamento: String,
        /// Direct manager identifier
        #[arg(long)]
        gestor: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(long)]
        senha: Option<String>,
    },
    /// Deactivate an employee
    Deactivate {
        /// Employee identifier
        matricula: String,
    },
    /// Replace an employee's password
    SetPassword {
        /// Employee identifier
        matricula: String,
        /// New password (will prompt if not provided)
        #[arg(long)]
        senha: Option<String>,
    },
}

/// Employee display row for table output
#[derive(Debug, Serialize, Tabled)]
struct EmployeeRow {
    matricula: String,
    nome: String,
    email: String,
    cargo: String,
    departamento: String,
    gestor: String,
    ativo: bool,
}

impl From<Employee> for EmployeeRow {
    fn from(e: Employee) -> Self {
        Self {
            matricula: e.matricula,
            nome: e.nome,
            email: e.email,
            cargo: e.cargo,
            departamento: e.departamento,
            gestor: e.gestor_matricula.unwrap_or_else(|| "-".to_string()),
            ativo: e.ativo,
        }
    }
}

/// Execute employee commands
pub async fn execute(
    args: &EmployeeArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let repos = super::connect_repositories(config).await?;
    let service = EmployeeService::new(repos.employees.clone(), &config.auth);

    match &args.command {
        EmployeeCommand::List { all } => {
            let filter = EmployeeFilter {
                incluir_inativos: *all,
            };
            let employees = service
                .list(filter, PageRequest::new(0, MAX_LIMIT))
                .await?;
            let rows: Vec<EmployeeRow> = employees.into_iter().map(EmployeeRow::from).collect();
            output::print_list(&rows, format);
        }
        EmployeeCommand::Create {
            matricula,
            nome,
            email,
            cargo,
            departamento,
            gestor,
            senha,
        } => {
            let senha = match senha {
                Some(s) => s.clone(),
                None => super::prompt_password("Senha")?,
            };
            let employee = service
                .create(NewEmployee {
                    matricula: matricula.clone(),
                    nome: nome.clone(),
                    email: email.clone(),
                    senha,
                    cargo: cargo.clone(),
                    departamento: departamento.clone(),
                    gestor_matricula: gestor.clone(),
                })
                .await?;
            output::print_item(&EmployeeRow::from(employee), format);
            output::print_success(&format!("Colaborador '{matricula}' cadastrado"));
        }
        EmployeeCommand::Deactivate { matricula } => {
            service.deactivate(matricula).await?;
            output::print_success(&format!("Colaborador '{matricula}' desativado"));
        }
        EmployeeCommand::SetPassword { matricula, senha } => {
            let senha = match senha {
                Some(s) => s.clone(),
                None => super::prompt_password("Nova senha")?,
            };
            service.set_password(matricula, &senha).await?;
            output::print_success(&format!("Senha de '{matricula}' alterada"));
        }
    }

    repos.close().await;
    Ok(())
}
