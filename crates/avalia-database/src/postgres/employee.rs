//! Employee repository backed by PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use avalia_core::error::{AppError, ErrorKind};
use avalia_core::result::AppResult;
use avalia_core::types::PageRequest;
use avalia_entity::{CreateEmployee, Employee, EmployeeChanges, EmployeeFilter};

use super::map_db_error;
use crate::repository::EmployeeRepository;

/// Employee persistence over the `colaboradores` table.
#[derive(Debug, Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    /// Create a new employee repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn manager_exists(
    conn: &mut sqlx::PgConnection,
    matricula: &str,
) -> AppResult<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM colaboradores WHERE matricula = $1)")
        .bind(matricula)
        .fetch_one(conn)
        .await
        .map_err(|e| map_db_error(e, "Failed to look up manager"))
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_by_matricula(&self, matricula: &str) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>("SELECT * FROM colaboradores WHERE matricula = $1")
            .bind(matricula)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find employee", e)
            })
    }

    async fn list(&self, filter: EmployeeFilter, page: PageRequest) -> AppResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(
            "SELECT * FROM colaboradores WHERE ($1 OR ativo) ORDER BY id LIMIT $2 OFFSET $3",
        )
        .bind(filter.incluir_inativos)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list employees", e))
    }

    async fn list_subordinates(
        &self,
        gestor_matricula: &str,
        filter: EmployeeFilter,
    ) -> AppResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(
            "SELECT * FROM colaboradores WHERE gestor_matricula = $1 AND ($2 OR ativo) ORDER BY id",
        )
        .bind(gestor_matricula)
        .bind(filter.incluir_inativos)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list subordinates", e)
        })
    }

    async fn create(&self, data: CreateEmployee) -> AppResult<Employee> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error(e, "Failed to begin transaction"))?;

        if let Some(gestor) = data.gestor_matricula.as_deref() {
            if !manager_exists(&mut *tx, gestor).await? {
                return Err(AppError::not_found("Gestor não encontrado"));
            }
        }

        let employee = sqlx::query_as::<_, Employee>(
            "INSERT INTO colaboradores \
             (matricula, nome, email, senha_hash, cargo, departamento, gestor_matricula) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&data.matricula)
        .bind(&data.nome)
        .bind(&data.email)
        .bind(&data.senha_hash)
        .bind(&data.cargo)
        .bind(&data.departamento)
        .bind(&data.gestor_matricula)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "Failed to create employee"))?;

        tx.commit()
            .await
            .map_err(|e| map_db_error(e, "Failed to commit employee"))?;
        Ok(employee)
    }

    async fn update(&self, matricula: &str, changes: EmployeeChanges) -> AppResult<Employee> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error(e, "Failed to begin transaction"))?;

        let mut employee = sqlx::query_as::<_, Employee>(
            "SELECT * FROM colaboradores WHERE matricula = $1 FOR UPDATE",
        )
        .bind(matricula)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "Failed to lock employee"))?
        .ok_or_else(|| AppError::not_found("Colaborador não encontrado"))?;

        if let Some(gestor) = changes.new_manager() {
            if gestor == matricula {
                return Err(AppError::validation(
                    "Colaborador não pode ser gestor de si mesmo",
                ));
            }
            if !manager_exists(&mut *tx, gestor).await? {
                return Err(AppError::not_found("Gestor não encontrado"));
            }
        }

        changes.apply(&mut employee);

        let updated = sqlx::query_as::<_, Employee>(
            "UPDATE colaboradores SET nome = $2, email = $3, senha_hash = $4, cargo = $5, \
             departamento = $6, gestor_matricula = $7, ativo = $8, atualizado_em = $9 \
             WHERE matricula = $1 RETURNING *",
        )
        .bind(matricula)
        .bind(&employee.nome)
        .bind(&employee.email)
        .bind(&employee.senha_hash)
        .bind(&employee.cargo)
        .bind(&employee.departamento)
        .bind(&employee.gestor_matricula)
        .bind(employee.ativo)
        .bind(employee.atualizado_em)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "Failed to update employee"))?;

        tx.commit()
            .await
            .map_err(|e| map_db_error(e, "Failed to commit employee"))?;
        Ok(updated)
    }

    async fn deactivate(&self, matricula: &str) -> AppResult<Employee> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error(e, "Failed to begin transaction"))?;

        let ativo = sqlx::query_scalar::<_, bool>(
            "SELECT ativo FROM colaboradores WHERE matricula = $1 FOR UPDATE",
        )
        .bind(matricula)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "Failed to lock employee"))?
        .ok_or_else(|| AppError::not_found("Colaborador não encontrado"))?;

        if !ativo {
            return Err(AppError::conflict("Colaborador já está inativo"));
        }

        let employee = sqlx::query_as::<_, Employee>(
            "UPDATE colaboradores SET ativo = FALSE, atualizado_em = NOW() \
             WHERE matricula = $1 RETURNING *",
        )
        .bind(matricula)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "Failed to deactivate employee"))?;

        tx.commit()
            .await
            .map_err(|e| map_db_error(e, "Failed to commit employee"))?;
        Ok(employee)
    }
}
