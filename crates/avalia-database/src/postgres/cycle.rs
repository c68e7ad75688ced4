//! Cycle repository backed by PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use avalia_core::error::{AppError, ErrorKind};
use avalia_core::result::AppResult;
use avalia_core::types::PageRequest;
use avalia_entity::{Cycle, CyclePatch, CycleStatus, NewCycle};

use super::{is_foreign_key_violation, map_db_error};
use crate::repository::CycleRepository;

/// Cycle persistence over the `ciclos` table.
#[derive(Debug, Clone)]
pub struct PgCycleRepository {
    pool: PgPool,
}

impl PgCycleRepository {
    /// Create a new cycle repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CycleRepository for PgCycleRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Cycle>> {
        sqlx::query_as::<_, Cycle>("SELECT * FROM ciclos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find cycle", e))
    }

    async fn find_active(&self) -> AppResult<Option<Cycle>> {
        sqlx::query_as::<_, Cycle>(
            "SELECT * FROM ciclos WHERE status = $1 ORDER BY ano DESC LIMIT 1",
        )
        .bind(CycleStatus::EmAndamento)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find active cycle", e))
    }

    async fn list(&self, page: PageRequest) -> AppResult<Vec<Cycle>> {
        sqlx::query_as::<_, Cycle>("SELECT * FROM ciclos ORDER BY id LIMIT $1 OFFSET $2")
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list cycles", e))
    }

    async fn create(&self, data: NewCycle) -> AppResult<Cycle> {
        sqlx::query_as::<_, Cycle>(
            "INSERT INTO ciclos (ano, descricao, data_inicio, data_fim, status) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.ano)
        .bind(&data.descricao)
        .bind(data.data_inicio)
        .bind(data.data_fim)
        .bind(data.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to create cycle"))
    }

    async fn update(&self, id: i32, patch: CyclePatch) -> AppResult<Cycle> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error(e, "Failed to begin transaction"))?;

        let mut cycle = sqlx::query_as::<_, Cycle>("SELECT * FROM ciclos WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_db_error(e, "Failed to lock cycle"))?
            .ok_or_else(|| AppError::not_found("Ciclo não encontrado"))?;

        patch.apply(&mut cycle);
        cycle.check_dates()?;

        let updated = sqlx::query_as::<_, Cycle>(
            "UPDATE ciclos SET descricao = $2, data_inicio = $3, data_fim = $4, status = $5, \
             atualizado_em = $6 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&cycle.descricao)
        .bind(cycle.data_inicio)
        .bind(cycle.data_fim)
        .bind(cycle.status)
        .bind(cycle.atualizado_em)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "Failed to update cycle"))?;

        tx.commit()
            .await
            .map_err(|e| map_db_error(e, "Failed to commit cycle"))?;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM ciclos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    AppError::conflict("Ciclo possui avaliações ou metas vinculadas")
                } else {
                    map_db_error(e, "Failed to delete cycle")
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Ciclo não encontrado"));
        }
        Ok(())
    }
}
