//! Goal repository backed by PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use avalia_core::error::{AppError, ErrorKind};
use avalia_core::result::AppResult;
use avalia_core::types::PageRequest;
use avalia_entity::{Goal, GoalFilter, GoalPatch, NewGoal};

use super::map_db_error;
use crate::repository::GoalRepository;

/// Goal persistence over the `metas` table.
#[derive(Debug, Clone)]
pub struct PgGoalRepository {
    pool: PgPool,
}

impl PgGoalRepository {
    /// Create a new goal repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalRepository for PgGoalRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Goal>> {
        sqlx::query_as::<_, Goal>("SELECT * FROM metas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find goal", e))
    }

    async fn list(&self, filter: &GoalFilter, page: PageRequest) -> AppResult<Vec<Goal>> {
        sqlx::query_as::<_, Goal>(
            "SELECT * FROM metas \
             WHERE ($1::int IS NULL OR ciclo_id = $1) \
               AND ($2::varchar IS NULL OR colaborador_matricula = $2) \
             ORDER BY id LIMIT $3 OFFSET $4",
        )
        .bind(filter.ciclo_id)
        .bind(&filter.colaborador_matricula)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list goals", e))
    }

    async fn create(&self, data: NewGoal) -> AppResult<Goal> {
        sqlx::query_as::<_, Goal>(
            "INSERT INTO metas (ciclo_id, colaborador_matricula, titulo, descricao, peso, data_limite) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(data.ciclo_id)
        .bind(&data.colaborador_matricula)
        .bind(&data.titulo)
        .bind(&data.descricao)
        .bind(data.peso)
        .bind(data.data_limite)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to create goal"))
    }

    async fn update(&self, id: i32, patch: GoalPatch) -> AppResult<Goal> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error(e, "Failed to begin transaction"))?;

        let mut goal = sqlx::query_as::<_, Goal>("SELECT * FROM metas WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_db_error(e, "Failed to lock goal"))?
            .ok_or_else(|| AppError::not_found("Meta não encontrada"))?;

        patch.apply(&mut goal);

        let updated = sqlx::query_as::<_, Goal>(
            "UPDATE metas SET titulo = $2, descricao = $3, peso = $4, data_limite = $5, \
             resultado_alcancado = $6, comentarios_gestor = $7, atualizado_em = $8 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&goal.titulo)
        .bind(&goal.descricao)
        .bind(goal.peso)
        .bind(goal.data_limite)
        .bind(goal.resultado_alcancado)
        .bind(&goal.comentarios_gestor)
        .bind(goal.atualizado_em)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "Failed to update goal"))?;

        tx.commit()
            .await
            .map_err(|e| map_db_error(e, "Failed to commit goal"))?;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM metas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to delete goal"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Meta não encontrada"));
        }
        Ok(())
    }
}
