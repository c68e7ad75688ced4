//! Behavioral evaluation repository backed by PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use avalia_core::error::{AppError, ErrorKind};
use avalia_core::result::AppResult;
use avalia_core::types::PageRequest;
use avalia_entity::{
    BehavioralEvaluation, BehavioralEvaluationPatch, EvaluationFilter, EvaluationStatus,
    NewBehavioralEvaluation,
};

use super::map_db_error;
use crate::repository::BehavioralEvaluationRepository;

/// Behavioral evaluation persistence over `avaliacoes_comportamentais`.
#[derive(Debug, Clone)]
pub struct PgBehavioralEvaluationRepository {
    pool: PgPool,
}

impl PgBehavioralEvaluationRepository {
    /// Create a new behavioral evaluation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BehavioralEvaluationRepository for PgBehavioralEvaluationRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<BehavioralEvaluation>> {
        sqlx::query_as::<_, BehavioralEvaluation>(
            "SELECT * FROM avaliacoes_comportamentais WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find evaluation", e))
    }

    async fn list(
        &self,
        filter: &EvaluationFilter,
        page: PageRequest,
    ) -> AppResult<Vec<BehavioralEvaluation>> {
        sqlx::query_as::<_, BehavioralEvaluation>(
            "SELECT * FROM avaliacoes_comportamentais \
             WHERE ($1::int IS NULL OR ciclo_id = $1) \
               AND ($2::varchar IS NULL OR avaliado_matricula = $2) \
               AND ($3::varchar IS NULL OR avaliador_matricula = $3) \
               AND ($4::avaliacao_status IS NULL OR status = $4) \
             ORDER BY id LIMIT $5 OFFSET $6",
        )
        .bind(filter.ciclo_id)
        .bind(&filter.avaliado_matricula)
        .bind(&filter.avaliador_matricula)
        .bind(filter.status)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list evaluations", e))
    }

    async fn create(&self, data: NewBehavioralEvaluation) -> AppResult<BehavioralEvaluation> {
        let media = data.media_competencias();
        sqlx::query_as::<_, BehavioralEvaluation>(
            "INSERT INTO avaliacoes_comportamentais \
             (ciclo_id, avaliado_matricula, avaliador_matricula, tipo_avaliacao, lideranca, \
              comunicacao, trabalho_equipe, resolucao_problemas, adaptabilidade, \
              media_competencias, comentarios) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING *",
        )
        .bind(data.ciclo_id)
        .bind(&data.avaliado_matricula)
        .bind(&data.avaliador_matricula)
        .bind(data.tipo_avaliacao)
        .bind(data.lideranca)
        .bind(data.comunicacao)
        .bind(data.trabalho_equipe)
        .bind(data.resolucao_problemas)
        .bind(data.adaptabilidade)
        .bind(media)
        .bind(&data.comentarios)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to create evaluation"))
    }

    async fn update(
        &self,
        id: i32,
        patch: BehavioralEvaluationPatch,
    ) -> AppResult<BehavioralEvaluation> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error(e, "Failed to begin transaction"))?;

        let mut evaluation = sqlx::query_as::<_, BehavioralEvaluation>(
            "SELECT * FROM avaliacoes_comportamentais WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "Failed to lock evaluation"))?
        .ok_or_else(|| AppError::not_found("Avaliação não encontrada"))?;

        patch.apply(&mut evaluation);

        let updated = sqlx::query_as::<_, BehavioralEvaluation>(
            "UPDATE avaliacoes_comportamentais SET lideranca = $2, comunicacao = $3, \
             trabalho_equipe = $4, resolucao_problemas = $5, adaptabilidade = $6, \
             media_competencias = $7, comentarios = $8, status = $9, atualizado_em = $10 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(evaluation.lideranca)
        .bind(evaluation.comunicacao)
        .bind(evaluation.trabalho_equipe)
        .bind(evaluation.resolucao_problemas)
        .bind(evaluation.adaptabilidade)
        .bind(evaluation.media_competencias)
        .bind(&evaluation.comentarios)
        .bind(evaluation.status)
        .bind(evaluation.atualizado_em)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "Failed to update evaluation"))?;

        tx.commit()
            .await
            .map_err(|e| map_db_error(e, "Failed to commit evaluation"))?;
        Ok(updated)
    }

    async fn complete(&self, id: i32) -> AppResult<BehavioralEvaluation> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error(e, "Failed to begin transaction"))?;

        let status = sqlx::query_scalar::<_, EvaluationStatus>(
            "SELECT status FROM avaliacoes_comportamentais WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "Failed to lock evaluation"))?
        .ok_or_else(|| AppError::not_found("Avaliação não encontrada"))?;

        if status.is_completed() {
            return Err(AppError::conflict("Avaliação já está concluída"));
        }

        let updated = sqlx::query_as::<_, BehavioralEvaluation>(
            "UPDATE avaliacoes_comportamentais SET status = $2, atualizado_em = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(EvaluationStatus::Concluida)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "Failed to complete evaluation"))?;

        tx.commit()
            .await
            .map_err(|e| map_db_error(e, "Failed to commit evaluation"))?;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM avaliacoes_comportamentais WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to delete evaluation"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Avaliação não encontrada"));
        }
        Ok(())
    }

    async fn averages_for(&self, matricula: &str, ciclo_id: i32) -> AppResult<Vec<f64>> {
        sqlx::query_scalar::<_, f64>(
            "SELECT media_competencias FROM avaliacoes_comportamentais \
             WHERE avaliado_matricula = $1 AND ciclo_id = $2 ORDER BY id",
        )
        .bind(matricula)
        .bind(ciclo_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load competency averages", e)
        })
    }
}
