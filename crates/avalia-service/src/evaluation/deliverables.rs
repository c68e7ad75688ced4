//! Deliverables evaluation workflow.

use std::sync::Arc;

use tracing::{info, warn};

use avalia_core::error::AppError;
use avalia_core::result::AppResult;
use avalia_core::types::PageRequest;
use avalia_database::{CycleRepository, DeliverablesEvaluationRepository, EmployeeRepository};
use avalia_entity::{
    DeliverablesEvaluation, DeliverablesEvaluationPatch, EvaluationFilter,
    NewDeliverablesEvaluation,
};

use super::behavioral::require_references;
use crate::context::RequestContext;
use crate::validation::validate;

/// Handles deliverables evaluations.
#[derive(Clone)]
pub struct DeliverablesEvaluationService {
    evaluations: Arc<dyn DeliverablesEvaluationRepository>,
    cycles: Arc<dyn CycleRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl std::fmt::Debug for DeliverablesEvaluationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliverablesEvaluationService")
            .finish_non_exhaustive()
    }
}

impl DeliverablesEvaluationService {
    /// Creates a new deliverables evaluation service.
    pub fn new(
        evaluations: Arc<dyn DeliverablesEvaluationRepository>,
        cycles: Arc<dyn CycleRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            evaluations,
            cycles,
            employees,
        }
    }

    pub async fn create(
        &self,
        data: NewDeliverablesEvaluation,
    ) -> AppResult<DeliverablesEvaluation> {
        validate(&data)?;
        require_references(
            self.cycles.as_ref(),
            self.employees.as_ref(),
            data.ciclo_id,
            &data.avaliado_matricula,
            &data.avaliador_matricula,
        )
        .await
        .inspect_err(|e| warn!(ciclo_id = data.ciclo_id, error = %e, "Evaluation rejected"))?;

        let evaluation = self.evaluations.create(data).await?;
        info!(
            avaliacao_id = evaluation.id,
            ciclo_id = evaluation.ciclo_id,
            avaliado = %evaluation.avaliado_matricula,
            media = evaluation.media_entregas,
            "Deliverables evaluation created"
        );
        Ok(evaluation)
    }

    pub async fn list(
        &self,
        filter: &EvaluationFilter,
        page: PageRequest,
    ) -> AppResult<Vec<DeliverablesEvaluation>> {
        self.evaluations.list(filter, page).await
    }

    /// Deliverables evaluations of the caller.
    pub async fn mine(
        &self,
        ctx: &RequestContext,
        ciclo_id: Option<i32>,
        page: PageRequest,
    ) -> AppResult<Vec<DeliverablesEvaluation>> {
        let filter = EvaluationFilter {
            ciclo_id,
            avaliado_matricula: Some(ctx.matricula().to_string()),
            ..Default::default()
        };
        self.evaluations.list(&filter, page).await
    }

    pub async fn get(&self, id: i32) -> AppResult<DeliverablesEvaluation> {
        self.evaluations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Avaliação não encontrada"))
    }

    pub async fn update(
        &self,
        id: i32,
        patch: DeliverablesEvaluationPatch,
    ) -> AppResult<DeliverablesEvaluation> {
        validate(&patch)?;
        let evaluation = self.evaluations.update(id, patch).await?;
        info!(avaliacao_id = id, media = evaluation.media_entregas, "Deliverables evaluation updated");
        Ok(evaluation)
    }

    pub async fn complete(&self, id: i32) -> AppResult<DeliverablesEvaluation> {
        let evaluation = self
            .evaluations
            .complete(id)
            .await
            .inspect_err(|e| warn!(avaliacao_id = id, error = %e, "Completion rejected"))?;
        info!(avaliacao_id = id, "Deliverables evaluation completed");
        Ok(evaluation)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.evaluations.delete(id).await?;
        info!(avaliacao_id = id, "Deliverables evaluation deleted");
        Ok(())
    }
}
