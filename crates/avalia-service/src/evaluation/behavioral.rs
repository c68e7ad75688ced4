//! Behavioral evaluation workflow.

use std::sync::Arc;

use tracing::{info, warn};

use avalia_core::error::AppError;
use avalia_core::result::AppResult;
use avalia_core::types::PageRequest;
use avalia_database::{BehavioralEvaluationRepository, CycleRepository, EmployeeRepository};
use avalia_entity::{
    BehavioralEvaluation, BehavioralEvaluationPatch, EvaluationFilter, EvaluationStatus,
    NewBehavioralEvaluation,
};

use crate::context::RequestContext;
use crate::validation::validate;

/// Checks that the cycle and both parties of an evaluation exist.
pub(crate) async fn require_references(
    cycles: &dyn CycleRepository,
    employees: &dyn EmployeeRepository,
    ciclo_id: i32,
    avaliado: &str,
    avaliador: &str,
) -> AppResult<()> {
    if cycles.find_by_id(ciclo_id).await?.is_none() {
        return Err(AppError::not_found("Ciclo não encontrado"));
    }
    if employees.find_by_matricula(avaliado).await?.is_none() {
        return Err(AppError::not_found("Colaborador avaliado não encontrado"));
    }
    if employees.find_by_matricula(avaliador).await?.is_none() {
        return Err(AppError::not_found("Colaborador avaliador não encontrado"));
    }
    Ok(())
}

/// Handles behavioral (competency) evaluations.
#[derive(Clone)]
pub struct BehavioralEvaluationService {
    evaluations: Arc<dyn BehavioralEvaluationRepository>,
    cycles: Arc<dyn CycleRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl std::fmt::Debug for BehavioralEvaluationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BehavioralEvaluationService")
            .finish_non_exhaustive()
    }
}

impl BehavioralEvaluationService {
    /// Creates a new behavioral evaluation service.
    pub fn new(
        evaluations: Arc<dyn BehavioralEvaluationRepository>,
        cycles: Arc<dyn CycleRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            evaluations,
            cycles,
            employees,
        }
    }

    /// Record a new evaluation in `pendente` status.
    pub async fn create(&self, data: NewBehavioralEvaluation) -> AppResult<BehavioralEvaluation> {
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
            avaliador = %evaluation.avaliador_matricula,
            media = evaluation.media_competencias,
            "Behavioral evaluation created"
        );
        Ok(evaluation)
    }

    /// List evaluations matching `filter`.
    pub async fn list(
        &self,
        filter: &EvaluationFilter,
        page: PageRequest,
    ) -> AppResult<Vec<BehavioralEvaluation>> {
        self.evaluations.list(filter, page).await
    }

    /// Evaluations where the caller is the evaluated party.
    pub async fn mine(
        &self,
        ctx: &RequestContext,
        ciclo_id: Option<i32>,
        page: PageRequest,
    ) -> AppResult<Vec<BehavioralEvaluation>> {
        let filter = EvaluationFilter {
            ciclo_id,
            avaliado_matricula: Some(ctx.matricula().to_string()),
            ..Default::default()
        };
        self.evaluations.list(&filter, page).await
    }

    /// Pending evaluations the caller still has to fill in.
    pub async fn pending(
        &self,
        ctx: &RequestContext,
        ciclo_id: Option<i32>,
        page: PageRequest,
    ) -> AppResult<Vec<BehavioralEvaluation>> {
        let filter = EvaluationFilter {
            ciclo_id,
            avaliador_matricula: Some(ctx.matricula().to_string()),
            status: Some(EvaluationStatus::Pendente),
            ..Default::default()
        };
        self.evaluations.list(&filter, page).await
    }

    /// Fetch one evaluation.
    pub async fn get(&self, id: i32) -> AppResult<BehavioralEvaluation> {
        self.evaluations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Avaliação não encontrada"))
    }

    /// Apply a partial update; the average is recomputed.
    pub async fn update(
        &self,
        id: i32,
        patch: BehavioralEvaluationPatch,
    ) -> AppResult<BehavioralEvaluation> {
        validate(&patch)?;
        let evaluation = self.evaluations.update(id, patch).await?;
        info!(avaliacao_id = id, media = evaluation.media_competencias, "Behavioral evaluation updated");
        Ok(evaluation)
    }

    /// Mark an evaluation as `concluida`.
    pub async fn complete(&self, id: i32) -> AppResult<BehavioralEvaluation> {
        let evaluation = self
            .evaluations
            .complete(id)
            .await
            .inspect_err(|e| warn!(avaliacao_id = id, error = %e, "Completion rejected"))?;
        info!(avaliacao_id = id, "Behavioral evaluation completed");
        Ok(evaluation)
    }

    /// Delete an evaluation.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.evaluations.delete(id).await?;
        info!(avaliacao_id = id, "Behavioral evaluation deleted");
        Ok(())
    }
}
