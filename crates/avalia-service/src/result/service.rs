//! Final result lookup for an employee in a cycle.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use avalia_auth::AccessPolicy;
use avalia_core::error::AppError;
use avalia_core::result::AppResult;
use avalia_database::{
    BehavioralEvaluationRepository, CycleRepository, DeliverablesEvaluationRepository,
    EmployeeRepository,
};

use super::aggregate::{FinalScore, aggregate_final_score};
use crate::context::RequestContext;

/// Final result as returned to API clients.
#[derive(Debug, Clone, Serialize)]
pub struct FinalResult {
    pub colaborador_matricula: String,
    pub colaborador_nome: String,
    pub ciclo_id: i32,
    pub ciclo_ano: i32,
    pub ciclo_descricao: Option<String>,
    #[serde(flatten)]
    pub score: FinalScore,
}

/// Read-side aggregation over both evaluation tracks.
#[derive(Clone)]
pub struct ResultService {
    employees: Arc<dyn EmployeeRepository>,
    cycles: Arc<dyn CycleRepository>,
    behavioral: Arc<dyn BehavioralEvaluationRepository>,
    deliverables: Arc<dyn DeliverablesEvaluationRepository>,
    policy: AccessPolicy,
}

impl std::fmt::Debug for ResultService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultService")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl ResultService {
    /// Creates a new result service.
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        cycles: Arc<dyn CycleRepository>,
        behavioral: Arc<dyn BehavioralEvaluationRepository>,
        deliverables: Arc<dyn DeliverablesEvaluationRepository>,
        policy: AccessPolicy,
    ) -> Self {
        Self {
            employees,
            cycles,
            behavioral,
            deliverables,
            policy,
        }
    }

    /// Compute the final result of `matricula` in `ciclo_id`.
    ///
    /// The caller must be the employee, their direct manager, or an administrator.
    pub async fn final_result(
        &self,
        ctx: &RequestContext,
        matricula: &str,
        ciclo_id: i32,
    ) -> AppResult<FinalResult> {
        let employee = self
            .employees
            .find_by_matricula(matricula)
            .await?
            .ok_or_else(|| AppError::not_found("Colaborador não encontrado"))?;

        self.policy
            .require_view_results(&ctx.employee, &employee)
            .inspect_err(|_| {
                warn!(
                    caller = %ctx.matricula(),
                    matricula,
                    "Final result access denied"
                )
            })?;

        let cycle = self
            .cycles
            .find_by_id(ciclo_id)
            .await?
            .ok_or_else(|| AppError::not_found("Ciclo não encontrado"))?;

        let behavioral = self.behavioral.averages_for(matricula, ciclo_id).await?;
        let deliverables = self.deliverables.averages_for(matricula, ciclo_id).await?;
        let score = aggregate_final_score(&behavioral, &deliverables)?;

        debug!(
            matricula,
            ciclo_id,
            comportamentais = behavioral.len(),
            entregas = deliverables.len(),
            nota_final = score.nota_final,
            "Final result computed"
        );

        Ok(FinalResult {
            colaborador_matricula: employee.matricula,
            colaborador_nome: employee.nome,
            ciclo_id: cycle.id,
            ciclo_ano: cycle.ano,
            ciclo_descricao: cycle.descricao,
            score,
        })
    }
}
