//! Goal management.

use std::sync::Arc;

use tracing::{info, warn};

use avalia_core::error::AppError;
use avalia_core::result::AppResult;
use avalia_core::types::PageRequest;
use avalia_database::{CycleRepository, EmployeeRepository, GoalRepository};
use avalia_entity::{Goal, GoalFilter, GoalPatch, NewGoal};

use crate::context::RequestContext;
use crate::validation::validate;

/// Handles goal CRUD.
#[derive(Clone)]
pub struct GoalService {
    goals: Arc<dyn GoalRepository>,
    cycles: Arc<dyn CycleRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl std::fmt::Debug for GoalService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoalService").finish_non_exhaustive()
    }
}

impl GoalService {
    /// Creates a new goal service.
    pub fn new(
        goals: Arc<dyn GoalRepository>,
        cycles: Arc<dyn CycleRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            goals,
            cycles,
            employees,
        }
    }

    /// Register a goal for an employee within a cycle.
    pub async fn create(&self, data: NewGoal) -> AppResult<Goal> {
        validate(&data)?;
        if self.cycles.find_by_id(data.ciclo_id).await?.is_none() {
            warn!(ciclo_id = data.ciclo_id, "Goal rejected: unknown cycle");
            return Err(AppError::not_found("Ciclo não encontrado"));
        }
        if self
            .employees
            .find_by_matricula(&data.colaborador_matricula)
            .await?
            .is_none()
        {
            warn!(colaborador = %data.colaborador_matricula, "Goal rejected: unknown employee");
            return Err(AppError::not_found("Colaborador não encontrado"));
        }

        let goal = self.goals.create(data).await?;
        info!(
            meta_id = goal.id,
            ciclo_id = goal.ciclo_id,
            colaborador = %goal.colaborador_matricula,
            "Goal created"
        );
        Ok(goal)
    }

    pub async fn list(&self, filter: &GoalFilter, page: PageRequest) -> AppResult<Vec<Goal>> {
        self.goals.list(filter, page).await
    }

    /// Goals owned by the caller.
    pub async fn mine(
        &self,
        ctx: &RequestContext,
        ciclo_id: Option<i32>,
        page: PageRequest,
    ) -> AppResult<Vec<Goal>> {
        let filter = GoalFilter {
            ciclo_id,
            colaborador_matricula: Some(ctx.matricula().to_string()),
        };
        self.goals.list(&filter, page).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Goal> {
        self.goals
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Meta não encontrada"))
    }

    /// Partial update, including recording the achieved result.
    pub async fn update(&self, id: i32, patch: GoalPatch) -> AppResult<Goal> {
        validate(&patch)?;
        let goal = self.goals.update(id, patch).await?;
        info!(meta_id = id, resultado = ?goal.resultado_alcancado, "Goal updated");
        Ok(goal)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.goals.delete(id).await?;
        info!(meta_id = id, "Goal deleted");
        Ok(())
    }
}
