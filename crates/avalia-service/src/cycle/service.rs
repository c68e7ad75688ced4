//! Review cycle management.

use std::sync::Arc;

use tracing::{info, warn};

use avalia_core::error::AppError;
use avalia_core::result::AppResult;
use avalia_core::types::PageRequest;
use avalia_database::CycleRepository;
use avalia_entity::{Cycle, CyclePatch, NewCycle};

use crate::validation::validate;

/// Handles cycle CRUD and active-cycle lookup.
#[derive(Clone)]
pub struct CycleService {
    cycles: Arc<dyn CycleRepository>,
}

impl std::fmt::Debug for CycleService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CycleService").finish_non_exhaustive()
    }
}

impl CycleService {
    /// Creates a new cycle service.
    pub fn new(cycles: Arc<dyn CycleRepository>) -> Self {
        Self { cycles }
    }

    /// Open a new cycle. One cycle per year.
    pub async fn create(&self, data: NewCycle) -> AppResult<Cycle> {
        validate(&data)?;
        data.check_dates()?;
        let ano = data.ano;
        let cycle = self
            .cycles
            .create(data)
            .await
            .inspect_err(|e| warn!(ano, error = %e, "Cycle creation rejected"))?;
        info!(ciclo_id = cycle.id, ano = cycle.ano, "Cycle created");
        Ok(cycle)
    }

    /// List cycles in key order.
    pub async fn list(&self, page: PageRequest) -> AppResult<Vec<Cycle>> {
        self.cycles.list(page).await
    }

    /// Fetch one cycle.
    pub async fn get(&self, id: i32) -> AppResult<Cycle> {
        self.cycles
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Ciclo não encontrado"))
    }

    /// The in-progress cycle with the greatest year.
    pub async fn active(&self) -> AppResult<Cycle> {
        self.cycles
            .find_active()
            .await?
            .ok_or_else(|| AppError::not_found("Nenhum ciclo ativo encontrado"))
    }

    /// Apply a partial update; the resulting date range must stay ordered.
    pub async fn update(&self, id: i32, patch: CyclePatch) -> AppResult<Cycle> {
        validate(&patch)?;
        let cycle = self
            .cycles
            .update(id, patch)
            .await
            .inspect_err(|e| warn!(ciclo_id = id, error = %e, "Cycle update rejected"))?;
        info!(ciclo_id = cycle.id, status = %cycle.status, "Cycle updated");
        Ok(cycle)
    }

    /// Delete a cycle that nothing references.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.cycles
            .delete(id)
            .await
            .inspect_err(|e| warn!(ciclo_id = id, error = %e, "Cycle deletion rejected"))?;
        info!(ciclo_id = id, "Cycle deleted");
        Ok(())
    }
}
