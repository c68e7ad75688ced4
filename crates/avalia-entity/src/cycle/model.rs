//! Cycle entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use avalia_core::AppError;
use avalia_core::types::deserialize_some;

use super::status::CycleStatus;

/// A yearly review cycle.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cycle {
    /// Surrogate key.
    pub id: i32,
    /// Unique reference year.
    pub ano: i32,
    /// Free-form description.
    pub descricao: Option<String>,
    /// First day of the cycle.
    pub data_inicio: NaiveDate,
    /// Last day of the cycle.
    pub data_fim: NaiveDate,
    /// Lifecycle stage.
    pub status: CycleStatus,
    /// When the cycle was created.
    pub criado_em: DateTime<Utc>,
    /// When the cycle was last updated.
    pub atualizado_em: DateTime<Utc>,
}

impl Cycle {
    /// Ensure the date range is not inverted.
    pub fn check_dates(&self) -> Result<(), AppError> {
        check_range(self.data_inicio, self.data_fim)
    }
}

/// Input for opening a new cycle.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewCycle {
    /// Reference year.
    #[validate(range(min = 2020, max = 2100))]
    pub ano: i32,
    /// Description.
    #[serde(default)]
    #[validate(length(max = 500))]
    pub descricao: Option<String>,
    /// First day.
    pub data_inicio: NaiveDate,
    /// Last day.
    pub data_fim: NaiveDate,
    /// Initial status.
    #[serde(default)]
    pub status: CycleStatus,
}

impl NewCycle {
    /// Ensure the date range is not inverted.
    pub fn check_dates(&self) -> Result<(), AppError> {
        check_range(self.data_inicio, self.data_fim)
    }
}

/// Partial update for a cycle. The year is immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CyclePatch {
    /// New description; `null` clears it.
    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(length(max = 500))]
    pub descricao: Option<Option<String>>,
    /// New first day.
    pub data_inicio: Option<NaiveDate>,
    /// New last day.
    pub data_fim: Option<NaiveDate>,
    /// New status.
    pub status: Option<CycleStatus>,
}

impl CyclePatch {
    /// Apply the supplied fields onto `cycle` and bump `atualizado_em`.
    pub fn apply(&self, cycle: &mut Cycle) {
        if let Some(descricao) = &self.descricao {
            cycle.descricao = descricao.clone();
        }
        if let Some(data_inicio) = self.data_inicio {
            cycle.data_inicio = data_inicio;
        }
        if let Some(data_fim) = self.data_fim {
            cycle.data_fim = data_fim;
        }
        if let Some(status) = self.status {
            cycle.status = status;
        }
        cycle.atualizado_em = Utc::now();
    }
}

fn check_range(inicio: NaiveDate, fim: NaiveDate) -> Result<(), AppError> {
    if inicio > fim {
        return Err(AppError::validation(
            "data_inicio deve ser anterior ou igual a data_fim",
        ));
    }
    Ok(())
}
