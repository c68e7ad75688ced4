//! Goal entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use avalia_core::types::deserialize_some;

/// A weighted goal agreed with an employee for a cycle.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Goal {
    /// Surrogate key.
    pub id: i32,
    /// Cycle reference.
    pub ciclo_id: i32,
    /// Owner of the goal.
    pub colaborador_matricula: String,
    /// Short title.
    pub titulo: String,
    /// Details.
    pub descricao: Option<String>,
    /// Relative weight (1-100).
    pub peso: i32,
    /// Due date.
    pub data_limite: NaiveDate,
    /// Achievement percentage (0-100) once assessed.
    pub resultado_alcancado: Option<f64>,
    /// Manager remarks.
    pub comentarios_gestor: Option<String>,
    /// When the goal was created.
    pub criado_em: DateTime<Utc>,
    /// When the goal was last updated.
    pub atualizado_em: DateTime<Utc>,
}

/// Input for creating a goal.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewGoal {
    /// Cycle reference.
    pub ciclo_id: i32,
    /// Owner of the goal.
    #[validate(length(min = 1, max = 50))]
    pub colaborador_matricula: String,
    /// Short title.
    #[validate(length(min = 1, max = 200))]
    pub titulo: String,
    /// Details.
    #[serde(default)]
    pub descricao: Option<String>,
    /// Relative weight.
    #[validate(range(min = 1, max = 100))]
    pub peso: i32,
    /// Due date.
    pub data_limite: NaiveDate,
}

/// Partial update for a goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct GoalPatch {
    /// New title.
    #[validate(length(min = 1, max = 200))]
    pub titulo: Option<String>,
    /// New details; `null` clears them.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub descricao: Option<Option<String>>,
    /// New weight.
    #[validate(range(min = 1, max = 100))]
    pub peso: Option<i32>,
    /// New due date.
    pub data_limite: Option<NaiveDate>,
    /// Achievement percentage; `null` clears it.
    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub resultado_alcancado: Option<Option<f64>>,
    /// Manager remarks; `null` clears them.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub comentarios_gestor: Option<Option<String>>,
}

impl GoalPatch {
    /// Apply the supplied fields onto `goal` and bump `atualizado_em`.
    pub fn apply(&self, goal: &mut Goal) {
        if let Some(titulo) = &self.titulo {
            goal.titulo = titulo.clone();
        }
        if let Some(descricao) = &self.descricao {
            goal.descricao = descricao.clone();
        }
        if let Some(peso) = self.peso {
            goal.peso = peso;
        }
        if let Some(data_limite) = self.data_limite {
            goal.data_limite = data_limite;
        }
        if let Some(resultado) = self.resultado_alcancado {
            goal.resultado_alcancado = resultado;
        }
        if let Some(comentarios) = &self.comentarios_gestor {
            goal.comentarios_gestor = comentarios.clone();
        }
        goal.atualizado_em = Utc::now();
    }
}

/// Listing filter for goals. Unset fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalFilter {
    /// Restrict to one cycle.
    pub ciclo_id: Option<i32>,
    /// Restrict to one owner.
    pub colaborador_matricula: Option<String>,
}

impl GoalFilter {
    /// Whether `goal` passes this filter.
    pub fn matches(&self, goal: &Goal) -> bool {
        self.ciclo_id.is_none_or(|id| goal.ciclo_id == id)
            && self
                .colaborador_matricula
                .as_deref()
                .is_none_or(|m| goal.colaborador_matricula == m)
    }
}
