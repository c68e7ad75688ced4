//! Deliverables evaluation model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use avalia_core::types::deserialize_some;

use super::status::EvaluationStatus;
use super::Evaluation;
use crate::score::{MAX_SCORE, MIN_SCORE, score_average};

/// Assessment of an employee's deliverables within a cycle.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DeliverablesEvaluation {
    /// Surrogate key.
    pub id: i32,
    /// Cycle reference.
    pub ciclo_id: i32,
    /// Evaluated employee.
    pub avaliado_matricula: String,
    /// Evaluator.
    pub avaliador_matricula: String,
    /// Quality of the work delivered (1-5).
    pub qualidade: i32,
    /// Deadline adherence (1-5).
    pub prazo: i32,
    /// Productivity (1-5).
    pub produtividade: i32,
    /// Business impact (1-5).
    pub impacto: i32,
    /// Innovation (1-5).
    pub inovacao: i32,
    /// Mean of the five scores, rounded to two decimals.
    pub media_entregas: f64,
    /// Free-form remarks.
    pub comentarios: Option<String>,
    /// Workflow status.
    pub status: EvaluationStatus,
    /// When the evaluation was created.
    pub criado_em: DateTime<Utc>,
    /// When the evaluation was last updated.
    pub atualizado_em: DateTime<Utc>,
}

impl DeliverablesEvaluation {
    /// The five deliverable scores in a fixed order.
    pub fn scores(&self) -> [i32; 5] {
        [
            self.qualidade,
            self.prazo,
            self.produtividade,
            self.impacto,
            self.inovacao,
        ]
    }

    /// Recompute the derived average from the current scores.
    pub fn recompute_average(&mut self) {
        self.media_entregas = score_average(&self.scores());
    }
}

impl Evaluation for DeliverablesEvaluation {
    fn ciclo_id(&self) -> i32 {
        self.ciclo_id
    }

    fn avaliado_matricula(&self) -> &str {
        &self.avaliado_matricula
    }

    fn avaliador_matricula(&self) -> &str {
        &self.avaliador_matricula
    }

    fn status(&self) -> EvaluationStatus {
        self.status
    }

    fn average(&self) -> f64 {
        self.media_entregas
    }
}

/// Input for recording a deliverables evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewDeliverablesEvaluation {
    /// Cycle reference.
    pub ciclo_id: i32,
    /// Evaluated employee.
    #[validate(length(min = 1, max = 50))]
    pub avaliado_matricula: String,
    /// Evaluator.
    #[validate(length(min = 1, max = 50))]
    pub avaliador_matricula: String,
    /// Quality score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub qualidade: i32,
    /// Deadline score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub prazo: i32,
    /// Productivity score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub produtividade: i32,
    /// Impact score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub impacto: i32,
    /// Innovation score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub inovacao: i32,
    /// Free-form remarks.
    #[serde(default)]
    pub comentarios: Option<String>,
}

impl NewDeliverablesEvaluation {
    /// Rounded mean of the submitted scores.
    pub fn media_entregas(&self) -> f64 {
        score_average(&[
            self.qualidade,
            self.prazo,
            self.produtividade,
            self.impacto,
            self.inovacao,
        ])
    }
}

/// Partial update for a deliverables evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct DeliverablesEvaluationPatch {
    /// New quality score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub qualidade: Option<i32>,
    /// New deadline score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub prazo: Option<i32>,
    /// New productivity score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub produtividade: Option<i32>,
    /// New impact score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub impacto: Option<i32>,
    /// New innovation score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub inovacao: Option<i32>,
    /// New remarks; `null` clears them.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub comentarios: Option<Option<String>>,
    /// New status.
    pub status: Option<EvaluationStatus>,
}

impl DeliverablesEvaluationPatch {
    /// Apply the supplied fields, then refresh the average and `atualizado_em`.
    pub fn apply(&self, evaluation: &mut DeliverablesEvaluation) {
        if let Some(v) = self.qualidade {
            evaluation.qualidade = v;
        }
        if let Some(v) = self.prazo {
            evaluation.prazo = v;
        }
        if let Some(v) = self.produtividade {
            evaluation.produtividade = v;
        }
        if let Some(v) = self.impacto {
            evaluation.impacto = v;
        }
        if let Some(v) = self.inovacao {
            evaluation.inovacao = v;
        }
        if let Some(comentarios) = &self.comentarios {
            evaluation.comentarios = comentarios.clone();
        }
        if let Some(status) = self.status {
            evaluation.status = status;
        }
        evaluation.recompute_average();
        evaluation.atualizado_em = Utc::now();
    }
}
