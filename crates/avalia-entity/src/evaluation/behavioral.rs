//! Behavioral (competency) evaluation model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use avalia_core::types::deserialize_some;

use super::kind::EvaluationType;
use super::status::EvaluationStatus;
use super::Evaluation;
use crate::score::{MAX_SCORE, MIN_SCORE, score_average};

/// Competency scores given by one employee to another within a cycle.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BehavioralEvaluation {
    /// Surrogate key.
    pub id: i32,
    /// Cycle reference.
    pub ciclo_id: i32,
    /// Evaluated employee.
    pub avaliado_matricula: String,
    /// Evaluator.
    pub avaliador_matricula: String,
    /// Relationship between evaluator and evaluated.
    pub tipo_avaliacao: EvaluationType,
    /// Leadership score (1-5).
    pub lideranca: i32,
    /// Communication score (1-5).
    pub comunicacao: i32,
    /// Teamwork score (1-5).
    pub trabalho_equipe: i32,
    /// Problem-solving score (1-5).
    pub resolucao_problemas: i32,
    /// Adaptability score (1-5).
    pub adaptabilidade: i32,
    /// Mean of the five scores, rounded to two decimals.
    pub media_competencias: f64,
    /// Free-form remarks.
    pub comentarios: Option<String>,
    /// Workflow status.
    pub status: EvaluationStatus,
    /// When the evaluation was created.
    pub criado_em: DateTime<Utc>,
    /// When the evaluation was last updated.
    pub atualizado_em: DateTime<Utc>,
}

impl BehavioralEvaluation {
    /// The five competency scores in a fixed order.
    pub fn scores(&self) -> [i32; 5] {
        [
            self.lideranca,
            self.comunicacao,
            self.trabalho_equipe,
            self.resolucao_problemas,
            self.adaptabilidade,
        ]
    }

    /// Recompute the derived average from the current scores.
    pub fn recompute_average(&mut self) {
        self.media_competencias = score_average(&self.scores());
    }
}

impl Evaluation for BehavioralEvaluation {
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
        self.media_competencias
    }
}

/// Input for recording a behavioral evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewBehavioralEvaluation {
    /// Cycle reference.
    pub ciclo_id: i32,
    /// Evaluated employee.
    #[validate(length(min = 1, max = 50))]
    pub avaliado_matricula: String,
    /// Evaluator.
    #[validate(length(min = 1, max = 50))]
    pub avaliador_matricula: String,
    /// Relationship between evaluator and evaluated.
    pub tipo_avaliacao: EvaluationType,
    /// Leadership score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub lideranca: i32,
    /// Communication score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub comunicacao: i32,
    /// Teamwork score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub trabalho_equipe: i32,
    /// Problem-solving score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub resolucao_problemas: i32,
    /// Adaptability score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub adaptabilidade: i32,
    /// Free-form remarks.
    #[serde(default)]
    pub comentarios: Option<String>,
}

impl NewBehavioralEvaluation {
    /// Rounded mean of the submitted scores.
    pub fn media_competencias(&self) -> f64 {
        score_average(&[
            self.lideranca,
            self.comunicacao,
            self.trabalho_equipe,
            self.resolucao_problemas,
            self.adaptabilidade,
        ])
    }
}

/// Partial update for a behavioral evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BehavioralEvaluationPatch {
    /// New leadership score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub lideranca: Option<i32>,
    /// New communication score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub comunicacao: Option<i32>,
    /// New teamwork score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub trabalho_equipe: Option<i32>,
    /// New problem-solving score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub resolucao_problemas: Option<i32>,
    /// New adaptability score.
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub adaptabilidade: Option<i32>,
    /// New remarks; `null` clears them.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub comentarios: Option<Option<String>>,
    /// New status.
    pub status: Option<EvaluationStatus>,
}

impl BehavioralEvaluationPatch {
    /// Apply the supplied fields, then refresh the average and `atualizado_em`.
    pub fn apply(&self, evaluation: &mut BehavioralEvaluation) {
        if let Some(v) = self.lideranca {
            evaluation.lideranca = v;
        }
        if let Some(v) = self.comunicacao {
            evaluation.comunicacao = v;
        }
        if let Some(v) = self.trabalho_equipe {
            evaluation.trabalho_equipe = v;
        }
        if let Some(v) = self.resolucao_problemas {
            evaluation.resolucao_problemas = v;
        }
        if let Some(v) = self.adaptabilidade {
            evaluation.adaptabilidade = v;
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
