//! Behavioral and deliverables evaluation entities.

pub mod behavioral;
pub mod deliverables;
pub mod kind;
pub mod status;

use serde::{Deserialize, Serialize};

pub use behavioral::{BehavioralEvaluation, BehavioralEvaluationPatch, NewBehavioralEvaluation};
pub use deliverables::{
    DeliverablesEvaluation, DeliverablesEvaluationPatch, NewDeliverablesEvaluation,
};
pub use kind::EvaluationType;
pub use status::EvaluationStatus;

/// Columns shared by both evaluation tracks.
pub trait Evaluation {
    /// Cycle the evaluation belongs to.
    fn ciclo_id(&self) -> i32;
    /// Evaluated employee.
    fn avaliado_matricula(&self) -> &str;
    /// Evaluating employee.
    fn avaliador_matricula(&self) -> &str;
    /// Workflow status.
    fn status(&self) -> EvaluationStatus;
    /// Rounded mean of the five scores.
    fn average(&self) -> f64;
}

/// Listing filter shared by both evaluation tracks. Unset fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationFilter {
    /// Restrict to one cycle.
    pub ciclo_id: Option<i32>,
    /// Restrict to one evaluated employee.
    pub avaliado_matricula: Option<String>,
    /// Restrict to one evaluator.
    pub avaliador_matricula: Option<String>,
    /// Restrict to one status.
    #[serde(alias = "status_avaliacao")]
    pub status: Option<EvaluationStatus>,
}

impl EvaluationFilter {
    /// Whether `evaluation` passes this filter.
    pub fn matches<E: Evaluation>(&self, evaluation: &E) -> bool {
        self.ciclo_id.is_none_or(|id| evaluation.ciclo_id() == id)
            && self
                .avaliado_matricula
                .as_deref()
                .is_none_or(|m| evaluation.avaliado_matricula() == m)
            && self
                .avaliador_matricula
                .as_deref()
                .is_none_or(|m| evaluation.avaliador_matricula() == m)
            && self.status.is_none_or(|s| evaluation.status() == s)
    }
}
