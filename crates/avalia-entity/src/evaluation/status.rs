//! Evaluation workflow status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow status shared by behavioral and deliverables evaluations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "avaliacao_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    /// Not started.
    #[default]
    Pendente,
    /// Draft in progress.
    EmAndamento,
    /// Submitted; no further completion allowed.
    Concluida,
}

impl EvaluationStatus {
    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendente => "pendente",
            Self::EmAndamento => "em_andamento",
            Self::Concluida => "concluida",
        }
    }

    /// Whether the evaluation has been completed.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Concluida)
    }
}

impl fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EvaluationStatus {
    type Err = avalia_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pendente" => Ok(Self::Pendente),
            "em_andamento" => Ok(Self::EmAndamento),
            "concluida" => Ok(Self::Concluida),
            _ => Err(avalia_core::AppError::validation(format!(
                "Invalid evaluation status: '{s}'. Expected one of: pendente, em_andamento, concluida"
            ))),
        }
    }
}
