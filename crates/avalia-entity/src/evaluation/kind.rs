//! Behavioral evaluation type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who evaluates whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "tipo_avaliacao", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EvaluationType {
    /// Self-assessment.
    Autoavaliacao,
    /// Manager assessing a direct report.
    AvaliacaoGestor,
    /// Peer assessment.
    AvaliacaoPar,
}

impl EvaluationType {
    /// Return the type as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Autoavaliacao => "autoavaliacao",
            Self::AvaliacaoGestor => "avaliacao_gestor",
            Self::AvaliacaoPar => "avaliacao_par",
        }
    }
}

impl fmt::Display for EvaluationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EvaluationType {
    type Err = avalia_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "autoavaliacao" => Ok(Self::Autoavaliacao),
            "avaliacao_gestor" => Ok(Self::AvaliacaoGestor),
            "avaliacao_par" => Ok(Self::AvaliacaoPar),
            _ => Err(avalia_core::AppError::validation(format!(
                "Invalid evaluation type: '{s}'. Expected one of: autoavaliacao, avaliacao_gestor, avaliacao_par"
            ))),
        }
    }
}
