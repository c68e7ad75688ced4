//! Cycle status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage of a review cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "ciclo_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CycleStatus {
    /// Being prepared; evaluations not open yet.
    #[default]
    Planejamento,
    /// The running cycle.
    EmAndamento,
    /// Closed.
    Finalizado,
}

impl CycleStatus {
    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planejamento => "planejamento",
            Self::EmAndamento => "em_andamento",
            Self::Finalizado => "finalizado",
        }
    }
}

impl fmt::Display for CycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CycleStatus {
    type Err = avalia_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planejamento" => Ok(Self::Planejamento),
            "em_andamento" => Ok(Self::EmAndamento),
            "finalizado" => Ok(Self::Finalizado),
            _ => Err(avalia_core::AppError::validation(format!(
                "Invalid cycle status: '{s}'. Expected one of: planejamento, em_andamento, finalizado"
            ))),
        }
    }
}
