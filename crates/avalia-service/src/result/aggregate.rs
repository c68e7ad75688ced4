//! Final-score arithmetic.

use serde::Serialize;

use avalia_core::error::AppError;
use avalia_core::result::AppResult;
use avalia_entity::score::{mean, round2};

/// Category means and the final score, each rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinalScore {
    pub media_comportamental: f64,
    pub media_entregas: f64,
    pub nota_final: f64,
}

/// Combine per-evaluation averages of both tracks into a final score.
///
/// Fails with `NotFound` when either track has no contributing evaluation.
pub fn aggregate_final_score(behavioral: &[f64], deliverables: &[f64]) -> AppResult<FinalScore> {
    let missing = || AppError::not_found("Avaliações não encontradas para este colaborador e ciclo");
    let media_comportamental = mean(behavioral).ok_or_else(missing)?;
    let media_entregas = mean(deliverables).ok_or_else(missing)?;

    Ok(FinalScore {
        media_comportamental: round2(media_comportamental),
        media_entregas: round2(media_entregas),
        nota_final: round2((media_comportamental + media_entregas) / 2.0),
    })
}
