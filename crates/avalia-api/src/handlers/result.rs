//! Final result handler.

use axum::Json;
use axum::extract::{Path, State};

use avalia_service::FinalResult;

use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/resultados/colaborador/{matricula}/ciclo/{ciclo_id}
pub async fn final_result(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((matricula, ciclo_id)): Path<(String, i32)>,
) -> ApiResult<Json<FinalResult>> {
    let result = state
        .result_service
        .final_result(&auth, &matricula, ciclo_id)
        .await?;
    Ok(Json(result))
}
