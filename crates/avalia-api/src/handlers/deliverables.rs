//! Deliverables evaluation handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use avalia_entity::{
    DeliverablesEvaluation, DeliverablesEvaluationPatch, EvaluationFilter, NewDeliverablesEvaluation,
};

use crate::dto::response::EvaluationDeletedResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, CycleScope, JsonBody, PaginationParams, QueryParams};
use crate::state::AppState;

/// GET /api/entregas
pub async fn list_deliverables(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(page): QueryParams<PaginationParams>,
    QueryParams(filter): QueryParams<EvaluationFilter>,
) -> ApiResult<Json<Vec<DeliverablesEvaluation>>> {
    let evaluations = state
        .deliverables_service
        .list(&filter, page.into_page_request())
        .await?;
    Ok(Json(evaluations))
}

/// GET /api/entregas/minhas
pub async fn my_deliverables(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(page): QueryParams<PaginationParams>,
    QueryParams(scope): QueryParams<CycleScope>,
) -> ApiResult<Json<Vec<DeliverablesEvaluation>>> {
    let evaluations = state
        .deliverables_service
        .mine(&auth, scope.ciclo_id, page.into_page_request())
        .await?;
    Ok(Json(evaluations))
}

/// GET /api/entregas/{id}
pub async fn get_deliverables(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<DeliverablesEvaluation>> {
    Ok(Json(state.deliverables_service.get(id).await?))
}

/// POST /api/entregas
pub async fn create_deliverables(
    State(state): State<AppState>,
    _auth: AuthUser,
    JsonBody(req): JsonBody<NewDeliverablesEvaluation>,
) -> ApiResult<(StatusCode, Json<DeliverablesEvaluation>)> {
    let evaluation = state.deliverables_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(evaluation)))
}

/// PUT /api/entregas/{id}
pub async fn update_deliverables(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
    JsonBody(patch): JsonBody<DeliverablesEvaluationPatch>,
) -> ApiResult<Json<DeliverablesEvaluation>> {
    Ok(Json(state.deliverables_service.update(id, patch).await?))
}

/// POST /api/entregas/{id}/concluir
pub async fn complete_deliverables(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<DeliverablesEvaluation>> {
    Ok(Json(state.deliverables_service.complete(id).await?))
}

/// DELETE /api/entregas/{id}
pub async fn delete_deliverables(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<EvaluationDeletedResponse>> {
    state.deliverables_service.delete(id).await?;
    Ok(Json(EvaluationDeletedResponse {
        message: "Avaliação deletada com sucesso".to_string(),
        avaliacao_id: id,
    }))
}
