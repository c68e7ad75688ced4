//! Behavioral evaluation handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use avalia_entity::{
    BehavioralEvaluation, BehavioralEvaluationPatch, EvaluationFilter, NewBehavioralEvaluation,
};

use crate::dto::response::EvaluationDeletedResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, CycleScope, JsonBody, PaginationParams, QueryParams};
use crate::state::AppState;

/// GET /api/avaliacoes
pub async fn list_evaluations(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(page): QueryParams<PaginationParams>,
    QueryParams(filter): QueryParams<EvaluationFilter>,
) -> ApiResult<Json<Vec<BehavioralEvaluation>>> {
    let evaluations = state
        .behavioral_service
        .list(&filter, page.into_page_request())
        .await?;
    Ok(Json(evaluations))
}

/// GET /api/avaliacoes/minhas
pub async fn my_evaluations(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(page): QueryParams<PaginationParams>,
    QueryParams(scope): QueryParams<CycleScope>,
) -> ApiResult<Json<Vec<BehavioralEvaluation>>> {
    let evaluations = state
        .behavioral_service
        .mine(&auth, scope.ciclo_id, page.into_page_request())
        .await?;
    Ok(Json(evaluations))
}

/// GET /api/avaliacoes/pendentes
pub async fn pending_evaluations(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(page): QueryParams<PaginationParams>,
    QueryParams(scope): QueryParams<CycleScope>,
) -> ApiResult<Json<Vec<BehavioralEvaluation>>> {
    let evaluations = state
        .behavioral_service
        .pending(&auth, scope.ciclo_id, page.into_page_request())
        .await?;
    Ok(Json(evaluations))
}

/// GET /api/avaliacoes/{id}
pub async fn get_evaluation(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<BehavioralEvaluation>> {
    Ok(Json(state.behavioral_service.get(id).await?))
}

/// POST /api/avaliacoes
pub async fn create_evaluation(
    State(state): State<AppState>,
    _auth: AuthUser,
    JsonBody(req): JsonBody<NewBehavioralEvaluation>,
) -> ApiResult<(StatusCode, Json<BehavioralEvaluation>)> {
    let evaluation = state.behavioral_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(evaluation)))
}

/// PUT /api/avaliacoes/{id}
pub async fn update_evaluation(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
    JsonBody(patch): JsonBody<BehavioralEvaluationPatch>,
) -> ApiResult<Json<BehavioralEvaluation>> {
    Ok(Json(state.behavioral_service.update(id, patch).await?))
}

/// POST /api/avaliacoes/{id}/concluir
pub async fn complete_evaluation(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<BehavioralEvaluation>> {
    Ok(Json(state.behavioral_service.complete(id).await?))
}

/// DELETE /api/avaliacoes/{id}
pub async fn delete_evaluation(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<EvaluationDeletedResponse>> {
    state.behavioral_service.delete(id).await?;
    Ok(Json(EvaluationDeletedResponse {
        message: "Avaliação deletada com sucesso".to_string(),
        avaliacao_id: id,
    }))
}
