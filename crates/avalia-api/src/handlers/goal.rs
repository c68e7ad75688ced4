//! Goal handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use avalia_entity::{Goal, GoalFilter, GoalPatch, NewGoal};

use crate::dto::response::GoalDeletedResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, CycleScope, JsonBody, PaginationParams, QueryParams};
use crate::state::AppState;

/// GET /api/metas
pub async fn list_goals(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(page): QueryParams<PaginationParams>,
    QueryParams(filter): QueryParams<GoalFilter>,
) -> ApiResult<Json<Vec<Goal>>> {
    Ok(Json(
        state
            .goal_service
            .list(&filter, page.into_page_request())
            .await?,
    ))
}

/// GET /api/metas/minhas
pub async fn my_goals(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(page): QueryParams<PaginationParams>,
    QueryParams(scope): QueryParams<CycleScope>,
) -> ApiResult<Json<Vec<Goal>>> {
    Ok(Json(
        state
            .goal_service
            .mine(&auth, scope.ciclo_id, page.into_page_request())
            .await?,
    ))
}

/// GET /api/metas/{id}
pub async fn get_goal(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<Goal>> {
    Ok(Json(state.goal_service.get(id).await?))
}

/// POST /api/metas
pub async fn create_goal(
    State(state): State<AppState>,
    _auth: AuthUser,
    JsonBody(req): JsonBody<NewGoal>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let goal = state.goal_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

/// PUT /api/metas/{id}
pub async fn update_goal(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
    JsonBody(patch): JsonBody<GoalPatch>,
) -> ApiResult<Json<Goal>> {
    Ok(Json(state.goal_service.update(id, patch).await?))
}

/// DELETE /api/metas/{id}
pub async fn delete_goal(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<GoalDeletedResponse>> {
    state.goal_service.delete(id).await?;
    Ok(Json(GoalDeletedResponse {
        message: "Meta deletada com sucesso".to_string(),
        meta_id: id,
    }))
}
