//! Review cycle handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use avalia_entity::{Cycle, CyclePatch, NewCycle};

use crate::dto::response::CycleDeletedResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, JsonBody, PaginationParams, QueryParams};
use crate::state::AppState;

/// GET /api/ciclos
pub async fn list_cycles(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(page): QueryParams<PaginationParams>,
) -> ApiResult<Json<Vec<Cycle>>> {
    Ok(Json(
        state.cycle_service.list(page.into_page_request()).await?,
    ))
}

/// GET /api/ciclos/ativo
pub async fn active_cycle(State(state): State<AppState>, _auth: AuthUser) -> ApiResult<Json<Cycle>> {
    Ok(Json(state.cycle_service.active().await?))
}

/// GET /api/ciclos/{id}
pub async fn get_cycle(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<Cycle>> {
    Ok(Json(state.cycle_service.get(id).await?))
}

/// POST /api/ciclos
pub async fn create_cycle(
    State(state): State<AppState>,
    _auth: AuthUser,
    JsonBody(req): JsonBody<NewCycle>,
) -> ApiResult<(StatusCode, Json<Cycle>)> {
    let cycle = state.cycle_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(cycle)))
}

/// PUT /api/ciclos/{id}
pub async fn update_cycle(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
    JsonBody(patch): JsonBody<CyclePatch>,
) -> ApiResult<Json<Cycle>> {
    Ok(Json(state.cycle_service.update(id, patch).await?))
}

/// DELETE /api/ciclos/{id}
pub async fn delete_cycle(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<CycleDeletedResponse>> {
    state.cycle_service.delete(id).await?;
    Ok(Json(CycleDeletedResponse {
        message: "Ciclo deletado com sucesso".to_string(),
        ciclo_id: id,
    }))
}
