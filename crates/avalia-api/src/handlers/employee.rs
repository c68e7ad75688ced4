//! Employee handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use avalia_entity::{Employee, EmployeeFilter, EmployeePatch, NewEmployee};

use crate::dto::response::DeactivateResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, JsonBody, PaginationParams, QueryParams};
use crate::state::AppState;

/// GET /api/colaboradores
pub async fn list_employees(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(page): QueryParams<PaginationParams>,
    QueryParams(filter): QueryParams<EmployeeFilter>,
) -> ApiResult<Json<Vec<Employee>>> {
    let employees = state
        .employee_service
        .list(filter, page.into_page_request())
        .await?;
    Ok(Json(employees))
}

/// GET /api/colaboradores/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> Json<Employee> {
    Json(state.employee_service.me(&auth))
}

/// GET /api/colaboradores/{matricula}
pub async fn get_employee(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(matricula): Path<String>,
) -> ApiResult<Json<Employee>> {
    Ok(Json(state.employee_service.get(&matricula).await?))
}

/// POST /api/colaboradores
pub async fn create_employee(
    State(state): State<AppState>,
    _auth: AuthUser,
    JsonBody(req): JsonBody<NewEmployee>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let employee = state.employee_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// PUT /api/colaboradores/{matricula}
pub async fn update_employee(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(matricula): Path<String>,
    JsonBody(patch): JsonBody<EmployeePatch>,
) -> ApiResult<Json<Employee>> {
    Ok(Json(state.employee_service.update(&matricula, patch).await?))
}

/// DELETE /api/colaboradores/{matricula}
pub async fn deactivate_employee(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(matricula): Path<String>,
) -> ApiResult<Json<DeactivateResponse>> {
    let employee = state.employee_service.deactivate(&matricula).await?;
    Ok(Json(employee.into()))
}

/// GET /api/colaboradores/{matricula}/subordinados
pub async fn subordinates(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(matricula): Path<String>,
    QueryParams(filter): QueryParams<EmployeeFilter>,
) -> ApiResult<Json<Vec<Employee>>> {
    Ok(Json(
        state
            .employee_service
            .subordinates(&matricula, filter)
            .await?,
    ))
}

/// GET /api/colaboradores/{matricula}/gestor
pub async fn manager(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(matricula): Path<String>,
) -> ApiResult<Json<Employee>> {
    Ok(Json(state.employee_service.manager(&matricula).await?))
}
