//! Auth handlers: OAuth2 token endpoint and JSON login.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{LoginRequest, TokenForm};
use crate::dto::response::{LoginResponse, TokenResponse};
use crate::error::ApiResult;
use crate::extractors::{FormBody, JsonBody};
use crate::state::AppState;

/// POST /api/auth/token
pub async fn token(
    State(state): State<AppState>,
    FormBody(form): FormBody<TokenForm>,
) -> ApiResult<Json<TokenResponse>> {
    let result = state
        .session_issuer
        .login(&form.username, &form.password)
        .await?;
    Ok(Json(result.into()))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let result = state.session_issuer.login(&req.matricula, &req.senha).await?;
    Ok(Json(result.into()))
}
